//! Deserialization driver
//!
//! Orchestrates one JSON-to-model conversion: resolve the designated
//! path when given, run the model's `customize_mapping` hook, then walk
//! the field table applying the rule precedence: excluded fields are
//! skipped, bound fields look up their alternate paths only (no name
//! fallback), unbound fields look up their own name, and conversion goes
//! through the rule's closure when present, otherwise through the
//! declared type's classification. Field-level failures leave the
//! default value; only structural problems are errors.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::error::{Error, Result};
use crate::keypath::KeyPath;
use crate::model::{registry, Mappable, Mapper, MappingRule};
use crate::value::{self, kind_name};
use crate::mapping::trace::{MappingTrace, MissReason};
use serde_json::Value;

/// Deserialize a model from a parsed JSON object value.
pub fn from_value<T: Mappable>(root: &Value) -> Result<T> {
    expect_object(root)?;
    Ok(map_object(root, None))
}

/// Deserialize a model, recording every absorbed field-level failure.
pub fn from_value_traced<T: Mappable>(root: &Value) -> Result<(T, MappingTrace)> {
    expect_object(root)?;
    let mut trace = MappingTrace::new();
    let instance = map_object(root, Some(&mut trace));
    Ok((instance, trace))
}

/// Deserialize a model from the sub-object at `designated_path`.
///
/// A path that does not resolve fails the whole call; the empty path
/// designates the root itself.
pub fn from_value_at<T: Mappable>(root: &Value, designated_path: &str) -> Result<T> {
    from_value(resolve_designated(root, designated_path)?)
}

/// Deserialize a model from JSON text.
pub fn from_str<T: Mappable>(text: &str) -> Result<T> {
    from_value(&value::parse(text)?)
}

/// Deserialize a model from the sub-object at `designated_path` of the
/// parsed text.
pub fn from_str_at<T: Mappable>(text: &str, designated_path: &str) -> Result<T> {
    from_value_at(&value::parse(text)?, designated_path)
}

/// Deserialize a JSON array into one model per element.
///
/// Elements degrade independently: an element that is not an object, or
/// whose present values fail to convert, becomes a `None` slot; the
/// batch itself never aborts.
pub fn vec_from_value<T: Mappable>(root: &Value) -> Result<Vec<Option<T>>> {
    let items = root.as_array().ok_or_else(|| Error::UnexpectedShape {
        expected: "array",
        found: kind_name(root),
    })?;
    Ok(items.iter().map(element_from_value).collect())
}

/// Batch deserialization from the array at `designated_path`.
pub fn vec_from_value_at<T: Mappable>(root: &Value, designated_path: &str) -> Result<Vec<Option<T>>> {
    vec_from_value(resolve_designated(root, designated_path)?)
}

/// Batch deserialization from JSON text.
pub fn vec_from_str<T: Mappable>(text: &str) -> Result<Vec<Option<T>>> {
    vec_from_value(&value::parse(text)?)
}

/// Re-map an existing instance from a parsed JSON object value.
///
/// Runs the same field loop as [`from_value`] over the given instance:
/// fields present in the input are reassigned, everything else keeps its
/// current value. The `after_mapping` hook is not re-run.
pub fn update_from_value<T: Mappable>(instance: &mut T, root: &Value) -> Result<()> {
    expect_object(root)?;
    apply_fields(instance, root, None);
    Ok(())
}

/// Re-map an existing instance from the sub-object at `designated_path`
/// of the parsed text.
pub fn update_from_str<T: Mappable>(instance: &mut T, text: &str, designated_path: &str) -> Result<()> {
    let root = value::parse(text)?;
    update_from_value(instance, resolve_designated(&root, designated_path)?)
}

fn expect_object(root: &Value) -> Result<()> {
    if root.is_object() {
        Ok(())
    } else {
        Err(Error::UnexpectedShape {
            expected: "object",
            found: kind_name(root),
        })
    }
}

fn resolve_designated<'a>(root: &'a Value, designated_path: &str) -> Result<&'a Value> {
    KeyPath::parse(designated_path)
        .resolve(root)
        .ok_or_else(|| Error::PathNotFound {
            path: designated_path.to_string(),
        })
}

fn element_from_value<T: Mappable>(element: &Value) -> Option<T> {
    if !element.is_object() {
        return None;
    }
    let mut trace = MappingTrace::new();
    let instance = map_object(element, Some(&mut trace));
    if trace.has_conversion_failures() {
        None
    } else {
        Some(instance)
    }
}

/// The shared conversion core. `root` must be an object.
pub(crate) fn map_object<T: Mappable>(root: &Value, trace: Option<&mut MappingTrace>) -> T {
    let mut instance = T::default();
    let mut mapper = Mapper::new();
    instance.customize_mapping(&mut mapper);
    apply_fields_with(&mut instance, root, &mapper, trace);
    instance.after_mapping();
    instance
}

fn apply_fields<T: Mappable>(instance: &mut T, root: &Value, trace: Option<&mut MappingTrace>) {
    let mut mapper = Mapper::new();
    instance.customize_mapping(&mut mapper);
    apply_fields_with(instance, root, &mapper, trace);
}

fn apply_fields_with<T: Mappable>(
    instance: &mut T,
    root: &Value,
    mapper: &Mapper,
    mut trace: Option<&mut MappingTrace>,
) {
    let table = registry::field_table::<T>();
    for field in table.iter() {
        let rule = mapper.rule(field.name());
        if rule.is_some_and(MappingRule::is_excluded) {
            continue;
        }

        let raw = match lookup_raw(root, field.name(), rule) {
            Ok(raw) => raw,
            Err(reason) => {
                if let Some(trace) = trace.as_deref_mut() {
                    trace.record(field.name(), reason);
                }
                continue;
            }
        };

        let assigned = match rule.and_then(MappingRule::from_json_fn) {
            Some(custom) => custom(raw)
                .map(|converted| field.assign(instance, converted))
                .unwrap_or(false),
            None => field.apply(instance, raw),
        };

        if !assigned {
            log::debug!(
                "field `{}` kept its default: {} value did not convert",
                field.name(),
                kind_name(raw)
            );
            if let Some(trace) = trace.as_deref_mut() {
                let reason = if raw.is_null() {
                    MissReason::NullValue
                } else {
                    MissReason::Conversion
                };
                trace.record(field.name(), reason);
            }
        }
    }
}

/// Find the raw value for one field. Bound fields try their alternate
/// paths in order and do not fall back to name lookup.
fn lookup_raw<'a>(
    root: &'a Value,
    name: &str,
    rule: Option<&MappingRule>,
) -> std::result::Result<&'a Value, MissReason> {
    if let Some(rule) = rule {
        let paths = rule.lookup_paths();
        if !paths.is_empty() {
            return paths
                .iter()
                .find_map(|path| path.resolve(root))
                .ok_or(MissReason::PathNotFound);
        }
    }
    root.get(name).ok_or(MissReason::MissingKey)
}
