//! Per-call customization registry
//!
//! A [`Mapper`] lives for exactly one conversion call. The model's
//! `customize_mapping` hook registers [`MappingRule`]s against stable
//! field names; the drivers then consult the rules while walking the
//! field table. Rule precedence per field: excluded > custom transform >
//! alternate paths > default name lookup > type-based conversion.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::keypath::KeyPath;
use crate::transform::Transform;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

type FromJsonFn = Box<dyn Fn(&Value) -> Option<Box<dyn Any>>>;
type ToJsonFn = Box<dyn Fn(&dyn Any) -> Option<Value>>;

/// The declared overrides for one field: alternate lookup paths, custom
/// conversion closures for either direction, or exclusion.
///
/// A rule that supplies only one direction leaves the other on default
/// handling. Conversion closures are type-erased; a mismatch between the
/// closure's value type and the field's declared type is absorbed like
/// any other field-level failure.
#[derive(Default)]
pub struct MappingRule {
    paths: Vec<KeyPath>,
    from_json: Option<FromJsonFn>,
    to_json: Option<ToJsonFn>,
    excluded: bool,
}

impl MappingRule {
    /// Append one alternate lookup path. Expressions that parse to no
    /// segments are ignored, leaving the field on name lookup.
    pub fn path(&mut self, raw: &str) -> &mut Self {
        let path = KeyPath::parse(raw);
        if !path.is_empty() {
            self.paths.push(path);
        }
        self
    }

    /// Append several alternate lookup paths, tried in order.
    pub fn paths<I, S>(&mut self, raws: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in raws {
            self.path(raw.as_ref());
        }
        self
    }

    /// Set a custom from-JSON conversion for this field.
    pub fn from_json<U, F>(&mut self, convert: F) -> &mut Self
    where
        U: 'static,
        F: Fn(&Value) -> Option<U> + 'static,
    {
        self.from_json = Some(Box::new(move |value| {
            convert(value).map(|converted| Box::new(converted) as Box<dyn Any>)
        }));
        self
    }

    /// Set a custom to-JSON conversion for this field.
    pub fn to_json<U, F>(&mut self, convert: F) -> &mut Self
    where
        U: 'static,
        F: Fn(&U) -> Option<Value> + 'static,
    {
        self.to_json = Some(Box::new(move |raw| {
            raw.downcast_ref::<U>().and_then(&convert)
        }));
        self
    }

    /// Bind a [`Transform`] unit, installing both directions at once.
    pub fn with<X>(&mut self, transform: X) -> &mut Self
    where
        X: Transform + 'static,
        X::Object: 'static,
    {
        let transform = Rc::new(transform);
        let from_unit = Rc::clone(&transform);
        self.from_json = Some(Box::new(move |value| {
            from_unit
                .from_json(value)
                .map(|converted| Box::new(converted) as Box<dyn Any>)
        }));
        self.to_json = Some(Box::new(move |raw| {
            raw.downcast_ref::<X::Object>()
                .and_then(|object| transform.to_json(object))
        }));
        self
    }

    pub(crate) fn is_excluded(&self) -> bool {
        self.excluded
    }

    pub(crate) fn lookup_paths(&self) -> &[KeyPath] {
        &self.paths
    }

    pub(crate) fn from_json_fn(&self) -> Option<&FromJsonFn> {
        self.from_json.as_ref()
    }

    pub(crate) fn to_json_fn(&self) -> Option<&ToJsonFn> {
        self.to_json.as_ref()
    }
}

impl std::fmt::Debug for MappingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingRule")
            .field("paths", &self.paths)
            .field("from_json", &self.from_json.is_some())
            .field("to_json", &self.to_json.is_some())
            .field("excluded", &self.excluded)
            .finish()
    }
}

/// Registry of per-field [`MappingRule`]s, scoped to one conversion call.
#[derive(Debug, Default)]
pub struct Mapper {
    rules: HashMap<String, MappingRule>,
}

impl Mapper {
    pub fn new() -> Self {
        Mapper::default()
    }

    /// The rule for `field`, created empty on first access. Chain the
    /// [`MappingRule`] builder methods on the result.
    pub fn bind(&mut self, field: &str) -> &mut MappingRule {
        self.rules.entry(field.to_string()).or_default()
    }

    /// Remove `field` from both conversion directions.
    pub fn exclude(&mut self, field: &str) {
        self.bind(field).excluded = true;
    }

    pub(crate) fn rule(&self, field: &str) -> Option<&MappingRule> {
        self.rules.get(field)
    }
}
