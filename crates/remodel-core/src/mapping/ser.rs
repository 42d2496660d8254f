//! Serialization driver
//!
//! The mirror of the deserializer: walk the same field table, skip
//! excluded fields, write each remaining field under its remapped key
//! (the first bound path's final segment, else the field name), and
//! compute the value through the rule's custom closure when present,
//! otherwise through the declared type's classification. Fields whose
//! value does not flatten are omitted from the output object.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::error::Result;
use crate::model::{registry, Mappable, Mapper, MappingRule};
use crate::value;
use serde_json::{Map, Value};

/// Serialize a model to a JSON object value.
pub fn to_value<T: Mappable>(instance: &T) -> Value {
    let mut mapper = Mapper::new();
    instance.customize_mapping(&mut mapper);

    let table = registry::field_table::<T>();
    let mut output = Map::new();
    for field in table.iter() {
        let rule = mapper.rule(field.name());
        if rule.is_some_and(MappingRule::is_excluded) {
            continue;
        }

        let key = rule
            .and_then(|r| r.lookup_paths().first())
            .and_then(|path| path.last_segment())
            .unwrap_or_else(|| field.name());

        if let Some(custom) = rule.and_then(MappingRule::to_json_fn) {
            // A custom serializer owns the field entirely: when it yields
            // nothing the key is omitted, with no default fallback.
            if let Some(converted) = custom(field.take_raw(instance).as_ref()) {
                output.insert(key.to_string(), converted);
            } else {
                log::debug!("field `{}` omitted: custom serializer yielded nothing", field.name());
            }
            continue;
        }

        if let Some(converted) = field.take(instance) {
            output.insert(key.to_string(), converted);
        }
    }

    Value::Object(output)
}

/// Serialize a model to JSON text.
pub fn to_string<T: Mappable>(instance: &T, pretty: bool) -> Result<String> {
    value::stringify(&to_value(instance), pretty)
}

/// Serialize a slice of models to a JSON array value.
pub fn slice_to_value<T: Mappable>(instances: &[T]) -> Value {
    Value::Array(instances.iter().map(to_value).collect())
}

/// Serialize a slice of models to JSON text.
pub fn slice_to_string<T: Mappable>(instances: &[T], pretty: bool) -> Result<String> {
    value::stringify(&slice_to_value(instances), pretty)
}
