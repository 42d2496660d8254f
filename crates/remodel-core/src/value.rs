//! JSON Value model
//!
//! The engine operates on `serde_json::Value` trees: a recursive tagged
//! union of null, bool, number, string, array and string-keyed object.
//! Parsed trees are treated as immutable; `Null` is distinct from the
//! absence of a key. This module owns the text boundary: parsing input
//! text into a `Value` and writing a `Value` back out, with serde_json
//! failures wrapped into the crate's structural error type.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::error::{Error, Result};

pub use serde_json::{Map, Number, Value};

/// Parse JSON text into a `Value` tree.
pub fn parse(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(Error::parse)
}

/// Write a `Value` tree as compact or pretty-printed JSON text.
pub fn stringify(value: &Value, pretty: bool) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(Error::stringify)
}

/// Short kind name for a value, used in shape errors and trace records.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
