//! Binary data as base64 strings
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::Transform;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

/// Converts between `Vec<u8>` and a standard-alphabet base64 string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Transform;

impl Transform for Base64Transform {
    type Object = Vec<u8>;

    fn from_json(&self, value: &Value) -> Option<Vec<u8>> {
        STANDARD.decode(value.as_str()?).ok()
    }

    fn to_json(&self, object: &Vec<u8>) -> Option<Value> {
        Some(Value::String(STANDARD.encode(object)))
    }
}
