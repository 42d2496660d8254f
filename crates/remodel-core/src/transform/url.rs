//! URLs as strings
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::Transform;
use serde_json::Value;
use url::Url;

/// Converts between [`Url`] and its string form.
///
/// Parsing goes through the WHATWG URL parser, which percent-encodes
/// code points the grammar requires encoded (a space in a path becomes
/// `%20`), so lightly malformed strings from real-world payloads are
/// absorbed rather than rejected. Serialization writes the normalized
/// string form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlTransform;

impl Transform for UrlTransform {
    type Object = Url;

    fn from_json(&self, value: &Value) -> Option<Url> {
        Url::parse(value.as_str()?).ok()
    }

    fn to_json(&self, object: &Url) -> Option<Value> {
        Some(Value::String(object.as_str().to_string()))
    }
}
