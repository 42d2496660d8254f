//! Default conversions for common ecosystem types
//!
//! Dates and URLs occur in nearly every payload, so they classify out of
//! the box: dates as RFC 3339 strings, URLs through the WHATWG parser.
//! A field that needs a different wire format binds the matching unit
//! from [`crate::transform`] instead.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::Transformable;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use url::Url;

impl Transformable for DateTime<Utc> {
    fn from_value(value: &Value) -> Option<Self> {
        DateTime::parse_from_rfc3339(value.as_str()?)
            .map(|parsed| parsed.with_timezone(&Utc))
            .ok()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::String(
            self.to_rfc3339_opts(SecondsFormat::Secs, true),
        ))
    }
}

impl Transformable for Url {
    fn from_value(value: &Value) -> Option<Self> {
        Url::parse(value.as_str()?).ok()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.as_str().to_string()))
    }
}
