//! Dates as formatted strings
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::Transform;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Converts between `DateTime<Utc>` and a string in a caller-supplied
/// strftime format.
///
/// Parsing first tries the format with an explicit offset; a format
/// without one is parsed as a naive timestamp and taken to be UTC.
#[derive(Debug, Clone)]
pub struct DateFormatTransform {
    format: String,
}

impl DateFormatTransform {
    pub fn new(format: impl Into<String>) -> Self {
        DateFormatTransform {
            format: format.into(),
        }
    }
}

impl Transform for DateFormatTransform {
    type Object = DateTime<Utc>;

    fn from_json(&self, value: &Value) -> Option<DateTime<Utc>> {
        let text = value.as_str()?;
        DateTime::parse_from_str(text, &self.format)
            .map(|parsed| parsed.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(text, &self.format)
                    .map(|naive| naive.and_utc())
                    .ok()
            })
    }

    fn to_json(&self, object: &DateTime<Utc>) -> Option<Value> {
        Some(Value::String(object.format(&self.format).to_string()))
    }
}

/// Converts between `DateTime<Utc>` and a fixed ISO-8601 (RFC 3339)
/// string with second precision, e.g. `2026-08-07T12:30:00Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601DateTransform;

impl Transform for Iso8601DateTransform {
    type Object = DateTime<Utc>;

    fn from_json(&self, value: &Value) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value.as_str()?)
            .map(|parsed| parsed.with_timezone(&Utc))
            .ok()
    }

    fn to_json(&self, object: &DateTime<Utc>) -> Option<Value> {
        Some(Value::String(
            object.to_rfc3339_opts(SecondsFormat::Secs, true),
        ))
    }
}
