//! Tests for the built-in transform units

use super::*;
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn test_base64_round_trip() {
    let unit = Base64Transform;
    let bytes = vec![0u8, 1, 2, 250];
    let encoded = unit.to_json(&bytes).unwrap();
    assert_eq!(unit.from_json(&encoded), Some(bytes));
}

#[test]
fn test_base64_absorbs_malformed_input() {
    let unit = Base64Transform;
    assert_eq!(unit.from_json(&json!("not base64!!!")), None);
    assert_eq!(unit.from_json(&json!(42)), None);
}

#[test]
fn test_iso8601_round_trip() {
    let unit = Iso8601DateTransform;
    let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 0).unwrap();
    let encoded = unit.to_json(&date).unwrap();
    assert_eq!(encoded, json!("2026-08-07T12:30:00Z"));
    assert_eq!(unit.from_json(&encoded), Some(date));
}

#[test]
fn test_iso8601_accepts_offsets() {
    let unit = Iso8601DateTransform;
    let parsed = unit.from_json(&json!("2026-08-07T14:30:00+02:00")).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 0).unwrap());
    assert_eq!(unit.from_json(&json!("August 7th")), None);
}

#[test]
fn test_date_format_naive_is_utc() {
    let unit = DateFormatTransform::new("%Y-%m-%d %H:%M:%S");
    let parsed = unit.from_json(&json!("2026-08-07 12:30:00")).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 0).unwrap());
    assert_eq!(unit.to_json(&parsed), Some(json!("2026-08-07 12:30:00")));
}

#[test]
fn test_date_format_with_offset() {
    let unit = DateFormatTransform::new("%Y-%m-%d %H:%M:%S %z");
    let parsed = unit.from_json(&json!("2026-08-07 14:30:00 +0200")).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 0).unwrap());
}

#[test]
fn test_url_parses_and_normalizes() {
    let unit = UrlTransform;
    let parsed = unit.from_json(&json!("https://example.com/a path?q=1")).unwrap();
    assert_eq!(parsed.as_str(), "https://example.com/a%20path?q=1");
    assert_eq!(
        unit.to_json(&parsed),
        Some(json!("https://example.com/a%20path?q=1"))
    );
    assert_eq!(unit.from_json(&json!("not a url")), None);
}

#[test]
fn test_transform_of_closure_pair() {
    // Comma-separated string to a list of trimmed tokens and back.
    let unit = TransformOf::new(
        |value| {
            value
                .as_str()
                .map(|s| s.split(',').map(|t| t.trim().to_string()).collect::<Vec<_>>())
        },
        |tokens: &Vec<String>| Some(json!(tokens.join(","))),
    );
    assert_eq!(
        unit.from_json(&json!("a, b ,c")),
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
    assert_eq!(
        unit.to_json(&vec!["a".to_string(), "b".to_string()]),
        Some(json!("a,b"))
    );
}

#[test]
fn test_optional_adapter() {
    let unit = optional(Base64Transform);
    assert_eq!(unit.from_json(&json!(null)), Some(None));
    assert_eq!(unit.from_json(&json!("AAEC")), Some(Some(vec![0u8, 1, 2])));
    assert_eq!(unit.from_json(&json!("***")), None);
    assert_eq!(unit.to_json(&None), None);
    assert_eq!(unit.to_json(&Some(vec![0u8, 1, 2])), Some(json!("AAEC")));
}

#[test]
fn test_enum_transform_uses_raw_coercion() {
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Level {
        Low,
        High,
    }

    crate::raw_enum!(Level: i64 { Low => 1, High => 2 });

    let unit = EnumTransform::<Level>::new();
    assert_eq!(unit.from_json(&json!(2)), Some(Level::High));
    // Raw coercion applies before case matching: "1" coerces to 1.
    assert_eq!(unit.from_json(&json!("1")), Some(Level::Low));
    assert_eq!(unit.from_json(&json!(3)), None);
    assert_eq!(unit.to_json(&Level::High), Some(json!(2)));
}
