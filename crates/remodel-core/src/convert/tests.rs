//! Tests for the classification and coercion rules

use super::Transformable;
use serde_json::json;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

#[test]
fn test_int_passthrough_and_coercion() {
    assert_eq!(i64::from_value(&json!(34)), Some(34));
    assert_eq!(i64::from_value(&json!("34")), Some(34));
    assert_eq!(i64::from_value(&json!(true)), Some(1));
    assert_eq!(i64::from_value(&json!(3.9)), Some(3), "doubles truncate toward zero");
    assert_eq!(i64::from_value(&json!(-3.9)), Some(-3));
    assert_eq!(i64::from_value(&json!("34.5")), None, "non-integral strings do not coerce");
    assert_eq!(i64::from_value(&json!("x")), None);
    assert_eq!(i64::from_value(&json!(null)), None);
    assert_eq!(i64::from_value(&json!([1])), None);
}

#[test]
fn test_int_range_checks() {
    assert_eq!(u8::from_value(&json!(255)), Some(255));
    assert_eq!(u8::from_value(&json!(256)), None);
    assert_eq!(u8::from_value(&json!(-1)), None);
    assert_eq!(i8::from_value(&json!(-128)), Some(-128));
    assert_eq!(i8::from_value(&json!(1e20)), None);
    assert_eq!(u64::from_value(&json!(u64::MAX)), Some(u64::MAX));
}

#[test]
fn test_float_coercion() {
    assert_eq!(f64::from_value(&json!("0.25")), Some(0.25));
    assert_eq!(f64::from_value(&json!(4)), Some(4.0));
    assert_eq!(f32::from_value(&json!(false)), Some(0.0));
    assert_eq!(f64::from_value(&json!("nope")), None);
    // NaN has no JSON representation.
    assert_eq!(f64::NAN.to_value(), None);
}

#[test]
fn test_bool_canonical_literals() {
    for raw in ["true", "TRUE", "True", "1"] {
        assert_eq!(bool::from_value(&json!(raw)), Some(true), "{raw}");
    }
    for raw in ["false", "FALSE", "False", "0"] {
        assert_eq!(bool::from_value(&json!(raw)), Some(false), "{raw}");
    }
    assert_eq!(bool::from_value(&json!("yes")), None);
    assert_eq!(bool::from_value(&json!("")), None);
    assert_eq!(bool::from_value(&json!(2)), Some(true));
    assert_eq!(bool::from_value(&json!(0)), Some(false));
}

#[test]
fn test_string_coercion() {
    assert_eq!(String::from_value(&json!("Ann")), Some("Ann".to_string()));
    assert_eq!(String::from_value(&json!(34)), Some("34".to_string()));
    assert_eq!(String::from_value(&json!(0.5)), Some("0.5".to_string()));
    assert_eq!(String::from_value(&json!(true)), Some("true".to_string()));
    assert_eq!(String::from_value(&json!(null)), None);
    assert_eq!(String::from_value(&json!({"a": 1})), None);
    assert_eq!(String::from_value(&json!([1, 2])), None);
}

#[test]
fn test_char() {
    assert_eq!(char::from_value(&json!("x")), Some('x'));
    assert_eq!(char::from_value(&json!("xy")), None);
    assert_eq!(char::from_value(&json!("")), None);
    assert_eq!('x'.to_value(), Some(json!("x")));
}

#[test]
fn test_bridged_wrappers() {
    assert_eq!(Box::<i64>::from_value(&json!("7")), Some(Box::new(7)));
    assert_eq!(Arc::<String>::from_value(&json!(1)), Some(Arc::new("1".to_string())));
    let cow: Option<Cow<'static, str>> = Transformable::from_value(&json!("text"));
    assert_eq!(cow, Some(Cow::Owned("text".to_string())));
    assert_eq!(Box::new(5i64).to_value(), Some(json!(5)));
}

#[test]
fn test_option_absorbs_failure_and_maps_null() {
    assert_eq!(Option::<i64>::from_value(&json!(null)), Some(None));
    assert_eq!(Option::<i64>::from_value(&json!(5)), Some(Some(5)));
    assert_eq!(Option::<i64>::from_value(&json!("x")), None);
    assert_eq!(Some(5i64).to_value(), Some(json!(5)));
    assert_eq!(Option::<i64>::None.to_value(), None);
}

#[test]
fn test_vec_drops_failed_elements() {
    let value = json!([1, "2", "x", true, null]);
    assert_eq!(Vec::<i64>::from_value(&value), Some(vec![1, 2, 1]));
    assert_eq!(Vec::<i64>::from_value(&json!({})), None);
    assert_eq!(Vec::<i64>::from_value(&json!([])), Some(vec![]));
}

#[test]
fn test_sets_collect_converted_elements() {
    let set = HashSet::<i64>::from_value(&json!([1, 1, "2"])).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&1) && set.contains(&2));
}

#[test]
fn test_maps_keep_converting_entries() {
    let value = json!({"a": 1, "b": "2", "c": "x"});
    let map = HashMap::<String, i64>::from_value(&value).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], 1);
    assert_eq!(map["b"], 2);

    let map = BTreeMap::<String, String>::from_value(&json!({"k": [1]})).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_datetime_defaults_to_rfc3339() {
    use chrono::{DateTime, TimeZone, Utc};

    let date = DateTime::<Utc>::from_value(&json!("2026-08-07T12:30:00Z"));
    assert_eq!(date, Some(Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 0).unwrap()));
    assert_eq!(date.unwrap().to_value(), Some(json!("2026-08-07T12:30:00Z")));
    assert_eq!(DateTime::<Utc>::from_value(&json!("yesterday")), None);
}

#[test]
fn test_url_default_conversion() {
    use url::Url;

    let parsed = Url::from_value(&json!("https://example.com/x")).unwrap();
    assert_eq!(parsed.to_value(), Some(json!("https://example.com/x")));
    assert_eq!(Url::from_value(&json!(5)), None);
}

#[test]
fn test_nested_containers() {
    let value = json!([[1, 2], ["3", "x"]]);
    assert_eq!(
        Vec::<Vec<i64>>::from_value(&value),
        Some(vec![vec![1, 2], vec![3]])
    );

    let out = vec![vec![1i64], vec![]].to_value().unwrap();
    assert_eq!(out, json!([[1], []]));
}
