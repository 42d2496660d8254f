//! Property-based round-trip tests
//!
//! For models whose fields all convert by default, serializing and
//! deserializing must reproduce the instance exactly.

use proptest::prelude::*;
use remodel_core::{fields, mapping, Mappable};

#[derive(Default, Clone, Debug, PartialEq)]
struct Sample {
    id: i64,
    label: String,
    ratio: f64,
    enabled: bool,
    counts: Vec<u32>,
    note: Option<String>,
}

fields!(Sample { id, label, ratio, enabled, counts, note });
impl Mappable for Sample {}

fn sample_strategy() -> impl Strategy<Value = Sample> {
    (
        any::<i64>(),
        "[a-zA-Z0-9 ]{0,24}",
        // Finite doubles only: NaN and infinities have no JSON form.
        prop::num::f64::NORMAL | prop::num::f64::ZERO,
        any::<bool>(),
        proptest::collection::vec(any::<u32>(), 0..8),
        proptest::option::of("[a-z]{1,12}"),
    )
        .prop_map(|(id, label, ratio, enabled, counts, note)| Sample {
            id,
            label,
            ratio,
            enabled,
            counts,
            note,
        })
}

proptest! {
    #[test]
    fn round_trip_reproduces_instance(sample in sample_strategy()) {
        let reparsed: Sample = mapping::from_value(&sample.to_json()).unwrap();
        prop_assert_eq!(reparsed, sample);
    }

    #[test]
    fn serialization_is_deterministic(sample in sample_strategy()) {
        prop_assert_eq!(sample.to_json(), sample.to_json());
    }

    #[test]
    fn arbitrary_objects_never_panic(keys in proptest::collection::vec("[a-z]{1,8}", 0..6)) {
        let mut object = serde_json::Map::new();
        for (i, key) in keys.into_iter().enumerate() {
            object.insert(key, serde_json::Value::from(i as u64));
        }
        let _ = mapping::from_value::<Sample>(&serde_json::Value::Object(object));
    }
}
