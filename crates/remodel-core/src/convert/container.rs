//! Optionals and containers
//!
//! Containers convert element-wise and drop elements that fail; the
//! engine is best-effort, not fail-fast. Optionals absorb inner failures:
//! a wrapped value that cannot convert yields "no value" for the field
//! rather than an error, and JSON `null` converts to an explicit `None`.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::Transformable;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

impl<T: Transformable> Transformable for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(Transformable::to_value)
    }
}

fn elements_from<'a, T: Transformable + 'a>(value: &'a Value) -> Option<impl Iterator<Item = T> + 'a> {
    Some(value.as_array()?.iter().filter_map(T::from_value))
}

fn elements_to<'a, T: Transformable + 'a>(
    items: impl Iterator<Item = &'a T>,
) -> Option<Value> {
    Some(Value::Array(items.filter_map(Transformable::to_value).collect()))
}

impl<T: Transformable> Transformable for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        elements_from(value).map(|elements| elements.collect())
    }

    fn to_value(&self) -> Option<Value> {
        elements_to(self.iter())
    }
}

impl<T: Transformable + Eq + Hash> Transformable for HashSet<T> {
    fn from_value(value: &Value) -> Option<Self> {
        elements_from(value).map(|elements| elements.collect())
    }

    fn to_value(&self) -> Option<Value> {
        elements_to(self.iter())
    }
}

impl<T: Transformable + Ord> Transformable for BTreeSet<T> {
    fn from_value(value: &Value) -> Option<Self> {
        elements_from(value).map(|elements| elements.collect())
    }

    fn to_value(&self) -> Option<Value> {
        elements_to(self.iter())
    }
}

fn entries_from<T: Transformable>(
    value: &Value,
) -> Option<impl Iterator<Item = (String, T)> + '_> {
    Some(
        value
            .as_object()?
            .iter()
            .filter_map(|(k, v)| T::from_value(v).map(|v| (k.clone(), v))),
    )
}

fn entries_to<'a, T: Transformable + 'a>(
    entries: impl Iterator<Item = (&'a String, &'a T)>,
) -> Option<Value> {
    let map: Map<String, Value> = entries
        .filter_map(|(k, v)| v.to_value().map(|v| (k.clone(), v)))
        .collect();
    Some(Value::Object(map))
}

impl<T: Transformable> Transformable for HashMap<String, T> {
    fn from_value(value: &Value) -> Option<Self> {
        entries_from(value).map(|entries| entries.collect())
    }

    fn to_value(&self) -> Option<Value> {
        entries_to(self.iter())
    }
}

impl<T: Transformable> Transformable for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Option<Self> {
        entries_from(value).map(|entries| entries.collect())
    }

    fn to_value(&self) -> Option<Value> {
        entries_to(self.iter())
    }
}
