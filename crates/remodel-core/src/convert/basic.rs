//! Basic types: integers, floats, bool, strings
//!
//! Coercion rules, applied after exact passthrough:
//!
//! - integer fields accept base-10 numeric strings, booleans (1/0), and
//!   in-range doubles truncated toward zero;
//! - float fields accept any parseable decimal string and booleans;
//! - bool fields accept the canonical literal set `"true"`, `"false"`,
//!   `"1"`, `"0"` (ASCII case-insensitive) and numbers (nonzero is true);
//! - string fields accept numbers and booleans in their canonical JSON
//!   text form. JSON null never converts; arrays and objects never
//!   stringify.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::Transformable;
use serde_json::{Number, Value};

/// Truncate a finite double toward zero when it fits the target range.
fn double_to_i64(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    // The exact boundary i64::MAX as f64 rounds up past the range.
    if t >= -9_223_372_036_854_775_808.0 && t < 9_223_372_036_854_775_808.0 {
        Some(t as i64)
    } else {
        None
    }
}

fn double_to_u64(f: f64) -> Option<u64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    if t >= 0.0 && t < 18_446_744_073_709_551_616.0 {
        Some(t as u64)
    } else {
        None
    }
}

macro_rules! impl_transformable_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Transformable for $ty {
            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::Number(n) => {
                        if let Some(i) = n.as_i64() {
                            <$ty>::try_from(i).ok()
                        } else if let Some(u) = n.as_u64() {
                            <$ty>::try_from(u).ok()
                        } else {
                            double_to_i64(n.as_f64()?).and_then(|i| <$ty>::try_from(i).ok())
                        }
                    }
                    Value::String(s) => s.parse::<$ty>().ok(),
                    Value::Bool(b) => Some(if *b { 1 } else { 0 }),
                    _ => None,
                }
            }

            fn to_value(&self) -> Option<Value> {
                Some(Value::Number(Number::from(*self as i64)))
            }
        }
    )*};
}

macro_rules! impl_transformable_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Transformable for $ty {
            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::Number(n) => {
                        if let Some(u) = n.as_u64() {
                            <$ty>::try_from(u).ok()
                        } else if let Some(i) = n.as_i64() {
                            u64::try_from(i).ok().and_then(|u| <$ty>::try_from(u).ok())
                        } else {
                            double_to_u64(n.as_f64()?).and_then(|u| <$ty>::try_from(u).ok())
                        }
                    }
                    Value::String(s) => s.parse::<$ty>().ok(),
                    Value::Bool(b) => Some(if *b { 1 } else { 0 }),
                    _ => None,
                }
            }

            fn to_value(&self) -> Option<Value> {
                Some(Value::Number(Number::from(*self as u64)))
            }
        }
    )*};
}

impl_transformable_signed!(i8, i16, i32, i64, isize);
impl_transformable_unsigned!(u8, u16, u32, u64, usize);

macro_rules! impl_transformable_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Transformable for $ty {
            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::Number(n) => Some(n.as_f64()? as $ty),
                    Value::String(s) => s.parse::<$ty>().ok(),
                    Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
                    _ => None,
                }
            }

            fn to_value(&self) -> Option<Value> {
                // NaN and infinities have no JSON representation.
                Number::from_f64(f64::from(*self)).map(Value::Number)
            }
        }
    )*};
}

impl_transformable_float!(f32, f64);

impl Transformable for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => {
                if s.eq_ignore_ascii_case("true") || s == "1" {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") || s == "0" {
                    Some(false)
                } else {
                    None
                }
            }
            Value::Number(n) => Some(n.as_f64()? != 0.0),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Bool(*self))
    }
}

impl Transformable for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(if *b { "true".into() } else { "false".into() }),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.clone()))
    }
}

impl Transformable for char {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => {
                let mut chars = s.chars();
                let first = chars.next()?;
                chars.next().is_none().then_some(first)
            }
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.to_string()))
    }
}
