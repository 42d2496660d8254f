//! Raw-backed enums
//!
//! A raw-backed enum converts through its raw representation: the JSON
//! value is coerced into the raw type with the full classification
//! rules, then matched against the declared cases. The
//! [`crate::raw_enum!`] macro emits the [`RawCoded`] implementation.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::Transform;
use crate::convert::Transformable;
use serde_json::Value;
use std::marker::PhantomData;

/// An enum backed by a transformable raw value.
pub trait RawCoded: Sized {
    type Raw: Transformable;

    /// The case for `raw`, if any matches.
    fn from_raw(raw: &Self::Raw) -> Option<Self>;

    /// The raw value of this case.
    fn to_raw(&self) -> Self::Raw;
}

/// Transform unit routing a [`RawCoded`] enum through its raw values,
/// for binding an enum field together with alternate paths or for reuse
/// inside [`super::TransformOf`] closures.
pub struct EnumTransform<T> {
    marker: PhantomData<T>,
}

impl<T> EnumTransform<T> {
    pub fn new() -> Self {
        EnumTransform {
            marker: PhantomData,
        }
    }
}

impl<T> Default for EnumTransform<T> {
    fn default() -> Self {
        EnumTransform::new()
    }
}

impl<T: RawCoded> Transform for EnumTransform<T> {
    type Object = T;

    fn from_json(&self, value: &Value) -> Option<T> {
        T::from_raw(&<T::Raw as Transformable>::from_value(value)?)
    }

    fn to_json(&self, object: &T) -> Option<Value> {
        object.to_raw().to_value()
    }
}
