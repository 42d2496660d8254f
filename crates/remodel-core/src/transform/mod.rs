//! Pluggable transform units
//!
//! A [`Transform`] is a bidirectional converter between a JSON
//! representation and one domain type, bound to a field through
//! [`crate::model::MappingRule::with`]. Both directions are best-effort:
//! malformed input is absorbed as a field-level failure, exactly like a
//! default conversion that does not fit.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod base64;
pub mod date;
pub mod enums;
pub mod url;

#[cfg(test)]
mod tests;

pub use self::base64::Base64Transform;
pub use self::date::{DateFormatTransform, Iso8601DateTransform};
pub use self::enums::{EnumTransform, RawCoded};
pub use self::url::UrlTransform;

use serde_json::Value;

/// A bidirectional converter between a JSON value and a domain type.
pub trait Transform {
    /// The domain type this unit produces and consumes.
    type Object;

    /// Build the domain value from its JSON representation.
    fn from_json(&self, value: &Value) -> Option<Self::Object>;

    /// Flatten the domain value to its JSON representation.
    fn to_json(&self, object: &Self::Object) -> Option<Value>;
}

/// A transform unit built from a closure pair, for one-off conversions
/// that do not warrant a named unit.
pub struct TransformOf<O> {
    from: Box<dyn Fn(&Value) -> Option<O>>,
    to: Box<dyn Fn(&O) -> Option<Value>>,
}

impl<O> TransformOf<O> {
    pub fn new(
        from: impl Fn(&Value) -> Option<O> + 'static,
        to: impl Fn(&O) -> Option<Value> + 'static,
    ) -> Self {
        TransformOf {
            from: Box::new(from),
            to: Box::new(to),
        }
    }
}

impl<O> Transform for TransformOf<O> {
    type Object = O;

    fn from_json(&self, value: &Value) -> Option<O> {
        (self.from)(value)
    }

    fn to_json(&self, object: &O) -> Option<Value> {
        (self.to)(object)
    }
}

/// Lift a transform unit over an `Option`-typed field.
///
/// JSON `null` maps to an explicit `None`; any other value goes through
/// the inner unit, and an inner failure is absorbed as usual. A `None`
/// field serializes to nothing, omitting the key.
pub fn optional<X: Transform>(unit: X) -> OptionalTransform<X> {
    OptionalTransform { unit }
}

/// See [`optional`].
pub struct OptionalTransform<X> {
    unit: X,
}

impl<X: Transform> Transform for OptionalTransform<X> {
    type Object = Option<X::Object>;

    fn from_json(&self, value: &Value) -> Option<Self::Object> {
        match value {
            Value::Null => Some(None),
            other => self.unit.from_json(other).map(Some),
        }
    }

    fn to_json(&self, object: &Self::Object) -> Option<Value> {
        object.as_ref().and_then(|inner| self.unit.to_json(inner))
    }
}
