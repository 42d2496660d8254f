//! Type classification and the transform protocol
//!
//! Every type the engine can map implements [`Transformable`]: build
//! yourself from a JSON value, flatten yourself back to one. Both
//! directions are best-effort and return `Option`: a value that cannot
//! be classified or coerced yields `None`, which the drivers absorb by
//! leaving the target field at its default.
//!
//! Dispatch is static on the declared type of the target field, so the
//! classification priority of the engine is encoded in the impl set
//! rather than probed at runtime:
//!
//! 1. exact passthrough (each impl's first match arm),
//! 2. basic types with permissive coercion ([`basic`]),
//! 3. boxed/wrapped basics ([`bridged`]),
//! 4. raw-backed enums (via [`crate::raw_enum!`] and
//!    [`crate::transform::RawCoded`]),
//! 5. containers, element-wise and drop-on-failure ([`container`]),
//! 6. optionals, which absorb inner failures ([`container`]),
//! 7. composite models (impl emitted by [`crate::fields!`], recursing
//!    into the drivers).
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod basic;
pub mod bridged;
pub mod container;
pub mod external;

#[cfg(test)]
mod tests;

use serde_json::Value;

/// A type that can be built from a JSON value and flattened back to one.
///
/// Both operations are total and best-effort: `None` means "no value",
/// never an error. Implementations for basic types apply the permissive
/// coercions documented in [`basic`]; container implementations convert
/// element-wise and drop elements that fail.
pub trait Transformable: Sized {
    /// Build a value of this type from a JSON value, coercing when the
    /// classification rules allow it.
    fn from_value(value: &Value) -> Option<Self>;

    /// Flatten this value to its JSON representation.
    fn to_value(&self) -> Option<Value>;
}
