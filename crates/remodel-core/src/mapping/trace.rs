//! Absorbed-failure reporting
//!
//! The default drivers silently leave a field at its default value when
//! its raw value is missing or cannot convert. [`MappingTrace`] is the
//! opt-in record of those absorptions: the traced entry points fill one
//! in alongside the mapped instance, without changing what gets mapped.
//! Hosts that want strictness build it on top of the trace; the engine
//! itself never enforces.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use serde::Serialize;

/// Why a field was left at its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissReason {
    /// The field is unbound and the input object has no key of its name.
    MissingKey,
    /// The field is bound to alternate paths and none resolved.
    PathNotFound,
    /// A raw value was found but did not convert to the field's type.
    Conversion,
    /// The raw value was JSON `null` and the field's type does not
    /// absorb nulls.
    NullValue,
}

/// One field left at its default value, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMiss {
    pub field: String,
    pub reason: MissReason,
}

/// Record of every field a conversion left at its default value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MappingTrace {
    misses: Vec<FieldMiss>,
}

impl MappingTrace {
    pub fn new() -> Self {
        MappingTrace::default()
    }

    /// True when every field was assigned from the input.
    pub fn is_clean(&self) -> bool {
        self.misses.is_empty()
    }

    /// Every recorded miss, in field-table order.
    pub fn misses(&self) -> &[FieldMiss] {
        &self.misses
    }

    /// True when some present raw value failed to convert. Missing keys
    /// and unresolved paths do not count: absence is ordinary in partial
    /// payloads, a present-but-unconvertible value is not.
    pub fn has_conversion_failures(&self) -> bool {
        self.misses
            .iter()
            .any(|miss| matches!(miss.reason, MissReason::Conversion | MissReason::NullValue))
    }

    pub(crate) fn record(&mut self, field: &str, reason: MissReason) {
        self.misses.push(FieldMiss {
            field: field.to_string(),
            reason,
        });
    }
}
