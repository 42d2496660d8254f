//! Conversion drivers
//!
//! The entry points that orchestrate a full conversion in either
//! direction: designated-path extraction, the `customize_mapping` hook,
//! the field loop with its rule precedence, and the batch, in-place and
//! traced forms. Structural failures (malformed text, an unresolvable
//! designated path, a wrong-shaped root) are errors; field-level
//! failures are absorbed, leaving defaults.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod de;
pub mod ser;
pub mod trace;


pub use de::{
    from_str, from_str_at, from_value, from_value_at, from_value_traced, update_from_str,
    update_from_value, vec_from_str, vec_from_value, vec_from_value_at,
};
pub use ser::{slice_to_string, slice_to_value, to_string, to_value};
pub use trace::{FieldMiss, MappingTrace, MissReason};
