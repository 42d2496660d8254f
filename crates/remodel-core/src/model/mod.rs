//! Model registration, introspection and per-call customization
//!
//! A mappable model is an ordinary struct with a [`Default`]
//! implementation whose fields are registered through the
//! [`fields!`](crate::fields) macro. Registration produces a
//! [`FieldTable`]: the ordered descriptor list both drivers walk, cached
//! per type for the process lifetime. The [`Mappable`] trait adds the
//! customization hooks and the convenience conversion API.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod field;
pub mod mapper;
pub mod registry;

mod macros;

pub use field::{FieldDescriptor, FieldTable};
pub use mapper::{Mapper, MappingRule};

use crate::error::Result;
use serde_json::Value;

/// A type whose fields are registered for mapping, normally through the
/// [`fields!`](crate::fields) macro.
///
/// `fields` builds the raw descriptor list; callers go through
/// [`registry::field_table`] for the deduplicated, cached table.
pub trait Fields: Sized {
    fn fields() -> Vec<FieldDescriptor<Self>>;
}

/// A model that can be mapped to and from JSON.
///
/// The two hooks have empty defaults: `customize_mapping` runs once per
/// conversion call before any field is processed and registers per-field
/// rules on the [`Mapper`]; `after_mapping` runs after deserialization
/// has populated the instance.
pub trait Mappable: Fields + Default + 'static {
    /// Declare per-field rules for this conversion call.
    fn customize_mapping(&self, mapper: &mut Mapper) {
        let _ = mapper;
    }

    /// Runs after all fields of a deserialized instance are populated.
    fn after_mapping(&mut self) {}

    /// Deserialize a model from JSON text.
    fn from_json(text: &str) -> Result<Self> {
        crate::mapping::from_str(text)
    }

    /// Deserialize a model from the sub-object at `designated_path`.
    fn from_json_at(text: &str, designated_path: &str) -> Result<Self> {
        crate::mapping::from_str_at(text, designated_path)
    }

    /// Deserialize a model from a parsed JSON value.
    fn from_json_value(value: &Value) -> Result<Self> {
        crate::mapping::from_value(value)
    }

    /// Serialize this model to a JSON object value.
    fn to_json(&self) -> Value {
        crate::mapping::to_value(self)
    }

    /// Serialize this model to JSON text.
    fn to_json_string(&self, pretty: bool) -> Result<String> {
        crate::mapping::to_string(self, pretty)
    }
}
