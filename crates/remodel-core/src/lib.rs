//! Remodel Core - Best-effort mapping between JSON and typed models
//!
//! This crate converts untyped JSON values into strongly-typed, nested
//! model structures and back, without hand-written conversion code per
//! field. Models register their fields once; everything else is driven
//! by per-field rules declared in a `customize_mapping` hook.
//!
//! # Main Components
//!
//! - **Value Model**: `serde_json::Value` trees with a `parse`/`stringify`
//!   boundary (`value`)
//! - **Classification**: the `Transformable` protocol and its permissive
//!   coercion rules (`convert`)
//! - **Registration**: the `fields!`/`raw_enum!` macros, field tables and
//!   the per-type cache (`model`)
//! - **Customization**: the per-call `Mapper` rule registry (`model`)
//! - **Path Expressions**: dotted lookup paths with escaping (`keypath`)
//! - **Drivers**: deserialize/serialize orchestration, batch, in-place
//!   and traced forms (`mapping`)
//! - **Transform Units**: base64, date, URL, raw-enum and closure-pair
//!   converters (`transform`)
//!
//! # Example
//!
//! ```
//! use remodel_core::{fields, Mappable, Mapper};
//!
//! #[derive(Default, Clone, Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! fields!(User { name, age });
//!
//! impl Mappable for User {
//!     fn customize_mapping(&self, mapper: &mut Mapper) {
//!         mapper.bind("name").paths(["nickname", "profile.name"]);
//!     }
//! }
//!
//! # fn main() -> remodel_core::Result<()> {
//! let user = User::from_json(r#"{"profile": {"name": "Ann"}, "age": "34"}"#)?;
//! assert_eq!(user, User { name: "Ann".into(), age: 34 });
//!
//! let text = user.to_json_string(false)?;
//! assert_eq!(User::from_json(&text)?, user);
//! # Ok(())
//! # }
//! ```
//!
//! Conversion is best-effort by design: a field whose raw value is
//! missing or does not convert keeps its default value, and only
//! structural problems (malformed text, a designated path that does not
//! resolve, a wrong-shaped root) are reported as errors. Hosts that need
//! to observe absorbed failures use the traced entry points in
//! [`mapping`].
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod convert;
pub mod error;
pub mod keypath;
pub mod mapping;
pub mod model;
pub mod transform;
pub mod value;

// Re-export main types for convenience
pub use convert::Transformable;
pub use error::{Error, Result};
pub use keypath::KeyPath;
pub use mapping::{FieldMiss, MappingTrace, MissReason};
pub use model::{FieldDescriptor, FieldTable, Fields, Mappable, Mapper, MappingRule};
pub use transform::{
    optional, Base64Transform, DateFormatTransform, EnumTransform, Iso8601DateTransform,
    OptionalTransform, RawCoded, Transform, TransformOf, UrlTransform,
};
pub use value::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
