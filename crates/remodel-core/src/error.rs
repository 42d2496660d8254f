//! Error types for the Remodel core library
//!
//! This module defines the structural error taxonomy of the mapping engine.
//! Only structural failures surface here: malformed JSON text, a designated
//! path that resolves to nothing, or a root value of the wrong shape.
//! Field-level conversion failures are absorbed by the drivers and never
//! become `Error` values.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use thiserror::Error;

/// Main error type for Remodel operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing and stringification errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A designated path did not resolve inside the input document
    #[error("designated path `{path}` not found")]
    PathNotFound { path: String },

    /// The root value had the wrong shape for the requested operation
    #[error("expected JSON {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// Wrap a serde_json error produced while parsing input text.
    pub(crate) fn parse(source: serde_json::Error) -> Self {
        Error::Json {
            message: format!("failed to parse input text: {source}"),
            source,
        }
    }

    /// Wrap a serde_json error produced while writing output text.
    pub(crate) fn stringify(source: serde_json::Error) -> Self {
        Error::Json {
            message: format!("failed to write output text: {source}"),
            source,
        }
    }
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PathNotFound {
            path: "data.user".to_string(),
        };
        assert_eq!(err.to_string(), "designated path `data.user` not found");

        let err = Error::UnexpectedShape {
            expected: "object",
            found: "array",
        };
        assert!(err.to_string().contains("expected JSON object"));
    }

    #[test]
    fn test_parse_error_carries_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::parse(source);
        assert!(err.to_string().contains("failed to parse"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
