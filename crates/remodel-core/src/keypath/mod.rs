//! Dotted path expressions for nested JSON lookup
//!
//! A `KeyPath` is an ordered list of object keys parsed from a dotted
//! expression such as `data.user.name`. A backslash escapes a literal dot
//! inside a segment (`meta\.info` is the single key `meta.info`), and
//! empty or whitespace-only segments are dropped. Resolution is
//! all-or-nothing: every intermediate step must be an object containing
//! the next key, otherwise the whole path yields nothing.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod parser;


use serde_json::Value;
use std::fmt;

/// A parsed dotted path expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a raw dotted expression into a `KeyPath`.
    ///
    /// Parsing never fails: an expression with no usable segments simply
    /// produces an empty path, which resolves to the root.
    pub fn parse(raw: &str) -> Self {
        KeyPath {
            segments: parser::split_segments(raw),
        }
    }

    /// Build a path directly from pre-split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeyPath {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The ordered key segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when the path has no segments and resolves to the root.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment, used as the output key when a bound field is
    /// serialized under a remapped name.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Walk the path from `root`.
    ///
    /// Every intermediate value must be an object containing the next
    /// segment's key; a miss anywhere invalidates the whole path. An empty
    /// path resolves to `root` itself.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in &self.segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&segment.replace('.', "\\."))?;
        }
        Ok(())
    }
}
