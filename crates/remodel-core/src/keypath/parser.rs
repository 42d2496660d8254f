//! Scanner for dotted path expressions
//!
//! Splits a raw expression on unescaped `.` characters. `\.` unescapes to
//! a literal dot inside the current segment; a backslash before any other
//! character is kept verbatim. Segments that are empty or whitespace-only
//! after unescaping are dropped.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

/// Split a raw dotted expression into its key segments.
pub fn split_segments(raw: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'.') => {
                chars.next();
                current.push('.');
            }
            '.' => flush_segment(&mut segments, &mut current),
            _ => current.push(ch),
        }
    }
    flush_segment(&mut segments, &mut current);

    segments
}

fn flush_segment(segments: &mut Vec<String>, current: &mut String) {
    if current.trim().is_empty() {
        current.clear();
    } else {
        segments.push(std::mem::take(current));
    }
}
