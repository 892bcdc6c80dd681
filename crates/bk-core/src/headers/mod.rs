//! Response header lookup.
//!
//! [`ResponseHeaders`] is the seam the extractor reads through; [`HeaderSet`]
//! is the concrete set built from raw `Name: value` lines.

mod parse;

use std::collections::HashMap;

/// Case-insensitive header lookup on an HTTP response.
pub trait ResponseHeaders {
    /// Value of the header `name`, compared ASCII case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Ordered header pairs as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    /// Builds a set from raw header lines. With redirects, only the final
    /// response's headers are kept.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            entries: parse::parse_header_lines(lines),
        }
    }
}

impl ResponseHeaders for HeaderSet {
    /// Returns the last value when `name` repeats.
    fn header(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl ResponseHeaders for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        if let Some(v) = self.get(name) {
            return Some(v.as_str());
        }
        self.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
