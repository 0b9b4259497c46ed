//! Instance locations.
//!
//! A path is the route from the document root to a value: a sequence of
//! property names and array indices. It renders as an RFC 6901 JSON Pointer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of an instance path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => {
                for c in key.chars() {
                    match c {
                        '~' => f.write_str("~0")?,
                        '/' => f.write_str("~1")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                Ok(())
            }
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Render a sequence of segments as a JSON Pointer. The root is `""`.
pub fn to_pointer(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        out.push_str(&segment.to_string());
    }
    out
}
