//! Validation settings.

use serde::{Deserialize, Serialize};

/// Default bound on nested schema applications. Deep enough for any sane
/// document, shallow enough to stop `$ref` cycles well before the stack does.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Settings for a [`Validator`](crate::Validator).
///
/// Deserializable so a host application can embed it in its own config file:
///
/// ```rust
/// let options: draft4::Options = serde_json::from_str(r#"{"failFast": true}"#).unwrap();
/// assert!(options.fail_fast);
/// assert_eq!(options.max_depth, draft4::options::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Stop at the first violation instead of collecting all of them.
    pub fail_fast: bool,
    /// Maximum number of nested schema applications before aborting.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            fail_fast: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
