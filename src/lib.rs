//! JSON Schema [draft-4](https://json-schema.org/draft-04/json-schema-validation)
//! validation over [`serde_json::Value`].
//!
//! Every violation is reported with a machine-checkable kind, the offending
//! value, and the JSON Pointer of its location in the instance:
//!
//! ```text
//! schema → Validator::new → validate(instance) → ValidationResult
//!                                  │
//!                     driver → dispatch → keyword checkers
//!                                  │
//!                            ErrorPolicy (collect-all | fail-fast | custom)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "a": {"type": "array", "items": {"properties": {"b": {"type": "string"}}}}
//!     }
//! });
//! let instance = json!({"a": [{"b": 1}]});
//!
//! let result = draft4::validate(&schema, &instance);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors[0].path, "/a/0/b");
//! assert_eq!(result.errors[0].kind, draft4::DataErrorKind::WrongType);
//! ```
//!
//! # Error policies
//!
//! Checkers never decide whether to stop. They hand each invalidity signal to
//! an [`ErrorPolicy`]; [`CollectAll`] keeps going, [`FailFast`] stops at the
//! first one, and callers may supply their own.
//!
//! # Compatibility notes
//!
//! - A parent-level `required` array is ignored; the draft-3 style
//!   `"required": true` inside a property's own schema is enforced.
//! - `format` is accepted and never validated.
//! - `1.0` is a `number` but not an `integer`.

pub mod dispatch;
pub mod driver;
pub mod equality;
pub mod error;
pub mod keyword;
pub mod keywords;
pub mod num;
pub mod options;
pub mod path;
pub mod policy;
pub mod state;
pub mod validator;

pub use error::*;
pub use keyword::Keyword;
pub use options::Options;
pub use path::PathSegment;
pub use policy::{CollectAll, ErrorPolicy, FailFast};
pub use state::ValidationState;
pub use validator::{Draft, Validator};

// Re-export entry-point functions at the crate root for convenience.
pub use dispatch::validate_attributes;
pub use driver::validate_with_state;
pub use equality::json_equal;

use serde_json::Value;

/// Validate `instance` against `schema`, collecting every violation.
///
/// An unsupported `$schema` is returned as the report's only schema error.
pub fn validate(schema: &Value, instance: &Value) -> ValidationResult {
    match Validator::new(schema) {
        Ok(validator) => validator.validate(instance),
        Err(error) => ValidationResult {
            errors: Vec::new(),
            schema_errors: vec![error],
        },
    }
}

/// Whether `instance` satisfies `schema`, stopping at the first violation.
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    Validator::new(schema).is_ok_and(|validator| validator.is_valid(instance))
}
