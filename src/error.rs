use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Machine-checkable tag carried by every data-invalid signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataErrorKind {
    WrongType,
    MissingRequiredProperty,
    NoExtraPropertiesAllowed,
    WrongSize,
    NotUnique,
    NoMatch,
    WrongLength,
    NotInRange,
    MissingDependency,
    NoExtraItemsAllowed,
    NotEnoughItems,
    NotDivisible,
}

impl DataErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataErrorKind::WrongType => "wrong_type",
            DataErrorKind::MissingRequiredProperty => "missing_required_property",
            DataErrorKind::NoExtraPropertiesAllowed => "no_extra_properties_allowed",
            DataErrorKind::WrongSize => "wrong_size",
            DataErrorKind::NotUnique => "not_unique",
            DataErrorKind::NoMatch => "no_match",
            DataErrorKind::WrongLength => "wrong_length",
            DataErrorKind::NotInRange => "not_in_range",
            DataErrorKind::MissingDependency => "missing_dependency",
            DataErrorKind::NoExtraItemsAllowed => "no_extra_items_allowed",
            DataErrorKind::NotEnoughItems => "not_enough_items",
            DataErrorKind::NotDivisible => "not_divisible",
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            DataErrorKind::WrongType => "value has the wrong type",
            DataErrorKind::MissingRequiredProperty => "required property is missing",
            DataErrorKind::NoExtraPropertiesAllowed => "property is not allowed",
            DataErrorKind::WrongSize => "array has the wrong number of items",
            DataErrorKind::NotUnique => "array items are not unique",
            DataErrorKind::NoMatch => "string does not match pattern",
            DataErrorKind::WrongLength => "string has the wrong length",
            DataErrorKind::NotInRange => "value is not in the allowed range",
            DataErrorKind::MissingDependency => "dependency is missing",
            DataErrorKind::NoExtraItemsAllowed => "array has more items than allowed",
            DataErrorKind::NotEnoughItems => "array has fewer items than the tuple",
            DataErrorKind::NotDivisible => "number is not a multiple of the divisor",
        }
    }
}

impl fmt::Display for DataErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produced when a value fails to satisfy a well-formed schema.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[error("{kind} at '{path}': {message}")]
pub struct ValidationError {
    pub kind: DataErrorKind,
    /// JSON Pointer from the document root to the offending value.
    pub path: String,
    /// The offending value (or, for missing members, the expected name).
    pub value: Value,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: DataErrorKind, path: String, value: Value) -> Self {
        ValidationError {
            kind,
            path,
            message: kind.describe().to_string(),
            value,
        }
    }
}

/// Tag for a structurally malformed schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaErrorKind {
    /// A schema node is not a JSON object.
    SchemaInvalid,
    WrongTypeItems,
    WrongTypeDependency,
    /// A keyword's value has the wrong JSON shape.
    InvalidKeyword,
    /// A `pattern` or `patternProperties` key does not compile.
    InvalidPattern,
    UnresolvedRef,
    UnsupportedDraft,
    RecursionLimit,
}

impl SchemaErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaErrorKind::SchemaInvalid => "schema_invalid",
            SchemaErrorKind::WrongTypeItems => "wrong_type_items",
            SchemaErrorKind::WrongTypeDependency => "wrong_type_dependency",
            SchemaErrorKind::InvalidKeyword => "invalid_keyword",
            SchemaErrorKind::InvalidPattern => "invalid_pattern",
            SchemaErrorKind::UnresolvedRef => "unresolved_ref",
            SchemaErrorKind::UnsupportedDraft => "unsupported_draft",
            SchemaErrorKind::RecursionLimit => "recursion_limit",
        }
    }
}

impl fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produced when the schema itself is malformed for the keyword being applied.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} at '{path}': {message}")]
pub struct SchemaError {
    pub kind: SchemaErrorKind,
    /// Instance location at which the malformed keyword was applied.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub message: String,
}

/// Non-local exit from a checker.
///
/// Every checker returns `Result<(), Halt>`; an `Err` means validation of the
/// whole document stops here and unwinds to the entry point.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Halt {
    /// The error policy chose to stop after an invalidity signal.
    #[error("validation stopped at the first error")]
    Invalid,
    /// A resource bound was hit. Union-type trials never absorb this.
    #[error("validation aborted: {0}")]
    Exhausted(SchemaError),
}

/// Result of validating one instance.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub schema_errors: Vec<SchemaError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.schema_errors.is_empty()
    }
}
