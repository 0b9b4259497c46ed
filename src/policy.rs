//! Error-signal policies.
//!
//! Whether an invalidity signal stops the whole validation or is recorded so
//! that later checks still run is decided here, never by the checkers.

use crate::error::*;

/// Extension point receiving every invalidity signal.
///
/// Returning `Ok(())` lets validation continue; returning `Err` unwinds to the
/// entry point. Checkers behave correctly under either choice.
pub trait ErrorPolicy {
    /// Called when the value violates a well-formed schema.
    fn data_invalid(&mut self, error: ValidationError) -> Result<(), Halt>;

    /// Called when the schema is malformed for the keyword being applied.
    fn schema_invalid(&mut self, error: SchemaError) -> Result<(), Halt>;
}

/// Records every signal and keeps going.
#[derive(Debug, Default)]
pub struct CollectAll {
    pub result: ValidationResult,
}

impl CollectAll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_result(self) -> ValidationResult {
        self.result
    }
}

impl ErrorPolicy for CollectAll {
    fn data_invalid(&mut self, error: ValidationError) -> Result<(), Halt> {
        self.result.errors.push(error);
        Ok(())
    }

    fn schema_invalid(&mut self, error: SchemaError) -> Result<(), Halt> {
        self.result.schema_errors.push(error);
        Ok(())
    }
}

/// Records the first signal and stops.
#[derive(Debug, Default)]
pub struct FailFast {
    pub result: ValidationResult,
}

impl FailFast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_result(self) -> ValidationResult {
        self.result
    }
}

impl ErrorPolicy for FailFast {
    fn data_invalid(&mut self, error: ValidationError) -> Result<(), Halt> {
        self.result.errors.push(error);
        Err(Halt::Invalid)
    }

    fn schema_invalid(&mut self, error: SchemaError) -> Result<(), Halt> {
        self.result.schema_errors.push(error);
        Err(Halt::Invalid)
    }
}
