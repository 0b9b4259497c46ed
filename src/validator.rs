//! Entry points: draft detection and the [`Validator`] handle.

use crate::driver::validate_with_state;
use crate::error::*;
use crate::options::Options;
use crate::policy::{CollectAll, ErrorPolicy, FailFast};
use crate::state::ValidationState;
use serde_json::Value;
use tracing::debug;

const DRAFT4_URIS: [&str; 4] = [
    "http://json-schema.org/draft-04/schema#",
    "http://json-schema.org/draft-04/schema",
    "https://json-schema.org/draft-04/schema#",
    "https://json-schema.org/draft-04/schema",
];

/// Schema dialect. Only draft-4 is implemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draft {
    Draft4,
}

impl Draft {
    /// Pick the draft from the root `$schema`. A schema without one is draft-4.
    pub fn detect(schema: &Value) -> Result<Draft, SchemaError> {
        match schema.get("$schema") {
            None => Ok(Draft::Draft4),
            Some(Value::String(uri)) if DRAFT4_URIS.contains(&uri.as_str()) => Ok(Draft::Draft4),
            Some(other) => Err(SchemaError {
                kind: SchemaErrorKind::UnsupportedDraft,
                path: String::new(),
                keyword: Some("$schema".to_string()),
                message: format!("unsupported $schema: {}", other),
            }),
        }
    }
}

/// A schema checked for a supported draft, ready to validate instances.
#[derive(Clone, Debug)]
pub struct Validator<'s> {
    schema: &'s Value,
    draft: Draft,
    options: Options,
}

impl<'s> Validator<'s> {
    pub fn new(schema: &'s Value) -> Result<Self, SchemaError> {
        Self::with_options(schema, Options::default())
    }

    pub fn with_options(schema: &'s Value, options: Options) -> Result<Self, SchemaError> {
        let draft = Draft::detect(schema)?;
        Ok(Validator {
            schema,
            draft,
            options,
        })
    }

    pub fn draft(&self) -> Draft {
        self.draft
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Validate `instance`, honouring [`Options::fail_fast`].
    pub fn validate(&self, instance: &Value) -> ValidationResult {
        let result = if self.options.fail_fast {
            let mut policy = FailFast::new();
            let halt = self.validate_with_policy(instance, &mut policy);
            finish(policy.into_result(), halt)
        } else {
            let mut policy = CollectAll::new();
            let halt = self.validate_with_policy(instance, &mut policy);
            finish(policy.into_result(), halt)
        };
        debug!(
            draft = ?self.draft,
            errors = result.errors.len(),
            schema_errors = result.schema_errors.len(),
            "validation finished"
        );
        result
    }

    /// Stops at the first violation regardless of options.
    pub fn is_valid(&self, instance: &Value) -> bool {
        let mut policy = FailFast::new();
        let halt = self.validate_with_policy(instance, &mut policy);
        finish(policy.into_result(), halt).is_valid()
    }

    /// Validate `instance` reporting every signal to a caller-supplied policy.
    ///
    /// `Err` carries the reason validation stopped early, if it did.
    pub fn validate_with_policy(
        &self,
        instance: &Value,
        policy: &mut dyn ErrorPolicy,
    ) -> Result<(), Halt> {
        debug!(draft = ?self.draft, fail_fast = self.options.fail_fast, "validating instance");
        let mut state = ValidationState::new(self.schema, self.options.max_depth, policy);
        validate_with_state(self.schema, instance, &mut state)
    }
}

/// Fold a depth-exhaustion halt into the report; an `Invalid` halt is already
/// recorded by the policy that raised it.
fn finish(mut result: ValidationResult, halt: Result<(), Halt>) -> ValidationResult {
    if let Err(Halt::Exhausted(error)) = halt {
        result.schema_errors.push(error);
    }
    result
}
