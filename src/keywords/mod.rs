//! Keyword checkers.
//!
//! Each checker takes the current value, the keyword's argument from the
//! current schema, and the state. A checker that does not apply to the value's
//! JSON kind returns `Ok(())` without looking further.

pub mod array;
pub mod dependencies;
pub mod object;
pub mod scalar;
pub mod types;

use crate::driver::kind_name;
use crate::error::{Halt, SchemaErrorKind};
use crate::keyword::Keyword;
use crate::state::ValidationState;
use serde_json::Value;

/// Read a non-negative integer argument (`minItems`, `maxLength`, ...).
///
/// A malformed argument is reported and yields `None`.
pub(crate) fn count_argument(
    keyword: Keyword,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<Option<u64>, Halt> {
    match argument.as_u64() {
        Some(n) => Ok(Some(n)),
        None => {
            report_wrong_argument(keyword, "a non-negative integer", argument, state)?;
            Ok(None)
        }
    }
}

pub(crate) fn report_wrong_argument(
    keyword: Keyword,
    expected: &str,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    state.report_schema_invalid(
        SchemaErrorKind::InvalidKeyword,
        Some(keyword),
        format!(
            "'{}' must be {}, got {}",
            keyword,
            expected,
            kind_name(argument)
        ),
    )
}
