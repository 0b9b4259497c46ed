//! `type`: a single type name, a union of names, or a union mixing names and
//! subschemas.

use super::report_wrong_argument;
use crate::driver::validate_with_state;
use crate::error::{DataErrorKind, Halt};
use crate::keyword::Keyword;
use crate::num;
use crate::policy::FailFast;
use crate::state::ValidationState;
use serde_json::Value;
use tracing::trace;

/// Whether `value` is of the named primitive type. Unknown names match nothing.
pub fn is_type(value: &Value, name: &str) -> bool {
    match name {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.as_number().is_some_and(num::is_integer),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        "any" => true,
        _ => false,
    }
}

pub(crate) fn check_type<'s>(
    value: &Value,
    declared: &'s Value,
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    let matched = match declared {
        Value::String(name) => is_type(value, name),
        Value::Array(members) => union_matches(value, members, state)?,
        _ => return report_wrong_argument(Keyword::Type, "a string or an array", declared, state),
    };
    if matched {
        Ok(())
    } else {
        state.report_data_invalid(DataErrorKind::WrongType, value)
    }
}

fn union_matches<'s>(
    value: &Value,
    members: &'s [Value],
    state: &mut ValidationState<'s, '_>,
) -> Result<bool, Halt> {
    for member in members {
        let matched = match member {
            Value::String(name) => is_type(value, name),
            Value::Object(_) => subschema_matches(value, member, state)?,
            _ => false,
        };
        if matched {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Trial-validate `value` against a union member subschema in an isolated
/// state. Only an invalidity signal counts as "no match"; an exhausted depth
/// budget still propagates.
fn subschema_matches<'s>(
    value: &Value,
    schema: &'s Value,
    state: &mut ValidationState<'s, '_>,
) -> Result<bool, Halt> {
    let mut policy = FailFast::new();
    let mut trial = state.isolated(schema, &mut policy);
    match validate_with_state(schema, value, &mut trial) {
        Ok(()) => Ok(true),
        Err(Halt::Invalid) => {
            trace!(path = %state.pointer(), "union branch rejected value");
            Ok(false)
        }
        Err(halt) => Err(halt),
    }
}
