//! `items` (with its `additionalItems` companion), `minItems`, `maxItems` and
//! `uniqueItems`.

use super::{count_argument, report_wrong_argument};
use crate::equality::json_equal;
use crate::error::{DataErrorKind, Halt, SchemaErrorKind};
use crate::keyword::Keyword;
use crate::state::ValidationState;
use serde_json::Value;

pub(crate) fn check_items<'s>(
    value: &Value,
    items: &'s Value,
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    let Some(elements) = value.as_array() else {
        return Ok(());
    };

    match items {
        Value::Object(_) => {
            for (i, element) in elements.iter().enumerate() {
                state.descend(i, items, element)?;
            }
            Ok(())
        }
        Value::Array(tuple) => check_tuple(value, elements, tuple, state),
        _ => state.report_schema_invalid(
            SchemaErrorKind::WrongTypeItems,
            Some(Keyword::Items),
            "'items' must be an object or an array of objects",
        ),
    }
}

/// Positional validation. Elements past the tuple are governed by the sibling
/// `additionalItems`: absent or `true` leaves them unchecked.
fn check_tuple<'s>(
    value: &Value,
    elements: &[Value],
    tuple: &'s [Value],
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    if elements.len() < tuple.len() {
        return state.report_data_invalid(DataErrorKind::NotEnoughItems, value);
    }

    for (i, (element, schema)) in elements.iter().zip(tuple).enumerate() {
        state.descend(i, schema, element)?;
    }

    if elements.len() == tuple.len() {
        return Ok(());
    }

    match state.current_schema().get("additionalItems") {
        None | Some(Value::Bool(true)) => Ok(()),
        Some(Value::Bool(false)) => {
            state.report_data_invalid(DataErrorKind::NoExtraItemsAllowed, value)
        }
        Some(additional @ Value::Object(_)) => {
            for (i, element) in elements.iter().enumerate().skip(tuple.len()) {
                state.descend(i, additional, element)?;
            }
            Ok(())
        }
        Some(other) => report_wrong_argument(
            Keyword::AdditionalItems,
            "a boolean or an object",
            other,
            state,
        ),
    }
}

pub(crate) fn check_min_items(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    let Some(elements) = value.as_array() else {
        return Ok(());
    };
    let Some(min) = count_argument(Keyword::MinItems, argument, state)? else {
        return Ok(());
    };
    if (elements.len() as u64) < min {
        state.report_data_invalid(DataErrorKind::WrongSize, value)?;
    }
    Ok(())
}

pub(crate) fn check_max_items(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    let Some(elements) = value.as_array() else {
        return Ok(());
    };
    let Some(max) = count_argument(Keyword::MaxItems, argument, state)? else {
        return Ok(());
    };
    if elements.len() as u64 > max {
        state.report_data_invalid(DataErrorKind::WrongSize, value)?;
    }
    Ok(())
}

pub(crate) fn check_unique_items(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    let Some(elements) = value.as_array() else {
        return Ok(());
    };
    match argument {
        Value::Bool(true) => {}
        Value::Bool(false) => return Ok(()),
        _ => return report_wrong_argument(Keyword::UniqueItems, "a boolean", argument, state),
    }

    if let Some(duplicate) = first_duplicate(elements) {
        state.report_data_invalid(DataErrorKind::NotUnique, duplicate)?;
    }
    Ok(())
}

/// The first element deep-equal to a later one, scanning pairs `(i, j)`, `i < j`.
pub fn first_duplicate(elements: &[Value]) -> Option<&Value> {
    elements.iter().enumerate().find_map(|(i, a)| {
        elements[i + 1..]
            .iter()
            .any(|b| json_equal(a, b))
            .then_some(a)
    })
}
