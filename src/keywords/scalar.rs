//! Numeric bounds, string length and pattern, `enum`, `multipleOf`.

use super::{count_argument, report_wrong_argument};
use crate::equality::json_equal;
use crate::error::{DataErrorKind, Halt};
use crate::keyword::Keyword;
use crate::num;
use crate::state::ValidationState;
use serde_json::{Number, Value};
use std::cmp::Ordering;

#[derive(Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

pub(crate) fn check_minimum(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    check_bound(value, argument, Bound::Lower, state)
}

pub(crate) fn check_maximum(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    check_bound(value, argument, Bound::Upper, state)
}

fn check_bound(
    value: &Value,
    argument: &Value,
    bound: Bound,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    let Some(number) = value.as_number() else {
        return Ok(());
    };
    let (keyword, companion) = match bound {
        Bound::Lower => (Keyword::Minimum, Keyword::ExclusiveMinimum),
        Bound::Upper => (Keyword::Maximum, Keyword::ExclusiveMaximum),
    };
    let Some(limit) = argument.as_number() else {
        return report_wrong_argument(keyword, "a number", argument, state);
    };
    // Looked up by key, so keyword order in the schema does not matter.
    let exclusive = matches!(
        state.current_schema().get(companion.as_str()),
        Some(Value::Bool(true))
    );

    if !within(number, limit, bound, exclusive) {
        state.report_data_invalid(DataErrorKind::NotInRange, value)?;
    }
    Ok(())
}

fn within(number: &Number, limit: &Number, bound: Bound, exclusive: bool) -> bool {
    let Some(ordering) = num::compare(number, limit) else {
        return false;
    };
    match (bound, exclusive) {
        (Bound::Lower, false) => ordering != Ordering::Less,
        (Bound::Lower, true) => ordering == Ordering::Greater,
        (Bound::Upper, false) => ordering != Ordering::Greater,
        (Bound::Upper, true) => ordering == Ordering::Less,
    }
}

pub(crate) fn check_min_length(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    let Some(text) = value.as_str() else {
        return Ok(());
    };
    let Some(min) = count_argument(Keyword::MinLength, argument, state)? else {
        return Ok(());
    };
    if (text.chars().count() as u64) < min {
        state.report_data_invalid(DataErrorKind::WrongLength, value)?;
    }
    Ok(())
}

pub(crate) fn check_max_length(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    let Some(text) = value.as_str() else {
        return Ok(());
    };
    let Some(max) = count_argument(Keyword::MaxLength, argument, state)? else {
        return Ok(());
    };
    if text.chars().count() as u64 > max {
        state.report_data_invalid(DataErrorKind::WrongLength, value)?;
    }
    Ok(())
}

/// Unanchored search: `"b"` matches `"abc"`.
pub(crate) fn check_pattern(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    let Some(text) = value.as_str() else {
        return Ok(());
    };
    let Some(pattern) = argument.as_str() else {
        return report_wrong_argument(Keyword::Pattern, "a string", argument, state);
    };
    let Some(re) = state.compile_pattern(pattern, Keyword::Pattern)? else {
        return Ok(());
    };
    if !re.is_match(text) {
        state.report_data_invalid(DataErrorKind::NoMatch, value)?;
    }
    Ok(())
}

pub(crate) fn check_enum(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    let Some(candidates) = argument.as_array() else {
        return report_wrong_argument(Keyword::Enum, "an array", argument, state);
    };
    if !candidates.iter().any(|candidate| json_equal(value, candidate)) {
        state.report_data_invalid(DataErrorKind::NotInRange, value)?;
    }
    Ok(())
}

pub(crate) fn check_multiple_of(
    value: &Value,
    argument: &Value,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    let Some(number) = value.as_number() else {
        return Ok(());
    };
    let Some(divisor) = argument.as_number() else {
        return report_wrong_argument(Keyword::MultipleOf, "a number", argument, state);
    };
    if !num::is_multiple_of(number, divisor) {
        state.report_data_invalid(DataErrorKind::NotDivisible, value)?;
    }
    Ok(())
}
