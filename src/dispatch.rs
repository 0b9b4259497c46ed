//! Attribute dispatcher: walks a schema's keywords in document order and runs
//! the matching checker against the current value.

use crate::error::Halt;
use crate::keyword::Keyword;
use crate::keywords::{array, dependencies, object, scalar, types};
use crate::state::ValidationState;
use serde_json::{Map, Value};
use tracing::trace;

/// Apply every recognized keyword of `attributes` to `value`.
///
/// A failing keyword does not skip the ones after it; only a `Halt` from the
/// error policy ends the walk early.
pub fn validate_attributes<'s>(
    value: &Value,
    attributes: &'s Map<String, Value>,
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    for (name, argument) in attributes {
        let Some(keyword) = Keyword::from_name(name) else {
            continue;
        };
        trace!(%keyword, path = %state.pointer(), "checking keyword");
        apply(keyword, value, argument, state)?;
    }
    Ok(())
}

fn apply<'s>(
    keyword: Keyword,
    value: &Value,
    argument: &'s Value,
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    match keyword {
        Keyword::Type => types::check_type(value, argument, state),
        Keyword::Properties => object::check_properties(value, argument, state),
        Keyword::PatternProperties => object::check_pattern_properties(value, argument, state),
        Keyword::AdditionalProperties => {
            object::check_additional_properties(value, argument, state)
        }
        Keyword::Items => array::check_items(value, argument, state),
        Keyword::MinItems => array::check_min_items(value, argument, state),
        Keyword::MaxItems => array::check_max_items(value, argument, state),
        Keyword::UniqueItems => array::check_unique_items(value, argument, state),
        Keyword::Dependencies => dependencies::check_dependencies(value, argument, state),
        Keyword::Minimum => scalar::check_minimum(value, argument, state),
        Keyword::Maximum => scalar::check_maximum(value, argument, state),
        Keyword::MinLength => scalar::check_min_length(value, argument, state),
        Keyword::MaxLength => scalar::check_max_length(value, argument, state),
        Keyword::Pattern => scalar::check_pattern(value, argument, state),
        Keyword::Enum => scalar::check_enum(value, argument, state),
        Keyword::MultipleOf => scalar::check_multiple_of(value, argument, state),
        Keyword::Format => Ok(()),
        // Companions: read by `items`, `minimum`/`maximum` and `properties`.
        // A parent-level `required` array is deliberately not enforced.
        Keyword::AdditionalItems
        | Keyword::ExclusiveMinimum
        | Keyword::ExclusiveMaximum
        | Keyword::Required => Ok(()),
    }
}
