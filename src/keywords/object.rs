//! `properties`, `patternProperties` and `additionalProperties`.

use super::report_wrong_argument;
use crate::error::{DataErrorKind, Halt};
use crate::keyword::Keyword;
use crate::state::ValidationState;
use regex::Regex;
use serde_json::{Map, Value};

pub(crate) fn check_properties<'s>(
    value: &Value,
    properties: &'s Value,
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };
    let Some(properties) = properties.as_object() else {
        return report_wrong_argument(Keyword::Properties, "an object", properties, state);
    };

    for (name, subschema) in properties {
        match object.get(name) {
            Some(member) => state.descend(name.as_str(), subschema, member)?,
            // Legacy per-property flag; a parent-level `required` array is not read here.
            None if is_required(subschema) => state.report_data_invalid(
                DataErrorKind::MissingRequiredProperty,
                &Value::String(name.clone()),
            )?,
            None => {}
        }
    }
    Ok(())
}

fn is_required(subschema: &Value) -> bool {
    matches!(subschema.get("required"), Some(Value::Bool(true)))
}

pub(crate) fn check_pattern_properties<'s>(
    value: &Value,
    patterns: &'s Value,
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };
    let Some(patterns) = patterns.as_object() else {
        return report_wrong_argument(Keyword::PatternProperties, "an object", patterns, state);
    };

    let mut compiled: Vec<(Regex, &'s Value)> = Vec::with_capacity(patterns.len());
    for (pattern, subschema) in patterns {
        if let Some(re) = state.compile_pattern(pattern, Keyword::PatternProperties)? {
            compiled.push((re, subschema));
        }
    }

    for (name, member) in object {
        for &(ref re, subschema) in &compiled {
            if re.is_match(name) {
                state.descend(name.as_str(), subschema, member)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn check_additional_properties<'s>(
    value: &Value,
    additional: &'s Value,
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };

    match additional {
        Value::Bool(true) => Ok(()),
        Value::Bool(false) => {
            for (name, member) in extra_members(object, state) {
                state.report_data_invalid_at(
                    DataErrorKind::NoExtraPropertiesAllowed,
                    name.as_str(),
                    member,
                )?;
            }
            Ok(())
        }
        Value::Object(_) => {
            for (name, member) in extra_members(object, state) {
                state.descend(name.as_str(), additional, member)?;
            }
            Ok(())
        }
        _ => report_wrong_argument(
            Keyword::AdditionalProperties,
            "a boolean or an object",
            additional,
            state,
        ),
    }
}

/// Members not named in the sibling `properties` and not matched by any
/// sibling `patternProperties` regex.
///
/// Patterns that fail to compile are skipped here; `patternProperties` itself
/// reports them.
fn extra_members<'v>(
    object: &'v Map<String, Value>,
    state: &mut ValidationState<'_, '_>,
) -> Vec<(&'v String, &'v Value)> {
    let schema = state.current_schema();
    let declared = schema.get("properties").and_then(Value::as_object);
    let patterns: Vec<Regex> = schema
        .get("patternProperties")
        .and_then(Value::as_object)
        .map(|patterns| {
            patterns
                .keys()
                .filter_map(|pattern| state.regex(pattern).ok())
                .collect()
        })
        .unwrap_or_default();

    object
        .iter()
        .filter(|(name, _)| !declared.is_some_and(|d| d.contains_key(name.as_str())))
        .filter(|(name, _)| !patterns.iter().any(|re| re.is_match(name)))
        .collect()
}
