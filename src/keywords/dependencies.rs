//! `dependencies`: constraints triggered by the presence of a member.

use super::report_wrong_argument;
use crate::driver::validate_with_state;
use crate::error::{DataErrorKind, Halt, SchemaErrorKind};
use crate::keyword::Keyword;
use crate::state::ValidationState;
use serde_json::{Map, Value};

pub(crate) fn check_dependencies<'s>(
    value: &Value,
    dependencies: &'s Value,
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };
    let Some(dependencies) = dependencies.as_object() else {
        return report_wrong_argument(Keyword::Dependencies, "an object", dependencies, state);
    };

    for (trigger, dependency) in dependencies {
        if !object.contains_key(trigger) {
            continue;
        }
        match dependency {
            Value::String(name) => check_member(object, name, state)?,
            // The whole object, not just the trigger member, must match.
            Value::Object(_) => validate_with_state(dependency, value, state)?,
            Value::Array(names) => {
                for name in names {
                    match name {
                        Value::String(name) => check_member(object, name, state)?,
                        _ => report_malformed(trigger, state)?,
                    }
                }
            }
            _ => report_malformed(trigger, state)?,
        }
    }
    Ok(())
}

fn check_member(
    object: &Map<String, Value>,
    name: &str,
    state: &mut ValidationState<'_, '_>,
) -> Result<(), Halt> {
    if object.contains_key(name) {
        return Ok(());
    }
    state.report_data_invalid(
        DataErrorKind::MissingDependency,
        &Value::String(name.to_string()),
    )
}

fn report_malformed(trigger: &str, state: &mut ValidationState<'_, '_>) -> Result<(), Halt> {
    state.report_schema_invalid(
        SchemaErrorKind::WrongTypeDependency,
        Some(Keyword::Dependencies),
        format!(
            "dependency of '{}' must be a property name, an array of names or a schema",
            trigger
        ),
    )
}
