//! Recursion driver: applies one (schema, value) pair.
//!
//! Bounds nesting depth, follows local `$ref` pointers, swaps the current
//! schema in and out of the state, and hands the schema's keywords to the
//! dispatcher.

use crate::dispatch::validate_attributes;
use crate::error::*;
use crate::state::ValidationState;
use serde_json::Value;
use tracing::debug;

/// Validate `value` against `schema`, reporting through `state`.
///
/// On return (`Ok` or `Err`) the state's current schema and depth are what
/// they were on entry.
pub fn validate_with_state<'s>(
    schema: &'s Value,
    value: &Value,
    state: &mut ValidationState<'s, '_>,
) -> Result<(), Halt> {
    let Some(attributes) = schema.as_object() else {
        return state.report_schema_invalid(
            SchemaErrorKind::SchemaInvalid,
            None,
            format!("schema must be an object, got {}", kind_name(schema)),
        );
    };

    state.enter()?;

    // A schema holding `$ref` is replaced by its target; siblings are ignored.
    let result = if let Some(reference) = attributes.get("$ref") {
        match resolve_ref(state.root(), reference) {
            Ok(target) => {
                debug!(reference = %reference, path = %state.pointer(), "following $ref");
                validate_with_state(target, value, state)
            }
            Err(message) => {
                state.report_schema_invalid(SchemaErrorKind::UnresolvedRef, None, message)
            }
        }
    } else {
        let parent = state.current_schema();
        state.set_current_schema(schema);
        let result = validate_attributes(value, attributes, state);
        state.set_current_schema(parent);
        result
    };

    state.leave();
    result
}

/// Resolve a local reference (`#` or `#/json/pointer`) against the root schema.
pub fn resolve_ref<'s>(root: &'s Value, reference: &Value) -> Result<&'s Value, String> {
    let Some(reference) = reference.as_str() else {
        return Err(format!("$ref must be a string, got {}", kind_name(reference)));
    };
    let Some(fragment) = reference.strip_prefix('#') else {
        return Err(format!(
            "cannot resolve '{}': only document-local references are supported",
            reference
        ));
    };
    let pointer = percent_decode(fragment)
        .ok_or_else(|| format!("malformed percent-encoding in '{}'", reference))?;
    if pointer.is_empty() {
        return Ok(root);
    }
    root.pointer(&pointer)
        .ok_or_else(|| format!("'{}' does not point into the schema", reference))
}

fn percent_decode(input: &str) -> Option<String> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(byte) = bytes.next() {
        if byte == b'%' {
            let hi = char::from(bytes.next()?).to_digit(16)?;
            let lo = char::from(bytes.next()?).to_digit(16)?;
            out.push((hi * 16 + lo) as u8);
        } else {
            out.push(byte);
        }
    }
    String::from_utf8(out).ok()
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
