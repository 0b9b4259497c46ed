use super::strategies::arb_json;
use draft4::{CollectAll, ValidationState, validate, validate_with_state};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Follow a JSON Pointer produced by the validator back into the instance.
fn lookup<'v>(instance: &'v Value, pointer: &str) -> Option<&'v Value> {
    instance.pointer(pointer)
}

fn strict_schema() -> Value {
    json!({
        "type": ["object", "array"],
        "items": {"$ref": "#/definitions/leaf"},
        "additionalProperties": {"$ref": "#/definitions/leaf"},
        "definitions": {
            "leaf": {
                "type": ["integer", "array", "object"],
                "items": {"$ref": "#/definitions/leaf"},
                "additionalProperties": {"$ref": "#/definitions/leaf"},
                "maximum": 100
            }
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Every reported path resolves to the reported value.
    #[test]
    fn error_paths_point_at_offending_values(v in arb_json()) {
        let result = validate(&strict_schema(), &v);
        for error in &result.errors {
            let found = lookup(&v, &error.path);
            prop_assert!(found.is_some(), "path {} not in {}", error.path, v);
            prop_assert_eq!(found.unwrap(), &error.value);
        }
    }

    // The state is balanced after any validation, however many errors occurred.
    #[test]
    fn path_balanced_after_validation(v in arb_json()) {
        let schema = strict_schema();
        let mut policy = CollectAll::new();
        let mut state = ValidationState::new(&schema, 128, &mut policy);
        let outcome = validate_with_state(&schema, &v, &mut state);
        prop_assert!(outcome.is_ok());
        prop_assert!(state.path().is_empty());
        prop_assert!(std::ptr::eq(state.current_schema(), &schema));
        prop_assert_eq!(state.depth(), 0);
    }
}

#[test]
fn nested_violation_path() {
    let schema = json!({
        "properties": {"a": {"items": {"properties": {"b": {"type": "string"}}}}}
    });
    let result = validate(&schema, &json!({"a": [{"b": 1}]}));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "/a/0/b");
}
