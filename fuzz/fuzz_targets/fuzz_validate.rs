#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use draft4::{CollectAll, ValidationState, validate_with_state};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value, json};

const KEYWORDS: [&str; 22] = [
    "type",
    "properties",
    "patternProperties",
    "additionalProperties",
    "items",
    "additionalItems",
    "required",
    "dependencies",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "minItems",
    "maxItems",
    "uniqueItems",
    "pattern",
    "minLength",
    "maxLength",
    "enum",
    "format",
    "multipleOf",
    "$ref",
];

/// Generate an arbitrary JSON value from fuzzer bytes.
fn arbitrary_value(u: &mut Unstructured<'_>, depth: u32) -> arbitrary::Result<Value> {
    let top = if depth == 0 { 4 } else { 6 };
    match u.int_in_range(0..=top)? {
        0 => Ok(Value::Null),
        1 => Ok(Value::Bool(bool::arbitrary(u)?)),
        2 => {
            if bool::arbitrary(u)? {
                Ok(json!(i64::arbitrary(u)?))
            } else {
                let n = f64::arbitrary(u)?;
                Ok(serde_json::Number::from_f64(n)
                    .map(Value::Number)
                    .unwrap_or(Value::Null))
            }
        }
        3 => Ok(Value::String(String::arbitrary(u)?)),
        4 => Ok(json!("#")),
        5 => {
            let len = u.int_in_range(0..=3)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::Array(items))
        }
        _ => Ok(Value::Object(arbitrary_object(u, depth - 1)?)),
    }
}

/// Objects draw most keys from the keyword set so schemas reach real checkers.
fn arbitrary_object(
    u: &mut Unstructured<'_>,
    depth: u32,
) -> arbitrary::Result<Map<String, Value>> {
    let len = u.int_in_range(0..=4)?;
    let mut map = Map::new();
    for _ in 0..len {
        let key = if bool::arbitrary(u)? {
            u.choose(&KEYWORDS)?.to_string()
        } else {
            String::arbitrary(u)?
        };
        map.insert(key, arbitrary_value(u, depth)?);
    }
    Ok(map)
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    let schema = match arbitrary_object(&mut u, 3) {
        Ok(m) => Value::Object(m),
        Err(_) => return,
    };
    let instance = match arbitrary_value(&mut u, 3) {
        Ok(v) => v,
        Err(_) => return,
    };

    let mut policy = CollectAll::new();
    let mut state = ValidationState::new(&schema, 64, &mut policy);
    let _ = validate_with_state(&schema, &instance, &mut state);
    assert!(state.path().is_empty());
    assert_eq!(state.depth(), 0);
});
