use proptest::prelude::*;
use serde_json::{Map, Value, json};

/// Scalar JSON leaves. Floats are kept finite so they fit a `serde_json::Number`.
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| json!(n)),
        (-1000.0f64..1000.0).prop_map(|f| json!(f)),
        "[a-z]{0,4}".prop_map(Value::String),
    ]
}

/// Arbitrary JSON trees of bounded depth and width.
pub fn arb_json() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-c]{1,2}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Reverse the member order of every object in the tree.
pub fn reorder_members(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(reorder_members).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .rev()
                .map(|(k, v)| (k.clone(), reorder_members(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
