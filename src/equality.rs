//! Structural JSON equality used by `enum` and `uniqueItems`.

use crate::num;
use serde_json::Value;

/// Deep equality over JSON values.
///
/// Numbers compare numerically, arrays element-wise in order, objects by
/// member name regardless of order. Values of different kinds never match.
pub fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => num::equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| json_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            // Names are unique per object, so equal size plus a ⊆ b is enough.
            a.len() == b.len()
                && a.iter()
                    .all(|(name, va)| b.get(name).is_some_and(|vb| json_equal(va, vb)))
        }
        _ => false,
    }
}
