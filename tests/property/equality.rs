use super::strategies::{arb_json, reorder_members};
use draft4::json_equal;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn equality_is_reflexive(v in arb_json()) {
        prop_assert!(json_equal(&v, &v));
    }

    #[test]
    fn equality_is_symmetric(a in arb_json(), b in arb_json()) {
        prop_assert_eq!(json_equal(&a, &b), json_equal(&b, &a));
    }

    // Object member order never matters.
    #[test]
    fn equality_ignores_member_order(v in arb_json()) {
        prop_assert!(json_equal(&v, &reorder_members(&v)));
    }

    // Integers and their float spelling compare equal.
    #[test]
    fn integer_equals_its_float(n in -1_000_000i64..1_000_000) {
        prop_assert!(json_equal(&json!(n), &json!(n as f64)));
    }
}

#[test]
fn object_order_independent_array_order_dependent() {
    assert!(json_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
    assert!(!json_equal(&json!([1, 2]), &json!([2, 1])));
}

#[test]
fn different_kinds_are_never_equal() {
    let values = [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(json_equal(a, b), i == j, "{} vs {}", a, b);
        }
    }
}

#[test]
fn objects_with_extra_members_differ() {
    assert!(!json_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    assert!(!json_equal(&json!({"a": 1, "b": 2}), &json!({"a": 1})));
}
