use super::strategies::arb_json;
use draft4::{DataErrorKind, json_equal, validate};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Reference check: no two distinct positions hold deep-equal values.
fn pairwise_distinct(items: &[Value]) -> bool {
    for i in 0..items.len() {
        for j in 0..items.len() {
            if i != j && json_equal(&items[i], &items[j]) {
                return false;
            }
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn unique_items_matches_pairwise_definition(
        items in prop::collection::vec(arb_json(), 0..6),
    ) {
        let result = validate(&json!({"uniqueItems": true}), &Value::Array(items.clone()));
        prop_assert_eq!(result.is_valid(), pairwise_distinct(&items));
        if let Some(error) = result.errors.first() {
            prop_assert_eq!(error.kind, DataErrorKind::NotUnique);
            prop_assert!(items.iter().any(|i| json_equal(i, &error.value)));
        }
    }

    // Appending a copy of any element always makes the array non-unique.
    #[test]
    fn duplicated_element_is_detected(
        items in prop::collection::vec(arb_json(), 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut items = items;
        let dup = items[pick.index(items.len())].clone();
        items.push(dup);
        let schema = json!({"uniqueItems": true});
        prop_assert!(!validate(&schema, &Value::Array(items)).is_valid());
    }
}

#[test]
fn worked_examples() {
    let schema = json!({"uniqueItems": true});
    assert!(validate(&schema, &json!([1, 2, 3])).is_valid());
    let result = validate(&schema, &json!([1, 2, 2]));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].value, json!(2));
    assert!(validate(&schema, &json!([])).is_valid());
}
