use draft4::is_valid;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn integer_multiples_are_exact(
        divisor in prop_oneof![-1000i64..-1, 1i64..1000],
        factor in -10_000i64..10_000,
        offset in 1i64..1000,
    ) {
        let schema = json!({"multipleOf": divisor});
        prop_assert!(is_valid(&schema, &json!(divisor * factor)));
        let off = offset % divisor.abs();
        if off != 0 {
            prop_assert!(!is_valid(&schema, &json!(divisor * factor + off)));
        }
    }

    #[test]
    fn zero_divisor_always_fails(n in -1000i64..1000, f in -1000.0f64..1000.0) {
        let schema = json!({"multipleOf": 0});
        prop_assert!(!is_valid(&schema, &json!(n)));
        prop_assert!(!is_valid(&schema, &json!(f)));
    }

    #[test]
    fn integral_float_divisor_matches_integer_divisor(
        divisor in 1i64..1000,
        value in prop_oneof![any::<i64>(), (1i64 << 53)..(1i64 << 60)],
    ) {
        let float_divisor = divisor as f64;
        let float_schema = json!({"multipleOf": float_divisor});
        let int_schema = json!({"multipleOf": divisor});
        prop_assert_eq!(
            is_valid(&float_schema, &json!(value)),
            is_valid(&int_schema, &json!(value))
        );
    }

    // Whole cents are multiples of 0.01 despite binary rounding.
    #[test]
    fn decimal_cents(cents in 0i64..1_000_000) {
        let value = cents as f64 / 100.0;
        let schema = json!({"multipleOf": 0.01});
        prop_assert!(is_valid(&schema, &json!(value)));
    }
}

#[test]
fn worked_examples() {
    assert!(!is_valid(&json!({"multipleOf": 0}), &json!(4)));
    assert!(is_valid(&json!({"multipleOf": 2}), &json!(4)));
    assert!(!is_valid(&json!({"multipleOf": 2}), &json!(5)));
}
