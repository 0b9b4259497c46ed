use super::strategies::arb_json;
use draft4::keywords::types::is_type;
use draft4::is_valid;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn integer_type_holds_exactly_for_integral_numbers(v in arb_json()) {
        let integral = v.is_i64() || v.is_u64();
        prop_assert_eq!(is_type(&v, "integer"), integral);
        prop_assert_eq!(is_valid(&json!({"type": "integer"}), &v), integral);
    }

    #[test]
    fn string_or_null_union(v in arb_json()) {
        let expected = v.is_string() || v.is_null();
        prop_assert_eq!(is_valid(&json!({"type": ["string", "null"]}), &v), expected);
    }

    #[test]
    fn any_accepts_everything(v in arb_json()) {
        let schema = json!({"type": "any"});
        prop_assert!(is_valid(&schema, &v));
    }

    // A subschema union member behaves like the subschema itself.
    #[test]
    fn subschema_member_matches_like_its_schema(v in arb_json()) {
        let member = json!({"type": "object", "additionalProperties": {"type": "integer"}});
        prop_assert_eq!(
            is_valid(&json!({"type": [member.clone()]}), &v),
            is_valid(&member, &v)
        );
    }

    #[test]
    fn every_value_has_exactly_one_primitive_kind(v in arb_json()) {
        let kinds = ["string", "number", "boolean", "object", "array", "null"];
        let matching = kinds.iter().filter(|k| is_type(&v, k)).count();
        prop_assert_eq!(matching, 1);
    }
}
