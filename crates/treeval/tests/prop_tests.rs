//! Property-based tests for the validation engine
//!
//! These tests verify that validators behave correctly across a wide range
//! of inputs: no panics on arbitrary values, conforming inputs always pass,
//! and repeated evaluation is stable.

use proptest::prelude::*;
use serde_json::{json, Value};
use treeval::{
    validate, ErrorKind, IntegerValidator, MappingValidator, StringValidator,
};

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,50}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        3,  // max depth
        10, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                proptest::collection::hash_map("[a-zA-Z_][a-zA-Z0-9_]{0,20}", inner, 0..5)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

fn document_schema() -> MappingValidator {
    MappingValidator::new()
        .field("title", StringValidator::new().with_min_length(2))
        .field(
            "folder_id",
            IntegerValidator::new()
                .optional()
                .allow_none()
                .with_min_value(1)
                .with_max_value(10),
        )
        .field(
            "organization",
            MappingValidator::new()
                .field("id", IntegerValidator::new())
                .field("title", StringValidator::new().with_min_length(2))
                .optional()
                .allow_none(),
        )
}

proptest! {
    #[test]
    fn validation_never_panics(value in json_value_strategy()) {
        let schema = document_schema();
        let _ = validate(&schema, &value);
    }

    #[test]
    fn validation_is_idempotent(value in json_value_strategy()) {
        let schema = document_schema();
        prop_assert_eq!(validate(&schema, &value), validate(&schema, &value));
    }

    #[test]
    fn conforming_strings_always_pass(text in "[a-zA-Z0-9 ]{4,50}") {
        let validator = StringValidator::new().with_min_length(4);
        let result = validate(&validator, &json!(text.clone()));
        prop_assert_eq!(result.unwrap(), json!(text));
    }

    #[test]
    fn short_strings_always_fail_invalid(text in "[a-zA-Z0-9 ]{0,3}") {
        let validator = StringValidator::new().with_min_length(4);
        let error = validate(&validator, &json!(text)).unwrap_err();
        prop_assert_eq!(error.kind, ErrorKind::Invalid);
    }

    #[test]
    fn integers_within_bounds_pass(number in -100i64..=100) {
        let validator = IntegerValidator::new().with_min_value(-100).with_max_value(100);
        let result = validate(&validator, &json!(number));
        prop_assert_eq!(result.unwrap(), json!(number));
    }

    #[test]
    fn integers_outside_bounds_fail_invalid(number in prop_oneof![-1000i64..-100, 101i64..1000]) {
        let validator = IntegerValidator::new().with_min_value(-100).with_max_value(100);
        let error = validate(&validator, &json!(number)).unwrap_err();
        prop_assert_eq!(error.kind, ErrorKind::Invalid);
    }

    #[test]
    fn leaf_errors_at_root_carry_empty_path(value in json_value_strategy()) {
        let validator = IntegerValidator::new();
        if let Err(error) = validate(&validator, &value) {
            prop_assert!(error.path.is_empty());
        }
    }
}
