//! Integer leaf validator
//!
//! Copyright (c) 2025 Treeval Contributors
//! Licensed under the Apache-2.0 license

use crate::validation::base::{ValidationContext, Validator};
use crate::validation::error::{ErrorKind, ValidationError, ValidationResult};
use serde_json::Value;

/// Terminal validator for integer values with optional inclusive bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerValidator {
    /// Whether the field holding this validator may be absent entirely
    pub optional: bool,
    /// Whether a present null value is accepted
    pub allow_none: bool,
    /// Inclusive lower bound, unbounded when `None`
    pub min_value: Option<i64>,
    /// Inclusive upper bound, unbounded when `None`
    pub max_value: Option<i64>,
}

impl IntegerValidator {
    /// Create a required, non-null integer validator with no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow the field to be absent from the input mapping.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Accept a present null value.
    pub fn allow_none(mut self) -> Self {
        self.allow_none = true;
        self
    }

    /// Require the value to be at least `min_value`.
    pub fn with_min_value(mut self, min_value: i64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Require the value to be at most `max_value`.
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = Some(max_value);
        self
    }
}

impl Validator for IntegerValidator {
    fn evaluate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        if value.is_null() {
            return if self.allow_none {
                Ok(Value::Null)
            } else {
                Err(ValidationError::new(ErrorKind::InvalidNone, ctx.path.clone()))
            };
        }

        // Floats and out-of-range numbers are not integers here.
        let number = value
            .as_i64()
            .ok_or_else(|| ValidationError::new(ErrorKind::WrongType, ctx.path.clone()))?;

        if let Some(min_value) = self.min_value {
            if number < min_value {
                return Err(ValidationError::new(ErrorKind::Invalid, ctx.path.clone()));
            }
        }

        if let Some(max_value) = self.max_value {
            if number > max_value {
                return Err(ValidationError::new(ErrorKind::Invalid, ctx.path.clone()));
            }
        }

        Ok(value.clone())
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn evaluate(validator: &IntegerValidator, value: Value) -> ValidationResult<Value> {
        validator.evaluate(&value, &ValidationContext::new())
    }

    #[test]
    fn test_valid_integer_returned_unchanged() {
        let validator = IntegerValidator::new();
        assert_eq!(evaluate(&validator, json!(56)).unwrap(), json!(56));
    }

    #[test]
    fn test_null_rejected_by_default() {
        let validator = IntegerValidator::new();
        assert_eq!(evaluate(&validator, Value::Null).unwrap_err().kind, ErrorKind::InvalidNone);
    }

    #[test]
    fn test_null_accepted_when_allowed() {
        let validator = IntegerValidator::new().allow_none();
        assert_eq!(evaluate(&validator, Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_non_integer_is_wrong_type() {
        let validator = IntegerValidator::new();
        assert_eq!(evaluate(&validator, json!("2")).unwrap_err().kind, ErrorKind::WrongType);
        assert_eq!(evaluate(&validator, json!(2.5)).unwrap_err().kind, ErrorKind::WrongType);
        assert_eq!(evaluate(&validator, json!(true)).unwrap_err().kind, ErrorKind::WrongType);
    }

    #[test]
    fn test_min_value_violated() {
        let validator = IntegerValidator::new().with_min_value(6);
        assert_eq!(evaluate(&validator, json!(5)).unwrap_err().kind, ErrorKind::Invalid);
    }

    #[test]
    fn test_min_value_is_inclusive() {
        let validator = IntegerValidator::new().with_min_value(6);
        assert_eq!(evaluate(&validator, json!(6)).unwrap(), json!(6));
    }

    #[test]
    fn test_max_value_violated() {
        let validator = IntegerValidator::new().with_max_value(6);
        assert_eq!(evaluate(&validator, json!(7)).unwrap_err().kind, ErrorKind::Invalid);
    }

    #[test]
    fn test_max_value_is_inclusive() {
        let validator = IntegerValidator::new().with_max_value(6);
        assert_eq!(evaluate(&validator, json!(6)).unwrap(), json!(6));
    }

    #[test]
    fn test_within_both_bounds() {
        let validator = IntegerValidator::new().with_min_value(3).with_max_value(6);
        assert_eq!(evaluate(&validator, json!(5)).unwrap(), json!(5));
    }
}
