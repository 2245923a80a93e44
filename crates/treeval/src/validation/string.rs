//! String leaf validator
//!
//! Copyright (c) 2025 Treeval Contributors
//! Licensed under the Apache-2.0 license

use crate::validation::base::{ValidationContext, Validator};
use crate::validation::error::{ErrorKind, ValidationError, ValidationResult};
use serde_json::Value;

/// Terminal validator for string values with an optional minimum length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringValidator {
    /// Whether the field holding this validator may be absent entirely
    pub optional: bool,
    /// Whether a present null value is accepted
    pub allow_none: bool,
    /// Minimum accepted length in bytes, unbounded when `None`
    pub min_length: Option<usize>,
}

impl StringValidator {
    /// Create a required, non-null string validator with no length bound.
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

    /// Require at least `min_length` bytes.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }
}

impl Validator for StringValidator {
    fn evaluate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        if value.is_null() {
            return if self.allow_none {
                Ok(Value::Null)
            } else {
                Err(ValidationError::new(ErrorKind::InvalidNone, ctx.path.clone()))
            };
        }

        let text = value
            .as_str()
            .ok_or_else(|| ValidationError::new(ErrorKind::WrongType, ctx.path.clone()))?;

        if let Some(min_length) = self.min_length {
            if text.len() < min_length {
                return Err(ValidationError::new(ErrorKind::Invalid, ctx.path.clone()));
            }
        }

        Ok(value.clone())
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}
