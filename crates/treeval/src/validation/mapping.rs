//! Mapping composite validator
//!
//! Copyright (c) 2025 Treeval Contributors
//! Licensed under the Apache-2.0 license

use crate::validation::base::{ValidationContext, Validator};
use crate::validation::error::{ErrorKind, ValidationError, ValidationResult};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Composite validator holding a fixed mapping of field name to child
/// validator.
///
/// Evaluation recurses depth-first following the schema's shape, not the
/// input's: unknown input keys are dropped and the output carries exactly
/// the schema's field set. The first failure anywhere in the subtree aborts
/// the whole evaluation.
///
/// Fields are visited in the schema's own deterministic order, so the same
/// validator tree and input always produce the same result.
#[derive(Default)]
pub struct MappingValidator {
    /// Field name to child validator
    pub schema: BTreeMap<String, Box<dyn Validator>>,
    /// Whether the field holding this validator may be absent entirely
    pub optional: bool,
    /// Whether a present null value is accepted
    pub allow_none: bool,
}

impl MappingValidator {
    /// Create a required, non-null mapping validator with an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the schema.
    pub fn field<S, V>(mut self, name: S, validator: V) -> Self
    where
        S: Into<String>,
        V: Validator + 'static,
    {
        self.schema.insert(name.into(), Box::new(validator));
        self
    }

    /// Allow the field holding this validator to be absent from its parent.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Accept a present null value.
    pub fn allow_none(mut self) -> Self {
        self.allow_none = true;
        self
    }
}

impl fmt::Debug for MappingValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingValidator")
            .field("fields", &self.schema.keys().collect::<Vec<_>>())
            .field("optional", &self.optional)
            .field("allow_none", &self.allow_none)
            .finish()
    }
}

impl Validator for MappingValidator {
    fn evaluate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        if value.is_null() {
            return if self.allow_none {
                Ok(Value::Null)
            } else {
                Err(ValidationError::new(ErrorKind::InvalidNone, ctx.path.clone()))
            };
        }

        // `as_object` classifies empty objects correctly, so no separate
        // shape probe is needed.
        let input = value
            .as_object()
            .ok_or_else(|| ValidationError::new(ErrorKind::WrongType, ctx.path.clone()))?;

        let mut output = Map::new();
        for (name, child) in &self.schema {
            let field_ctx = ctx.child(name);
            match input.get(name) {
                None if child.is_optional() => {
                    // Absent and allowed to be. Keep the key so the output
                    // always carries exactly the schema's field set.
                    output.insert(name.clone(), Value::Null);
                }
                None => {
                    return Err(ValidationError::new(ErrorKind::MissingAttr, field_ctx.path));
                }
                Some(sub_value) => {
                    output.insert(name.clone(), child.evaluate(sub_value, &field_ctx)?);
                }
            }
        }

        Ok(Value::Object(output))
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}
