//! Validation engine for untyped decoded data
//!
//! This module checks nested decoded values (nulls, strings, integers, and
//! string-keyed mappings) against a declarative schema built from three
//! validator kinds:
//!
//! - [`StringValidator`] — string leaf with an optional minimum length
//! - [`IntegerValidator`] — integer leaf with optional inclusive bounds
//! - [`MappingValidator`] — composite with a fixed field-to-validator schema
//!
//! Evaluation is depth-first over the schema's shape and fail-fast: the
//! first failure anywhere is returned as a [`ValidationError`] carrying the
//! failing field's path. Validators are immutable configuration and can be
//! shared freely across calls and threads.
//!
//! Copyright (c) 2025 Treeval Contributors
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
pub mod integer;
pub mod mapping;
pub mod string;

// Re-export commonly used types
pub use base::{ValidationContext, Validator};
pub use error::{ErrorKind, ValidationError, ValidationResult};
pub use integer::IntegerValidator;
pub use mapping::MappingValidator;
pub use string::StringValidator;

use serde_json::Value;

/// Validate a decoded value against a validator tree.
///
/// Seeds the recursion with the empty root path. On success the returned
/// value mirrors the schema's shape: leaves come back unchanged and
/// mappings carry exactly the schema's field set.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use treeval::validation::{validate, MappingValidator, StringValidator};
///
/// let schema = MappingValidator::new()
///     .field("title", StringValidator::new().with_min_length(2));
///
/// let parsed = validate(&schema, &json!({"title": "My document"})).unwrap();
/// assert_eq!(parsed, json!({"title": "My document"}));
///
/// let error = validate(&schema, &json!({"title": "x"})).unwrap_err();
/// assert_eq!(error.json_path(), "$.title");
/// ```
pub fn validate(root: &dyn Validator, value: &Value) -> ValidationResult<Value> {
    root.evaluate(value, &ValidationContext::new())
}
