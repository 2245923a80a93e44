//! Treeval - declarative validators for untyped decoded data
//!
//! This crate validates and normalizes nested untyped values — the shape a
//! generic decoder produces: nulls, strings, integers, and string-keyed
//! mappings — against a schema built from composable validator nodes. A
//! call either returns a structurally validated value or a precise
//! [`ValidationError`] identifying the failing field's location and reason.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use treeval::{validate, IntegerValidator, MappingValidator, StringValidator};
//!
//! let schema = MappingValidator::new()
//!     .field("title", StringValidator::new().with_min_length(2))
//!     .field("folder_id", IntegerValidator::new()
//!         .optional()
//!         .allow_none()
//!         .with_min_value(1)
//!         .with_max_value(10));
//!
//! let input = json!({"title": "Quarterly report", "folder_id": 3});
//! let parsed = validate(&schema, &input).unwrap();
//! assert_eq!(parsed, input);
//!
//! let error = validate(&schema, &json!({"folder_id": 3})).unwrap_err();
//! assert_eq!(error.to_string(), "Validation error at '$.title': missing_attr");
//! ```
//!
//! ## Semantics
//!
//! - **Fail-fast**: the first failure anywhere in the tree aborts the whole
//!   call; there is no multi-error accumulation.
//! - **Two independent axes**: `optional` governs whether a mapping key may
//!   be absent entirely; `allow_none` governs whether a present value may be
//!   null.
//! - **Schema-shaped output**: a successful mapping evaluation carries
//!   exactly the schema's field set; unknown input keys are dropped.
//! - **No coercion**: values come back unchanged, never converted between
//!   types.
//!
//! Copyright (c) 2025 Treeval Contributors
//! Licensed under the Apache-2.0 license

pub mod validation;

// Re-export commonly used types for convenience
pub use validation::{
    validate, ErrorKind, IntegerValidator, MappingValidator, StringValidator,
    ValidationContext, ValidationError, ValidationResult, Validator,
};
