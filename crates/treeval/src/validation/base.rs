//! Validation context and the common validator contract
//!
//! Copyright (c) 2025 Treeval Contributors
//! Licensed under the Apache-2.0 license

use crate::validation::error::ValidationResult;
use serde_json::Value;

/// Location inside a nested value, carried down through recursion.
///
/// Each descent into a named mapping field produces a child context whose
/// path is one segment longer. The root context has an empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    /// Field names from the root to the current node
    pub path: Vec<String>,
}

impl ValidationContext {
    /// Create the root context with an empty path.
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Create a child context extended by one field segment.
    ///
    /// The child owns its own backing storage; sibling descents never
    /// observe each other's segments.
    pub fn child<S: AsRef<str>>(&self, segment: S) -> Self {
        let mut path = self.path.clone();
        path.push(segment.as_ref().to_string());
        Self { path }
    }

    /// Render the path in dotted form with a `$` root.
    pub fn json_path(&self) -> String {
        if self.path.is_empty() {
            "$".to_string()
        } else {
            format!("$.{}", self.path.join("."))
        }
    }
}

/// Common contract satisfied by every validator kind.
///
/// A [`MappingValidator`](crate::validation::MappingValidator) holds
/// heterogeneous children through this trait and queries their optionality
/// without knowing the concrete kind. Validators are immutable configuration
/// after construction, so a tree may be shared across threads and invoked
/// concurrently without coordination.
pub trait Validator: Send + Sync {
    /// Check `value` at the location described by `ctx`.
    ///
    /// Returns the validated value unchanged on success, or the first
    /// failure encountered. Evaluation is fail-fast: errors are returned
    /// immediately and never aggregated.
    fn evaluate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value>;

    /// Whether the mapping field holding this validator may be absent from
    /// the input entirely.
    ///
    /// Independent of `allow_none`, which governs a present-but-null value.
    fn is_optional(&self) -> bool;
}
