//! Validation error types with path context
//!
//! Copyright (c) 2025 Treeval Contributors
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The closed set of failure kinds a validator can report.
///
/// No validator introduces kinds outside this taxonomy; callers can match
/// on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Value is type-correct but violates a bound (min length, min/max value)
    Invalid,
    /// Value's runtime shape does not match the node's expected kind
    WrongType,
    /// A mapping field required by the schema is absent from the input
    MissingAttr,
    /// Value is null and the node does not permit null
    InvalidNone,
}

impl ErrorKind {
    /// Stable token for this kind, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Invalid => "invalid",
            ErrorKind::WrongType => "wrong_type",
            ErrorKind::MissingAttr => "missing_attr",
            ErrorKind::InvalidNone => "invalid_none",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure at a specific location inside a nested value.
///
/// Created at the exact point a check fails and propagated unchanged to the
/// top-level caller; errors are never merged or wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Field names from the root to the failing node, root = empty
    pub path: Vec<String>,
}

impl ValidationError {
    /// Create a new validation error at the given path.
    pub fn new(kind: ErrorKind, path: Vec<String>) -> Self {
        Self { kind, path }
    }

    /// Render the path in dotted form with a `$` root, e.g.
    /// `$.organization.title`.
    pub fn json_path(&self) -> String {
        if self.path.is_empty() {
            "$".to_string()
        } else {
            format!("$.{}", self.path.join("."))
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error at '{}': {}", self.json_path(), self.kind)
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
