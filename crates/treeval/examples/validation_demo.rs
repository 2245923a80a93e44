//! Validation demonstration example
//!
//! Builds a document schema with a nested organization mapping and runs a
//! few inputs through it.
//!
//! Copyright (c) 2025 Treeval Contributors
//! Licensed under the Apache-2.0 license

use serde_json::json;
use treeval::{validate, IntegerValidator, MappingValidator, StringValidator};

fn main() {
    println!("=== Treeval Validation Demo ===\n");

    let organization = MappingValidator::new()
        .field("id", IntegerValidator::new())
        .field("title", StringValidator::new().with_min_length(2))
        .optional()
        .allow_none();

    let document = MappingValidator::new()
        .field("title", StringValidator::new().with_min_length(2))
        .field(
            "folder_id",
            IntegerValidator::new()
                .optional()
                .allow_none()
                .with_min_value(1)
                .with_max_value(10),
        )
        .field("owner_id", IntegerValidator::new().optional().allow_none())
        .field("description", StringValidator::new().optional().allow_none())
        .field("organization", organization);

    // Valid document
    let valid = json!({
        "title": "Title",
        "owner_id": 3,
        "folder_id": 1,
        "description": "",
        "organization": {
            "id": 3,
            "title": "My Organization"
        }
    });

    println!("Validating a well-formed document:");
    match validate(&document, &valid) {
        Ok(parsed) => println!("   Parsed: {parsed}"),
        Err(e) => println!("   Error: {e}"),
    }

    // Nested constraint violation
    let short_title = json!({
        "title": "Title",
        "organization": {
            "id": 3,
            "title": "x"
        }
    });

    println!("\nValidating a document with a too-short organization title:");
    match validate(&document, &short_title) {
        Ok(parsed) => println!("   Unexpectedly parsed: {parsed}"),
        Err(e) => println!("   Error: {e}"),
    }

    // Missing required field
    let missing_title = json!({
        "folder_id": 2
    });

    println!("\nValidating a document missing its required title:");
    match validate(&document, &missing_title) {
        Ok(parsed) => println!("   Unexpectedly parsed: {parsed}"),
        Err(e) => println!("   Error: {e}"),
    }
}
