//  Copyright (c) 2026 Metaform Systems, Inc
//
//  This program and the accompanying materials are made available under the
//  terms of the Apache License, Version 2.0 which is available at
//  https://www.apache.org/licenses/LICENSE-2.0
//
//  SPDX-License-Identifier: Apache-2.0
//
//  Contributors:
//       Metaform Systems, Inc. - initial API and implementation
//

//! Helpers for the string-typed scalars of the Guacamole wire format.

use crate::error::Diagnostic;

/// Converts a wire boolean to `bool`. Only the literal `"true"` is truthy;
/// the server encodes false as the empty string.
pub fn string_to_bool(value: &str) -> bool {
    value == "true"
}

/// Converts a `bool` to its wire form: `"true"` or the empty string.
pub fn bool_to_string(value: bool) -> String {
    if value {
        "true".to_string()
    } else {
        String::new()
    }
}

/// Checks a string-typed integer field. Empty values are allowed (the field
/// is unset); anything else must parse as an integer.
pub fn require_numeric(field: &str, value: &str) -> Option<Diagnostic> {
    if value.is_empty() || value.parse::<i64>().is_ok() {
        None
    } else {
        Some(Diagnostic::new(
            format!("Invalid value for {}", field),
            format!("Expected a numeric string for {}, got: {}", field, value),
        ))
    }
}

/// Checks a string field against a closed list of valid choices. Empty values
/// are allowed.
pub fn require_choice(field: &str, value: &str, choices: &[&str]) -> Option<Diagnostic> {
    if value.is_empty() || choices.contains(&value) {
        None
    } else {
        Some(Diagnostic::new(
            format!("Invalid value for {}", field),
            format!(
                "Value {} is not one of the valid choices for {}: {}",
                value,
                field,
                choices.join(", ")
            ),
        ))
    }
}
