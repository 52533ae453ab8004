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

use crate::error::{Diagnostic, Diagnostics};
use crate::util::string_to_bool;
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A Guacamole user account.
///
/// The password is write-only: the server never returns it, and it is omitted
/// from request bodies when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub attributes: UserAttributes,
    #[serde(rename = "lastActive", default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<i64>,
}

/// Additional user attributes.
///
/// All values are string-typed on the wire; boolean-ish attributes carry
/// `"true"` or the empty string (see [`crate::util::string_to_bool`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    #[serde(rename = "guac-organizational-role", default, skip_serializing_if = "Option::is_none")]
    pub organizational_role: Option<String>,
    #[serde(rename = "guac-full-name", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(rename = "guac-email-address", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(rename = "access-window-start", default, skip_serializing_if = "Option::is_none")]
    pub access_window_start: Option<String>,
    #[serde(rename = "access-window-end", default, skip_serializing_if = "Option::is_none")]
    pub access_window_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
    #[serde(rename = "valid-from", default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(rename = "valid-until", default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

impl UserAttributes {
    /// Whether the account is disabled (wire value `"true"`).
    pub fn is_disabled(&self) -> bool {
        string_to_bool(self.disabled.as_deref().unwrap_or_default())
    }

    /// Whether the password is expired and must be changed at next login.
    pub fn is_expired(&self) -> bool {
        string_to_bool(self.expired.as_deref().unwrap_or_default())
    }

    /// Validates the attribute values that have a constrained format. Every
    /// failure is collected; nothing is sent to the server before the caller
    /// checks the result.
    pub fn validate(&self) -> Diagnostics {
        let mut diags = Diagnostics::new();

        if let Some(tz) = non_empty(&self.timezone) {
            if tz.parse::<Tz>().is_err() {
                diags.push(Diagnostic::new(
                    "Invalid timezone",
                    format!("Unable to process timezone string: {}", tz),
                ));
            }
        }

        for (field, value) in [
            ("access-window-start", &self.access_window_start),
            ("access-window-end", &self.access_window_end),
        ] {
            if let Some(v) = non_empty(value) {
                if NaiveTime::parse_from_str(v, TIME_FORMAT).is_err() {
                    diags.push(Diagnostic::new(
                        format!("Invalid value for {}", field),
                        format!("Expected HH:MM:SS for {}, got: {}", field, v),
                    ));
                }
            }
        }

        for (field, value) in [("valid-from", &self.valid_from), ("valid-until", &self.valid_until)] {
            if let Some(v) = non_empty(value) {
                if NaiveDate::parse_from_str(v, DATE_FORMAT).is_err() {
                    diags.push(Diagnostic::new(
                        format!("Invalid value for {}", field),
                        format!("Expected YYYY-MM-DD for {}, got: {}", field, v),
                    ));
                }
            }
        }

        diags
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
