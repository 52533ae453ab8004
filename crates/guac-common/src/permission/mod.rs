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

//! Permission sets and the diff engine behind incremental grant updates.
//!
//! Memberships and grants are never mutated in place: the previous and the
//! desired set are diffed, and the result is expressed as an ordered list of
//! tagged patch operations the server applies in one request.

#[cfg(test)]
mod tests;

use crate::error::{Diagnostic, Diagnostics, GuacError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Patch path for group membership operations.
pub const GROUP_MEMBER_PATH: &str = "/";
/// Patch path for system permission operations.
pub const SYSTEM_PERMISSIONS_PATH: &str = "/systemPermissions";
/// Patch path prefix for connection READ grants.
pub const CONNECTION_PERMISSIONS_PATH: &str = "/connectionPermissions";
/// Patch path prefix for connection group READ grants.
pub const CONNECTION_GROUP_PERMISSIONS_PATH: &str = "/connectionGroupPermissions";

const READ_PERMISSION: &str = "READ";

/// Global capability grants the server accepts.
pub const VALID_SYSTEM_PERMISSIONS: &[&str] = &[
    "ADMINISTER",
    "CREATE_USER",
    "CREATE_USER_GROUP",
    "CREATE_CONNECTION",
    "CREATE_CONNECTION_GROUP",
    "CREATE_SHARING_PROFILE",
];

/// One tagged patch operation of a permission update request.
///
/// The shape is JSON-Patch-like but the `path` values are API-specific, not
/// RFC 6902 pointers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOp {
    pub op: PatchOp,
    pub path: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
}

impl PermissionOp {
    pub fn add_group_member(identifier: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Add,
            path: GROUP_MEMBER_PATH.to_string(),
            value: identifier.into(),
        }
    }

    pub fn remove_group_member(identifier: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: GROUP_MEMBER_PATH.to_string(),
            value: identifier.into(),
        }
    }

    pub fn add_system_permission(permission: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Add,
            path: SYSTEM_PERMISSIONS_PATH.to_string(),
            value: permission.into(),
        }
    }

    pub fn remove_system_permission(permission: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: SYSTEM_PERMISSIONS_PATH.to_string(),
            value: permission.into(),
        }
    }

    /// READ grant on a connection.
    pub fn add_connection(identifier: &str) -> Self {
        Self {
            op: PatchOp::Add,
            path: format!("{}/{}", CONNECTION_PERMISSIONS_PATH, identifier),
            value: READ_PERMISSION.to_string(),
        }
    }

    pub fn remove_connection(identifier: &str) -> Self {
        Self {
            op: PatchOp::Remove,
            path: format!("{}/{}", CONNECTION_PERMISSIONS_PATH, identifier),
            value: READ_PERMISSION.to_string(),
        }
    }

    /// READ grant on a connection group.
    pub fn add_connection_group(identifier: &str) -> Self {
        Self {
            op: PatchOp::Add,
            path: format!("{}/{}", CONNECTION_GROUP_PERMISSIONS_PATH, identifier),
            value: READ_PERMISSION.to_string(),
        }
    }

    pub fn remove_connection_group(identifier: &str) -> Self {
        Self {
            op: PatchOp::Remove,
            path: format!("{}/{}", CONNECTION_GROUP_PERMISSIONS_PATH, identifier),
            value: READ_PERMISSION.to_string(),
        }
    }
}

/// The full permissions document the server returns for a user or group.
///
/// Sharing-profile and active-connection maps are carried read-only; this
/// crate exposes no mutation surface for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionData {
    pub connection_permissions: HashMap<String, Vec<String>>,
    pub connection_group_permissions: HashMap<String, Vec<String>>,
    pub sharing_profile_permissions: HashMap<String, Vec<String>>,
    pub user_permissions: HashMap<String, Vec<String>>,
    pub user_group_permissions: HashMap<String, Vec<String>>,
    pub system_permissions: Vec<String>,
    pub active_connection_permissions: HashMap<String, Vec<String>>,
}

/// The two directions of a set reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub to_add: Vec<String>,
    pub to_remove: Vec<String>,
}

/// Elements of `a` that are absent from `b`, in `a`'s insertion order.
pub fn slice_diff(a: &[String], b: &[String]) -> Vec<String> {
    a.iter().filter(|value| !b.contains(value)).cloned().collect()
}

/// Computes the minimal add/remove reconciliation between a previous and a
/// desired set of identifiers: two one-directional [`slice_diff`] passes with
/// swapped inputs.
///
/// Output order is the insertion order of the inputs; callers must not
/// depend on it.
pub fn diff(old: &[String], new: &[String]) -> DiffResult {
    DiffResult {
        to_add: slice_diff(new, old),
        to_remove: slice_diff(old, new),
    }
}

/// Fails when any value appears more than once, enumerating every offender.
///
/// Used for group-membership additions: the remote API may reject redundant
/// add operations or no-op them inconsistently.
pub fn check_for_duplicates(values: &[String]) -> Result<(), GuacError> {
    let mut seen: Vec<&str> = Vec::new();
    let mut duplicates: Vec<&str> = Vec::new();

    for value in values {
        if seen.contains(&value.as_str()) {
            if !duplicates.contains(&value.as_str()) {
                duplicates.push(value);
            }
        } else {
            seen.push(value);
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(GuacError::Validation(
            Diagnostic::new(
                "Duplicate entries supplied",
                format!("The following values appear more than once: {}", duplicates.join(", ")),
            )
            .into(),
        ))
    }
}

/// Fails when any candidate identifier has no match in the authoritative
/// group list, enumerating every unknown identifier. Run before issuing
/// membership-add operations so a typo produces a clear error instead of a
/// silent no-op or a remote 404.
pub fn validate_group_references(candidates: &[String], existing: &[String]) -> Result<(), GuacError> {
    let unknown: Vec<&str> = candidates
        .iter()
        .filter(|candidate| !existing.contains(candidate))
        .map(String::as_str)
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(GuacError::Validation(
            Diagnostic::new(
                "Invalid user group(s) supplied",
                format!("The following groups do not exist: {}", unknown.join(", ")),
            )
            .into(),
        ))
    }
}

/// Fails when any value is not a known system permission, enumerating every
/// invalid value.
pub fn validate_system_permissions(values: &[String]) -> Result<(), GuacError> {
    let mut diags = Diagnostics::new();
    for value in values {
        if !VALID_SYSTEM_PERMISSIONS.contains(&value.as_str()) {
            diags.push(Diagnostic::new(
                "Invalid system permission",
                format!(
                    "Value {} is not one of: {}",
                    value,
                    VALID_SYSTEM_PERMISSIONS.join(", ")
                ),
            ));
        }
    }
    diags.into_result()
}

/// Expands a membership diff into patch operations, removes first.
pub fn membership_patch(diff: &DiffResult) -> Vec<PermissionOp> {
    let removes = diff.to_remove.iter().map(PermissionOp::remove_group_member);
    let adds = diff.to_add.iter().map(PermissionOp::add_group_member);
    removes.chain(adds).collect()
}

/// Expands a system-permission diff into patch operations, removes first.
pub fn system_permission_patch(diff: &DiffResult) -> Vec<PermissionOp> {
    let removes = diff.to_remove.iter().map(PermissionOp::remove_system_permission);
    let adds = diff.to_add.iter().map(PermissionOp::add_system_permission);
    removes.chain(adds).collect()
}

/// Expands a connection READ-grant diff into patch operations, removes first.
pub fn connection_patch(diff: &DiffResult) -> Vec<PermissionOp> {
    let removes = diff.to_remove.iter().map(|id| PermissionOp::remove_connection(id));
    let adds = diff.to_add.iter().map(|id| PermissionOp::add_connection(id));
    removes.chain(adds).collect()
}

/// Expands a connection-group READ-grant diff into patch operations, removes first.
pub fn connection_group_patch(diff: &DiffResult) -> Vec<PermissionOp> {
    let removes = diff.to_remove.iter().map(|id| PermissionOp::remove_connection_group(id));
    let adds = diff.to_add.iter().map(|id| PermissionOp::add_connection_group(id));
    removes.chain(adds).collect()
}
