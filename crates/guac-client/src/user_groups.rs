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

use crate::client::GuacClient;
use guac_common::error::GuacError;
use guac_common::permission::{PermissionData, PermissionOp};
use guac_common::user_group::UserGroup;
use std::collections::HashMap;

const USER_GROUPS_BASE_PATH: &str = "userGroups";

impl GuacClient {
    /// Creates a user group and returns the created record.
    pub async fn create_user_group(&self, group: &UserGroup) -> Result<UserGroup, GuacError> {
        self.post(&[USER_GROUPS_BASE_PATH], group, "Failed to create user group")
            .await
    }

    /// Reads a user group by identifier.
    pub async fn read_user_group(&self, identifier: &str) -> Result<UserGroup, GuacError> {
        self.get(&[USER_GROUPS_BASE_PATH, identifier], "Failed to read user group")
            .await
    }

    /// Updates a user group by identifier.
    pub async fn update_user_group(&self, group: &UserGroup) -> Result<(), GuacError> {
        self.put(
            &[USER_GROUPS_BASE_PATH, &group.identifier],
            group,
            "Failed to update user group",
        )
        .await
    }

    /// Deletes a user group by identifier.
    pub async fn delete_user_group(&self, identifier: &str) -> Result<(), GuacError> {
        self.delete(&[USER_GROUPS_BASE_PATH, identifier], "Failed to delete user group")
            .await
    }

    /// Lists all user groups.
    pub async fn list_user_groups(&self) -> Result<Vec<UserGroup>, GuacError> {
        let groups: HashMap<String, UserGroup> =
            self.get(&[USER_GROUPS_BASE_PATH], "Failed to list user groups").await?;
        Ok(groups.into_values().collect())
    }

    /// Reads the full permissions document of a user group.
    pub async fn user_group_permissions(&self, identifier: &str) -> Result<PermissionData, GuacError> {
        self.get(
            &[USER_GROUPS_BASE_PATH, identifier, "permissions"],
            "Failed to read user group permissions",
        )
        .await
    }

    /// Applies a patch of permission operations to a user group.
    pub async fn set_user_group_permissions(&self, identifier: &str, ops: &[PermissionOp]) -> Result<(), GuacError> {
        self.patch(
            &[USER_GROUPS_BASE_PATH, identifier, "permissions"],
            ops,
            "Failed to set user group permissions",
        )
        .await
    }

    /// Reads the usernames that are members of a group.
    pub async fn member_users(&self, identifier: &str) -> Result<Vec<String>, GuacError> {
        self.get(
            &[USER_GROUPS_BASE_PATH, identifier, "memberUsers"],
            "Failed to read member users",
        )
        .await
    }

    /// Applies a patch of membership operations to the users of a group.
    pub async fn set_member_users(&self, identifier: &str, ops: &[PermissionOp]) -> Result<(), GuacError> {
        self.patch(
            &[USER_GROUPS_BASE_PATH, identifier, "memberUsers"],
            ops,
            "Failed to set member users",
        )
        .await
    }

    /// Reads the identifiers of the groups this group belongs to.
    pub async fn parent_groups(&self, identifier: &str) -> Result<Vec<String>, GuacError> {
        self.get(
            &[USER_GROUPS_BASE_PATH, identifier, "userGroups"],
            "Failed to read parent groups",
        )
        .await
    }

    /// Applies a patch of membership operations to the parent groups of a group.
    pub async fn set_parent_groups(&self, identifier: &str, ops: &[PermissionOp]) -> Result<(), GuacError> {
        self.patch(
            &[USER_GROUPS_BASE_PATH, identifier, "userGroups"],
            ops,
            "Failed to set parent groups",
        )
        .await
    }
}
