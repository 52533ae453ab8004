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
use guac_common::user::User;
use std::collections::HashMap;

const USERS_BASE_PATH: &str = "users";

impl GuacClient {
    /// Creates a user and returns the created record. Attribute values are
    /// validated locally before anything is sent.
    pub async fn create_user(&self, user: &User) -> Result<User, GuacError> {
        user.attributes.validate().into_result()?;
        self.post(&[USERS_BASE_PATH], user, "Failed to create user").await
    }

    /// Reads a user by username.
    pub async fn read_user(&self, username: &str) -> Result<User, GuacError> {
        self.get(&[USERS_BASE_PATH, username], "Failed to read user").await
    }

    /// Updates a user by username. Attribute values are validated locally
    /// before anything is sent.
    pub async fn update_user(&self, user: &User) -> Result<(), GuacError> {
        user.attributes.validate().into_result()?;
        self.put(&[USERS_BASE_PATH, &user.username], user, "Failed to update user")
            .await
    }

    /// Deletes a user by username.
    pub async fn delete_user(&self, username: &str) -> Result<(), GuacError> {
        self.delete(&[USERS_BASE_PATH, username], "Failed to delete user").await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> Result<Vec<User>, GuacError> {
        let users: HashMap<String, User> = self.get(&[USERS_BASE_PATH], "Failed to list users").await?;
        Ok(users.into_values().collect())
    }

    /// Reads the full permissions document of a user.
    pub async fn user_permissions(&self, username: &str) -> Result<PermissionData, GuacError> {
        self.get(&[USERS_BASE_PATH, username, "permissions"], "Failed to read user permissions")
            .await
    }

    /// Applies a patch of permission operations to a user (system permissions
    /// and connection/connection-group READ grants).
    pub async fn set_user_permissions(&self, username: &str, ops: &[PermissionOp]) -> Result<(), GuacError> {
        self.patch(
            &[USERS_BASE_PATH, username, "permissions"],
            ops,
            "Failed to set user permissions",
        )
        .await
    }

    /// Reads the identifiers of the groups a user belongs to.
    pub async fn user_group_membership(&self, username: &str) -> Result<Vec<String>, GuacError> {
        self.get(
            &[USERS_BASE_PATH, username, "userGroups"],
            "Failed to read group membership",
        )
        .await
    }

    /// Applies a patch of membership operations (`path "/"`) to the set of
    /// groups a user belongs to.
    pub async fn set_group_membership(&self, username: &str, ops: &[PermissionOp]) -> Result<(), GuacError> {
        self.patch(
            &[USERS_BASE_PATH, username, "userGroups"],
            ops,
            "Failed to set group membership",
        )
        .await
    }
}
