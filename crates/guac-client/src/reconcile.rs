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

//! Incremental reconciliation of memberships and permission grants.
//!
//! Desired state is expressed as full sets; each update diffs the previous
//! set against the desired one and submits the minimal add/remove patch.
//! Additions are validated locally (existing groups, duplicates, known
//! system permissions) before any mutating call is issued.

use crate::client::GuacClient;
use guac_common::error::GuacError;
use guac_common::permission::{
    check_for_duplicates, connection_group_patch, connection_patch, diff, membership_patch,
    system_permission_patch, validate_group_references, validate_system_permissions, PermissionOp,
};
use guac_common::user::User;
use guac_common::user_group::UserGroup;
use log::error;

/// The object whose memberships or grants are being reconciled.
#[derive(Debug, Clone, Copy)]
pub enum Grantee<'a> {
    User(&'a str),
    UserGroup(&'a str),
}

/// A full desired-state snapshot of everything grantable to a user or group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grants {
    /// Identifiers of the groups the grantee belongs to.
    pub group_membership: Vec<String>,
    /// System permission names.
    pub system_permissions: Vec<String>,
    /// Identifiers of connections with a READ grant.
    pub connections: Vec<String>,
    /// Identifiers of connection groups with a READ grant.
    pub connection_groups: Vec<String>,
}

/// Reconciles group membership. Additions are checked against the
/// authoritative group list and rejected on duplicates before any patch is
/// sent; a typo surfaces as a clear validation error, not a remote 404.
pub async fn update_group_membership(
    client: &GuacClient,
    grantee: Grantee<'_>,
    old: &[String],
    new: &[String],
) -> Result<(), GuacError> {
    let changes = diff(old, new);

    if !changes.to_add.is_empty() {
        let existing: Vec<String> = client
            .list_user_groups()
            .await?
            .into_iter()
            .map(|group| group.identifier)
            .collect();
        validate_group_references(&changes.to_add, &existing)?;
        check_for_duplicates(&changes.to_add)?;
    }

    let ops = membership_patch(&changes);
    if ops.is_empty() {
        return Ok(());
    }
    match grantee {
        Grantee::User(username) => client.set_group_membership(username, &ops).await,
        Grantee::UserGroup(identifier) => client.set_parent_groups(identifier, &ops).await,
    }
}

/// Reconciles system permissions. Additions must name known permissions.
pub async fn update_system_permissions(
    client: &GuacClient,
    grantee: Grantee<'_>,
    old: &[String],
    new: &[String],
) -> Result<(), GuacError> {
    let changes = diff(old, new);
    validate_system_permissions(&changes.to_add)?;

    submit_permission_ops(client, grantee, system_permission_patch(&changes)).await
}

/// Reconciles connection READ grants.
pub async fn update_connection_grants(
    client: &GuacClient,
    grantee: Grantee<'_>,
    old: &[String],
    new: &[String],
) -> Result<(), GuacError> {
    let changes = diff(old, new);
    submit_permission_ops(client, grantee, connection_patch(&changes)).await
}

/// Reconciles connection group READ grants.
pub async fn update_connection_group_grants(
    client: &GuacClient,
    grantee: Grantee<'_>,
    old: &[String],
    new: &[String],
) -> Result<(), GuacError> {
    let changes = diff(old, new);
    submit_permission_ops(client, grantee, connection_group_patch(&changes)).await
}

async fn submit_permission_ops(
    client: &GuacClient,
    grantee: Grantee<'_>,
    ops: Vec<PermissionOp>,
) -> Result<(), GuacError> {
    if ops.is_empty() {
        return Ok(());
    }
    match grantee {
        Grantee::User(username) => client.set_user_permissions(username, &ops).await,
        Grantee::UserGroup(identifier) => client.set_user_group_permissions(identifier, &ops).await,
    }
}

/// Applies a full desired-state snapshot on top of an empty previous state,
/// one category after the other, aborting on the first failure.
pub async fn apply_grants(client: &GuacClient, grantee: Grantee<'_>, grants: &Grants) -> Result<(), GuacError> {
    update_group_membership(client, grantee, &[], &grants.group_membership).await?;
    update_system_permissions(client, grantee, &[], &grants.system_permissions).await?;
    update_connection_grants(client, grantee, &[], &grants.connections).await?;
    update_connection_group_grants(client, grantee, &[], &grants.connection_groups).await?;
    Ok(())
}

/// Reconciles a previous snapshot into a desired one, category by category.
pub async fn update_grants(
    client: &GuacClient,
    grantee: Grantee<'_>,
    old: &Grants,
    new: &Grants,
) -> Result<(), GuacError> {
    update_group_membership(client, grantee, &old.group_membership, &new.group_membership).await?;
    update_system_permissions(client, grantee, &old.system_permissions, &new.system_permissions).await?;
    update_connection_grants(client, grantee, &old.connections, &new.connections).await?;
    update_connection_group_grants(client, grantee, &old.connection_groups, &new.connection_groups).await?;
    Ok(())
}

/// Reads the current grant snapshot of a user: the permissions document plus
/// the group membership list, in two sequential calls.
pub async fn user_grants(client: &GuacClient, username: &str) -> Result<Grants, GuacError> {
    let permissions = client.user_permissions(username).await?;
    let group_membership = client.user_group_membership(username).await?;

    Ok(Grants {
        group_membership,
        system_permissions: permissions.system_permissions,
        connections: permissions.connection_permissions.into_keys().collect(),
        connection_groups: permissions.connection_group_permissions.into_keys().collect(),
    })
}

/// Reads the current grant snapshot of a user group.
pub async fn user_group_grants(client: &GuacClient, identifier: &str) -> Result<Grants, GuacError> {
    let permissions = client.user_group_permissions(identifier).await?;
    let group_membership = client.parent_groups(identifier).await?;

    Ok(Grants {
        group_membership,
        system_permissions: permissions.system_permissions,
        connections: permissions.connection_permissions.into_keys().collect(),
        connection_groups: permissions.connection_group_permissions.into_keys().collect(),
    })
}

/// Creates a user and applies its grants. When any grant fails, the
/// just-created user is deleted on a best-effort basis: the cleanup is not
/// retried, a cleanup failure is only logged, and the original error is
/// surfaced either way.
pub async fn create_user_with_grants(
    client: &GuacClient,
    user: &User,
    grants: &Grants,
) -> Result<User, GuacError> {
    let created = client.create_user(user).await?;

    if let Err(grant_error) = apply_grants(client, Grantee::User(&created.username), grants).await {
        if let Err(cleanup_error) = client.delete_user(&created.username).await {
            error!(
                "Failed to clean up user {} after grant failure: {}",
                created.username, cleanup_error
            );
        }
        return Err(grant_error);
    }

    Ok(created)
}

/// Creates a user group and applies its grants, with the same best-effort
/// cleanup as [`create_user_with_grants`].
pub async fn create_user_group_with_grants(
    client: &GuacClient,
    group: &UserGroup,
    grants: &Grants,
) -> Result<UserGroup, GuacError> {
    let created = client.create_user_group(group).await?;

    if let Err(grant_error) = apply_grants(client, Grantee::UserGroup(&created.identifier), grants).await {
        if let Err(cleanup_error) = client.delete_user_group(&created.identifier).await {
            error!(
                "Failed to clean up user group {} after grant failure: {}",
                created.identifier, cleanup_error
            );
        }
        return Err(grant_error);
    }

    Ok(created)
}
