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
use guac_common::connection_group::tree::{resolve_paths, PathIndex};
use guac_common::connection_group::{ConnectionGroup, ROOT_IDENTIFIER};
use guac_common::error::GuacError;
use std::collections::HashMap;

const CONNECTION_GROUPS_BASE_PATH: &str = "connectionGroups";

impl GuacClient {
    /// Creates a connection group and returns the created record.
    pub async fn create_connection_group(&self, group: &ConnectionGroup) -> Result<ConnectionGroup, GuacError> {
        self.post(
            &[CONNECTION_GROUPS_BASE_PATH],
            group,
            "Failed to create connection group",
        )
        .await
    }

    /// Reads a connection group by identifier, including its direct children
    /// (one extra tree fetch; the base endpoint returns no children).
    pub async fn read_connection_group(&self, identifier: &str) -> Result<ConnectionGroup, GuacError> {
        let mut group: ConnectionGroup = self
            .get(
                &[CONNECTION_GROUPS_BASE_PATH, identifier],
                "Failed to read connection group",
            )
            .await?;

        let tree = self.connection_tree(identifier).await?;
        group.child_connections = tree.child_connections;
        group.child_groups = tree
            .child_groups
            .into_iter()
            .map(|child| ConnectionGroup {
                // Children are reported shallow; their own subtrees are not carried.
                child_connections: Vec::new(),
                child_groups: Vec::new(),
                ..child
            })
            .collect();

        Ok(group)
    }

    /// Reads a connection group by its slash-delimited path (e.g. "GroupA/Nested").
    pub async fn read_connection_group_by_path(&self, path: &str) -> Result<ConnectionGroup, GuacError> {
        let index = self.path_index().await?;
        let identifier = index
            .group_by_path(path)
            .ok_or_else(|| GuacError::NotFound(format!("No connection group found with path: {}", path)))?
            .to_string();
        self.read_connection_group(&identifier).await
    }

    /// Updates a connection group by identifier.
    pub async fn update_connection_group(&self, group: &ConnectionGroup) -> Result<(), GuacError> {
        self.put(
            &[CONNECTION_GROUPS_BASE_PATH, &group.identifier],
            group,
            "Failed to update connection group",
        )
        .await
    }

    /// Deletes a connection group by identifier.
    pub async fn delete_connection_group(&self, identifier: &str) -> Result<(), GuacError> {
        self.delete(
            &[CONNECTION_GROUPS_BASE_PATH, identifier],
            "Failed to delete connection group",
        )
        .await
    }

    /// Lists all connection groups (flat, no children).
    pub async fn list_connection_groups(&self) -> Result<Vec<ConnectionGroup>, GuacError> {
        let groups: HashMap<String, ConnectionGroup> = self
            .get(&[CONNECTION_GROUPS_BASE_PATH], "Failed to list connection groups")
            .await?;
        Ok(groups.into_values().collect())
    }

    /// Fetches the nested tree below a group (`ROOT` for the whole hierarchy).
    pub async fn connection_tree(&self, identifier: &str) -> Result<ConnectionGroup, GuacError> {
        self.get(
            &[CONNECTION_GROUPS_BASE_PATH, identifier, "tree"],
            "Failed to read connection tree",
        )
        .await
    }

    /// Fetches the full tree and resolves it into flat path lookup tables.
    ///
    /// The index is rebuilt on every call; it is never cached across calls.
    pub async fn path_index(&self) -> Result<PathIndex, GuacError> {
        let tree = self.connection_tree(ROOT_IDENTIFIER).await?;
        resolve_paths(&tree)
    }
}
