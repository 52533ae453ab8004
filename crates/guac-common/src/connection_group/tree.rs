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

//! Path resolution over the nested connection-group tree.
//!
//! A node's path is its ancestor names joined with `/`. The tree root is a
//! sentinel whose own path is the empty string, so direct children of the
//! root get unprefixed paths (`"GroupA"`, not `"ROOT/GroupA"`).

use crate::connection_group::ConnectionGroup;
use crate::error::GuacError;
use std::collections::{HashMap, HashSet};

/// Flat path lookup tables produced from one traversal of a connection tree.
///
/// The index is rebuilt from a fresh tree fetch on every use; it is a local
/// value, never shared state.
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    group_paths: HashMap<String, String>,
    connection_paths: HashMap<String, String>,
}

impl PathIndex {
    /// Path of a connection group by identifier.
    pub fn group_path(&self, identifier: &str) -> Option<&str> {
        self.group_paths.get(identifier).map(String::as_str)
    }

    /// Path of a leaf connection by identifier.
    pub fn connection_path(&self, identifier: &str) -> Option<&str> {
        self.connection_paths.get(identifier).map(String::as_str)
    }

    /// Identifier of the connection group with exactly this path.
    ///
    /// Sibling names are trusted to be unique per parent, so an exact scan
    /// has at most one match.
    pub fn group_by_path(&self, path: &str) -> Option<&str> {
        self.group_paths
            .iter()
            .find(|(_, p)| p.as_str() == path)
            .map(|(identifier, _)| identifier.as_str())
    }

    /// Identifier of the connection with exactly this path.
    pub fn connection_by_path(&self, path: &str) -> Option<&str> {
        self.connection_paths
            .iter()
            .find(|(_, p)| p.as_str() == path)
            .map(|(identifier, _)| identifier.as_str())
    }

    pub fn group_count(&self) -> usize {
        self.group_paths.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connection_paths.len()
    }
}

/// Builds the flat path tables for every group and connection below `root`
/// in a single top-down traversal.
///
/// The traversal keeps a visited-identifier set: a server tree that reaches
/// the same group twice is reported as [`GuacError::MalformedTree`] instead
/// of being walked forever.
pub fn resolve_paths(root: &ConnectionGroup) -> Result<PathIndex, GuacError> {
    let mut index = PathIndex::default();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&ConnectionGroup, String)> = vec![(root, String::new())];

    while let Some((group, path)) = stack.pop() {
        if !group.identifier.is_empty() && !visited.insert(group.identifier.as_str()) {
            return Err(GuacError::MalformedTree(format!(
                "group {} appears more than once in the tree",
                group.identifier
            )));
        }

        for connection in &group.child_connections {
            index
                .connection_paths
                .insert(connection.identifier.clone(), join(&path, &connection.name));
        }

        for child in &group.child_groups {
            let child_path = join(&path, &child.name);
            index.group_paths.insert(child.identifier.clone(), child_path.clone());
            stack.push((child, child_path));
        }
    }

    Ok(index)
}

fn join(parent_path: &str, name: &str) -> String {
    if parent_path.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent_path, name)
    }
}
