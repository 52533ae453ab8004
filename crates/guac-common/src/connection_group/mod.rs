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

pub mod tree;

#[cfg(test)]
mod tests;

use crate::connection::Connection;
use serde::{Deserialize, Serialize};

/// Identifier of the sentinel root of the connection hierarchy.
pub const ROOT_IDENTIFIER: &str = "ROOT";

/// A named container node in the connection hierarchy.
///
/// Group responses from the tree endpoint nest child groups and child
/// connections; flat list responses leave both empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identifier: String,
    #[serde(rename = "parentIdentifier", default, skip_serializing_if = "String::is_empty")]
    pub parent_identifier: String,
    #[serde(rename = "type", default)]
    pub group_type: GroupType,
    #[serde(rename = "activeConnections", default, skip_serializing_if = "Option::is_none")]
    pub active_connections: Option<i64>,
    #[serde(rename = "childConnections", default, skip_serializing_if = "Vec::is_empty")]
    pub child_connections: Vec<Connection>,
    #[serde(rename = "childConnectionGroups", default, skip_serializing_if = "Vec::is_empty")]
    pub child_groups: Vec<ConnectionGroup>,
    #[serde(default)]
    pub attributes: ConnectionGroupAttributes,
}

/// Whether a group merely organizes its children or load-balances across them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupType {
    #[default]
    Organizational,
    Balancing,
}

/// Concurrency attributes of a connection group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionGroupAttributes {
    #[serde(rename = "max-connections", default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<String>,
    #[serde(rename = "max-connections-per-user", default, skip_serializing_if = "Option::is_none")]
    pub max_connections_per_user: Option<String>,
    #[serde(rename = "enable-session-affinity", default, skip_serializing_if = "Option::is_none")]
    pub enable_session_affinity: Option<String>,
}
