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
use guac_common::connection::{Connection, ConnectionParameters};
use guac_common::error::GuacError;
use std::collections::HashMap;

const CONNECTIONS_BASE_PATH: &str = "connections";

impl GuacClient {
    /// Creates a connection and returns the created record (with the
    /// server-assigned identifier). The protocol, enumerated-choice and
    /// numeric fields are validated locally before anything is sent.
    pub async fn create_connection(&self, connection: &Connection) -> Result<Connection, GuacError> {
        connection.validate().into_result()?;
        self.post(&[CONNECTIONS_BASE_PATH], connection, "Failed to create connection")
            .await
    }

    /// Reads a connection by identifier.
    ///
    /// Two sequential calls: the base record, then the protocol parameters
    /// (the list and base endpoints omit them).
    pub async fn read_connection(&self, identifier: &str) -> Result<Connection, GuacError> {
        let mut connection: Connection = self
            .get(&[CONNECTIONS_BASE_PATH, identifier], "Failed to read connection")
            .await?;

        if !connection.identifier.is_empty() {
            let parameters: ConnectionParameters = self
                .get(
                    &[CONNECTIONS_BASE_PATH, identifier, "parameters"],
                    "Failed to read connection parameters",
                )
                .await?;
            connection.parameters = parameters;
        }

        Ok(connection)
    }

    /// Reads a connection by its slash-delimited path (e.g. "GroupA/ConnX").
    pub async fn read_connection_by_path(&self, path: &str) -> Result<Connection, GuacError> {
        let index = self.path_index().await?;
        let identifier = index
            .connection_by_path(path)
            .ok_or_else(|| GuacError::NotFound(format!("No connection found with path: {}", path)))?
            .to_string();
        self.read_connection(&identifier).await
    }

    /// Updates a connection by identifier, with the same local validation as
    /// [`create_connection`](Self::create_connection).
    pub async fn update_connection(&self, connection: &Connection) -> Result<(), GuacError> {
        connection.validate().into_result()?;
        self.put(
            &[CONNECTIONS_BASE_PATH, &connection.identifier],
            connection,
            "Failed to update connection",
        )
        .await
    }

    /// Deletes a connection by identifier.
    pub async fn delete_connection(&self, identifier: &str) -> Result<(), GuacError> {
        self.delete(&[CONNECTIONS_BASE_PATH, identifier], "Failed to delete connection")
            .await
    }

    /// Lists all connections (base records only, no parameters).
    pub async fn list_connections(&self) -> Result<Vec<Connection>, GuacError> {
        let connections: HashMap<String, Connection> =
            self.get(&[CONNECTIONS_BASE_PATH], "Failed to list connections").await?;
        Ok(connections.into_values().collect())
    }
}
