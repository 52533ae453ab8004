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
use serde::Deserialize;
use std::collections::HashMap;

/// Protocol descriptor returned by the schema endpoint. Only the name is of
/// interest; the form definitions are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ProtocolSchema {
    pub name: String,
}

impl GuacClient {
    /// The protocol names this server supports for connections.
    pub async fn protocol_choices(&self) -> Result<Vec<String>, GuacError> {
        let protocols: HashMap<String, ProtocolSchema> = self
            .get(&["schema", "protocols"], "Failed to read protocol schema")
            .await?;
        Ok(protocols.into_values().map(|protocol| protocol.name).collect())
    }
}
