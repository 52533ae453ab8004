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

mod client;
mod reconcile;

use crate::client::GuacClient;
use crate::config::Config;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub(crate) const TEST_DATA_SOURCE: &str = "postgresql";

/// Mounts a token mock and connects a password-authenticated client.
pub(crate) async fn connected_client(server: &MockServer) -> GuacClient {
    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authToken": "test-session-token",
            "dataSource": TEST_DATA_SOURCE,
            "availableDataSources": [TEST_DATA_SOURCE],
            "username": "guacadmin"
        })))
        .mount(server)
        .await;

    GuacClient::connect(
        Config::builder()
            .url(server.uri())
            .username("guacadmin")
            .password("guacadmin")
            .build(),
    )
    .await
    .expect("Client should connect")
}

/// Absolute path of a resource below the session base.
pub(crate) fn data_path(suffix: &str) -> String {
    format!("/api/session/data/{}/{}", TEST_DATA_SOURCE, suffix)
}
