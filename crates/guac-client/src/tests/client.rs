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

//! Unit tests for the REST plumbing: headers, cookies, error capture.

use crate::config::Config;
use crate::tests::{connected_client, data_path};
use crate::GuacClient;
use guac_common::error::GuacError;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn every_request_carries_the_session_token() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(data_path("users")))
        .and(header("Guacamole-Token", "test-session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.list_users().await.expect("List should succeed");
}

#[tokio::test]
async fn configured_cookies_are_attached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authToken": "test-session-token",
            "dataSource": "postgresql"
        })))
        .mount(&mock_server)
        .await;

    let client = GuacClient::connect(
        Config::builder()
            .url(mock_server.uri())
            .username("guacadmin")
            .password("guacadmin")
            .cookies([("JSESSIONID".to_string(), "abc123".to_string())].into())
            .build(),
    )
    .await
    .expect("Client should connect");

    Mock::given(method("GET"))
        .and(path(data_path("users")))
        .and(header("Cookie", "JSESSIONID=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.list_users().await.expect("List should succeed");
}

#[tokio::test]
async fn non_2xx_responses_carry_the_body_for_diagnostics() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(data_path("users")))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"message": "Unexpected internal error", "type": "INTERNAL_ERROR"})),
        )
        .mount(&mock_server)
        .await;

    match client.list_users().await {
        Err(GuacError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Unexpected internal error"));
        }
        other => panic!("Expected Api error, got: {:?}", other),
    }
}

#[tokio::test]
async fn missing_objects_surface_as_not_found() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(data_path("users/ghost")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "No such user"})))
        .mount(&mock_server)
        .await;

    match client.read_user("ghost").await {
        Err(GuacError::NotFound(message)) => assert!(message.contains("No such user")),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[tokio::test]
async fn disconnect_deletes_the_session_token() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("DELETE"))
        .and(path("/api/tokens/test-session-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.disconnect().await.expect("Disconnect should succeed");
}

#[tokio::test]
async fn undecodable_success_bodies_surface_as_decode_errors() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(data_path("users/alice")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    match client.read_user("alice").await {
        Err(GuacError::Decode(_)) => {}
        other => panic!("Expected Decode error, got: {:?}", other),
    }
}
