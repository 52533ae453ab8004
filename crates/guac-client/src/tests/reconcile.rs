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

//! Unit tests for incremental membership and permission reconciliation.

use crate::reconcile::{
    create_user_with_grants, update_connection_grants, update_group_membership,
    update_system_permissions, user_grants, Grantee, Grants,
};
use crate::tests::{connected_client, data_path};
use guac_common::error::GuacError;
use guac_common::user::User;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn group_list_mock() -> Mock {
    Mock::given(method("GET")).and(path(data_path("userGroups"))).respond_with(
        ResponseTemplate::new(200).set_body_json(json!({
            "operators": {"identifier": "operators", "attributes": {}},
            "auditors": {"identifier": "auditors", "attributes": {}}
        })),
    )
}

#[tokio::test]
async fn membership_update_patches_removes_then_adds() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    group_list_mock().mount(&mock_server).await;

    Mock::given(method("PATCH"))
        .and(path(data_path("users/alice/userGroups")))
        .and(body_json(json!([
            {"op": "remove", "path": "/", "value": "legacy"},
            {"op": "add", "path": "/", "value": "auditors"}
        ])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    update_group_membership(
        &client,
        Grantee::User("alice"),
        &strings(&["operators", "legacy"]),
        &strings(&["operators", "auditors"]),
    )
    .await
    .expect("Update should succeed");
}

#[tokio::test]
async fn membership_update_rejects_unknown_groups_before_patching() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    group_list_mock().mount(&mock_server).await;

    Mock::given(method("PATCH"))
        .and(path(data_path("users/alice/userGroups")))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = update_group_membership(
        &client,
        Grantee::User("alice"),
        &[],
        &strings(&["operators", "opertaors"]),
    )
    .await;

    match result {
        Err(GuacError::Validation(diags)) => {
            let detail = &diags.iter().next().unwrap().detail;
            assert!(detail.contains("opertaors"));
            assert!(!detail.contains("operators,"));
        }
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}

#[tokio::test]
async fn membership_update_with_no_changes_is_a_no_op() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    // Neither the group list nor the patch endpoint may be hit.
    Mock::given(method("GET"))
        .and(path(data_path("userGroups")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let membership = strings(&["operators"]);
    update_group_membership(&client, Grantee::User("alice"), &membership, &membership)
        .await
        .expect("No-op update should succeed");
}

#[tokio::test]
async fn system_permission_update_validates_additions_locally() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("PATCH"))
        .and(path(data_path("users/alice/permissions")))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result =
        update_system_permissions(&client, Grantee::User("alice"), &[], &strings(&["MAKE_COFFEE"])).await;

    match result {
        Err(GuacError::Validation(_)) => {}
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}

#[tokio::test]
async fn system_permission_update_patches_the_permissions_endpoint() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("PATCH"))
        .and(path(data_path("users/alice/permissions")))
        .and(body_json(json!([
            {"op": "remove", "path": "/systemPermissions", "value": "CREATE_USER"},
            {"op": "add", "path": "/systemPermissions", "value": "ADMINISTER"}
        ])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    update_system_permissions(
        &client,
        Grantee::User("alice"),
        &strings(&["CREATE_USER"]),
        &strings(&["ADMINISTER"]),
    )
    .await
    .expect("Update should succeed");
}

#[tokio::test]
async fn connection_grant_update_emits_read_grants() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("PATCH"))
        .and(path(data_path("userGroups/operators/permissions")))
        .and(body_json(json!([
            {"op": "remove", "path": "/connectionPermissions/3", "value": "READ"},
            {"op": "add", "path": "/connectionPermissions/12", "value": "READ"}
        ])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    update_connection_grants(
        &client,
        Grantee::UserGroup("operators"),
        &strings(&["3"]),
        &strings(&["12"]),
    )
    .await
    .expect("Update should succeed");
}

#[tokio::test]
async fn user_grants_assemble_permissions_and_membership() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(data_path("users/alice/permissions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "connectionPermissions": {"12": ["READ"]},
            "connectionGroupPermissions": {"7": ["READ"]},
            "systemPermissions": ["CREATE_USER"]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(data_path("users/alice/userGroups")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["operators"])))
        .mount(&mock_server)
        .await;

    let grants = user_grants(&client, "alice").await.expect("Read should succeed");
    assert_eq!(grants.group_membership, vec!["operators"]);
    assert_eq!(grants.system_permissions, vec!["CREATE_USER"]);
    assert_eq!(grants.connections, vec!["12"]);
    assert_eq!(grants.connection_groups, vec!["7"]);
}

#[tokio::test]
async fn failed_grants_trigger_best_effort_cleanup_of_the_created_user() {
    let mock_server = MockServer::start().await;
    let client = connected_client(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(data_path("users")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "alice"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    group_list_mock().mount(&mock_server).await;

    // The membership patch fails after the user was created.
    Mock::given(method("PATCH"))
        .and(path(data_path("users/alice/userGroups")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(data_path("users/alice")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = User {
        username: "alice".to_string(),
        ..Default::default()
    };
    let grants = Grants {
        group_membership: strings(&["operators"]),
        ..Default::default()
    };

    // The original grant failure is surfaced, not the cleanup result.
    match create_user_with_grants(&client, &user, &grants).await {
        Err(GuacError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("boom"));
        }
        other => panic!("Expected Api error, got: {:?}", other),
    }
}
