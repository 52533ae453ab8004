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


use crate::permission::{PatchOp, PermissionData, PermissionOp};

#[test]
fn ops_serialize_to_the_wire_patch_shape() {
    let ops = vec![
        PermissionOp::remove_group_member("operators"),
        PermissionOp::add_system_permission("CREATE_USER"),
        PermissionOp::add_connection("42"),
        PermissionOp::remove_connection_group("7"),
    ];

    let json = serde_json::to_value(&ops).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"op": "remove", "path": "/", "value": "operators"},
            {"op": "add", "path": "/systemPermissions", "value": "CREATE_USER"},
            {"op": "add", "path": "/connectionPermissions/42", "value": "READ"},
            {"op": "remove", "path": "/connectionGroupPermissions/7", "value": "READ"}
        ])
    );
}

#[test]
fn object_grants_always_carry_read() {
    assert_eq!(PermissionOp::add_connection("5").value, "READ");
    assert_eq!(PermissionOp::add_connection_group("5").value, "READ");
    assert_eq!(PermissionOp::remove_connection("5").op, PatchOp::Remove);
}

#[test]
fn permission_data_decodes_a_partial_document() {
    let data: PermissionData = serde_json::from_str(
        r#"{
            "connectionPermissions": {"3": ["READ"]},
            "systemPermissions": ["ADMINISTER", "CREATE_USER"],
            "userPermissions": {"self": ["READ", "UPDATE"]}
        }"#,
    )
    .unwrap();

    assert_eq!(data.connection_permissions["3"], vec!["READ"]);
    assert_eq!(data.system_permissions, vec!["ADMINISTER", "CREATE_USER"]);
    assert!(data.connection_group_permissions.is_empty());
    assert!(data.sharing_profile_permissions.is_empty());
}
