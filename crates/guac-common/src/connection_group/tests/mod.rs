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


use crate::connection_group::{ConnectionGroup, GroupType};

#[test]
fn decodes_nested_tree_response() {
    let root: ConnectionGroup = serde_json::from_str(
        r#"{
            "name": "ROOT",
            "identifier": "ROOT",
            "type": "ORGANIZATIONAL",
            "activeConnections": 0,
            "childConnectionGroups": [
                {
                    "name": "Engineering",
                    "identifier": "7",
                    "parentIdentifier": "ROOT",
                    "type": "BALANCING",
                    "childConnections": [
                        {
                            "name": "build-box",
                            "identifier": "12",
                            "parentIdentifier": "7",
                            "protocol": "ssh"
                        }
                    ],
                    "attributes": {"enable-session-affinity": "true"}
                }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(root.identifier, "ROOT");
    assert_eq!(root.child_groups.len(), 1);

    let engineering = &root.child_groups[0];
    assert_eq!(engineering.group_type, GroupType::Balancing);
    assert_eq!(engineering.child_connections[0].name, "build-box");
    assert_eq!(
        engineering.attributes.enable_session_affinity.as_deref(),
        Some("true")
    );
}

#[test]
fn group_type_serializes_uppercase() {
    let group = ConnectionGroup {
        name: "pool".to_string(),
        group_type: GroupType::Balancing,
        ..Default::default()
    };
    let json = serde_json::to_value(&group).unwrap();
    assert_eq!(json["type"], "BALANCING");
}
