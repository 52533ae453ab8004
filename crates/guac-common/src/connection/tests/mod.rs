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

use crate::connection::{Connection, ConnectionAttributes, ConnectionParameters};

fn ssh_connection() -> Connection {
    Connection {
        name: "jump-host".to_string(),
        parent_identifier: "ROOT".to_string(),
        protocol: "ssh".to_string(),
        parameters: ConnectionParameters {
            hostname: Some("jump.example.com".to_string()),
            port: Some("22".to_string()),
            username: Some("admin".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn valid_connection_passes() {
    assert!(ssh_connection().validate().is_empty());
}

#[test]
fn unknown_protocol_is_reported() {
    let mut connection = ssh_connection();
    connection.protocol = "gopher".to_string();

    let diags = connection.validate();
    assert_eq!(diags.len(), 1);
    assert!(diags.iter().next().unwrap().detail.contains("gopher"));
}

#[test]
fn non_numeric_port_is_reported() {
    let mut connection = ssh_connection();
    connection.parameters.port = Some("twenty-two".to_string());

    let diags = connection.validate();
    assert_eq!(diags.len(), 1);
    assert!(diags.iter().next().unwrap().summary.contains("port"));
}

#[test]
fn invalid_choice_fields_are_batched() {
    let mut connection = ssh_connection();
    connection.protocol = "rdp".to_string();
    connection.parameters.security = Some("kerberos".to_string());
    connection.parameters.color_depth = Some("12".to_string());
    connection.parameters.resize_method = Some("stretch".to_string());
    connection.attributes = ConnectionAttributes {
        guacd_encryption: Some("tls13".to_string()),
        guacd_port: Some("not-a-port".to_string()),
        ..Default::default()
    };

    // Five independent problems, one report.
    assert_eq!(connection.validate().len(), 5);
}

#[test]
fn parameters_serialize_wire_names_and_omit_unset_fields() {
    let connection = ssh_connection();
    let json = serde_json::to_value(&connection).unwrap();

    assert_eq!(json["protocol"], "ssh");
    assert_eq!(json["parentIdentifier"], "ROOT");
    assert_eq!(json["parameters"]["hostname"], "jump.example.com");
    assert!(json["parameters"].get("sftp-hostname").is_none());
    assert!(json.get("identifier").is_none());
    assert!(json.get("activeConnections").is_none());
}

#[test]
fn decodes_rdp_parameter_names() {
    let connection: Connection = serde_json::from_str(
        r#"{
            "name": "desktop",
            "parentIdentifier": "3",
            "protocol": "rdp",
            "parameters": {
                "hostname": "desktop.example.com",
                "ignore-cert": "true",
                "server-layout": "en-us-qwerty",
                "enable-font-smoothing": "true",
                "gateway-hostname": "gw.example.com"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(connection.parameters.ignore_cert.as_deref(), Some("true"));
    assert_eq!(connection.parameters.keyboard_layout.as_deref(), Some("en-us-qwerty"));
    assert_eq!(connection.parameters.enable_font_smoothing.as_deref(), Some("true"));
    assert_eq!(connection.parameters.gateway_hostname.as_deref(), Some("gw.example.com"));
}
