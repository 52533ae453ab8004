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

#[cfg(test)]
mod tests;

use crate::error::Diagnostics;
use crate::util::{require_choice, require_numeric};
use serde::{Deserialize, Serialize};

/// Protocols the management API ships connection definitions for. The set is
/// server-extensible, so connections carry the protocol as a plain string;
/// this list backs local validation of the stock protocols.
pub const VALID_PROTOCOLS: &[&str] = &["kubernetes", "rdp", "ssh", "telnet", "vnc"];

/// A single remote-access target definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identifier: String,
    #[serde(rename = "parentIdentifier")]
    pub parent_identifier: String,
    pub protocol: String,
    #[serde(default)]
    pub attributes: ConnectionAttributes,
    #[serde(default)]
    pub parameters: ConnectionParameters,
    #[serde(rename = "activeConnections", default, skip_serializing_if = "Option::is_none")]
    pub active_connections: Option<i64>,
}

/// Proxy (guacd) attributes of a connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionAttributes {
    #[serde(rename = "guacd-encryption", default, skip_serializing_if = "Option::is_none")]
    pub guacd_encryption: Option<String>,
    #[serde(rename = "failover-only", default, skip_serializing_if = "Option::is_none")]
    pub failover_only: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(rename = "max-connections", default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<String>,
    #[serde(rename = "guacd-hostname", default, skip_serializing_if = "Option::is_none")]
    pub guacd_hostname: Option<String>,
    #[serde(rename = "guacd-port", default, skip_serializing_if = "Option::is_none")]
    pub guacd_port: Option<String>,
    #[serde(rename = "max-connections-per-user", default, skip_serializing_if = "Option::is_none")]
    pub max_connections_per_user: Option<String>,
}

/// The flat protocol-parameter table of a connection.
///
/// Every field is string-typed on the wire regardless of its logical type;
/// unset fields are omitted from request bodies. The groupings follow the
/// sections of the Guacamole connection dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionParameters {
    // Network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(rename = "host-key", default, skip_serializing_if = "Option::is_none")]
    pub public_host_key: Option<String>,
    #[serde(rename = "use-ssl", default, skip_serializing_if = "Option::is_none")]
    pub use_ssl: Option<String>,
    #[serde(rename = "ca-cert", default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<String>,

    // Authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "private-key", default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(rename = "disable-auth", default, skip_serializing_if = "Option::is_none")]
    pub disable_authentication: Option<String>,
    #[serde(rename = "ignore-cert", default, skip_serializing_if = "Option::is_none")]
    pub ignore_cert: Option<String>,
    #[serde(rename = "username-regex", default, skip_serializing_if = "Option::is_none")]
    pub username_regex: Option<String>,
    #[serde(rename = "password-regex", default, skip_serializing_if = "Option::is_none")]
    pub password_regex: Option<String>,
    #[serde(rename = "login-success-regex", default, skip_serializing_if = "Option::is_none")]
    pub login_success_regex: Option<String>,
    #[serde(rename = "login-failure-regex", default, skip_serializing_if = "Option::is_none")]
    pub login_failure_regex: Option<String>,
    #[serde(rename = "client-cert", default, skip_serializing_if = "Option::is_none")]
    pub client_cert: Option<String>,
    #[serde(rename = "client-key", default, skip_serializing_if = "Option::is_none")]
    pub client_key: Option<String>,

    // Display
    #[serde(rename = "color-scheme", default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    #[serde(rename = "font-name", default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(rename = "font-size", default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrollback: Option<String>,
    #[serde(rename = "read-only", default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi: Option<String>,
    #[serde(rename = "color-depth", default, skip_serializing_if = "Option::is_none")]
    pub color_depth: Option<String>,
    #[serde(rename = "resize-method", default, skip_serializing_if = "Option::is_none")]
    pub resize_method: Option<String>,
    #[serde(rename = "swap-red-blue", default, skip_serializing_if = "Option::is_none")]
    pub swap_red_blue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    // Clipboard
    #[serde(rename = "disable-copy", default, skip_serializing_if = "Option::is_none")]
    pub disable_copy: Option<String>,
    #[serde(rename = "disable-paste", default, skip_serializing_if = "Option::is_none")]
    pub disable_paste: Option<String>,
    #[serde(rename = "clipboard-encoding", default, skip_serializing_if = "Option::is_none")]
    pub clipboard_encoding: Option<String>,

    // Session environment and basic settings
    #[serde(rename = "command", default, skip_serializing_if = "Option::is_none")]
    pub execute_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(rename = "server-alive-interval", default, skip_serializing_if = "Option::is_none")]
    pub server_keepalive_interval: Option<String>,
    #[serde(rename = "initial-program", default, skip_serializing_if = "Option::is_none")]
    pub initial_program: Option<String>,
    #[serde(rename = "client-name", default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(rename = "server-layout", default, skip_serializing_if = "Option::is_none")]
    pub keyboard_layout: Option<String>,
    #[serde(rename = "console", default, skip_serializing_if = "Option::is_none")]
    pub administrator_console: Option<String>,

    // Terminal behavior
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backspace: Option<String>,
    #[serde(rename = "terminal-type", default, skip_serializing_if = "Option::is_none")]
    pub terminal_type: Option<String>,

    // Typescript (text session recording)
    #[serde(rename = "typescript-path", default, skip_serializing_if = "Option::is_none")]
    pub typescript_path: Option<String>,
    #[serde(rename = "typescript-name", default, skip_serializing_if = "Option::is_none")]
    pub typescript_name: Option<String>,
    #[serde(rename = "create-typescript-path", default, skip_serializing_if = "Option::is_none")]
    pub create_typescript_path: Option<String>,

    // Screen recording
    #[serde(rename = "recording-path", default, skip_serializing_if = "Option::is_none")]
    pub recording_path: Option<String>,
    #[serde(rename = "recording-name", default, skip_serializing_if = "Option::is_none")]
    pub recording_name: Option<String>,
    #[serde(rename = "recording-exclude-output", default, skip_serializing_if = "Option::is_none")]
    pub recording_exclude_output: Option<String>,
    #[serde(rename = "recording-exclude-mouse", default, skip_serializing_if = "Option::is_none")]
    pub recording_exclude_mouse: Option<String>,
    #[serde(rename = "recording-include-keys", default, skip_serializing_if = "Option::is_none")]
    pub recording_include_keys: Option<String>,
    #[serde(rename = "create-recording-path", default, skip_serializing_if = "Option::is_none")]
    pub create_recording_path: Option<String>,

    // SFTP
    #[serde(rename = "enable-sftp", default, skip_serializing_if = "Option::is_none")]
    pub enable_sftp: Option<String>,
    #[serde(rename = "sftp-root-directory", default, skip_serializing_if = "Option::is_none")]
    pub sftp_root_directory: Option<String>,
    #[serde(rename = "sftp-disable-download", default, skip_serializing_if = "Option::is_none")]
    pub sftp_disable_file_download: Option<String>,
    #[serde(rename = "sftp-disable-upload", default, skip_serializing_if = "Option::is_none")]
    pub sftp_disable_file_upload: Option<String>,
    #[serde(rename = "sftp-hostname", default, skip_serializing_if = "Option::is_none")]
    pub sftp_hostname: Option<String>,
    #[serde(rename = "sftp-port", default, skip_serializing_if = "Option::is_none")]
    pub sftp_port: Option<String>,
    #[serde(rename = "sftp-host-key", default, skip_serializing_if = "Option::is_none")]
    pub sftp_host_key: Option<String>,
    #[serde(rename = "sftp-username", default, skip_serializing_if = "Option::is_none")]
    pub sftp_username: Option<String>,
    #[serde(rename = "sftp-password", default, skip_serializing_if = "Option::is_none")]
    pub sftp_password: Option<String>,
    #[serde(rename = "sftp-private-key", default, skip_serializing_if = "Option::is_none")]
    pub sftp_private_key: Option<String>,
    #[serde(rename = "sftp-passphrase", default, skip_serializing_if = "Option::is_none")]
    pub sftp_passphrase: Option<String>,
    #[serde(rename = "sftp-directory", default, skip_serializing_if = "Option::is_none")]
    pub sftp_upload_directory: Option<String>,
    #[serde(rename = "sftp-server-alive-interval", default, skip_serializing_if = "Option::is_none")]
    pub sftp_keepalive_interval: Option<String>,

    // Wake-on-LAN
    #[serde(rename = "wol-send-packet", default, skip_serializing_if = "Option::is_none")]
    pub wol_send_packet: Option<String>,
    #[serde(rename = "wol-mac-addr", default, skip_serializing_if = "Option::is_none")]
    pub wol_mac_address: Option<String>,
    #[serde(rename = "wol-broadcast-addr", default, skip_serializing_if = "Option::is_none")]
    pub wol_broadcast_address: Option<String>,
    #[serde(rename = "wol-wait-time", default, skip_serializing_if = "Option::is_none")]
    pub wol_boot_wait_time: Option<String>,

    // RDP remote desktop gateway
    #[serde(rename = "gateway-hostname", default, skip_serializing_if = "Option::is_none")]
    pub gateway_hostname: Option<String>,
    #[serde(rename = "gateway-port", default, skip_serializing_if = "Option::is_none")]
    pub gateway_port: Option<String>,
    #[serde(rename = "gateway-username", default, skip_serializing_if = "Option::is_none")]
    pub gateway_username: Option<String>,
    #[serde(rename = "gateway-password", default, skip_serializing_if = "Option::is_none")]
    pub gateway_password: Option<String>,
    #[serde(rename = "gateway-domain", default, skip_serializing_if = "Option::is_none")]
    pub gateway_domain: Option<String>,

    // RDP device redirection
    #[serde(rename = "console-audio", default, skip_serializing_if = "Option::is_none")]
    pub console_audio: Option<String>,
    #[serde(rename = "disable-audio", default, skip_serializing_if = "Option::is_none")]
    pub disable_audio: Option<String>,
    #[serde(rename = "enable-audio-input", default, skip_serializing_if = "Option::is_none")]
    pub enable_audio_input: Option<String>,
    #[serde(rename = "enable-printing", default, skip_serializing_if = "Option::is_none")]
    pub enable_printing: Option<String>,
    #[serde(rename = "printer-name", default, skip_serializing_if = "Option::is_none")]
    pub printer_name: Option<String>,
    #[serde(rename = "enable-drive", default, skip_serializing_if = "Option::is_none")]
    pub enable_drive: Option<String>,
    #[serde(rename = "drive-name", default, skip_serializing_if = "Option::is_none")]
    pub drive_name: Option<String>,
    #[serde(rename = "disable-download", default, skip_serializing_if = "Option::is_none")]
    pub disable_file_download: Option<String>,
    #[serde(rename = "disable-upload", default, skip_serializing_if = "Option::is_none")]
    pub disable_file_upload: Option<String>,
    #[serde(rename = "drive-path", default, skip_serializing_if = "Option::is_none")]
    pub drive_path: Option<String>,
    #[serde(rename = "create-drive-path", default, skip_serializing_if = "Option::is_none")]
    pub create_drive_path: Option<String>,
    #[serde(rename = "static-channels", default, skip_serializing_if = "Option::is_none")]
    pub static_channels: Option<String>,

    // RDP performance
    #[serde(rename = "enable-wallpaper", default, skip_serializing_if = "Option::is_none")]
    pub enable_wallpaper: Option<String>,
    #[serde(rename = "enable-theming", default, skip_serializing_if = "Option::is_none")]
    pub enable_theming: Option<String>,
    #[serde(rename = "enable-font-smoothing", default, skip_serializing_if = "Option::is_none")]
    pub enable_font_smoothing: Option<String>,
    #[serde(rename = "enable-full-window-drag", default, skip_serializing_if = "Option::is_none")]
    pub enable_full_window_drag: Option<String>,
    #[serde(rename = "enable-desktop-composition", default, skip_serializing_if = "Option::is_none")]
    pub enable_desktop_composition: Option<String>,
    #[serde(rename = "enable-menu-animations", default, skip_serializing_if = "Option::is_none")]
    pub enable_menu_animations: Option<String>,
    #[serde(rename = "disable-bitmap-caching", default, skip_serializing_if = "Option::is_none")]
    pub disable_bitmap_caching: Option<String>,
    #[serde(rename = "disable-offscreen-caching", default, skip_serializing_if = "Option::is_none")]
    pub disable_offscreen_caching: Option<String>,
    #[serde(rename = "disable-glyph-caching", default, skip_serializing_if = "Option::is_none")]
    pub disable_glyph_caching: Option<String>,

    // RDP RemoteApp
    #[serde(rename = "remote-app", default, skip_serializing_if = "Option::is_none")]
    pub remote_app: Option<String>,
    #[serde(rename = "remote-app-dir", default, skip_serializing_if = "Option::is_none")]
    pub remote_app_working_directory: Option<String>,
    #[serde(rename = "remote-app-args", default, skip_serializing_if = "Option::is_none")]
    pub remote_app_parameters: Option<String>,

    // RDP preconnection PDU / Hyper-V
    #[serde(rename = "preconnection-id", default, skip_serializing_if = "Option::is_none")]
    pub preconnection_id: Option<String>,
    #[serde(rename = "preconnection-blob", default, skip_serializing_if = "Option::is_none")]
    pub preconnection_blob: Option<String>,

    // RDP load balancing
    #[serde(rename = "load-balance-info", default, skip_serializing_if = "Option::is_none")]
    pub load_balance_info: Option<String>,

    // VNC repeater
    #[serde(rename = "dest-host", default, skip_serializing_if = "Option::is_none")]
    pub destination_host: Option<String>,
    #[serde(rename = "dest-port", default, skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<String>,

    // Audio
    #[serde(rename = "audio-servername", default, skip_serializing_if = "Option::is_none")]
    pub audio_server_name: Option<String>,
    #[serde(rename = "enable-audio", default, skip_serializing_if = "Option::is_none")]
    pub enable_audio: Option<String>,

    // Kubernetes container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod: Option<String>,
}

/// Valid guacd encryption types.
pub const VALID_ENCRYPTION_TYPES: &[&str] = &["none", "ssl"];

/// Valid terminal color schemes.
pub const VALID_COLOR_SCHEMES: &[&str] = &["black-white", "gray-black", "green-black", "white-black"];

/// Valid terminal font sizes.
pub const VALID_FONT_SIZES: &[&str] = &[
    "8", "9", "10", "11", "12", "14", "18", "24", "30", "36", "48", "60", "72", "96",
];

/// Valid backspace key codes.
pub const VALID_BACKSPACE_CODES: &[&str] = &["127", "8"];

/// Valid terminal types.
pub const VALID_TERMINAL_TYPES: &[&str] = &["ansi", "linux", "vt100", "vt220", "xterm", "xterm-25color"];

/// Valid cursor rendering modes.
pub const VALID_CURSORS: &[&str] = &["local", "remote"];

/// Valid color depths.
pub const VALID_COLOR_DEPTHS: &[&str] = &["8", "16", "24", "32"];

/// Valid clipboard encodings.
pub const VALID_CLIPBOARD_ENCODINGS: &[&str] = &["CP1252", "ISO8859-1", "UTF-16", "UTF-8"];

/// Valid RDP security modes.
pub const VALID_SECURITY_MODES: &[&str] = &["any", "nla", "rdp", "tls", "vmconnect"];

/// Valid RDP keyboard layouts.
pub const VALID_KEYBOARD_LAYOUTS: &[&str] = &[
    "da-dk-qwerty",
    "de-ch-qwertz",
    "de-de-qwertz",
    "en-gb-qwerty",
    "en-us-qwerty",
    "es-es-qwerty",
    "es-latam-qwerty",
    "failsafe",
    "fr-be-azerty",
    "fr-ch-qwertz",
    "fr-fr-azerty",
    "hu-hu-qwertz",
    "it-it-qwerty",
    "ja-jp-qwerty",
    "pt-br-qwerty",
    "sv-se-qwerty",
    "tr-tr-qwerty",
];

/// Valid RDP resize methods.
pub const VALID_RESIZE_METHODS: &[&str] = &["display-update", "reconnect"];

impl Connection {
    /// Validates the locally checkable fields of a connection definition:
    /// the protocol name, every enumerated-choice parameter, and every
    /// string-typed integer field. All failures are batched so a caller sees
    /// the complete list before anything is sent to the server.
    pub fn validate(&self) -> Diagnostics {
        let mut diags = Diagnostics::new();

        if let Some(d) = require_choice("protocol", &self.protocol, VALID_PROTOCOLS) {
            diags.push(d);
        }
        diags.extend(self.attributes.validate());
        diags.extend(self.parameters.validate());
        diags
    }
}

impl ConnectionAttributes {
    pub fn validate(&self) -> Diagnostics {
        let mut diags = Diagnostics::new();
        let numeric = [
            ("weight", &self.weight),
            ("max-connections", &self.max_connections),
            ("max-connections-per-user", &self.max_connections_per_user),
            ("guacd-port", &self.guacd_port),
        ];
        for (field, value) in numeric {
            if let Some(d) = value.as_deref().and_then(|v| require_numeric(field, v)) {
                diags.push(d);
            }
        }
        if let Some(d) = self
            .guacd_encryption
            .as_deref()
            .and_then(|v| require_choice("guacd-encryption", v, VALID_ENCRYPTION_TYPES))
        {
            diags.push(d);
        }
        diags
    }
}

impl ConnectionParameters {
    pub fn validate(&self) -> Diagnostics {
        let mut diags = Diagnostics::new();

        let numeric = [
            ("port", &self.port),
            ("sftp-port", &self.sftp_port),
            ("dest-port", &self.destination_port),
            ("gateway-port", &self.gateway_port),
            ("width", &self.width),
            ("height", &self.height),
            ("dpi", &self.dpi),
            ("scrollback", &self.scrollback),
            ("wol-wait-time", &self.wol_boot_wait_time),
        ];
        for (field, value) in numeric {
            if let Some(d) = value.as_deref().and_then(|v| require_numeric(field, v)) {
                diags.push(d);
            }
        }

        let choices: [(&str, &Option<String>, &[&str]); 10] = [
            ("color-scheme", &self.color_scheme, VALID_COLOR_SCHEMES),
            ("font-size", &self.font_size, VALID_FONT_SIZES),
            ("backspace", &self.backspace, VALID_BACKSPACE_CODES),
            ("terminal-type", &self.terminal_type, VALID_TERMINAL_TYPES),
            ("cursor", &self.cursor, VALID_CURSORS),
            ("color-depth", &self.color_depth, VALID_COLOR_DEPTHS),
            ("clipboard-encoding", &self.clipboard_encoding, VALID_CLIPBOARD_ENCODINGS),
            ("security", &self.security, VALID_SECURITY_MODES),
            ("server-layout", &self.keyboard_layout, VALID_KEYBOARD_LAYOUTS),
            ("resize-method", &self.resize_method, VALID_RESIZE_METHODS),
        ];
        for (field, value, valid) in choices {
            if let Some(d) = value.as_deref().and_then(|v| require_choice(field, v, valid)) {
                diags.push(d);
            }
        }

        diags
    }
}
