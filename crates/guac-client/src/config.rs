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

use bon::Builder;
use guac_common::error::{Diagnostic, Diagnostics, GuacError};
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use url::Url;

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for connecting to a Guacamole server.
///
/// Authentication uses either `username` + `password` (a session token is
/// obtained from the server) or a pre-supplied `token` + `data_source` pair.
#[derive(Builder, Clone)]
pub struct Config {
    /// Base URL of the Guacamole server (e.g. "https://guacamole.example.com").
    #[builder(into)]
    pub url: String,
    /// Username for password-based authentication.
    #[builder(into)]
    pub username: Option<String>,
    /// Password for password-based authentication.
    #[builder(into)]
    pub password: Option<String>,
    /// Pre-supplied session token; requires `data_source`.
    #[builder(into)]
    pub token: Option<String>,
    /// Data source name the pre-supplied token is valid for.
    #[builder(into)]
    pub data_source: Option<String>,
    /// Additional cookies attached to every request.
    #[builder(default)]
    pub cookies: HashMap<String, String>,
    /// Skip TLS certificate verification.
    #[builder(default)]
    pub disable_tls_verification: bool,
    /// Disable the cookie jar and the configured cookies.
    #[builder(default)]
    pub disable_cookies: bool,
    /// HTTP request timeout (defaults to 10 seconds).
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
}

impl Config {
    /// Builds a configuration from the `GUACAMOLE_*` environment variables.
    pub fn from_env() -> Self {
        Config::builder()
            .url(env::var("GUACAMOLE_URL").unwrap_or_default())
            .maybe_username(env::var("GUACAMOLE_USERNAME").ok())
            .maybe_password(env::var("GUACAMOLE_PASSWORD").ok())
            .maybe_token(env::var("GUACAMOLE_TOKEN").ok())
            .maybe_data_source(env::var("GUACAMOLE_DATA_SOURCE").ok())
            .disable_tls_verification(env_flag("GUACAMOLE_DISABLE_TLS_VERIFICATION"))
            .disable_cookies(env_flag("GUACAMOLE_DISABLE_COOKIES"))
            .build()
    }

    /// True when a pre-supplied token and data source are configured.
    pub fn has_token(&self) -> bool {
        non_empty(&self.token) && non_empty(&self.data_source)
    }

    /// Checks the configuration before any network call, batching every
    /// problem into one error.
    pub fn validate(&self) -> Result<(), GuacError> {
        let mut diags = Diagnostics::new();

        if self.url.is_empty() {
            diags.push(Diagnostic::new(
                "Missing configuration",
                "URL must be configured for the Guacamole client",
            ));
        } else if Url::parse(&self.url).is_err() {
            diags.push(Diagnostic::new(
                "Invalid configuration",
                format!("URL is not parseable: {}", self.url),
            ));
        }

        if !self.has_token() {
            if !non_empty(&self.username) {
                diags.push(Diagnostic::new(
                    "Missing configuration",
                    "Username must be configured for the Guacamole client",
                ));
            }
            if !non_empty(&self.password) {
                diags.push(Diagnostic::new(
                    "Missing configuration",
                    "Password must be configured for the Guacamole client",
                ));
            }
        }

        diags.into_result()
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn env_flag(name: &str) -> bool {
    env::var(name).as_deref() == Ok("true")
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("data_source", &self.data_source)
            .field("cookies", &self.cookies.keys())
            .field("disable_tls_verification", &self.disable_tls_verification)
            .field("disable_cookies", &self.disable_cookies)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
