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

use async_trait::async_trait;
use bon::Builder;
use guac_common::error::GuacError;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

pub(crate) const TOKEN_PATH: &str = "api/tokens";
pub(crate) const TOKEN_HEADER: &str = "Guacamole-Token";

/// An established session with the server.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub data_source: String,
}

/// Trait for abstracting session establishment mechanisms.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Establishes a session and returns the token and data source to use for
    /// all subsequent calls.
    async fn authenticate(&self) -> Result<Session, GuacError>;
}

/// Implementation that obtains a session token by form-posting the
/// username and password to `/api/tokens`.
#[derive(Builder)]
pub struct PasswordAuthClient {
    http_client: Client,
    #[builder(into)]
    url: String,
    #[builder(into)]
    username: String,
    #[builder(into)]
    password: String,
}

#[async_trait]
impl AuthClient for PasswordAuthClient {
    async fn authenticate(&self) -> Result<Session, GuacError> {
        let token_url = format!("{}/{}", self.url.trim_end_matches('/'), TOKEN_PATH);
        let params = [("username", self.username.as_str()), ("password", self.password.as_str())];

        let response = self
            .http_client
            .post(&token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| GuacError::Network(format!("Failed to request session token: {}", e)))?;

        if response.status() == StatusCode::FORBIDDEN {
            return Err(GuacError::Authentication("Invalid credentials".to_string()));
        }
        if !response.status().is_success() {
            return Err(handle_error_response(response, "Token request failed").await);
        }

        let token_response: AuthenticationResponse = response
            .json()
            .await
            .map_err(|e| GuacError::Decode(format!("Failed to parse token response: {}", e)))?;

        if token_response.auth_token.is_empty() {
            return Err(GuacError::Authentication(
                "Auth token not found in response".to_string(),
            ));
        }

        Ok(Session {
            token: token_response.auth_token,
            data_source: token_response.data_source,
        })
    }
}

/// Implementation that accepts a pre-supplied session token and data source
/// name, verifying the pair against the server's attribute schema endpoint
/// before use.
#[derive(Builder)]
pub struct TokenAuthClient {
    http_client: Client,
    #[builder(into)]
    url: String,
    #[builder(into)]
    token: String,
    #[builder(into)]
    data_source: String,
}

#[async_trait]
impl AuthClient for TokenAuthClient {
    async fn authenticate(&self) -> Result<Session, GuacError> {
        let probe_url = format!(
            "{}/api/session/data/{}/schema/userAttributes",
            self.url.trim_end_matches('/'),
            self.data_source
        );

        let response = self
            .http_client
            .get(&probe_url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| GuacError::Network(format!("Failed to verify session token: {}", e)))?;

        if !response.status().is_success() {
            return Err(GuacError::Authentication(
                "Unable to connect using the supplied token and data source".to_string(),
            ));
        }

        // The schema endpoint returns a JSON document; anything undecodable
        // means the token landed on something other than a Guacamole API.
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| GuacError::Decode(format!("Failed to parse schema response: {}", e)))?;

        Ok(Session {
            token: self.token.clone(),
            data_source: self.data_source.clone(),
        })
    }
}

/// Helper to extract error details from an HTTP response.
pub(crate) async fn handle_error_response(response: reqwest::Response, context: &str) -> GuacError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = format!("{} with status {}: {}", context, status, body);

    match status.as_u16() {
        401 => GuacError::Authentication(message),
        403 => GuacError::PermissionDenied(message),
        404 => GuacError::NotFound(message),
        _ => GuacError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// Token endpoint response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticationResponse {
    pub auth_token: String,
    pub data_source: String,
}
