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

use crate::auth::{handle_error_response, AuthClient, PasswordAuthClient, Session, TokenAuthClient, TOKEN_HEADER, TOKEN_PATH};
use crate::config::Config;
use guac_common::error::GuacError;
use log::debug;
use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Client for the Guacamole REST management API.
///
/// All operations run against `{url}/api/session/data/{dataSource}` with the
/// session token attached to every request. Calls are strictly sequential;
/// the first failure aborts the operation and is surfaced to the caller.
pub struct GuacClient {
    http_client: Client,
    config: Config,
    base_url: Url,
    session: Session,
}

impl GuacClient {
    /// Validates the configuration, establishes a session (password-based,
    /// or verification of a pre-supplied token) and returns a ready client.
    pub async fn connect(config: Config) -> Result<Self, GuacError> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(config.disable_tls_verification)
            .cookie_store(!config.disable_cookies)
            .build()
            .map_err(|e| GuacError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let session = if config.has_token() {
            let auth_client = TokenAuthClient::builder()
                .http_client(http_client.clone())
                .url(&config.url)
                .token(config.token.clone().unwrap_or_default())
                .data_source(config.data_source.clone().unwrap_or_default())
                .build();
            auth_client.authenticate().await?
        } else {
            let auth_client = PasswordAuthClient::builder()
                .http_client(http_client.clone())
                .url(&config.url)
                .username(config.username.clone().unwrap_or_default())
                .password(config.password.clone().unwrap_or_default())
                .build();
            auth_client.authenticate().await?
        };

        debug!("Established Guacamole session against data source {}", session.data_source);

        let base_url = Url::parse(&format!(
            "{}/api/session/data/{}",
            config.url.trim_end_matches('/'),
            session.data_source
        ))
        .map_err(|e| GuacError::Config(format!("Failed to construct base URL: {}", e)))?;

        Ok(Self {
            http_client,
            config,
            base_url,
            session,
        })
    }

    /// The data source this session is bound to.
    pub fn data_source(&self) -> &str {
        &self.session.data_source
    }

    /// Deletes the session token on the server, ending the session.
    pub async fn disconnect(self) -> Result<(), GuacError> {
        let url = format!(
            "{}/{}/{}",
            self.config.url.trim_end_matches('/'),
            TOKEN_PATH,
            self.session.token
        );

        let response = self
            .prepare(self.http_client.delete(&url))
            .send()
            .await
            .map_err(|e| GuacError::Network(format!("Failed to delete session token: {}", e)))?;

        if !response.status().is_success() {
            return Err(handle_error_response(response, "Failed to delete session token").await);
        }
        Ok(())
    }

    /// Builds a resource URL below the session base, percent-encoding every
    /// path segment (identifiers may contain arbitrary characters).
    pub(crate) fn resource_url(&self, segments: &[&str]) -> Result<Url, GuacError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GuacError::Config(format!("Base URL cannot hold path segments: {}", self.base_url)))?
            .extend(segments);
        Ok(url)
    }

    /// Attaches the session token and any configured cookies.
    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(TOKEN_HEADER, &self.session.token);
        if self.config.disable_cookies || self.config.cookies.is_empty() {
            return builder;
        }
        let cookie_header = self
            .config
            .cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        builder.header(COOKIE, cookie_header)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str], context: &str) -> Result<T, GuacError> {
        let url = self.resource_url(segments)?;
        let response = self
            .prepare(self.http_client.get(url))
            .send()
            .await
            .map_err(|e| GuacError::Network(format!("{}: {}", context, e)))?;
        Self::decode(response, context).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
        context: &str,
    ) -> Result<T, GuacError> {
        let url = self.resource_url(segments)?;
        let response = self
            .prepare(self.http_client.post(url).json(body))
            .send()
            .await
            .map_err(|e| GuacError::Network(format!("{}: {}", context, e)))?;
        Self::decode(response, context).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        context: &str,
    ) -> Result<(), GuacError> {
        let url = self.resource_url(segments)?;
        let response = self
            .prepare(self.http_client.put(url).json(body))
            .send()
            .await
            .map_err(|e| GuacError::Network(format!("{}: {}", context, e)))?;
        Self::expect_success(response, context).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        context: &str,
    ) -> Result<(), GuacError> {
        let url = self.resource_url(segments)?;
        let response = self
            .prepare(self.http_client.patch(url).json(body))
            .send()
            .await
            .map_err(|e| GuacError::Network(format!("{}: {}", context, e)))?;
        Self::expect_success(response, context).await
    }

    pub(crate) async fn delete(&self, segments: &[&str], context: &str) -> Result<(), GuacError> {
        let url = self.resource_url(segments)?;
        let response = self
            .prepare(self.http_client.delete(url))
            .send()
            .await
            .map_err(|e| GuacError::Network(format!("{}: {}", context, e)))?;
        Self::expect_success(response, context).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, context: &str) -> Result<T, GuacError> {
        if !response.status().is_success() {
            return Err(handle_error_response(response, context).await);
        }
        response
            .json()
            .await
            .map_err(|e| GuacError::Decode(format!("{}: {}", context, e)))
    }

    /// Checks the status without decoding: mutation endpoints answer with an
    /// empty body on success.
    async fn expect_success(response: reqwest::Response, context: &str) -> Result<(), GuacError> {
        if !response.status().is_success() {
            return Err(handle_error_response(response, context).await);
        }
        Ok(())
    }
}
