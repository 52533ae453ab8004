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

use std::fmt;
use thiserror::Error;

/// Errors produced by the Guacamole client and domain model.
#[derive(Debug, Error)]
pub enum GuacError {
    /// Invalid or incomplete client configuration, detected before any network call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection refused, timeout, malformed URL).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status. The decoded response body is
    /// attached verbatim for diagnostics.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Authentication with the server failed or the session token was rejected.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The server refused the operation for the authenticated identity.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The requested object does not exist, including path lookups that match
    /// no entry in the resolved tree.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The connection-group tree returned by the server is not a strict
    /// hierarchy (a node was reached twice).
    #[error("Malformed connection tree: {0}")]
    MalformedTree(String),

    /// One or more local validation failures. All independent problems are
    /// collected so the caller sees them in a single attempt.
    #[error("{0}")]
    Validation(Diagnostics),
}

/// A single user-facing problem report with a short summary and a detail string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.summary, self.detail)
    }
}

/// An ordered collection of [`Diagnostic`]s.
///
/// Validation routines append every failure they find instead of stopping at
/// the first, so one attempt reports all problems together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Converts the collection into a `Result`, producing
    /// [`GuacError::Validation`] when any diagnostic was recorded.
    pub fn into_result(self) -> Result<(), GuacError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(GuacError::Validation(self))
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}
