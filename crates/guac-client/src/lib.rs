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

//! Async client for the Apache Guacamole REST management API.
//!
//! [`GuacClient`] authenticates against `/api/tokens` (or verifies a
//! pre-supplied session token), then exposes typed CRUD operations for
//! users, user groups, connections and connection groups, path-based
//! lookups over the connection tree, and incremental permission
//! reconciliation built on the diff engine in `guac-common`.

pub mod auth;
pub mod client;
pub mod config;
pub mod connection_groups;
pub mod connections;
pub mod reconcile;
pub mod schema;
pub mod user_groups;
pub mod users;

#[cfg(test)]
mod tests;

pub use auth::{AuthClient, PasswordAuthClient, Session, TokenAuthClient};
pub use client::GuacClient;
pub use config::Config;
pub use reconcile::{Grantee, Grants};
