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

//! Domain model for the Apache Guacamole REST management API.
//!
//! This crate holds the wire types (users, user groups, connections,
//! connection groups, permissions), the path resolver for the nested
//! connection-group tree, the set-difference engine used to compute
//! incremental permission patches, and the local validation helpers.
//! It performs no I/O; the HTTP client lives in `guac-client`.

pub mod connection;
pub mod connection_group;
pub mod error;
pub mod permission;
pub mod user;
pub mod user_group;
pub mod util;

pub use error::{Diagnostic, Diagnostics, GuacError};
