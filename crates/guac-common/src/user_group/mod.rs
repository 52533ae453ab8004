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

use crate::util::string_to_bool;
use serde::{Deserialize, Serialize};

/// A Guacamole user group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    pub identifier: String,
    #[serde(default)]
    pub attributes: UserGroupAttributes,
}

/// User group attributes. `disabled` is a string-encoded boolean
/// (`"true"` or empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGroupAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
}

impl UserGroupAttributes {
    /// Whether the group is disabled (wire value `"true"`).
    pub fn is_disabled(&self) -> bool {
        string_to_bool(self.disabled.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_wire_shape() {
        let group: UserGroup =
            serde_json::from_str(r#"{"identifier":"operators","attributes":{"disabled":"true"}}"#).unwrap();
        assert_eq!(group.identifier, "operators");
        assert!(group.attributes.is_disabled());

        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["identifier"], "operators");
        assert_eq!(json["attributes"]["disabled"], "true");
    }
}
