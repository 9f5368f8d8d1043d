//! Authentication info as served by `GET /api/authorization`.

use serde::{Deserialize, Serialize};
use topicbar_core::{Action, Resource};

/// The signed-in user and whether RBAC is enforced at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationInfo {
    pub rbac_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,

    #[serde(default)]
    pub permissions: Vec<UserPermission>,
}

/// One permission of one of the user's roles.
///
/// Applies to every cluster listed in `clusters`. `value` is a pattern
/// over resource names; absent means every name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermission {
    #[serde(default)]
    pub clusters: Vec<String>,

    pub resource: Resource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default)]
    pub actions: Vec<Action>,
}
