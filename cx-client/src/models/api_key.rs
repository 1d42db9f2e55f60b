use serde::Serialize;

use crate::endpoint::Endpoint;

pub const API_KEYS: Endpoint = Endpoint::crud("mgmt/openapi/latest/aaa/api-keys/v3", "/keyId");

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRequest {
    pub name: String,
    pub owner: ApiKeyOwner,
    pub is_active: bool,
    pub key_permissions: KeyPermissions,
    pub hashed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiKeyOwner {
    UserId(String),
    TeamId(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPermissions {
    pub presets: Vec<String>,
    pub permissions: Vec<String>,
}
