use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "ApiKey", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct ApiKeySpec {
    pub name: String,
    pub owner: ApiKeyOwner,
    #[serde(default = "default_true")]
    pub active: bool,
    pub presets: Option<Vec<String>>,
    pub permissions: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyOwner {
    pub user_id: Option<String>,
    pub team_id: Option<u32>,
}
