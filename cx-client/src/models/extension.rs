use serde::Serialize;

use crate::endpoint::Endpoint;

pub const EXTENSION_DEPLOYMENTS: Endpoint = Endpoint::crud("mgmt/openapi/latest/extensions/v1/deployments", "/id");

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDeploymentRequest {
    pub id: String,
    pub version: String,
    pub item_ids: Vec<String>,
    pub applications: Vec<String>,
    pub subsystems: Vec<String>,
}
