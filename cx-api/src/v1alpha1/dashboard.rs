use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "Dashboard", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct DashboardSpec {
    // exactly one of json or config_map_ref
    pub json: Option<String>,
    pub config_map_ref: Option<ConfigMapKeyRef>,

    pub folder_ref: Option<DashboardFolderRef>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFolderRef {
    pub backend_ref: Option<DashboardFolderBackendRef>,
    pub resource_ref: Option<ResourceRef>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFolderBackendRef {
    pub id: Option<String>,
    pub path: Option<String>,
}
