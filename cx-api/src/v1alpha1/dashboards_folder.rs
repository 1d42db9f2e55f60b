use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "DashboardsFolder", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct DashboardsFolderSpec {
    pub name: String,
    pub custom_id: Option<String>,
    pub parent_folder_id: Option<String>,
    pub parent_folder_ref: Option<ResourceRef>,
}
