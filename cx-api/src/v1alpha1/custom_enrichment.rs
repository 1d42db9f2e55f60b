use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "CustomEnrichment", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct CustomEnrichmentSpec {
    pub name: String,
    pub description: Option<String>,

    // exactly one of csv or config_map_ref
    pub csv: Option<String>,
    pub config_map_ref: Option<ConfigMapKeyRef>,
}
