use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "Integration", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSpec {
    pub integration_key: String,
    pub version: String,
    #[schemars(extend("x-kubernetes-preserve-unknown-fields" = true))]
    pub parameters: serde_json::Map<String, serde_json::Value>,
}
