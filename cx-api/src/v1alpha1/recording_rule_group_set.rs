use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "RecordingRuleGroupSet", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct RecordingRuleGroupSetSpec {
    pub groups: Vec<RecordingRuleGroup>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingRuleGroup {
    pub name: String,
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u32,
    pub limit: Option<u64>,
    pub rules: Vec<RecordingRule>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingRule {
    pub record: String,
    pub expr: String,
    pub labels: Option<BTreeMap<String, String>>,
}

fn default_interval_seconds() -> u32 {
    60
}
