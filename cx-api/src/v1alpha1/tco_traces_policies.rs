use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use super::{
    ArchiveRetention,
    TCOPolicyPriority,
    TCOPolicyRule,
    TCOPolicyRuleType,
};
use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "TCOTracesPolicies", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct TCOTracesPoliciesSpec {
    pub policies: Vec<TCOTracesPolicy>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TCOPolicyTag {
    pub name: String,
    pub rule_type: TCOPolicyRuleType,
    pub values: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TCOTracesPolicy {
    pub name: String,
    pub description: Option<String>,
    pub priority: TCOPolicyPriority,
    pub applications: Option<TCOPolicyRule>,
    pub subsystems: Option<TCOPolicyRule>,
    pub services: Option<TCOPolicyRule>,
    pub actions: Option<TCOPolicyRule>,
    pub tags: Option<Vec<TCOPolicyTag>>,
    pub archive_retention: Option<ArchiveRetention>,
}
