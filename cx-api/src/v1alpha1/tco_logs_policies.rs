use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "TCOLogsPolicies", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct TCOLogsPoliciesSpec {
    pub policies: Vec<TCOLogsPolicy>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TCOPolicyPriority {
    Block,
    High,
    Medium,
    #[default]
    Low,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TCOPolicyRuleType {
    #[default]
    Is,
    IsNot,
    StartWith,
    Includes,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TCOLogSeverity {
    Debug,
    Verbose,
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TCOPolicyRule {
    pub names: Vec<String>,
    pub rule_type: TCOPolicyRuleType,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRetention {
    pub backend_ref: ArchiveRetentionBackendRef,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRetentionBackendRef {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TCOLogsPolicy {
    pub name: String,
    pub description: Option<String>,
    pub priority: TCOPolicyPriority,
    pub severities: Vec<TCOLogSeverity>,
    pub applications: Option<TCOPolicyRule>,
    pub subsystems: Option<TCOPolicyRule>,
    pub archive_retention: Option<ArchiveRetention>,
}
