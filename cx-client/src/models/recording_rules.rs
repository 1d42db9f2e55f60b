use std::collections::BTreeMap;

use serde::Serialize;

use crate::endpoint::Endpoint;

pub const RECORDING_RULE_GROUP_SETS: Endpoint =
    Endpoint::crud("mgmt/openapi/latest/metrics/recording-rules/v2/rule-group-sets", "/id");

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleGroupSetRequest {
    pub name: Option<String>,
    pub groups: Vec<InRuleGroup>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InRuleGroup {
    pub name: String,
    pub interval: u32,
    pub limit: Option<u64>,
    pub rules: Vec<InRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InRule {
    pub record: String,
    pub expr: String,
    pub labels: BTreeMap<String, String>,
}
