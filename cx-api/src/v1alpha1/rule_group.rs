use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "RuleGroup", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct RuleGroupSpec {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    pub applications: Option<Vec<String>>,
    pub subsystems: Option<Vec<String>>,
    pub severities: Option<Vec<RuleSeverity>>,
    #[serde(default)]
    pub hidden: bool,
    pub creator: Option<String>,
    pub order: Option<u32>,
    pub subgroups: Vec<RuleSubGroup>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum RuleSeverity {
    Debug,
    Verbose,
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSubGroup {
    #[serde(default = "default_true")]
    pub active: bool,
    pub order: Option<u32>,
    pub rules: Vec<Rule>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    pub parse: Option<ParseRule>,
    pub block: Option<BlockRule>,
    pub json_extract: Option<JsonExtractRule>,
    pub replace: Option<ReplaceRule>,
    pub extract_timestamp: Option<ExtractTimestampRule>,
    pub remove_fields: Option<RemoveFieldsRule>,
    pub json_stringify: Option<JsonStringifyRule>,
    pub extract: Option<ExtractRule>,
    pub parse_json_field: Option<ParseJsonFieldRule>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRule {
    pub source_field: String,
    pub destination_field: String,
    pub regex: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRule {
    pub source_field: String,
    pub regex: String,
    #[serde(default)]
    pub keep_blocked_logs: bool,
    #[serde(default = "default_true")]
    pub blocking_all_matching_blocks: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum JsonExtractDestination {
    #[default]
    Category,
    Classname,
    Method,
    ThreadId,
    Severity,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonExtractRule {
    pub destination_field: JsonExtractDestination,
    pub json_key: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceRule {
    pub source_field: String,
    pub destination_field: String,
    pub regex: String,
    pub replacement_string: String,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum FieldFormatStandard {
    #[default]
    Strftime,
    JavaSDF,
    Golang,
    SecondTS,
    MilliTS,
    MicroTS,
    NanoTS,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTimestampRule {
    pub source_field: String,
    pub field_format_standard: FieldFormatStandard,
    pub time_format: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFieldsRule {
    pub excluded_fields: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonStringifyRule {
    pub source_field: String,
    pub destination_field: String,
    #[serde(default)]
    pub keep_source_field: bool,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRule {
    pub source_field: String,
    pub regex: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseJsonFieldRule {
    pub source_field: String,
    pub destination_field: String,
    #[serde(default)]
    pub keep_source_field: bool,
    #[serde(default)]
    pub keep_destination_field: bool,
}
