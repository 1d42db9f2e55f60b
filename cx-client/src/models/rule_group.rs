use serde::Serialize;

use crate::endpoint::Endpoint;

pub const RULE_GROUPS: Endpoint = Endpoint::crud("mgmt/openapi/latest/parsing-rules/rule-groups/v1", "/ruleGroup/id");

wire_enum!(RuleSeverity {
    Unspecified => "VALUE_DEBUG_OR_UNSPECIFIED",
    Verbose => "VALUE_VERBOSE",
    Info => "VALUE_INFO",
    Warning => "VALUE_WARNING",
    Error => "VALUE_ERROR",
    Critical => "VALUE_CRITICAL",
});

wire_enum!(JsonExtractDestinationField {
    CategoryOrUnspecified => "DESTINATION_FIELD_CATEGORY_OR_UNSPECIFIED",
    Classname => "DESTINATION_FIELD_CLASSNAME",
    Method => "DESTINATION_FIELD_METHODNAME",
    ThreadId => "DESTINATION_FIELD_THREADID",
    Severity => "DESTINATION_FIELD_SEVERITY",
});

wire_enum!(FormatStandard {
    StrftimeOrUnspecified => "FORMAT_STANDARD_STRFTIME_OR_UNSPECIFIED",
    JavaSdf => "FORMAT_STANDARD_JAVASDF",
    Golang => "FORMAT_STANDARD_GOLANG",
    SecondTs => "FORMAT_STANDARD_SECONDSTS",
    MilliTs => "FORMAT_STANDARD_MILLITS",
    MicroTs => "FORMAT_STANDARD_MICROTS",
    NanoTs => "FORMAT_STANDARD_NANOTS",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleGroupRequest {
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub hidden: bool,
    pub creator: Option<String>,
    pub order: Option<u32>,
    pub rule_matchers: Vec<RuleMatcher>,
    pub rule_subgroups: Vec<RuleSubgroupModel>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleMatcher {
    ApplicationName(MatcherValue<String>),
    SubsystemName(MatcherValue<String>),
    Severity(MatcherValue<RuleSeverity>),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherValue<T> {
    pub value: T,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSubgroupModel {
    pub enabled: bool,
    pub order: Option<u32>,
    pub rules: Vec<RuleModel>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleModel {
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub order: u32,
    pub source_field: String,
    pub parameters: RuleParameters,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleParameters {
    ParseParameters(ParseParameters),
    BlockParameters(BlockParameters),
    JsonExtractParameters(JsonExtractParameters),
    ReplaceParameters(ReplaceParameters),
    ExtractTimestampParameters(ExtractTimestampParameters),
    RemoveFieldsParameters(RemoveFieldsParameters),
    JsonStringifyParameters(JsonStringifyParameters),
    ExtractParameters(ExtractParameters),
    JsonParseParameters(JsonParseParameters),
    AllowParameters(AllowParameters),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseParameters {
    pub destination_field: String,
    pub rule: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockParameters {
    pub keep_blocked_logs: bool,
    pub rule: String,
}

// A block rule that does not block all matching lines is sent as an allow rule
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowParameters {
    pub keep_blocked_logs: bool,
    pub rule: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonExtractParameters {
    pub destination_field: JsonExtractDestinationField,
    pub rule: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceParameters {
    pub destination_field: String,
    pub replace_new_val: String,
    pub rule: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTimestampParameters {
    pub standard: FormatStandard,
    pub format: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFieldsParameters {
    pub fields: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonStringifyParameters {
    pub destination_field: String,
    pub delete_source: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractParameters {
    pub rule: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonParseParameters {
    pub destination_field: String,
    pub delete_source: bool,
    pub override_dest: bool,
    pub escaped_value: bool,
}
