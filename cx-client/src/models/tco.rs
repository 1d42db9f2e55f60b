use serde::Serialize;

use crate::endpoint::Endpoint;

pub const TCO_LOGS_POLICIES: Endpoint = Endpoint::singleton("mgmt/openapi/latest/tco/policies/v1/logs");
pub const TCO_SPANS_POLICIES: Endpoint = Endpoint::singleton("mgmt/openapi/latest/tco/policies/v1/spans");

wire_enum!(TcoPriority {
    Unspecified => "PRIORITY_TYPE_UNSPECIFIED",
    Block => "PRIORITY_TYPE_BLOCK",
    Low => "PRIORITY_TYPE_LOW",
    Medium => "PRIORITY_TYPE_MEDIUM",
    High => "PRIORITY_TYPE_HIGH",
});

wire_enum!(TcoRuleType {
    Unspecified => "RULE_TYPE_ID_UNSPECIFIED",
    Is => "RULE_TYPE_ID_IS",
    IsNot => "RULE_TYPE_ID_IS_NOT",
    StartWith => "RULE_TYPE_ID_START_WITH",
    Includes => "RULE_TYPE_ID_INCLUDES",
});

wire_enum!(TcoSeverity {
    Unspecified => "QUOTA_V1_SEVERITY_UNSPECIFIED",
    Debug => "QUOTA_V1_SEVERITY_DEBUG",
    Verbose => "QUOTA_V1_SEVERITY_VERBOSE",
    Info => "QUOTA_V1_SEVERITY_INFO",
    Warning => "QUOTA_V1_SEVERITY_WARNING",
    Error => "QUOTA_V1_SEVERITY_ERROR",
    Critical => "QUOTA_V1_SEVERITY_CRITICAL",
});

wire_enum!(SourceType {
    Unspecified => "SOURCE_TYPE_UNSPECIFIED",
    Logs => "SOURCE_TYPE_LOGS",
    Spans => "SOURCE_TYPE_SPANS",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicOverwritePoliciesRequest {
    pub source_type: SourceType,
    pub policies: Vec<TcoPolicyModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcoPolicyModel {
    pub name: String,
    pub description: Option<String>,
    pub priority: TcoPriority,
    pub application_rule: Option<TcoRule>,
    pub subsystem_rule: Option<TcoRule>,
    pub archive_retention: Option<ArchiveRetentionModel>,
    pub log_rules: Option<LogRules>,
    pub span_rules: Option<SpanRules>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcoRule {
    pub rule_type_id: TcoRuleType,
    // Multiple names are joined with commas
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRetentionModel {
    pub id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRules {
    pub severities: Vec<TcoSeverity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanRules {
    pub service_rule: Option<TcoRule>,
    pub action_rule: Option<TcoRule>,
    pub tag_rules: Vec<TcoTagRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcoTagRule {
    pub rule_type_id: TcoRuleType,
    pub tag_name: String,
    pub tag_value: String,
}

// Archive retentions are configured outside the operator and referenced by name
pub const RETENTIONS_PATH: &str = "mgmt/openapi/latest/logs/retentions/v1";
pub const RETENTIONS_LIST_POINTER: &str = "/retentions";
