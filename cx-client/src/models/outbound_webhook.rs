use std::collections::BTreeMap;

use serde::Serialize;

use crate::endpoint::Endpoint;

pub const OUTGOING_WEBHOOKS: Endpoint = Endpoint::crud("mgmt/openapi/latest/outgoing-webhooks/v1", "/id");

wire_enum!(WebhookType {
    Unknown => "UNKNOWN",
    Generic => "GENERIC",
    Slack => "SLACK",
    PagerDuty => "PAGERDUTY",
    SendLog => "SEND_LOG",
    EmailGroup => "EMAIL_GROUP",
    MicrosoftTeams => "MICROSOFT_TEAMS",
    Jira => "JIRA",
    Opsgenie => "OPSGENIE",
    Demisto => "DEMISTO",
    AwsEventBridge => "AWS_EVENT_BRIDGE",
});

wire_enum!(GenericWebhookMethod {
    Unknown => "UNKNOWN",
    Get => "GET",
    Post => "POST",
    Put => "PUT",
});

wire_enum!(SlackDigestType {
    Unknown => "UNKNOWN",
    ErrorAndCriticalLogs => "ERROR_AND_CRITICAL_LOGS",
    FlowAnomalies => "FLOW_ANOMALIES",
    SpikeAnomalies => "SPIKE_ANOMALIES",
    DataUsage => "DATA_USAGE",
});

wire_enum!(SlackAttachmentType {
    Empty => "EMPTY",
    MetricSnapshot => "METRIC_SNAPSHOT",
    Logs => "LOGS",
});

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingWebhookRequest {
    pub data: OutgoingWebhookInputData,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingWebhookInputData {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: WebhookType,
    pub url: Option<String>,
    #[serde(flatten)]
    pub config: WebhookConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WebhookConfig {
    GenericWebhook(GenericWebhookConfig),
    Slack(SlackConfig),
    PagerDuty(PagerDutyConfig),
    SendLog(SendLogConfig),
    EmailGroup(EmailGroupConfig),
    MicrosoftTeams(MicrosoftTeamsConfig),
    Jira(JiraConfig),
    Opsgenie(OpsgenieConfig),
    Demisto(DemistoConfig),
    AwsEventBridge(AwsEventBridgeConfig),
}

impl WebhookConfig {
    pub fn webhook_type(&self) -> WebhookType {
        match self {
            WebhookConfig::GenericWebhook(_) => WebhookType::Generic,
            WebhookConfig::Slack(_) => WebhookType::Slack,
            WebhookConfig::PagerDuty(_) => WebhookType::PagerDuty,
            WebhookConfig::SendLog(_) => WebhookType::SendLog,
            WebhookConfig::EmailGroup(_) => WebhookType::EmailGroup,
            WebhookConfig::MicrosoftTeams(_) => WebhookType::MicrosoftTeams,
            WebhookConfig::Jira(_) => WebhookType::Jira,
            WebhookConfig::Opsgenie(_) => WebhookType::Opsgenie,
            WebhookConfig::Demisto(_) => WebhookType::Demisto,
            WebhookConfig::AwsEventBridge(_) => WebhookType::AwsEventBridge,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericWebhookConfig {
    pub method: GenericWebhookMethod,
    pub headers: BTreeMap<String, String>,
    pub payload: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackConfig {
    pub digests: Vec<SlackDigestModel>,
    pub attachments: Vec<SlackAttachmentModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackDigestModel {
    #[serde(rename = "type")]
    pub type_: SlackDigestType,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackAttachmentModel {
    #[serde(rename = "type")]
    pub type_: SlackAttachmentType,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerDutyConfig {
    pub service_key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendLogConfig {
    pub payload: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailGroupConfig {
    pub email_addresses: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MicrosoftTeamsConfig {}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraConfig {
    pub api_token: String,
    pub email: String,
    pub project_key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OpsgenieConfig {}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemistoConfig {
    pub payload: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsEventBridgeConfig {
    pub event_bus_arn: String,
    pub detail: String,
    pub detail_type: String,
    pub source: String,
    pub role_name: String,
}

// Listing of all configured webhooks, used to resolve webhooks referenced by name
pub const OUTGOING_WEBHOOKS_LIST_POINTER: &str = "/deployed";
