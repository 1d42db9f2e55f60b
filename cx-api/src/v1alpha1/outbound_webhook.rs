use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "OutboundWebhook", namespaced)]
#[kube(status = "RemoteStatus")]
#[kube(printcolumn = r#"{"name":"id", "type":"string", "jsonPath":".status.id"}"#)]
#[serde(rename_all = "camelCase")]
pub struct OutboundWebhookSpec {
    pub name: String,
    pub outbound_webhook_type: OutboundWebhookType,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundWebhookType {
    pub generic_webhook: Option<GenericWebhook>,
    pub slack: Option<SlackWebhook>,
    pub pager_duty: Option<PagerDutyWebhook>,
    pub send_log: Option<SendLogWebhook>,
    pub email_group: Option<EmailGroupWebhook>,
    pub microsoft_teams: Option<MicrosoftTeamsWebhook>,
    pub jira: Option<JiraWebhook>,
    pub opsgenie: Option<OpsgenieWebhook>,
    pub demisto: Option<DemistoWebhook>,
    pub aws_event_bridge: Option<AwsEventBridgeWebhook>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum WebhookMethod {
    Get,
    #[default]
    Post,
    Put,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericWebhook {
    pub url: String,
    #[serde(default)]
    pub method: WebhookMethod,
    pub headers: Option<BTreeMap<String, String>>,
    pub payload: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum SlackDigestType {
    ErrorAndCriticalLogs,
    FlowAnomalies,
    SpikeAnomalies,
    DataUsage,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum SlackAttachmentType {
    MetricSnapshot,
    Logs,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackDigest {
    #[serde(rename = "type")]
    pub type_: SlackDigestType,
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackAttachment {
    #[serde(rename = "type")]
    pub type_: SlackAttachmentType,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackWebhook {
    pub url: String,
    pub digests: Option<Vec<SlackDigest>>,
    pub attachments: Option<Vec<SlackAttachment>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerDutyWebhook {
    pub service_key: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendLogWebhook {
    pub url: String,
    pub payload: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailGroupWebhook {
    pub email_addresses: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftTeamsWebhook {
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraWebhook {
    pub api_token: String,
    pub email: String,
    pub project_key: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpsgenieWebhook {
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemistoWebhook {
    pub url: String,
    pub payload: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsEventBridgeWebhook {
    pub event_bus_arn: String,
    pub detail: String,
    pub detail_type: String,
    pub source: String,
    pub role_name: String,
}
