use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::outbound_webhook as models;

use super::CoralogixResource;
use crate::errors::*;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for OutboundWebhook {
    type Request = models::OutgoingWebhookRequest;

    fn endpoint() -> Endpoint {
        models::OUTGOING_WEBHOOKS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::OutgoingWebhookRequest> {
        let (url, config) = extract_config(&self.spec.outbound_webhook_type)?;
        Ok(models::OutgoingWebhookRequest {
            data: models::OutgoingWebhookInputData {
                name: self.spec.name.clone(),
                type_: config.webhook_type(),
                url,
                config,
            },
        })
    }
}

impl Validate for OutboundWebhook {
    fn validate(&self) -> Result<(), ValidationError> {
        let t = &self.spec.outbound_webhook_type;
        Validator::new()
            .check("spec.name", !self.spec.name.is_empty(), "must not be empty")
            .exactly_one(
                "spec.outboundWebhookType",
                &[
                    ("genericWebhook", t.generic_webhook.is_some()),
                    ("slack", t.slack.is_some()),
                    ("pagerDuty", t.pager_duty.is_some()),
                    ("sendLog", t.send_log.is_some()),
                    ("emailGroup", t.email_group.is_some()),
                    ("microsoftTeams", t.microsoft_teams.is_some()),
                    ("jira", t.jira.is_some()),
                    ("opsgenie", t.opsgenie.is_some()),
                    ("demisto", t.demisto.is_some()),
                    ("awsEventBridge", t.aws_event_bridge.is_some()),
                ],
            )
            .finish()
    }
}

// Returns the webhook url (if the type has one) alongside the type-specific config
fn extract_config(t: &OutboundWebhookType) -> anyhow::Result<(Option<String>, models::WebhookConfig)> {
    use models::WebhookConfig as C;

    let mut found = vec![];
    if let Some(w) = &t.generic_webhook {
        found.push((
            Some(w.url.clone()),
            C::GenericWebhook(models::GenericWebhookConfig {
                method: match w.method {
                    WebhookMethod::Get => models::GenericWebhookMethod::Get,
                    WebhookMethod::Post => models::GenericWebhookMethod::Post,
                    WebhookMethod::Put => models::GenericWebhookMethod::Put,
                },
                headers: w.headers.clone().unwrap_or_default(),
                payload: w.payload.clone(),
            }),
        ));
    }
    if let Some(w) = &t.slack {
        found.push((
            Some(w.url.clone()),
            C::Slack(models::SlackConfig {
                digests: w
                    .digests
                    .iter()
                    .flatten()
                    .map(|d| models::SlackDigestModel { type_: slack_digest_type(d.type_), is_active: d.is_active })
                    .collect(),
                attachments: w
                    .attachments
                    .iter()
                    .flatten()
                    .map(|a| models::SlackAttachmentModel {
                        type_: slack_attachment_type(a.type_),
                        is_active: a.is_active,
                    })
                    .collect(),
            }),
        ));
    }
    if let Some(w) = &t.pager_duty {
        found.push((None, C::PagerDuty(models::PagerDutyConfig { service_key: w.service_key.clone() })));
    }
    if let Some(w) = &t.send_log {
        found.push((Some(w.url.clone()), C::SendLog(models::SendLogConfig { payload: w.payload.clone() })));
    }
    if let Some(w) = &t.email_group {
        found.push((None, C::EmailGroup(models::EmailGroupConfig { email_addresses: w.email_addresses.clone() })));
    }
    if let Some(w) = &t.microsoft_teams {
        found.push((Some(w.url.clone()), C::MicrosoftTeams(models::MicrosoftTeamsConfig {})));
    }
    if let Some(w) = &t.jira {
        found.push((
            Some(w.url.clone()),
            C::Jira(models::JiraConfig {
                api_token: w.api_token.clone(),
                email: w.email.clone(),
                project_key: w.project_key.clone(),
            }),
        ));
    }
    if let Some(w) = &t.opsgenie {
        found.push((Some(w.url.clone()), C::Opsgenie(models::OpsgenieConfig {})));
    }
    if let Some(w) = &t.demisto {
        found.push((Some(w.url.clone()), C::Demisto(models::DemistoConfig { payload: w.payload.clone() })));
    }
    if let Some(w) = &t.aws_event_bridge {
        found.push((
            None,
            C::AwsEventBridge(models::AwsEventBridgeConfig {
                event_bus_arn: w.event_bus_arn.clone(),
                detail: w.detail.clone(),
                detail_type: w.detail_type.clone(),
                source: w.source.clone(),
                role_name: w.role_name.clone(),
            }),
        ));
    }

    match found.len() {
        1 => Ok(found.remove(0)),
        n => Err(ExtractError::invalid_value(&format!("outboundWebhookType must set exactly one webhook type, found {n}"))),
    }
}

fn slack_digest_type(t: SlackDigestType) -> models::SlackDigestType {
    match t {
        SlackDigestType::ErrorAndCriticalLogs => models::SlackDigestType::ErrorAndCriticalLogs,
        SlackDigestType::FlowAnomalies => models::SlackDigestType::FlowAnomalies,
        SlackDigestType::SpikeAnomalies => models::SlackDigestType::SpikeAnomalies,
        SlackDigestType::DataUsage => models::SlackDigestType::DataUsage,
    }
}

fn slack_attachment_type(t: SlackAttachmentType) -> models::SlackAttachmentType {
    match t {
        SlackAttachmentType::MetricSnapshot => models::SlackAttachmentType::MetricSnapshot,
        SlackAttachmentType::Logs => models::SlackAttachmentType::Logs,
    }
}
