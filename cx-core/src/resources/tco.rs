use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::tco as models;

use super::{
    CoralogixResource,
    or_empty,
};
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for TCOLogsPolicies {
    type Request = models::AtomicOverwritePoliciesRequest;

    fn endpoint() -> Endpoint {
        models::TCO_LOGS_POLICIES
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::AtomicOverwritePoliciesRequest> {
        let mut policies = vec![];
        for p in &self.spec.policies {
            policies.push(models::TcoPolicyModel {
                name: p.name.clone(),
                description: p.description.clone(),
                priority: priority(p.priority),
                application_rule: p.applications.as_ref().map(policy_rule),
                subsystem_rule: p.subsystems.as_ref().map(policy_rule),
                archive_retention: extract_archive_retention(&p.archive_retention, refs).await?,
                log_rules: Some(models::LogRules { severities: p.severities.iter().map(|s| severity(*s)).collect() }),
                span_rules: None,
            });
        }

        Ok(models::AtomicOverwritePoliciesRequest { source_type: models::SourceType::Logs, policies })
    }
}

impl Validate for TCOLogsPolicies {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        for (i, p) in self.spec.policies.iter().enumerate() {
            let path = format!("spec.policies[{i}]");
            v.check(&format!("{path}.name"), !p.name.is_empty(), "must not be empty");
            v.check(&format!("{path}.severities"), !p.severities.is_empty(), "must not be empty");
            validate_rule(&mut v, &format!("{path}.applications"), &p.applications);
            validate_rule(&mut v, &format!("{path}.subsystems"), &p.subsystems);
        }
        v.finish()
    }
}

#[async_trait]
impl CoralogixResource for TCOTracesPolicies {
    type Request = models::AtomicOverwritePoliciesRequest;

    fn endpoint() -> Endpoint {
        models::TCO_SPANS_POLICIES
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::AtomicOverwritePoliciesRequest> {
        let mut policies = vec![];
        for p in &self.spec.policies {
            let tag_rules = or_empty(&p.tags)
                .iter()
                .map(|t| models::TcoTagRule {
                    rule_type_id: rule_type(t.rule_type),
                    tag_name: t.name.clone(),
                    tag_value: t.values.join(","),
                })
                .collect();

            policies.push(models::TcoPolicyModel {
                name: p.name.clone(),
                description: p.description.clone(),
                priority: priority(p.priority),
                application_rule: p.applications.as_ref().map(policy_rule),
                subsystem_rule: p.subsystems.as_ref().map(policy_rule),
                archive_retention: extract_archive_retention(&p.archive_retention, refs).await?,
                log_rules: None,
                span_rules: Some(models::SpanRules {
                    service_rule: p.services.as_ref().map(policy_rule),
                    action_rule: p.actions.as_ref().map(policy_rule),
                    tag_rules,
                }),
            });
        }

        Ok(models::AtomicOverwritePoliciesRequest { source_type: models::SourceType::Spans, policies })
    }
}

impl Validate for TCOTracesPolicies {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        for (i, p) in self.spec.policies.iter().enumerate() {
            let path = format!("spec.policies[{i}]");
            v.check(&format!("{path}.name"), !p.name.is_empty(), "must not be empty");
            validate_rule(&mut v, &format!("{path}.applications"), &p.applications);
            validate_rule(&mut v, &format!("{path}.subsystems"), &p.subsystems);
            validate_rule(&mut v, &format!("{path}.services"), &p.services);
            validate_rule(&mut v, &format!("{path}.actions"), &p.actions);
            for (j, tag) in p.tags.iter().flatten().enumerate() {
                v.check(&format!("{path}.tags[{j}].values"), !tag.values.is_empty(), "must not be empty");
            }
        }
        v.finish()
    }
}

fn validate_rule(v: &mut Validator, path: &str, rule: &Option<TCOPolicyRule>) {
    if let Some(r) = rule {
        v.check(&format!("{path}.names"), !r.names.is_empty(), "must not be empty");
    }
}

async fn extract_archive_retention(
    retention: &Option<ArchiveRetention>,
    refs: &RefResolver,
) -> anyhow::Result<Option<models::ArchiveRetentionModel>> {
    let Some(r) = retention else {
        return Ok(None);
    };

    let id = refs
        .lookup_backend_id(models::RETENTIONS_PATH, models::RETENTIONS_LIST_POINTER, "/name", "/id", &r.backend_ref.name)
        .await?;
    Ok(Some(models::ArchiveRetentionModel { id }))
}

fn policy_rule(r: &TCOPolicyRule) -> models::TcoRule {
    models::TcoRule { rule_type_id: rule_type(r.rule_type), name: r.names.join(",") }
}

fn priority(p: TCOPolicyPriority) -> models::TcoPriority {
    match p {
        TCOPolicyPriority::Block => models::TcoPriority::Block,
        TCOPolicyPriority::High => models::TcoPriority::High,
        TCOPolicyPriority::Medium => models::TcoPriority::Medium,
        TCOPolicyPriority::Low => models::TcoPriority::Low,
    }
}

fn rule_type(r: TCOPolicyRuleType) -> models::TcoRuleType {
    match r {
        TCOPolicyRuleType::Is => models::TcoRuleType::Is,
        TCOPolicyRuleType::IsNot => models::TcoRuleType::IsNot,
        TCOPolicyRuleType::StartWith => models::TcoRuleType::StartWith,
        TCOPolicyRuleType::Includes => models::TcoRuleType::Includes,
    }
}

fn severity(s: TCOLogSeverity) -> models::TcoSeverity {
    match s {
        TCOLogSeverity::Debug => models::TcoSeverity::Debug,
        TCOLogSeverity::Verbose => models::TcoSeverity::Verbose,
        TCOLogSeverity::Info => models::TcoSeverity::Info,
        TCOLogSeverity::Warning => models::TcoSeverity::Warning,
        TCOLogSeverity::Error => models::TcoSeverity::Error,
        TCOLogSeverity::Critical => models::TcoSeverity::Critical,
    }
}
