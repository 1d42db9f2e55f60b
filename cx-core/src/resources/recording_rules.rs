use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::recording_rules as models;

use super::CoralogixResource;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for RecordingRuleGroupSet {
    type Request = models::RuleGroupSetRequest;

    fn endpoint() -> Endpoint {
        models::RECORDING_RULE_GROUP_SETS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::RuleGroupSetRequest> {
        Ok(models::RuleGroupSetRequest {
            name: self.metadata.name.clone(),
            groups: self
                .spec
                .groups
                .iter()
                .map(|g| models::InRuleGroup {
                    name: g.name.clone(),
                    interval: g.interval_seconds,
                    limit: g.limit,
                    rules: g
                        .rules
                        .iter()
                        .map(|r| models::InRule {
                            record: r.record.clone(),
                            expr: r.expr.clone(),
                            labels: r.labels.clone().unwrap_or_default(),
                        })
                        .collect(),
                })
                .collect(),
        })
    }
}

impl Validate for RecordingRuleGroupSet {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.check("spec.groups", !self.spec.groups.is_empty(), "must not be empty");
        for (i, group) in self.spec.groups.iter().enumerate() {
            v.check(&format!("spec.groups[{i}].intervalSeconds"), group.interval_seconds > 0, "must be greater than zero");
            for (j, rule) in group.rules.iter().enumerate() {
                v.check(&format!("spec.groups[{i}].rules[{j}].expr"), !rule.expr.is_empty(), "must not be empty");
            }
        }
        v.finish()
    }
}
