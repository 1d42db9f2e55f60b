use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::rule_group as models;

use super::CoralogixResource;
use crate::errors::*;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

// Rules that operate on the whole log line rather than a named field
const LOG_TEXT_FIELD: &str = "text";

#[async_trait]
impl CoralogixResource for RuleGroup {
    type Request = models::RuleGroupRequest;

    fn endpoint() -> Endpoint {
        models::RULE_GROUPS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::RuleGroupRequest> {
        let spec = &self.spec;

        let mut rule_matchers = vec![];
        for app in spec.applications.iter().flatten() {
            rule_matchers.push(models::RuleMatcher::ApplicationName(models::MatcherValue { value: app.clone() }));
        }
        for subsystem in spec.subsystems.iter().flatten() {
            rule_matchers.push(models::RuleMatcher::SubsystemName(models::MatcherValue { value: subsystem.clone() }));
        }
        for sev in spec.severities.iter().flatten() {
            rule_matchers.push(models::RuleMatcher::Severity(models::MatcherValue { value: severity(*sev) }));
        }

        let mut rule_subgroups = vec![];
        for subgroup in &spec.subgroups {
            let mut rules = vec![];
            for (i, rule) in subgroup.rules.iter().enumerate() {
                let (source_field, parameters) = extract_parameters(rule)?;
                rules.push(models::RuleModel {
                    name: rule.name.clone(),
                    description: rule.description.clone(),
                    enabled: rule.active,
                    order: i as u32 + 1,
                    source_field,
                    parameters,
                });
            }
            rule_subgroups.push(models::RuleSubgroupModel { enabled: subgroup.active, order: subgroup.order, rules });
        }

        Ok(models::RuleGroupRequest {
            name: spec.name.clone(),
            description: spec.description.clone(),
            enabled: spec.active,
            hidden: spec.hidden,
            creator: spec.creator.clone(),
            order: spec.order,
            rule_matchers,
            rule_subgroups,
        })
    }
}

impl Validate for RuleGroup {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.check("spec.name", !self.spec.name.is_empty(), "must not be empty");
        for (i, subgroup) in self.spec.subgroups.iter().enumerate() {
            for (j, rule) in subgroup.rules.iter().enumerate() {
                v.exactly_one(&format!("spec.subgroups[{i}].rules[{j}]"), &rule_kinds(rule));
            }
        }
        v.finish()
    }
}

fn rule_kinds(rule: &Rule) -> [(&'static str, bool); 9] {
    [
        ("parse", rule.parse.is_some()),
        ("block", rule.block.is_some()),
        ("jsonExtract", rule.json_extract.is_some()),
        ("replace", rule.replace.is_some()),
        ("extractTimestamp", rule.extract_timestamp.is_some()),
        ("removeFields", rule.remove_fields.is_some()),
        ("jsonStringify", rule.json_stringify.is_some()),
        ("extract", rule.extract.is_some()),
        ("parseJsonField", rule.parse_json_field.is_some()),
    ]
}

fn extract_parameters(rule: &Rule) -> anyhow::Result<(String, models::RuleParameters)> {
    use models::RuleParameters as P;

    if rule_kinds(rule).iter().filter(|(_, set)| *set).count() != 1 {
        return Err(ExtractError::invalid_value(&format!("rule {} must set exactly one rule type", rule.name)));
    }

    if let Some(r) = &rule.parse {
        return Ok((
            r.source_field.clone(),
            P::ParseParameters(models::ParseParameters { destination_field: r.destination_field.clone(), rule: r.regex.clone() }),
        ));
    }
    if let Some(r) = &rule.block {
        let params = if r.blocking_all_matching_blocks {
            P::BlockParameters(models::BlockParameters { keep_blocked_logs: r.keep_blocked_logs, rule: r.regex.clone() })
        } else {
            P::AllowParameters(models::AllowParameters { keep_blocked_logs: r.keep_blocked_logs, rule: r.regex.clone() })
        };
        return Ok((r.source_field.clone(), params));
    }
    if let Some(r) = &rule.json_extract {
        return Ok((
            LOG_TEXT_FIELD.into(),
            P::JsonExtractParameters(models::JsonExtractParameters {
                destination_field: json_extract_destination(r.destination_field),
                rule: r.json_key.clone(),
            }),
        ));
    }
    if let Some(r) = &rule.replace {
        return Ok((
            r.source_field.clone(),
            P::ReplaceParameters(models::ReplaceParameters {
                destination_field: r.destination_field.clone(),
                replace_new_val: r.replacement_string.clone(),
                rule: r.regex.clone(),
            }),
        ));
    }
    if let Some(r) = &rule.extract_timestamp {
        return Ok((
            r.source_field.clone(),
            P::ExtractTimestampParameters(models::ExtractTimestampParameters {
                standard: format_standard(r.field_format_standard),
                format: r.time_format.clone(),
            }),
        ));
    }
    if let Some(r) = &rule.remove_fields {
        return Ok((
            LOG_TEXT_FIELD.into(),
            P::RemoveFieldsParameters(models::RemoveFieldsParameters { fields: r.excluded_fields.clone() }),
        ));
    }
    if let Some(r) = &rule.json_stringify {
        return Ok((
            r.source_field.clone(),
            P::JsonStringifyParameters(models::JsonStringifyParameters {
                destination_field: r.destination_field.clone(),
                delete_source: !r.keep_source_field,
            }),
        ));
    }
    if let Some(r) = &rule.extract {
        return Ok((r.source_field.clone(), P::ExtractParameters(models::ExtractParameters { rule: r.regex.clone() })));
    }
    if let Some(r) = &rule.parse_json_field {
        return Ok((
            r.source_field.clone(),
            P::JsonParseParameters(models::JsonParseParameters {
                destination_field: r.destination_field.clone(),
                delete_source: !r.keep_source_field,
                override_dest: !r.keep_destination_field,
                escaped_value: true,
            }),
        ));
    }

    Err(ExtractError::invalid_value(&format!("rule {} must set exactly one rule type", rule.name)))
}

fn severity(s: RuleSeverity) -> models::RuleSeverity {
    match s {
        RuleSeverity::Debug => models::RuleSeverity::Unspecified,
        RuleSeverity::Verbose => models::RuleSeverity::Verbose,
        RuleSeverity::Info => models::RuleSeverity::Info,
        RuleSeverity::Warning => models::RuleSeverity::Warning,
        RuleSeverity::Error => models::RuleSeverity::Error,
        RuleSeverity::Critical => models::RuleSeverity::Critical,
    }
}

fn json_extract_destination(d: JsonExtractDestination) -> models::JsonExtractDestinationField {
    match d {
        JsonExtractDestination::Category => models::JsonExtractDestinationField::CategoryOrUnspecified,
        JsonExtractDestination::Classname => models::JsonExtractDestinationField::Classname,
        JsonExtractDestination::Method => models::JsonExtractDestinationField::Method,
        JsonExtractDestination::ThreadId => models::JsonExtractDestinationField::ThreadId,
        JsonExtractDestination::Severity => models::JsonExtractDestinationField::Severity,
    }
}

fn format_standard(f: FieldFormatStandard) -> models::FormatStandard {
    match f {
        FieldFormatStandard::Strftime => models::FormatStandard::StrftimeOrUnspecified,
        FieldFormatStandard::JavaSDF => models::FormatStandard::JavaSdf,
        FieldFormatStandard::Golang => models::FormatStandard::Golang,
        FieldFormatStandard::SecondTS => models::FormatStandard::SecondTs,
        FieldFormatStandard::MilliTS => models::FormatStandard::MilliTs,
        FieldFormatStandard::MicroTS => models::FormatStandard::MicroTs,
        FieldFormatStandard::NanoTS => models::FormatStandard::NanoTs,
    }
}
