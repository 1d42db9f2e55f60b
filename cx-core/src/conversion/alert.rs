use cx_api::{
    BackendRef,
    v1alpha1 as alpha,
    v1beta1 as beta,
};
use tracing::*;

use crate::errors::*;
use crate::time::*;

const CONTAINS_PREFIX: &str = "filter:contains:";
const STARTS_WITH_PREFIX: &str = "filter:startsWith:";
const ENDS_WITH_PREFIX: &str = "filter:endsWith:";

const DEFAULT_NUMERATOR_ALIAS: &str = "Query 1";
const DEFAULT_DENOMINATOR_ALIAS: &str = "Query 2";

pub fn alert_to_v1beta1(alert: &alpha::Alert) -> anyhow::Result<beta::Alert> {
    let spec = &alert.spec;

    let mut groups = spec.notification_groups.iter().flatten().map(notification_group_to_v1beta1);
    let notification_group = groups.next();
    let excess: Vec<_> = groups.collect();

    let schedule = match &spec.scheduling {
        Some(s) => Some(beta::AlertSchedule {
            active_on: beta::ActiveOn {
                day_of_week: s.days_enabled.iter().map(|d| day_to_v1beta1(*d)).collect(),
                start_time: s.start_time.clone(),
                end_time: s.end_time.clone(),
                utc_offset: Some(utc_offset_from_time_zone(&s.time_zone)?),
            },
        }),
        None => None,
    };

    let (type_definition, group_by_keys) = type_definition_to_v1beta1(&spec.alert_type)?;

    Ok(beta::Alert {
        metadata: alert.metadata.clone(),
        spec: beta::AlertSpec {
            name: spec.name.clone(),
            description: spec.description.clone(),
            enabled: spec.active,
            priority: severity_to_priority(spec.severity),
            group_by_keys,
            incidents_settings: spec.show_in_insight.as_ref().map(|s| beta::IncidentsSettings {
                notify_on: notify_on_to_v1beta1(s.notify_on),
                retriggering_period: Some(beta::RetriggeringPeriod { minutes: s.retriggering_period_minutes }),
            }),
            notification_group,
            notification_group_excess: if excess.is_empty() { None } else { Some(excess) },
            entity_labels: spec.labels.clone(),
            phantom_mode: false,
            schedule,
            notification_payload_filter: spec.payload_filters.clone(),
            type_definition,
        },
        status: alert.status.clone(),
    })
}

fn notification_group_to_v1beta1(group: &alpha::NotificationGroup) -> beta::NotificationGroup {
    let webhooks = group.notifications.as_ref().map(|notifications| {
        notifications
            .iter()
            .map(|n| beta::WebhookSettings {
                retriggering_period: Some(beta::RetriggeringPeriod { minutes: n.retriggering_period_minutes }),
                notify_on: notify_on_to_v1beta1(n.notify_on),
                integration: beta::IntegrationType {
                    integration_ref: n.integration_name.as_ref().map(|name| beta::IntegrationRef {
                        backend_ref: Some(BackendRef { id: None, name: Some(name.clone()) }),
                        resource_ref: None,
                    }),
                    recipients: n.email_recipients.clone(),
                },
            })
            .collect()
    });

    beta::NotificationGroup { group_by_keys: group.group_by_fields.clone(), webhooks }
}

fn type_definition_to_v1beta1(
    t: &alpha::AlertType,
) -> anyhow::Result<(beta::AlertTypeDefinition, Option<Vec<String>>)> {
    let mut def = beta::AlertTypeDefinition::default();

    let group_by = match (
        &t.standard,
        &t.ratio,
        &t.new_value,
        &t.unique_count,
        &t.time_relative,
        &t.metric,
        &t.tracing,
        &t.flow,
    ) {
        (Some(standard), None, None, None, None, None, None, None) => {
            standard_to_v1beta1(standard, &mut def)?;
            standard.conditions.group_by.clone()
        },
        (None, Some(ratio), None, None, None, None, None, None) => {
            def.logs_ratio_threshold = Some(ratio_to_v1beta1(ratio));
            ratio.conditions.group_by.clone()
        },
        (None, None, Some(new_value), None, None, None, None, None) => {
            def.logs_new_value = Some(beta::LogsNewValue {
                logs_filter: new_value.filters.as_ref().map(filters_to_v1beta1),
                rules: vec![beta::LogsNewValueRule {
                    condition: beta::LogsNewValueCondition {
                        keypath_to_track: new_value.conditions.key.clone(),
                        time_window: new_value_window_to_v1beta1(new_value.conditions.time_window),
                    },
                }],
            });
            None
        },
        (None, None, None, Some(unique_count), None, None, None, None) => {
            let c = &unique_count.conditions;
            def.logs_unique_count = Some(beta::LogsUniqueCount {
                logs_filter: unique_count.filters.as_ref().map(filters_to_v1beta1),
                rules: vec![beta::LogsUniqueCountRule {
                    condition: beta::LogsUniqueCountCondition {
                        max_unique_count: c.max_unique_values,
                        time_window: unique_count_window_to_v1beta1(c.time_window),
                    },
                }],
                unique_count_keypath: c.key.clone(),
                max_unique_count_per_group_by_key: c.max_unique_values_for_group_by,
            });
            c.group_by.clone().map(|g| vec![g])
        },
        (None, None, None, None, Some(time_relative), None, None, None) => {
            let c = &time_relative.conditions;
            def.logs_time_relative_threshold = Some(beta::LogsTimeRelativeThreshold {
                logs_filter: time_relative.filters.as_ref().map(filters_to_v1beta1),
                rules: vec![beta::LogsTimeRelativeRule {
                    condition: beta::LogsTimeRelativeCondition {
                        threshold: c.threshold,
                        compared_to: relative_window_to_v1beta1(c.time_window),
                        condition_type: ratio_when_to_v1beta1(c.alert_when),
                    },
                    override_: None,
                }],
                ignore_infinity: c.ignore_infinity.unwrap_or_default(),
                undetected_values_management: c.manage_undetected_values.as_ref().map(undetected_to_v1beta1),
            });
            c.group_by.clone()
        },
        (None, None, None, None, None, Some(metric), None, None) => metric_to_v1beta1(metric, &mut def)?,
        (None, None, None, None, None, None, Some(tracing), None) => {
            tracing_to_v1beta1(tracing, &mut def)?;
            tracing.conditions.group_by.clone()
        },
        (None, None, None, None, None, None, None, Some(flow)) => {
            def.flow = Some(flow_to_v1beta1(flow));
            None
        },
        _ => return Err(ConversionError::malformed("alertType must set exactly one alert type")),
    };

    Ok((def, group_by))
}

fn standard_to_v1beta1(standard: &alpha::Standard, def: &mut beta::AlertTypeDefinition) -> EmptyResult {
    let c = &standard.conditions;
    let logs_filter = standard.filters.as_ref().map(filters_to_v1beta1);

    let condition_type = match c.alert_when {
        alpha::StandardAlertWhen::Immediately => {
            def.logs_immediate = Some(beta::LogsImmediate { logs_filter });
            return Ok(());
        },
        alpha::StandardAlertWhen::More => beta::ThresholdConditionType::MoreThan,
        alpha::StandardAlertWhen::Less => beta::ThresholdConditionType::LessThan,
        alpha::StandardAlertWhen::MoreThanUsual => {
            def.logs_anomaly = Some(beta::LogsAnomaly {
                logs_filter,
                rules: vec![beta::LogsAnomalyRule {
                    condition: beta::LogsAnomalyCondition {
                        minimum_threshold: c.threshold.unwrap_or_default() as f64,
                        time_window: required_window(c.time_window, "standard")?,
                    },
                }],
            });
            return Ok(());
        },
    };

    def.logs_threshold = Some(beta::LogsThreshold {
        logs_filter,
        undetected_values_management: c.manage_undetected_values.as_ref().map(undetected_to_v1beta1),
        rules: vec![beta::LogsThresholdRule {
            condition: beta::LogsThresholdCondition {
                threshold: c.threshold.unwrap_or_default() as f64,
                time_window: required_window(c.time_window, "standard")?,
                condition_type,
            },
            override_: None,
        }],
    });
    Ok(())
}

fn ratio_to_v1beta1(ratio: &alpha::Ratio) -> beta::LogsRatioThreshold {
    let c = &ratio.conditions;
    beta::LogsRatioThreshold {
        numerator: Some(filters_to_v1beta1(&ratio.query1_filters)),
        numerator_alias: ratio.query1_filters.alias.clone().unwrap_or_else(|| DEFAULT_NUMERATOR_ALIAS.into()),
        denominator: Some(filters_to_v1beta1(&ratio.query2_filters)),
        denominator_alias: ratio.query2_filters.alias.clone().unwrap_or_else(|| DEFAULT_DENOMINATOR_ALIAS.into()),
        rules: vec![beta::LogsRatioRule {
            condition: beta::LogsRatioCondition {
                threshold: c.ratio,
                time_window: time_window_to_v1beta1(c.time_window),
                condition_type: ratio_when_to_v1beta1(c.alert_when),
            },
            override_: None,
        }],
        group_by_for: match c.group_by_for {
            Some(alpha::GroupByFor::Q1) => beta::LogsRatioGroupByFor::NumeratorOnly,
            Some(alpha::GroupByFor::Q2) => beta::LogsRatioGroupByFor::DenominatorOnly,
            Some(alpha::GroupByFor::Both) | None => beta::LogsRatioGroupByFor::Both,
        },
        ignore_infinity: c.ignore_infinity.unwrap_or_default(),
        undetected_values_management: c.manage_undetected_values.as_ref().map(undetected_to_v1beta1),
    }
}

fn metric_to_v1beta1(
    metric: &alpha::Metric,
    def: &mut beta::AlertTypeDefinition,
) -> anyhow::Result<Option<Vec<String>>> {
    let promql = match (&metric.lucene, &metric.promql) {
        (None, Some(promql)) => promql,
        (Some(_), None) => return Err(ConversionError::unsupported("lucene metric alerts have no v1beta1 equivalent")),
        _ => return Err(ConversionError::malformed("metric must set exactly one of lucene or promql")),
    };

    let c = &promql.conditions;
    let metric_filter = beta::MetricFilter { promql: promql.search_query.clone() };
    let condition_type = match c.alert_when {
        alpha::PromqlAlertWhen::More => beta::MetricThresholdConditionType::MoreThan,
        alpha::PromqlAlertWhen::Less => beta::MetricThresholdConditionType::LessThan,
        alpha::PromqlAlertWhen::MoreThanOrEqual => beta::MetricThresholdConditionType::MoreThanOrEquals,
        alpha::PromqlAlertWhen::LessThanOrEqual => beta::MetricThresholdConditionType::LessThanOrEquals,
        alpha::PromqlAlertWhen::MoreThanUsual | alpha::PromqlAlertWhen::LessThanUsual => {
            def.metric_anomaly = Some(beta::MetricAnomaly {
                metric_filter,
                rules: vec![beta::MetricAnomalyRule {
                    condition: beta::MetricAnomalyCondition {
                        threshold: c.threshold,
                        for_over_pct: c.sample_threshold_percentage,
                        of_the_last: metric_window_to_v1beta1(c.time_window),
                        min_non_null_values_pct: c.min_non_null_values_percentage,
                        condition_type: if c.alert_when == alpha::PromqlAlertWhen::MoreThanUsual {
                            beta::MetricAnomalyConditionType::MoreThanUsual
                        } else {
                            beta::MetricAnomalyConditionType::LessThanUsual
                        },
                    },
                }],
            });
            return Ok(c.group_by.clone());
        },
    };

    def.metric_threshold = Some(beta::MetricThreshold {
        metric_filter,
        rules: vec![beta::MetricThresholdRule {
            condition: beta::MetricThresholdCondition {
                threshold: c.threshold,
                for_over_pct: c.sample_threshold_percentage,
                of_the_last: metric_window_to_v1beta1(c.time_window),
                condition_type,
            },
            override_: None,
        }],
        undetected_values_management: c.manage_undetected_values.as_ref().map(undetected_to_v1beta1),
        missing_values: Some(beta::MetricMissingValues {
            replace_with_zero: c.replace_missing_value_with_zero,
            min_non_null_values_pct: c.min_non_null_values_percentage,
        }),
    });
    Ok(c.group_by.clone())
}

fn tracing_to_v1beta1(tracing: &alpha::Tracing, def: &mut beta::AlertTypeDefinition) -> EmptyResult {
    let tracing_filter = tracing.filters.as_ref().map(|f| beta::TracingFilter {
        latency_threshold_ms: f.latency_threshold_milliseconds,
        tracing_label_filters: Some(beta::TracingLabelFilters {
            application_name: f.applications.as_deref().map(tracing_filter_types),
            subsystem_name: f.subsystems.as_deref().map(tracing_filter_types),
            service_name: f.services.as_deref().map(tracing_filter_types),
            operation_name: None,
            span_fields: f.tag_filters.as_ref().map(|tags| {
                tags.iter()
                    .flat_map(|tag| {
                        tracing_filter_types(&tag.values)
                            .into_iter()
                            .map(|filter_type| beta::TracingSpanFieldsFilterType { key: tag.field.clone(), filter_type })
                    })
                    .collect()
            }),
        }),
    });

    let c = &tracing.conditions;
    match c.alert_when {
        alpha::TracingAlertWhen::Immediately => {
            def.tracing_immediate = Some(beta::TracingImmediate { tracing_filter });
        },
        alpha::TracingAlertWhen::More => {
            def.tracing_threshold = Some(beta::TracingThreshold {
                tracing_filter,
                rules: vec![beta::TracingThresholdRule {
                    condition: beta::TracingThresholdCondition {
                        span_amount: c.threshold.unwrap_or_default() as f64,
                        time_window: required_window(c.time_window, "tracing")?,
                    },
                }],
            });
        },
    }
    Ok(())
}

fn flow_to_v1beta1(flow: &alpha::Flow) -> beta::Flow {
    beta::Flow {
        stages: flow
            .stages
            .iter()
            .map(|stage| {
                let (timeframe_ms, timeframe_type) = match &stage.time_window {
                    Some(tw) => (to_millis(tw.hours, tw.minutes, tw.seconds), beta::FlowTimeframeType::UpTo),
                    None => (0, beta::FlowTimeframeType::Unspecified),
                };
                beta::FlowStage {
                    flow_stages_groups: stage
                        .groups
                        .iter()
                        .map(|group| beta::FlowStagesGroup {
                            alert_defs: group
                                .inner_flow_alerts
                                .alerts
                                .iter()
                                .map(|a| beta::FlowStagesGroupsAlertDefs {
                                    alert_ref: beta::AlertRef {
                                        backend_ref: Some(BackendRef { id: Some(a.user_alert_id.clone()), name: None }),
                                        resource_ref: None,
                                    },
                                    not: a.not,
                                })
                                .collect(),
                            next_op: flow_operator_to_v1beta1(group.next_operator),
                            alerts_op: flow_operator_to_v1beta1(group.inner_flow_alerts.operator),
                        })
                        .collect(),
                    timeframe_ms,
                    timeframe_type,
                }
            })
            .collect(),
        enforce_suppression: false,
    }
}

fn filters_to_v1beta1(f: &alpha::Filters) -> beta::LogsFilter {
    beta::LogsFilter {
        simple_filter: Some(beta::LogsSimpleFilter {
            lucene_query: f.search_query.clone(),
            label_filters: Some(beta::LabelFilters {
                application_name: f.applications.as_ref().map(|apps| apps.iter().map(|a| label_filter(a)).collect()),
                subsystem_name: f.subsystems.as_ref().map(|subs| subs.iter().map(|s| label_filter(s)).collect()),
                severity: f.severities.as_ref().map(|sevs| sevs.iter().map(|s| log_severity_to_v1beta1(*s)).collect()),
            }),
        }),
    }
}

fn parse_filter_prefix(value: &str) -> (beta::LogFilterOperationType, &str) {
    if let Some(rest) = value.strip_prefix(CONTAINS_PREFIX) {
        (beta::LogFilterOperationType::Includes, rest)
    } else if let Some(rest) = value.strip_prefix(STARTS_WITH_PREFIX) {
        (beta::LogFilterOperationType::StartsWith, rest)
    } else if let Some(rest) = value.strip_prefix(ENDS_WITH_PREFIX) {
        (beta::LogFilterOperationType::EndsWith, rest)
    } else {
        (beta::LogFilterOperationType::Is, value)
    }
}

fn label_filter(value: &str) -> beta::LabelFilterType {
    let (operation, value) = parse_filter_prefix(value);
    beta::LabelFilterType { value: value.into(), operation }
}

// Values sharing an operation are collected into one filter, in order of first appearance
fn tracing_filter_types(values: &[String]) -> Vec<beta::TracingFilterType> {
    let mut out: Vec<beta::TracingFilterType> = vec![];
    for v in values {
        let (operation, value) = parse_filter_prefix(v);
        match out.iter_mut().find(|f| f.operation == operation) {
            Some(existing) => existing.values.push(value.into()),
            None => out.push(beta::TracingFilterType { values: vec![value.into()], operation }),
        }
    }
    out
}

fn required_window(w: Option<alpha::TimeWindow>, kind: &str) -> anyhow::Result<beta::LogsTimeWindow> {
    w.map(time_window_to_v1beta1)
        .ok_or_else(|| ConversionError::malformed(&format!("{kind} alert conditions require a timeWindow")))
}

fn undetected_to_v1beta1(m: &alpha::ManageUndetectedValues) -> beta::UndetectedValuesManagement {
    beta::UndetectedValuesManagement {
        trigger_undetected_values: m.enable_triggering_on_undetected_values,
        auto_retire_timeframe: match m.auto_retire_ratio {
            None | Some(alpha::AutoRetireRatio::Never) => beta::AutoRetireTimeframe::Never,
            Some(alpha::AutoRetireRatio::FiveMinutes) => beta::AutoRetireTimeframe::Minutes5,
            Some(alpha::AutoRetireRatio::TenMinutes) => beta::AutoRetireTimeframe::Minutes10,
            Some(alpha::AutoRetireRatio::Hour) => beta::AutoRetireTimeframe::Hour1,
            Some(alpha::AutoRetireRatio::TwoHours) => beta::AutoRetireTimeframe::Hours2,
            Some(alpha::AutoRetireRatio::SixHours) => beta::AutoRetireTimeframe::Hours6,
            Some(alpha::AutoRetireRatio::TwelveHours) => beta::AutoRetireTimeframe::Hours12,
            Some(alpha::AutoRetireRatio::TwentyFourHours) => beta::AutoRetireTimeframe::Hours24,
        },
    }
}

pub fn alert_to_v1alpha1(alert: &beta::Alert) -> anyhow::Result<alpha::Alert> {
    let spec = &alert.spec;

    let notification_groups: Vec<_> = spec
        .notification_group
        .iter()
        .chain(spec.notification_group_excess.iter().flatten())
        .map(notification_group_to_v1alpha1)
        .collect();

    if spec.phantom_mode {
        warn!("dropping phantomMode, which has no v1alpha1 equivalent");
    }

    let scheduling = match &spec.schedule {
        Some(s) => Some(alpha::Scheduling {
            time_zone: match &s.active_on.utc_offset {
                Some(offset) => time_zone_from_utc_offset(offset)?,
                None => "UTC+00".into(),
            },
            days_enabled: s.active_on.day_of_week.iter().map(|d| day_to_v1alpha1(*d)).collect(),
            start_time: s.active_on.start_time.clone(),
            end_time: s.active_on.end_time.clone(),
        }),
        None => None,
    };

    Ok(alpha::Alert {
        metadata: alert.metadata.clone(),
        spec: alpha::AlertSpec {
            name: spec.name.clone(),
            description: spec.description.clone(),
            active: spec.enabled,
            severity: priority_to_severity(spec.priority),
            labels: spec.entity_labels.clone(),
            notification_groups: if notification_groups.is_empty() { None } else { Some(notification_groups) },
            show_in_insight: spec.incidents_settings.as_ref().map(|s| alpha::ShowInInsight {
                retriggering_period_minutes: s.retriggering_period.as_ref().map(|p| p.minutes).unwrap_or_default(),
                notify_on: notify_on_to_v1alpha1(s.notify_on),
            }),
            scheduling,
            alert_type: type_definition_to_v1alpha1(&spec.type_definition, &spec.group_by_keys)?,
            payload_filters: spec.notification_payload_filter.clone(),
        },
        status: alert.status.clone(),
    })
}

fn notification_group_to_v1alpha1(group: &beta::NotificationGroup) -> alpha::NotificationGroup {
    let notifications = group.webhooks.as_ref().map(|webhooks| {
        webhooks
            .iter()
            .filter_map(|w| {
                let (integration_name, email_recipients) = match &w.integration {
                    beta::IntegrationType { recipients: Some(r), .. } => (None, Some(r.clone())),
                    beta::IntegrationType {
                        integration_ref:
                            Some(beta::IntegrationRef { backend_ref: Some(BackendRef { name: Some(name), .. }), .. }),
                        ..
                    } => (Some(name.clone()), None),
                    _ => {
                        warn!("dropping notification whose integration can only be expressed in v1beta1");
                        return None;
                    },
                };
                Some(alpha::Notification {
                    retriggering_period_minutes: w.retriggering_period.as_ref().map(|p| p.minutes).unwrap_or_default(),
                    notify_on: notify_on_to_v1alpha1(w.notify_on),
                    integration_name,
                    email_recipients,
                })
            })
            .collect()
    });

    alpha::NotificationGroup { group_by_fields: group.group_by_keys.clone(), notifications }
}

fn first_rule<'a, T>(rules: &'a [T], kind: &str) -> anyhow::Result<&'a T> {
    if rules.len() > 1 {
        warn!("{kind} alert has {} rules; only the first is kept in v1alpha1", rules.len());
    }
    rules
        .first()
        .ok_or_else(|| ConversionError::malformed(&format!("{kind} alert has no rules")))
}

fn drop_override(o: &Option<beta::AlertOverride>, kind: &str) {
    if o.is_some() {
        warn!("dropping {kind} rule override, which has no v1alpha1 equivalent");
    }
}

// v1alpha1 only has whole-number counts; anything else is truncated (and clamped at zero)
fn whole_count(value: f64, field: &str) -> u32 {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        warn!("{field} {value} is not a whole count; truncating to {} in v1alpha1", value as u32);
    }
    value as u32
}

fn type_definition_to_v1alpha1(
    def: &beta::AlertTypeDefinition,
    group_by_keys: &Option<Vec<String>>,
) -> anyhow::Result<alpha::AlertType> {
    let group_by = group_by_keys.clone();
    let mut out = alpha::AlertType::default();

    if let Some(immediate) = &def.logs_immediate {
        out.standard = Some(alpha::Standard {
            filters: immediate.logs_filter.as_ref().map(filters_to_v1alpha1),
            conditions: alpha::StandardConditions {
                alert_when: alpha::StandardAlertWhen::Immediately,
                group_by,
                ..Default::default()
            },
        });
    } else if let Some(threshold) = &def.logs_threshold {
        let rule = first_rule(&threshold.rules, "logsThreshold")?;
        drop_override(&rule.override_, "logsThreshold");
        let c = &rule.condition;
        out.standard = Some(alpha::Standard {
            filters: threshold.logs_filter.as_ref().map(filters_to_v1alpha1),
            conditions: alpha::StandardConditions {
                alert_when: match c.condition_type {
                    beta::ThresholdConditionType::MoreThan => alpha::StandardAlertWhen::More,
                    beta::ThresholdConditionType::LessThan => alpha::StandardAlertWhen::Less,
                },
                threshold: Some(whole_count(c.threshold, "logsThreshold threshold")),
                time_window: Some(time_window_to_v1alpha1(c.time_window)),
                group_by,
                manage_undetected_values: threshold.undetected_values_management.as_ref().map(undetected_to_v1alpha1),
            },
        });
    } else if let Some(anomaly) = &def.logs_anomaly {
        let c = &first_rule(&anomaly.rules, "logsAnomaly")?.condition;
        out.standard = Some(alpha::Standard {
            filters: anomaly.logs_filter.as_ref().map(filters_to_v1alpha1),
            conditions: alpha::StandardConditions {
                alert_when: alpha::StandardAlertWhen::MoreThanUsual,
                threshold: Some(whole_count(c.minimum_threshold, "logsAnomaly minimumThreshold")),
                time_window: Some(time_window_to_v1alpha1(c.time_window)),
                group_by,
                manage_undetected_values: None,
            },
        });
    } else if let Some(ratio) = &def.logs_ratio_threshold {
        let rule = first_rule(&ratio.rules, "logsRatioThreshold")?;
        drop_override(&rule.override_, "logsRatioThreshold");
        let c = &rule.condition;
        let mut query1_filters = ratio.numerator.as_ref().map(filters_to_v1alpha1).unwrap_or_default();
        query1_filters.alias = Some(ratio.numerator_alias.clone());
        let mut query2_filters = ratio.denominator.as_ref().map(filters_to_v1alpha1).unwrap_or_default();
        query2_filters.alias = Some(ratio.denominator_alias.clone());
        out.ratio = Some(alpha::Ratio {
            query1_filters,
            query2_filters,
            conditions: alpha::RatioConditions {
                alert_when: ratio_when_to_v1alpha1(c.condition_type),
                ratio: c.threshold,
                ignore_infinity: Some(ratio.ignore_infinity),
                time_window: time_window_to_v1alpha1(c.time_window),
                group_by,
                group_by_for: Some(match ratio.group_by_for {
                    beta::LogsRatioGroupByFor::Both => alpha::GroupByFor::Both,
                    beta::LogsRatioGroupByFor::NumeratorOnly => alpha::GroupByFor::Q1,
                    beta::LogsRatioGroupByFor::DenominatorOnly => alpha::GroupByFor::Q2,
                }),
                manage_undetected_values: ratio.undetected_values_management.as_ref().map(undetected_to_v1alpha1),
            },
        });
    } else if let Some(time_relative) = &def.logs_time_relative_threshold {
        let rule = first_rule(&time_relative.rules, "logsTimeRelativeThreshold")?;
        drop_override(&rule.override_, "logsTimeRelativeThreshold");
        let c = &rule.condition;
        out.time_relative = Some(alpha::TimeRelative {
            filters: time_relative.logs_filter.as_ref().map(filters_to_v1alpha1),
            conditions: alpha::TimeRelativeConditions {
                alert_when: ratio_when_to_v1alpha1(c.condition_type),
                threshold: c.threshold,
                time_window: relative_window_to_v1alpha1(c.compared_to),
                ignore_infinity: Some(time_relative.ignore_infinity),
                group_by,
                manage_undetected_values: time_relative
                    .undetected_values_management
                    .as_ref()
                    .map(undetected_to_v1alpha1),
            },
        });
    } else if let Some(metric) = &def.metric_threshold {
        let rule = first_rule(&metric.rules, "metricThreshold")?;
        drop_override(&rule.override_, "metricThreshold");
        let c = &rule.condition;
        let missing = metric.missing_values.clone().unwrap_or_default();
        out.metric = Some(alpha::Metric {
            lucene: None,
            promql: Some(alpha::Promql {
                search_query: metric.metric_filter.promql.clone(),
                conditions: alpha::PromqlConditions {
                    alert_when: match c.condition_type {
                        beta::MetricThresholdConditionType::MoreThan => alpha::PromqlAlertWhen::More,
                        beta::MetricThresholdConditionType::LessThan => alpha::PromqlAlertWhen::Less,
                        beta::MetricThresholdConditionType::MoreThanOrEquals => alpha::PromqlAlertWhen::MoreThanOrEqual,
                        beta::MetricThresholdConditionType::LessThanOrEquals => alpha::PromqlAlertWhen::LessThanOrEqual,
                    },
                    threshold: c.threshold,
                    sample_threshold_percentage: c.for_over_pct,
                    time_window: metric_window_to_v1alpha1(c.of_the_last),
                    replace_missing_value_with_zero: missing.replace_with_zero,
                    min_non_null_values_percentage: missing.min_non_null_values_pct,
                    manage_undetected_values: metric.undetected_values_management.as_ref().map(undetected_to_v1alpha1),
                    group_by,
                },
            }),
        });
    } else if let Some(anomaly) = &def.metric_anomaly {
        let c = &first_rule(&anomaly.rules, "metricAnomaly")?.condition;
        out.metric = Some(alpha::Metric {
            lucene: None,
            promql: Some(alpha::Promql {
                search_query: anomaly.metric_filter.promql.clone(),
                conditions: alpha::PromqlConditions {
                    alert_when: match c.condition_type {
                        beta::MetricAnomalyConditionType::MoreThanUsual => alpha::PromqlAlertWhen::MoreThanUsual,
                        beta::MetricAnomalyConditionType::LessThanUsual => alpha::PromqlAlertWhen::LessThanUsual,
                    },
                    threshold: c.threshold,
                    sample_threshold_percentage: c.for_over_pct,
                    time_window: metric_window_to_v1alpha1(c.of_the_last),
                    replace_missing_value_with_zero: None,
                    min_non_null_values_percentage: c.min_non_null_values_pct,
                    manage_undetected_values: None,
                    group_by,
                },
            }),
        });
    } else if let Some(new_value) = &def.logs_new_value {
        let c = &first_rule(&new_value.rules, "logsNewValue")?.condition;
        out.new_value = Some(alpha::NewValue {
            filters: new_value.logs_filter.as_ref().map(filters_to_v1alpha1),
            conditions: alpha::NewValueConditions {
                key: c.keypath_to_track.clone(),
                time_window: new_value_window_to_v1alpha1(c.time_window),
            },
        });
    } else if let Some(unique_count) = &def.logs_unique_count {
        let c = &first_rule(&unique_count.rules, "logsUniqueCount")?.condition;
        let mut keys = group_by.into_iter().flatten();
        let first_key = keys.next();
        let dropped: Vec<_> = keys.collect();
        if !dropped.is_empty() {
            warn!("logsUniqueCount alert can only group by one key in v1alpha1; dropping {dropped:?}");
        }
        out.unique_count = Some(alpha::UniqueCount {
            filters: unique_count.logs_filter.as_ref().map(filters_to_v1alpha1),
            conditions: alpha::UniqueCountConditions {
                key: unique_count.unique_count_keypath.clone(),
                max_unique_values: c.max_unique_count,
                time_window: unique_count_window_to_v1alpha1(c.time_window),
                group_by: first_key,
                max_unique_values_for_group_by: unique_count.max_unique_count_per_group_by_key,
            },
        });
    } else if let Some(immediate) = &def.tracing_immediate {
        out.tracing = Some(alpha::Tracing {
            filters: immediate.tracing_filter.as_ref().map(tracing_filter_to_v1alpha1),
            conditions: alpha::TracingConditions {
                alert_when: alpha::TracingAlertWhen::Immediately,
                threshold: None,
                time_window: None,
                group_by,
            },
        });
    } else if let Some(threshold) = &def.tracing_threshold {
        let c = &first_rule(&threshold.rules, "tracingThreshold")?.condition;
        out.tracing = Some(alpha::Tracing {
            filters: threshold.tracing_filter.as_ref().map(tracing_filter_to_v1alpha1),
            conditions: alpha::TracingConditions {
                alert_when: alpha::TracingAlertWhen::More,
                threshold: Some(whole_count(c.span_amount, "tracingThreshold spanAmount")),
                time_window: Some(time_window_to_v1alpha1(c.time_window)),
                group_by,
            },
        });
    } else if let Some(flow) = &def.flow {
        out.flow = Some(flow_to_v1alpha1(flow)?);
    } else {
        return Err(ConversionError::malformed("typeDefinition must set exactly one alert type"));
    }

    Ok(out)
}

fn flow_to_v1alpha1(flow: &beta::Flow) -> anyhow::Result<alpha::Flow> {
    let mut stages = vec![];
    for stage in &flow.stages {
        let time_window = if stage.timeframe_ms > 0 {
            let (hours, minutes, seconds) = from_millis(stage.timeframe_ms)?;
            Some(alpha::FlowStageTimeWindow { hours, minutes, seconds })
        } else {
            None
        };
        stages.push(alpha::FlowStage {
            time_window,
            groups: stage
                .flow_stages_groups
                .iter()
                .map(|group| alpha::FlowStageGroup {
                    inner_flow_alerts: alpha::InnerFlowAlerts {
                        operator: flow_operator_to_v1alpha1(group.alerts_op),
                        alerts: group
                            .alert_defs
                            .iter()
                            .filter_map(|a| match &a.alert_ref.backend_ref {
                                Some(BackendRef { id: Some(id), .. }) => {
                                    Some(alpha::InnerFlowAlert { not: a.not, user_alert_id: id.clone() })
                                },
                                _ => {
                                    warn!("dropping flow alert reference that has no backend id");
                                    None
                                },
                            })
                            .collect(),
                    },
                    next_operator: flow_operator_to_v1alpha1(group.next_op),
                })
                .collect(),
        });
    }
    Ok(alpha::Flow { stages })
}

fn filters_to_v1alpha1(f: &beta::LogsFilter) -> alpha::Filters {
    let Some(simple) = &f.simple_filter else {
        return alpha::Filters::default();
    };
    let labels = simple.label_filters.clone().unwrap_or_default();
    alpha::Filters {
        search_query: simple.lucene_query.clone(),
        severities: labels
            .severity
            .map(|sevs| sevs.iter().map(|s| log_severity_to_v1alpha1(*s)).collect()),
        applications: labels
            .application_name
            .map(|apps| apps.iter().map(|a| with_filter_prefix(a.operation, &a.value)).collect()),
        subsystems: labels
            .subsystem_name
            .map(|subs| subs.iter().map(|s| with_filter_prefix(s.operation, &s.value)).collect()),
        alias: None,
    }
}

fn tracing_filter_to_v1alpha1(f: &beta::TracingFilter) -> alpha::TracingFilters {
    let labels = f.tracing_label_filters.clone().unwrap_or_default();
    if labels.operation_name.is_some() {
        warn!("dropping operationName tracing filter, which has no v1alpha1 equivalent");
    }

    let flatten = |filters: Option<Vec<beta::TracingFilterType>>| {
        filters.map(|fs| {
            fs.iter()
                .flat_map(|f| f.values.iter().map(|v| with_filter_prefix(f.operation, v)))
                .collect::<Vec<_>>()
        })
    };

    alpha::TracingFilters {
        latency_threshold_milliseconds: f.latency_threshold_ms,
        applications: flatten(labels.application_name),
        subsystems: flatten(labels.subsystem_name),
        services: flatten(labels.service_name),
        tag_filters: labels.span_fields.map(|fields| {
            let mut tags: Vec<alpha::TagFilter> = vec![];
            for field in fields {
                let values = field
                    .filter_type
                    .values
                    .iter()
                    .map(|v| with_filter_prefix(field.filter_type.operation, v));
                match tags.iter_mut().find(|t| t.field == field.key) {
                    Some(tag) => tag.values.extend(values),
                    None => tags.push(alpha::TagFilter { field: field.key.clone(), values: values.collect() }),
                }
            }
            tags
        }),
    }
}

fn with_filter_prefix(op: beta::LogFilterOperationType, value: &str) -> String {
    match op {
        beta::LogFilterOperationType::Is => value.into(),
        beta::LogFilterOperationType::Includes => format!("{CONTAINS_PREFIX}{value}"),
        beta::LogFilterOperationType::StartsWith => format!("{STARTS_WITH_PREFIX}{value}"),
        beta::LogFilterOperationType::EndsWith => format!("{ENDS_WITH_PREFIX}{value}"),
    }
}

fn undetected_to_v1alpha1(m: &beta::UndetectedValuesManagement) -> alpha::ManageUndetectedValues {
    alpha::ManageUndetectedValues {
        enable_triggering_on_undetected_values: m.trigger_undetected_values,
        auto_retire_ratio: Some(match m.auto_retire_timeframe {
            beta::AutoRetireTimeframe::Never => alpha::AutoRetireRatio::Never,
            beta::AutoRetireTimeframe::Minutes5 => alpha::AutoRetireRatio::FiveMinutes,
            beta::AutoRetireTimeframe::Minutes10 => alpha::AutoRetireRatio::TenMinutes,
            beta::AutoRetireTimeframe::Hour1 => alpha::AutoRetireRatio::Hour,
            beta::AutoRetireTimeframe::Hours2 => alpha::AutoRetireRatio::TwoHours,
            beta::AutoRetireTimeframe::Hours6 => alpha::AutoRetireRatio::SixHours,
            beta::AutoRetireTimeframe::Hours12 => alpha::AutoRetireRatio::TwelveHours,
            beta::AutoRetireTimeframe::Hours24 => alpha::AutoRetireRatio::TwentyFourHours,
        }),
    }
}

fn severity_to_priority(s: alpha::AlertSeverity) -> beta::AlertPriority {
    match s {
        alpha::AlertSeverity::Critical => beta::AlertPriority::P1,
        alpha::AlertSeverity::Error => beta::AlertPriority::P2,
        alpha::AlertSeverity::Warning => beta::AlertPriority::P3,
        alpha::AlertSeverity::Info => beta::AlertPriority::P4,
        alpha::AlertSeverity::Low => beta::AlertPriority::P5,
    }
}

fn priority_to_severity(p: beta::AlertPriority) -> alpha::AlertSeverity {
    match p {
        beta::AlertPriority::P1 => alpha::AlertSeverity::Critical,
        beta::AlertPriority::P2 => alpha::AlertSeverity::Error,
        beta::AlertPriority::P3 => alpha::AlertSeverity::Warning,
        beta::AlertPriority::P4 => alpha::AlertSeverity::Info,
        beta::AlertPriority::P5 => alpha::AlertSeverity::Low,
    }
}

fn notify_on_to_v1beta1(n: alpha::NotifyOn) -> beta::NotifyOn {
    match n {
        alpha::NotifyOn::TriggeredOnly => beta::NotifyOn::TriggeredOnly,
        alpha::NotifyOn::TriggeredAndResolved => beta::NotifyOn::TriggeredAndResolved,
    }
}

fn notify_on_to_v1alpha1(n: beta::NotifyOn) -> alpha::NotifyOn {
    match n {
        beta::NotifyOn::TriggeredOnly => alpha::NotifyOn::TriggeredOnly,
        beta::NotifyOn::TriggeredAndResolved => alpha::NotifyOn::TriggeredAndResolved,
    }
}

fn day_to_v1beta1(d: alpha::Day) -> beta::DayOfWeek {
    match d {
        alpha::Day::Sunday => beta::DayOfWeek::Sunday,
        alpha::Day::Monday => beta::DayOfWeek::Monday,
        alpha::Day::Tuesday => beta::DayOfWeek::Tuesday,
        alpha::Day::Wednesday => beta::DayOfWeek::Wednesday,
        alpha::Day::Thursday => beta::DayOfWeek::Thursday,
        alpha::Day::Friday => beta::DayOfWeek::Friday,
        alpha::Day::Saturday => beta::DayOfWeek::Saturday,
    }
}

fn day_to_v1alpha1(d: beta::DayOfWeek) -> alpha::Day {
    match d {
        beta::DayOfWeek::Sunday => alpha::Day::Sunday,
        beta::DayOfWeek::Monday => alpha::Day::Monday,
        beta::DayOfWeek::Tuesday => alpha::Day::Tuesday,
        beta::DayOfWeek::Wednesday => alpha::Day::Wednesday,
        beta::DayOfWeek::Thursday => alpha::Day::Thursday,
        beta::DayOfWeek::Friday => alpha::Day::Friday,
        beta::DayOfWeek::Saturday => alpha::Day::Saturday,
    }
}

fn log_severity_to_v1beta1(s: alpha::FiltersLogSeverity) -> beta::LogSeverity {
    match s {
        alpha::FiltersLogSeverity::Debug => beta::LogSeverity::Debug,
        alpha::FiltersLogSeverity::Verbose => beta::LogSeverity::Verbose,
        alpha::FiltersLogSeverity::Info => beta::LogSeverity::Info,
        alpha::FiltersLogSeverity::Warning => beta::LogSeverity::Warning,
        alpha::FiltersLogSeverity::Error => beta::LogSeverity::Error,
        alpha::FiltersLogSeverity::Critical => beta::LogSeverity::Critical,
    }
}

fn log_severity_to_v1alpha1(s: beta::LogSeverity) -> alpha::FiltersLogSeverity {
    match s {
        beta::LogSeverity::Debug => alpha::FiltersLogSeverity::Debug,
        beta::LogSeverity::Verbose => alpha::FiltersLogSeverity::Verbose,
        beta::LogSeverity::Info => alpha::FiltersLogSeverity::Info,
        beta::LogSeverity::Warning => alpha::FiltersLogSeverity::Warning,
        beta::LogSeverity::Error => alpha::FiltersLogSeverity::Error,
        beta::LogSeverity::Critical => alpha::FiltersLogSeverity::Critical,
    }
}

fn ratio_when_to_v1beta1(w: alpha::RatioAlertWhen) -> beta::ThresholdConditionType {
    match w {
        alpha::RatioAlertWhen::More => beta::ThresholdConditionType::MoreThan,
        alpha::RatioAlertWhen::Less => beta::ThresholdConditionType::LessThan,
    }
}

fn ratio_when_to_v1alpha1(t: beta::ThresholdConditionType) -> alpha::RatioAlertWhen {
    match t {
        beta::ThresholdConditionType::MoreThan => alpha::RatioAlertWhen::More,
        beta::ThresholdConditionType::LessThan => alpha::RatioAlertWhen::Less,
    }
}

fn flow_operator_to_v1beta1(o: alpha::FlowOperator) -> beta::FlowStageGroupOperator {
    match o {
        alpha::FlowOperator::And => beta::FlowStageGroupOperator::And,
        alpha::FlowOperator::Or => beta::FlowStageGroupOperator::Or,
    }
}

fn flow_operator_to_v1alpha1(o: beta::FlowStageGroupOperator) -> alpha::FlowOperator {
    match o {
        beta::FlowStageGroupOperator::And => alpha::FlowOperator::And,
        beta::FlowStageGroupOperator::Or => alpha::FlowOperator::Or,
    }
}

fn time_window_to_v1beta1(w: alpha::TimeWindow) -> beta::LogsTimeWindow {
    match w {
        alpha::TimeWindow::FiveMinutes => beta::LogsTimeWindow::Minutes5,
        alpha::TimeWindow::TenMinutes => beta::LogsTimeWindow::Minutes10,
        alpha::TimeWindow::FifteenMinutes => beta::LogsTimeWindow::Minutes15,
        alpha::TimeWindow::TwentyMinutes => beta::LogsTimeWindow::Minutes20,
        alpha::TimeWindow::ThirtyMinutes => beta::LogsTimeWindow::Minutes30,
        alpha::TimeWindow::Hour => beta::LogsTimeWindow::Hour1,
        alpha::TimeWindow::TwoHours => beta::LogsTimeWindow::Hours2,
        alpha::TimeWindow::FourHours => beta::LogsTimeWindow::Hours4,
        alpha::TimeWindow::SixHours => beta::LogsTimeWindow::Hours6,
        alpha::TimeWindow::TwelveHours => beta::LogsTimeWindow::Hours12,
        alpha::TimeWindow::TwentyFourHours => beta::LogsTimeWindow::Hours24,
        alpha::TimeWindow::ThirtySixHours => beta::LogsTimeWindow::Hours36,
    }
}

fn time_window_to_v1alpha1(w: beta::LogsTimeWindow) -> alpha::TimeWindow {
    match w {
        beta::LogsTimeWindow::Minutes5 => alpha::TimeWindow::FiveMinutes,
        beta::LogsTimeWindow::Minutes10 => alpha::TimeWindow::TenMinutes,
        beta::LogsTimeWindow::Minutes15 => alpha::TimeWindow::FifteenMinutes,
        beta::LogsTimeWindow::Minutes20 => alpha::TimeWindow::TwentyMinutes,
        beta::LogsTimeWindow::Minutes30 => alpha::TimeWindow::ThirtyMinutes,
        beta::LogsTimeWindow::Hour1 => alpha::TimeWindow::Hour,
        beta::LogsTimeWindow::Hours2 => alpha::TimeWindow::TwoHours,
        beta::LogsTimeWindow::Hours4 => alpha::TimeWindow::FourHours,
        beta::LogsTimeWindow::Hours6 => alpha::TimeWindow::SixHours,
        beta::LogsTimeWindow::Hours12 => alpha::TimeWindow::TwelveHours,
        beta::LogsTimeWindow::Hours24 => alpha::TimeWindow::TwentyFourHours,
        beta::LogsTimeWindow::Hours36 => alpha::TimeWindow::ThirtySixHours,
    }
}

fn metric_window_to_v1beta1(w: alpha::MetricTimeWindow) -> beta::MetricTimeWindow {
    match w {
        alpha::MetricTimeWindow::Minute => beta::MetricTimeWindow::Minutes1,
        alpha::MetricTimeWindow::FiveMinutes => beta::MetricTimeWindow::Minutes5,
        alpha::MetricTimeWindow::TenMinutes => beta::MetricTimeWindow::Minutes10,
        alpha::MetricTimeWindow::FifteenMinutes => beta::MetricTimeWindow::Minutes15,
        alpha::MetricTimeWindow::TwentyMinutes => beta::MetricTimeWindow::Minutes20,
        alpha::MetricTimeWindow::ThirtyMinutes => beta::MetricTimeWindow::Minutes30,
        alpha::MetricTimeWindow::Hour => beta::MetricTimeWindow::Hour1,
        alpha::MetricTimeWindow::TwoHours => beta::MetricTimeWindow::Hours2,
        alpha::MetricTimeWindow::FourHours => beta::MetricTimeWindow::Hours4,
        alpha::MetricTimeWindow::SixHours => beta::MetricTimeWindow::Hours6,
        alpha::MetricTimeWindow::TwelveHours => beta::MetricTimeWindow::Hours12,
        alpha::MetricTimeWindow::TwentyFourHours => beta::MetricTimeWindow::Hours24,
    }
}

fn metric_window_to_v1alpha1(w: beta::MetricTimeWindow) -> alpha::MetricTimeWindow {
    match w {
        beta::MetricTimeWindow::Minutes1 => alpha::MetricTimeWindow::Minute,
        beta::MetricTimeWindow::Minutes5 => alpha::MetricTimeWindow::FiveMinutes,
        beta::MetricTimeWindow::Minutes10 => alpha::MetricTimeWindow::TenMinutes,
        beta::MetricTimeWindow::Minutes15 => alpha::MetricTimeWindow::FifteenMinutes,
        beta::MetricTimeWindow::Minutes20 => alpha::MetricTimeWindow::TwentyMinutes,
        beta::MetricTimeWindow::Minutes30 => alpha::MetricTimeWindow::ThirtyMinutes,
        beta::MetricTimeWindow::Hour1 => alpha::MetricTimeWindow::Hour,
        beta::MetricTimeWindow::Hours2 => alpha::MetricTimeWindow::TwoHours,
        beta::MetricTimeWindow::Hours4 => alpha::MetricTimeWindow::FourHours,
        beta::MetricTimeWindow::Hours6 => alpha::MetricTimeWindow::SixHours,
        beta::MetricTimeWindow::Hours12 => alpha::MetricTimeWindow::TwelveHours,
        beta::MetricTimeWindow::Hours24 => alpha::MetricTimeWindow::TwentyFourHours,
    }
}

fn new_value_window_to_v1beta1(w: alpha::NewValueTimeWindow) -> beta::LogsNewValueTimeWindow {
    match w {
        alpha::NewValueTimeWindow::TwelveHours => beta::LogsNewValueTimeWindow::Hours12,
        alpha::NewValueTimeWindow::TwentyFourHours => beta::LogsNewValueTimeWindow::Hours24,
        alpha::NewValueTimeWindow::FortyEightHours => beta::LogsNewValueTimeWindow::Hours48,
        alpha::NewValueTimeWindow::SeventyTwoHours => beta::LogsNewValueTimeWindow::Hours72,
        alpha::NewValueTimeWindow::Week => beta::LogsNewValueTimeWindow::Week1,
        alpha::NewValueTimeWindow::Month => beta::LogsNewValueTimeWindow::Month1,
        alpha::NewValueTimeWindow::TwoMonths => beta::LogsNewValueTimeWindow::Months2,
        alpha::NewValueTimeWindow::ThreeMonths => beta::LogsNewValueTimeWindow::Months3,
    }
}

fn new_value_window_to_v1alpha1(w: beta::LogsNewValueTimeWindow) -> alpha::NewValueTimeWindow {
    match w {
        beta::LogsNewValueTimeWindow::Hours12 => alpha::NewValueTimeWindow::TwelveHours,
        beta::LogsNewValueTimeWindow::Hours24 => alpha::NewValueTimeWindow::TwentyFourHours,
        beta::LogsNewValueTimeWindow::Hours48 => alpha::NewValueTimeWindow::FortyEightHours,
        beta::LogsNewValueTimeWindow::Hours72 => alpha::NewValueTimeWindow::SeventyTwoHours,
        beta::LogsNewValueTimeWindow::Week1 => alpha::NewValueTimeWindow::Week,
        beta::LogsNewValueTimeWindow::Month1 => alpha::NewValueTimeWindow::Month,
        beta::LogsNewValueTimeWindow::Months2 => alpha::NewValueTimeWindow::TwoMonths,
        beta::LogsNewValueTimeWindow::Months3 => alpha::NewValueTimeWindow::ThreeMonths,
    }
}

fn unique_count_window_to_v1beta1(w: alpha::UniqueValueTimeWindow) -> beta::LogsUniqueCountTimeWindow {
    match w {
        alpha::UniqueValueTimeWindow::Minute => beta::LogsUniqueCountTimeWindow::Minute1,
        alpha::UniqueValueTimeWindow::FiveMinutes => beta::LogsUniqueCountTimeWindow::Minutes5,
        alpha::UniqueValueTimeWindow::TenMinutes => beta::LogsUniqueCountTimeWindow::Minutes10,
        alpha::UniqueValueTimeWindow::FifteenMinutes => beta::LogsUniqueCountTimeWindow::Minutes15,
        alpha::UniqueValueTimeWindow::TwentyMinutes => beta::LogsUniqueCountTimeWindow::Minutes20,
        alpha::UniqueValueTimeWindow::ThirtyMinutes => beta::LogsUniqueCountTimeWindow::Minutes30,
        alpha::UniqueValueTimeWindow::Hour => beta::LogsUniqueCountTimeWindow::Hour1,
        alpha::UniqueValueTimeWindow::TwoHours => beta::LogsUniqueCountTimeWindow::Hours2,
        alpha::UniqueValueTimeWindow::FourHours => beta::LogsUniqueCountTimeWindow::Hours4,
        alpha::UniqueValueTimeWindow::SixHours => beta::LogsUniqueCountTimeWindow::Hours6,
        alpha::UniqueValueTimeWindow::TwelveHours => beta::LogsUniqueCountTimeWindow::Hours12,
        alpha::UniqueValueTimeWindow::TwentyFourHours => beta::LogsUniqueCountTimeWindow::Hours24,
        alpha::UniqueValueTimeWindow::ThirtySixHours => beta::LogsUniqueCountTimeWindow::Hours36,
    }
}

fn unique_count_window_to_v1alpha1(w: beta::LogsUniqueCountTimeWindow) -> alpha::UniqueValueTimeWindow {
    match w {
        beta::LogsUniqueCountTimeWindow::Minute1 => alpha::UniqueValueTimeWindow::Minute,
        beta::LogsUniqueCountTimeWindow::Minutes5 => alpha::UniqueValueTimeWindow::FiveMinutes,
        beta::LogsUniqueCountTimeWindow::Minutes10 => alpha::UniqueValueTimeWindow::TenMinutes,
        beta::LogsUniqueCountTimeWindow::Minutes15 => alpha::UniqueValueTimeWindow::FifteenMinutes,
        beta::LogsUniqueCountTimeWindow::Minutes20 => alpha::UniqueValueTimeWindow::TwentyMinutes,
        beta::LogsUniqueCountTimeWindow::Minutes30 => alpha::UniqueValueTimeWindow::ThirtyMinutes,
        beta::LogsUniqueCountTimeWindow::Hour1 => alpha::UniqueValueTimeWindow::Hour,
        beta::LogsUniqueCountTimeWindow::Hours2 => alpha::UniqueValueTimeWindow::TwoHours,
        beta::LogsUniqueCountTimeWindow::Hours4 => alpha::UniqueValueTimeWindow::FourHours,
        beta::LogsUniqueCountTimeWindow::Hours6 => alpha::UniqueValueTimeWindow::SixHours,
        beta::LogsUniqueCountTimeWindow::Hours12 => alpha::UniqueValueTimeWindow::TwelveHours,
        beta::LogsUniqueCountTimeWindow::Hours24 => alpha::UniqueValueTimeWindow::TwentyFourHours,
        beta::LogsUniqueCountTimeWindow::Hours36 => alpha::UniqueValueTimeWindow::ThirtySixHours,
    }
}

fn relative_window_to_v1beta1(w: alpha::RelativeTimeWindow) -> beta::LogsTimeRelativeComparedTo {
    match w {
        alpha::RelativeTimeWindow::PreviousHour => beta::LogsTimeRelativeComparedTo::PreviousHour,
        alpha::RelativeTimeWindow::SameHourYesterday => beta::LogsTimeRelativeComparedTo::SameHourYesterday,
        alpha::RelativeTimeWindow::SameHourLastWeek => beta::LogsTimeRelativeComparedTo::SameHourLastWeek,
        alpha::RelativeTimeWindow::Yesterday => beta::LogsTimeRelativeComparedTo::Yesterday,
        alpha::RelativeTimeWindow::SameDayLastWeek => beta::LogsTimeRelativeComparedTo::SameDayLastWeek,
        alpha::RelativeTimeWindow::SameDayLastMonth => beta::LogsTimeRelativeComparedTo::SameDayLastMonth,
    }
}

fn relative_window_to_v1alpha1(w: beta::LogsTimeRelativeComparedTo) -> alpha::RelativeTimeWindow {
    match w {
        beta::LogsTimeRelativeComparedTo::PreviousHour => alpha::RelativeTimeWindow::PreviousHour,
        beta::LogsTimeRelativeComparedTo::SameHourYesterday => alpha::RelativeTimeWindow::SameHourYesterday,
        beta::LogsTimeRelativeComparedTo::SameHourLastWeek => alpha::RelativeTimeWindow::SameHourLastWeek,
        beta::LogsTimeRelativeComparedTo::Yesterday => alpha::RelativeTimeWindow::Yesterday,
        beta::LogsTimeRelativeComparedTo::SameDayLastWeek => alpha::RelativeTimeWindow::SameDayLastWeek,
        beta::LogsTimeRelativeComparedTo::SameDayLastMonth => alpha::RelativeTimeWindow::SameDayLastMonth,
    }
}
