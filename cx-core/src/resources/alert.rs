use async_trait::async_trait;
use cx_api::v1beta1::*;
use cx_api::{
    BackendRef,
    v1alpha1,
    v1beta1,
};
use cx_client::Endpoint;
use cx_client::models::alert_def as models;
use cx_client::models::outbound_webhook::{
    OUTGOING_WEBHOOKS,
    OUTGOING_WEBHOOKS_LIST_POINTER,
};
use tracing::*;

use super::{
    CoralogixResource,
    or_empty,
};
use crate::errors::*;
use crate::refs::RefResolver;
use crate::time::parse_time_of_day;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for v1beta1::Alert {
    type Request = models::AlertDefRequest;

    fn endpoint() -> Endpoint {
        models::ALERT_DEFS
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::AlertDefRequest> {
        let spec = &self.spec;
        let type_definition = extract_type_definition(&spec.type_definition, refs).await?;

        let notification_group = match &spec.notification_group {
            Some(group) => Some(extract_notification_group(group, refs).await?),
            None => None,
        };
        let mut notification_group_excess = vec![];
        for group in spec.notification_group_excess.iter().flatten() {
            notification_group_excess.push(extract_notification_group(group, refs).await?);
        }

        Ok(models::AlertDefRequest {
            alert_def_properties: models::AlertDefProperties {
                name: spec.name.clone(),
                description: spec.description.clone(),
                enabled: spec.enabled,
                priority: priority(spec.priority),
                active_on: spec.schedule.as_ref().map(extract_schedule).transpose()?,
                group_by_keys: or_empty(&spec.group_by_keys),
                incidents_settings: spec.incidents_settings.as_ref().map(|s| models::AlertDefIncidentSettings {
                    notify_on: notify_on(s.notify_on),
                    minutes: s.retriggering_period.as_ref().map(|p| p.minutes),
                }),
                notification_group,
                notification_group_excess,
                entity_labels: spec.entity_labels.clone().unwrap_or_default(),
                phantom_mode: spec.phantom_mode,
                notification_payload_filter: or_empty(&spec.notification_payload_filter),
                type_: type_definition.alert_def_type(),
                type_definition,
            },
        })
    }
}

impl Validate for v1beta1::Alert {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let td = &spec.type_definition;
        let mut v = Validator::new();

        v.check("spec.name", !spec.name.is_empty(), "must not be empty");
        v.exactly_one(
            "spec.typeDefinition",
            &[
                ("logsImmediate", td.logs_immediate.is_some()),
                ("logsThreshold", td.logs_threshold.is_some()),
                ("logsRatioThreshold", td.logs_ratio_threshold.is_some()),
                ("logsTimeRelativeThreshold", td.logs_time_relative_threshold.is_some()),
                ("metricThreshold", td.metric_threshold.is_some()),
                ("logsNewValue", td.logs_new_value.is_some()),
                ("logsUniqueCount", td.logs_unique_count.is_some()),
                ("tracingImmediate", td.tracing_immediate.is_some()),
                ("tracingThreshold", td.tracing_threshold.is_some()),
                ("flow", td.flow.is_some()),
                ("logsAnomaly", td.logs_anomaly.is_some()),
                ("metricAnomaly", td.metric_anomaly.is_some()),
            ],
        );

        let rule_counts = [
            ("logsThreshold", td.logs_threshold.as_ref().map(|t| t.rules.len())),
            ("logsRatioThreshold", td.logs_ratio_threshold.as_ref().map(|t| t.rules.len())),
            ("logsTimeRelativeThreshold", td.logs_time_relative_threshold.as_ref().map(|t| t.rules.len())),
            ("metricThreshold", td.metric_threshold.as_ref().map(|t| t.rules.len())),
            ("logsNewValue", td.logs_new_value.as_ref().map(|t| t.rules.len())),
            ("logsUniqueCount", td.logs_unique_count.as_ref().map(|t| t.rules.len())),
            ("tracingThreshold", td.tracing_threshold.as_ref().map(|t| t.rules.len())),
            ("logsAnomaly", td.logs_anomaly.as_ref().map(|t| t.rules.len())),
            ("metricAnomaly", td.metric_anomaly.as_ref().map(|t| t.rules.len())),
        ];
        for (name, count) in rule_counts {
            if count == Some(0) {
                v.check(&format!("spec.typeDefinition.{name}.rules"), false, "must not be empty");
            }
        }

        if let Some(flow) = &td.flow {
            v.check("spec.typeDefinition.flow.stages", !flow.stages.is_empty(), "must not be empty");
            for (i, stage) in flow.stages.iter().enumerate() {
                for (j, group) in stage.flow_stages_groups.iter().enumerate() {
                    for (k, def) in group.alert_defs.iter().enumerate() {
                        let path = format!("spec.typeDefinition.flow.stages[{i}].flowStagesGroups[{j}].alertDefs[{k}].alertRef");
                        validate_alert_ref(&mut v, &path, &def.alert_ref);
                    }
                }
            }
        }

        if let Some(group) = &spec.notification_group {
            validate_notification_group(&mut v, "spec.notificationGroup", group);
        }
        for (i, group) in spec.notification_group_excess.iter().flatten().enumerate() {
            validate_notification_group(&mut v, &format!("spec.notificationGroupExcess[{i}]"), group);
        }

        if let Some(schedule) = &spec.schedule {
            let active_on = &schedule.active_on;
            v.check(
                "spec.schedule.activeOn.startTime",
                parse_time_of_day(&active_on.start_time).is_ok(),
                "must be a time of day formatted as HH:MM",
            );
            v.check(
                "spec.schedule.activeOn.endTime",
                parse_time_of_day(&active_on.end_time).is_ok(),
                "must be a time of day formatted as HH:MM",
            );
            if let Some(offset) = &active_on.utc_offset {
                v.check(
                    "spec.schedule.activeOn.utcOffset",
                    crate::time::time_zone_from_utc_offset(offset).is_ok(),
                    "must be formatted as +HH:MM or -HH:MM",
                );
            }
        }

        v.finish()
    }
}

// The legacy model is only ever converted, but admission still rejects objects that could not be
// converted meaningfully
impl Validate for v1alpha1::Alert {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let at = &spec.alert_type;
        let mut v = Validator::new();

        v.check("spec.name", !spec.name.is_empty(), "must not be empty");
        v.exactly_one(
            "spec.alertType",
            &[
                ("standard", at.standard.is_some()),
                ("ratio", at.ratio.is_some()),
                ("newValue", at.new_value.is_some()),
                ("uniqueCount", at.unique_count.is_some()),
                ("timeRelative", at.time_relative.is_some()),
                ("metric", at.metric.is_some()),
                ("tracing", at.tracing.is_some()),
                ("flow", at.flow.is_some()),
            ],
        );
        if let Some(metric) = &at.metric {
            v.exactly_one(
                "spec.alertType.metric",
                &[("lucene", metric.lucene.is_some()), ("promql", metric.promql.is_some())],
            );
        }

        for (i, group) in spec.notification_groups.iter().flatten().enumerate() {
            for (j, n) in group.notifications.iter().flatten().enumerate() {
                v.exactly_one(
                    &format!("spec.notificationGroups[{i}].notifications[{j}]"),
                    &[
                        ("integrationName", n.integration_name.is_some()),
                        ("emailRecipients", n.email_recipients.is_some()),
                    ],
                );
            }
        }

        if let Some(scheduling) = &spec.scheduling {
            v.check(
                "spec.scheduling.timeZone",
                crate::time::utc_offset_from_time_zone(&scheduling.time_zone).is_ok(),
                "must be formatted as UTC+HH or UTC-HH",
            );
            v.check(
                "spec.scheduling.startTime",
                parse_time_of_day(&scheduling.start_time).is_ok(),
                "must be a time of day formatted as HH:MM",
            );
            v.check(
                "spec.scheduling.endTime",
                parse_time_of_day(&scheduling.end_time).is_ok(),
                "must be a time of day formatted as HH:MM",
            );
        }

        v.finish()
    }
}

fn validate_notification_group(v: &mut Validator, path: &str, group: &NotificationGroup) {
    for (i, webhook) in group.webhooks.iter().flatten().enumerate() {
        let path = format!("{path}.webhooks[{i}].integration");
        let integration = &webhook.integration;
        v.exactly_one(
            &path,
            &[
                ("integrationRef", integration.integration_ref.is_some()),
                ("recipients", integration.recipients.is_some()),
            ],
        );
        if let Some(r) = &integration.integration_ref {
            let path = format!("{path}.integrationRef");
            v.exactly_one(&path, &[("backendRef", r.backend_ref.is_some()), ("resourceRef", r.resource_ref.is_some())]);
            if let Some(br) = &r.backend_ref {
                validate_backend_ref(v, &format!("{path}.backendRef"), br);
            }
        }
    }
}

fn validate_alert_ref(v: &mut Validator, path: &str, r: &AlertRef) {
    v.exactly_one(path, &[("backendRef", r.backend_ref.is_some()), ("resourceRef", r.resource_ref.is_some())]);
    if let Some(br) = &r.backend_ref {
        validate_backend_ref(v, &format!("{path}.backendRef"), br);
    }
}

fn validate_backend_ref(v: &mut Validator, path: &str, br: &BackendRef) {
    v.exactly_one(path, &[("id", br.id.is_some()), ("name", br.name.is_some())]);
}

fn extract_schedule(schedule: &AlertSchedule) -> anyhow::Result<models::ActivitySchedule> {
    let active_on = &schedule.active_on;
    let (start_hours, start_minutes) = parse_time_of_day(&active_on.start_time)?;
    let (end_hours, end_minutes) = parse_time_of_day(&active_on.end_time)?;

    Ok(models::ActivitySchedule {
        day_of_week: active_on.day_of_week.iter().map(|d| day_of_week(*d)).collect(),
        start_time: models::TimeOfDay { hours: start_hours, minutes: start_minutes },
        end_time: models::TimeOfDay { hours: end_hours, minutes: end_minutes },
        utc_offset: active_on.utc_offset.clone(),
    })
}

async fn extract_notification_group(
    group: &NotificationGroup,
    refs: &RefResolver,
) -> anyhow::Result<models::AlertDefNotificationGroup> {
    let mut webhooks = vec![];
    for webhook in group.webhooks.iter().flatten() {
        webhooks.push(models::AlertDefWebhooksSettings {
            notify_on: notify_on(webhook.notify_on),
            minutes: webhook.retriggering_period.as_ref().map(|p| p.minutes),
            integration: extract_integration(&webhook.integration, refs).await?,
        });
    }

    Ok(models::AlertDefNotificationGroup { group_by_keys: or_empty(&group.group_by_keys), webhooks })
}

async fn extract_integration(integration: &IntegrationType, refs: &RefResolver) -> anyhow::Result<models::IntegrationType> {
    match (&integration.integration_ref, &integration.recipients) {
        (Some(r), None) => Ok(models::IntegrationType::IntegrationId(resolve_integration_ref(r, refs).await?)),
        (None, Some(emails)) => Ok(models::IntegrationType::Recipients(models::Recipients { emails: emails.clone() })),
        _ => Err(ExtractError::invalid_value("integration must set exactly one of integrationRef or recipients")),
    }
}

async fn resolve_integration_ref(r: &IntegrationRef, refs: &RefResolver) -> anyhow::Result<String> {
    match (&r.backend_ref, &r.resource_ref) {
        (Some(BackendRef { id: Some(id), name: None }), None) => Ok(id.clone()),
        (Some(BackendRef { id: None, name: Some(name) }), None) => {
            refs.lookup_backend_id(OUTGOING_WEBHOOKS.path, OUTGOING_WEBHOOKS_LIST_POINTER, "/name", "/id", name)
                .await
        },
        (None, Some(rr)) => refs.resolve::<v1alpha1::OutboundWebhook>(rr).await,
        _ => Err(ExtractError::invalid_value("integrationRef must set exactly one of backendRef.id, backendRef.name or resourceRef")),
    }
}

async fn resolve_alert_ref(r: &AlertRef, refs: &RefResolver) -> anyhow::Result<String> {
    match (&r.backend_ref, &r.resource_ref) {
        (Some(BackendRef { id: Some(id), name: None }), None) => Ok(id.clone()),
        (Some(BackendRef { id: None, name: Some(name) }), None) => {
            refs.lookup_backend_id(
                models::ALERT_DEFS.path,
                models::ALERT_DEFS_LIST_POINTER,
                models::ALERT_DEF_NAME_POINTER,
                "/id",
                name,
            )
            .await
        },
        (None, Some(rr)) => refs.resolve::<v1beta1::Alert>(rr).await,
        _ => Err(ExtractError::invalid_value("alertRef must set exactly one of backendRef.id, backendRef.name or resourceRef")),
    }
}

async fn extract_type_definition(
    td: &AlertTypeDefinition,
    refs: &RefResolver,
) -> anyhow::Result<models::AlertDefTypeDefinition> {
    use models::AlertDefTypeDefinition as D;

    if let Some(t) = &td.logs_immediate {
        return Ok(D::LogsImmediate(models::LogsImmediateType { logs_filter: extract_logs_filter(&t.logs_filter) }));
    }
    if let Some(t) = &td.logs_threshold {
        return Ok(D::LogsThreshold(models::LogsThresholdType {
            logs_filter: extract_logs_filter(&t.logs_filter),
            undetected_values_management: t.undetected_values_management.as_ref().map(extract_undetected_values),
            rules: t
                .rules
                .iter()
                .map(|r| models::LogsThresholdRule {
                    condition: models::LogsThresholdCondition {
                        threshold: r.condition.threshold,
                        time_window: logs_time_window(r.condition.time_window),
                        condition_type: logs_threshold_condition_type(r.condition.condition_type),
                    },
                    override_: r.override_.as_ref().map(extract_override),
                })
                .collect(),
        }));
    }
    if let Some(t) = &td.logs_ratio_threshold {
        return Ok(D::LogsRatioThreshold(models::LogsRatioThresholdType {
            numerator: extract_logs_filter(&t.numerator),
            numerator_alias: t.numerator_alias.clone(),
            denominator: extract_logs_filter(&t.denominator),
            denominator_alias: t.denominator_alias.clone(),
            rules: t
                .rules
                .iter()
                .map(|r| models::LogsRatioRule {
                    condition: models::LogsRatioCondition {
                        threshold: r.condition.threshold,
                        time_window: logs_time_window(r.condition.time_window),
                        condition_type: logs_ratio_condition_type(r.condition.condition_type),
                    },
                    override_: r.override_.as_ref().map(extract_override),
                })
                .collect(),
            group_by_for: logs_ratio_group_by_for(t.group_by_for),
            ignore_infinity: t.ignore_infinity,
            undetected_values_management: t.undetected_values_management.as_ref().map(extract_undetected_values),
        }));
    }
    if let Some(t) = &td.logs_time_relative_threshold {
        return Ok(D::LogsTimeRelativeThreshold(models::LogsTimeRelativeThresholdType {
            logs_filter: extract_logs_filter(&t.logs_filter),
            rules: t
                .rules
                .iter()
                .map(|r| models::LogsTimeRelativeRule {
                    condition: models::LogsTimeRelativeCondition {
                        threshold: r.condition.threshold,
                        compared_to: compared_to(r.condition.compared_to),
                        condition_type: logs_time_relative_condition_type(r.condition.condition_type),
                    },
                    override_: r.override_.as_ref().map(extract_override),
                })
                .collect(),
            ignore_infinity: t.ignore_infinity,
            undetected_values_management: t.undetected_values_management.as_ref().map(extract_undetected_values),
        }));
    }
    if let Some(t) = &td.metric_threshold {
        return Ok(D::MetricThreshold(models::MetricThresholdType {
            metric_filter: models::MetricFilter { promql: t.metric_filter.promql.clone() },
            rules: t
                .rules
                .iter()
                .map(|r| models::MetricThresholdRule {
                    condition: models::MetricThresholdCondition {
                        threshold: r.condition.threshold,
                        for_over_pct: r.condition.for_over_pct,
                        of_the_last: metric_time_window(r.condition.of_the_last),
                        condition_type: metric_threshold_condition_type(r.condition.condition_type),
                    },
                    override_: r.override_.as_ref().map(extract_override),
                })
                .collect(),
            undetected_values_management: t.undetected_values_management.as_ref().map(extract_undetected_values),
            missing_values: t.missing_values.as_ref().map(|m| models::MetricMissingValues {
                replace_with_zero: m.replace_with_zero,
                min_non_null_values_pct: m.min_non_null_values_pct,
            }),
        }));
    }
    if let Some(t) = &td.logs_new_value {
        return Ok(D::LogsNewValue(models::LogsNewValueType {
            logs_filter: extract_logs_filter(&t.logs_filter),
            rules: t
                .rules
                .iter()
                .map(|r| models::LogsNewValueRule {
                    condition: models::LogsNewValueCondition {
                        keypath_to_track: r.condition.keypath_to_track.clone(),
                        time_window: models::LogsNewValueTimeWindow {
                            logs_new_value_time_window_specific_value: new_value_time_window(r.condition.time_window),
                        },
                    },
                })
                .collect(),
        }));
    }
    if let Some(t) = &td.logs_unique_count {
        return Ok(D::LogsUniqueCount(models::LogsUniqueCountType {
            logs_filter: extract_logs_filter(&t.logs_filter),
            rules: t
                .rules
                .iter()
                .map(|r| models::LogsUniqueCountRule {
                    condition: models::LogsUniqueCountCondition {
                        max_unique_count: r.condition.max_unique_count,
                        time_window: models::LogsUniqueValueTimeWindow {
                            logs_unique_value_time_window_specific_value: unique_count_time_window(
                                r.condition.time_window,
                            ),
                        },
                    },
                })
                .collect(),
            unique_count_keypath: t.unique_count_keypath.clone(),
            max_unique_count_per_group_by_key: t.max_unique_count_per_group_by_key,
        }));
    }
    if let Some(t) = &td.tracing_immediate {
        return Ok(D::TracingImmediate(models::TracingImmediateType {
            tracing_filter: t.tracing_filter.as_ref().map(extract_tracing_filter),
        }));
    }
    if let Some(t) = &td.tracing_threshold {
        return Ok(D::TracingThreshold(models::TracingThresholdType {
            tracing_filter: t.tracing_filter.as_ref().map(extract_tracing_filter),
            rules: t
                .rules
                .iter()
                .map(|r| models::TracingThresholdRule {
                    condition: models::TracingThresholdCondition {
                        span_amount: r.condition.span_amount,
                        time_window: logs_time_window(r.condition.time_window),
                    },
                })
                .collect(),
        }));
    }
    if let Some(t) = &td.flow {
        return Ok(D::Flow(extract_flow(t, refs).await?));
    }
    if let Some(t) = &td.logs_anomaly {
        return Ok(D::LogsAnomaly(models::LogsAnomalyType {
            logs_filter: extract_logs_filter(&t.logs_filter),
            rules: t
                .rules
                .iter()
                .map(|r| models::LogsAnomalyRule {
                    condition: models::LogsAnomalyCondition {
                        minimum_threshold: r.condition.minimum_threshold,
                        time_window: logs_time_window(r.condition.time_window),
                    },
                })
                .collect(),
        }));
    }
    if let Some(t) = &td.metric_anomaly {
        return Ok(D::MetricAnomaly(models::MetricAnomalyType {
            metric_filter: models::MetricFilter { promql: t.metric_filter.promql.clone() },
            rules: t
                .rules
                .iter()
                .map(|r| models::MetricAnomalyRule {
                    condition: models::MetricAnomalyCondition {
                        threshold: r.condition.threshold,
                        for_over_pct: r.condition.for_over_pct,
                        of_the_last: metric_time_window(r.condition.of_the_last),
                        min_non_null_values_pct: r.condition.min_non_null_values_pct,
                        condition_type: metric_anomaly_condition_type(r.condition.condition_type),
                    },
                })
                .collect(),
        }));
    }

    Err(ExtractError::invalid_value("typeDefinition does not set any alert type"))
}

async fn extract_flow(flow: &Flow, refs: &RefResolver) -> anyhow::Result<models::FlowType> {
    let mut stages = vec![];
    for stage in &flow.stages {
        let mut groups = vec![];
        for group in &stage.flow_stages_groups {
            let mut alert_defs = vec![];
            for def in &group.alert_defs {
                let id = resolve_alert_ref(&def.alert_ref, refs).await?;
                debug!("flow stage references alert {id}");
                alert_defs.push(models::FlowStagesGroupsAlertDefs { id, not: def.not });
            }
            groups.push(models::FlowStagesGroup {
                alert_defs,
                next_op: next_op(group.next_op),
                alerts_op: alerts_op(group.alerts_op),
            });
        }
        stages.push(models::FlowStages {
            timeframe_ms: stage.timeframe_ms,
            timeframe_type: timeframe_type(stage.timeframe_type),
            flow_stages_groups: models::FlowStagesGroups { groups },
        });
    }

    Ok(models::FlowType { stages, enforce_suppression: flow.enforce_suppression })
}

fn extract_logs_filter(filter: &Option<LogsFilter>) -> Option<models::LogsFilter> {
    let simple = filter.as_ref()?.simple_filter.as_ref()?;
    Some(models::LogsFilter {
        simple_filter: models::LogsSimpleFilter {
            lucene_query: simple.lucene_query.clone(),
            label_filters: simple.label_filters.as_ref().map(|lf| models::LabelFilters {
                application_name: extract_label_filter_types(&lf.application_name),
                subsystem_name: extract_label_filter_types(&lf.subsystem_name),
                severities: lf.severity.iter().flatten().map(|s| log_severity(*s)).collect(),
            }),
        },
    })
}

fn extract_label_filter_types(filters: &Option<Vec<LabelFilterType>>) -> Vec<models::LabelFilterType> {
    filters
        .iter()
        .flatten()
        .map(|f| models::LabelFilterType { value: f.value.clone(), operation: log_filter_operation(f.operation) })
        .collect()
}

fn extract_tracing_filter(filter: &TracingFilter) -> models::TracingFilter {
    models::TracingFilter {
        simple_filter: models::TracingSimpleFilter {
            tracing_label_filters: filter.tracing_label_filters.as_ref().map(|lf| models::TracingLabelFilters {
                application_name: extract_tracing_filter_types(&lf.application_name),
                subsystem_name: extract_tracing_filter_types(&lf.subsystem_name),
                service_name: extract_tracing_filter_types(&lf.service_name),
                operation_name: extract_tracing_filter_types(&lf.operation_name),
                span_fields: lf
                    .span_fields
                    .iter()
                    .flatten()
                    .map(|f| models::TracingSpanFieldsFilterType {
                        key: f.key.clone(),
                        filter_type: extract_tracing_filter_type(&f.filter_type),
                    })
                    .collect(),
            }),
            latency_threshold_ms: filter.latency_threshold_ms,
        },
    }
}

fn extract_tracing_filter_types(filters: &Option<Vec<TracingFilterType>>) -> Vec<models::TracingFilterType> {
    filters.iter().flatten().map(extract_tracing_filter_type).collect()
}

fn extract_tracing_filter_type(f: &TracingFilterType) -> models::TracingFilterType {
    models::TracingFilterType { values: f.values.clone(), operation: tracing_filter_operation(f.operation) }
}

fn extract_undetected_values(u: &UndetectedValuesManagement) -> models::UndetectedValuesManagement {
    models::UndetectedValuesManagement {
        trigger_undetected_values: u.trigger_undetected_values,
        auto_retire_timeframe: auto_retire_timeframe(u.auto_retire_timeframe),
    }
}

fn extract_override(o: &AlertOverride) -> models::AlertDefOverride {
    models::AlertDefOverride { priority: priority(o.priority) }
}

fn logs_time_window(w: LogsTimeWindow) -> models::LogsTimeWindow {
    models::LogsTimeWindow { logs_time_window_specific_value: logs_time_window_value(w) }
}

fn metric_time_window(w: MetricTimeWindow) -> models::MetricTimeWindow {
    models::MetricTimeWindow { metric_time_window_specific_value: metric_time_window_value(w) }
}

// Lookup tables from the CRD enums to the backend enum names

fn priority(p: AlertPriority) -> models::AlertDefPriority {
    match p {
        AlertPriority::P1 => models::AlertDefPriority::P1,
        AlertPriority::P2 => models::AlertDefPriority::P2,
        AlertPriority::P3 => models::AlertDefPriority::P3,
        AlertPriority::P4 => models::AlertDefPriority::P4,
        AlertPriority::P5 => models::AlertDefPriority::P5OrUnspecified,
    }
}

fn notify_on(n: NotifyOn) -> models::NotifyOn {
    match n {
        NotifyOn::TriggeredOnly => models::NotifyOn::TriggeredOnlyUnspecified,
        NotifyOn::TriggeredAndResolved => models::NotifyOn::TriggeredAndResolved,
    }
}

fn day_of_week(d: DayOfWeek) -> models::DayOfWeek {
    match d {
        DayOfWeek::Monday => models::DayOfWeek::MondayOrUnspecified,
        DayOfWeek::Tuesday => models::DayOfWeek::Tuesday,
        DayOfWeek::Wednesday => models::DayOfWeek::Wednesday,
        DayOfWeek::Thursday => models::DayOfWeek::Thursday,
        DayOfWeek::Friday => models::DayOfWeek::Friday,
        DayOfWeek::Saturday => models::DayOfWeek::Saturday,
        DayOfWeek::Sunday => models::DayOfWeek::Sunday,
    }
}

fn log_severity(s: LogSeverity) -> models::LogSeverity {
    match s {
        LogSeverity::Verbose => models::LogSeverity::VerboseUnspecified,
        LogSeverity::Debug => models::LogSeverity::Debug,
        LogSeverity::Info => models::LogSeverity::Info,
        LogSeverity::Warning => models::LogSeverity::Warning,
        LogSeverity::Error => models::LogSeverity::Error,
        LogSeverity::Critical => models::LogSeverity::Critical,
    }
}

fn log_filter_operation(o: LogFilterOperationType) -> models::LogFilterOperationType {
    match o {
        LogFilterOperationType::Is => models::LogFilterOperationType::IsOrUnspecified,
        LogFilterOperationType::Includes => models::LogFilterOperationType::Includes,
        LogFilterOperationType::EndsWith => models::LogFilterOperationType::EndsWith,
        LogFilterOperationType::StartsWith => models::LogFilterOperationType::StartsWith,
    }
}

fn tracing_filter_operation(o: LogFilterOperationType) -> models::TracingFilterOperationType {
    match o {
        LogFilterOperationType::Is => models::TracingFilterOperationType::IsOrUnspecified,
        LogFilterOperationType::Includes => models::TracingFilterOperationType::Includes,
        LogFilterOperationType::EndsWith => models::TracingFilterOperationType::EndsWith,
        LogFilterOperationType::StartsWith => models::TracingFilterOperationType::StartsWith,
    }
}

fn auto_retire_timeframe(t: AutoRetireTimeframe) -> models::AutoRetireTimeframe {
    match t {
        AutoRetireTimeframe::Never => models::AutoRetireTimeframe::NeverOrUnspecified,
        AutoRetireTimeframe::Minutes5 => models::AutoRetireTimeframe::Minutes5,
        AutoRetireTimeframe::Minutes10 => models::AutoRetireTimeframe::Minutes10,
        AutoRetireTimeframe::Hour1 => models::AutoRetireTimeframe::Hour1,
        AutoRetireTimeframe::Hours2 => models::AutoRetireTimeframe::Hours2,
        AutoRetireTimeframe::Hours6 => models::AutoRetireTimeframe::Hours6,
        AutoRetireTimeframe::Hours12 => models::AutoRetireTimeframe::Hours12,
        AutoRetireTimeframe::Hours24 => models::AutoRetireTimeframe::Hours24,
    }
}

fn logs_time_window_value(w: LogsTimeWindow) -> models::LogsTimeWindowValue {
    match w {
        LogsTimeWindow::Minutes5 => models::LogsTimeWindowValue::Minutes5OrUnspecified,
        LogsTimeWindow::Minutes10 => models::LogsTimeWindowValue::Minutes10,
        LogsTimeWindow::Minutes15 => models::LogsTimeWindowValue::Minutes15,
        LogsTimeWindow::Minutes20 => models::LogsTimeWindowValue::Minutes20,
        LogsTimeWindow::Minutes30 => models::LogsTimeWindowValue::Minutes30,
        LogsTimeWindow::Hour1 => models::LogsTimeWindowValue::Hour1,
        LogsTimeWindow::Hours2 => models::LogsTimeWindowValue::Hours2,
        LogsTimeWindow::Hours4 => models::LogsTimeWindowValue::Hours4,
        LogsTimeWindow::Hours6 => models::LogsTimeWindowValue::Hours6,
        LogsTimeWindow::Hours12 => models::LogsTimeWindowValue::Hours12,
        LogsTimeWindow::Hours24 => models::LogsTimeWindowValue::Hours24,
        LogsTimeWindow::Hours36 => models::LogsTimeWindowValue::Hours36,
    }
}

fn logs_threshold_condition_type(c: ThresholdConditionType) -> models::LogsThresholdConditionType {
    match c {
        ThresholdConditionType::MoreThan => models::LogsThresholdConditionType::MoreThanOrUnspecified,
        ThresholdConditionType::LessThan => models::LogsThresholdConditionType::LessThan,
    }
}

fn logs_ratio_condition_type(c: ThresholdConditionType) -> models::LogsRatioConditionType {
    match c {
        ThresholdConditionType::MoreThan => models::LogsRatioConditionType::MoreThanOrUnspecified,
        ThresholdConditionType::LessThan => models::LogsRatioConditionType::LessThan,
    }
}

fn logs_time_relative_condition_type(c: ThresholdConditionType) -> models::LogsTimeRelativeConditionType {
    match c {
        ThresholdConditionType::MoreThan => models::LogsTimeRelativeConditionType::MoreThanOrUnspecified,
        ThresholdConditionType::LessThan => models::LogsTimeRelativeConditionType::LessThan,
    }
}

fn logs_ratio_group_by_for(g: LogsRatioGroupByFor) -> models::LogsRatioGroupByFor {
    match g {
        LogsRatioGroupByFor::Both => models::LogsRatioGroupByFor::BothOrUnspecified,
        LogsRatioGroupByFor::NumeratorOnly => models::LogsRatioGroupByFor::NumeratorOnly,
        LogsRatioGroupByFor::DenominatorOnly => models::LogsRatioGroupByFor::DenumeratorOnly,
    }
}

fn compared_to(c: LogsTimeRelativeComparedTo) -> models::LogsTimeRelativeComparedTo {
    match c {
        LogsTimeRelativeComparedTo::PreviousHour => models::LogsTimeRelativeComparedTo::PreviousHourOrUnspecified,
        LogsTimeRelativeComparedTo::SameHourYesterday => models::LogsTimeRelativeComparedTo::SameHourYesterday,
        LogsTimeRelativeComparedTo::SameHourLastWeek => models::LogsTimeRelativeComparedTo::SameHourLastWeek,
        LogsTimeRelativeComparedTo::Yesterday => models::LogsTimeRelativeComparedTo::Yesterday,
        LogsTimeRelativeComparedTo::SameDayLastWeek => models::LogsTimeRelativeComparedTo::SameDayLastWeek,
        LogsTimeRelativeComparedTo::SameDayLastMonth => models::LogsTimeRelativeComparedTo::SameDayLastMonth,
    }
}

fn metric_time_window_value(w: MetricTimeWindow) -> models::MetricTimeWindowValue {
    match w {
        MetricTimeWindow::Minutes1 => models::MetricTimeWindowValue::Minutes1OrUnspecified,
        MetricTimeWindow::Minutes5 => models::MetricTimeWindowValue::Minutes5,
        MetricTimeWindow::Minutes10 => models::MetricTimeWindowValue::Minutes10,
        MetricTimeWindow::Minutes15 => models::MetricTimeWindowValue::Minutes15,
        MetricTimeWindow::Minutes20 => models::MetricTimeWindowValue::Minutes20,
        MetricTimeWindow::Minutes30 => models::MetricTimeWindowValue::Minutes30,
        MetricTimeWindow::Hour1 => models::MetricTimeWindowValue::Hour1,
        MetricTimeWindow::Hours2 => models::MetricTimeWindowValue::Hours2,
        MetricTimeWindow::Hours4 => models::MetricTimeWindowValue::Hours4,
        MetricTimeWindow::Hours6 => models::MetricTimeWindowValue::Hours6,
        MetricTimeWindow::Hours12 => models::MetricTimeWindowValue::Hours12,
        MetricTimeWindow::Hours24 => models::MetricTimeWindowValue::Hours24,
    }
}

fn metric_threshold_condition_type(c: MetricThresholdConditionType) -> models::MetricThresholdConditionType {
    match c {
        MetricThresholdConditionType::MoreThan => models::MetricThresholdConditionType::MoreThanOrUnspecified,
        MetricThresholdConditionType::LessThan => models::MetricThresholdConditionType::LessThan,
        MetricThresholdConditionType::MoreThanOrEquals => models::MetricThresholdConditionType::MoreThanOrEquals,
        MetricThresholdConditionType::LessThanOrEquals => models::MetricThresholdConditionType::LessThanOrEquals,
    }
}

fn metric_anomaly_condition_type(c: MetricAnomalyConditionType) -> models::MetricAnomalyConditionType {
    match c {
        MetricAnomalyConditionType::MoreThanUsual => models::MetricAnomalyConditionType::MoreThanUsualOrUnspecified,
        MetricAnomalyConditionType::LessThanUsual => models::MetricAnomalyConditionType::LessThanUsual,
    }
}

fn new_value_time_window(w: LogsNewValueTimeWindow) -> models::LogsNewValueTimeWindowValue {
    match w {
        LogsNewValueTimeWindow::Hours12 => models::LogsNewValueTimeWindowValue::Hours12OrUnspecified,
        LogsNewValueTimeWindow::Hours24 => models::LogsNewValueTimeWindowValue::Hours24,
        LogsNewValueTimeWindow::Hours48 => models::LogsNewValueTimeWindowValue::Hours48,
        LogsNewValueTimeWindow::Hours72 => models::LogsNewValueTimeWindowValue::Hours72,
        LogsNewValueTimeWindow::Week1 => models::LogsNewValueTimeWindowValue::Week1,
        LogsNewValueTimeWindow::Month1 => models::LogsNewValueTimeWindowValue::Month1,
        LogsNewValueTimeWindow::Months2 => models::LogsNewValueTimeWindowValue::Months2,
        LogsNewValueTimeWindow::Months3 => models::LogsNewValueTimeWindowValue::Months3,
    }
}

fn unique_count_time_window(w: LogsUniqueCountTimeWindow) -> models::LogsUniqueValueTimeWindowValue {
    match w {
        LogsUniqueCountTimeWindow::Minute1 => models::LogsUniqueValueTimeWindowValue::Minute1OrUnspecified,
        LogsUniqueCountTimeWindow::Minutes5 => models::LogsUniqueValueTimeWindowValue::Minutes5,
        LogsUniqueCountTimeWindow::Minutes10 => models::LogsUniqueValueTimeWindowValue::Minutes10,
        LogsUniqueCountTimeWindow::Minutes15 => models::LogsUniqueValueTimeWindowValue::Minutes15,
        LogsUniqueCountTimeWindow::Minutes20 => models::LogsUniqueValueTimeWindowValue::Minutes20,
        LogsUniqueCountTimeWindow::Minutes30 => models::LogsUniqueValueTimeWindowValue::Minutes30,
        LogsUniqueCountTimeWindow::Hour1 => models::LogsUniqueValueTimeWindowValue::Hours1,
        LogsUniqueCountTimeWindow::Hours2 => models::LogsUniqueValueTimeWindowValue::Hours2,
        LogsUniqueCountTimeWindow::Hours4 => models::LogsUniqueValueTimeWindowValue::Hours4,
        LogsUniqueCountTimeWindow::Hours6 => models::LogsUniqueValueTimeWindowValue::Hours6,
        LogsUniqueCountTimeWindow::Hours12 => models::LogsUniqueValueTimeWindowValue::Hours12,
        LogsUniqueCountTimeWindow::Hours24 => models::LogsUniqueValueTimeWindowValue::Hours24,
        LogsUniqueCountTimeWindow::Hours36 => models::LogsUniqueValueTimeWindowValue::Hours36,
    }
}

fn next_op(o: FlowStageGroupOperator) -> models::NextOp {
    match o {
        FlowStageGroupOperator::And => models::NextOp::AndOrUnspecified,
        FlowStageGroupOperator::Or => models::NextOp::Or,
    }
}

fn alerts_op(o: FlowStageGroupOperator) -> models::AlertsOp {
    match o {
        FlowStageGroupOperator::And => models::AlertsOp::AndOrUnspecified,
        FlowStageGroupOperator::Or => models::AlertsOp::Or,
    }
}

fn timeframe_type(t: FlowTimeframeType) -> models::TimeframeType {
    match t {
        FlowTimeframeType::Unspecified => models::TimeframeType::Unspecified,
        FlowTimeframeType::UpTo => models::TimeframeType::UpTo,
    }
}
