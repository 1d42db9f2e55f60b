use assertables::*;
use cx_api::BackendRef;
use serde_json::json;

use super::*;
use crate::conversion::*;

#[rstest]
fn test_alert_to_v1beta1(test_legacy_alert: v1alpha1::Alert) {
    let alert = alert_to_v1beta1(&test_legacy_alert).unwrap();
    let spec = &alert.spec;

    assert_eq!(alert.metadata, test_legacy_alert.metadata);
    assert_eq!(spec.priority, v1beta1::AlertPriority::P2);
    assert_eq!(spec.group_by_keys, Some(vec!["coralogix.metadata.sdkId".to_string()]));
    assert_eq!(spec.entity_labels, test_legacy_alert.spec.labels);

    let group = spec.notification_group.as_ref().unwrap();
    let integration = &group.webhooks.as_ref().unwrap()[0].integration;
    assert_eq!(
        integration.integration_ref.as_ref().unwrap().backend_ref,
        Some(BackendRef { id: None, name: Some(TEST_WEBHOOK_NAME.into()) })
    );

    let excess = spec.notification_group_excess.as_ref().unwrap();
    assert_eq!(excess.len(), 1);
    assert_eq!(excess[0].group_by_keys, Some(vec!["host".to_string()]));
    assert_eq!(
        excess[0].webhooks.as_ref().unwrap()[0].integration.recipients,
        Some(vec!["oncall@example.com".to_string()])
    );

    let active_on = &spec.schedule.as_ref().unwrap().active_on;
    assert_eq!(active_on.utc_offset.as_deref(), Some("+02:00"));
    assert_eq!(active_on.start_time, "08:30");

    let threshold = spec.type_definition.logs_threshold.as_ref().unwrap();
    assert_eq!(threshold.rules[0].condition.threshold, 10.0);
    assert_eq!(threshold.rules[0].condition.time_window, v1beta1::LogsTimeWindow::Minutes10);
    assert_eq!(threshold.rules[0].condition.condition_type, v1beta1::ThresholdConditionType::MoreThan);

    let labels = threshold
        .logs_filter
        .as_ref()
        .and_then(|f| f.simple_filter.as_ref())
        .and_then(|f| f.label_filters.as_ref())
        .unwrap();
    assert_eq!(labels.application_name.as_ref().unwrap()[0].operation, v1beta1::LogFilterOperationType::Is);
    let subsystem = &labels.subsystem_name.as_ref().unwrap()[0];
    assert_eq!(subsystem.value, "api");
    assert_eq!(subsystem.operation, v1beta1::LogFilterOperationType::StartsWith);
}

#[rstest]
fn test_alert_to_v1alpha1(test_alert: v1beta1::Alert) {
    let alert = alert_to_v1alpha1(&test_alert).unwrap();
    let spec = &alert.spec;

    assert_eq!(spec.severity, v1alpha1::AlertSeverity::Error);
    assert_eq!(spec.scheduling.as_ref().unwrap().time_zone, "UTC+02");

    let notifications = spec.notification_groups.as_ref().unwrap()[0].notifications.as_ref().unwrap();
    assert_eq!(notifications[0].integration_name.as_deref(), Some(TEST_WEBHOOK_NAME));
    assert_eq!(notifications[0].retriggering_period_minutes, 5);

    let standard = spec.alert_type.standard.as_ref().unwrap();
    assert_eq!(standard.conditions.alert_when, v1alpha1::StandardAlertWhen::More);
    assert_eq!(standard.conditions.threshold, Some(10));
    assert_eq!(standard.conditions.group_by, Some(vec!["coralogix.metadata.sdkId".to_string()]));
    assert_eq!(
        standard.filters.as_ref().unwrap().subsystems,
        Some(vec!["filter:startsWith:api".to_string()])
    );
}

#[rstest]
fn test_alert_round_trip_preserves_spec(test_legacy_alert: v1alpha1::Alert) {
    let beta = alert_to_v1beta1(&test_legacy_alert).unwrap();
    let alpha = alert_to_v1alpha1(&beta).unwrap();

    let expected = &test_legacy_alert.spec;
    assert_eq!(alpha.spec.severity, expected.severity);
    assert_eq!(alpha.spec.alert_type, expected.alert_type);
    assert_eq!(alpha.spec.notification_groups, expected.notification_groups);
    assert_eq!(alpha.spec.show_in_insight, expected.show_in_insight);
    assert_eq!(alpha.spec.scheduling, expected.scheduling);
}

#[rstest]
fn test_lucene_metric_alert_is_rejected(mut test_legacy_alert: v1alpha1::Alert) {
    test_legacy_alert.spec.alert_type = serde_json::from_value(json!({
        "metric": {
            "lucene": {
                "conditions": {
                    "metricField": "duration",
                    "arithmeticOperator": "Avg",
                    "alertWhen": "More",
                    "threshold": 3.0,
                    "sampleThresholdPercentage": 50,
                    "timeWindow": "FiveMinutes",
                },
            },
        },
    }))
    .unwrap();

    assert_err!(alert_to_v1beta1(&test_legacy_alert));
}

#[rstest]
#[case::more_than_usual("MoreThanUsual", true)]
#[case::more("More", false)]
fn test_promql_alert_to_v1beta1(mut test_legacy_alert: v1alpha1::Alert, #[case] when: &str, #[case] anomaly: bool) {
    test_legacy_alert.spec.alert_type = serde_json::from_value(json!({
        "metric": {
            "promql": {
                "searchQuery": "sum(rate(http_requests_total[5m]))",
                "conditions": {
                    "alertWhen": when,
                    "threshold": 3.0,
                    "sampleThresholdPercentage": 50,
                    "timeWindow": "Hour",
                },
            },
        },
    }))
    .unwrap();

    let td = alert_to_v1beta1(&test_legacy_alert).unwrap().spec.type_definition;
    assert_eq!(td.metric_anomaly.is_some(), anomaly);
    assert_eq!(td.metric_threshold.is_some(), !anomaly);
}

#[rstest]
#[case::threshold("More")]
#[case::anomaly("LessThanUsual")]
fn test_promql_alert_group_by_round_trip(mut test_legacy_alert: v1alpha1::Alert, #[case] when: &str) {
    test_legacy_alert.spec.alert_type = serde_json::from_value(json!({
        "metric": {
            "promql": {
                "searchQuery": "sum(rate(http_requests_total[5m])) by (service)",
                "conditions": {
                    "alertWhen": when,
                    "threshold": 3.0,
                    "sampleThresholdPercentage": 50,
                    "timeWindow": "Hour",
                    "groupBy": ["service"],
                },
            },
        },
    }))
    .unwrap();

    let beta = alert_to_v1beta1(&test_legacy_alert).unwrap();
    assert_eq!(beta.spec.group_by_keys, Some(vec!["service".to_string()]));

    let alpha = alert_to_v1alpha1(&beta).unwrap();
    assert_eq!(alpha.spec.alert_type, test_legacy_alert.spec.alert_type);
}

#[rstest]
fn test_metric_threshold_group_by_keys_survive_v1alpha1(mut test_alert: v1beta1::Alert) {
    test_alert.spec.group_by_keys = Some(vec!["service".into(), "region".into()]);
    test_alert.spec.type_definition = serde_json::from_value(json!({
        "metricThreshold": {
            "metricFilter": {"promql": "sum(up) by (service, region)"},
            "rules": [{"condition": {"threshold": 1.0, "forOverPct": 100, "ofTheLast": "10m", "conditionType": "LessThan"}}],
        },
    }))
    .unwrap();

    let alpha = alert_to_v1alpha1(&test_alert).unwrap();
    let promql = alpha.spec.alert_type.metric.as_ref().unwrap().promql.as_ref().unwrap();
    assert_eq!(promql.conditions.group_by, test_alert.spec.group_by_keys);

    let beta = alert_to_v1beta1(&alpha).unwrap();
    assert_eq!(beta.spec.group_by_keys, test_alert.spec.group_by_keys);
}

#[rstest]
#[traced_test]
fn test_unique_count_keeps_first_group_by_key(mut test_alert: v1beta1::Alert) {
    test_alert.spec.group_by_keys = Some(vec!["host".into(), "pod".into()]);
    test_alert.spec.type_definition = serde_json::from_value(json!({
        "logsUniqueCount": {
            "rules": [{"condition": {"maxUniqueCount": 5, "timeWindow": "10m"}}],
            "uniqueCountKeypath": "user.id",
        },
    }))
    .unwrap();

    let alpha = alert_to_v1alpha1(&test_alert).unwrap();
    let unique_count = alpha.spec.alert_type.unique_count.unwrap();
    assert_eq!(unique_count.conditions.group_by.as_deref(), Some("host"));
    assert!(logs_contain("dropping [\"pod\"]"));
}

#[traced_test]
#[rstest]
#[case::fractional(2.5, 2, true)]
#[case::negative(-1.0, 0, true)]
#[case::whole(10.0, 10, false)]
fn test_logs_threshold_to_whole_count(
    mut test_alert: v1beta1::Alert,
    #[case] threshold: f64,
    #[case] expected: u32,
    #[case] lossy: bool,
) {
    test_alert.spec.type_definition.logs_threshold.as_mut().unwrap().rules[0].condition.threshold = threshold;

    let alpha = alert_to_v1alpha1(&test_alert).unwrap();
    assert_eq!(alpha.spec.alert_type.standard.unwrap().conditions.threshold, Some(expected));
    assert_eq!(logs_contain("is not a whole count"), lossy);
}

#[rstest]
#[traced_test]
fn test_tracing_span_amount_truncation_warns(mut test_alert: v1beta1::Alert) {
    test_alert.spec.type_definition = serde_json::from_value(json!({
        "tracingThreshold": {
            "rules": [{"condition": {"spanAmount": 7.75, "timeWindow": "5m"}}],
        },
    }))
    .unwrap();

    let alpha = alert_to_v1alpha1(&test_alert).unwrap();
    assert_eq!(alpha.spec.alert_type.tracing.unwrap().conditions.threshold, Some(7));
    assert!(logs_contain("tracingThreshold spanAmount 7.75 is not a whole count"));
}

#[rstest]
#[traced_test]
fn test_alert_to_v1alpha1_warns_on_dropped_fields(mut test_alert: v1beta1::Alert) {
    test_alert.spec.phantom_mode = true;
    test_alert.spec.type_definition.logs_threshold.as_mut().unwrap().rules[0].override_ =
        Some(v1beta1::AlertOverride { priority: v1beta1::AlertPriority::P1 });

    let alpha = alert_to_v1alpha1(&test_alert).unwrap();
    assert_eq!(alpha.spec.severity, v1alpha1::AlertSeverity::Error);
    assert!(logs_contain("dropping phantomMode"));
    assert!(logs_contain("dropping logsThreshold rule override"));
}

#[rstest]
fn test_flow_stage_timeframe_too_long(mut test_alert: v1beta1::Alert) {
    test_alert.spec.type_definition = serde_json::from_value(json!({
        "flow": {
            "stages": [{
                "flowStagesGroups": [],
                "timeframeMs": u64::MAX,
                "timeframeType": "UpTo",
            }],
        },
    }))
    .unwrap();

    let err = alert_to_v1alpha1(&test_alert).unwrap_err();
    assert_contains!(err.to_string(), "too long");
}

#[rstest]
fn test_flow_alert_time_window(mut test_legacy_alert: v1alpha1::Alert) {
    test_legacy_alert.spec.alert_type = serde_json::from_value(json!({
        "flow": {
            "stages": [{
                "timeWindow": {"hours": 1, "minutes": 30},
                "groups": [{
                    "innerFlowAlerts": {"operator": "Or", "alerts": [{"userAlertId": "abc", "not": true}]},
                    "nextOperator": "And",
                }],
            }],
        },
    }))
    .unwrap();

    let beta = alert_to_v1beta1(&test_legacy_alert).unwrap();
    let flow = beta.spec.type_definition.flow.as_ref().unwrap();
    assert_eq!(flow.stages[0].timeframe_ms, 5_400_000);
    assert_eq!(flow.stages[0].timeframe_type, v1beta1::FlowTimeframeType::UpTo);
    let def = &flow.stages[0].flow_stages_groups[0].alert_defs[0];
    assert_eq!(def.alert_ref.backend_ref.as_ref().unwrap().id.as_deref(), Some("abc"));
    assert!(def.not);

    let alpha = alert_to_v1alpha1(&beta).unwrap();
    assert_eq!(alpha.spec.alert_type, test_legacy_alert.spec.alert_type);
}

#[rstest]
#[traced_test]
fn test_alert_to_v1alpha1_keeps_first_rule(mut test_alert: v1beta1::Alert) {
    let threshold = test_alert.spec.type_definition.logs_threshold.as_mut().unwrap();
    let mut second = threshold.rules[0].clone();
    second.condition.threshold = 99.0;
    threshold.rules.push(second);

    let alpha = alert_to_v1alpha1(&test_alert).unwrap();
    assert_eq!(alpha.spec.alert_type.standard.unwrap().conditions.threshold, Some(10));
    assert!(logs_contain("only the first is kept"));
}

#[rstest]
#[traced_test]
fn test_alert_to_v1alpha1_drops_resource_refs(mut test_alert: v1beta1::Alert) {
    test_alert.spec.notification_group = serde_json::from_value(json!({
        "webhooks": [{
            "integration": {"integrationRef": {"resourceRef": {"name": TEST_WEBHOOK_NAME}}},
        }],
    }))
    .unwrap();

    let alpha = alert_to_v1alpha1(&test_alert).unwrap();
    assert_is_empty!(alpha.spec.notification_groups.unwrap()[0].notifications.as_ref().unwrap());
    assert!(logs_contain("dropping notification"));
}

#[rstest]
fn test_convert_object(test_legacy_alert: v1alpha1::Alert) {
    let obj = serde_json::to_value(&test_legacy_alert).unwrap();
    let converted = convert_object(obj, V1BETA1_API_VERSION).unwrap();

    assert_eq!(converted["apiVersion"], V1BETA1_API_VERSION);
    assert_eq!(converted["kind"], "Alert");
    assert_eq!(converted["metadata"]["name"], TEST_ALERT_NAME);
    assert_eq!(converted["spec"]["priority"], "P2");
}

#[rstest]
fn test_convert_object_same_version(test_alert: v1beta1::Alert) {
    let obj = serde_json::to_value(&test_alert).unwrap();
    assert_eq!(convert_object(obj.clone(), V1BETA1_API_VERSION).unwrap(), obj);
}

#[rstest]
#[case::wrong_kind(json!({"apiVersion": V1ALPHA1_API_VERSION, "kind": "View"}))]
#[case::missing_kind(json!({"apiVersion": V1ALPHA1_API_VERSION}))]
fn test_convert_object_unsupported(#[case] obj: serde_json::Value) {
    assert_err!(convert_object(obj, V1BETA1_API_VERSION));
}
