use assertables::*;
use cx_client::models::alert_def::*;
use cx_client::models::outbound_webhook::{
    OUTGOING_WEBHOOKS,
    OUTGOING_WEBHOOKS_LIST_POINTER,
};
use cx_client::models::rule_group::RuleParameters;
use cx_client::models::tco::*;
use cx_client::models::view::TimeSelectionModel;
use mockall::predicate;
use serde::de::DeserializeOwned;
use serde_json::{
    Value,
    json,
};

use super::*;

fn cx_obj<K: DeserializeOwned>(kind: &str, spec: Value) -> K {
    serde_json::from_value(json!({
        "apiVersion": "coralogix.com/v1alpha1",
        "kind": kind,
        "metadata": {"name": "test-obj", "namespace": TEST_NAMESPACE, "generation": TEST_GENERATION},
        "spec": spec,
    }))
    .unwrap()
}

fn backend_with_webhooks() -> MockCoralogixApi {
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_list()
        .with(predicate::eq(OUTGOING_WEBHOOKS.path))
        .returning(|_| Ok(json!({"deployed": [{"id": TEST_WEBHOOK_ID, "name": TEST_WEBHOOK_NAME}]})));
    backend
}

#[rstest]
#[tokio::test]
async fn test_alert_extract_request(test_alert: v1beta1::Alert) {
    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, backend_with_webhooks());

    let req = test_alert.extract_request(&refs).await.unwrap();
    let props = &req.alert_def_properties;

    assert_eq!(props.priority, AlertDefPriority::P2);
    assert_eq!(props.type_, AlertDefType::LogsThreshold);
    assert_eq!(props.group_by_keys, vec!["coralogix.metadata.sdkId".to_string()]);

    let active_on = props.active_on.as_ref().unwrap();
    assert_eq!(active_on.start_time, TimeOfDay { hours: 8, minutes: 30 });
    assert_eq!(active_on.end_time, TimeOfDay { hours: 17, minutes: 0 });

    let webhook = &props.notification_group.as_ref().unwrap().webhooks[0];
    assert_eq!(webhook.integration, IntegrationType::IntegrationId(TEST_WEBHOOK_ID.into()));
    assert_eq!(webhook.minutes, Some(5));

    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(
        body.pointer("/alertDefProperties/type").and_then(Value::as_str),
        Some("ALERT_DEF_TYPE_LOGS_THRESHOLD")
    );
    assert_some!(body.pointer("/alertDefProperties/logsThreshold"));
}

#[rstest]
#[tokio::test]
async fn test_alert_extract_request_unknown_webhook_name(test_alert: v1beta1::Alert) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_list()
        .with(predicate::eq(OUTGOING_WEBHOOKS.path))
        .returning(|_| Ok(json!({"deployed": [{"id": "other", "name": "some-other-webhook"}]})));
    let refs = resolver(client, backend);

    let err = test_alert.extract_request(&refs).await.unwrap_err();
    assert_contains!(err.to_string(), TEST_WEBHOOK_NAME);
}

fn with_webhook_resource_ref(mut alert: v1beta1::Alert) -> v1beta1::Alert {
    let group = alert.spec.notification_group.as_mut().unwrap();
    let integration = &mut group.webhooks.as_mut().unwrap()[0].integration;
    integration.integration_ref = Some(v1beta1::IntegrationRef {
        backend_ref: None,
        resource_ref: Some(ResourceRef { name: TEST_WEBHOOK_NAME.into(), namespace: None }),
    });
    alert
}

#[rstest]
#[tokio::test]
async fn test_alert_extract_request_resource_ref(test_alert: v1beta1::Alert, test_outbound_webhook: v1alpha1::OutboundWebhook) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            cx_object_path("v1alpha1", "outboundwebhooks", TEST_NAMESPACE, TEST_WEBHOOK_NAME),
            serde_json::to_value(&test_outbound_webhook).unwrap(),
        )
        .build();
    let refs = resolver(client, MockCoralogixApi::new());

    let alert = with_webhook_resource_ref(test_alert);
    let req = alert.extract_request(&refs).await.unwrap();

    let webhook = &req.alert_def_properties.notification_group.as_ref().unwrap().webhooks[0];
    assert_eq!(webhook.integration, IntegrationType::IntegrationId(TEST_WEBHOOK_ID.into()));
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_alert_extract_request_unsynced_resource_ref(
    test_alert: v1beta1::Alert,
    #[with(None)] test_outbound_webhook: v1alpha1::OutboundWebhook,
) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            cx_object_path("v1alpha1", "outboundwebhooks", TEST_NAMESPACE, TEST_WEBHOOK_NAME),
            serde_json::to_value(&test_outbound_webhook).unwrap(),
        )
        .build();
    let refs = resolver(client, MockCoralogixApi::new());

    let alert = with_webhook_resource_ref(test_alert);
    let err = alert.extract_request(&refs).await.unwrap_err();
    assert_contains!(err.to_string(), "has not been synced");
}

#[rstest]
#[tokio::test]
async fn test_alert_extract_request_missing_resource_ref(test_alert: v1beta1::Alert) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_not_found(cx_object_path("v1alpha1", "outboundwebhooks", TEST_NAMESPACE, TEST_WEBHOOK_NAME))
        .build();
    let refs = resolver(client, MockCoralogixApi::new());

    let alert = with_webhook_resource_ref(test_alert);
    let err = alert.extract_request(&refs).await.unwrap_err();
    assert_contains!(err.to_string(), "not found");
}

#[rstest]
fn test_alert_validate(test_alert: v1beta1::Alert) {
    assert_ok!(test_alert.validate());
}

#[rstest]
fn test_alert_validate_conflicting_integration(mut test_alert: v1beta1::Alert) {
    let group = test_alert.spec.notification_group.as_mut().unwrap();
    group.webhooks.as_mut().unwrap()[0].integration.recipients = Some(vec!["oncall@example.com".into()]);
    let err = test_alert.validate().unwrap_err();
    assert_contains!(err.to_string(), "exactly one of");
}

#[rstest]
#[case::out_of_range("+99:99")]
#[case::past_fourteen_hours("+15:00")]
fn test_alert_validate_utc_offset(mut test_alert: v1beta1::Alert, #[case] offset: &str) {
    test_alert.spec.schedule.as_mut().unwrap().active_on.utc_offset = Some(offset.into());
    let err = test_alert.validate().unwrap_err();
    assert_contains!(err.to_string(), "spec.schedule.activeOn.utcOffset");
}

#[rstest]
#[tokio::test]
async fn test_lookup_backend_id_numeric() {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_list()
        .returning(|_| Ok(json!({"deployed": [{"id": 17, "name": TEST_WEBHOOK_NAME}]})));
    let refs = resolver(client, backend);

    let id = refs
        .lookup_backend_id(OUTGOING_WEBHOOKS.path, OUTGOING_WEBHOOKS_LIST_POINTER, "/name", "/id", TEST_WEBHOOK_NAME)
        .await
        .unwrap();
    assert_eq!(id, "17");
}

fn test_rule_group() -> v1alpha1::RuleGroup {
    cx_obj(
        "RuleGroup",
        json!({
            "name": "parsing",
            "applications": ["checkout"],
            "subgroups": [{
                "rules": [
                    {"name": "drop-health", "block": {
                        "sourceField": "text", "regex": "GET /healthz", "blockingAllMatchingBlocks": true,
                    }},
                    {"name": "keep-errors", "block": {
                        "sourceField": "text", "regex": "level=error", "blockingAllMatchingBlocks": false,
                    }},
                    {"name": "category", "jsonExtract": {"destinationField": "Category", "jsonKey": "kind"}},
                ],
            }],
        }),
    )
}

#[rstest]
#[tokio::test]
async fn test_rule_group_extract_request() {
    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let req = test_rule_group().extract_request(&refs).await.unwrap();
    let rules = &req.rule_subgroups[0].rules;

    assert_eq!(rules.iter().map(|r| r.order).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(matches!(rules[0].parameters, RuleParameters::BlockParameters(_)));
    assert!(matches!(rules[1].parameters, RuleParameters::AllowParameters(_)));
    assert!(matches!(rules[2].parameters, RuleParameters::JsonExtractParameters(_)));
    assert_eq!(rules[2].source_field, "text");
    assert_eq!(req.rule_matchers.len(), 1);
}

#[rstest]
fn test_rule_group_validate_two_rule_kinds() {
    let mut group = test_rule_group();
    group.spec.subgroups[0].rules[0].parse = Some(v1alpha1::ParseRule {
        source_field: "text".into(),
        destination_field: "text".into(),
        regex: "(?P<level>\\w+)".into(),
    });
    let err = group.validate().unwrap_err();
    assert_contains!(err.to_string(), "spec.subgroups[0].rules[0]: exactly one of");
}

#[rstest]
#[tokio::test]
async fn test_tco_logs_policies_extract_request() {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_list()
        .with(predicate::eq(RETENTIONS_PATH))
        .returning(|_| Ok(json!({"retentions": [{"id": "r-1", "name": "Default"}, {"id": "r-2", "name": "short"}]})));
    let refs = resolver(client, backend);

    let policies: v1alpha1::TCOLogsPolicies = cx_obj(
        "TCOLogsPolicies",
        json!({"policies": [{
            "name": "low-priority-debug",
            "priority": "low",
            "severities": ["debug", "verbose"],
            "applications": {"names": ["checkout", "cart"], "ruleType": "is"},
            "archiveRetention": {"backendRef": {"name": "short"}},
        }]}),
    );
    let req = policies.extract_request(&refs).await.unwrap();
    let policy = &req.policies[0];

    assert_eq!(req.source_type, SourceType::Logs);
    assert_eq!(policy.application_rule.as_ref().unwrap().name, "checkout,cart");
    assert_eq!(policy.archive_retention, Some(ArchiveRetentionModel { id: "r-2".into() }));
    assert_eq!(policy.log_rules.as_ref().unwrap().severities, vec![TcoSeverity::Debug, TcoSeverity::Verbose]);
    assert_none!(policy.span_rules);
}

#[rstest]
#[tokio::test]
async fn test_tco_traces_policies_extract_request() {
    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let policies: v1alpha1::TCOTracesPolicies = cx_obj(
        "TCOTracesPolicies",
        json!({"policies": [{
            "name": "drop-noisy-spans",
            "priority": "block",
            "services": {"names": ["frontend"], "ruleType": "startwith"},
            "tags": [{"name": "tags.http.method", "ruleType": "is", "values": ["GET", "HEAD"]}],
        }]}),
    );
    let req = policies.extract_request(&refs).await.unwrap();
    let span_rules = req.policies[0].span_rules.as_ref().unwrap();

    assert_eq!(req.source_type, SourceType::Spans);
    assert_eq!(span_rules.tag_rules[0].tag_value, "GET,HEAD");
    assert_eq!(span_rules.service_rule.as_ref().unwrap().rule_type_id, TcoRuleType::StartWith);
}

#[rstest]
fn test_tco_logs_policies_validate() {
    let policies: v1alpha1::TCOLogsPolicies = cx_obj(
        "TCOLogsPolicies",
        json!({"policies": [{"name": "", "priority": "high", "severities": []}]}),
    );
    let err = policies.validate().unwrap_err();
    assert_contains!(err.to_string(), "spec.policies[0].name: must not be empty");
    assert_contains!(err.to_string(), "spec.policies[0].severities: must not be empty");
}

#[rstest]
#[tokio::test]
#[case::quarter_hour(900, "Last 15 minutes")]
#[case::hour(3600, "Last hour")]
#[case::two_days(172800, "Last 2 days")]
#[case::odd(90, "Last 90 seconds")]
async fn test_view_quick_selection_caption(#[case] seconds: u32, #[case] caption: &str) {
    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let view: v1alpha1::View = cx_obj(
        "View",
        json!({"name": "errors", "timeSelection": {"quickSelection": {"seconds": seconds}}}),
    );
    let req = view.extract_request(&refs).await.unwrap();
    let TimeSelectionModel::QuickSelection(q) = req.time_selection else {
        panic!("expected a quick selection");
    };
    assert_eq!(q.caption, caption);
}

#[rstest]
#[tokio::test]
async fn test_view_folder_resource_ref(test_view_folder: v1alpha1::ViewFolder) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            cx_object_path("v1alpha1", "viewfolders", TEST_NAMESPACE, TEST_VIEW_FOLDER_NAME),
            serde_json::to_value(&test_view_folder).unwrap(),
        )
        .build();
    let refs = resolver(client, MockCoralogixApi::new());

    let view: v1alpha1::View = cx_obj(
        "View",
        json!({
            "name": "errors",
            "searchQuery": "level:error",
            "timeSelection": {"customSelection": {"fromTime": "2024-01-01T00:00:00Z", "toTime": "2024-01-02T00:00:00Z"}},
            "filters": [{"name": "severity", "selectedValues": ["ERROR", "CRITICAL"]}],
            "folder": {"resourceRef": {"name": TEST_VIEW_FOLDER_NAME}},
        }),
    );
    let req = view.extract_request(&refs).await.unwrap();

    assert_eq!(req.folder_id.as_deref(), Some(TEST_VIEW_FOLDER_ID));
    assert_eq!(req.filters.filters[0].selected_values.get("ERROR"), Some(&true));
    fake_apiserver.assert();
}

#[rstest]
fn test_view_validate_both_selections() {
    let view: v1alpha1::View = cx_obj(
        "View",
        json!({
            "name": "errors",
            "timeSelection": {
                "quickSelection": {"seconds": 0},
                "customSelection": {"fromTime": "2024-01-01T00:00:00Z", "toTime": "2024-01-02T00:00:00Z"},
            },
        }),
    );
    let err = view.validate().unwrap_err().to_string();
    assert_contains!(err, "spec.timeSelection: exactly one of quickSelection or customSelection must be set");
    assert_contains!(err, "must be greater than zero");
}

#[rstest]
#[case::zero(0.0, false)]
#[case::full(100.0, true)]
#[case::over(150.0, false)]
#[case::typical(99.5, true)]
fn test_slo_validate_target(#[case] target: f64, #[case] ok: bool) {
    let slo: v1alpha1::SLO = cx_obj(
        "SLO",
        json!({
            "name": "checkout-availability",
            "sloTimeFrame": "28d",
            "targetThresholdPercentage": target,
            "sli": {"requestBasedMetricSli": {
                "goodEvents": {"query": "sum(rate(http_requests_total{code!~\"5..\"}[5m]))"},
                "totalEvents": {"query": "sum(rate(http_requests_total[5m]))"},
            }},
        }),
    );
    assert_eq!(slo.validate().is_ok(), ok);
}

#[rstest]
fn test_slo_validate_no_sli() {
    let slo: v1alpha1::SLO = cx_obj(
        "SLO",
        json!({"name": "latency", "sloTimeFrame": "7d", "targetThresholdPercentage": 99.0, "sli": {}}),
    );
    let err = slo.validate().unwrap_err();
    assert_contains!(err.to_string(), "requestBasedMetricSli or windowBasedMetricSli");
}

#[rstest]
#[tokio::test]
async fn test_recording_rule_group_set_extract_request() {
    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let set: v1alpha1::RecordingRuleGroupSet = cx_obj(
        "RecordingRuleGroupSet",
        json!({"groups": [{
            "name": "http",
            "rules": [{"record": "job:http_requests:rate5m", "expr": "sum by (job) (rate(http_requests_total[5m]))"}],
        }]}),
    );
    let req = set.extract_request(&refs).await.unwrap();

    assert_eq!(req.name.as_deref(), Some("test-obj"));
    assert_eq!(req.groups[0].interval, 60);
    assert!(req.groups[0].rules[0].labels.is_empty());
}

#[rstest]
fn test_recording_rule_group_set_validate() {
    let set: v1alpha1::RecordingRuleGroupSet = cx_obj(
        "RecordingRuleGroupSet",
        json!({"groups": [{"name": "http", "intervalSeconds": 0, "rules": [{"record": "x", "expr": ""}]}]}),
    );
    let err = set.validate().unwrap_err().to_string();
    assert_contains!(err, "spec.groups[0].intervalSeconds: must be greater than zero");
    assert_contains!(err, "spec.groups[0].rules[0].expr: must not be empty");
}

#[rstest]
#[tokio::test]
async fn test_alert_scheduler_extract_request(mut test_alert: v1beta1::Alert) {
    use cx_client::models::alert_scheduler::*;

    test_alert.status = Some(RemoteStatus { id: Some(TEST_ALERT_ID.into()), ..Default::default() });
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            cx_object_path("v1beta1", "alerts", TEST_NAMESPACE, TEST_ALERT_NAME),
            serde_json::to_value(&test_alert).unwrap(),
        )
        .build();
    let refs = resolver(client, MockCoralogixApi::new());

    let scheduler: v1alpha1::AlertScheduler = cx_obj(
        "AlertScheduler",
        json!({
            "name": "weekend maintenance",
            "alerts": [{"name": TEST_ALERT_NAME}],
            "schedule": {
                "operation": "ActiveOnly",
                "recurring": {"dynamic": {
                    "repeatEvery": 1,
                    "frequency": {"weekly": {"days": ["Saturday", "Sunday"]}},
                    "timeFrame": {
                        "startTime": "2026-01-03T00:00:00.000",
                        "duration": {"forOver": 2, "frequency": "Days"},
                        "timezone": "UTC+00",
                    },
                }},
            },
        }),
    );
    let rule = scheduler.extract_request(&refs).await.unwrap().alert_scheduler_rule;

    assert!(rule.enabled);
    assert_eq!(
        rule.filter.which_alerts,
        WhichAlerts::AlertUniqueIds(AlertUniqueIds { value: vec![TEST_ALERT_ID.into()] })
    );
    assert_eq!(rule.schedule.schedule_operation, ScheduleOperation::Activate);
    let ScheduleType::Recurring(RecurringSchedule::Dynamic(dynamic)) = rule.schedule.schedule_type else {
        panic!("expected a dynamic recurring schedule");
    };
    assert_eq!(dynamic.frequency, SchedulerFrequency::Weekly(WeeklyFrequency { days: vec![6, 0] }));
    assert_eq!(
        dynamic.timeframe.until,
        TimeframeUntil::Duration(SchedulerDuration { for_over: 2, frequency: DurationFrequency::Day })
    );
    fake_apiserver.assert();
}

#[rstest]
fn test_alert_scheduler_validate() {
    let scheduler: v1alpha1::AlertScheduler = cx_obj(
        "AlertScheduler",
        json!({
            "name": "broken",
            "schedule": {
                "recurring": {"dynamic": {
                    "repeatEvery": 1,
                    "frequency": {"monthly": {"days": [1, 32]}},
                    "timeFrame": {"startTime": "2026-01-01T00:00:00.000", "timezone": "UTC+00"},
                }},
            },
        }),
    );
    let err = scheduler.validate().unwrap_err().to_string();

    assert_contains!(err, "spec: exactly one of metaLabels or alerts must be set");
    assert_contains!(err, "days must be between 1 and 31");
    assert_contains!(err, "spec.schedule.recurring.dynamic.timeFrame: exactly one of endTime or duration must be set");
}

fn config_map(name: &str, data: Value) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": {"name": name, "namespace": TEST_NAMESPACE},
        "data": data,
    })
}

fn config_map_path(name: &str) -> String {
    format!("/api/v1/namespaces/{TEST_NAMESPACE}/configmaps/{name}")
}

// A synced coralogix.com object of `kind`, as the fake apiserver would return it
fn synced_obj(kind: &str, name: &str, id: &str, spec: Value) -> Value {
    json!({
        "apiVersion": "coralogix.com/v1alpha1",
        "kind": kind,
        "metadata": {"name": name, "namespace": TEST_NAMESPACE, "generation": TEST_GENERATION},
        "spec": spec,
        "status": {"id": id, "observedGeneration": TEST_GENERATION},
    })
}

#[rstest]
#[tokio::test]
async fn test_dashboard_extract_request_from_config_map() {
    use cx_client::models::dashboard as models;

    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            config_map_path("dashboards"),
            config_map("dashboards", json!({"checkout.json": r#"{"name": "checkout", "layout": {}}"#})),
        )
        .build();
    let refs = resolver(client, MockCoralogixApi::new());

    let dashboard: v1alpha1::Dashboard = cx_obj(
        "Dashboard",
        json!({
            "configMapRef": {"name": "dashboards", "key": "checkout.json"},
            "folderRef": {"backendRef": {"path": "/team/ops/"}},
        }),
    );
    let req = dashboard.extract_request(&refs).await.unwrap();

    assert_eq!(req.dashboard, json!({"name": "checkout", "layout": {}}));
    assert_eq!(
        req.folder,
        Some(models::DashboardFolder::FolderPath(models::FolderPath { segments: vec!["team".into(), "ops".into()] }))
    );
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
#[case::missing_config_map(false, "not found")]
#[case::missing_key(true, "dashboards/checkout.json missing from configmap")]
async fn test_dashboard_extract_request_bad_config_map(#[case] exists: bool, #[case] expected: &str) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    if exists {
        fake_apiserver.handle_get(config_map_path("dashboards"), config_map("dashboards", json!({"other.json": "{}"})));
    } else {
        fake_apiserver.handle_not_found(config_map_path("dashboards"));
    }
    fake_apiserver.build();
    let refs = resolver(client, MockCoralogixApi::new());

    let dashboard: v1alpha1::Dashboard =
        cx_obj("Dashboard", json!({"configMapRef": {"name": "dashboards", "key": "checkout.json"}}));
    let err = dashboard.extract_request(&refs).await.unwrap_err();
    assert_contains!(err.to_string(), expected);
}

#[rstest]
#[case::json_and_config_map(
    json!({"json": "{}", "configMapRef": {"name": "dashboards", "key": "a.json"}}),
    "spec: exactly one of json or configMapRef must be set"
)]
#[case::invalid_json(json!({"json": "{not json"}), "spec.json: must be valid JSON")]
#[case::folder_id_and_path(
    json!({"json": "{}", "folderRef": {"backendRef": {"id": "abc", "path": "team/ops"}}}),
    "spec.folderRef.backendRef: exactly one of id or path must be set"
)]
fn test_dashboard_validate(#[case] spec: Value, #[case] expected: &str) {
    let dashboard: v1alpha1::Dashboard = cx_obj("Dashboard", spec);
    let err = dashboard.validate().unwrap_err().to_string();
    assert_eq!(err, expected);
}

#[rstest]
#[tokio::test]
async fn test_dashboards_folder_extract_request_parent_ref() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            cx_object_path("v1alpha1", "dashboardsfolders", TEST_NAMESPACE, "platform"),
            synced_obj("DashboardsFolder", "platform", "folder-parent", json!({"name": "platform"})),
        )
        .build();
    let refs = resolver(client, MockCoralogixApi::new());

    let folder: v1alpha1::DashboardsFolder =
        cx_obj("DashboardsFolder", json!({"name": "ops", "customId": "ops-1", "parentFolderRef": {"name": "platform"}}));
    let req = folder.extract_request(&refs).await.unwrap();

    assert_eq!(req.folder.id.as_deref(), Some("ops-1"));
    assert_eq!(req.folder.parent_id.as_deref(), Some("folder-parent"));
    fake_apiserver.assert();
}

#[rstest]
fn test_dashboards_folder_validate() {
    let folder: v1alpha1::DashboardsFolder = cx_obj(
        "DashboardsFolder",
        json!({"name": "", "parentFolderId": "abc", "parentFolderRef": {"name": "platform"}}),
    );
    let err = folder.validate().unwrap_err();
    assert_eq!(
        err.messages,
        vec![
            "spec.name: must not be empty".to_string(),
            "spec: at most one of parentFolderId or parentFolderRef may be set".to_string(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn test_events2metric_extract_request() {
    use cx_client::models::events2metric as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let e2m: v1alpha1::Events2Metric = cx_obj(
        "Events2Metric",
        json!({
            "name": "checkout latency",
            "permutationsLimit": 30000,
            "query": {"logs": {"lucene": "service:checkout", "severities": ["Error", "Critical"]}},
            "metricFields": [{
                "targetBaseMetricName": "checkout_duration",
                "sourceField": "duration",
                "aggregations": [
                    {"aggType": "Samples", "targetMetricName": "checkout_duration_max", "samplesType": "Max"},
                    {"aggType": "Histogram", "targetMetricName": "checkout_duration_hist", "buckets": [0.1, 1.0, 10.0]},
                    {"aggType": "Count", "targetMetricName": "checkout_count", "enabled": false},
                ],
            }],
            "metricLabels": [{"targetLabel": "region", "sourceField": "kubernetes.region"}],
        }),
    );
    let req = e2m.extract_request(&refs).await.unwrap().e2m;

    assert_eq!(req.type_, models::E2MType::LogsQuery);
    let models::E2MQuery::LogsQuery(query) = &req.query else {
        panic!("expected a logs query");
    };
    assert_eq!(query.severity_filters, vec![models::E2MSeverity::Error, models::E2MSeverity::Critical]);
    assert_is_empty!(query.applicationname_filters);

    let aggs = &req.metric_fields[0].aggregations;
    assert_eq!(aggs[0].samples, Some(models::E2MSamplesMetadata { sample_type: models::E2MSampleType::Max }));
    assert_eq!(aggs[1].histogram, Some(models::E2MHistogramMetadata { buckets: vec![0.1, 1.0, 10.0] }));
    assert_eq!(aggs[2].agg_type, models::E2MAggType::Count);
    assert!(!aggs[2].enabled);
    assert_eq!(req.metric_labels[0].target_label, "region");

    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body["type"], "E2M_TYPE_LOGS2METRICS");
    assert_some!(body.get("logsQuery"));
}

#[rstest]
fn test_events2metric_validate() {
    let e2m: v1alpha1::Events2Metric = cx_obj(
        "Events2Metric",
        json!({
            "name": "broken",
            "query": {"logs": {}, "spans": {}},
            "metricFields": [{
                "targetBaseMetricName": "x",
                "sourceField": "y",
                "aggregations": [
                    {"aggType": "Samples", "targetMetricName": "x_samples"},
                    {"aggType": "Histogram", "targetMetricName": "x_hist", "buckets": []},
                ],
            }],
        }),
    );
    let err = e2m.validate().unwrap_err();
    assert_eq!(
        err.messages,
        vec![
            "spec.query: exactly one of logs or spans must be set".to_string(),
            "spec.metricFields[0].aggregations[0]: samplesType is required for Samples aggregations".to_string(),
            "spec.metricFields[0].aggregations[1]: buckets are required for Histogram aggregations".to_string(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn test_api_key_extract_request() {
    use cx_client::models::api_key as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let key: v1alpha1::ApiKey =
        cx_obj("ApiKey", json!({"name": "ingest", "owner": {"teamId": 7}, "presets": ["Ingestion"]}));
    let req = key.extract_request(&refs).await.unwrap();

    assert_eq!(req.owner, models::ApiKeyOwner::TeamId(7));
    assert!(req.is_active);
    assert!(!req.hashed);
    assert_eq!(req.key_permissions.presets, vec!["Ingestion".to_string()]);
    assert_is_empty!(req.key_permissions.permissions);
}

#[rstest]
fn test_api_key_validate() {
    let key: v1alpha1::ApiKey =
        cx_obj("ApiKey", json!({"name": "ingest", "owner": {"userId": "u-1", "teamId": 7}, "permissions": []}));
    let err = key.validate().unwrap_err().to_string();
    assert_eq!(
        err,
        "spec.owner: exactly one of userId or teamId must be set; spec: at least one preset or permission must be set"
    );
}

#[rstest]
#[tokio::test]
async fn test_connector_extract_request() {
    use cx_client::models::notifications as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let connector: v1alpha1::Connector = cx_obj(
        "Connector",
        json!({
            "name": "oncall",
            "type": "PagerDuty",
            "connectorConfig": {"fields": [{"fieldName": "integrationKey", "value": "abc123"}]},
            "configOverrides": [{"fields": [{"fieldName": "summary", "template": "{{ alert.name }}"}]}],
        }),
    );
    let req = connector.extract_request(&refs).await.unwrap().connector;

    assert_eq!(req.type_, models::ConnectorType::PagerDuty);
    assert_eq!(req.connector_config.fields[0].value, "abc123");
    assert_eq!(req.config_overrides[0].entity_type, models::EntityType::Alerts);
    assert_eq!(req.config_overrides[0].fields[0].template, "{{ alert.name }}");
}

#[rstest]
fn test_connector_validate() {
    let connector: v1alpha1::Connector =
        cx_obj("Connector", json!({"name": "", "type": "Slack", "connectorConfig": {"fields": []}}));
    assert_eq!(connector.validate().unwrap_err().to_string(), "spec.name: must not be empty");
}

fn preset_spec(condition_type: Value) -> Value {
    json!({
        "name": "short",
        "connectorType": "Slack",
        "parentId": "preset_system_slack_alerts_basic",
        "configOverrides": [{
            "conditionType": condition_type,
            "messageConfig": {"fields": [{"fieldName": "title", "template": "{{ alert.name }}"}]},
        }],
    })
}

#[rstest]
#[tokio::test]
async fn test_preset_extract_request() {
    use cx_client::models::notifications as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let preset: v1alpha1::Preset =
        cx_obj("Preset", preset_spec(json!({"matchEntityTypeAndSubType": {"entitySubType": "logsImmediateTriggered"}})));
    let req = preset.extract_request(&refs).await.unwrap().preset;

    assert_eq!(req.connector_type, models::ConnectorType::Slack);
    assert_eq!(req.parent_id.as_deref(), Some("preset_system_slack_alerts_basic"));
    assert_eq!(
        req.config_overrides[0].condition_type,
        models::ConditionTypeModel::MatchEntityTypeAndSubType(models::MatchEntityTypeAndSubTypeModel {
            entity_sub_type: "logsImmediateTriggered".into(),
        })
    );
}

#[rstest]
#[case::neither(json!({}))]
#[case::both(json!({"matchEntityType": {}, "matchEntityTypeAndSubType": {"entitySubType": "x"}}))]
fn test_preset_validate_condition_type(#[case] condition_type: Value) {
    let preset: v1alpha1::Preset = cx_obj("Preset", preset_spec(condition_type));
    assert_eq!(
        preset.validate().unwrap_err().to_string(),
        "spec.configOverrides[0].conditionType: exactly one of matchEntityType or matchEntityTypeAndSubType must be set"
    );
}

#[rstest]
#[tokio::test]
async fn test_global_router_extract_request() {
    use cx_client::models::notifications as models;

    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            cx_object_path("v1alpha1", "presets", TEST_NAMESPACE, "short"),
            synced_obj("Preset", "short", "preset-9", preset_spec(json!({"matchEntityType": {}}))),
        )
        .build();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_list()
        .with(predicate::eq(models::CONNECTORS.path))
        .returning(|_| Ok(json!({"connectors": [{"id": "conn-1", "name": "slack-oncall"}]})));
    let refs = resolver(client, backend);

    let router: v1alpha1::GlobalRouter = cx_obj(
        "GlobalRouter",
        json!({
            "name": "router",
            "rules": [{
                "name": "critical",
                "condition": "alertDef.priority == \"P1\"",
                "targets": [{
                    "connector": {"backendRef": {"name": "slack-oncall"}},
                    "preset": {"resourceRef": {"name": "short"}},
                    "customDetails": {"team": "payments"},
                }],
            }],
            "fallback": [{"connector": {"backendRef": {"id": "conn-default"}}}],
        }),
    );
    let req = router.extract_request(&refs).await.unwrap().router;

    let target = &req.rules[0].targets[0];
    assert_eq!(target.connector_id, "conn-1");
    assert_eq!(target.preset_id.as_deref(), Some("preset-9"));
    assert_eq!(target.custom_details.get("team").map(String::as_str), Some("payments"));
    assert_eq!(req.fallback[0].connector_id, "conn-default");
    assert_none!(req.fallback[0].preset_id);
    fake_apiserver.assert();
}

#[rstest]
fn test_global_router_validate() {
    let router: v1alpha1::GlobalRouter = cx_obj(
        "GlobalRouter",
        json!({
            "name": "router",
            "rules": [{
                "name": "critical",
                "condition": "true",
                "targets": [{
                    "connector": {"backendRef": {"id": "conn-1"}, "resourceRef": {"name": "oncall"}},
                    "preset": {"backendRef": {"id": "p-1", "name": "short"}},
                }],
            }],
            "fallback": [{"connector": {}}],
        }),
    );
    let err = router.validate().unwrap_err();
    assert_eq!(
        err.messages,
        vec![
            "spec.rules[0].targets[0].connector: exactly one of backendRef or resourceRef must be set".to_string(),
            "spec.rules[0].targets[0].preset.backendRef: exactly one of id or name must be set".to_string(),
            "spec.fallback[0].connector: exactly one of backendRef or resourceRef must be set".to_string(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn test_custom_enrichment_extract_request() {
    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let enrichment: v1alpha1::CustomEnrichment =
        cx_obj("CustomEnrichment", json!({"name": "owners", "csv": "service,owner\ncheckout,payments\n"}));
    let req = enrichment.extract_request(&refs).await.unwrap();

    assert_eq!(req.file.name, "owners.csv");
    assert_eq!(req.file.extension, "csv");
    assert!(req.file.text_data.starts_with("service,owner"));
}

#[rstest]
fn test_custom_enrichment_validate() {
    let enrichment: v1alpha1::CustomEnrichment = cx_obj("CustomEnrichment", json!({"name": "owners"}));
    assert_eq!(
        enrichment.validate().unwrap_err().to_string(),
        "spec: exactly one of csv or configMapRef must be set"
    );
}

#[rstest]
#[tokio::test]
#[case::synced("42", Ok(42))]
#[case::not_numeric("owners-abc", Err("expected a numeric id for owners, got owners-abc"))]
async fn test_enrichment_custom_enrichment_ref(#[case] remote_id: &str, #[case] expected: Result<u32, &str>) {
    use cx_client::models::enrichment as models;

    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            cx_object_path("v1alpha1", "customenrichments", TEST_NAMESPACE, "owners"),
            synced_obj("CustomEnrichment", "owners", remote_id, json!({"name": "owners", "csv": "a,b\n"})),
        )
        .build();
    let refs = resolver(client, MockCoralogixApi::new());

    let enrichment: v1alpha1::Enrichment = cx_obj(
        "Enrichment",
        json!({"enrichments": [
            {"fieldName": "client.ip", "type": {"geoIp": {}}},
            {"fieldName": "service", "selectedColumns": ["owner"], "type": {"customEnrichment": {"resourceRef": {"name": "owners"}}}},
        ]}),
    );
    let res = enrichment.extract_request(&refs).await;

    match expected {
        Ok(id) => {
            let req = res.unwrap();
            assert_eq!(
                req.request_enrichments[0].enrichment_type,
                models::EnrichmentKind::GeoIp(models::GeoIpType { with_asn: false })
            );
            assert_eq!(
                req.request_enrichments[1].enrichment_type,
                models::EnrichmentKind::CustomEnrichment(models::CustomEnrichmentType { id })
            );
            assert_eq!(req.request_enrichments[1].selected_columns, vec!["owner".to_string()]);
        },
        Err(msg) => assert_contains!(res.unwrap_err().to_string(), msg),
    }
    fake_apiserver.assert();
}

#[rstest]
fn test_enrichment_validate() {
    let enrichment: v1alpha1::Enrichment = cx_obj(
        "Enrichment",
        json!({"enrichments": [
            {"fieldName": "client.ip", "type": {"geoIp": {}, "suspiciousIp": {}}},
            {"fieldName": "service", "type": {"customEnrichment": {"id": 4, "resourceRef": {"name": "owners"}}}},
        ]}),
    );
    let err = enrichment.validate().unwrap_err();
    assert_eq!(
        err.messages,
        vec![
            "spec.enrichments[0].type: exactly one of geoIp, suspiciousIp, aws or customEnrichment must be set".to_string(),
            "spec.enrichments[1].type.customEnrichment: exactly one of id or resourceRef must be set".to_string(),
        ]
    );

    let empty: v1alpha1::Enrichment = cx_obj("Enrichment", json!({"enrichments": []}));
    assert_eq!(empty.validate().unwrap_err().to_string(), "spec.enrichments: must not be empty");
}

#[rstest]
#[tokio::test]
async fn test_outbound_webhook_extract_request_generic() {
    use cx_client::models::outbound_webhook as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let webhook: v1alpha1::OutboundWebhook = cx_obj(
        "OutboundWebhook",
        json!({
            "name": "ticketing",
            "outboundWebhookType": {"genericWebhook": {
                "url": "https://tickets.example.com/hook",
                "method": "Put",
                "headers": {"Authorization": "Bearer abc"},
            }},
        }),
    );
    let req = webhook.extract_request(&refs).await.unwrap().data;

    assert_eq!(req.type_, models::WebhookType::Generic);
    assert_eq!(req.url.as_deref(), Some("https://tickets.example.com/hook"));
    let models::WebhookConfig::GenericWebhook(config) = &req.config else {
        panic!("expected a generic webhook config");
    };
    assert_eq!(config.method, models::GenericWebhookMethod::Put);
    assert_eq!(config.headers.get("Authorization").map(String::as_str), Some("Bearer abc"));
}

#[rstest]
#[tokio::test]
async fn test_outbound_webhook_extract_request_without_url() {
    use cx_client::models::outbound_webhook as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let webhook: v1alpha1::OutboundWebhook = cx_obj(
        "OutboundWebhook",
        json!({"name": "pager", "outboundWebhookType": {"pagerDuty": {"serviceKey": "svc-key"}}}),
    );
    let req = webhook.extract_request(&refs).await.unwrap().data;

    assert_eq!(req.type_, models::WebhookType::PagerDuty);
    assert_none!(req.url);
}

#[rstest]
#[case::none(json!({}))]
#[case::two(json!({"slack": {"url": "https://hooks.slack.com/x"}, "opsgenie": {"url": "https://api.opsgenie.com"}}))]
fn test_outbound_webhook_validate_type(#[case] webhook_type: Value) {
    let webhook: v1alpha1::OutboundWebhook =
        cx_obj("OutboundWebhook", json!({"name": "hook", "outboundWebhookType": webhook_type}));
    let err = webhook.validate().unwrap_err().to_string();
    assert!(err.starts_with("spec.outboundWebhookType: exactly one of genericWebhook, slack, pagerDuty"));
}

#[rstest]
#[tokio::test]
async fn test_ip_access_extract_request() {
    use cx_client::models::ip_access as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let access: v1alpha1::IPAccess = cx_obj(
        "IPAccess",
        json!({
            "enableCoralogixCustomerSupportAccess": "Disabled",
            "ipAccess": [{"name": "office", "ipRange": "10.0.0.0/8"}, {"ipRange": "192.168.1.1/32", "enabled": false}],
        }),
    );
    let req = access.extract_request(&refs).await.unwrap();

    assert_eq!(req.enable_coralogix_customer_support_access, models::CoralogixCustomerSupportAccess::Disabled);
    assert_eq!(
        req.ip_access,
        vec![
            models::IpAccessModel { name: Some("office".into()), ip_range: "10.0.0.0/8".into(), enabled: true },
            models::IpAccessModel { name: None, ip_range: "192.168.1.1/32".into(), enabled: false },
        ]
    );
}

#[rstest]
fn test_ip_access_validate() {
    let access: v1alpha1::IPAccess = cx_obj("IPAccess", json!({"ipAccess": [{"ipRange": "10.0.0.0/8"}, {"ipRange": ""}]}));
    assert_eq!(access.validate().unwrap_err().to_string(), "spec.ipAccess[1].ipRange: must not be empty");
}

#[rstest]
#[tokio::test]
async fn test_archive_logs_target_extract_request() {
    use cx_client::models::archive as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let target: v1alpha1::ArchiveLogsTarget =
        cx_obj("ArchiveLogsTarget", json!({"s3Target": {"bucketName": "cx-archive", "region": "eu-west-1"}}));
    let req = target.extract_request(&refs).await.unwrap();

    assert!(req.is_active);
    assert_eq!(
        req.target,
        models::ArchiveTarget::S3(models::S3TargetSpec { bucket: "cx-archive".into(), region: "eu-west-1".into() })
    );
}

#[rstest]
fn test_archive_metrics_target_validate() {
    let target: v1alpha1::ArchiveMetricsTarget = cx_obj(
        "ArchiveMetricsTarget",
        json!({
            "s3Target": {"bucketName": "cx-metrics", "region": "eu-west-1"},
            "ibmCosTarget": {"bucketCrn": "crn:v1:bucket", "endpoint": "https://s3.eu.cloud-object-storage.appdomain.cloud"},
            "retentionDays": 0,
        }),
    );
    let err = target.validate().unwrap_err();
    assert_eq!(
        err.messages,
        vec![
            "spec: exactly one of s3Target or ibmCosTarget must be set".to_string(),
            "spec.retentionDays: must be greater than zero".to_string(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn test_group_extract_request() {
    use cx_client::models::iam as models;

    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_get(
            cx_object_path("v1alpha1", "customroles", TEST_NAMESPACE, "auditor"),
            synced_obj(
                "CustomRole",
                "auditor",
                "17",
                json!({"name": "auditor", "description": "", "parentRoleName": "Viewer", "permissions": ["logs.read"]}),
            ),
        )
        .handle_get(
            cx_object_path("v1alpha1", "scopes", TEST_NAMESPACE, "payments-only"),
            synced_obj("Scope", "payments-only", "scope-3", json!({"name": "payments", "defaultExpression": "<v1>true", "filters": []})),
        )
        .build();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_list()
        .with(predicate::eq(models::USERS_PATH))
        .returning(|_| Ok(json!({"users": [{"id": "user-1", "userName": "jo@example.com"}]})));
    let refs = resolver(client, backend);

    let group: v1alpha1::Group = cx_obj(
        "Group",
        json!({
            "name": "auditors",
            "members": [{"userName": "jo@example.com"}],
            "customRoles": [{"name": "auditor"}],
            "scope": {"name": "payments-only"},
        }),
    );
    let req = group.extract_request(&refs).await.unwrap();

    assert_eq!(req.user_ids, vec!["user-1".to_string()]);
    assert_eq!(req.role_ids, vec![17]);
    assert_eq!(req.scope_id.as_deref(), Some("scope-3"));
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_group_extract_request_unknown_member() {
    use cx_client::models::iam as models;

    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_list()
        .with(predicate::eq(models::USERS_PATH))
        .returning(|_| Ok(json!({"users": []})));
    let refs = resolver(client, backend);

    let group: v1alpha1::Group =
        cx_obj("Group", json!({"name": "auditors", "members": [{"userName": "ghost@example.com"}], "customRoles": []}));
    let err = group.extract_request(&refs).await.unwrap_err();
    assert_contains!(err.to_string(), "no object named ghost@example.com");
}

#[rstest]
#[tokio::test]
async fn test_scope_extract_request() {
    use cx_client::models::iam as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let scope: v1alpha1::Scope = cx_obj(
        "Scope",
        json!({
            "name": "payments",
            "defaultExpression": "<v1>false",
            "filters": [{"entityType": "Logs", "expression": "<v1>(subsystemName == 'payments')"}],
        }),
    );
    let req = scope.extract_request(&refs).await.unwrap();

    assert_eq!(req.display_name, "payments");
    assert_eq!(req.filters[0].entity_type, models::ScopeEntityType::Logs);
}

#[rstest]
#[case::group(cx_obj::<v1alpha1::Group>("Group", json!({"name": "", "customRoles": []})).validate(), "spec.name: must not be empty")]
#[case::scope(
    cx_obj::<v1alpha1::Scope>("Scope", json!({"name": "s", "defaultExpression": "", "filters": []})).validate(),
    "spec.defaultExpression: must not be empty"
)]
#[case::team(
    cx_obj::<v1alpha1::Team>("Team", json!({"name": "payments", "teamAdminsEmail": [], "dailyQuota": 0.0})).validate(),
    "spec.dailyQuota: must be greater than zero"
)]
#[case::custom_role(
    cx_obj::<v1alpha1::CustomRole>(
        "CustomRole",
        json!({"name": "r", "description": "", "parentRoleName": "", "permissions": []})
    ).validate(),
    "spec.parentRoleName: must not be empty; spec.permissions: must not be empty"
)]
#[case::data_set(
    cx_obj::<v1alpha1::DataSet>("DataSet", json!({"name": "d", "query": "  "})).validate(),
    "spec.query: must not be empty"
)]
#[case::extension(
    cx_obj::<v1alpha1::Extension>("Extension", json!({"id": "AWSLambda", "version": "", "itemIds": []})).validate(),
    "spec.version: must not be empty"
)]
fn test_simple_kinds_validate(#[case] res: Result<(), ValidationError>, #[case] expected: &str) {
    assert_eq!(res.unwrap_err().to_string(), expected);
}

#[rstest]
#[tokio::test]
async fn test_team_extract_request() {
    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let team: v1alpha1::Team =
        cx_obj("Team", json!({"name": "payments", "teamAdminsEmail": ["lead@example.com"], "dailyQuota": 2.5}));
    let req = team.extract_request(&refs).await.unwrap();

    assert_eq!(req.team_name, "payments");
    assert_eq!(req.daily_quota, Some(2.5));
}

#[rstest]
#[tokio::test]
async fn test_data_set_and_extension_extract_request() {
    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let data_set: v1alpha1::DataSet =
        cx_obj("DataSet", json!({"name": "errors", "query": "source logs | filter $m.severity == ERROR", "retentionDays": 30}));
    let req = data_set.extract_request(&refs).await.unwrap();
    assert_eq!(req.retention_days, Some(30));
    assert_eq!(req.query, "source logs | filter $m.severity == ERROR");

    let extension: v1alpha1::Extension =
        cx_obj("Extension", json!({"id": "AWSLambda", "version": "1.0.1", "itemIds": ["dash-1", "alert-2"]}));
    let req = extension.extract_request(&refs).await.unwrap();
    assert_eq!(req.item_ids, vec!["dash-1".to_string(), "alert-2".to_string()]);
    assert_is_empty!(req.applications);
}

#[rstest]
#[tokio::test]
async fn test_integration_extract_request() {
    use cx_client::models::integration as models;

    let (_, client) = make_fake_apiserver();
    let refs = resolver(client, MockCoralogixApi::new());

    let integration: v1alpha1::Integration = cx_obj(
        "Integration",
        json!({
            "integrationKey": "aws-metrics-collector",
            "version": "0.1.0",
            "parameters": {
                "ApplicationName": "cxsdk",
                "IntegrationName": "metrics",
                "EnableSpotInstances": true,
                "PollingIntervalSeconds": 300,
                "Regions": ["eu-west-1", "us-east-1"],
                "WithTags": {"env": "prod"},
            },
        }),
    );
    let req = integration.extract_request(&refs).await.unwrap().metadata;
    let param = |key: &str| req.parameters.iter().find(|p| p.key == key).map(|p| p.value.clone()).unwrap();

    assert_eq!(req.parameters.len(), 6);
    assert_eq!(param("ApplicationName"), models::ParameterValue::StringValue("cxsdk".into()));
    assert_eq!(param("EnableSpotInstances"), models::ParameterValue::BooleanValue(true));
    assert_eq!(param("PollingIntervalSeconds"), models::ParameterValue::NumericValue(300.0));
    assert_eq!(param("Regions"), models::ParameterValue::StringList(vec!["eu-west-1".into(), "us-east-1".into()]));
    assert_eq!(param("WithTags"), models::ParameterValue::JsonValue(json!({"env": "prod"})));
}

#[rstest]
fn test_integration_validate() {
    let integration: v1alpha1::Integration =
        cx_obj("Integration", json!({"integrationKey": "", "version": "0.1.0", "parameters": {"Region": null}}));
    let err = integration.validate().unwrap_err();
    assert_eq!(
        err.messages,
        vec!["spec.integrationKey: must not be empty".to_string(), "spec.parameters.Region: must not be null".to_string()]
    );
}
