use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

/// Alert definition in Coralogix.  This is the storage version of the Alert kind; objects
/// submitted as v1alpha1 are converted to this shape by the conversion webhook.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1beta1", kind = "Alert", namespaced)]
#[kube(status = "RemoteStatus")]
#[kube(
    printcolumn = r#"{"name":"id", "type":"string", "description":"Coralogix alert id", "jsonPath":".status.id"}"#,
    printcolumn = r#"{"name":"synced", "type":"string", "jsonPath":".status.conditions[?(@.type=='RemoteSynced')].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct AlertSpec {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub priority: AlertPriority,
    pub group_by_keys: Option<Vec<String>>,
    pub incidents_settings: Option<IncidentsSettings>,
    pub notification_group: Option<NotificationGroup>,
    pub notification_group_excess: Option<Vec<NotificationGroup>>,
    pub entity_labels: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub phantom_mode: bool,
    pub schedule: Option<AlertSchedule>,
    pub notification_payload_filter: Option<Vec<String>>,
    pub type_definition: AlertTypeDefinition,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum AlertPriority {
    P1,
    P2,
    P3,
    P4,
    #[default]
    P5,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum NotifyOn {
    #[default]
    TriggeredOnly,
    TriggeredAndResolved,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetriggeringPeriod {
    pub minutes: u32,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentsSettings {
    #[serde(default)]
    pub notify_on: NotifyOn,
    pub retriggering_period: Option<RetriggeringPeriod>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationGroup {
    pub group_by_keys: Option<Vec<String>>,
    pub webhooks: Option<Vec<WebhookSettings>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSettings {
    pub retriggering_period: Option<RetriggeringPeriod>,
    #[serde(default)]
    pub notify_on: NotifyOn,
    pub integration: IntegrationType,
}

// Exactly one of the two must be set
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationType {
    pub integration_ref: Option<IntegrationRef>,
    pub recipients: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationRef {
    pub backend_ref: Option<BackendRef>,
    pub resource_ref: Option<ResourceRef>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSchedule {
    pub active_on: ActiveOn,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveOn {
    pub day_of_week: Vec<DayOfWeek>,
    pub start_time: String,
    pub end_time: String,
    // "+HH:MM" or "-HH:MM"
    pub utc_offset: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTypeDefinition {
    pub logs_immediate: Option<LogsImmediate>,
    pub logs_threshold: Option<LogsThreshold>,
    pub logs_ratio_threshold: Option<LogsRatioThreshold>,
    pub logs_time_relative_threshold: Option<LogsTimeRelativeThreshold>,
    pub metric_threshold: Option<MetricThreshold>,
    pub logs_new_value: Option<LogsNewValue>,
    pub logs_unique_count: Option<LogsUniqueCount>,
    pub tracing_immediate: Option<TracingImmediate>,
    pub tracing_threshold: Option<TracingThreshold>,
    pub flow: Option<Flow>,
    pub logs_anomaly: Option<LogsAnomaly>,
    pub metric_anomaly: Option<MetricAnomaly>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum LogSeverity {
    Debug,
    Verbose,
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum LogFilterOperationType {
    #[default]
    Is,
    Includes,
    EndsWith,
    StartsWith,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelFilterType {
    pub value: String,
    #[serde(default)]
    pub operation: LogFilterOperationType,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelFilters {
    pub application_name: Option<Vec<LabelFilterType>>,
    pub subsystem_name: Option<Vec<LabelFilterType>>,
    pub severity: Option<Vec<LogSeverity>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsSimpleFilter {
    pub lucene_query: Option<String>,
    pub label_filters: Option<LabelFilters>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsFilter {
    pub simple_filter: Option<LogsSimpleFilter>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum AutoRetireTimeframe {
    #[default]
    #[serde(rename = "never")]
    Never,
    #[serde(rename = "5m")]
    Minutes5,
    #[serde(rename = "10m")]
    Minutes10,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    Hours2,
    #[serde(rename = "6h")]
    Hours6,
    #[serde(rename = "12h")]
    Hours12,
    #[serde(rename = "24h")]
    Hours24,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UndetectedValuesManagement {
    #[serde(default)]
    pub trigger_undetected_values: bool,
    #[serde(default)]
    pub auto_retire_timeframe: AutoRetireTimeframe,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertOverride {
    pub priority: AlertPriority,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum LogsTimeWindow {
    #[default]
    #[serde(rename = "5m")]
    Minutes5,
    #[serde(rename = "10m")]
    Minutes10,
    #[serde(rename = "15m")]
    Minutes15,
    #[serde(rename = "20m")]
    Minutes20,
    #[serde(rename = "30m")]
    Minutes30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    Hours2,
    #[serde(rename = "4h")]
    Hours4,
    #[serde(rename = "6h")]
    Hours6,
    #[serde(rename = "12h")]
    Hours12,
    #[serde(rename = "24h")]
    Hours24,
    #[serde(rename = "36h")]
    Hours36,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum ThresholdConditionType {
    #[default]
    MoreThan,
    LessThan,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsImmediate {
    pub logs_filter: Option<LogsFilter>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsThreshold {
    pub logs_filter: Option<LogsFilter>,
    pub undetected_values_management: Option<UndetectedValuesManagement>,
    pub rules: Vec<LogsThresholdRule>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsThresholdRule {
    pub condition: LogsThresholdCondition,
    #[serde(rename = "override")]
    pub override_: Option<AlertOverride>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsThresholdCondition {
    pub threshold: f64,
    pub time_window: LogsTimeWindow,
    pub condition_type: ThresholdConditionType,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum LogsRatioGroupByFor {
    #[default]
    Both,
    NumeratorOnly,
    DenominatorOnly,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsRatioThreshold {
    pub numerator: Option<LogsFilter>,
    pub numerator_alias: String,
    pub denominator: Option<LogsFilter>,
    pub denominator_alias: String,
    pub rules: Vec<LogsRatioRule>,
    #[serde(default)]
    pub group_by_for: LogsRatioGroupByFor,
    #[serde(default)]
    pub ignore_infinity: bool,
    pub undetected_values_management: Option<UndetectedValuesManagement>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsRatioRule {
    pub condition: LogsRatioCondition,
    #[serde(rename = "override")]
    pub override_: Option<AlertOverride>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsRatioCondition {
    pub threshold: f64,
    pub time_window: LogsTimeWindow,
    pub condition_type: ThresholdConditionType,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum LogsTimeRelativeComparedTo {
    #[default]
    PreviousHour,
    SameHourYesterday,
    SameHourLastWeek,
    Yesterday,
    SameDayLastWeek,
    SameDayLastMonth,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsTimeRelativeThreshold {
    pub logs_filter: Option<LogsFilter>,
    pub rules: Vec<LogsTimeRelativeRule>,
    #[serde(default)]
    pub ignore_infinity: bool,
    pub undetected_values_management: Option<UndetectedValuesManagement>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsTimeRelativeRule {
    pub condition: LogsTimeRelativeCondition,
    #[serde(rename = "override")]
    pub override_: Option<AlertOverride>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsTimeRelativeCondition {
    pub threshold: f64,
    pub compared_to: LogsTimeRelativeComparedTo,
    pub condition_type: ThresholdConditionType,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum MetricTimeWindow {
    #[serde(rename = "1m")]
    Minutes1,
    #[default]
    #[serde(rename = "5m")]
    Minutes5,
    #[serde(rename = "10m")]
    Minutes10,
    #[serde(rename = "15m")]
    Minutes15,
    #[serde(rename = "20m")]
    Minutes20,
    #[serde(rename = "30m")]
    Minutes30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    Hours2,
    #[serde(rename = "4h")]
    Hours4,
    #[serde(rename = "6h")]
    Hours6,
    #[serde(rename = "12h")]
    Hours12,
    #[serde(rename = "24h")]
    Hours24,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum MetricThresholdConditionType {
    #[default]
    MoreThan,
    LessThan,
    MoreThanOrEquals,
    LessThanOrEquals,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilter {
    pub promql: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricMissingValues {
    pub replace_with_zero: Option<bool>,
    pub min_non_null_values_pct: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricThreshold {
    pub metric_filter: MetricFilter,
    pub rules: Vec<MetricThresholdRule>,
    pub undetected_values_management: Option<UndetectedValuesManagement>,
    pub missing_values: Option<MetricMissingValues>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricThresholdRule {
    pub condition: MetricThresholdCondition,
    #[serde(rename = "override")]
    pub override_: Option<AlertOverride>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricThresholdCondition {
    pub threshold: f64,
    pub for_over_pct: u32,
    pub of_the_last: MetricTimeWindow,
    pub condition_type: MetricThresholdConditionType,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum MetricAnomalyConditionType {
    #[default]
    MoreThanUsual,
    LessThanUsual,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAnomaly {
    pub metric_filter: MetricFilter,
    pub rules: Vec<MetricAnomalyRule>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAnomalyRule {
    pub condition: MetricAnomalyCondition,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAnomalyCondition {
    pub threshold: f64,
    pub for_over_pct: u32,
    pub of_the_last: MetricTimeWindow,
    pub min_non_null_values_pct: Option<u32>,
    pub condition_type: MetricAnomalyConditionType,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum LogsNewValueTimeWindow {
    #[default]
    #[serde(rename = "12h")]
    Hours12,
    #[serde(rename = "24h")]
    Hours24,
    #[serde(rename = "48h")]
    Hours48,
    #[serde(rename = "72h")]
    Hours72,
    #[serde(rename = "1w")]
    Week1,
    #[serde(rename = "1mo")]
    Month1,
    #[serde(rename = "2mo")]
    Months2,
    #[serde(rename = "3mo")]
    Months3,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsNewValue {
    pub logs_filter: Option<LogsFilter>,
    pub rules: Vec<LogsNewValueRule>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsNewValueRule {
    pub condition: LogsNewValueCondition,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsNewValueCondition {
    pub keypath_to_track: String,
    pub time_window: LogsNewValueTimeWindow,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum LogsUniqueCountTimeWindow {
    #[serde(rename = "1m")]
    Minute1,
    #[default]
    #[serde(rename = "5m")]
    Minutes5,
    #[serde(rename = "10m")]
    Minutes10,
    #[serde(rename = "15m")]
    Minutes15,
    #[serde(rename = "20m")]
    Minutes20,
    #[serde(rename = "30m")]
    Minutes30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    Hours2,
    #[serde(rename = "4h")]
    Hours4,
    #[serde(rename = "6h")]
    Hours6,
    #[serde(rename = "12h")]
    Hours12,
    #[serde(rename = "24h")]
    Hours24,
    #[serde(rename = "36h")]
    Hours36,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsUniqueCount {
    pub logs_filter: Option<LogsFilter>,
    pub rules: Vec<LogsUniqueCountRule>,
    pub unique_count_keypath: String,
    pub max_unique_count_per_group_by_key: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsUniqueCountRule {
    pub condition: LogsUniqueCountCondition,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsUniqueCountCondition {
    pub max_unique_count: u64,
    pub time_window: LogsUniqueCountTimeWindow,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingFilter {
    pub latency_threshold_ms: Option<u64>,
    pub tracing_label_filters: Option<TracingLabelFilters>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingLabelFilters {
    pub application_name: Option<Vec<TracingFilterType>>,
    pub subsystem_name: Option<Vec<TracingFilterType>>,
    pub service_name: Option<Vec<TracingFilterType>>,
    pub operation_name: Option<Vec<TracingFilterType>>,
    pub span_fields: Option<Vec<TracingSpanFieldsFilterType>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingFilterType {
    pub values: Vec<String>,
    #[serde(default)]
    pub operation: LogFilterOperationType,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingSpanFieldsFilterType {
    pub key: String,
    pub filter_type: TracingFilterType,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingImmediate {
    pub tracing_filter: Option<TracingFilter>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingThreshold {
    pub tracing_filter: Option<TracingFilter>,
    pub rules: Vec<TracingThresholdRule>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingThresholdRule {
    pub condition: TracingThresholdCondition,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingThresholdCondition {
    pub span_amount: f64,
    pub time_window: LogsTimeWindow,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsAnomaly {
    pub logs_filter: Option<LogsFilter>,
    pub rules: Vec<LogsAnomalyRule>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsAnomalyRule {
    pub condition: LogsAnomalyCondition,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsAnomalyCondition {
    pub minimum_threshold: f64,
    pub time_window: LogsTimeWindow,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum FlowStageGroupOperator {
    #[default]
    And,
    Or,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum FlowTimeframeType {
    #[default]
    Unspecified,
    UpTo,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub stages: Vec<FlowStage>,
    #[serde(default)]
    pub enforce_suppression: bool,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStage {
    pub flow_stages_groups: Vec<FlowStagesGroup>,
    #[serde(default)]
    pub timeframe_ms: u64,
    #[serde(default)]
    pub timeframe_type: FlowTimeframeType,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStagesGroup {
    pub alert_defs: Vec<FlowStagesGroupsAlertDefs>,
    #[serde(default)]
    pub next_op: FlowStageGroupOperator,
    #[serde(default)]
    pub alerts_op: FlowStageGroupOperator,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStagesGroupsAlertDefs {
    pub alert_ref: AlertRef,
    #[serde(default)]
    pub not: bool,
}

// Exactly one of the two must be set
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRef {
    pub backend_ref: Option<BackendRef>,
    pub resource_ref: Option<ResourceRef>,
}
