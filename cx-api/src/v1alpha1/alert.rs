use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

// The v1alpha1 alert model is deprecated; objects written against it are converted to
// v1beta1 (the storage version) by the conversion webhook and are never reconciled directly.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "Alert", namespaced)]
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
    pub active: bool,
    pub severity: AlertSeverity,
    pub labels: Option<BTreeMap<String, String>>,
    pub notification_groups: Option<Vec<NotificationGroup>>,
    pub show_in_insight: Option<ShowInInsight>,
    pub scheduling: Option<Scheduling>,
    pub alert_type: AlertType,
    pub payload_filters: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum AlertSeverity {
    #[default]
    Info,
    Warning,
    Critical,
    Error,
    Low,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum NotifyOn {
    #[default]
    TriggeredOnly,
    TriggeredAndResolved,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum Day {
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
pub struct NotificationGroup {
    pub group_by_fields: Option<Vec<String>>,
    pub notifications: Option<Vec<Notification>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub retriggering_period_minutes: u32,
    #[serde(default)]
    pub notify_on: NotifyOn,
    pub integration_name: Option<String>,
    pub email_recipients: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowInInsight {
    pub retriggering_period_minutes: u32,
    #[serde(default)]
    pub notify_on: NotifyOn,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheduling {
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    pub days_enabled: Vec<Day>,
    pub start_time: String,
    pub end_time: String,
}

fn default_time_zone() -> String {
    "UTC+00".into()
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertType {
    pub standard: Option<Standard>,
    pub ratio: Option<Ratio>,
    pub new_value: Option<NewValue>,
    pub unique_count: Option<UniqueCount>,
    pub time_relative: Option<TimeRelative>,
    pub metric: Option<Metric>,
    pub tracing: Option<Tracing>,
    pub flow: Option<Flow>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum FiltersLogSeverity {
    Debug,
    Verbose,
    Info,
    Warning,
    Critical,
    Error,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub search_query: Option<String>,
    pub severities: Option<Vec<FiltersLogSeverity>>,
    pub applications: Option<Vec<String>>,
    pub subsystems: Option<Vec<String>>,
    pub alias: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum TimeWindow {
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    TwentyMinutes,
    ThirtyMinutes,
    Hour,
    TwoHours,
    FourHours,
    SixHours,
    TwelveHours,
    TwentyFourHours,
    ThirtySixHours,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum AutoRetireRatio {
    Never,
    FiveMinutes,
    TenMinutes,
    Hour,
    TwoHours,
    SixHours,
    TwelveHours,
    TwentyFourHours,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageUndetectedValues {
    #[serde(default = "default_true")]
    pub enable_triggering_on_undetected_values: bool,
    pub auto_retire_ratio: Option<AutoRetireRatio>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum StandardAlertWhen {
    #[default]
    Immediately,
    More,
    Less,
    MoreThanUsual,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standard {
    pub filters: Option<Filters>,
    pub conditions: StandardConditions,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardConditions {
    pub alert_when: StandardAlertWhen,
    pub threshold: Option<u32>,
    pub time_window: Option<TimeWindow>,
    pub group_by: Option<Vec<String>>,
    pub manage_undetected_values: Option<ManageUndetectedValues>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum RatioAlertWhen {
    #[default]
    More,
    Less,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum GroupByFor {
    Q1,
    Q2,
    Both,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    pub query1_filters: Filters,
    pub query2_filters: Filters,
    pub conditions: RatioConditions,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioConditions {
    pub alert_when: RatioAlertWhen,
    pub ratio: f64,
    pub ignore_infinity: Option<bool>,
    pub time_window: TimeWindow,
    pub group_by: Option<Vec<String>>,
    pub group_by_for: Option<GroupByFor>,
    pub manage_undetected_values: Option<ManageUndetectedValues>,
}

impl Default for RatioConditions {
    fn default() -> Self {
        RatioConditions {
            alert_when: RatioAlertWhen::More,
            ratio: 0.0,
            ignore_infinity: None,
            time_window: TimeWindow::FiveMinutes,
            group_by: None,
            group_by_for: None,
            manage_undetected_values: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum NewValueTimeWindow {
    TwelveHours,
    TwentyFourHours,
    FortyEightHours,
    SeventyTwoHours,
    Week,
    Month,
    TwoMonths,
    ThreeMonths,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewValue {
    pub filters: Option<Filters>,
    pub conditions: NewValueConditions,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewValueConditions {
    pub key: String,
    pub time_window: NewValueTimeWindow,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum UniqueValueTimeWindow {
    Minute,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    TwentyMinutes,
    ThirtyMinutes,
    Hour,
    TwoHours,
    FourHours,
    SixHours,
    TwelveHours,
    TwentyFourHours,
    ThirtySixHours,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueCount {
    pub filters: Option<Filters>,
    pub conditions: UniqueCountConditions,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueCountConditions {
    pub key: String,
    pub max_unique_values: u64,
    pub time_window: UniqueValueTimeWindow,
    pub group_by: Option<String>,
    pub max_unique_values_for_group_by: Option<u64>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum RelativeTimeWindow {
    PreviousHour,
    SameHourYesterday,
    SameHourLastWeek,
    Yesterday,
    SameDayLastWeek,
    SameDayLastMonth,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRelative {
    pub filters: Option<Filters>,
    pub conditions: TimeRelativeConditions,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRelativeConditions {
    pub alert_when: RatioAlertWhen,
    pub threshold: f64,
    pub time_window: RelativeTimeWindow,
    pub ignore_infinity: Option<bool>,
    pub group_by: Option<Vec<String>>,
    pub manage_undetected_values: Option<ManageUndetectedValues>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub lucene: Option<Lucene>,
    pub promql: Option<Promql>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum MetricTimeWindow {
    Minute,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    TwentyMinutes,
    ThirtyMinutes,
    Hour,
    TwoHours,
    FourHours,
    SixHours,
    TwelveHours,
    TwentyFourHours,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum ArithmeticOperator {
    Avg,
    Min,
    Max,
    Sum,
    Count,
    Percentile,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lucene {
    pub search_query: Option<String>,
    pub conditions: LuceneConditions,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuceneConditions {
    pub metric_field: String,
    pub arithmetic_operator: ArithmeticOperator,
    pub arithmetic_operator_modifier: Option<u32>,
    pub alert_when: RatioAlertWhen,
    pub threshold: f64,
    pub sample_threshold_percentage: u32,
    pub time_window: MetricTimeWindow,
    pub group_by: Option<Vec<String>>,
    pub replace_missing_value_with_zero: Option<bool>,
    pub min_non_null_values_percentage: Option<u32>,
    pub manage_undetected_values: Option<ManageUndetectedValues>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum PromqlAlertWhen {
    More,
    Less,
    MoreThanUsual,
    LessThanUsual,
    MoreThanOrEqual,
    LessThanOrEqual,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Promql {
    pub search_query: String,
    pub conditions: PromqlConditions,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromqlConditions {
    pub alert_when: PromqlAlertWhen,
    pub threshold: f64,
    pub sample_threshold_percentage: u32,
    pub time_window: MetricTimeWindow,
    pub replace_missing_value_with_zero: Option<bool>,
    pub min_non_null_values_percentage: Option<u32>,
    pub manage_undetected_values: Option<ManageUndetectedValues>,
    pub group_by: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum TracingAlertWhen {
    More,
    Immediately,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracing {
    pub filters: Option<TracingFilters>,
    pub conditions: TracingConditions,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingFilters {
    pub latency_threshold_milliseconds: Option<u64>,
    pub applications: Option<Vec<String>>,
    pub subsystems: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
    pub tag_filters: Option<Vec<TagFilter>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagFilter {
    pub field: String,
    pub values: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingConditions {
    pub alert_when: TracingAlertWhen,
    pub threshold: Option<u32>,
    pub time_window: Option<TimeWindow>,
    pub group_by: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum FlowOperator {
    #[default]
    And,
    Or,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub stages: Vec<FlowStage>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStage {
    pub time_window: Option<FlowStageTimeWindow>,
    pub groups: Vec<FlowStageGroup>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStageTimeWindow {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStageGroup {
    pub inner_flow_alerts: InnerFlowAlerts,
    #[serde(default)]
    pub next_operator: FlowOperator,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerFlowAlerts {
    #[serde(default)]
    pub operator: FlowOperator,
    pub alerts: Vec<InnerFlowAlert>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerFlowAlert {
    #[serde(default)]
    pub not: bool,
    pub user_alert_id: String,
}
