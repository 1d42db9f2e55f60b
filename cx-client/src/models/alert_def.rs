use std::collections::BTreeMap;

use serde::Serialize;

use crate::endpoint::Endpoint;

pub const ALERT_DEFS: Endpoint = Endpoint::crud("mgmt/openapi/latest/alerts/alert-defs/v3", "/alertDef/id");

wire_enum!(AlertDefPriority {
    P5OrUnspecified => "ALERT_DEF_PRIORITY_P5_OR_UNSPECIFIED",
    P4 => "ALERT_DEF_PRIORITY_P4",
    P3 => "ALERT_DEF_PRIORITY_P3",
    P2 => "ALERT_DEF_PRIORITY_P2",
    P1 => "ALERT_DEF_PRIORITY_P1",
});

wire_enum!(AlertDefType {
    LogsImmediateOrUnspecified => "ALERT_DEF_TYPE_LOGS_IMMEDIATE_OR_UNSPECIFIED",
    LogsThreshold => "ALERT_DEF_TYPE_LOGS_THRESHOLD",
    LogsAnomaly => "ALERT_DEF_TYPE_LOGS_ANOMALY",
    LogsRatioThreshold => "ALERT_DEF_TYPE_LOGS_RATIO_THRESHOLD",
    LogsNewValue => "ALERT_DEF_TYPE_LOGS_NEW_VALUE",
    LogsUniqueCount => "ALERT_DEF_TYPE_LOGS_UNIQUE_COUNT",
    LogsTimeRelativeThreshold => "ALERT_DEF_TYPE_LOGS_TIME_RELATIVE_THRESHOLD",
    MetricThreshold => "ALERT_DEF_TYPE_METRIC_THRESHOLD",
    MetricAnomaly => "ALERT_DEF_TYPE_METRIC_ANOMALY",
    TracingImmediate => "ALERT_DEF_TYPE_TRACING_IMMEDIATE",
    TracingThreshold => "ALERT_DEF_TYPE_TRACING_THRESHOLD",
    Flow => "ALERT_DEF_TYPE_FLOW",
});

wire_enum!(NotifyOn {
    TriggeredOnlyUnspecified => "NOTIFY_ON_TRIGGERED_ONLY_UNSPECIFIED",
    TriggeredAndResolved => "NOTIFY_ON_TRIGGERED_AND_RESOLVED",
});

wire_enum!(DayOfWeek {
    MondayOrUnspecified => "DAY_OF_WEEK_MONDAY_OR_UNSPECIFIED",
    Tuesday => "DAY_OF_WEEK_TUESDAY",
    Wednesday => "DAY_OF_WEEK_WEDNESDAY",
    Thursday => "DAY_OF_WEEK_THURSDAY",
    Friday => "DAY_OF_WEEK_FRIDAY",
    Saturday => "DAY_OF_WEEK_SATURDAY",
    Sunday => "DAY_OF_WEEK_SUNDAY",
});

wire_enum!(LogSeverity {
    VerboseUnspecified => "LOG_SEVERITY_VERBOSE_UNSPECIFIED",
    Debug => "LOG_SEVERITY_DEBUG",
    Info => "LOG_SEVERITY_INFO",
    Warning => "LOG_SEVERITY_WARNING",
    Error => "LOG_SEVERITY_ERROR",
    Critical => "LOG_SEVERITY_CRITICAL",
});

wire_enum!(LogFilterOperationType {
    IsOrUnspecified => "LOG_FILTER_OPERATION_TYPE_IS_OR_UNSPECIFIED",
    Includes => "LOG_FILTER_OPERATION_TYPE_INCLUDES",
    EndsWith => "LOG_FILTER_OPERATION_TYPE_ENDS_WITH",
    StartsWith => "LOG_FILTER_OPERATION_TYPE_STARTS_WITH",
});

wire_enum!(AutoRetireTimeframe {
    NeverOrUnspecified => "AUTO_RETIRE_TIMEFRAME_NEVER_OR_UNSPECIFIED",
    Minutes5 => "AUTO_RETIRE_TIMEFRAME_MINUTES_5",
    Minutes10 => "AUTO_RETIRE_TIMEFRAME_MINUTES_10",
    Hour1 => "AUTO_RETIRE_TIMEFRAME_HOUR_1",
    Hours2 => "AUTO_RETIRE_TIMEFRAME_HOURS_2",
    Hours6 => "AUTO_RETIRE_TIMEFRAME_HOURS_6",
    Hours12 => "AUTO_RETIRE_TIMEFRAME_HOURS_12",
    Hours24 => "AUTO_RETIRE_TIMEFRAME_HOURS_24",
});

wire_enum!(LogsTimeWindowValue {
    Minutes5OrUnspecified => "LOGS_TIME_WINDOW_VALUE_MINUTES_5_OR_UNSPECIFIED",
    Minutes10 => "LOGS_TIME_WINDOW_VALUE_MINUTES_10",
    Minutes15 => "LOGS_TIME_WINDOW_VALUE_MINUTES_15",
    Minutes20 => "LOGS_TIME_WINDOW_VALUE_MINUTES_20",
    Minutes30 => "LOGS_TIME_WINDOW_VALUE_MINUTES_30",
    Hour1 => "LOGS_TIME_WINDOW_VALUE_HOUR_1",
    Hours2 => "LOGS_TIME_WINDOW_VALUE_HOURS_2",
    Hours4 => "LOGS_TIME_WINDOW_VALUE_HOURS_4",
    Hours6 => "LOGS_TIME_WINDOW_VALUE_HOURS_6",
    Hours12 => "LOGS_TIME_WINDOW_VALUE_HOURS_12",
    Hours24 => "LOGS_TIME_WINDOW_VALUE_HOURS_24",
    Hours36 => "LOGS_TIME_WINDOW_VALUE_HOURS_36",
});

wire_enum!(LogsThresholdConditionType {
    MoreThanOrUnspecified => "LOGS_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED",
    LessThan => "LOGS_THRESHOLD_CONDITION_TYPE_LESS_THAN",
});

wire_enum!(LogsRatioConditionType {
    MoreThanOrUnspecified => "LOGS_RATIO_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED",
    LessThan => "LOGS_RATIO_CONDITION_TYPE_LESS_THAN",
});

wire_enum!(LogsRatioGroupByFor {
    BothOrUnspecified => "LOGS_RATIO_GROUP_BY_FOR_BOTH_OR_UNSPECIFIED",
    NumeratorOnly => "LOGS_RATIO_GROUP_BY_FOR_NUMERATOR_ONLY",
    DenumeratorOnly => "LOGS_RATIO_GROUP_BY_FOR_DENUMERATOR_ONLY",
});

wire_enum!(LogsTimeRelativeComparedTo {
    PreviousHourOrUnspecified => "LOGS_TIME_RELATIVE_COMPARED_TO_PREVIOUS_HOUR_OR_UNSPECIFIED",
    SameHourYesterday => "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_HOUR_YESTERDAY",
    SameHourLastWeek => "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_HOUR_LAST_WEEK",
    Yesterday => "LOGS_TIME_RELATIVE_COMPARED_TO_YESTERDAY",
    SameDayLastWeek => "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_DAY_LAST_WEEK",
    SameDayLastMonth => "LOGS_TIME_RELATIVE_COMPARED_TO_SAME_DAY_LAST_MONTH",
});

wire_enum!(LogsTimeRelativeConditionType {
    MoreThanOrUnspecified => "LOGS_TIME_RELATIVE_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED",
    LessThan => "LOGS_TIME_RELATIVE_CONDITION_TYPE_LESS_THAN",
});

wire_enum!(MetricTimeWindowValue {
    Minutes1OrUnspecified => "METRIC_TIME_WINDOW_VALUE_MINUTES_1_OR_UNSPECIFIED",
    Minutes5 => "METRIC_TIME_WINDOW_VALUE_MINUTES_5",
    Minutes10 => "METRIC_TIME_WINDOW_VALUE_MINUTES_10",
    Minutes15 => "METRIC_TIME_WINDOW_VALUE_MINUTES_15",
    Minutes20 => "METRIC_TIME_WINDOW_VALUE_MINUTES_20",
    Minutes30 => "METRIC_TIME_WINDOW_VALUE_MINUTES_30",
    Hour1 => "METRIC_TIME_WINDOW_VALUE_HOUR_1",
    Hours2 => "METRIC_TIME_WINDOW_VALUE_HOURS_2",
    Hours4 => "METRIC_TIME_WINDOW_VALUE_HOURS_4",
    Hours6 => "METRIC_TIME_WINDOW_VALUE_HOURS_6",
    Hours12 => "METRIC_TIME_WINDOW_VALUE_HOURS_12",
    Hours24 => "METRIC_TIME_WINDOW_VALUE_HOURS_24",
});

wire_enum!(MetricThresholdConditionType {
    MoreThanOrUnspecified => "METRIC_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_UNSPECIFIED",
    LessThan => "METRIC_THRESHOLD_CONDITION_TYPE_LESS_THAN",
    MoreThanOrEquals => "METRIC_THRESHOLD_CONDITION_TYPE_MORE_THAN_OR_EQUALS",
    LessThanOrEquals => "METRIC_THRESHOLD_CONDITION_TYPE_LESS_THAN_OR_EQUALS",
});

wire_enum!(MetricAnomalyConditionType {
    MoreThanUsualOrUnspecified => "METRIC_ANOMALY_CONDITION_TYPE_MORE_THAN_USUAL_OR_UNSPECIFIED",
    LessThanUsual => "METRIC_ANOMALY_CONDITION_TYPE_LESS_THAN_USUAL",
});

wire_enum!(LogsNewValueTimeWindowValue {
    Hours12OrUnspecified => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_12_OR_UNSPECIFIED",
    Hours24 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_24",
    Hours48 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_48",
    Hours72 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_HOURS_72",
    Week1 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_WEEK_1",
    Month1 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_MONTH_1",
    Months2 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_MONTHS_2",
    Months3 => "LOGS_NEW_VALUE_TIME_WINDOW_VALUE_MONTHS_3",
});

wire_enum!(LogsUniqueValueTimeWindowValue {
    Minute1OrUnspecified => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTE_1_OR_UNSPECIFIED",
    Minutes5 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_5",
    Minutes10 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_10",
    Minutes15 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_15",
    Minutes20 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_20",
    Minutes30 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_MINUTES_30",
    Hours1 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_1",
    Hours2 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_2",
    Hours4 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_4",
    Hours6 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_6",
    Hours12 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_12",
    Hours24 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_24",
    Hours36 => "LOGS_UNIQUE_VALUE_TIME_WINDOW_VALUE_HOURS_36",
});

wire_enum!(TracingFilterOperationType {
    IsOrUnspecified => "TRACING_FILTER_OPERATION_TYPE_IS_OR_UNSPECIFIED",
    Includes => "TRACING_FILTER_OPERATION_TYPE_INCLUDES",
    EndsWith => "TRACING_FILTER_OPERATION_TYPE_ENDS_WITH",
    StartsWith => "TRACING_FILTER_OPERATION_TYPE_STARTS_WITH",
});

wire_enum!(NextOp {
    AndOrUnspecified => "NEXT_OP_AND_OR_UNSPECIFIED",
    Or => "NEXT_OP_OR",
});

wire_enum!(AlertsOp {
    AndOrUnspecified => "ALERTS_OP_AND_OR_UNSPECIFIED",
    Or => "ALERTS_OP_OR",
});

wire_enum!(TimeframeType {
    Unspecified => "TIMEFRAME_TYPE_UNSPECIFIED",
    UpTo => "TIMEFRAME_TYPE_UP_TO",
});

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefRequest {
    pub alert_def_properties: AlertDefProperties,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefProperties {
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub priority: AlertDefPriority,
    pub active_on: Option<ActivitySchedule>,
    pub group_by_keys: Vec<String>,
    pub incidents_settings: Option<AlertDefIncidentSettings>,
    pub notification_group: Option<AlertDefNotificationGroup>,
    pub notification_group_excess: Vec<AlertDefNotificationGroup>,
    pub entity_labels: BTreeMap<String, String>,
    pub phantom_mode: bool,
    pub notification_payload_filter: Vec<String>,
    #[serde(rename = "type")]
    pub type_: AlertDefType,
    #[serde(flatten)]
    pub type_definition: AlertDefTypeDefinition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySchedule {
    pub day_of_week: Vec<DayOfWeek>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub utc_offset: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefIncidentSettings {
    pub notify_on: NotifyOn,
    pub minutes: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefNotificationGroup {
    pub group_by_keys: Vec<String>,
    pub webhooks: Vec<AlertDefWebhooksSettings>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefWebhooksSettings {
    pub notify_on: NotifyOn,
    pub minutes: Option<u32>,
    pub integration: IntegrationType,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IntegrationType {
    IntegrationId(String),
    Recipients(Recipients),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipients {
    pub emails: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertDefTypeDefinition {
    LogsImmediate(LogsImmediateType),
    LogsThreshold(LogsThresholdType),
    LogsRatioThreshold(LogsRatioThresholdType),
    LogsTimeRelativeThreshold(LogsTimeRelativeThresholdType),
    MetricThreshold(MetricThresholdType),
    LogsNewValue(LogsNewValueType),
    LogsUniqueCount(LogsUniqueCountType),
    TracingImmediate(TracingImmediateType),
    TracingThreshold(TracingThresholdType),
    Flow(FlowType),
    LogsAnomaly(LogsAnomalyType),
    MetricAnomaly(MetricAnomalyType),
}

impl AlertDefTypeDefinition {
    pub fn alert_def_type(&self) -> AlertDefType {
        match self {
            AlertDefTypeDefinition::LogsImmediate(_) => AlertDefType::LogsImmediateOrUnspecified,
            AlertDefTypeDefinition::LogsThreshold(_) => AlertDefType::LogsThreshold,
            AlertDefTypeDefinition::LogsRatioThreshold(_) => AlertDefType::LogsRatioThreshold,
            AlertDefTypeDefinition::LogsTimeRelativeThreshold(_) => AlertDefType::LogsTimeRelativeThreshold,
            AlertDefTypeDefinition::MetricThreshold(_) => AlertDefType::MetricThreshold,
            AlertDefTypeDefinition::LogsNewValue(_) => AlertDefType::LogsNewValue,
            AlertDefTypeDefinition::LogsUniqueCount(_) => AlertDefType::LogsUniqueCount,
            AlertDefTypeDefinition::TracingImmediate(_) => AlertDefType::TracingImmediate,
            AlertDefTypeDefinition::TracingThreshold(_) => AlertDefType::TracingThreshold,
            AlertDefTypeDefinition::Flow(_) => AlertDefType::Flow,
            AlertDefTypeDefinition::LogsAnomaly(_) => AlertDefType::LogsAnomaly,
            AlertDefTypeDefinition::MetricAnomaly(_) => AlertDefType::MetricAnomaly,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelFilterType {
    pub value: String,
    pub operation: LogFilterOperationType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelFilters {
    pub application_name: Vec<LabelFilterType>,
    pub subsystem_name: Vec<LabelFilterType>,
    pub severities: Vec<LogSeverity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsSimpleFilter {
    pub lucene_query: Option<String>,
    pub label_filters: Option<LabelFilters>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsFilter {
    pub simple_filter: LogsSimpleFilter,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UndetectedValuesManagement {
    pub trigger_undetected_values: bool,
    pub auto_retire_timeframe: AutoRetireTimeframe,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefOverride {
    pub priority: AlertDefPriority,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsTimeWindow {
    pub logs_time_window_specific_value: LogsTimeWindowValue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsImmediateType {
    pub logs_filter: Option<LogsFilter>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsThresholdType {
    pub logs_filter: Option<LogsFilter>,
    pub undetected_values_management: Option<UndetectedValuesManagement>,
    pub rules: Vec<LogsThresholdRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsThresholdRule {
    pub condition: LogsThresholdCondition,
    #[serde(rename = "override")]
    pub override_: Option<AlertDefOverride>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsThresholdCondition {
    pub threshold: f64,
    pub time_window: LogsTimeWindow,
    pub condition_type: LogsThresholdConditionType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsRatioThresholdType {
    pub numerator: Option<LogsFilter>,
    pub numerator_alias: String,
    pub denominator: Option<LogsFilter>,
    pub denominator_alias: String,
    pub rules: Vec<LogsRatioRule>,
    pub group_by_for: LogsRatioGroupByFor,
    pub ignore_infinity: bool,
    pub undetected_values_management: Option<UndetectedValuesManagement>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsRatioRule {
    pub condition: LogsRatioCondition,
    #[serde(rename = "override")]
    pub override_: Option<AlertDefOverride>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsRatioCondition {
    pub threshold: f64,
    pub time_window: LogsTimeWindow,
    pub condition_type: LogsRatioConditionType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsTimeRelativeThresholdType {
    pub logs_filter: Option<LogsFilter>,
    pub rules: Vec<LogsTimeRelativeRule>,
    pub ignore_infinity: bool,
    pub undetected_values_management: Option<UndetectedValuesManagement>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsTimeRelativeRule {
    pub condition: LogsTimeRelativeCondition,
    #[serde(rename = "override")]
    pub override_: Option<AlertDefOverride>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsTimeRelativeCondition {
    pub threshold: f64,
    pub compared_to: LogsTimeRelativeComparedTo,
    pub condition_type: LogsTimeRelativeConditionType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilter {
    pub promql: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTimeWindow {
    pub metric_time_window_specific_value: MetricTimeWindowValue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricMissingValues {
    pub replace_with_zero: Option<bool>,
    pub min_non_null_values_pct: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricThresholdType {
    pub metric_filter: MetricFilter,
    pub rules: Vec<MetricThresholdRule>,
    pub undetected_values_management: Option<UndetectedValuesManagement>,
    pub missing_values: Option<MetricMissingValues>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricThresholdRule {
    pub condition: MetricThresholdCondition,
    #[serde(rename = "override")]
    pub override_: Option<AlertDefOverride>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricThresholdCondition {
    pub threshold: f64,
    pub for_over_pct: u32,
    pub of_the_last: MetricTimeWindow,
    pub condition_type: MetricThresholdConditionType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAnomalyType {
    pub metric_filter: MetricFilter,
    pub rules: Vec<MetricAnomalyRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAnomalyRule {
    pub condition: MetricAnomalyCondition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAnomalyCondition {
    pub threshold: f64,
    pub for_over_pct: u32,
    pub of_the_last: MetricTimeWindow,
    pub min_non_null_values_pct: Option<u32>,
    pub condition_type: MetricAnomalyConditionType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsNewValueTimeWindow {
    pub logs_new_value_time_window_specific_value: LogsNewValueTimeWindowValue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsNewValueType {
    pub logs_filter: Option<LogsFilter>,
    pub rules: Vec<LogsNewValueRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsNewValueRule {
    pub condition: LogsNewValueCondition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsNewValueCondition {
    pub keypath_to_track: String,
    pub time_window: LogsNewValueTimeWindow,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsUniqueValueTimeWindow {
    pub logs_unique_value_time_window_specific_value: LogsUniqueValueTimeWindowValue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsUniqueCountType {
    pub logs_filter: Option<LogsFilter>,
    pub rules: Vec<LogsUniqueCountRule>,
    pub unique_count_keypath: String,
    pub max_unique_count_per_group_by_key: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsUniqueCountRule {
    pub condition: LogsUniqueCountCondition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsUniqueCountCondition {
    pub max_unique_count: u64,
    pub time_window: LogsUniqueValueTimeWindow,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingFilterType {
    pub values: Vec<String>,
    pub operation: TracingFilterOperationType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingSpanFieldsFilterType {
    pub key: String,
    pub filter_type: TracingFilterType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingLabelFilters {
    pub application_name: Vec<TracingFilterType>,
    pub subsystem_name: Vec<TracingFilterType>,
    pub service_name: Vec<TracingFilterType>,
    pub operation_name: Vec<TracingFilterType>,
    pub span_fields: Vec<TracingSpanFieldsFilterType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingSimpleFilter {
    pub tracing_label_filters: Option<TracingLabelFilters>,
    pub latency_threshold_ms: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingFilter {
    pub simple_filter: TracingSimpleFilter,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingImmediateType {
    pub tracing_filter: Option<TracingFilter>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingThresholdType {
    pub tracing_filter: Option<TracingFilter>,
    pub rules: Vec<TracingThresholdRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingThresholdRule {
    pub condition: TracingThresholdCondition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingThresholdCondition {
    pub span_amount: f64,
    pub time_window: LogsTimeWindow,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsAnomalyType {
    pub logs_filter: Option<LogsFilter>,
    pub rules: Vec<LogsAnomalyRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsAnomalyRule {
    pub condition: LogsAnomalyCondition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsAnomalyCondition {
    pub minimum_threshold: f64,
    pub time_window: LogsTimeWindow,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowType {
    pub stages: Vec<FlowStages>,
    pub enforce_suppression: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStages {
    pub timeframe_ms: u64,
    pub timeframe_type: TimeframeType,
    pub flow_stages_groups: FlowStagesGroups,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStagesGroups {
    pub groups: Vec<FlowStagesGroup>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStagesGroup {
    pub alert_defs: Vec<FlowStagesGroupsAlertDefs>,
    pub next_op: NextOp,
    pub alerts_op: AlertsOp,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStagesGroupsAlertDefs {
    pub id: String,
    pub not: bool,
}

pub const ALERT_DEFS_LIST_POINTER: &str = "/alertDefs";
pub const ALERT_DEF_NAME_POINTER: &str = "/alertDefProperties/name";
