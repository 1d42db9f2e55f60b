use serde::Serialize;

use crate::endpoint::Endpoint;

pub const ALERT_SCHEDULER_RULES: Endpoint =
    Endpoint::crud("mgmt/openapi/latest/alert-scheduler-rules/v1", "/alertSchedulerRule/uniqueIdentifier");

wire_enum!(ScheduleOperation {
    Unspecified => "SCHEDULE_OPERATION_UNSPECIFIED",
    Mute => "SCHEDULE_OPERATION_MUTE",
    Activate => "SCHEDULE_OPERATION_ACTIVATE",
});

wire_enum!(DurationFrequency {
    Unspecified => "DURATION_FREQUENCY_UNSPECIFIED",
    Minute => "DURATION_FREQUENCY_MINUTE",
    Hour => "DURATION_FREQUENCY_HOUR",
    Day => "DURATION_FREQUENCY_DAY",
});

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSchedulerRuleRequest {
    pub alert_scheduler_rule: AlertSchedulerRule,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSchedulerRule {
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub filter: AlertSchedulerFilter,
    pub schedule: AlertSchedulerSchedule,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSchedulerFilter {
    pub what_expression: String,
    #[serde(flatten)]
    pub which_alerts: WhichAlerts,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WhichAlerts {
    AlertMetaLabels(AlertMetaLabels),
    AlertUniqueIds(AlertUniqueIds),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMetaLabels {
    pub value: Vec<MetaLabelValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaLabelValue {
    pub key: String,
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertUniqueIds {
    pub value: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSchedulerSchedule {
    pub schedule_operation: ScheduleOperation,
    #[serde(flatten)]
    pub schedule_type: ScheduleType,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleType {
    OneTime(OneTimeSchedule),
    Recurring(RecurringSchedule),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OneTimeSchedule {
    pub timeframe: SchedulerTimeframe,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecurringSchedule {
    Always(Empty),
    Dynamic(DynamicSchedule),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Empty {}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicSchedule {
    pub repeat_every: u32,
    pub frequency: SchedulerFrequency,
    pub timeframe: SchedulerTimeframe,
    pub termination_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SchedulerFrequency {
    Daily(Empty),
    Weekly(WeeklyFrequency),
    Monthly(MonthlyFrequency),
}

// Days are numbered from Sunday = 0
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyFrequency {
    pub days: Vec<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFrequency {
    pub days: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerTimeframe {
    pub start_time: String,
    pub timezone: String,
    #[serde(flatten)]
    pub until: TimeframeUntil,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeframeUntil {
    EndTime(String),
    Duration(SchedulerDuration),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerDuration {
    pub for_over: u32,
    pub frequency: DurationFrequency,
}
