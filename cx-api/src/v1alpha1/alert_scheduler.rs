use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "AlertScheduler", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct AlertSchedulerSpec {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,

    // exactly one of meta_labels or alerts
    pub meta_labels: Option<Vec<MetaLabel>>,
    pub alerts: Option<Vec<ResourceRef>>,

    pub schedule: Schedule,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaLabel {
    pub key: String,
    pub value: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum ScheduleOperation {
    #[default]
    Mute,
    ActiveOnly,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub operation: ScheduleOperation,
    pub one_time: Option<OneTime>,
    pub recurring: Option<Recurring>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OneTime {
    pub time_frame: TimeFrame,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurring {
    pub always: Option<Always>,
    pub dynamic: Option<Dynamic>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
pub struct Always {}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dynamic {
    pub repeat_every: u32,
    pub frequency: Frequency,
    pub time_frame: TimeFrame,
    pub termination_date: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frequency {
    pub daily: Option<Daily>,
    pub weekly: Option<Weekly>,
    pub monthly: Option<Monthly>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
pub struct Daily {}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum SchedulerDay {
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
pub struct Weekly {
    pub days: Vec<SchedulerDay>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Monthly {
    pub days: Vec<u32>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrame {
    pub start_time: String,
    // exactly one of end_time or duration
    pub end_time: Option<String>,
    pub duration: Option<TimeFrameDuration>,
    pub timezone: String,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum DurationFrequency {
    #[default]
    Minutes,
    Hours,
    Days,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrameDuration {
    pub for_over: u32,
    pub frequency: DurationFrequency,
}
