use std::collections::BTreeMap;

use serde::Serialize;

use crate::endpoint::Endpoint;

pub const SLOS: Endpoint = Endpoint::crud("mgmt/openapi/latest/slo/slos/v1", "/slo/id");

wire_enum!(SloTimeFrame {
    Unspecified => "SLO_TIME_FRAME_UNSPECIFIED",
    Days7 => "SLO_TIME_FRAME_7_DAYS",
    Days14 => "SLO_TIME_FRAME_14_DAYS",
    Days21 => "SLO_TIME_FRAME_21_DAYS",
    Days28 => "SLO_TIME_FRAME_28_DAYS",
    Days90 => "SLO_TIME_FRAME_90_DAYS",
});

wire_enum!(WindowSloWindow {
    Unspecified => "WINDOW_SLO_WINDOW_UNSPECIFIED",
    Minute1 => "WINDOW_SLO_WINDOW_1_MINUTE",
    Minutes5 => "WINDOW_SLO_WINDOW_5_MINUTES",
});

wire_enum!(ComparisonOperator {
    Unspecified => "COMPARISON_OPERATOR_UNSPECIFIED",
    GreaterThan => "COMPARISON_OPERATOR_GREATER_THAN",
    LessThan => "COMPARISON_OPERATOR_LESS_THAN",
    GreaterThanOrEquals => "COMPARISON_OPERATOR_GREATER_THAN_OR_EQUALS",
    LessThanOrEquals => "COMPARISON_OPERATOR_LESS_THAN_OR_EQUALS",
});

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SloRequest {
    pub slo: SloModel,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SloModel {
    pub name: String,
    pub description: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub slo_time_frame: SloTimeFrame,
    pub target_threshold_percentage: f64,
    #[serde(flatten)]
    pub sli: SliModel,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SliModel {
    RequestBasedMetricSli(RequestBasedMetricSliModel),
    WindowBasedMetricSli(WindowBasedMetricSliModel),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SloMetricQueryModel {
    pub query: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBasedMetricSliModel {
    pub good_events: SloMetricQueryModel,
    pub total_events: SloMetricQueryModel,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowBasedMetricSliModel {
    pub query: SloMetricQueryModel,
    pub window: WindowSloWindow,
    pub comparison_operator: ComparisonOperator,
    pub threshold: f64,
}
