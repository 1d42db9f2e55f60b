use serde::Serialize;

use crate::endpoint::Endpoint;

pub const EVENTS2METRICS: Endpoint = Endpoint::crud("mgmt/openapi/latest/events2metrics/v2", "/e2m/id");

wire_enum!(E2MAggType {
    Unspecified => "AGG_TYPE_UNSPECIFIED",
    Min => "AGG_TYPE_MIN",
    Max => "AGG_TYPE_MAX",
    Count => "AGG_TYPE_COUNT",
    Avg => "AGG_TYPE_AVG",
    Sum => "AGG_TYPE_SUM",
    Histogram => "AGG_TYPE_HISTOGRAM",
    Samples => "AGG_TYPE_SAMPLES",
});

wire_enum!(E2MSampleType {
    Unspecified => "SAMPLE_TYPE_UNSPECIFIED",
    Min => "SAMPLE_TYPE_MIN",
    Max => "SAMPLE_TYPE_MAX",
});

wire_enum!(E2MSeverity {
    Unspecified => "SEVERITY_UNSPECIFIED",
    Debug => "SEVERITY_DEBUG",
    Verbose => "SEVERITY_VERBOSE",
    Info => "SEVERITY_INFO",
    Warning => "SEVERITY_WARNING",
    Error => "SEVERITY_ERROR",
    Critical => "SEVERITY_CRITICAL",
});

wire_enum!(E2MType {
    Unspecified => "E2M_TYPE_UNSPECIFIED",
    LogsQuery => "E2M_TYPE_LOGS2METRICS",
    SpansQuery => "E2M_TYPE_SPANS2METRICS",
});

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MRequest {
    pub e2m: E2MCreateParams,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MCreateParams {
    pub name: String,
    pub description: Option<String>,
    pub permutations_limit: Option<u32>,
    pub metric_fields: Vec<E2MMetricField>,
    pub metric_labels: Vec<E2MMetricLabel>,
    #[serde(rename = "type")]
    pub type_: E2MType,
    #[serde(flatten)]
    pub query: E2MQuery,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum E2MQuery {
    LogsQuery(E2MLogsQuery),
    SpansQuery(E2MSpansQuery),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MLogsQuery {
    pub lucene: Option<String>,
    pub applicationname_filters: Vec<String>,
    pub subsystemname_filters: Vec<String>,
    pub severity_filters: Vec<E2MSeverity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MSpansQuery {
    pub lucene: Option<String>,
    pub applicationname_filters: Vec<String>,
    pub subsystemname_filters: Vec<String>,
    pub action_filters: Vec<String>,
    pub service_filters: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MMetricField {
    pub target_base_metric_name: String,
    pub source_field: String,
    pub aggregations: Vec<E2MAggregation>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MAggregation {
    pub enabled: bool,
    pub agg_type: E2MAggType,
    pub target_metric_name: String,
    pub samples: Option<E2MSamplesMetadata>,
    pub histogram: Option<E2MHistogramMetadata>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MSamplesMetadata {
    pub sample_type: E2MSampleType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MHistogramMetadata {
    pub buckets: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MMetricLabel {
    pub target_label: String,
    pub source_field: String,
}
