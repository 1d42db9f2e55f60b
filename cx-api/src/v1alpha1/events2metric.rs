use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "Events2Metric", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct Events2MetricSpec {
    pub name: String,
    pub description: Option<String>,
    pub permutations_limit: Option<u32>,
    pub metric_fields: Option<Vec<MetricField>>,
    pub metric_labels: Option<Vec<MetricLabel>>,
    pub query: E2MQuery,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricField {
    pub target_base_metric_name: String,
    pub source_field: String,
    pub aggregations: Option<Vec<E2MAggregation>>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum E2MAggregationType {
    #[default]
    Min,
    Max,
    Count,
    Avg,
    Sum,
    Histogram,
    Samples,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum E2MSamplesType {
    Min,
    Max,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MAggregation {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub agg_type: E2MAggregationType,
    pub target_metric_name: String,
    pub samples_type: Option<E2MSamplesType>,
    pub buckets: Option<Vec<f64>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricLabel {
    pub target_label: String,
    pub source_field: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum E2MLogSeverity {
    Debug,
    Verbose,
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MQuery {
    pub logs: Option<E2MLogsQuery>,
    pub spans: Option<E2MSpansQuery>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MLogsQuery {
    pub lucene: Option<String>,
    pub applications: Option<Vec<String>>,
    pub subsystems: Option<Vec<String>>,
    pub severities: Option<Vec<E2MLogSeverity>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct E2MSpansQuery {
    pub lucene: Option<String>,
    pub applications: Option<Vec<String>>,
    pub subsystems: Option<Vec<String>>,
    pub actions: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
}
