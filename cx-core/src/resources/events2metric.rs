use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::events2metric as models;

use super::{
    CoralogixResource,
    or_empty,
};
use crate::errors::*;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for Events2Metric {
    type Request = models::E2MRequest;

    fn endpoint() -> Endpoint {
        models::EVENTS2METRICS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::E2MRequest> {
        let spec = &self.spec;
        let query = match (&spec.query.logs, &spec.query.spans) {
            (Some(logs), None) => models::E2MQuery::LogsQuery(models::E2MLogsQuery {
                lucene: logs.lucene.clone(),
                applicationname_filters: or_empty(&logs.applications),
                subsystemname_filters: or_empty(&logs.subsystems),
                severity_filters: logs.severities.iter().flatten().map(|s| severity(*s)).collect(),
            }),
            (None, Some(spans)) => models::E2MQuery::SpansQuery(models::E2MSpansQuery {
                lucene: spans.lucene.clone(),
                applicationname_filters: or_empty(&spans.applications),
                subsystemname_filters: or_empty(&spans.subsystems),
                action_filters: or_empty(&spans.actions),
                service_filters: or_empty(&spans.services),
            }),
            _ => return Err(ExtractError::invalid_value("query must set exactly one of logs or spans")),
        };
        let type_ = match &query {
            models::E2MQuery::LogsQuery(_) => models::E2MType::LogsQuery,
            models::E2MQuery::SpansQuery(_) => models::E2MType::SpansQuery,
        };

        let mut metric_fields = vec![];
        for field in spec.metric_fields.iter().flatten() {
            let mut aggregations = vec![];
            for agg in field.aggregations.iter().flatten() {
                aggregations.push(extract_aggregation(agg)?);
            }
            metric_fields.push(models::E2MMetricField {
                target_base_metric_name: field.target_base_metric_name.clone(),
                source_field: field.source_field.clone(),
                aggregations,
            });
        }

        Ok(models::E2MRequest {
            e2m: models::E2MCreateParams {
                name: spec.name.clone(),
                description: spec.description.clone(),
                permutations_limit: spec.permutations_limit,
                metric_fields,
                metric_labels: spec
                    .metric_labels
                    .iter()
                    .flatten()
                    .map(|l| models::E2MMetricLabel {
                        target_label: l.target_label.clone(),
                        source_field: l.source_field.clone(),
                    })
                    .collect(),
                type_,
                query,
            },
        })
    }
}

impl Validate for Events2Metric {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let mut v = Validator::new();
        v.exactly_one("spec.query", &[("logs", spec.query.logs.is_some()), ("spans", spec.query.spans.is_some())]);

        for (i, field) in spec.metric_fields.iter().flatten().enumerate() {
            for (j, agg) in field.aggregations.iter().flatten().enumerate() {
                let path = format!("spec.metricFields[{i}].aggregations[{j}]");
                match agg.agg_type {
                    E2MAggregationType::Samples => {
                        v.check(&path, agg.samples_type.is_some(), "samplesType is required for Samples aggregations");
                    },
                    E2MAggregationType::Histogram => {
                        v.check(
                            &path,
                            agg.buckets.as_ref().is_some_and(|b| !b.is_empty()),
                            "buckets are required for Histogram aggregations",
                        );
                    },
                    _ => (),
                }
            }
        }
        v.finish()
    }
}

fn extract_aggregation(agg: &E2MAggregation) -> anyhow::Result<models::E2MAggregation> {
    let mut out = models::E2MAggregation {
        enabled: agg.enabled,
        agg_type: agg_type(agg.agg_type),
        target_metric_name: agg.target_metric_name.clone(),
        samples: None,
        histogram: None,
    };

    match agg.agg_type {
        E2MAggregationType::Samples => {
            let sample_type = match agg.samples_type {
                Some(E2MSamplesType::Min) => models::E2MSampleType::Min,
                Some(E2MSamplesType::Max) => models::E2MSampleType::Max,
                None => {
                    return Err(ExtractError::invalid_value(&format!(
                        "aggregation {} needs a samplesType",
                        agg.target_metric_name
                    )));
                },
            };
            out.samples = Some(models::E2MSamplesMetadata { sample_type });
        },
        E2MAggregationType::Histogram => {
            let buckets = agg.buckets.clone().unwrap_or_default();
            if buckets.is_empty() {
                return Err(ExtractError::invalid_value(&format!(
                    "aggregation {} needs histogram buckets",
                    agg.target_metric_name
                )));
            }
            out.histogram = Some(models::E2MHistogramMetadata { buckets });
        },
        _ => (),
    }

    Ok(out)
}

fn agg_type(t: E2MAggregationType) -> models::E2MAggType {
    match t {
        E2MAggregationType::Min => models::E2MAggType::Min,
        E2MAggregationType::Max => models::E2MAggType::Max,
        E2MAggregationType::Count => models::E2MAggType::Count,
        E2MAggregationType::Avg => models::E2MAggType::Avg,
        E2MAggregationType::Sum => models::E2MAggType::Sum,
        E2MAggregationType::Histogram => models::E2MAggType::Histogram,
        E2MAggregationType::Samples => models::E2MAggType::Samples,
    }
}

fn severity(s: E2MLogSeverity) -> models::E2MSeverity {
    match s {
        E2MLogSeverity::Debug => models::E2MSeverity::Debug,
        E2MLogSeverity::Verbose => models::E2MSeverity::Verbose,
        E2MLogSeverity::Info => models::E2MSeverity::Info,
        E2MLogSeverity::Warning => models::E2MSeverity::Warning,
        E2MLogSeverity::Error => models::E2MSeverity::Error,
        E2MLogSeverity::Critical => models::E2MSeverity::Critical,
    }
}
