use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::slo as models;

use super::CoralogixResource;
use crate::errors::*;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for SLO {
    type Request = models::SloRequest;

    fn endpoint() -> Endpoint {
        models::SLOS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::SloRequest> {
        let spec = &self.spec;
        let sli = match (&spec.sli.request_based_metric_sli, &spec.sli.window_based_metric_sli) {
            (Some(r), None) => models::SliModel::RequestBasedMetricSli(models::RequestBasedMetricSliModel {
                good_events: models::SloMetricQueryModel { query: r.good_events.query.clone() },
                total_events: models::SloMetricQueryModel { query: r.total_events.query.clone() },
            }),
            (None, Some(w)) => models::SliModel::WindowBasedMetricSli(models::WindowBasedMetricSliModel {
                query: models::SloMetricQueryModel { query: w.query.query.clone() },
                window: match w.window {
                    SloWindow::Minute1 => models::WindowSloWindow::Minute1,
                    SloWindow::Minutes5 => models::WindowSloWindow::Minutes5,
                },
                comparison_operator: comparison_operator(w.comparison_operator),
                threshold: w.threshold,
            }),
            _ => {
                return Err(ExtractError::invalid_value(
                    "sli must set exactly one of requestBasedMetricSli or windowBasedMetricSli",
                ));
            },
        };

        Ok(models::SloRequest {
            slo: models::SloModel {
                name: spec.name.clone(),
                description: spec.description.clone(),
                labels: spec.labels.clone().unwrap_or_default(),
                slo_time_frame: time_frame(spec.slo_time_frame),
                target_threshold_percentage: spec.target_threshold_percentage,
                sli,
            },
        })
    }
}

impl Validate for SLO {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let target = spec.target_threshold_percentage;
        Validator::new()
            .exactly_one(
                "spec.sli",
                &[
                    ("requestBasedMetricSli", spec.sli.request_based_metric_sli.is_some()),
                    ("windowBasedMetricSli", spec.sli.window_based_metric_sli.is_some()),
                ],
            )
            .check(
                "spec.targetThresholdPercentage",
                target > 0.0 && target <= 100.0,
                "must be greater than 0 and at most 100",
            )
            .finish()
    }
}

fn time_frame(t: SloTimeFrame) -> models::SloTimeFrame {
    match t {
        SloTimeFrame::Days7 => models::SloTimeFrame::Days7,
        SloTimeFrame::Days14 => models::SloTimeFrame::Days14,
        SloTimeFrame::Days21 => models::SloTimeFrame::Days21,
        SloTimeFrame::Days28 => models::SloTimeFrame::Days28,
        SloTimeFrame::Days90 => models::SloTimeFrame::Days90,
    }
}

fn comparison_operator(c: SloComparisonOperator) -> models::ComparisonOperator {
    match c {
        SloComparisonOperator::GreaterThan => models::ComparisonOperator::GreaterThan,
        SloComparisonOperator::LessThan => models::ComparisonOperator::LessThan,
        SloComparisonOperator::GreaterThanOrEquals => models::ComparisonOperator::GreaterThanOrEquals,
        SloComparisonOperator::LessThanOrEquals => models::ComparisonOperator::LessThanOrEquals,
    }
}
