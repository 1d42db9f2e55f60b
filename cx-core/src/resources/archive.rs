use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::archive as models;

use super::CoralogixResource;
use crate::errors::*;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for ArchiveLogsTarget {
    type Request = models::ArchiveLogsTargetRequest;

    fn endpoint() -> Endpoint {
        models::ARCHIVE_LOGS_TARGET
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::ArchiveLogsTargetRequest> {
        let target = extract_target(&self.spec.s3_target, &self.spec.ibm_cos_target)?;
        Ok(models::ArchiveLogsTargetRequest { is_active: true, target })
    }
}

impl Validate for ArchiveLogsTarget {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .exactly_one(
                "spec",
                &[("s3Target", self.spec.s3_target.is_some()), ("ibmCosTarget", self.spec.ibm_cos_target.is_some())],
            )
            .finish()
    }
}

#[async_trait]
impl CoralogixResource for ArchiveMetricsTarget {
    type Request = models::ArchiveMetricsTargetRequest;

    fn endpoint() -> Endpoint {
        models::ARCHIVE_METRICS_TARGET
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::ArchiveMetricsTargetRequest> {
        let spec = &self.spec;
        Ok(models::ArchiveMetricsTargetRequest {
            target: extract_target(&spec.s3_target, &spec.ibm_cos_target)?,
            resolution_policy: spec.resolution_policy.as_ref().map(|p| models::ResolutionPolicy {
                raw_resolution: p.raw_resolution,
                five_minutes_resolution: p.five_minutes_resolution,
                one_hour_resolution: p.one_hour_resolution,
            }),
            retention_days: spec.retention_days,
        })
    }
}

impl Validate for ArchiveMetricsTarget {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        Validator::new()
            .exactly_one("spec", &[("s3Target", spec.s3_target.is_some()), ("ibmCosTarget", spec.ibm_cos_target.is_some())])
            .check("spec.retentionDays", spec.retention_days != Some(0), "must be greater than zero")
            .finish()
    }
}

fn extract_target(s3: &Option<S3Target>, ibm: &Option<IbmCosTarget>) -> anyhow::Result<models::ArchiveTarget> {
    match (s3, ibm) {
        (Some(s3), None) => Ok(models::ArchiveTarget::S3(models::S3TargetSpec {
            bucket: s3.bucket_name.clone(),
            region: s3.region.clone(),
        })),
        (None, Some(ibm)) => Ok(models::ArchiveTarget::IbmCos(models::IbmCosTargetSpec {
            bucket_crn: ibm.bucket_crn.clone(),
            endpoint: ibm.endpoint.clone(),
            service_crn: ibm.service_crn.clone(),
            bucket_type: match ibm.bucket_type {
                IbmBucketType::Unspecified => models::IbmBucketType::Unspecified,
                IbmBucketType::Exchange => models::IbmBucketType::Exchange,
            },
        })),
        _ => Err(ExtractError::invalid_value("exactly one of s3Target or ibmCosTarget must be set")),
    }
}
