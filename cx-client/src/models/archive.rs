use serde::Serialize;

use crate::endpoint::Endpoint;

pub const ARCHIVE_LOGS_TARGET: Endpoint = Endpoint::singleton("mgmt/openapi/latest/logs/data-setup/v2/target");
pub const ARCHIVE_METRICS_TARGET: Endpoint = Endpoint::singleton("mgmt/openapi/latest/metrics/archive/v1/config");

wire_enum!(IbmBucketType {
    Unspecified => "BUCKET_TYPE_UNSPECIFIED",
    Exchange => "BUCKET_TYPE_EXCHANGE",
});

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ArchiveTarget {
    S3(S3TargetSpec),
    IbmCos(IbmCosTargetSpec),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3TargetSpec {
    pub bucket: String,
    pub region: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IbmCosTargetSpec {
    pub bucket_crn: String,
    pub endpoint: String,
    pub service_crn: Option<String>,
    pub bucket_type: IbmBucketType,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveLogsTargetRequest {
    pub is_active: bool,
    #[serde(flatten)]
    pub target: ArchiveTarget,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionPolicy {
    pub raw_resolution: u32,
    pub five_minutes_resolution: u32,
    pub one_hour_resolution: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveMetricsTargetRequest {
    #[serde(flatten)]
    pub target: ArchiveTarget,
    pub resolution_policy: Option<ResolutionPolicy>,
    pub retention_days: Option<u32>,
}
