use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use super::{
    IbmCosTarget,
    S3Target,
};
use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "ArchiveMetricsTarget", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct ArchiveMetricsTargetSpec {
    pub s3_target: Option<S3Target>,
    pub ibm_cos_target: Option<IbmCosTarget>,
    pub resolution_policy: Option<ResolutionPolicy>,
    pub retention_days: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionPolicy {
    pub raw_resolution: u32,
    pub five_minutes_resolution: u32,
    pub one_hour_resolution: u32,
}
