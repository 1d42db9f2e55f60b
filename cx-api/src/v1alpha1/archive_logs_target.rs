use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "ArchiveLogsTarget", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct ArchiveLogsTargetSpec {
    pub s3_target: Option<S3Target>,
    pub ibm_cos_target: Option<IbmCosTarget>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Target {
    pub bucket_name: String,
    pub region: String,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum IbmBucketType {
    #[default]
    Unspecified,
    Exchange,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IbmCosTarget {
    pub bucket_crn: String,
    pub endpoint: String,
    pub service_crn: Option<String>,
    #[serde(default)]
    pub bucket_type: IbmBucketType,
}
