use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "Enrichment", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentSpec {
    pub enrichments: Vec<EnrichmentItem>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentItem {
    pub field_name: String,
    pub enriched_field_name: Option<String>,
    pub selected_columns: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub type_: EnrichmentType,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentType {
    pub geo_ip: Option<GeoIpEnrichment>,
    pub suspicious_ip: Option<SuspiciousIpEnrichment>,
    pub aws: Option<AwsEnrichment>,
    pub custom_enrichment: Option<CustomEnrichmentRef>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoIpEnrichment {
    pub with_asn: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
pub struct SuspiciousIpEnrichment {}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsEnrichment {
    pub resource_type: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEnrichmentRef {
    pub id: Option<u32>,
    pub resource_ref: Option<ResourceRef>,
}
