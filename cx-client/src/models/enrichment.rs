use serde::Serialize;

use crate::endpoint::Endpoint;

pub const CUSTOM_ENRICHMENTS: Endpoint =
    Endpoint::crud("mgmt/openapi/latest/enrichments/custom-enrichments/v1", "/customEnrichment/id");
pub const ENRICHMENT_SETS: Endpoint = Endpoint::crud("mgmt/openapi/latest/enrichments/v1/enrichment-sets", "/id");

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEnrichmentRequest {
    pub name: String,
    pub description: Option<String>,
    pub file: CustomEnrichmentFile,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEnrichmentFile {
    pub name: String,
    pub extension: String,
    pub text_data: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentSetRequest {
    pub request_enrichments: Vec<EnrichmentRequestModel>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentRequestModel {
    pub field_name: String,
    pub enriched_field_name: Option<String>,
    pub selected_columns: Vec<String>,
    pub enrichment_type: EnrichmentKind,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EnrichmentKind {
    GeoIp(GeoIpType),
    SuspiciousIp(SuspiciousIpType),
    Aws(AwsType),
    CustomEnrichment(CustomEnrichmentType),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoIpType {
    pub with_asn: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SuspiciousIpType {}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsType {
    pub resource_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEnrichmentType {
    pub id: u32,
}
