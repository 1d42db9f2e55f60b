use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::enrichment as models;

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

const CSV_EXTENSION: &str = "csv";

#[async_trait]
impl CoralogixResource for CustomEnrichment {
    type Request = models::CustomEnrichmentRequest;

    fn endpoint() -> Endpoint {
        models::CUSTOM_ENRICHMENTS
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::CustomEnrichmentRequest> {
        let spec = &self.spec;
        let text_data = match (&spec.csv, &spec.config_map_ref) {
            (Some(csv), None) => csv.clone(),
            (None, Some(cm)) => refs.config_map_value(cm).await?,
            _ => return Err(ExtractError::invalid_value("exactly one of csv or configMapRef must be set")),
        };

        Ok(models::CustomEnrichmentRequest {
            name: spec.name.clone(),
            description: spec.description.clone(),
            file: models::CustomEnrichmentFile {
                name: format!("{}.{CSV_EXTENSION}", spec.name),
                extension: CSV_EXTENSION.into(),
                text_data,
            },
        })
    }
}

impl Validate for CustomEnrichment {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        Validator::new()
            .exactly_one("spec", &[("csv", spec.csv.is_some()), ("configMapRef", spec.config_map_ref.is_some())])
            .finish()
    }
}

#[async_trait]
impl CoralogixResource for Enrichment {
    type Request = models::EnrichmentSetRequest;

    fn endpoint() -> Endpoint {
        models::ENRICHMENT_SETS
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::EnrichmentSetRequest> {
        let mut request_enrichments = vec![];
        for item in &self.spec.enrichments {
            let t = &item.type_;
            let enrichment_type = match (&t.geo_ip, &t.suspicious_ip, &t.aws, &t.custom_enrichment) {
                (Some(geo), None, None, None) => {
                    models::EnrichmentKind::GeoIp(models::GeoIpType { with_asn: geo.with_asn.unwrap_or(false) })
                },
                (None, Some(_), None, None) => models::EnrichmentKind::SuspiciousIp(models::SuspiciousIpType {}),
                (None, None, Some(aws), None) => {
                    models::EnrichmentKind::Aws(models::AwsType { resource_type: aws.resource_type.clone() })
                },
                (None, None, None, Some(custom)) => {
                    let id = match (custom.id, &custom.resource_ref) {
                        (Some(id), None) => id,
                        (None, Some(rr)) => refs.resolve_numeric::<CustomEnrichment>(rr).await?,
                        _ => {
                            return Err(ExtractError::invalid_value(
                                "customEnrichment must set exactly one of id or resourceRef",
                            ));
                        },
                    };
                    models::EnrichmentKind::CustomEnrichment(models::CustomEnrichmentType { id })
                },
                _ => {
                    return Err(ExtractError::invalid_value(&format!(
                        "enrichment for {} must set exactly one type",
                        item.field_name
                    )));
                },
            };

            request_enrichments.push(models::EnrichmentRequestModel {
                field_name: item.field_name.clone(),
                enriched_field_name: item.enriched_field_name.clone(),
                selected_columns: or_empty(&item.selected_columns),
                enrichment_type,
            });
        }

        Ok(models::EnrichmentSetRequest { request_enrichments })
    }
}

impl Validate for Enrichment {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.check("spec.enrichments", !self.spec.enrichments.is_empty(), "must not be empty");
        for (i, item) in self.spec.enrichments.iter().enumerate() {
            let t = &item.type_;
            let path = format!("spec.enrichments[{i}].type");
            v.exactly_one(
                &path,
                &[
                    ("geoIp", t.geo_ip.is_some()),
                    ("suspiciousIp", t.suspicious_ip.is_some()),
                    ("aws", t.aws.is_some()),
                    ("customEnrichment", t.custom_enrichment.is_some()),
                ],
            );
            if let Some(custom) = &t.custom_enrichment {
                v.exactly_one(
                    &format!("{path}.customEnrichment"),
                    &[("id", custom.id.is_some()), ("resourceRef", custom.resource_ref.is_some())],
                );
            }
        }
        v.finish()
    }
}
