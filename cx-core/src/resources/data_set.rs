use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::data_set as models;

use super::CoralogixResource;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for DataSet {
    type Request = models::DataSetRequest;

    fn endpoint() -> Endpoint {
        models::DATA_SETS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::DataSetRequest> {
        let spec = &self.spec;
        Ok(models::DataSetRequest {
            name: spec.name.clone(),
            description: spec.description.clone(),
            query: spec.query.clone(),
            retention_days: spec.retention_days,
        })
    }
}

impl Validate for DataSet {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .check("spec.query", !self.spec.query.trim().is_empty(), "must not be empty")
            .finish()
    }
}
