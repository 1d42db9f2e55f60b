use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::extension as models;

use super::CoralogixResource;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for Extension {
    type Request = models::ExtensionDeploymentRequest;

    fn endpoint() -> Endpoint {
        models::EXTENSION_DEPLOYMENTS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::ExtensionDeploymentRequest> {
        let spec = &self.spec;
        Ok(models::ExtensionDeploymentRequest {
            id: spec.id.clone(),
            version: spec.version.clone(),
            item_ids: spec.item_ids.clone(),
            ..Default::default()
        })
    }
}

impl Validate for Extension {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        Validator::new()
            .check("spec.id", !spec.id.is_empty(), "must not be empty")
            .check("spec.version", !spec.version.is_empty(), "must not be empty")
            .finish()
    }
}
