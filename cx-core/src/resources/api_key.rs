use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::api_key as models;

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

#[async_trait]
impl CoralogixResource for ApiKey {
    type Request = models::ApiKeyRequest;

    fn endpoint() -> Endpoint {
        models::API_KEYS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::ApiKeyRequest> {
        let spec = &self.spec;
        let owner = match (&spec.owner.user_id, spec.owner.team_id) {
            (Some(user_id), None) => models::ApiKeyOwner::UserId(user_id.clone()),
            (None, Some(team_id)) => models::ApiKeyOwner::TeamId(team_id),
            _ => return Err(ExtractError::invalid_value("owner must set exactly one of userId or teamId")),
        };

        Ok(models::ApiKeyRequest {
            name: spec.name.clone(),
            owner,
            is_active: spec.active,
            key_permissions: models::KeyPermissions {
                presets: or_empty(&spec.presets),
                permissions: or_empty(&spec.permissions),
            },
            hashed: false,
        })
    }
}

impl Validate for ApiKey {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let has_presets = spec.presets.as_ref().is_some_and(|p| !p.is_empty());
        let has_permissions = spec.permissions.as_ref().is_some_and(|p| !p.is_empty());

        Validator::new()
            .exactly_one(
                "spec.owner",
                &[("userId", spec.owner.user_id.is_some()), ("teamId", spec.owner.team_id.is_some())],
            )
            .check("spec", has_presets || has_permissions, "at least one preset or permission must be set")
            .finish()
    }
}
