use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::iam as models;
use tracing::*;

use super::CoralogixResource;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for CustomRole {
    type Request = models::CustomRoleRequest;

    fn endpoint() -> Endpoint {
        models::CUSTOM_ROLES
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::CustomRoleRequest> {
        let spec = &self.spec;
        Ok(models::CustomRoleRequest {
            name: spec.name.clone(),
            description: spec.description.clone(),
            parent_role_name: spec.parent_role_name.clone(),
            permissions: spec.permissions.clone(),
        })
    }
}

impl Validate for CustomRole {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        Validator::new()
            .check("spec.parentRoleName", !spec.parent_role_name.is_empty(), "must not be empty")
            .check("spec.permissions", !spec.permissions.is_empty(), "must not be empty")
            .finish()
    }
}

#[async_trait]
impl CoralogixResource for Group {
    type Request = models::TeamGroupRequest;

    fn endpoint() -> Endpoint {
        models::TEAM_GROUPS
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::TeamGroupRequest> {
        let spec = &self.spec;

        let mut user_ids = vec![];
        for member in spec.members.iter().flatten() {
            let id = refs
                .lookup_backend_id(
                    models::USERS_PATH,
                    models::USERS_LIST_POINTER,
                    models::USER_NAME_POINTER,
                    "/id",
                    &member.user_name,
                )
                .await?;
            debug!("group member {} has user id {id}", member.user_name);
            user_ids.push(id);
        }

        let mut role_ids = vec![];
        for role in &spec.custom_roles {
            role_ids.push(refs.resolve_numeric::<CustomRole>(role).await?);
        }

        let scope_id = match &spec.scope {
            Some(scope) => Some(refs.resolve::<Scope>(scope).await?),
            None => None,
        };

        Ok(models::TeamGroupRequest {
            name: spec.name.clone(),
            description: spec.description.clone(),
            user_ids,
            role_ids,
            scope_id,
        })
    }
}

impl Validate for Group {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .check("spec.name", !self.spec.name.is_empty(), "must not be empty")
            .finish()
    }
}

#[async_trait]
impl CoralogixResource for Scope {
    type Request = models::ScopeRequest;

    fn endpoint() -> Endpoint {
        models::SCOPES
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::ScopeRequest> {
        let spec = &self.spec;
        Ok(models::ScopeRequest {
            display_name: spec.name.clone(),
            description: spec.description.clone(),
            default_expression: spec.default_expression.clone(),
            filters: spec
                .filters
                .iter()
                .map(|f| models::ScopeFilterModel {
                    entity_type: match f.entity_type {
                        ScopeEntityType::Unspecified => models::ScopeEntityType::Unspecified,
                        ScopeEntityType::Logs => models::ScopeEntityType::Logs,
                        ScopeEntityType::Spans => models::ScopeEntityType::Spans,
                    },
                    expression: f.expression.clone(),
                })
                .collect(),
        })
    }
}

impl Validate for Scope {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .check("spec.defaultExpression", !self.spec.default_expression.is_empty(), "must not be empty")
            .finish()
    }
}

#[async_trait]
impl CoralogixResource for Team {
    type Request = models::TeamRequest;

    fn endpoint() -> Endpoint {
        models::TEAMS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::TeamRequest> {
        let spec = &self.spec;
        Ok(models::TeamRequest {
            team_name: spec.name.clone(),
            team_admins_emails: spec.team_admins_email.clone(),
            daily_quota: spec.daily_quota,
        })
    }
}

impl Validate for Team {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        Validator::new()
            .check("spec.name", !spec.name.is_empty(), "must not be empty")
            .check("spec.dailyQuota", spec.daily_quota.is_none_or(|q| q > 0.0), "must be greater than zero")
            .finish()
    }
}
