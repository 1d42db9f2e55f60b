use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::dashboard as models;
use serde_json::Value;

use super::CoralogixResource;
use crate::errors::*;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for Dashboard {
    type Request = models::DashboardRequest;

    fn endpoint() -> Endpoint {
        models::DASHBOARDS
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::DashboardRequest> {
        let spec = &self.spec;
        let raw = match (&spec.json, &spec.config_map_ref) {
            (Some(json), None) => json.clone(),
            (None, Some(cm)) => refs.config_map_value(cm).await?,
            _ => return Err(ExtractError::invalid_value("exactly one of json or configMapRef must be set")),
        };
        let dashboard: Value = serde_json::from_str(&raw)
            .map_err(|e| ExtractError::invalid_value(&format!("dashboard is not valid JSON: {e}")))?;

        let folder = match &spec.folder_ref {
            None => None,
            Some(DashboardFolderRef { backend_ref: Some(br), resource_ref: None }) => match (&br.id, &br.path) {
                (Some(id), None) => Some(models::DashboardFolder::FolderId(id.clone())),
                (None, Some(path)) => Some(models::DashboardFolder::FolderPath(models::FolderPath {
                    segments: path.split('/').filter(|s| !s.is_empty()).map(String::from).collect(),
                })),
                _ => return Err(ExtractError::invalid_value("folderRef.backendRef must set exactly one of id or path")),
            },
            Some(DashboardFolderRef { backend_ref: None, resource_ref: Some(rr) }) => {
                Some(models::DashboardFolder::FolderId(refs.resolve::<DashboardsFolder>(rr).await?))
            },
            Some(_) => return Err(ExtractError::invalid_value("folderRef must set exactly one of backendRef or resourceRef")),
        };

        Ok(models::DashboardRequest { dashboard, folder })
    }
}

impl Validate for Dashboard {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let mut v = Validator::new();
        v.exactly_one("spec", &[("json", spec.json.is_some()), ("configMapRef", spec.config_map_ref.is_some())]);
        if let Some(json) = &spec.json {
            v.check("spec.json", serde_json::from_str::<Value>(json).is_ok(), "must be valid JSON");
        }
        if let Some(folder) = &spec.folder_ref {
            v.exactly_one(
                "spec.folderRef",
                &[("backendRef", folder.backend_ref.is_some()), ("resourceRef", folder.resource_ref.is_some())],
            );
            if let Some(br) = &folder.backend_ref {
                v.exactly_one("spec.folderRef.backendRef", &[("id", br.id.is_some()), ("path", br.path.is_some())]);
            }
        }
        v.finish()
    }
}

#[async_trait]
impl CoralogixResource for DashboardsFolder {
    type Request = models::DashboardFolderRequest;

    fn endpoint() -> Endpoint {
        models::DASHBOARD_FOLDERS
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::DashboardFolderRequest> {
        let spec = &self.spec;
        let parent_id = match (&spec.parent_folder_id, &spec.parent_folder_ref) {
            (Some(id), None) => Some(id.clone()),
            (None, Some(rr)) => Some(refs.resolve::<DashboardsFolder>(rr).await?),
            (None, None) => None,
            _ => return Err(ExtractError::invalid_value("at most one of parentFolderId or parentFolderRef may be set")),
        };

        Ok(models::DashboardFolderRequest {
            folder: models::DashboardFolderSpec { id: spec.custom_id.clone(), name: spec.name.clone(), parent_id },
        })
    }
}

impl Validate for DashboardsFolder {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        Validator::new()
            .check("spec.name", !spec.name.is_empty(), "must not be empty")
            .at_most_one(
                "spec",
                &[
                    ("parentFolderId", spec.parent_folder_id.is_some()),
                    ("parentFolderRef", spec.parent_folder_ref.is_some()),
                ],
            )
            .finish()
    }
}
