use serde::Serialize;
use serde_json::Value;

use crate::endpoint::Endpoint;

pub const DASHBOARDS: Endpoint = Endpoint::crud("mgmt/openapi/latest/dashboards/dashboards/v1", "/dashboardId");
pub const DASHBOARD_FOLDERS: Endpoint = Endpoint::crud("mgmt/openapi/latest/dashboards/folders/v1", "/folderId");

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    // The dashboard model is opaque to the operator and passed through as-is
    pub dashboard: Value,
    #[serde(flatten)]
    pub folder: Option<DashboardFolder>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardFolder {
    FolderId(String),
    FolderPath(FolderPath),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPath {
    pub segments: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFolderRequest {
    pub folder: DashboardFolderSpec,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFolderSpec {
    pub id: Option<String>,
    pub name: String,
    pub parent_id: Option<String>,
}
