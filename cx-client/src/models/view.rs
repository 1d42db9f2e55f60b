use std::collections::BTreeMap;

use serde::Serialize;

use crate::endpoint::Endpoint;

pub const VIEWS: Endpoint = Endpoint::crud("mgmt/openapi/latest/logs/views/v1", "/id");
pub const VIEW_FOLDERS: Endpoint = Endpoint::crud("mgmt/openapi/latest/logs/view-folders/v1", "/id");

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    pub name: String,
    pub search_query: Option<SearchQuery>,
    pub time_selection: TimeSelectionModel,
    pub filters: SelectedFilters,
    pub folder_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub query: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeSelectionModel {
    QuickSelection(QuickTimeSelection),
    CustomSelection(CustomTimeSelection),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickTimeSelection {
    pub caption: String,
    pub seconds: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTimeSelection {
    pub from_time: String,
    pub to_time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFilters {
    pub filters: Vec<ViewFilterModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFilterModel {
    pub name: String,
    pub selected_values: BTreeMap<String, bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFolderRequest {
    pub name: String,
}
