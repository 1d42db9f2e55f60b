use serde::Serialize;

use crate::endpoint::Endpoint;

pub const CUSTOM_ROLES: Endpoint = Endpoint::crud("mgmt/openapi/latest/aaa/custom-roles/v2", "/id");
pub const TEAM_GROUPS: Endpoint = Endpoint::crud("mgmt/openapi/latest/aaa/team-groups/v1", "/groupId/id");
pub const SCOPES: Endpoint = Endpoint::crud("mgmt/openapi/latest/scopes/v1", "/scope/id");
pub const TEAMS: Endpoint = Endpoint::crud("mgmt/openapi/latest/aaa/teams/v1", "/teamId/id");

wire_enum!(ScopeEntityType {
    Unspecified => "ENTITY_TYPE_UNSPECIFIED",
    Logs => "ENTITY_TYPE_LOGS",
    Spans => "ENTITY_TYPE_SPANS",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRoleRequest {
    pub name: String,
    pub description: String,
    pub parent_role_name: String,
    pub permissions: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGroupRequest {
    pub name: String,
    pub description: Option<String>,
    pub user_ids: Vec<String>,
    pub role_ids: Vec<u32>,
    pub scope_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeRequest {
    pub display_name: String,
    pub description: Option<String>,
    pub default_expression: String,
    pub filters: Vec<ScopeFilterModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeFilterModel {
    pub entity_type: ScopeEntityType,
    pub expression: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub team_name: String,
    pub team_admins_emails: Vec<String>,
    pub daily_quota: Option<f64>,
}

// Team members are referenced by user name
pub const USERS_PATH: &str = "mgmt/openapi/latest/aaa/users/v1";
pub const USERS_LIST_POINTER: &str = "/users";
pub const USER_NAME_POINTER: &str = "/userName";
