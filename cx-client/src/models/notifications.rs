use std::collections::BTreeMap;

use serde::Serialize;

use crate::endpoint::Endpoint;

pub const CONNECTORS: Endpoint =
    Endpoint::crud("mgmt/openapi/latest/notifications/notification-center/v1/connectors", "/connector/id");
pub const PRESETS: Endpoint =
    Endpoint::crud("mgmt/openapi/latest/notifications/notification-center/v1/presets", "/preset/id");
pub const GLOBAL_ROUTERS: Endpoint =
    Endpoint::crud("mgmt/openapi/latest/notifications/notification-center/v1/global-routers", "/router/id");

wire_enum!(ConnectorType {
    Unspecified => "CONNECTOR_TYPE_UNSPECIFIED",
    Slack => "SLACK",
    GenericHttps => "GENERIC_HTTPS",
    PagerDuty => "PAGERDUTY",
});

wire_enum!(EntityType {
    Unspecified => "ENTITY_TYPE_UNSPECIFIED",
    Alerts => "ALERTS",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorRequest {
    pub connector: ConnectorModel,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorModel {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_: ConnectorType,
    pub connector_config: ConnectorConfigModel,
    pub config_overrides: Vec<EntityTypeConfigOverridesModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfigModel {
    pub fields: Vec<ConnectorConfigFieldModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfigFieldModel {
    pub field_name: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeConfigOverridesModel {
    pub entity_type: EntityType,
    pub fields: Vec<TemplatedFieldModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatedFieldModel {
    pub field_name: String,
    pub template: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetRequest {
    pub preset: PresetModel,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetModel {
    pub name: String,
    pub description: Option<String>,
    pub entity_type: EntityType,
    pub connector_type: ConnectorType,
    pub parent_id: Option<String>,
    pub config_overrides: Vec<PresetConfigOverridesModel>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetConfigOverridesModel {
    pub condition_type: ConditionTypeModel,
    pub payload_type: Option<String>,
    pub message_config: MessageConfigModel,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionTypeModel {
    MatchEntityType(MatchEntityTypeModel),
    MatchEntityTypeAndSubType(MatchEntityTypeAndSubTypeModel),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MatchEntityTypeModel {}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntityTypeAndSubTypeModel {
    pub entity_sub_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageConfigModel {
    pub fields: Vec<TemplatedFieldModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalRouterRequest {
    pub router: GlobalRouterModel,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalRouterModel {
    pub name: String,
    pub description: Option<String>,
    pub entity_type: EntityType,
    pub entity_labels: BTreeMap<String, String>,
    pub rules: Vec<RoutingRuleModel>,
    pub fallback: Vec<RoutingTargetModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRuleModel {
    pub name: String,
    pub condition: String,
    pub targets: Vec<RoutingTargetModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingTargetModel {
    pub connector_id: String,
    pub preset_id: Option<String>,
    pub custom_details: BTreeMap<String, String>,
}

pub const CONNECTORS_LIST_POINTER: &str = "/connectors";
pub const PRESETS_LIST_POINTER: &str = "/presets";
