use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use super::{
    ConnectorType,
    NotificationEntityType,
    TemplatedConnectorConfigField,
};
use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "Preset", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct PresetSpec {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub entity_type: NotificationEntityType,
    pub connector_type: ConnectorType,
    pub parent_id: Option<String>,
    pub config_overrides: Option<Vec<PresetConfigOverrides>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetConfigOverrides {
    pub condition_type: PresetConditionType,
    pub payload_type: Option<String>,
    pub message_config: MessageConfig,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetConditionType {
    pub match_entity_type: Option<MatchEntityType>,
    pub match_entity_type_and_sub_type: Option<MatchEntityTypeAndSubType>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
pub struct MatchEntityType {}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntityTypeAndSubType {
    pub entity_sub_type: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageConfig {
    pub fields: Vec<TemplatedConnectorConfigField>,
}
