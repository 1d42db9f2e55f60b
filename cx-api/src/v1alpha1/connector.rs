use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "Connector", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct ConnectorSpec {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_: ConnectorType,
    pub connector_config: ConnectorConfig,
    pub config_overrides: Option<Vec<EntityTypeConfigOverrides>>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum ConnectorType {
    #[default]
    Slack,
    GenericHttps,
    PagerDuty,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum NotificationEntityType {
    #[default]
    Alerts,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfig {
    pub fields: Vec<ConnectorConfigField>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfigField {
    pub field_name: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeConfigOverrides {
    #[serde(default)]
    pub entity_type: NotificationEntityType,
    pub fields: Vec<TemplatedConnectorConfigField>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatedConnectorConfigField {
    pub field_name: String,
    pub template: String,
}
