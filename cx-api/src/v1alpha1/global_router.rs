use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use super::NotificationEntityType;
use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "GlobalRouter", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct GlobalRouterSpec {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub entity_type: NotificationEntityType,
    pub entity_labels: Option<BTreeMap<String, String>>,
    pub rules: Option<Vec<RoutingRule>>,
    pub fallback: Option<Vec<RoutingTarget>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRule {
    pub name: String,
    pub condition: String,
    pub targets: Vec<RoutingTarget>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingTarget {
    pub connector: NotificationRef,
    pub preset: Option<NotificationRef>,
    pub custom_details: Option<BTreeMap<String, String>>,
}

// Exactly one of the two must be set
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRef {
    pub backend_ref: Option<BackendRef>,
    pub resource_ref: Option<ResourceRef>,
}
