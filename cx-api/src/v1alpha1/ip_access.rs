use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::*;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "coralogix.com", version = "v1alpha1", kind = "IPAccess", namespaced)]
#[kube(status = "RemoteStatus")]
#[serde(rename_all = "camelCase")]
pub struct IPAccessSpec {
    #[serde(default)]
    pub enable_coralogix_customer_support_access: CustomerSupportAccess,
    pub ip_access: Vec<IpAccessRule>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum CustomerSupportAccess {
    #[default]
    Unspecified,
    Disabled,
    Enabled,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAccessRule {
    pub name: Option<String>,
    pub ip_range: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}
