use serde::Serialize;
use serde_json::Value;

use crate::endpoint::Endpoint;

pub const INTEGRATIONS: Endpoint = Endpoint::crud("mgmt/openapi/latest/integrations/integrations/v1", "/integrationId");

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationRequest {
    pub metadata: IntegrationMetadata,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationMetadata {
    pub integration_key: String,
    pub version: String,
    pub parameters: Vec<IntegrationParameter>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationParameter {
    pub key: String,
    #[serde(flatten)]
    pub value: ParameterValue,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterValue {
    StringValue(String),
    NumericValue(f64),
    BooleanValue(bool),
    StringList(Vec<String>),
    // Nested objects are sent verbatim
    JsonValue(Value),
}

impl Default for ParameterValue {
    fn default() -> Self {
        ParameterValue::StringValue(String::new())
    }
}
