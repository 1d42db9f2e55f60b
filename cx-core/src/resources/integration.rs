use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::integration as models;
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
impl CoralogixResource for Integration {
    type Request = models::IntegrationRequest;

    fn endpoint() -> Endpoint {
        models::INTEGRATIONS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::IntegrationRequest> {
        let spec = &self.spec;
        let parameters = spec
            .parameters
            .iter()
            .map(|(key, value)| Ok(models::IntegrationParameter { key: key.clone(), value: parameter_value(key, value)? }))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(models::IntegrationRequest {
            metadata: models::IntegrationMetadata {
                integration_key: spec.integration_key.clone(),
                version: spec.version.clone(),
                parameters,
            },
        })
    }
}

impl Validate for Integration {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let mut v = Validator::new();
        v.check("spec.integrationKey", !spec.integration_key.is_empty(), "must not be empty");
        for (key, value) in &spec.parameters {
            v.check(&format!("spec.parameters.{key}"), !value.is_null(), "must not be null");
        }
        v.finish()
    }
}

// Lists of strings are sent as string lists; any other list or object is sent as raw JSON
fn parameter_value(key: &str, value: &Value) -> anyhow::Result<models::ParameterValue> {
    match value {
        Value::String(s) => Ok(models::ParameterValue::StringValue(s.clone())),
        Value::Bool(b) => Ok(models::ParameterValue::BooleanValue(*b)),
        Value::Number(n) => n
            .as_f64()
            .map(models::ParameterValue::NumericValue)
            .ok_or_else(|| ExtractError::invalid_value(&format!("parameter {key} is not a finite number"))),
        Value::Array(items) => {
            match items.iter().map(|i| i.as_str().map(String::from)).collect::<Option<Vec<_>>>() {
                Some(strings) => Ok(models::ParameterValue::StringList(strings)),
                None => Ok(models::ParameterValue::JsonValue(value.clone())),
            }
        },
        Value::Object(_) => Ok(models::ParameterValue::JsonValue(value.clone())),
        Value::Null => Err(ExtractError::invalid_value(&format!("parameter {key} is null"))),
    }
}
