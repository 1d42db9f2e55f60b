mod alert;

use cx_api::{
    v1alpha1,
    v1beta1,
};
use serde_json::Value;

pub use self::alert::{
    alert_to_v1alpha1,
    alert_to_v1beta1,
};
use crate::constants::*;
use crate::errors::*;

const ALERT_KIND: &str = "Alert";

// Converts a single object (as received in a ConversionReview) to the desired API version.  Objects
// already at the desired version are returned untouched.
pub fn convert_object(obj: Value, desired_api_version: &str) -> anyhow::Result<Value> {
    let api_version = obj
        .get("apiVersion")
        .and_then(Value::as_str)
        .ok_or_else(|| ConversionError::malformed("missing apiVersion"))?
        .to_string();
    let kind = obj
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| ConversionError::malformed("missing kind"))?
        .to_string();

    if api_version == desired_api_version {
        return Ok(obj);
    }

    match (kind.as_str(), api_version.as_str(), desired_api_version) {
        (ALERT_KIND, V1ALPHA1_API_VERSION, V1BETA1_API_VERSION) => {
            let alert: v1alpha1::Alert = serde_json::from_value(obj)?;
            Ok(serde_json::to_value(alert_to_v1beta1(&alert)?)?)
        },
        (ALERT_KIND, V1BETA1_API_VERSION, V1ALPHA1_API_VERSION) => {
            let alert: v1beta1::Alert = serde_json::from_value(obj)?;
            Ok(serde_json::to_value(alert_to_v1alpha1(&alert)?)?)
        },
        _ => Err(ConversionError::unsupported(&format!("{kind} from {api_version} to {desired_api_version}"))),
    }
}
