use cx_core::conversion::convert_object;
use rocket::serde::json::Json;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;
use tracing::*;

pub const RESULT_SUCCESS: &str = "Success";
pub const RESULT_FAILURE: &str = "Failure";

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReview {
    pub api_version: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<ConversionRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ConversionResponse>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub uid: String,
    #[serde(rename = "desiredAPIVersion")]
    pub desired_api_version: String,
    #[serde(default)]
    pub objects: Vec<Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub uid: String,
    pub converted_objects: Vec<Value>,
    pub result: ConversionResult,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConversionResponse {
    fn success(uid: String, converted_objects: Vec<Value>) -> ConversionResponse {
        ConversionResponse {
            uid,
            converted_objects,
            result: ConversionResult { status: RESULT_SUCCESS.into(), message: None },
        }
    }

    fn failure(uid: String, message: String) -> ConversionResponse {
        ConversionResponse {
            uid,
            converted_objects: vec![],
            result: ConversionResult { status: RESULT_FAILURE.into(), message: Some(message) },
        }
    }
}

#[rocket::post("/convert", data = "<body>")]
#[instrument(parent=None, skip_all)]
pub async fn handler(body: Json<ConversionReview>) -> Json<ConversionReview> {
    Json(convert_review(body.into_inner()))
}

// The response echoes the request's apiVersion and uid; a single failed object fails the whole
// review
pub(crate) fn convert_review(review: ConversionReview) -> ConversionReview {
    let response = match review.request {
        None => {
            error!("conversion review did not contain a request");
            ConversionResponse::failure(String::new(), "missing request".into())
        },
        Some(req) => {
            debug!("converting {} objects to {}", req.objects.len(), req.desired_api_version);
            let converted: anyhow::Result<Vec<_>> = req
                .objects
                .into_iter()
                .map(|obj| convert_object(obj, &req.desired_api_version))
                .collect();
            match converted {
                Ok(objects) => ConversionResponse::success(req.uid, objects),
                Err(err) => {
                    warn!("conversion to {} failed: {err}", req.desired_api_version);
                    ConversionResponse::failure(req.uid, err.to_string())
                },
            }
        },
    };

    ConversionReview {
        api_version: review.api_version,
        kind: review.kind,
        request: None,
        response: Some(response),
    }
}
