use assertables::*;
use rocket::serde::json::Json;
use serde_json::{
    Value,
    json,
};

use super::*;
use crate::webhook::conversion::*;

fn review(desired: &str, objects: Vec<Value>) -> ConversionReview {
    ConversionReview {
        api_version: "apiextensions.k8s.io/v1".into(),
        kind: "ConversionReview".into(),
        request: Some(ConversionRequest {
            uid: "abcd-1234".into(),
            desired_api_version: desired.into(),
            objects,
        }),
        response: None,
    }
}

#[rstest]
fn test_convert_review_to_v1beta1(test_legacy_alert: v1alpha1::Alert) {
    let obj = serde_json::to_value(&test_legacy_alert).unwrap();
    let res = convert_review(review(V1BETA1_API_VERSION, vec![obj]));
    let resp = res.response.unwrap();

    assert_eq!(res.api_version, "apiextensions.k8s.io/v1");
    assert_none!(res.request);
    assert_eq!(resp.uid, "abcd-1234");
    assert_eq!(resp.result.status, RESULT_SUCCESS);
    assert_eq!(resp.converted_objects.len(), 1);
    assert_eq!(resp.converted_objects[0]["apiVersion"], V1BETA1_API_VERSION);
    assert_eq!(resp.converted_objects[0]["metadata"]["name"], TEST_ALERT_NAME);
}

#[rstest]
fn test_convert_review_round_trip_keeps_name(test_alert: v1beta1::Alert) {
    let obj = serde_json::to_value(&test_alert).unwrap();
    let res = convert_review(review(V1ALPHA1_API_VERSION, vec![obj]));
    let resp = res.response.unwrap();

    assert_eq!(resp.result.status, RESULT_SUCCESS);
    assert_eq!(resp.converted_objects[0]["apiVersion"], V1ALPHA1_API_VERSION);
    assert_eq!(resp.converted_objects[0]["spec"]["name"], "too many errors");
}

#[rstest]
#[traced_test]
fn test_convert_review_unsupported_kind(test_outbound_webhook: v1alpha1::OutboundWebhook) {
    let obj = serde_json::to_value(&test_outbound_webhook).unwrap();
    let resp = convert_review(review(V1BETA1_API_VERSION, vec![obj])).response.unwrap();

    assert_eq!(resp.uid, "abcd-1234");
    assert_eq!(resp.result.status, RESULT_FAILURE);
    assert!(resp.converted_objects.is_empty());
    assert_contains!(resp.result.message.unwrap(), "OutboundWebhook");
    assert!(logs_contain("conversion to coralogix.com/v1beta1 failed"));
}

#[rstest]
fn test_convert_review_missing_request() {
    let mut rev = review(V1BETA1_API_VERSION, vec![]);
    rev.request = None;
    let resp = convert_review(rev).response.unwrap();

    assert_eq!(resp.result.status, RESULT_FAILURE);
    assert_eq!(resp.result.message, Some("missing request".into()));
}

#[rstest]
#[tokio::test]
async fn test_handler(test_legacy_alert: v1alpha1::Alert) {
    let body: ConversionReview = serde_json::from_value(json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "ConversionReview",
        "request": {
            "uid": "abcd-1234",
            "desiredAPIVersion": V1BETA1_API_VERSION,
            "objects": [test_legacy_alert],
        },
    }))
    .unwrap();

    let res = handler(Json(body)).await.into_inner();
    let resp = res.response.unwrap();
    assert_eq!(resp.result.status, RESULT_SUCCESS);
    assert_eq!(resp.converted_objects[0]["kind"], "Alert");
}
