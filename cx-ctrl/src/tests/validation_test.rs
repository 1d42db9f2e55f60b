use assertables::*;
use kube::core::admission::{
    AdmissionRequest,
    AdmissionReview,
    Operation,
};
use kube::core::{
    DynamicObject,
    GroupVersionKind,
    GroupVersionResource,
    TypeMeta,
};
use rocket::serde::json::Json;
use serde_json::{
    Value,
    json,
};

use super::*;
use crate::webhook::validation::*;

fn adm_req(version: &str, kind: &str, plural: &str, obj: Value, op: Operation) -> AdmissionRequest<DynamicObject> {
    let dyn_obj: DynamicObject = serde_json::from_value(obj).unwrap();
    AdmissionRequest {
        types: TypeMeta { api_version: "admission.k8s.io/v1".into(), kind: "AdmissionReview".into() },
        uid: "12345-12345".into(),
        kind: GroupVersionKind::gvk(CORALOGIX_GROUP, version, kind),
        resource: GroupVersionResource::gvr(CORALOGIX_GROUP, version, plural),
        sub_resource: None,
        request_kind: None,
        request_resource: None,
        request_sub_resource: None,
        name: dyn_obj.name_any(),
        namespace: dyn_obj.namespace(),
        operation: op,
        user_info: Default::default(),
        object: Some(dyn_obj),
        old_object: None,
        dry_run: false,
        options: None,
    }
}

fn webhook_value(webhook: &v1alpha1::OutboundWebhook) -> Value {
    serde_json::to_value(webhook).unwrap()
}

#[rstest]
fn test_admit_valid_alert(test_alert: v1beta1::Alert) {
    let req = adm_req("v1beta1", "Alert", "alerts", serde_json::to_value(&test_alert).unwrap(), Operation::Create);
    let resp = admit(&req);
    assert!(resp.allowed);
}

#[rstest]
#[traced_test]
fn test_admit_invalid_webhook(test_outbound_webhook: v1alpha1::OutboundWebhook) {
    let mut obj = webhook_value(&test_outbound_webhook);
    obj["spec"]["outboundWebhookType"]["genericWebhook"] = json!({"url": "https://example.com/hook"});
    let req = adm_req("v1alpha1", "OutboundWebhook", "outboundwebhooks", obj, Operation::Update);

    let resp = admit(&req);
    assert!(!resp.allowed);
    assert_contains!(resp.result.message, "exactly one of");
    assert!(logs_contain("denying request"));
}

#[rstest]
fn test_admit_delete_always_allowed(test_outbound_webhook: v1alpha1::OutboundWebhook) {
    let mut obj = webhook_value(&test_outbound_webhook);
    obj["spec"]["outboundWebhookType"] = json!({});
    let req = adm_req("v1alpha1", "OutboundWebhook", "outboundwebhooks", obj, Operation::Delete);

    assert!(admit(&req).allowed);
}

#[rstest]
fn test_admit_unknown_kind(test_outbound_webhook: v1alpha1::OutboundWebhook) {
    let mut obj = webhook_value(&test_outbound_webhook);
    obj["kind"] = json!("Gizmo");
    let req = adm_req("v1alpha1", "Gizmo", "gizmos", obj, Operation::Create);

    let resp = admit(&req);
    assert!(!resp.allowed);
    assert_contains!(resp.result.message, "unsupported kind Gizmo");
}

#[rstest]
fn test_validate_legacy_alert(test_legacy_alert: v1alpha1::Alert) {
    let obj = serde_json::to_value(&test_legacy_alert).unwrap();
    assert_ok!(validate_object("v1alpha1", "Alert", obj));
}

#[rstest]
fn test_validate_unconvertible_legacy_alert(mut test_legacy_alert: v1alpha1::Alert) {
    test_legacy_alert.spec.alert_type = serde_json::from_value(json!({
        "metric": {
            "lucene": {
                "conditions": {
                    "metricField": "duration",
                    "arithmeticOperator": "Avg",
                    "alertWhen": "More",
                    "threshold": 3.0,
                    "sampleThresholdPercentage": 50,
                    "timeWindow": "FiveMinutes",
                },
            },
        },
    }))
    .unwrap();
    let obj = serde_json::to_value(&test_legacy_alert).unwrap();
    assert_err!(validate_object("v1alpha1", "Alert", obj));
}

#[rstest]
#[tokio::test]
async fn test_handler(test_outbound_webhook: v1alpha1::OutboundWebhook) {
    let req = adm_req(
        "v1alpha1",
        "OutboundWebhook",
        "outboundwebhooks",
        webhook_value(&test_outbound_webhook),
        Operation::Create,
    );
    let review = AdmissionReview { types: req.types.clone(), request: Some(req), response: None };

    let resp = handler(Json(review)).await.into_inner().response.unwrap();
    assert!(resp.allowed);
    assert_eq!(resp.uid, "12345-12345");
}

#[rstest]
#[tokio::test]
async fn test_handler_no_request() {
    let review: AdmissionReview<DynamicObject> =
        AdmissionReview { types: Default::default(), request: None, response: None };

    let resp = handler(Json(review)).await.into_inner().response.unwrap();
    assert!(!resp.allowed);
}
