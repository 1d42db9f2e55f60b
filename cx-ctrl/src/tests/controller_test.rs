use std::time::Duration;

use assertables::*;
use clockabilly::{
    DateTime,
    Utc,
};
use cx_client::CoralogixError;
use cx_client::models::outbound_webhook::OUTGOING_WEBHOOKS;
use cx_client::models::tco::TCO_LOGS_POLICIES;
use kube::runtime::controller::Action;
use mockall::predicate;
use serde_json::json;

use super::*;
use crate::controller::*;
use crate::errors::AnyhowError;

fn webhook_path() -> String {
    cx_object_path("v1alpha1", "outboundwebhooks", TEST_NAMESPACE, TEST_WEBHOOK_NAME)
}

fn test_tco_logs_policies() -> v1alpha1::TCOLogsPolicies {
    serde_json::from_value(json!({
        "apiVersion": "coralogix.com/v1alpha1",
        "kind": "TCOLogsPolicies",
        "metadata": {"name": "tco", "namespace": TEST_NAMESPACE, "generation": TEST_GENERATION},
        "spec": {"policies": [{
            "name": "low-priority-debug",
            "priority": "low",
            "severities": ["debug"],
        }]},
    }))
    .unwrap()
}

#[rstest]
#[case::no_status(None, None, true)]
#[case::up_to_date(Some(3), None, false)]
#[case::stale(Some(2), None, true)]
#[case::deleting(Some(3), Some(1_700_000_000), true)]
fn test_needs_reconcile(
    mut test_outbound_webhook: v1alpha1::OutboundWebhook,
    #[case] observed: Option<i64>,
    #[case] deleted_at: Option<i64>,
    #[case] expected: bool,
) {
    match observed {
        Some(g) => test_outbound_webhook.status.as_mut().unwrap().observed_generation = Some(g),
        None => test_outbound_webhook.status = None,
    }
    test_outbound_webhook.metadata.deletion_timestamp =
        deleted_at.map(|ts| metav1::Time(DateTime::<Utc>::from_timestamp(ts, 0).unwrap()));

    assert_eq!(needs_reconcile(&test_outbound_webhook), expected);
}

#[rstest]
#[tokio::test]
async fn test_sync_create(#[with(None)] test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_create()
        .with(predicate::eq(OUTGOING_WEBHOOKS.path), predicate::always())
        .returning(|_, _| Ok(json!({"id": TEST_WEBHOOK_ID})));
    let ctx = make_ctx(client, backend, opts);

    let res = sync(&test_outbound_webhook, &ctx).await.unwrap();
    assert_eq!(res, (Some(TEST_WEBHOOK_ID.into()), REASON_REMOTE_CREATED));
}

#[rstest]
#[tokio::test]
async fn test_sync_update(test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_get()
        .with(predicate::eq(OUTGOING_WEBHOOKS.path), predicate::eq(TEST_WEBHOOK_ID))
        .returning(|_, _| Ok(Some(json!({"id": TEST_WEBHOOK_ID}))));
    backend
        .expect_update()
        .with(predicate::eq(OUTGOING_WEBHOOKS.path), predicate::eq(TEST_WEBHOOK_ID), predicate::always())
        .times(1)
        .returning(|_, _, _| Ok(json!({})));
    backend.expect_create().never();
    let ctx = make_ctx(client, backend, opts);

    let res = sync(&test_outbound_webhook, &ctx).await.unwrap();
    assert_eq!(res, (Some(TEST_WEBHOOK_ID.into()), REASON_REMOTE_UPDATED));
}

#[rstest]
#[tokio::test]
#[traced_test]
async fn test_sync_recreates_missing_backend_object(test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend.expect_get().returning(|_, _| Ok(None));
    backend.expect_update().never();
    backend
        .expect_create()
        .times(1)
        .returning(|_, _| Ok(json!({"id": "webhook-new"})));
    let ctx = make_ctx(client, backend, opts);

    let res = sync(&test_outbound_webhook, &ctx).await.unwrap();
    assert_eq!(res, (Some("webhook-new".into()), REASON_REMOTE_CREATED));
    assert!(logs_contain("no longer exists, recreating it"));
}

#[rstest]
#[tokio::test]
async fn test_sync_create_no_id(#[with(None)] test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend.expect_create().returning(|_, _| Ok(json!({})));
    let ctx = make_ctx(client, backend, opts);

    let (reason, err) = sync(&test_outbound_webhook, &ctx).await.unwrap_err();
    assert_eq!(reason, REASON_REMOTE_SYNC_FAILED);
    assert_contains!(err.to_string(), "did not contain an id");
}

#[rstest]
#[tokio::test]
async fn test_sync_validation_failed(mut test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    test_outbound_webhook.spec.outbound_webhook_type = Default::default();
    let ctx = make_ctx(client, MockCoralogixApi::new(), opts);

    let (reason, err) = sync(&test_outbound_webhook, &ctx).await.unwrap_err();
    assert_eq!(reason, REASON_VALIDATION_FAILED);
    assert!(err.is::<ValidationError>());
}

#[rstest]
#[tokio::test]
async fn test_sync_extraction_failed(test_alert: v1beta1::Alert, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_list()
        .with(predicate::eq(OUTGOING_WEBHOOKS.path))
        .returning(|_| Ok(json!({"deployed": []})));
    backend.expect_create().never();
    let ctx = make_ctx(client, backend, opts);

    let (reason, _) = sync(&test_alert, &ctx).await.unwrap_err();
    assert_eq!(reason, REASON_EXTRACTION_FAILED);
}

#[rstest]
#[tokio::test]
async fn test_sync_backend_error(#[with(None)] test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_create()
        .returning(|_, _| Err(CoralogixError::Api { status: 500, message: "boom".into() }.into()));
    let ctx = make_ctx(client, backend, opts);

    let (reason, err) = sync(&test_outbound_webhook, &ctx).await.unwrap_err();
    assert_eq!(reason, REASON_REMOTE_SYNC_FAILED);
    assert_contains!(err.to_string(), "HTTP 500");
}

#[rstest]
#[tokio::test]
async fn test_sync_singleton(opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_replace()
        .with(predicate::eq(TCO_LOGS_POLICIES.path), predicate::always())
        .times(1)
        .returning(|_, _| Ok(json!({})));
    let ctx = make_ctx(client, backend, opts);

    let res = sync(&test_tco_logs_policies(), &ctx).await.unwrap();
    assert_eq!(res, (None, REASON_REMOTE_CREATED));
}

#[rstest]
#[tokio::test]
async fn test_apply(#[with(None)] test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend.expect_create().returning(|_, _| Ok(json!({"id": TEST_WEBHOOK_ID})));
    let ctx = make_ctx(client.clone(), backend, opts);

    fake_apiserver
        .handle_status_patch(
            webhook_path(),
            &[r#""reason":"RemoteCreatedSuccessfully""#, r#""id":"webhook-5678""#],
            serde_json::to_value(&test_outbound_webhook).unwrap(),
        )
        .build();

    let api = kube::Api::namespaced(client, TEST_NAMESPACE);
    let res = apply(&api, &test_outbound_webhook, &ctx).await.unwrap();
    assert_eq!(res, Action::requeue(Duration::from_secs(DEFAULT_RESYNC_SECONDS)));
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_apply_failed(#[with(None)] test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_create()
        .returning(|_, _| Err(CoralogixError::Unauthorized(401).into()));
    let ctx = make_ctx(client.clone(), backend, opts);

    fake_apiserver
        .handle_status_patch(
            webhook_path(),
            &[r#""reason":"RemoteSyncFailed""#, r#""status":"False""#],
            serde_json::to_value(&test_outbound_webhook).unwrap(),
        )
        .build();

    let api = kube::Api::namespaced(client, TEST_NAMESPACE);
    let err = apply(&api, &test_outbound_webhook, &ctx).await.unwrap_err();
    assert_contains!(err.to_string(), "HTTP 401");
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
#[traced_test]
async fn test_cleanup_already_gone(test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_delete()
        .with(predicate::eq(OUTGOING_WEBHOOKS.path), predicate::eq(TEST_WEBHOOK_ID))
        .returning(|_, id| Err(CoralogixError::NotFound(id.into()).into()));
    let ctx = make_ctx(client.clone(), backend, opts);

    let api = kube::Api::namespaced(client, TEST_NAMESPACE);
    let res = cleanup(&api, &test_outbound_webhook, &ctx).await.unwrap();
    assert_eq!(res, Action::await_change());
    assert!(logs_contain("is already gone"));
}

#[rstest]
#[tokio::test]
async fn test_cleanup_never_synced(#[with(None)] test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend.expect_delete().never();
    let ctx = make_ctx(client.clone(), backend, opts);

    let api = kube::Api::namespaced(client, TEST_NAMESPACE);
    let res = cleanup(&api, &test_outbound_webhook, &ctx).await.unwrap();
    assert_eq!(res, Action::await_change());
}

#[rstest]
#[tokio::test]
async fn test_cleanup_singleton(opts: Options) {
    let (_, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_clear()
        .with(predicate::eq(TCO_LOGS_POLICIES.path))
        .times(1)
        .returning(|_| Ok(()));
    let ctx = make_ctx(client.clone(), backend, opts);

    let api = kube::Api::namespaced(client, TEST_NAMESPACE);
    let res = cleanup(&api, &test_tco_logs_policies(), &ctx).await.unwrap();
    assert_eq!(res, Action::await_change());
}

#[rstest]
#[tokio::test]
async fn test_cleanup_failed(test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut backend = MockCoralogixApi::new();
    backend
        .expect_delete()
        .returning(|_, _| Err(CoralogixError::Transport("connection reset".into()).into()));
    let ctx = make_ctx(client.clone(), backend, opts);

    fake_apiserver
        .handle_status_patch(
            webhook_path(),
            &[r#""reason":"RemoteDeletionFailed""#],
            serde_json::to_value(&test_outbound_webhook).unwrap(),
        )
        .build();

    let api = kube::Api::namespaced(client, TEST_NAMESPACE);
    let err = cleanup(&api, &test_outbound_webhook, &ctx).await.unwrap_err();
    assert_contains!(err.to_string(), "connection reset");
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
#[traced_test]
async fn test_error_policy_validation(test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let ctx = Arc::new(make_ctx(client, MockCoralogixApi::new(), opts));
    let err = AnyhowError::from(anyhow::Error::from(ValidationError { messages: vec!["spec.name: bad".into()] }));

    let action = error_policy(Arc::new(test_outbound_webhook), &err, ctx);
    assert_eq!(action, Action::await_change());
    assert!(logs_contain("reconcile failed"));
}

#[rstest]
#[tokio::test]
async fn test_error_policy_retry(test_outbound_webhook: v1alpha1::OutboundWebhook, opts: Options) {
    let (_, client) = make_fake_apiserver();
    let ctx = Arc::new(make_ctx(client, MockCoralogixApi::new(), opts));
    let err = AnyhowError::from(anyhow::Error::from(CoralogixError::Transport("timeout".into())));

    let action = error_policy(Arc::new(test_outbound_webhook), &err, ctx);
    assert_eq!(action, Action::requeue(REQUEUE_ERROR_DURATION));
}
