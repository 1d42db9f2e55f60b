use std::sync::Arc;

use cx_api::{
    Condition,
    ConditionStatus,
};
use cx_client::{
    CoralogixError,
    Endpoint,
    SyncMode,
};
use cx_core::conditions::{
    next_status,
    remote_synced,
};
use cx_core::errors::*;
use cx_core::prelude::*;
use futures::{
    StreamExt,
    TryStreamExt,
    future,
};
use kube::api::Patch;
use kube::runtime::controller::{
    Action,
    Controller,
};
use kube::runtime::finalizer::{
    Error as FinalizerError,
    Event,
    finalizer,
};
use kube::runtime::{
    WatchStreamExt,
    reflector,
    watcher,
};
use serde_json::{
    Value,
    json,
};
use tokio::time::Duration;
use tracing::*;

use crate::context::CxContext;
use crate::errors::*;

pub const REQUEUE_ERROR_DURATION: Duration = Duration::from_secs(ERROR_RETRY_DELAY_SECONDS);

// The id we got back from the backend (if any) and the condition reason to report
type SyncOutcome = (Option<String>, &'static str);
type SyncFailure = (&'static str, anyhow::Error);

fn full_name<K: ResourceExt>(obj: &K) -> String {
    format!("{}/{}", obj.namespace().unwrap_or_default(), obj.name_any())
}

// Use the "observed generation" field to filter out our own status updates; objects that are
// being deleted always need to go through the finalizer.
//
// We don't use the predicate::generation filter here because it drops events when an object is
// deleted and recreated with the same name.
pub(crate) fn needs_reconcile<K: CoralogixResource>(obj: &K) -> bool {
    obj.meta().deletion_timestamp.is_some()
        || obj.remote_status().and_then(|s| s.observed_generation).unwrap_or_default()
            != obj.meta().generation.unwrap_or(1)
}

fn was_synced<K: CoralogixResource>(obj: &K) -> bool {
    obj.remote_status()
        .and_then(|s| s.condition(REMOTE_SYNCED_CONDITION))
        .is_some_and(|c| c.status == ConditionStatus::True)
}

pub(crate) async fn sync<K: CoralogixResource>(obj: &K, ctx: &CxContext) -> Result<SyncOutcome, SyncFailure> {
    obj.validate().map_err(|e| (REASON_VALIDATION_FAILED, e.into()))?;

    let refs = ctx.refs_for(&obj.namespace().unwrap_or_default());
    let req = obj.extract_request(&refs).await.map_err(|e| (REASON_EXTRACTION_FAILED, e))?;
    let body = serde_json::to_value(&req).map_err(|e| (REASON_EXTRACTION_FAILED, e.into()))?;

    push(obj, &body, ctx).await.map_err(|e| (REASON_REMOTE_SYNC_FAILED, e))
}

async fn push<K: CoralogixResource>(obj: &K, body: &Value, ctx: &CxContext) -> anyhow::Result<SyncOutcome> {
    let endpoint = K::endpoint();
    match (endpoint.mode, obj.remote_id()) {
        (SyncMode::Singleton, _) => {
            debug!("replacing settings at {}", endpoint.path);
            ctx.backend.replace(endpoint.path, body).await?;
            let reason = if was_synced(obj) { REASON_REMOTE_UPDATED } else { REASON_REMOTE_CREATED };
            Ok((None, reason))
        },
        (SyncMode::Crud, None) => create(endpoint, obj, body, ctx).await,
        (SyncMode::Crud, Some(id)) => {
            if ctx.backend.get(endpoint.path, id).await?.is_none() {
                warn!("backend object {id} no longer exists, recreating it");
                return create(endpoint, obj, body, ctx).await;
            }
            ctx.backend.update(endpoint.path, id, body).await?;
            Ok((Some(id.into()), REASON_REMOTE_UPDATED))
        },
    }
}

async fn create<K: CoralogixResource>(
    endpoint: Endpoint,
    obj: &K,
    body: &Value,
    ctx: &CxContext,
) -> anyhow::Result<SyncOutcome> {
    let resp = ctx.backend.create(endpoint.path, body).await?;
    let id = endpoint
        .extract_id(&resp)
        .ok_or_else(|| CxControllerError::missing_remote_id(&full_name(obj)))?;
    info!("created backend object {id}");
    Ok((Some(id), REASON_REMOTE_CREATED))
}

async fn patch_status<K: CoralogixResource>(
    api: &kube::Api<K>,
    obj: &K,
    id: Option<String>,
    condition: Condition,
    ctx: &CxContext,
) -> EmptyResult {
    let status = next_status(obj.remote_status(), id, condition, obj.meta().generation, ctx.clock.now());
    let patch = json!({ "status": status });
    debug!("sending status patch: {patch}");
    api.patch_status(&obj.name_any(), &Default::default(), &Patch::Merge(patch)).await?;
    Ok(())
}

pub(crate) async fn apply<K: CoralogixResource>(
    api: &kube::Api<K>,
    obj: &K,
    ctx: &CxContext,
) -> Result<Action, AnyhowError> {
    let generation = obj.meta().generation;
    let (id, condition, res) = match sync(obj, ctx).await {
        Ok((id, reason)) => {
            info!("{reason}");
            let resync = Action::requeue(Duration::from_secs(ctx.opts.resync_seconds));
            (id, remote_synced(ConditionStatus::True, reason, "", generation), Ok(resync))
        },
        Err((reason, err)) => (None, remote_synced(ConditionStatus::False, reason, &err.to_string(), generation), Err(err)),
    };

    patch_status(api, obj, id, condition, ctx).await?;
    Ok(res?)
}

pub(crate) async fn cleanup<K: CoralogixResource>(
    api: &kube::Api<K>,
    obj: &K,
    ctx: &CxContext,
) -> Result<Action, AnyhowError> {
    let endpoint = K::endpoint();
    let res = match (endpoint.mode, obj.remote_id()) {
        (SyncMode::Singleton, _) => ctx.backend.clear(endpoint.path).await,
        (SyncMode::Crud, Some(id)) => match ctx.backend.delete(endpoint.path, id).await {
            Err(err) if CoralogixError::is_not_found(&err) => {
                info!("backend object {id} is already gone");
                Ok(())
            },
            res => res,
        },
        (SyncMode::Crud, None) => {
            info!("object was never synced, nothing to delete");
            Ok(())
        },
    };

    if let Err(err) = res {
        let condition = remote_synced(
            ConditionStatus::False,
            REASON_REMOTE_DELETION_FAILED,
            &err.to_string(),
            obj.meta().generation,
        );
        if let Err(e) = patch_status(api, obj, None, condition, ctx).await {
            warn!("could not record deletion failure: {e}");
        }
        return Err(err.into());
    }

    info!("removed from Coralogix");
    Ok(Action::await_change())
}

#[instrument(parent=None, skip_all, fields(kind=%K::kind(&()), object=%full_name(obj.as_ref())))]
pub async fn reconcile<K: CoralogixResource>(obj: Arc<K>, ctx: Arc<CxContext>) -> Result<Action, AnyhowError> {
    let ns = obj
        .namespace()
        .ok_or_else(|| CxControllerError::missing_namespace(&obj.name_any()))?;
    let api: kube::Api<K> = kube::Api::namespaced(ctx.client.clone(), &ns);

    finalizer(&api, FINALIZER_NAME, obj, |event| async {
        match event {
            Event::Apply(obj) => apply(&api, obj.as_ref(), &ctx).await,
            Event::Cleanup(obj) => cleanup(&api, obj.as_ref(), &ctx).await,
        }
    })
    .await
    .map_err(|err| match err {
        FinalizerError::ApplyFailed(e) | FinalizerError::CleanupFailed(e) => e,
        e => anyhow!(e).into(),
    })
}

pub fn error_policy<K: CoralogixResource>(obj: Arc<K>, err: &AnyhowError, _: Arc<CxContext>) -> Action {
    cxerr!(err, "reconcile failed on {} {}", K::kind(&()), full_name(obj.as_ref()));

    // Nothing will change for an invalid spec until someone edits it
    if err.is::<ValidationError>() {
        Action::await_change()
    } else {
        Action::requeue(REQUEUE_ERROR_DURATION)
    }
}

pub async fn run<K: CoralogixResource>(ctx: Arc<CxContext>) {
    let api: kube::Api<K> = match &ctx.opts.namespace {
        Some(ns) => kube::Api::namespaced(ctx.client.clone(), ns),
        None => kube::Api::all(ctx.client.clone()),
    };

    let (reader, writer) = reflector::store();
    let stream = watcher(api, Default::default())
        .default_backoff()
        .reflect(writer)
        .applied_objects()
        .try_filter(|obj| future::ready(needs_reconcile(obj)));

    info!("starting {} controller", K::kind(&()));
    Controller::for_stream(stream, reader)
        .run(reconcile::<K>, error_policy::<K>, ctx)
        .for_each(|_| future::ready(()))
        .await;
}
