mod alert;
mod alert_scheduler;
mod api_key;
mod archive;
mod dashboard;
mod data_set;
mod enrichment;
mod events2metric;
mod extension;
mod iam;
mod integration;
mod ip_access;
mod notifications;
mod outbound_webhook;
mod recording_rules;
mod rule_group;
mod slo;
mod tco;
mod view;

use std::fmt::Debug;

use async_trait::async_trait;
use cx_api::RemoteSynced;
use cx_client::Endpoint;
use k8s_openapi::NamespaceResourceScope;
use kube::Resource;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::refs::RefResolver;
use crate::validation::Validate;

// A custom resource that is mirrored by exactly one object (or one company-wide setting) on the
// Coralogix backend.  The reconciler is generic over this trait; each kind only has to say where
// its backend object lives and how to turn its spec into a request body.
#[async_trait]
pub trait CoralogixResource:
    Resource<DynamicType = (), Scope = NamespaceResourceScope>
    + RemoteSynced
    + Validate
    + Clone
    + Debug
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    type Request: Serialize + Send + Sync;

    fn endpoint() -> Endpoint;

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<Self::Request>;
}

pub(crate) fn or_empty<T: Clone>(v: &Option<Vec<T>>) -> Vec<T> {
    v.clone().unwrap_or_default()
}
