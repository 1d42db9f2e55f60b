use std::fmt::Debug;
use std::sync::Arc;

use cx_api::{
    ConfigMapKeyRef,
    RemoteSynced,
    ResourceRef,
};
use cx_client::CoralogixApi;
use k8s_openapi::NamespaceResourceScope;
use k8s_openapi::api::core::v1 as corev1;
use kube::api::Api;
use kube::Resource;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::*;

use crate::errors::*;

// Resolves cross-object references while building a backend request: other custom resources are
// read through the Kubernetes API, and objects that only exist in Coralogix are looked up by name
// in the backend listing.
#[derive(Clone)]
pub struct RefResolver {
    client: kube::Client,
    backend: Arc<dyn CoralogixApi>,
    namespace: String,
}

impl RefResolver {
    pub fn new(client: kube::Client, backend: Arc<dyn CoralogixApi>, namespace: &str) -> RefResolver {
        RefResolver { client, backend, namespace: namespace.into() }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub async fn resolve<K>(&self, r: &ResourceRef) -> anyhow::Result<String>
    where
        K: Resource<DynamicType = (), Scope = NamespaceResourceScope> + RemoteSynced + Clone + Debug + DeserializeOwned,
    {
        let ns = r.namespace.as_deref().unwrap_or(&self.namespace);
        let api: Api<K> = Api::namespaced(self.client.clone(), ns);
        let full_name = format!("{}/{ns}/{}", K::kind(&()), r.name);
        debug!("resolving reference to {full_name}");

        match api.get_opt(&r.name).await? {
            None => Err(ExtractError::reference_not_found(&full_name)),
            Some(obj) => obj
                .remote_id()
                .map(String::from)
                .ok_or_else(|| ExtractError::reference_not_synced(&full_name)),
        }
    }

    // Numeric backend ids are stored as strings in the status
    pub async fn resolve_numeric<K>(&self, r: &ResourceRef) -> anyhow::Result<u32>
    where
        K: Resource<DynamicType = (), Scope = NamespaceResourceScope> + RemoteSynced + Clone + Debug + DeserializeOwned,
    {
        let id = self.resolve::<K>(r).await?;
        id.parse()
            .map_err(|_| ExtractError::invalid_value(&format!("expected a numeric id for {}, got {id}", r.name)))
    }

    pub async fn config_map_value(&self, r: &ConfigMapKeyRef) -> anyhow::Result<String> {
        let api: Api<corev1::ConfigMap> = Api::namespaced(self.client.clone(), &self.namespace);
        let full_name = format!("ConfigMap/{}/{}", self.namespace, r.name);
        let cm = api
            .get_opt(&r.name)
            .await?
            .ok_or_else(|| ExtractError::reference_not_found(&full_name))?;

        cm.data
            .and_then(|mut data| data.remove(&r.key))
            .ok_or_else(|| ExtractError::config_map_key_missing(&format!("{}/{}", full_name, r.key)))
    }

    // Scans the items at `items_pointer` in the listing at `path` for one whose value at
    // `name_pointer` matches, and returns the value at `id_pointer`
    pub async fn lookup_backend_id(
        &self,
        path: &str,
        items_pointer: &str,
        name_pointer: &str,
        id_pointer: &str,
        name: &str,
    ) -> anyhow::Result<String> {
        let listing = self.backend.list(path).await?;
        let found = listing
            .pointer(items_pointer)
            .and_then(Value::as_array)
            .and_then(|items| {
                items
                    .iter()
                    .find(|item| item.pointer(name_pointer).and_then(Value::as_str) == Some(name))
            })
            .and_then(|item| match item.pointer(id_pointer)? {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });

        found.ok_or_else(|| ExtractError::backend_name_not_found(name))
    }
}
