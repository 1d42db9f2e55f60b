use std::time::Duration;

use async_trait::async_trait;
#[cfg(feature = "mock")]
use mockall::automock;
use reqwest::{
    RequestBuilder,
    StatusCode,
};
use serde_json::Value;
use tracing::*;
use url::Url;

use crate::errors::CoralogixError;

const REQUEST_TIMEOUT_SECONDS: u64 = 30;
const USER_AGENT: &str = concat!("coralogix-operator/", env!("CARGO_PKG_VERSION"));

// Thin JSON-over-HTTP view of the management API; paths are relative to the API root and the
// request/response bodies are the camelCase models in `crate::models`.
#[cfg_attr(feature = "mock", automock)]
#[async_trait]
pub trait CoralogixApi: Send + Sync {
    async fn create(&self, path: &str, body: &Value) -> anyhow::Result<Value>;
    async fn get(&self, path: &str, id: &str) -> anyhow::Result<Option<Value>>;
    async fn list(&self, path: &str) -> anyhow::Result<Value>;
    async fn update(&self, path: &str, id: &str, body: &Value) -> anyhow::Result<Value>;
    async fn replace(&self, path: &str, body: &Value) -> anyhow::Result<Value>;
    async fn delete(&self, path: &str, id: &str) -> anyhow::Result<()>;
    async fn clear(&self, path: &str) -> anyhow::Result<()>;
}

pub struct CoralogixClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl CoralogixClient {
    pub fn new(mut base_url: Url, api_key: &str) -> anyhow::Result<CoralogixClient> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()?;
        Ok(CoralogixClient { http, base_url, api_key: api_key.into() })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str, id: Option<&str>) -> anyhow::Result<Url> {
        let mut url = self.base_url.join(path.trim_matches('/'))?;
        if let Some(id) = id {
            let base = url.to_string();
            url.path_segments_mut()
                .map_err(|_| anyhow::anyhow!("cannot append id to {base}"))?
                .push(id);
        }
        Ok(url)
    }

    async fn send(&self, req: RequestBuilder) -> anyhow::Result<Value> {
        let resp = req
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| CoralogixError::Transport(e.to_string()))?;

        let status = resp.status();
        let url = resp.url().clone();
        debug!("{url} returned {status}");
        match status {
            StatusCode::NOT_FOUND => Err(CoralogixError::NotFound(url.path().into()).into()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(CoralogixError::Unauthorized(status.as_u16()).into())
            },
            s if !s.is_success() => {
                let message = resp.text().await.unwrap_or_default();
                Err(CoralogixError::Api { status: s.as_u16(), message }.into())
            },
            _ => {
                let body = resp.bytes().await.map_err(|e| CoralogixError::Transport(e.to_string()))?;
                if body.is_empty() {
                    return Ok(Value::Null);
                }
                Ok(serde_json::from_slice(&body)?)
            },
        }
    }
}

#[async_trait]
impl CoralogixApi for CoralogixClient {
    async fn create(&self, path: &str, body: &Value) -> anyhow::Result<Value> {
        let url = self.url(path, None)?;
        info!("creating object at {url}");
        self.send(self.http.post(url).json(body)).await
    }

    async fn get(&self, path: &str, id: &str) -> anyhow::Result<Option<Value>> {
        let url = self.url(path, Some(id))?;
        match self.send(self.http.get(url)).await {
            Ok(v) => Ok(Some(v)),
            Err(e) if CoralogixError::is_not_found(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list(&self, path: &str) -> anyhow::Result<Value> {
        let url = self.url(path, None)?;
        self.send(self.http.get(url)).await
    }

    async fn update(&self, path: &str, id: &str, body: &Value) -> anyhow::Result<Value> {
        let url = self.url(path, Some(id))?;
        info!("updating object at {url}");
        self.send(self.http.put(url).json(body)).await
    }

    async fn replace(&self, path: &str, body: &Value) -> anyhow::Result<Value> {
        let url = self.url(path, None)?;
        info!("replacing settings at {url}");
        self.send(self.http.put(url).json(body)).await
    }

    async fn delete(&self, path: &str, id: &str) -> anyhow::Result<()> {
        let url = self.url(path, Some(id))?;
        info!("deleting object at {url}");
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    async fn clear(&self, path: &str) -> anyhow::Result<()> {
        let url = self.url(path, None)?;
        info!("resetting settings at {url}");
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}
