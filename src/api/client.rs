use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{DashboardApi, Resource};
use crate::error::DashboardError;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// reqwest-backed client rooted at the origin hosting the api.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: Client,
    base_url: String,
}

impl HttpDashboardApi {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn url(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }
}

impl Default for HttpDashboardApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Best-effort message from a JSON error body such as `{"error": "invalid stat"}`.
fn server_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed
        .error
        .or(parsed.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch(&self, resource: Resource) -> Result<Value, DashboardError> {
        let url = self.url(resource);
        debug!(%url, "fetching");

        let resp = self.client.get(&url).send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed before a response arrived");
            DashboardError::Network(e.to_string())
        })?;
        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            let message = server_message(&body).unwrap_or_else(|| resource.failure_message());
            warn!(%url, status = status.as_u16(), %message, "upstream returned an error status");
            return Err(DashboardError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
