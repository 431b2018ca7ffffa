//! HTTP API client for the TDS server

use reqwest::Client;
use serde_json::json;
use std::time::Duration;

use tds_common::types::{Asset, ImportSummary};

use crate::api::types::{ApiEnvelope, ApiErrorBody, FlatErrorBody, SearchAnswer};
use crate::error::{CliError, Result};

/// Default timeout for API requests in seconds.
/// Can be overridden via TDS_API_TIMEOUT_SECS. The AI search endpoint waits
/// on an upstream model call, so this is deliberately generous.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 120;

/// Default server URL when not specified via environment variable.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8100";

/// API client for the TDS server
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: String) -> Result<Self> {
        let timeout_secs = std::env::var("TDS_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("TDS_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        Self::new(base_url)
    }

    /// Check server health
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Bulk-import a CSV payload under one SSR
    ///
    /// A 200 response is a completed batch, including one with row
    /// failures; those arrive inside the summary.
    pub async fn import_assets(&self, ssr_reference: &str, csv: &str) -> Result<ImportSummary> {
        let url = format!("{}/api/v1/assets/import", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "ssrReference": ssr_reference,
                "csv": csv,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body: FlatErrorBody = response.json().await?;
            return Err(CliError::api(body.error));
        }

        Ok(response.json().await?)
    }

    /// List assets, optionally filtered by SSR and status
    pub async fn list_assets(
        &self,
        ssr: Option<&str>,
        status: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> Result<Vec<Asset>> {
        let url = format!("{}/api/v1/assets", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        if let Some(ssr) = ssr {
            query.push(("ssr", ssr.to_string()));
        }
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }

        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            let body: ApiErrorBody = response.json().await?;
            return Err(CliError::api(body.error.message));
        }

        let envelope: ApiEnvelope<Vec<Asset>> = response.json().await?;
        Ok(envelope.data)
    }

    /// Ask the AI search endpoint a natural-language question
    pub async fn ai_search(&self, query: &str, ssr: Option<&str>) -> Result<SearchAnswer> {
        let url = format!("{}/api/v1/search/ai", self.base_url);

        let mut body = json!({ "query": query });
        if let Some(ssr) = ssr {
            body["ssr"] = json!(ssr);
        }

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let body: ApiErrorBody = response.json().await?;
            return Err(CliError::api(body.error.message));
        }

        let envelope: ApiEnvelope<SearchAnswer> = response.json().await?;
        Ok(envelope.data)
    }
}
