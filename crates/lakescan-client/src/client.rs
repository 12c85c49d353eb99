//! HTTP client for the Dremio REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use lakescan_core::source::{CatalogObject, GrantsResponse, GraphResponse, RootCatalog};
use lakescan_core::{CatalogSource, Error, Result};

/// Configuration for connecting to a Dremio endpoint.
///
/// The endpoint is the service base URL, e.g.
/// `https://dremio.example.com:9047` for Dremio Software or the project URL
/// for Dremio Cloud; the API path prefix is appended per request.
#[derive(Debug, Clone)]
pub struct DremioConfig {
    /// Base URL of the Dremio service.
    pub endpoint: String,
    /// Personal access token sent as a bearer token.
    pub token: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Skip TLS certificate verification (for self-signed deployments).
    pub accept_invalid_certs: bool,
}

impl DremioConfig {
    /// Creates a configuration with a 60 second timeout and TLS verification
    /// enabled.
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            token: token.into(),
            timeout_secs: 60,
            accept_invalid_certs: false,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Disables TLS certificate verification.
    #[must_use]
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

/// Dremio REST API client.
pub struct DremioClient {
    config: DremioConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct DatasetIdResponse {
    id: Option<String>,
}

impl DremioClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: DremioConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| Error::connection_with_source("Failed to create HTTP client", e))?;

        Ok(Self { config, client })
    }

    /// The configured endpoint, for logging.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v3/{path}", self.config.endpoint)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.config.token)
            .send()
            .await
            .map_err(|e| Error::connection_with_source("Failed to send request", e))?;

        Self::decode(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.config.token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::connection_with_source("Failed to send request", e))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| Error::invalid_response(e.to_string()))
    }

    /// Resolves a dotted dataset name (e.g. `"space"."folder"."view"`) to
    /// its catalog id via the by-path endpoint.
    ///
    /// A response without an `id` key is logged and mapped to an empty
    /// string, matching the catalog's "not found" behavior.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn get_dataset_id(&self, dataset: &str) -> Result<String> {
        let dataset_path = dataset.replace('.', "/").replace('"', "");
        info!("Getting ID of {dataset}");
        let response: DatasetIdResponse =
            self.get_json(&format!("catalog/by-path/{dataset_path}")).await?;
        match response.id {
            Some(id) => Ok(id),
            None => {
                warn!("Dataset ID for {dataset_path} not found");
                Ok(String::new())
            }
        }
    }
}

#[async_trait]
impl CatalogSource for DremioClient {
    async fn root_catalog(&self) -> Result<RootCatalog> {
        self.get_json("catalog").await
    }

    async fn catalog_object(&self, id: &str) -> Result<CatalogObject> {
        self.get_json(&format!("catalog/{id}")).await
    }

    async fn object_grants(&self, id: &str) -> Result<GrantsResponse> {
        self.get_json(&format!("catalog/{id}/grants")).await
    }

    async fn dataset_graph(&self, id: &str) -> Result<GraphResponse> {
        self.get_json(&format!("catalog/{id}/graph")).await
    }
}
