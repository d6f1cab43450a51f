use dotenv::dotenv;
use reqwest::{Client, StatusCode};
use std::env;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::item::CollectibleItem;
use crate::models::point::NewPointRecord;

/// Error type shared by the backend and localities clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// Backend API surface the registration workflow depends on
#[cfg_attr(test, mockall::automock)]
pub trait CollectApi {
    async fn fetch_items(&self) -> Result<Vec<CollectibleItem>, ApiError>;
    async fn create_point(&self, record: NewPointRecord) -> Result<(), ApiError>;
}

/// Client for the Ecoleta backend API
pub struct EcoletaClient {
    client: Client,
    endpoint: String,
}

impl EcoletaClient {
    /// Create a new backend client from environment variables
    pub fn new() -> Self {
        dotenv().ok();

        Self {
            client: Client::new(),
            endpoint: env::var("ECOLETA_API_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:3333".to_string()),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for EcoletaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectApi for EcoletaClient {
    /// Fetch the collectible item catalog from the backend
    async fn fetch_items(&self) -> Result<Vec<CollectibleItem>, ApiError> {
        let url = format!("{}/items", self.endpoint);

        info!("Fetching collectible item catalog");
        debug!("API URL: {}", url);

        let res = self.client.get(&url).send().await?;
        info!("Response received with status: {}", res.status());

        if !res.status().is_success() {
            return Err(ApiError::Status(res.status()));
        }

        let items = res.json::<Vec<CollectibleItem>>().await?;
        Ok(items)
    }

    /// Submit a composed collection point record to the backend
    async fn create_point(&self, record: NewPointRecord) -> Result<(), ApiError> {
        let url = format!("{}/points", self.endpoint);

        info!("Submitting collection point '{}'", record.name);
        debug!("API URL: {}", url);

        let res = self.client.post(&url).json(&record).send().await?;
        info!("Response received with status: {}", res.status());

        if !res.status().is_success() {
            return Err(ApiError::Status(res.status()));
        }

        Ok(())
    }
}
