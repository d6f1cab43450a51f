use dotenv::dotenv;
use reqwest::Client;
use std::env;
use tracing::{debug, info};

use crate::client::ApiError;
use crate::models::geography::{CityResponse, UfResponse};

/// Localities surface used to populate the cascading state/city dropdowns
#[cfg_attr(test, mockall::automock)]
pub trait GeographyApi {
    async fn list_states(&self) -> Result<Vec<String>, ApiError>;
    async fn list_cities(&self, uf: &str) -> Result<Vec<String>, ApiError>;
}

/// Client for the public IBGE localities API. Unauthenticated, read-only.
pub struct IbgeClient {
    client: Client,
    endpoint: String,
}

impl IbgeClient {
    /// Create a new localities client from environment variables
    pub fn new() -> Self {
        dotenv().ok();

        Self {
            client: Client::new(),
            endpoint: env::var("IBGE_API_ENDPOINT").unwrap_or_else(|_| {
                "https://servicodados.ibge.gov.br/api/v1/localidades".to_string()
            }),
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

impl Default for IbgeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeographyApi for IbgeClient {
    /// List the state initials (siglas) for the state dropdown
    async fn list_states(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/estados", self.endpoint);

        info!("Fetching state list");
        debug!("API URL: {}", url);

        let res = self.client.get(&url).send().await?;
        info!("Response received with status: {}", res.status());

        if !res.status().is_success() {
            return Err(ApiError::Status(res.status()));
        }

        let states = res.json::<Vec<UfResponse>>().await?;
        Ok(states.into_iter().map(|state| state.sigla).collect())
    }

    /// List the city names of one state, in the order the service returns them
    async fn list_cities(&self, uf: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/estados/{}/municipios", self.endpoint, uf);

        info!("Fetching city list for state {}", uf);
        debug!("API URL: {}", url);

        let res = self.client.get(&url).send().await?;
        info!("Response received with status: {}", res.status());

        if !res.status().is_success() {
            return Err(ApiError::Status(res.status()));
        }

        let cities = res.json::<Vec<CityResponse>>().await?;
        Ok(cities.into_iter().map(|city| city.nome).collect())
    }
}
