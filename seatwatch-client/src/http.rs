//! HTTP client for the availability endpoint

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::ZoneAvailability;

/// Source of availability snapshots
///
/// Implemented by [`HttpClient`]; the presenter accepts any implementation so
/// tests can substitute a canned source.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Fetch one fresh snapshot.
    async fn availability(&self) -> ClientResult<Vec<ZoneAvailability>>;
}

/// HTTP client for making network requests to the booking server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Status { status, body });
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl AvailabilitySource for HttpClient {
    async fn availability(&self) -> ClientResult<Vec<ZoneAvailability>> {
        self.get("zones/availability/").await
    }
}
