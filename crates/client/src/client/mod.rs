//! HTTP client for the holiday API.

pub mod countries;
pub mod holidays;
pub mod subdivisions;

use holidays_core::holiday::ApiEnvelope;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ClientError, Result};

/// HTTP client for the holiday API.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    client: reqwest::Client,
    base_url: String,
}

impl HolidayClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client honouring the timeout and TLS settings of a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Issue one GET and unwrap the `result` field of the response envelope.
    ///
    /// No retry: a failed request surfaces as [`ClientError::FetchFailed`],
    /// a body that is not a valid envelope as [`ClientError::DecodeFailed`].
    async fn get_result<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        tracing::debug!(%url, ?params, "GET");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| ClientError::fetch(endpoint, &e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::FetchFailed {
                endpoint,
                status: Some(status.as_u16()),
                message: format!("HTTP {}: {}", status.as_u16(), message),
            });
        }

        let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| {
            if e.is_decode() {
                ClientError::decode(endpoint, e)
            } else {
                ClientError::fetch(endpoint, &e)
            }
        })?;

        envelope
            .into_result()
            .map_err(|e| ClientError::envelope(endpoint, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_endpoint() {
        let client = HolidayClient::new("http://localhost:8080/core/api/holiday/");
        assert_eq!(
            client.url("getcountry"),
            "http://localhost:8080/core/api/holiday/getcountry"
        );

        let client = HolidayClient::new("http://localhost:8080/core/api/holiday");
        assert_eq!(
            client.url("getcountry"),
            "http://localhost:8080/core/api/holiday/getcountry"
        );
    }

    #[test]
    fn test_from_config_keeps_base_url() {
        let config = Config {
            base_url: "http://example.test/api".to_string(),
            ..Config::default()
        };
        let client = HolidayClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://example.test/api");
    }
}
