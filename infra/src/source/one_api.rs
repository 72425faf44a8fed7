//! HTTP client for The One API character listing.
//!
//! Speaks `GET {base_url}/character?page=N&limit=M` with bearer-token
//! auth and the configured request timeout. Every failure mode maps to
//! `DomainError::UpstreamUnavailable`; retries are the sync task's job.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, error};

use lor_core::errors::DomainError;
use lor_core::services::sync::{CharacterSource, SourcePage};
use lor_shared::config::external_api::ExternalApiConfig;

use crate::InfrastructureError;

/// CharacterSource implementation for the-one-api.dev
#[derive(Clone)]
pub struct OneApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OneApiClient {
    /// Build a client from the external API configuration
    pub fn new(config: &ExternalApiConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl CharacterSource for OneApiClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<SourcePage, DomainError> {
        let url = format!("{}/character", self.base_url);
        debug!("Fetching character page {} (limit {})", page, limit);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
            .map_err(|e| {
                error!("Upstream request failed: {}", e);
                DomainError::UpstreamUnavailable {
                    message: format!("Request to character API failed: {}", e),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Upstream returned status {} for page {}", status, page);
            return Err(upstream_status_error(status));
        }

        response
            .json::<SourcePage>()
            .await
            .map_err(|e| DomainError::UpstreamUnavailable {
                message: format!("Failed to decode character API response: {}", e),
            })
    }
}

fn upstream_status_error(status: StatusCode) -> DomainError {
    let message = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            format!("Character API rejected the API key ({})", status)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            format!("Character API rate limit hit ({})", status)
        }
        _ => format!("Character API returned status {}", status),
    };
    DomainError::UpstreamUnavailable { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lor_core::errors::DomainError;

    #[test]
    fn trailing_slash_in_base_url_is_stripped() {
        let config = ExternalApiConfig {
            base_url: "https://the-one-api.dev/v2/".to_string(),
            ..Default::default()
        };
        let client = OneApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://the-one-api.dev/v2");
    }

    #[test]
    fn status_errors_map_to_upstream_unavailable() {
        let err = upstream_status_error(StatusCode::TOO_MANY_REQUESTS);
        assert!(matches!(err, DomainError::UpstreamUnavailable { .. }));
        assert_eq!(err.code(), "UPSTREAM_UNAVAILABLE");
    }
}
