//! HTTP client for the packaging service directory.

use async_trait::async_trait;
use reqwest::{header, Client};
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{PackagingServiceInfo, ProtocolType};
use crate::domain::ports::{AccessTokenProvider, ServiceDirectory};

/// Configuration for the directory client.
#[derive(Debug, Clone)]
pub struct LocationServiceConfig {
    /// Base URL of the organization's packaging service directory.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Directory client backed by reqwest. Authenticates with the caller's own
/// bearer credential.
pub struct LocationServiceClient {
    config: LocationServiceConfig,
    client: Client,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl LocationServiceClient {
    pub fn new(
        config: LocationServiceConfig,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::LookupFailed(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client, token_provider })
    }
}

#[async_trait]
impl ServiceDirectory for LocationServiceClient {
    async fn packaging_service_info(
        &self,
        protocol: ProtocolType,
    ) -> DomainResult<PackagingServiceInfo> {
        let token = self.token_provider.access_token()?;
        let url = format!(
            "{}/_apis/packaging/serviceinfo?protocol={}",
            self.config.base_url.trim_end_matches('/'),
            protocol
        );

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| DomainError::LookupFailed(format!("directory request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::LookupFailed(format!(
                "directory returned {status}: {body}"
            )));
        }

        response
            .json::<PackagingServiceInfo>()
            .await
            .map_err(|e| DomainError::LookupFailed(format!("failed to parse directory response: {e}")))
    }
}
