//! Credential provider configuration flow.
//!
//! Wires the two credential sources together: the caller's own
//! organizational identity (async directory lookup) and the operator's
//! external service connections (local collection), publishing both through
//! the environment slots the downstream credential provider reads.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::models::{OrganizationIdentity, ProtocolType};
use crate::domain::ports::{
    AccessTokenProvider, ExternalAuthSource, ServiceDirectory, VariableSink,
};
use crate::services::aggregator::build_endpoint_credentials_json;

/// Slot A: `;`-joined URI prefixes of the caller's organization.
pub const URI_PREFIXES_ENVVAR: &str = "VSS_NUGET_URI_PREFIXES";
/// Slot B: the organization bearer token. Secret, but must still be set.
pub const ACCESS_TOKEN_ENVVAR: &str = "VSS_NUGET_ACCESSTOKEN";
/// Slot C: serialized external endpoint credentials. Secret; only set when
/// at least one external service connection exists.
pub const EXTERNAL_ENDPOINTS_ENVVAR: &str = "VSS_NUGET_EXTERNAL_FEED_ENDPOINTS";
/// Plugin path slot consumed by the package tooling's plugin discovery.
pub const PLUGIN_PATHS_ENVVAR: &str = "NUGET_PLUGIN_PATHS";

/// Input key under which the external service connections are supplied.
pub const EXTERNAL_ENDPOINTS_INPUT_KEY: &str = "externalEndpoints";

/// Orchestrates credential provider setup against the port boundaries.
pub struct CredProviderConfigurator {
    directory: Arc<dyn ServiceDirectory>,
    token_provider: Arc<dyn AccessTokenProvider>,
    auth_source: Arc<dyn ExternalAuthSource>,
    sink: Arc<dyn VariableSink>,
}

impl CredProviderConfigurator {
    pub fn new(
        directory: Arc<dyn ServiceDirectory>,
        token_provider: Arc<dyn AccessTokenProvider>,
        auth_source: Arc<dyn ExternalAuthSource>,
        sink: Arc<dyn VariableSink>,
    ) -> Self {
        Self { directory, token_provider, auth_source, sink }
    }

    /// Run the full setup: same-organization feeds first, then external
    /// service connections. Any error aborts with nothing further published.
    pub async fn configure(&self) -> DomainResult<()> {
        self.configure_same_organization_feeds().await?;
        self.configure_service_connection_feeds()?;
        Ok(())
    }

    /// Resolve the caller's organization identity and publish its URI
    /// prefixes and access token.
    pub async fn configure_same_organization_feeds(&self) -> DomainResult<()> {
        let service_info = self.directory.packaging_service_info(ProtocolType::NuGet).await?;
        let access_token = self.token_provider.access_token()?;
        let identity = OrganizationIdentity::from_service_info(&service_info, access_token);

        // Only the public prefixes are shown to operators; internal
        // access-mapping URIs are still published below.
        info!(
            identity = %identity.display_name,
            "setting up the credential provider for feeds in your organization starting with:"
        );
        for prefix in &identity.public_uri_prefixes {
            info!("  {prefix}");
        }

        self.sink.set_variable(URI_PREFIXES_ENVVAR, &identity.uri_prefixes.join(";"), false)?;
        self.sink.set_variable(ACCESS_TOKEN_ENVVAR, &identity.access_token, true)?;
        Ok(())
    }

    /// Collect external service connections and publish the aggregated
    /// credentials container. Publishes nothing when no connections exist.
    pub fn configure_service_connection_feeds(&self) -> DomainResult<()> {
        let auth_records = self.auth_source.external_auth_records(EXTERNAL_ENDPOINTS_INPUT_KEY)?;
        if auth_records.is_empty() {
            return Ok(());
        }

        info!("setting up the credential provider for these service connection URIs:");
        for record in &auth_records {
            info!("  {}", record.feed_uri());
        }

        if let Some(json) = build_endpoint_credentials_json(&auth_records)? {
            self.sink.set_variable(EXTERNAL_ENDPOINTS_ENVVAR, &json, true)?;
        }
        Ok(())
    }

    /// Point the package tooling's plugin discovery at the credential
    /// provider executable.
    pub fn configure_plugin_paths(&self, provider_path: &Path) -> DomainResult<()> {
        info!(path = %provider_path.display(), "configuring package tooling to use the credential provider");
        self.sink.set_variable(PLUGIN_PATHS_ENVVAR, &provider_path.to_string_lossy(), false)
    }
}
