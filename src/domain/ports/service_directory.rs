//! Port for the packaging service directory lookup.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{PackagingServiceInfo, ProtocolType};

/// Resolves the caller's packaging service info for a protocol.
///
/// The lookup is a network round trip; transport and authorization failures
/// propagate uncaught and abort the invocation. Implementations must be
/// `Send + Sync` so the configurator can hold them behind an `Arc`.
#[async_trait]
pub trait ServiceDirectory: Send + Sync {
    async fn packaging_service_info(
        &self,
        protocol: ProtocolType,
    ) -> DomainResult<PackagingServiceInfo>;
}

/// Supplies the caller's own bearer credential for the current execution
/// context.
pub trait AccessTokenProvider: Send + Sync {
    fn access_token(&self) -> DomainResult<String>;
}
