//! Credential aggregation.
//!
//! Maps external service connection credentials into the canonical
//! `{endpoint, username?, password}` records the credential provider
//! consumes. Unsupported kinds fail the whole batch — unlike the legacy
//! lenient setup path that silently skipped them, one bad service connection
//! here produces no container at all, so the operator is told exactly which
//! connection to fix instead of discovering a feed that silently lacks
//! credentials.

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    EndpointCredential, EndpointCredentialsContainer, ExternalAuthInfo,
};

/// Aggregate external auth records into a credentials container.
///
/// Returns `Ok(None)` for empty input: no container is distinct from an
/// empty container, and callers must not publish anything in that case.
/// Output order is input order.
pub fn aggregate(
    auth_infos: &[ExternalAuthInfo],
) -> DomainResult<Option<EndpointCredentialsContainer>> {
    if auth_infos.is_empty() {
        return Ok(None);
    }

    let mut container = EndpointCredentialsContainer::default();
    for auth_info in auth_infos {
        match auth_info {
            ExternalAuthInfo::UsernamePassword { feed_uri, username, password } => {
                container.endpoint_credentials.push(EndpointCredential {
                    endpoint: feed_uri.clone(),
                    username: Some(username.clone()),
                    password: password.clone(),
                });
                debug!(endpoint = %feed_uri, "detected username/password credentials");
            }
            ExternalAuthInfo::Token { feed_uri, token } => {
                container.endpoint_credentials.push(EndpointCredential {
                    endpoint: feed_uri.clone(),
                    username: None,
                    password: token.clone(),
                });
                debug!(endpoint = %feed_uri, "detected token credentials");
            }
            ExternalAuthInfo::Other { feed_uri, kind } => {
                return Err(DomainError::UnsupportedCredentialKind {
                    feed_uri: feed_uri.clone(),
                    kind: kind.clone(),
                });
            }
        }
    }

    Ok(Some(container))
}

/// Aggregate and serialize to the JSON string published to the environment.
pub fn build_endpoint_credentials_json(
    auth_infos: &[ExternalAuthInfo],
) -> DomainResult<Option<String>> {
    match aggregate(auth_infos)? {
        Some(container) => Ok(Some(serde_json::to_string(&container)?)),
        None => Ok(None),
    }
}
