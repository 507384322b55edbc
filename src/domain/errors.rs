//! Domain errors for the feedauth credential setup flow.

use std::path::PathBuf;
use thiserror::Error;

/// URL of the documentation page listing the service connection kinds the
/// credential provider understands.
pub const SUPPORTED_KINDS_DOC_URL: &str =
    "https://go.feedauth.dev/supported-service-connections";

/// Domain-level errors. Every variant is fatal to the invocation: there is
/// no local recovery and no partial publication.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Packaging service lookup failed: {0}")]
    LookupFailed(String),

    #[error("System access token is not available: {0}")]
    MissingAccessToken(String),

    #[error("Malformed external endpoint input: {0}")]
    MalformedEndpointInput(String),

    #[error(
        "The service connection for '{feed_uri}' is not valid. Note that {kind} \
         service connections are not supported by the credential provider, \
         see {}",
        SUPPORTED_KINDS_DOC_URL
    )]
    UnsupportedCredentialKind { feed_uri: String, kind: String },

    #[error("Credential provider not found at {0}")]
    ProviderNotFound(PathBuf),

    #[error("Failed to publish environment variable {name}: {reason}")]
    PublishFailed { name: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_kind_message_names_the_feed() {
        let err = DomainError::UnsupportedCredentialKind {
            feed_uri: "https://feed3".to_string(),
            kind: "ApiKey".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("https://feed3"));
        assert!(message.contains("ApiKey"));
        assert!(message.contains(SUPPORTED_KINDS_DOC_URL));
    }
}
