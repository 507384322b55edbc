//! External service connection credentials.
//!
//! Operator-configured service connections arrive as raw records with a
//! free-form `authType` discriminator. They are normalized into the closed
//! [`ExternalAuthInfo`] sum type here; kinds the credential provider cannot
//! use map to [`ExternalAuthInfo::Other`] rather than failing
//! deserialization, so rejection happens at the aggregation boundary where
//! the offending feed can be named.

use serde::Deserialize;

use crate::domain::errors::{DomainError, DomainResult};

/// One external credential, tagged by kind.
///
/// Exactly one secret-bearing field is present per kind. `Other` carries no
/// usable secret and is invalid for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalAuthInfo {
    UsernamePassword {
        feed_uri: String,
        username: String,
        password: String,
    },
    Token {
        feed_uri: String,
        token: String,
    },
    Other {
        feed_uri: String,
        kind: String,
    },
}

impl ExternalAuthInfo {
    /// URI of the feed this credential applies to.
    pub fn feed_uri(&self) -> &str {
        match self {
            Self::UsernamePassword { feed_uri, .. }
            | Self::Token { feed_uri, .. }
            | Self::Other { feed_uri, .. } => feed_uri,
        }
    }

    /// Human-readable kind label, safe to log.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::UsernamePassword { .. } => "username/password",
            Self::Token { .. } => "token",
            Self::Other { kind, .. } => kind,
        }
    }
}

/// Wire shape of a service connection record as supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawServiceConnection {
    pub feed_uri: String,
    pub auth_type: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl TryFrom<RawServiceConnection> for ExternalAuthInfo {
    type Error = DomainError;

    fn try_from(raw: RawServiceConnection) -> DomainResult<Self> {
        if raw.feed_uri.is_empty() {
            return Err(DomainError::MalformedEndpointInput(
                "service connection record has an empty feedUri".to_string(),
            ));
        }

        match raw.auth_type.as_str() {
            "UsernamePassword" => {
                let username = raw.username.ok_or_else(|| missing_field(&raw.feed_uri, "username"))?;
                let password = raw.password.ok_or_else(|| missing_field(&raw.feed_uri, "password"))?;
                Ok(Self::UsernamePassword { feed_uri: raw.feed_uri, username, password })
            }
            "Token" => {
                let token = raw.token.ok_or_else(|| missing_field(&raw.feed_uri, "token"))?;
                Ok(Self::Token { feed_uri: raw.feed_uri, token })
            }
            other => Ok(Self::Other {
                feed_uri: raw.feed_uri,
                kind: other.to_string(),
            }),
        }
    }
}

fn missing_field(feed_uri: &str, field: &str) -> DomainError {
    DomainError::MalformedEndpointInput(format!(
        "service connection for '{feed_uri}' is missing required field '{field}'"
    ))
}
