//! Canonical endpoint credential records consumed by the credential
//! provider, serialized as `{"endpointCredentials":[...]}`.

use serde::Serialize;

/// One `{endpoint, username?, password}` record. An absent username is
/// omitted from the JSON entirely, never emitted as `null` or `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointCredential {
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password: String,
}

/// Ordered credential set; ordering is the input order of the source
/// service connections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EndpointCredentialsContainer {
    #[serde(rename = "endpointCredentials")]
    pub endpoint_credentials: Vec<EndpointCredential>,
}
