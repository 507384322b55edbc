//! Packaging service directory models.
//!
//! Wire shapes mirror the directory service's PascalCase JSON; the derived
//! [`OrganizationIdentity`] is the immutable per-invocation view the rest of
//! the flow consumes.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

/// Package protocols the directory can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolType {
    NuGet,
    Npm,
    Maven,
    PyPi,
}

impl ProtocolType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NuGet => "NuGet",
            Self::Npm => "Npm",
            Self::Maven => "Maven",
            Self::PyPi => "PyPi",
        }
    }
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response from the packaging service directory lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct PackagingServiceInfo {
    #[serde(rename = "AuthenticatedUser")]
    pub authenticated_user: AuthenticatedUser,
    #[serde(rename = "UriPrefixes")]
    pub uri_prefixes: Vec<PackagingUriPrefix>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    #[serde(rename = "providerDisplayName")]
    pub provider_display_name: String,
    #[serde(rename = "customDisplayName")]
    #[serde(default)]
    pub custom_display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackagingUriPrefix {
    #[serde(rename = "UriPrefix")]
    pub uri_prefix: String,
    #[serde(rename = "IsPublic")]
    pub is_public: bool,
}

impl AuthenticatedUser {
    /// Custom display name when the user set one, provider name otherwise.
    pub fn display_name(&self) -> &str {
        self.custom_display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.provider_display_name)
    }
}

/// The caller's resolved organizational identity. Constructed once per
/// invocation from the directory lookup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct OrganizationIdentity {
    pub display_name: String,
    /// All URI prefixes belonging to the organization, first-seen order.
    pub uri_prefixes: Vec<String>,
    /// The subset of prefixes marked public; shown to operators so internal
    /// access-mapping URIs do not add noise.
    pub public_uri_prefixes: Vec<String>,
    pub access_token: String,
}

impl OrganizationIdentity {
    pub fn from_service_info(info: &PackagingServiceInfo, access_token: String) -> Self {
        let public_uri_prefixes = dedup_first_seen(
            info.uri_prefixes
                .iter()
                .filter(|prefix| prefix.is_public)
                .map(|prefix| prefix.uri_prefix.as_str()),
        );
        let uri_prefixes =
            dedup_first_seen(info.uri_prefixes.iter().map(|prefix| prefix.uri_prefix.as_str()));

        Self {
            display_name: info.authenticated_user.display_name().to_string(),
            uri_prefixes,
            public_uri_prefixes,
            access_token,
        }
    }
}

/// Case-sensitive exact-string de-duplication; the first occurrence keeps
/// its position.
pub fn dedup_first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
