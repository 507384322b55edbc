//! Domain models for the credential setup flow.

pub mod auth_info;
pub mod config;
pub mod directory;
pub mod endpoint_credentials;

pub use auth_info::{ExternalAuthInfo, RawServiceConnection};
pub use config::{Config, LoggingConfig};
pub use directory::{
    dedup_first_seen, AuthenticatedUser, OrganizationIdentity, PackagingServiceInfo,
    PackagingUriPrefix, ProtocolType,
};
pub use endpoint_credentials::{EndpointCredential, EndpointCredentialsContainer};
