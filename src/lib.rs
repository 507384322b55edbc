//! Feedauth - package-feed credential provider setup
//!
//! Feedauth collects authentication material from two independent sources —
//! the caller's own organizational identity (resolved from a packaging
//! service directory) and operator-configured external service connections —
//! and publishes a de-duplicated, deterministically serialized configuration
//! through the environment slots a downstream credential provider consumes.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **Domain Layer** (`domain`): models, errors, and port traits
//! - **Service Layer** (`services`): credential aggregation and setup orchestration
//! - **Infrastructure Layer** (`infrastructure`): directory client, process
//!   environment, configuration loading
//! - **CLI Layer** (`cli`): command-line interface

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Config, EndpointCredential, EndpointCredentialsContainer, ExternalAuthInfo,
    OrganizationIdentity, PackagingServiceInfo, ProtocolType,
};
pub use domain::ports::{
    AccessTokenProvider, ExternalAuthSource, ProviderLocator, ServiceDirectory, VariableSink,
};
pub use infrastructure::{ConfigError, ConfigLoader};
pub use services::{aggregate, build_endpoint_credentials_json, CredProviderConfigurator};
