//! Infrastructure layer: adapters satisfying the domain port traits.
//!
//! - Packaging service directory client (reqwest)
//! - Process environment publishing and token source
//! - Environment-fed service connection source
//! - Filesystem credential provider locator
//! - Configuration loading (figment)

pub mod config;
pub mod directory;
pub mod endpoints;
pub mod environment;
pub mod provider;

pub use config::{ConfigError, ConfigLoader};
pub use directory::{LocationServiceClient, LocationServiceConfig};
pub use endpoints::EnvAuthSource;
pub use environment::{EnvTokenProvider, ProcessEnvironment};
pub use provider::DiskProviderLocator;
