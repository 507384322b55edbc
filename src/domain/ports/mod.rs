//! Port traits implemented by infrastructure adapters.

pub mod auth_source;
pub mod provider_locator;
pub mod service_directory;
pub mod variable_sink;

pub use auth_source::ExternalAuthSource;
pub use provider_locator::ProviderLocator;
pub use service_directory::{AccessTokenProvider, ServiceDirectory};
pub use variable_sink::VariableSink;
