//! Service layer: credential aggregation and the setup orchestration flow.

pub mod aggregator;
pub mod configurator;

pub use aggregator::{aggregate, build_endpoint_credentials_json};
pub use configurator::CredProviderConfigurator;
