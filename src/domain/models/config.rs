//! Configuration model for the feedauth tool.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration, loaded hierarchically by
/// `infrastructure::config::ConfigLoader`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the packaging service directory.
    pub service_url: String,

    /// Environment variable holding the caller's own bearer credential.
    pub access_token_var: String,

    /// Environment variable carrying the serialized external service
    /// connection records.
    pub external_endpoints_var: String,

    /// Root directory of an installed credential provider. When set, the
    /// plugin path is resolved and published alongside the credentials.
    pub credential_provider_dir: Option<PathBuf>,

    /// Prefer the .NET Framework provider executable over the .NET Core one.
    pub use_netfx_provider: bool,

    /// HTTP timeout for the directory lookup, in seconds.
    pub timeout_secs: u64,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of: trace, debug, info, warn, error.
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: String::new(),
            access_token_var: "SYSTEM_ACCESSTOKEN".to_string(),
            external_endpoints_var: "FEEDAUTH_EXTERNAL_ENDPOINTS".to_string(),
            credential_provider_dir: None,
            use_netfx_provider: false,
            timeout_secs: 30,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}
