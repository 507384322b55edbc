use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("service_url cannot be empty; set it in feedauth.yaml or FEEDAUTH_SERVICE_URL")]
    EmptyServiceUrl,

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("access_token_var cannot be empty")]
    EmptyAccessTokenVar,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. feedauth.yaml in the working directory (optional)
    /// 3. Environment variables (FEEDAUTH_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config = Self::load_unchecked()?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring environment
    /// overrides.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config = Self::load_unchecked_from(path)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Extract configuration without validating it. Callers layering their
    /// own overrides on top (the CLI) validate the final result themselves.
    pub fn load_unchecked() -> Result<Config> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("feedauth.yaml"))
            .merge(Env::prefixed("FEEDAUTH_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")
    }

    /// As [`Self::load_unchecked`], from a specific file.
    pub fn load_unchecked_from(path: impl AsRef<std::path::Path>) -> Result<Config> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("FEEDAUTH_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")
    }

    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.service_url.is_empty() {
            return Err(ConfigError::EmptyServiceUrl);
        }
        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }
        if config.access_token_var.is_empty() {
            return Err(ConfigError::EmptyAccessTokenVar);
        }
        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config { service_url: "https://dev.example.com/org".to_string(), ..Config::default() }
    }

    #[test]
    fn default_config_with_service_url_validates() {
        assert!(ConfigLoader::validate(&valid_config()).is_ok());
    }

    #[test]
    fn empty_service_url_is_rejected() {
        let config = Config::default();
        assert!(matches!(ConfigLoader::validate(&config), Err(ConfigError::EmptyServiceUrl)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = Config { timeout_secs: 0, ..valid_config() };
        assert!(matches!(ConfigLoader::validate(&config), Err(ConfigError::InvalidTimeout(0))));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let mut config = valid_config();
        config.logging.level = "verbose".to_string();
        assert!(matches!(ConfigLoader::validate(&config), Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn env_overrides_take_precedence() {
        temp_env::with_vars(
            [
                ("FEEDAUTH_SERVICE_URL", Some("https://env.example.com")),
                ("FEEDAUTH_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = ConfigLoader::load().unwrap();
                assert_eq!(config.service_url, "https://env.example.com");
                assert_eq!(config.timeout_secs, 5);
            },
        );
    }
}
