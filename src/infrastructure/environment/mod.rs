//! Process environment adapters: the variable sink the configurator
//! publishes through, and the system access token source.

use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{AccessTokenProvider, VariableSink};

/// Publishes configuration slots as process environment variables for child
/// processes of the surrounding task to inherit.
#[derive(Debug, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl VariableSink for ProcessEnvironment {
    fn set_variable(&self, name: &str, value: &str, secret: bool) -> DomainResult<()> {
        if secret {
            // Secret values are still set, only their logging is suppressed.
            info!(name, "setting environment variable (value suppressed)");
        } else {
            info!(name, value, "setting environment variable");
        }
        std::env::set_var(name, value);
        Ok(())
    }
}

/// Reads the caller's own bearer credential from a named environment
/// variable.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    var_name: String,
}

impl EnvTokenProvider {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self { var_name: var_name.into() }
    }
}

impl AccessTokenProvider for EnvTokenProvider {
    fn access_token(&self) -> DomainResult<String> {
        match std::env::var(&self.var_name) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(DomainError::MissingAccessToken(format!(
                "environment variable {} is not set",
                self.var_name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_provider_reads_configured_variable() {
        temp_env::with_var("FEEDAUTH_TEST_TOKEN", Some("secret-token"), || {
            let provider = EnvTokenProvider::new("FEEDAUTH_TEST_TOKEN");
            assert_eq!(provider.access_token().unwrap(), "secret-token");
        });
    }

    #[test]
    fn missing_token_is_an_error() {
        temp_env::with_var_unset("FEEDAUTH_TEST_TOKEN_MISSING", || {
            let provider = EnvTokenProvider::new("FEEDAUTH_TEST_TOKEN_MISSING");
            let err = provider.access_token().unwrap_err();
            assert!(matches!(err, DomainError::MissingAccessToken(_)));
        });
    }

    #[test]
    fn empty_token_is_an_error() {
        temp_env::with_var("FEEDAUTH_TEST_TOKEN_EMPTY", Some(""), || {
            let provider = EnvTokenProvider::new("FEEDAUTH_TEST_TOKEN_EMPTY");
            assert!(provider.access_token().is_err());
        });
    }

    #[test]
    fn sink_sets_the_process_variable() {
        temp_env::with_var_unset("FEEDAUTH_TEST_SINK", || {
            let sink = ProcessEnvironment::new();
            sink.set_variable("FEEDAUTH_TEST_SINK", "value", true).unwrap();
            assert_eq!(std::env::var("FEEDAUTH_TEST_SINK").unwrap(), "value");
        });
    }
}
