//! Environment-fed source of external service connection records.

use std::collections::HashMap;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ExternalAuthInfo, RawServiceConnection};
use crate::domain::ports::ExternalAuthSource;

/// Reads service connection records from environment variables, one
/// variable per input key, each holding a JSON array of raw records.
///
/// An unset or empty variable normalizes to an empty record list; malformed
/// JSON propagates as [`DomainError::MalformedEndpointInput`].
#[derive(Debug, Clone, Default)]
pub struct EnvAuthSource {
    key_to_var: HashMap<String, String>,
}

impl EnvAuthSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an input key to the environment variable carrying its records.
    pub fn with_input(mut self, input_key: impl Into<String>, var_name: impl Into<String>) -> Self {
        self.key_to_var.insert(input_key.into(), var_name.into());
        self
    }

    fn parse_records(raw_json: &str) -> DomainResult<Vec<ExternalAuthInfo>> {
        let raw: Vec<RawServiceConnection> = serde_json::from_str(raw_json)
            .map_err(|e| DomainError::MalformedEndpointInput(e.to_string()))?;
        raw.into_iter().map(ExternalAuthInfo::try_from).collect()
    }
}

impl ExternalAuthSource for EnvAuthSource {
    fn external_auth_records(&self, input_key: &str) -> DomainResult<Vec<ExternalAuthInfo>> {
        let Some(var_name) = self.key_to_var.get(input_key) else {
            return Ok(Vec::new());
        };
        match std::env::var(var_name) {
            Ok(raw_json) if !raw_json.is_empty() => Self::parse_records(&raw_json),
            _ => Ok(Vec::new()),
        }
    }
}
