//! Port for collecting external service connection credentials.

use crate::domain::errors::DomainResult;
use crate::domain::models::ExternalAuthInfo;

/// Produces the operator-configured external auth records for a named input
/// key. Purely local deserialization, no network or disk I/O.
///
/// Absence of the input normalizes to an empty vector; malformed input
/// propagates as an error rather than being swallowed.
pub trait ExternalAuthSource: Send + Sync {
    fn external_auth_records(&self, input_key: &str) -> DomainResult<Vec<ExternalAuthInfo>>;
}
