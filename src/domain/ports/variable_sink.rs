//! Port for publishing configuration slots to the process environment.

use crate::domain::errors::DomainResult;

/// Sets a named configuration slot consumed by the downstream credential
/// provider.
///
/// Secrecy is an explicit per-call attribute, not a convention: any slot
/// carrying secret material must pass `secret = true` so the value is
/// suppressed from diagnostic logs while still being set.
pub trait VariableSink: Send + Sync {
    fn set_variable(&self, name: &str, value: &str, secret: bool) -> DomainResult<()>;
}
