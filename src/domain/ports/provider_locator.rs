//! Port for resolving the on-disk credential provider executable.

use std::path::PathBuf;

use crate::domain::errors::DomainResult;

/// Resolves the filesystem path of the credential provider plugin that the
/// downstream tooling will invoke at fetch time.
pub trait ProviderLocator: Send + Sync {
    fn locate(&self) -> DomainResult<PathBuf>;
}
