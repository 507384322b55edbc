//! Filesystem locator for the credential provider executable.

use std::path::PathBuf;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::ProviderLocator;

/// Resolves the credential provider plugin under an installed tool root,
/// laid out as `plugins/{netfx|netcore}/CredentialProvider.Microsoft/`.
#[derive(Debug, Clone)]
pub struct DiskProviderLocator {
    root: PathBuf,
    use_netfx: bool,
}

impl DiskProviderLocator {
    pub fn new(root: impl Into<PathBuf>, use_netfx: bool) -> Self {
        Self { root: root.into(), use_netfx }
    }

    fn provider_path(&self) -> PathBuf {
        let (flavor, executable) = if self.use_netfx {
            ("netfx", "CredentialProvider.Microsoft.exe")
        } else {
            ("netcore", "CredentialProvider.Microsoft.dll")
        };
        self.root
            .join("plugins")
            .join(flavor)
            .join("CredentialProvider.Microsoft")
            .join(executable)
    }
}

impl ProviderLocator for DiskProviderLocator {
    fn locate(&self) -> DomainResult<PathBuf> {
        let path = self.provider_path();
        if path.is_file() {
            Ok(path)
        } else {
            Err(DomainError::ProviderNotFound(path))
        }
    }
}
