//! CLI surface for the feedauth tool.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use crate::domain::models::Config;
use crate::domain::ports::ProviderLocator;
use crate::infrastructure::{
    ConfigLoader, DiskProviderLocator, EnvAuthSource, EnvTokenProvider, LocationServiceClient,
    LocationServiceConfig, ProcessEnvironment,
};
use crate::services::configurator::{CredProviderConfigurator, EXTERNAL_ENDPOINTS_INPUT_KEY};

#[derive(Parser)]
#[command(name = "feedauth")]
#[command(about = "Configure a package-feed credential provider from organization identity and service connections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file (defaults to feedauth.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the packaging service directory URL
    #[arg(long)]
    pub service_url: Option<String>,

    /// Override the credential provider install root
    #[arg(long)]
    pub provider_dir: Option<PathBuf>,

    /// Use the .NET Framework provider executable instead of the .NET Core one
    #[arg(long)]
    pub netfx: bool,
}

impl Cli {
    /// Load configuration and fold in the command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_unchecked_from(path)?,
            None => ConfigLoader::load_unchecked()?,
        };
        if let Some(service_url) = &self.service_url {
            config.service_url.clone_from(service_url);
        }
        if let Some(provider_dir) = &self.provider_dir {
            config.credential_provider_dir = Some(provider_dir.clone());
        }
        if self.netfx {
            config.use_netfx_provider = true;
        }
        ConfigLoader::validate(&config)?;
        Ok(config)
    }
}

/// Run the setup flow against the real adapters.
pub async fn execute(config: Config) -> Result<()> {
    let token_provider = Arc::new(EnvTokenProvider::new(&config.access_token_var));
    let directory = Arc::new(LocationServiceClient::new(
        LocationServiceConfig {
            base_url: config.service_url.clone(),
            timeout_secs: config.timeout_secs,
        },
        token_provider.clone(),
    )?);
    let auth_source = Arc::new(
        EnvAuthSource::new().with_input(EXTERNAL_ENDPOINTS_INPUT_KEY, &config.external_endpoints_var),
    );
    let sink = Arc::new(ProcessEnvironment::new());

    let configurator = CredProviderConfigurator::new(directory, token_provider, auth_source, sink);
    configurator.configure().await?;

    if let Some(provider_dir) = &config.credential_provider_dir {
        let locator = DiskProviderLocator::new(provider_dir, config.use_netfx_provider);
        let provider_path = locator.locate()?;
        configurator.configure_plugin_paths(&provider_path)?;
    }

    Ok(())
}

/// Convert an uncaught error into a user-visible failure and exit non-zero.
pub fn handle_error(err: anyhow::Error) -> ! {
    error!("{err:#}");
    eprintln!("Error: {err:#}");
    std::process::exit(1);
}
