//! Configuration loading and environment handling

pub mod env;
pub mod file;
pub mod validation;

pub use env::{EnvLoader, EnvValue, Environment, MapEnv, ProcessEnv};
pub use file::{ConfigFormat, FileLoader};
pub use validation::*;

use crate::plugins::{Extension, ExtensionRegistry};
use crate::{ConfigResult, RootConfig};
use std::path::Path;
use tracing::{debug, info, warn};

/// Builds a validated [`RootConfig`].
///
/// Every load registers the loader's extensions first, then applies the
/// environment credential and validates. Loading fails only on fatal errors;
/// warnings are logged.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    extensions: Vec<Extension>,
}

impl ConfigLoader {
    /// Loader activating the project's extensions
    pub fn new() -> Self {
        Self::with_extensions(Extension::project_defaults())
    }

    pub fn with_extensions(extensions: Vec<Extension>) -> Self {
        Self { extensions }
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Load the project's literal configuration
    pub fn load(
        &self,
        env: &dyn Environment,
        registry: &mut dyn ExtensionRegistry,
    ) -> ConfigResult<RootConfig> {
        self.register_extensions(registry)?;
        self.finish(RootConfig::project_default(), env)
    }

    /// Load configuration text in `format`
    pub fn load_from_str(
        &self,
        content: &str,
        format: ConfigFormat,
        env: &dyn Environment,
        registry: &mut dyn ExtensionRegistry,
    ) -> ConfigResult<RootConfig> {
        self.register_extensions(registry)?;
        let config = FileLoader::parse_str(content, format)?;
        self.finish(config, env)
    }

    /// Load a TOML or JSON configuration file
    pub async fn load_from_file<P: AsRef<Path>>(
        &self,
        path: P,
        env: &dyn Environment,
        registry: &mut dyn ExtensionRegistry,
    ) -> ConfigResult<RootConfig> {
        let path = path.as_ref();
        self.register_extensions(registry)?;
        debug!(path = %path.display(), "Reading configuration file");
        let config = FileLoader::load_auto(path).await?;
        self.finish(config, env)
    }

    fn register_extensions(&self, registry: &mut dyn ExtensionRegistry) -> ConfigResult<()> {
        for extension in &self.extensions {
            registry.register(extension)?;
        }
        Ok(())
    }

    fn finish(
        &self,
        mut config: RootConfig,
        env: &dyn Environment,
    ) -> ConfigResult<RootConfig> {
        EnvLoader::apply_credentials(&mut config, env);

        let report = config.validate()?;
        for warning in &report.warnings {
            warn!("{}", warning);
        }

        info!(
            version = deploykit_utils::VERSION,
            default_network = %config.default_network,
            networks = config.networks.len(),
            compilers = config.solidity.compilers.len(),
            verification = config.etherscan.is_verification_enabled(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
