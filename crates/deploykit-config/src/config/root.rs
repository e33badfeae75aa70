use super::*;
use crate::loader::validation::{ConfigValidator, ValidationReport};
use crate::networks::{self, NetworkType};
use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete toolchain configuration, built once at startup and shared by reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootConfig {
    /// Network used when no other is selected; must be a key of `networks`
    pub default_network: String,

    /// Network table keyed by name
    pub networks: BTreeMap<String, NetworkConfig>,

    /// Verification service credentials
    #[serde(default)]
    pub etherscan: EtherscanConfig,

    /// Compiler registry
    #[serde(default)]
    pub solidity: SolidityConfig,
}

impl RootConfig {
    /// The project's literal configuration: BSC mainnet and testnet, the local
    /// simulation network, testnet as default, solc 0.8.7 with 800 optimizer runs.
    pub fn project_default() -> Self {
        let table = NetworkType::ALL
            .iter()
            .map(|network| (network.name().to_string(), networks::preset(*network)))
            .collect();

        Self {
            default_network: NetworkType::Testnet.name().to_string(),
            networks: table,
            etherscan: EtherscanConfig::default(),
            solidity: SolidityConfig {
                compilers: vec![CompilerConfig::new("0.8.7", OptimizerSettings::enabled(800))],
            },
        }
    }

    /// Validate the configuration, returning non-fatal findings
    pub fn validate(&self) -> ConfigResult<ValidationReport> {
        ConfigValidator::validate(self)
    }

    pub fn network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(name)
    }

    pub fn compiler(&self, version: &str) -> Option<&CompilerConfig> {
        self.solidity.compiler(version)
    }

    /// Resolve the default network
    pub fn default_network(&self) -> ConfigResult<ActiveNetwork<'_>> {
        let (name, config) = self
            .networks
            .get_key_value(self.default_network.as_str())
            .ok_or_else(|| {
                ConfigError::Configuration(format!(
                    "default network '{}' is not defined in networks (available: {})",
                    self.default_network,
                    self.network_names().join(", ")
                ))
            })?;

        Self::activate(name, config)
    }

    /// Resolve `name`, or the default network when `None`
    pub fn select_network(&self, name: Option<&str>) -> ConfigResult<ActiveNetwork<'_>> {
        match name {
            None => self.default_network(),
            Some(name) => {
                let (name, config) = self
                    .networks
                    .get_key_value(name)
                    .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))?;
                Self::activate(name, config)
            }
        }
    }

    pub fn network_names(&self) -> Vec<&str> {
        self.networks.keys().map(String::as_str).collect()
    }

    fn activate<'a>(name: &'a str, config: &'a NetworkConfig) -> ConfigResult<ActiveNetwork<'a>> {
        let endpoint = config.endpoint(name)?;
        Ok(ActiveNetwork {
            name,
            config,
            endpoint,
        })
    }
}

impl Default for RootConfig {
    fn default() -> Self {
        Self::project_default()
    }
}
