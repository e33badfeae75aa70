//! Network presets of the project

pub mod hardhat;
pub mod mainnet;
pub mod testnet;

use crate::config::NetworkConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Hardhat,
    Mainnet,
    Testnet,
}

impl NetworkType {
    pub const ALL: [NetworkType; 3] = [NetworkType::Hardhat, NetworkType::Mainnet, NetworkType::Testnet];

    /// Key of this network in the network table
    pub fn name(&self) -> &'static str {
        match self {
            NetworkType::Hardhat => crate::config::network::LOCAL_NETWORK,
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet => "testnet",
        }
    }

    pub fn is_simulation(&self) -> bool {
        matches!(self, NetworkType::Hardhat)
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for NetworkType {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hardhat" | "local" => Ok(NetworkType::Hardhat),
            "mainnet" | "main" => Ok(NetworkType::Mainnet),
            "testnet" | "test" => Ok(NetworkType::Testnet),
            _ => Err(crate::error::ConfigError::InvalidNetwork(s.to_string())),
        }
    }
}

/// Preset entry for `network`
pub fn preset(network: NetworkType) -> NetworkConfig {
    match network {
        NetworkType::Hardhat => hardhat_network(),
        NetworkType::Mainnet => mainnet_network(),
        NetworkType::Testnet => testnet_network(),
    }
}

// Re-export network presets
pub use hardhat::hardhat_network;
pub use mainnet::{mainnet_network, MAINNET_RPC_URL};
pub use testnet::{testnet_network, TESTNET_RPC_URL};
