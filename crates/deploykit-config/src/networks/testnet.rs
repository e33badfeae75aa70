use crate::config::NetworkConfig;

/// BNB Smart Chain testnet RPC
pub const TESTNET_RPC_URL: &str = "https://data-seed-prebsc-1-s1.binance.org:8545";

pub fn testnet_network() -> NetworkConfig {
    NetworkConfig::remote(TESTNET_RPC_URL)
}
