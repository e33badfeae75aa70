use crate::config::NetworkConfig;

/// BNB Smart Chain mainnet RPC
pub const MAINNET_RPC_URL: &str = "https://bsc-dataseed1.binance.org/";

pub fn mainnet_network() -> NetworkConfig {
    NetworkConfig::remote(MAINNET_RPC_URL)
}
