use crate::config::NetworkConfig;

/// Local simulation network with the standard contract size limit
pub fn hardhat_network() -> NetworkConfig {
    NetworkConfig::simulation(false)
}
