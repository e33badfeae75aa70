use deploykit_config::networks::{MAINNET_RPC_URL, TESTNET_RPC_URL};
use deploykit_config::*;
use std::str::FromStr;

/// Test the preset network table
#[test]
fn test_default_network_table() {
    let config = RootConfig::project_default();

    assert_eq!(config.network_names(), vec!["hardhat", "mainnet", "testnet"]);
    assert_eq!(
        config.network("testnet").and_then(NetworkConfig::url),
        Some("https://data-seed-prebsc-1-s1.binance.org:8545")
    );
    assert_eq!(
        config.network("mainnet").and_then(NetworkConfig::url),
        Some("https://bsc-dataseed1.binance.org/")
    );

    let hardhat = config.network("hardhat").unwrap();
    assert!(hardhat.url().is_none());
    assert_eq!(hardhat.allow_unlimited_contract_size, Some(false));
}

/// Test that every preset resolves to the expected endpoint kind
#[test]
fn test_preset_endpoints() {
    for network in NetworkType::ALL {
        let endpoint = networks::preset(network).endpoint(network.name()).unwrap();
        assert_eq!(endpoint.is_simulation(), network.is_simulation(), "{}", network);
    }

    assert_eq!(mainnet_network().url(), Some(MAINNET_RPC_URL));
    assert_eq!(testnet_network().url(), Some(TESTNET_RPC_URL));
    assert!(!hardhat_network().allows_unlimited_contract_size());
}

/// Test network name parsing
#[test]
fn test_network_type_from_str() {
    assert_eq!(NetworkType::from_str("testnet").unwrap(), NetworkType::Testnet);
    assert_eq!(NetworkType::from_str("MAIN").unwrap(), NetworkType::Mainnet);
    assert_eq!(NetworkType::from_str("local").unwrap(), NetworkType::Hardhat);

    let err = NetworkType::from_str("devnet").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNetwork(ref name) if name == "devnet"));
}

/// Test selecting the default and explicit networks
#[test]
fn test_select_network() {
    let config = RootConfig::project_default();

    let active = config.select_network(None).unwrap();
    assert_eq!(active.name, "testnet");
    assert_eq!(
        active.endpoint.url().map(|u| u.host_str()),
        Some(Some("data-seed-prebsc-1-s1.binance.org"))
    );
    assert_eq!(active.endpoint.url().and_then(|u| u.port()), Some(8545));

    let local = config.select_network(Some("hardhat")).unwrap();
    assert_eq!(
        local.endpoint,
        Endpoint::Simulation {
            allow_unlimited_contract_size: false
        }
    );

    let err = config.select_network(Some("goerli")).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownNetwork(ref name) if name == "goerli"));
}

/// Test that a malformed entry only fails once it is selected
#[test]
fn test_malformed_entry_fails_on_selection() {
    let mut config = RootConfig::project_default();
    config
        .networks
        .insert("staging".to_string(), NetworkConfig::default());

    let report = config.validate().unwrap();
    assert!(report.has(|w| matches!(
        w,
        ConfigWarning::MalformedNetwork { network, .. } if network == "staging"
    )));

    let err = config.select_network(Some("staging")).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MalformedNetworkEntry { ref network, .. } if network == "staging"
    ));
    assert!(err.is_fatal());
}
