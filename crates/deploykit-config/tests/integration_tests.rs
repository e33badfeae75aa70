use deploykit_config::config::etherscan::ETHERSCAN_API_KEY_VAR;
use deploykit_config::plugins::{ETHERSCAN, SOLHINT, WAFFLE};
use deploykit_config::*;
use deploykit_utils::DeployError;
use std::fs;
use tempfile::tempdir;

fn registered_names(registry: &PluginRegistry) -> Vec<&str> {
    registry.registered().iter().map(Extension::name).collect()
}

/// Test the complete loading pipeline without a credential
#[test]
fn test_load_without_credential() {
    let mut registry = PluginRegistry::new();
    let config = ConfigLoader::new().load(&MapEnv::new(), &mut registry).unwrap();

    assert!(!config.etherscan.is_verification_enabled());
    assert!(matches!(
        config.etherscan.require_api_key(),
        Err(ConfigError::MissingCredential(_))
    ));
    assert_eq!(config.default_network, "testnet");
    assert_eq!(registered_names(&registry), vec![WAFFLE, ETHERSCAN, SOLHINT]);
}

/// Test the credential is taken from the environment
#[test]
fn test_load_with_credential() {
    let env = MapEnv::new().with(ETHERSCAN_API_KEY_VAR, "abc123");
    let config = ConfigLoader::new()
        .load(&env, &mut PluginRegistry::new())
        .unwrap();

    assert_eq!(config.etherscan.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.etherscan.require_api_key().unwrap(), "abc123");
}

/// Test repeated loads register each extension once
#[test]
fn test_repeated_load_is_idempotent() {
    let loader = ConfigLoader::new();
    let mut registry = PluginRegistry::new();

    let first = loader.load(&MapEnv::new(), &mut registry).unwrap();
    let second = loader.load(&MapEnv::new(), &mut registry).unwrap();

    assert_eq!(first, second);
    assert_eq!(registry.len(), 3);
    assert_eq!(registered_names(&registry), vec![WAFFLE, ETHERSCAN, SOLHINT]);
}

/// Test extensions are registered even when the configuration is rejected
#[test]
fn test_extensions_registered_before_validation() {
    let loader = ConfigLoader::with_extensions(vec![Extension::new("custom-plugin")]);
    let mut registry = PluginRegistry::new();

    let content = r#"{
        "defaultNetwork": "nowhere",
        "networks": { "hardhat": { "allowUnlimitedContractSize": true } },
        "solidity": { "compilers": [ { "version": "0.8.7" } ] }
    }"#;
    let err = loader
        .load_from_str(content, ConfigFormat::Json, &MapEnv::new(), &mut registry)
        .unwrap_err();

    assert!(matches!(err, ConfigError::Configuration(_)));
    assert!(registry.contains("custom-plugin"));
}

/// Test an invalid extension aborts loading
#[test]
fn test_invalid_extension_aborts_load() {
    let loader = ConfigLoader::with_extensions(vec![Extension::new("")]);
    let err = loader
        .load(&MapEnv::new(), &mut PluginRegistry::new())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidExtension(_)));
}

/// Test the field-exact TOML schema
#[test]
fn test_load_from_toml_str() {
    let content = r#"
defaultNetwork = "mainnet"

[networks.hardhat]
allowUnlimitedContractSize = true

[networks.mainnet]
url = "https://bsc-dataseed1.binance.org/"

[etherscan]
apiKey = "from-file"

[[solidity.compilers]]
version = "0.8.7"

[solidity.compilers.settings.optimizer]
enabled = true
runs = 800
"#;
    let env = MapEnv::new().with(ETHERSCAN_API_KEY_VAR, "from-env");
    let config = ConfigLoader::new()
        .load_from_str(content, ConfigFormat::Toml, &env, &mut PluginRegistry::new())
        .unwrap();

    assert_eq!(config.default_network, "mainnet");
    assert!(config.network("hardhat").unwrap().allows_unlimited_contract_size());
    assert_eq!(config.etherscan.api_key(), Some("from-env"));
    assert_eq!(config.compiler("0.8.7").unwrap().optimizer().runs, 800);
}

/// Test the credential never comes from the file
#[test]
fn test_file_api_key_is_ignored() {
    let content = r#"{
        "defaultNetwork": "hardhat",
        "networks": { "hardhat": {} },
        "etherscan": { "apiKey": "from-file" },
        "solidity": { "compilers": [ { "version": "0.8.7" } ] }
    }"#;
    let config = ConfigLoader::new()
        .load_from_str(content, ConfigFormat::Json, &MapEnv::new(), &mut PluginRegistry::new())
        .unwrap();

    assert!(config.etherscan.api_key.is_none());
}

/// Test saving and loading configuration files
#[tokio::test]
async fn test_file_save_and_load() {
    let temp_dir = tempdir().unwrap();
    let env = MapEnv::new().with(ETHERSCAN_API_KEY_VAR, "abc123");
    let loader = ConfigLoader::new();
    let original = loader.load(&env, &mut PluginRegistry::new()).unwrap();

    let toml_path = temp_dir.path().join("deploykit.toml");
    let json_path = temp_dir.path().join("deploykit.json");
    FileLoader::save_toml(&original, &toml_path).await.unwrap();
    FileLoader::save_json(&original, &json_path).await.unwrap();

    let written = fs::read_to_string(&toml_path).unwrap();
    assert!(written.contains("defaultNetwork"));
    assert!(!written.contains("abc123"));

    for path in [&toml_path, &json_path] {
        let loaded = loader
            .load_from_file(path, &env, &mut PluginRegistry::new())
            .await
            .unwrap();
        assert_eq!(loaded, original);
    }
}

/// Test format detection for files without an extension
#[tokio::test]
async fn test_load_auto_without_extension() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("deploykit");
    fs::write(
        &path,
        r#"{"defaultNetwork":"testnet","networks":{"testnet":{"url":"https://data-seed-prebsc-1-s1.binance.org:8545"}},"solidity":{"compilers":[{"version":"0.8.7"}]}}"#,
    )
    .unwrap();

    let config = FileLoader::load_auto(&path).await.unwrap();
    assert_eq!(config.network_names(), vec!["testnet"]);
}

/// Test file loading errors
#[tokio::test]
async fn test_file_errors() {
    let temp_dir = tempdir().unwrap();

    let missing = temp_dir.path().join("missing.toml");
    assert!(matches!(
        FileLoader::load_auto(&missing).await,
        Err(ConfigError::FileNotFound(ref p)) if p.ends_with("missing.toml")
    ));
    assert!(matches!(
        FileLoader::load_json(temp_dir.path().join("missing.json")).await,
        Err(ConfigError::FileNotFound(_))
    ));

    // Other read failures keep their IO error
    assert!(matches!(
        FileLoader::load_toml(temp_dir.path()).await,
        Err(ConfigError::Io(_))
    ));

    let yaml = temp_dir.path().join("deploykit.yaml");
    fs::write(&yaml, "defaultNetwork: testnet").unwrap();
    assert!(matches!(
        FileLoader::load_auto(&yaml).await,
        Err(ConfigError::InvalidFormat(_))
    ));

    let broken = temp_dir.path().join("broken.toml");
    fs::write(&broken, "defaultNetwork = ").unwrap();
    assert!(matches!(
        FileLoader::load_toml(&broken).await,
        Err(ConfigError::Toml(_))
    ));
}

/// Test an unusable credential is reported once, as a validation warning
#[test]
fn test_missing_credential_reported_once() {
    for env in [
        MapEnv::new(),
        MapEnv::new().with(ETHERSCAN_API_KEY_VAR, "  "),
    ] {
        let config = ConfigLoader::new()
            .load(&env, &mut PluginRegistry::new())
            .unwrap();
        let report = config.validate().unwrap();
        assert_eq!(report.warnings, vec![ConfigWarning::MissingCredential]);
    }
}

/// Test configuration errors convert into the workspace error
#[test]
fn test_error_conversion() {
    let err: DeployError = ConfigError::UnknownNetwork("goerli".to_string()).into();
    assert_eq!(
        err,
        DeployError::Config("Unknown network: goerli".to_string())
    );
}

/// Test loading against the real process environment
#[test]
fn test_process_env_load() {
    let config = ConfigLoader::new()
        .load(&ProcessEnv, &mut PluginRegistry::new())
        .unwrap();
    assert_eq!(
        config.etherscan.is_verification_enabled(),
        ProcessEnv.var(ETHERSCAN_API_KEY_VAR).value().is_some()
    );
}
