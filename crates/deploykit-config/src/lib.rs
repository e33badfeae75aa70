//! deploykit configuration
//!
//! Network table, compiler registry and verification credentials for a
//! smart-contract build/deploy toolchain. The configuration is built once at
//! startup by [`ConfigLoader`], validated, and then shared by reference.

pub mod config;
pub mod error;
pub mod loader;
pub mod networks;
pub mod plugins;

// Re-exports for convenience
pub use config::*;
pub use loader::*;
pub use plugins::{Extension, ExtensionRegistry, PluginRegistry};

// Re-export main types
pub use error::{ConfigError, ConfigResult};

// Re-export network presets
pub use networks::{hardhat_network, mainnet_network, testnet_network, NetworkType};
