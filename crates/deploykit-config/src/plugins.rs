//! Toolchain extension registration
//!
//! Extensions are registered before the configuration is built. Later
//! extensions may rely on capabilities installed by earlier ones, so the
//! registry keeps insertion order and ignores repeated registrations.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Contract testing support
pub const WAFFLE: &str = "@nomiclabs/hardhat-waffle";
/// Contract verification against the block explorer
pub const ETHERSCAN: &str = "@nomiclabs/hardhat-etherscan";
/// Solidity linting
pub const SOLHINT: &str = "@nomiclabs/hardhat-solhint";

/// A named toolchain extension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extension {
    name: String,
}

impl Extension {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extensions the project activates, in registration order
    pub fn project_defaults() -> Vec<Extension> {
        [WAFFLE, ETHERSCAN, SOLHINT].into_iter().map(Extension::new).collect()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Sink for extension registrations
pub trait ExtensionRegistry {
    /// Register `extension`. Returns `Ok(true)` when newly registered and
    /// `Ok(false)` when an extension of the same name is already present.
    fn register(&mut self, extension: &Extension) -> ConfigResult<bool>;
}

/// In-memory registry preserving registration order
#[derive(Debug, Default, Clone)]
pub struct PluginRegistry {
    order: Vec<Extension>,
    names: HashSet<String>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered extensions, oldest first
    pub fn registered(&self) -> &[Extension] {
        &self.order
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl ExtensionRegistry for PluginRegistry {
    fn register(&mut self, extension: &Extension) -> ConfigResult<bool> {
        let name = extension.name().trim();
        if name.is_empty() {
            return Err(ConfigError::InvalidExtension(
                "extension name cannot be empty".to_string(),
            ));
        }

        if !self.names.insert(name.to_string()) {
            debug!(extension = name, "Extension already registered");
            return Ok(false);
        }

        debug!(extension = name, position = self.order.len(), "Registered extension");
        self.order.push(Extension::new(name));
        Ok(true)
    }
}
