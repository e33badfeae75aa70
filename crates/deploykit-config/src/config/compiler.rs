//! Solidity compiler registry

use crate::{ConfigError, ConfigResult};
use semver::Version;
use serde::{Deserialize, Serialize};

/// Run count solc assumes when none is configured
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// The `solidity` section: compilers in the order they were declared
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityConfig {
    #[serde(default)]
    pub compilers: Vec<CompilerConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Semantic version string, e.g. `0.8.7`
    pub version: String,

    #[serde(default)]
    pub settings: CompilerSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    #[serde(default)]
    pub optimizer: OptimizerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    #[serde(default)]
    pub enabled: bool,

    /// Expected number of calls per contract; only read when `enabled`
    #[serde(default = "default_runs")]
    pub runs: u32,
}

fn default_runs() -> u32 {
    DEFAULT_OPTIMIZER_RUNS
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: DEFAULT_OPTIMIZER_RUNS,
        }
    }
}

impl OptimizerSettings {
    pub fn enabled(runs: u32) -> Self {
        Self { enabled: true, runs }
    }

    /// Run count handed to the optimizer, `None` when the pass is off
    pub fn effective_runs(&self) -> Option<u32> {
        self.enabled.then_some(self.runs)
    }
}

impl CompilerConfig {
    pub fn new(version: impl Into<String>, optimizer: OptimizerSettings) -> Self {
        Self {
            version: version.into(),
            settings: CompilerSettings { optimizer },
        }
    }

    pub fn optimizer(&self) -> &OptimizerSettings {
        &self.settings.optimizer
    }

    /// Parse `version` as a semantic version
    pub fn semver(&self) -> ConfigResult<Version> {
        Version::parse(self.version.trim()).map_err(|e| ConfigError::InvalidCompilerVersion {
            version: self.version.clone(),
            reason: e.to_string(),
        })
    }
}

impl SolidityConfig {
    /// First compiler whose version string matches `version` exactly
    pub fn compiler(&self, version: &str) -> Option<&CompilerConfig> {
        self.compilers.iter().find(|c| c.version == version)
    }

    /// Highest declared compiler version
    pub fn latest(&self) -> ConfigResult<&CompilerConfig> {
        let mut latest: Option<(&CompilerConfig, Version)> = None;
        for compiler in &self.compilers {
            let version = compiler.semver()?;
            if latest.as_ref().map_or(true, |(_, best)| version > *best) {
                latest = Some((compiler, version));
            }
        }
        latest.map(|(c, _)| c).ok_or(ConfigError::NoCompilers)
    }
}
