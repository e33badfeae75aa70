use crate::config::compiler::DEFAULT_OPTIMIZER_RUNS;
use crate::config::etherscan::ETHERSCAN_API_KEY_VAR;
use crate::{ConfigError, ConfigResult, RootConfig};
use std::collections::HashSet;
use std::fmt;

/// Non-fatal finding from validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No verification key; verification is disabled
    MissingCredential,
    /// A network that is not the default cannot be resolved
    MalformedNetwork { network: String, reason: String },
    /// The same compiler version is declared more than once
    DuplicateCompiler { version: String },
    /// Optimizer runs set on a compiler whose optimizer is off
    UnusedOptimizerRuns { version: String, runs: u32 },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::MissingCredential => write!(
                f,
                "{} is not set; contract verification is disabled",
                ETHERSCAN_API_KEY_VAR
            ),
            ConfigWarning::MalformedNetwork { network, reason } => {
                write!(f, "network '{}' is unusable: {}", network, reason)
            }
            ConfigWarning::DuplicateCompiler { version } => {
                write!(f, "compiler {} is declared more than once", version)
            }
            ConfigWarning::UnusedOptimizerRuns { version, runs } => write!(
                f,
                "compiler {} sets {} optimizer runs but the optimizer is disabled",
                version, runs
            ),
        }
    }
}

/// Findings from a successful validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub warnings: Vec<ConfigWarning>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn has(&self, predicate: impl Fn(&ConfigWarning) -> bool) -> bool {
        self.warnings.iter().any(predicate)
    }
}

/// Configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate `config`.
    ///
    /// Fails on an unknown or unusable default network, an empty compiler list
    /// or an unparseable compiler version. Everything else is reported as a
    /// warning.
    pub fn validate(config: &RootConfig) -> ConfigResult<ValidationReport> {
        let mut report = ValidationReport::default();

        Self::validate_networks(config, &mut report)?;
        Self::validate_compilers(config, &mut report)?;

        if !config.etherscan.is_verification_enabled() {
            report.warnings.push(ConfigWarning::MissingCredential);
        }

        Ok(report)
    }

    fn validate_networks(config: &RootConfig, report: &mut ValidationReport) -> ConfigResult<()> {
        if config.default_network.trim().is_empty() {
            return Err(ConfigError::Configuration(
                "defaultNetwork cannot be empty".to_string(),
            ));
        }

        config.default_network()?;

        for (name, entry) in &config.networks {
            if *name == config.default_network {
                continue;
            }
            if let Err(ConfigError::MalformedNetworkEntry { network, reason }) = entry.endpoint(name) {
                report
                    .warnings
                    .push(ConfigWarning::MalformedNetwork { network, reason });
            }
        }

        Ok(())
    }

    fn validate_compilers(config: &RootConfig, report: &mut ValidationReport) -> ConfigResult<()> {
        if config.solidity.compilers.is_empty() {
            return Err(ConfigError::NoCompilers);
        }

        let mut seen = HashSet::new();
        for compiler in &config.solidity.compilers {
            let version = compiler.semver()?;

            if !seen.insert(version) {
                report.warnings.push(ConfigWarning::DuplicateCompiler {
                    version: compiler.version.clone(),
                });
            }

            let optimizer = compiler.optimizer();
            if !optimizer.enabled && optimizer.runs != DEFAULT_OPTIMIZER_RUNS {
                report.warnings.push(ConfigWarning::UnusedOptimizerRuns {
                    version: compiler.version.clone(),
                    runs: optimizer.runs,
                });
            }
        }

        Ok(())
    }
}
