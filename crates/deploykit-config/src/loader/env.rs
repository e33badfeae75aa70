use crate::config::etherscan::ETHERSCAN_API_KEY_VAR;
use crate::RootConfig;
use std::collections::HashMap;
use std::env;
use tracing::debug;

/// Result of looking up one environment variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    Present(String),
    Absent,
    /// Set, but not valid Unicode
    Malformed,
}

impl EnvValue {
    /// Present value with surrounding whitespace removed, `None` when blank
    pub fn value(&self) -> Option<&str> {
        match self {
            EnvValue::Present(v) => Some(v.trim()).filter(|v| !v.is_empty()),
            _ => None,
        }
    }
}

/// Key-value view of the process environment
pub trait Environment {
    fn var(&self, key: &str) -> EnvValue;
}

/// The real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> EnvValue {
        match env::var_os(key) {
            None => EnvValue::Absent,
            Some(raw) => raw
                .into_string()
                .map(EnvValue::Present)
                .unwrap_or(EnvValue::Malformed),
        }
    }
}

/// Fixed set of variables, for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> EnvValue {
        self.vars
            .get(key)
            .cloned()
            .map(EnvValue::Present)
            .unwrap_or(EnvValue::Absent)
    }
}

/// Applies environment-sourced values to a configuration
pub struct EnvLoader;

impl EnvLoader {
    /// Set the verification key from `ETHERSCAN_API_KEY`.
    ///
    /// Whatever key the configuration carried before is replaced; an absent,
    /// empty or non-Unicode variable leaves verification disabled.
    pub fn apply_credentials(config: &mut RootConfig, env: &dyn Environment) {
        let raw = env.var(ETHERSCAN_API_KEY_VAR);
        config.etherscan.api_key = raw.value().map(str::to_string);

        // The missing credential itself is reported once, by validation.
        match raw {
            EnvValue::Malformed => debug!(
                variable = ETHERSCAN_API_KEY_VAR,
                "Ignoring non-Unicode value"
            ),
            EnvValue::Present(_) if config.etherscan.api_key.is_some() => {
                debug!(variable = ETHERSCAN_API_KEY_VAR, "Verification credential loaded")
            }
            _ => debug!(variable = ETHERSCAN_API_KEY_VAR, "Not set"),
        }
    }
}
