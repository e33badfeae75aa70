use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable the verification credential is read from
pub const ETHERSCAN_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";

/// Contract-verification service credentials.
///
/// The key is never written back out; it only ever comes from the environment.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtherscanConfig {
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl EtherscanConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    /// Configured key without surrounding whitespace, `None` when blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    pub fn is_verification_enabled(&self) -> bool {
        self.api_key().is_some()
    }

    /// Key for callers that cannot proceed without one
    pub fn require_api_key(&self) -> ConfigResult<&str> {
        self.api_key().ok_or_else(|| {
            ConfigError::MissingCredential(format!(
                "{} is not set; contract verification is disabled",
                ETHERSCAN_API_KEY_VAR
            ))
        })
    }
}

impl fmt::Debug for EtherscanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtherscanConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .finish()
    }
}
