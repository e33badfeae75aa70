//! Network table entries and the resolved connection target of a selected network

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Name of the in-process simulation network; the only entry allowed to omit a url
pub const LOCAL_NETWORK: &str = "hardhat";

/// Connection parameters for one named network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// JSON-RPC endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Lift the contract size limit on the local simulation network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_unlimited_contract_size: Option<bool>,
}

impl NetworkConfig {
    /// Remote network reachable at `url`
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            allow_unlimited_contract_size: None,
        }
    }

    /// Local simulation network
    pub fn simulation(allow_unlimited_contract_size: bool) -> Self {
        Self {
            url: None,
            allow_unlimited_contract_size: Some(allow_unlimited_contract_size),
        }
    }

    /// Configured url, with empty strings treated as absent
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn allows_unlimited_contract_size(&self) -> bool {
        self.allow_unlimited_contract_size.unwrap_or(false)
    }

    /// Resolve the endpoint for the entry registered under `name`.
    ///
    /// The simulation network resolves without a url; every other network needs
    /// a non-empty, parseable http(s) or ws(s) url.
    pub fn endpoint(&self, name: &str) -> ConfigResult<Endpoint> {
        if name == LOCAL_NETWORK && self.url().is_none() {
            return Ok(Endpoint::Simulation {
                allow_unlimited_contract_size: self.allows_unlimited_contract_size(),
            });
        }

        let raw = self.url().ok_or_else(|| ConfigError::MalformedNetworkEntry {
            network: name.to_string(),
            reason: "missing url".to_string(),
        })?;

        let url = Url::parse(raw).map_err(|e| ConfigError::MalformedNetworkEntry {
            network: name.to_string(),
            reason: format!("invalid url '{}': {}", raw, e),
        })?;

        match url.scheme() {
            "http" | "https" | "ws" | "wss" => Ok(Endpoint::Remote(url)),
            scheme => Err(ConfigError::MalformedNetworkEntry {
                network: name.to_string(),
                reason: format!("unsupported url scheme '{}'", scheme),
            }),
        }
    }
}

/// Where a selected network's transactions go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// In-process simulated chain
    Simulation { allow_unlimited_contract_size: bool },
    /// Remote JSON-RPC node
    Remote(Url),
}

impl Endpoint {
    pub fn is_simulation(&self) -> bool {
        matches!(self, Endpoint::Simulation { .. })
    }

    pub fn url(&self) -> Option<&Url> {
        match self {
            Endpoint::Remote(url) => Some(url),
            Endpoint::Simulation { .. } => None,
        }
    }
}

/// A network chosen as the build/deploy target, borrowed from its [`RootConfig`](crate::RootConfig)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNetwork<'a> {
    pub name: &'a str,
    pub config: &'a NetworkConfig,
    pub endpoint: Endpoint,
}
