//! Tracing subscriber setup shared by deploykit binaries and tests

use crate::{DeployError, DeployResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparseable
pub const DEFAULT_FILTER: &str = "info";

/// Initialize logging from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
pub fn init_logging() -> DeployResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    install(filter)
}

/// Initialize logging with a fixed filter directive such as `"debug"` or
/// `"deploykit_config=trace"`
pub fn init_logging_with_level(level: &str) -> DeployResult<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| DeployError::Invalid(format!("Invalid log filter '{}': {}", level, e)))?;
    install(filter)
}

fn install(filter: EnvFilter) -> DeployResult<()> {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| DeployError::Internal(format!("Logging already initialized: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        // The first call may lose the race against another test; the second never wins.
        let _ = init_logging_with_level("debug");
        assert!(matches!(init_logging(), Err(DeployError::Internal(_))));
    }
}
