//! Shared utilities for the deploykit workspace: the common error type and
//! tracing initialisation.

pub mod error;
pub mod logging;

pub use error::{DeployError, DeployResult};
pub use logging::{init_logging, init_logging_with_level};

/// Crate version, reported in startup logs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
