use thiserror::Error;

/// Core error type shared by all deploykit crates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeployError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input or state
    #[error("Invalid: {0}")]
    Invalid(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Standard Result type used across deploykit
pub type DeployResult<T> = Result<T, DeployError>;
