use deploykit_utils::DeployError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The default network is not a key of the network table
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Malformed network entry '{network}': {reason}")]
    MalformedNetworkEntry { network: String, reason: String },

    #[error("Invalid compiler version '{version}': {reason}")]
    InvalidCompilerVersion { version: String, reason: String },

    #[error("No compilers configured")]
    NoCompilers,

    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Invalid extension: {0}")]
    InvalidExtension(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Whether this error must stop the toolchain before any build or deploy step
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConfigError::MissingCredential(_))
    }
}

impl From<ConfigError> for DeployError {
    fn from(err: ConfigError) -> Self {
        DeployError::Config(err.to_string())
    }
}
