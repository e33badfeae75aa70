use crate::{ConfigError, ConfigResult, RootConfig};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Format implied by the file extension, `None` when there is no extension
    pub fn from_path(path: &Path) -> ConfigResult<Option<Self>> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Some(ConfigFormat::Toml)),
            Some("json") => Ok(Some(ConfigFormat::Json)),
            Some(ext) => Err(ConfigError::InvalidFormat(format!(
                "Unsupported file extension: {}",
                ext
            ))),
            None => Ok(None),
        }
    }
}

/// File-based configuration loader.
///
/// Loaded files are parsed only; validation and credentials are applied by
/// [`ConfigLoader`](super::ConfigLoader).
pub struct FileLoader;

impl FileLoader {
    /// Parse configuration text in the given format
    pub fn parse_str(content: &str, format: ConfigFormat) -> ConfigResult<RootConfig> {
        let config: RootConfig = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub async fn load_toml<P: AsRef<Path>>(path: P) -> ConfigResult<RootConfig> {
        let content = Self::read(path.as_ref()).await?;
        Self::parse_str(&content, ConfigFormat::Toml)
    }

    /// Load configuration from a JSON file
    pub async fn load_json<P: AsRef<Path>>(path: P) -> ConfigResult<RootConfig> {
        let content = Self::read(path.as_ref()).await?;
        Self::parse_str(&content, ConfigFormat::Json)
    }

    /// Auto-detect file format and load configuration
    pub async fn load_auto<P: AsRef<Path>>(path: P) -> ConfigResult<RootConfig> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = Self::read(path).await?;

        match format {
            Some(format) => Self::parse_str(&content, format),
            // Try TOML first, then JSON
            None => Self::parse_str(&content, ConfigFormat::Toml)
                .or_else(|_| Self::parse_str(&content, ConfigFormat::Json)),
        }
    }

    /// Save configuration to a TOML file
    pub async fn save_toml<P: AsRef<Path>>(config: &RootConfig, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::InvalidFormat(format!("TOML serialization failed: {}", e)))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Save configuration to a JSON file
    pub async fn save_json<P: AsRef<Path>>(config: &RootConfig, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content).await?;
        Ok(())
    }

    async fn read(path: &Path) -> ConfigResult<String> {
        fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
            _ => ConfigError::Io(e),
        })
    }
}
