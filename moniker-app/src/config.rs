use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use moniker_resolver::rpc::DEFAULT_RESOLVER_TIMEOUT_SECS;
use moniker_resolver::DEFAULT_REVERSE_NAME_METHOD;

use crate::error::AppError;

/// Name of the config file written by `moniker init`.
pub const CONFIG_FILE_NAME: &str = "moniker.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub resolver: ResolverConfig,
    pub analytics: AnalyticsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage backend: "file", "sqlite", or "memory".
    pub backend: String,
    pub data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// When false, no ENS lookup is attempted and the placeholder stays empty.
    pub enabled: bool,
    pub rpc_url: String,
    /// JSON-RPC method taking a hex address and returning a name or null.
    pub method: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Append analytics events as JSON lines to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

fn default_data_dir() -> String {
    dirs::home_dir()
        .map(|h| h.join(".moniker").to_string_lossy().into_owned())
        .unwrap_or_else(|| "./moniker-data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            data_dir: default_data_dir(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rpc_url: "http://127.0.0.1:9751".to_string(),
            method: DEFAULT_REVERSE_NAME_METHOD.to_string(),
            timeout_secs: DEFAULT_RESOLVER_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path, e),
        })?;
        let config: AppConfig = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("failed to parse config file '{}': {}", path, e),
        })?;
        Ok(config)
    }

    /// Load configuration from `path`, or defaults when the file does not exist.
    pub fn load_or_default(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write a default configuration file into the given directory.
    pub fn init(dir: &str) -> Result<PathBuf, AppError> {
        let dir_path = Path::new(dir);
        if !dir_path.exists() {
            std::fs::create_dir_all(dir_path)?;
        }

        let config_path = dir_path.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Err(AppError::ConfigError {
                reason: format!("{} already exists", config_path.display()),
            });
        }

        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).map_err(|e| AppError::ConfigError {
            reason: format!("failed to serialize default config: {}", e),
        })?;
        std::fs::write(&config_path, toml_str)?;

        Ok(config_path)
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir)
    }
}
