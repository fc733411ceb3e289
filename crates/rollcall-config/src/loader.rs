//! Configuration loading utilities

use crate::Config;
use rollcall_common::Result as RollcallResult;
use std::env;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for rollcall_common::RollcallError {
    fn from(err: ConfigError) -> Self {
        rollcall_common::RollcallError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables and files
    pub fn load() -> RollcallResult<Config> {
        let config = if let Ok(config_path) = env::var("ROLLCALL_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("config.yaml").exists() {
            Self::load_config("config.yaml")?
        } else if Path::new("config.yml").exists() {
            Self::load_config("config.yml")?
        } else {
            // No config file found, use defaults with env overrides
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(token) = env::var("DISCORD_TOKEN") {
            config.discord.token = token;
        }

        if let Ok(timeout) = env::var("DISCORD_TIMEOUT") {
            config.discord.request_timeout_seconds =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "DISCORD_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database.url = url;
        }

        if let Ok(locale) = env::var("DEFAULT_LOCALE") {
            config.i18n.default_locale = locale;
        }

        if let Ok(dir) = env::var("LOCALES_DIR") {
            config.i18n.locales_dir = dir;
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.logging.file = Some(file);
        }

        if let Ok(colored) = env::var("LOG_COLORED") {
            config.logging.colored = colored.parse().map_err(|e| ConfigError::EnvParseError {
                var: "LOG_COLORED".to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}
