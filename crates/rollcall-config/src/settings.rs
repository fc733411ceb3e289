//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Discord-related configuration
    pub discord: DiscordConfig,

    /// Registration store configuration
    pub database: DatabaseConfig,

    /// Localization configuration
    pub i18n: I18nConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Validate every configuration section
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.discord.validate()?;
        self.database.validate()?;
        self.i18n.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            database: DatabaseConfig::default(),
            i18n: I18nConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Discord bot configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscordConfig {
    /// Discord bot token
    #[validate(length(min = 1, message = "Discord token cannot be empty"))]
    #[validate(custom(
        function = "crate::validation::validate_discord_token",
        message = "Invalid Discord token format"
    ))]
    pub token: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub request_timeout_seconds: u64,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: "000000000000000000.placeholder.signature".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

/// Registration store configuration
///
/// The connection URL is handed to whichever repository implementation the
/// deployment wires in; the report commands only read through the trait.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DatabaseConfig {
    /// Store connection URL
    #[validate(length(min = 1, message = "Database URL cannot be empty"))]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://rollcall.db".to_string(),
        }
    }
}

/// Localization configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct I18nConfig {
    /// Default locale code, used as the fallback for missing translations
    #[validate(length(min = 1, message = "Default locale cannot be empty"))]
    pub default_locale: String,

    /// Directory holding `<locale>/main.ftl` resources
    #[validate(length(min = 1, message = "Locales directory cannot be empty"))]
    pub locales_dir: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales_dir: "locales".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "rollcall=debug")
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,

    /// Optional log file path
    pub file: Option<String>,

    /// Whether console output uses ANSI colors
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            colored: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut config = Config::default();
        config.discord.token = String::new();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_out_of_range_timeout_rejected() {
        let mut config = Config::default();
        config.discord.request_timeout_seconds = 0;
        assert!(config.validate_all().is_err());
    }
}
