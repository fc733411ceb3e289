//! # Rollcall Config
//!
//! Configuration structures, validation, and loading for the Rollcall bot.
//!
//! Settings come from a YAML file with environment variable overrides and
//! are validated before the application starts.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, DatabaseConfig, DiscordConfig, I18nConfig, LoggingConfig};
