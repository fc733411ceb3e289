//! Error types and utilities for Rollcall

use thiserror::Error;

/// Result type alias for Rollcall operations
pub type Result<T> = std::result::Result<T, RollcallError>;

/// Main error type for Rollcall operations
#[derive(Error, Debug)]
pub enum RollcallError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Discord API related errors
    #[error("Discord API error: {message}")]
    Discord {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Registration store related errors
    #[error("Registration store error: {message}")]
    Store {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        locale: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RollcallError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Discord API error
    pub fn discord(msg: impl Into<String>) -> Self {
        Self::Discord {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new registration store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new registration store error with source
    pub fn store_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Store {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: None,
            source: None,
        }
    }

    /// Create a new localization error with locale
    pub fn localization_with_locale(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = RollcallError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = RollcallError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let store_error = RollcallError::store("lookup failed");
        assert!(store_error.to_string().contains("Registration store error"));

        let localization_error =
            RollcallError::localization_with_locale("Translation missing", "ru");
        assert!(localization_error.to_string().contains("Localization error"));
        assert!(localization_error
            .to_string()
            .contains("Translation missing"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = RollcallError::with_source("Failed to read file", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let rollcall_error: RollcallError = io_error.into();

        assert!(rollcall_error.to_string().contains("I/O error"));
        assert!(rollcall_error.source().is_some());
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = RollcallError::config_with_source("Middle layer", root_error);
        let top_error = RollcallError::with_source("Top layer", middle_error);

        assert!(top_error.to_string().contains("Top layer"));

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;

        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert!(error_count >= 2);
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(RollcallError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
