//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] rollcall_common::RollcallError),

    /// Localization error.
    #[error("Localization error: {0}")]
    I18n(#[from] rollcall_i18n::I18nError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// Poise framework error.
    #[error("Framework error: {0}")]
    Framework(String),

    /// Logging setup error.
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = BotError::Framework("client build failed".to_string());
        assert_eq!(error.to_string(), "Framework error: client build failed");

        let error: BotError = rollcall_common::RollcallError::config("missing token").into();
        assert!(error.to_string().contains("Configuration error"));
    }
}
