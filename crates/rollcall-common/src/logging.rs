//! Structured logging infrastructure for Rollcall

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "rollcall=debug")
    pub level: String,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to enable ANSI colors on console output
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            colored: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // RUST_LOG wins over the configured level when set
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let registry = tracing_subscriber::registry().with(env_filter);

    if let Some(file_path) = config.file_path {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        registry
            .with(fmt::layer().with_ansi(false).with_writer(file))
            .init();
    } else {
        registry
            .with(fmt::layer().with_ansi(config.colored).with_target(true))
            .init();
    }

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LoggingConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.file_path.is_none());
        assert!(config.colored);
    }
}
