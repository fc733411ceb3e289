//! Main entry point for the Rollcall bot.

use rollcall_bot::{BotError, BotResult, RollcallBot};
use rollcall_common::logging::{self, LoggingConfig};
use rollcall_common::RollcallError;
use rollcall_config::ConfigLoader;
use rollcall_data::{MemoryUserDataRepo, UserDataRepo};
use rollcall_i18n::{I18nManager, Locale};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    // Load configuration
    let config = ConfigLoader::load()?;

    // Initialize tracing
    logging::init_logging(LoggingConfig {
        level: config.logging.level.clone(),
        file_path: config.logging.file.clone(),
        colored: config.logging.colored,
    })
    .map_err(|e| BotError::Logging(e.to_string()))?;

    info!("Starting Rollcall");

    // Unsupported locale codes are a startup error, not a runtime surprise
    let default_locale = Locale::from_code(&config.i18n.default_locale).ok_or_else(|| {
        RollcallError::config(format!(
            "unsupported default locale '{}'",
            config.i18n.default_locale
        ))
    })?;

    let mut i18n = I18nManager::new(default_locale, &config.i18n.locales_dir)?;
    i18n.load_all_locales()?;

    // Process-local store until an external repository implementation is
    // wired in; registrations are created outside this service.
    let users: Arc<dyn UserDataRepo> = Arc::new(MemoryUserDataRepo::new());

    let bot = RollcallBot::new(Arc::new(config), Arc::new(i18n), users);

    if let Err(e) = bot.start().await {
        error!("Bot failed to start: {}", e);
        return Err(e);
    }

    Ok(())
}
