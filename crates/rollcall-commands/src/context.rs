//! Command context and framework integration

use rollcall_config::Config;
use rollcall_data::UserDataRepo;
use rollcall_i18n::{I18nManager, Locale};
use std::sync::Arc;

/// Shared application state accessible across commands
///
/// Constructed once at process start and injected as poise user data; there
/// is no global bot instance to reach for.
pub struct BotContext {
    /// Application configuration
    pub config: Arc<Config>,
    /// Internationalization manager
    pub i18n: Arc<I18nManager>,
    /// Registration store
    pub users: Arc<dyn UserDataRepo>,
}

/// Error type for commands
pub type CommandError = Box<dyn std::error::Error + Send + Sync>;

/// Poise context type alias
pub type Context<'a> = poise::Context<'a, BotContext, CommandError>;

/// Locale of the current invocation
///
/// Discord reports the invoker's client locale on the interaction; anything
/// unsupported resolves to the configured default.
pub fn request_locale(ctx: &Context<'_>) -> Locale {
    ctx.locale()
        .and_then(Locale::from_code)
        .unwrap_or_else(|| ctx.data().i18n.default_locale().clone())
}
