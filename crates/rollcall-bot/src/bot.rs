//! Core bot logic using the Poise framework.

use crate::error::{BotError, BotResult};
use poise::serenity_prelude as serenity;
use rollcall_commands::{create_framework, BotContext};
use rollcall_config::Config;
use rollcall_data::UserDataRepo;
use rollcall_i18n::I18nManager;
use std::sync::Arc;
use tracing::info;

/// Main bot structure.
pub struct RollcallBot {
    config: Arc<Config>,
    i18n: Arc<I18nManager>,
    users: Arc<dyn UserDataRepo>,
}

impl RollcallBot {
    /// Creates a new bot instance.
    pub fn new(
        config: Arc<Config>,
        i18n: Arc<I18nManager>,
        users: Arc<dyn UserDataRepo>,
    ) -> Self {
        Self {
            config,
            i18n,
            users,
        }
    }

    /// Starts the bot.
    pub async fn start(&self) -> BotResult<()> {
        let config = self.config.clone();
        let i18n = self.i18n.clone();
        let users = self.users.clone();

        let framework = create_framework()
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!("Logged in as {} (ID: {})", ready.user.name, ready.user.id);
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    Ok(BotContext {
                        config,
                        i18n,
                        users,
                    })
                })
            })
            .build();

        // Reading the member list requires the privileged GUILD_MEMBERS intent
        let intents =
            serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::GUILD_MEMBERS;

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, intents)
            .framework(framework)
            .await
            .map_err(|e| BotError::Framework(format!("{:?}", e)))?;

        client
            .start()
            .await
            .map_err(|e| BotError::Framework(format!("{:?}", e)))?;
        Ok(())
    }
}
