//! Poise framework setup and command registration logic

use crate::context::{BotContext, CommandError};
use tracing::error;

/// Creates a new Poise framework with the report commands installed
pub fn create_framework() -> poise::FrameworkBuilder<BotContext, CommandError> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: vec![crate::reports::reports()],
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    })
}

/// Last-resort error hook
///
/// Command handlers render their own user-facing failures; anything that
/// still reaches here is logged and handed to the poise default handler.
async fn on_error(error: poise::FrameworkError<'_, BotContext, CommandError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                command = %ctx.command().qualified_name,
                error = %error,
                "command returned an error"
            );
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!(error = %e, "error while handling framework error");
            }
        }
    }
}
