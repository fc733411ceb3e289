//! Command implementations for the Rollcall Discord bot
//!
//! The report commands cross-reference live guild membership against the
//! registration store and answer with localized, size-shaped messages.

pub mod context;
pub mod framework;
pub mod reconcile;
pub mod reports;
pub mod respond;

pub use context::{BotContext, CommandError, Context};
pub use framework::create_framework;
