//! Registration report commands
//!
//! `/reports stats`, `/reports unregistered` and `/reports registered` are
//! administrator-only and answer in the invoker's locale. Expected empty
//! outcomes render as a single informational message; anything unexpected
//! is logged and the invoker sees only a generic failure message.

use crate::context::{request_locale, CommandError, Context};
use crate::reconcile::{self, EmptyReason, GuildMemberView, Report};
use crate::respond;
use poise::serenity_prelude::Mentionable;
use rollcall_i18n::{fluent_args, Locale};
use tracing::{error, warn};

/// Registration report commands
#[poise::command(
    slash_command,
    guild_only,
    subcommand_required,
    default_member_permissions = "ADMINISTRATOR",
    subcommands("stats", "unregistered", "registered"),
    description_localized("ru", "Отчеты о регистрации")
)]
pub async fn reports(_ctx: Context<'_>) -> Result<(), CommandError> {
    Ok(())
}

/// Show users and characters registration stats
#[poise::command(
    slash_command,
    guild_only,
    description_localized("ru", "Показать статистику регистрации пользователей и персонажей")
)]
pub async fn stats(ctx: Context<'_>) -> Result<(), CommandError> {
    let locale = request_locale(&ctx);
    if let Err(err) = run_stats(&ctx, &locale).await {
        report_failure(&ctx, &locale, "stats", err).await?;
    }
    Ok(())
}

/// Show unregistered users
#[poise::command(
    slash_command,
    guild_only,
    description_localized("ru", "Показать незарегистрированных пользователей")
)]
pub async fn unregistered(ctx: Context<'_>) -> Result<(), CommandError> {
    let locale = request_locale(&ctx);
    if let Err(err) = run_unregistered(&ctx, &locale).await {
        report_failure(&ctx, &locale, "unregistered", err).await?;
    }
    Ok(())
}

/// Show registered users
#[poise::command(
    slash_command,
    guild_only,
    description_localized("ru", "Показать зарегистрированных пользователей")
)]
pub async fn registered(ctx: Context<'_>) -> Result<(), CommandError> {
    let locale = request_locale(&ctx);
    if let Err(err) = run_registered(&ctx, &locale).await {
        report_failure(&ctx, &locale, "registered", err).await?;
    }
    Ok(())
}

async fn run_stats(ctx: &Context<'_>, locale: &Locale) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.guild_id() else {
        return say_key(ctx, locale, "guild-only").await;
    };

    let members = member_snapshot(ctx);
    let records = ctx.data().users.find_by_guild(guild_id.get()).await?;

    match reconcile::stats(&members, &records) {
        Report::Empty(reason) => say_key(ctx, locale, empty_reason_key(reason)).await,
        Report::Data(stats) => {
            let args = fluent_args![
                "total" => stats.total as u64,
                "registered" => stats.registered as u64,
                "unregistered" => stats.unregistered as u64,
                "characters" => stats.characters as u64,
            ];
            let text = ctx
                .data()
                .i18n
                .get_message("reports-stats", locale, args.as_ref())?;
            ctx.say(text).await?;
            Ok(())
        }
    }
}

async fn run_unregistered(ctx: &Context<'_>, locale: &Locale) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.guild_id() else {
        return say_key(ctx, locale, "guild-only").await;
    };

    let members = member_snapshot(ctx);
    let records = ctx.data().users.find_by_guild(guild_id.get()).await?;

    match reconcile::unregistered(&members, &records) {
        Report::Empty(reason) => say_key(ctx, locale, empty_reason_key(reason)).await,
        Report::Data(missing) => {
            let args = fluent_args!["count" => missing.len() as u64];
            let header = ctx
                .data()
                .i18n
                .get_message("unregistered-header", locale, args.as_ref())?;

            let mut fragments = Vec::with_capacity(missing.len() + 1);
            fragments.push(format!("{header}\n"));
            let last = missing.len() - 1;
            for (i, member) in missing.iter().enumerate() {
                if i == last {
                    fragments.push(member.mention.clone());
                } else {
                    fragments.push(format!("{}, ", member.mention));
                }
            }

            respond::send_fragments(ctx, &fragments).await
        }
    }
}

async fn run_registered(ctx: &Context<'_>, locale: &Locale) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.guild_id() else {
        return say_key(ctx, locale, "guild-only").await;
    };

    let members = member_snapshot(ctx);
    let records = ctx.data().users.find_by_guild(guild_id.get()).await?;

    match reconcile::registered(&members, &records) {
        Report::Empty(reason) => say_key(ctx, locale, empty_reason_key(reason)).await,
        Report::Data(listing) => {
            for skipped in &listing.skipped {
                warn!(
                    user_name = %skipped.user_name,
                    user_id = skipped.user_id,
                    "registered user not found in guild"
                );
            }

            let args = fluent_args!["count" => listing.record_count() as u64];
            let header = ctx
                .data()
                .i18n
                .get_message("registered-header", locale, args.as_ref())?;

            let mut fragments = Vec::with_capacity(listing.rows.len() + 1);
            fragments.push(format!("{header}\n"));
            for row in &listing.rows {
                fragments.push(format!("* {} ({}): {}\n", row.mention, row.roles, row.characters));
            }

            respond::send_fragments(ctx, &fragments).await
        }
    }
}

/// Project the cached guild members into owned views
///
/// The cache guard is not `Send`, so the projection happens before the
/// first await. Sorting by id (snowflake order) keeps listings stable
/// across invocations.
fn member_snapshot(ctx: &Context<'_>) -> Vec<GuildMemberView> {
    let Some(guild) = ctx.guild() else {
        return Vec::new();
    };

    let everyone = guild.id.get();
    let mut members: Vec<GuildMemberView> = guild
        .members
        .values()
        .map(|member| GuildMemberView {
            user_id: member.user.id.get(),
            is_bot: member.user.bot,
            display_name: member.display_name().to_string(),
            mention: member.mention().to_string(),
            role_mentions: member
                .roles
                .iter()
                .filter(|role| role.get() != everyone)
                .map(|role| role.mention().to_string())
                .collect(),
        })
        .collect();

    members.sort_by_key(|m| m.user_id);
    members
}

fn empty_reason_key(reason: EmptyReason) -> &'static str {
    match reason {
        EmptyReason::NoHumanMembers => "members-not-visible",
        EmptyReason::NoUnregisteredUsers => "no-unregistered",
        EmptyReason::NoRegisteredUsers => "no-registered",
    }
}

async fn say_key(ctx: &Context<'_>, locale: &Locale, key: &str) -> Result<(), CommandError> {
    let text = ctx.data().i18n.get_message(key, locale, None)?;
    ctx.say(text).await?;
    Ok(())
}

/// Unexpected-failure boundary: log with detail, show the generic message
async fn report_failure(
    ctx: &Context<'_>,
    locale: &Locale,
    command: &str,
    err: CommandError,
) -> Result<(), CommandError> {
    error!(command, error = %err, "report command failed");
    let text = ctx.data().i18n.get_message_or_default(
        "something-went-wrong",
        locale,
        None,
        "Something went wrong. Please try again later.",
    );
    ctx.say(text).await?;
    Ok(())
}
