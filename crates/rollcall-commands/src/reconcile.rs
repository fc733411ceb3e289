//! Registration reconciliation over a guild member snapshot
//!
//! Pure set logic, no I/O: the command layer projects the cached guild
//! members into [`GuildMemberView`] values, fetches the registration
//! records, and these functions compute the report data. Expected empty
//! outcomes are modeled as [`Report::Empty`] variants rather than errors so
//! callers handle them without touching the error channel.

use rollcall_data::RegisteredUser;
use std::collections::{HashMap, HashSet};

/// Read-only projection of a live guild member
///
/// Owned snapshot taken per invocation; the cache guard it comes from
/// cannot be held across awaits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMemberView {
    /// Discord user id
    pub user_id: u64,
    /// Whether the account is a bot
    pub is_bot: bool,
    /// Display name within the guild
    pub display_name: String,
    /// Mention handle ("<@id>")
    pub mention: String,
    /// Role mention handles, without the implicit everyone role
    pub role_mentions: Vec<String>,
}

/// Why a report has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// No non-bot members are visible; usually a permissions problem on
    /// the Discord side rather than an actually empty guild
    NoHumanMembers,
    /// Every visible member is registered
    NoUnregisteredUsers,
    /// The guild has no registration records
    NoRegisteredUsers,
}

/// Outcome of a report query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report<T> {
    /// The computed report data
    Data(T),
    /// An expected no-results condition
    Empty(EmptyReason),
}

/// Registration counts for a guild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationStats {
    /// Non-bot members visible in the guild
    pub total: usize,
    /// Registration records for the guild
    pub registered: usize,
    /// Members without a registration record
    pub unregistered: usize,
    /// Characters across all registrations
    pub characters: usize,
}

/// Formatted line data for one resolvable registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredRow {
    /// Member mention handle
    pub mention: String,
    /// Comma-joined role mentions
    pub roles: String,
    /// Comma-joined character names
    pub characters: String,
}

/// A registration whose member is no longer visible in the guild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRegistration {
    /// Discord user id from the stale record
    pub user_id: u64,
    /// Display name captured at registration time
    pub user_name: String,
}

/// Registered-member listing with per-entry skip results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredListing {
    /// One row per registration still resolvable against the guild
    pub rows: Vec<RegisteredRow>,
    /// Registrations whose member left the guild or is not visible
    pub skipped: Vec<SkippedRegistration>,
}

impl RegisteredListing {
    /// Total registrations the listing was computed from
    pub fn record_count(&self) -> usize {
        self.rows.len() + self.skipped.len()
    }
}

/// Compute registration counts for a guild
///
/// Stale registrations can outnumber visible members, so the unregistered
/// count saturates at zero.
pub fn stats(members: &[GuildMemberView], registered: &[RegisteredUser]) -> Report<RegistrationStats> {
    let total = members.iter().filter(|m| !m.is_bot).count();
    if total == 0 {
        return Report::Empty(EmptyReason::NoHumanMembers);
    }

    let registered_count = registered.len();
    let characters = registered.iter().map(|u| u.characters.len()).sum();

    Report::Data(RegistrationStats {
        total,
        registered: registered_count,
        unregistered: total.saturating_sub(registered_count),
        characters,
    })
}

/// List members without a registration record, preserving member order
pub fn unregistered<'a>(
    members: &'a [GuildMemberView],
    registered: &[RegisteredUser],
) -> Report<Vec<&'a GuildMemberView>> {
    let registered_ids: HashSet<u64> = registered.iter().map(|u| u.user_id).collect();

    let missing: Vec<&GuildMemberView> = members
        .iter()
        .filter(|m| !m.is_bot && !registered_ids.contains(&m.user_id))
        .collect();

    if missing.is_empty() {
        Report::Empty(EmptyReason::NoUnregisteredUsers)
    } else {
        Report::Data(missing)
    }
}

/// Resolve each registration against the member snapshot
///
/// A record whose member is gone is skipped, never fatal; the caller logs
/// a warning per skipped entry.
pub fn registered(
    members: &[GuildMemberView],
    registered: &[RegisteredUser],
) -> Report<RegisteredListing> {
    if registered.is_empty() {
        return Report::Empty(EmptyReason::NoRegisteredUsers);
    }

    let by_id: HashMap<u64, &GuildMemberView> =
        members.iter().map(|m| (m.user_id, m)).collect();

    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for user in registered {
        match by_id.get(&user.user_id) {
            Some(member) => rows.push(RegisteredRow {
                mention: member.mention.clone(),
                roles: member.role_mentions.join(", "),
                characters: user.character_names(),
            }),
            None => skipped.push(SkippedRegistration {
                user_id: user.user_id,
                user_name: user.user_name.clone(),
            }),
        }
    }

    Report::Data(RegisteredListing { rows, skipped })
}
