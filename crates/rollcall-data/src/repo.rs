//! Repository interface for registration records

use crate::models::RegisteredUser;
use async_trait::async_trait;
use rollcall_common::Result;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Read access to registration records, scoped by guild
///
/// Implementations are expected to return a snapshot consistent enough for
/// reporting; no transactional guarantees are assumed by callers.
#[async_trait]
pub trait UserDataRepo: Send + Sync {
    /// Find all registered users for a guild
    async fn find_by_guild(&self, guild_id: u64) -> Result<Vec<RegisteredUser>>;
}

/// In-memory repository, used as the process-local store and in tests
#[derive(Debug, Default)]
pub struct MemoryUserDataRepo {
    records: RwLock<HashMap<u64, Vec<RegisteredUser>>>,
}

impl MemoryUserDataRepo {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a registration record
    ///
    /// Replaces an existing record with the same user id, keeping the
    /// one-registration-per-user invariant.
    pub fn upsert(&self, user: RegisteredUser) {
        let mut records = self.records.write().unwrap();
        let guild_records = records.entry(user.guild_id).or_default();
        if let Some(existing) = guild_records
            .iter_mut()
            .find(|r| r.user_id == user.user_id)
        {
            *existing = user;
        } else {
            guild_records.push(user);
        }
    }
}

#[async_trait]
impl UserDataRepo for MemoryUserDataRepo {
    async fn find_by_guild(&self, guild_id: u64) -> Result<Vec<RegisteredUser>> {
        let records = self.records.read().unwrap();
        let found = records.get(&guild_id).cloned().unwrap_or_default();
        debug!(guild_id, count = found.len(), "fetched registrations");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_guild_scopes_records() {
        let repo = MemoryUserDataRepo::new();
        repo.upsert(RegisteredUser::new(1, 10, "alice").with_character("Alpha"));
        repo.upsert(RegisteredUser::new(1, 11, "bob"));
        repo.upsert(RegisteredUser::new(2, 12, "carol"));

        let guild_one = repo.find_by_guild(1).await.unwrap();
        assert_eq!(guild_one.len(), 2);

        let guild_two = repo.find_by_guild(2).await.unwrap();
        assert_eq!(guild_two.len(), 1);
        assert_eq!(guild_two[0].user_name, "carol");
    }

    #[tokio::test]
    async fn test_find_by_guild_unknown_guild_is_empty() {
        let repo = MemoryUserDataRepo::new();
        assert!(repo.find_by_guild(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_replaces_same_user() {
        let repo = MemoryUserDataRepo::new();
        repo.upsert(RegisteredUser::new(1, 10, "alice"));
        repo.upsert(RegisteredUser::new(1, 10, "alice").with_character("Alpha"));

        let records = repo.find_by_guild(1).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].characters.len(), 1);
    }
}
