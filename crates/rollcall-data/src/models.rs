//! Registration record types

use serde::{Deserialize, Serialize};

/// An in-game character owned by a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name as registered in game
    pub name: String,
}

impl Character {
    /// Create a new character record
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A guild member's registration record
///
/// The user id is unique within a guild; the repository enforces that, and
/// the reconciler relies on it when treating registration as a set
/// membership test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    /// Guild the registration belongs to
    pub guild_id: u64,
    /// Discord user id
    pub user_id: u64,
    /// Display name captured at registration time
    pub user_name: String,
    /// Characters registered by this user
    pub characters: Vec<Character>,
}

impl RegisteredUser {
    /// Create a new registration record
    pub fn new(guild_id: u64, user_id: u64, user_name: impl Into<String>) -> Self {
        Self {
            guild_id,
            user_id,
            user_name: user_name.into(),
            characters: Vec::new(),
        }
    }

    /// Add a character to this registration
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(Character::new(name));
        self
    }

    /// Comma-joined character names for display
    pub fn character_names(&self) -> String {
        self.characters
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_names_joined() {
        let user = RegisteredUser::new(1, 42, "pilot")
            .with_character("Alpha")
            .with_character("Bravo");
        assert_eq!(user.character_names(), "Alpha, Bravo");
    }

    #[test]
    fn test_character_names_empty() {
        let user = RegisteredUser::new(1, 42, "pilot");
        assert_eq!(user.character_names(), "");
    }
}
