//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Skill and ability rating (level). Unsigned, so the "never negative"
/// invariant holds by construction.
pub type Rating = u8;

/// The foundational abilities. Few and fixed; skills are numerous and
/// each governed by one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Will,
    Health,
}

impl Ability {
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Will => "Will",
            Ability::Health => "Health",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Will" => Some(Ability::Will),
            "Health" => Some(Ability::Health),
            _ => None,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_id_uniqueness() {
        let a = CharacterId::new();
        let b = CharacterId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ability_name_round_trip() {
        for ability in [Ability::Will, Ability::Health] {
            assert_eq!(Ability::from_name(ability.name()), Some(ability));
        }
        assert_eq!(Ability::from_name("Resources"), None);
    }
}
