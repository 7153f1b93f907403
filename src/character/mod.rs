//! Character sheets and the store that owns them
//!
//! A sheet holds the named abilities and skills the engine operates on.
//! The store serializes concurrent recordings per character; characters
//! never contend with each other.

pub mod sheet;
pub mod store;

pub use sheet::{AbilityState, CharacterSheet, SkillState};
pub use store::{CharacterStore, StoreStats};
