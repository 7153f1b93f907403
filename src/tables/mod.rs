//! Static rule tables
//!
//! The skill catalog, settlement table, and fur-color list are fixed
//! game data: immutable, statically initialized, looked up by name.
//! Campaigns can extend them through the TOML overlay loader; the
//! merged view lives in [`Rulebook`].

pub mod fur;
pub mod loader;
pub mod rulebook;
pub mod settlements;
pub mod skills;

pub use fur::FUR_COLORS;
pub use loader::{load_overlay_dir, parse_overlay_toml, RuleOverlay};
pub use rulebook::{Rulebook, SettlementEntry};
pub use settlements::{get_settlement, SettlementDefinition, SETTLEMENT_TABLE};
pub use skills::{get_skill_definition, SkillDefinition, SKILL_CATALOG};
