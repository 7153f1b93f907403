//! Merged rule data view
//!
//! The static tables cover the published rules; campaign overlays can
//! add settlements and skills. A `Rulebook` is the merged, owned view
//! the recruitment wizard validates against, built once at startup.

use crate::core::types::Ability;
use crate::tables::loader::RuleOverlay;
use crate::tables::{FUR_COLORS, SETTLEMENT_TABLE, SKILL_CATALOG};
use ahash::AHashMap;

/// Owned settlement entry (static table or overlay)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementEntry {
    pub name: String,
    pub native_trait: String,
    pub skills: Vec<String>,
}

/// The complete rule data a campaign plays with
#[derive(Debug, Clone)]
pub struct Rulebook {
    skills: AHashMap<String, Ability>,
    settlements: AHashMap<String, SettlementEntry>,
    fur_colors: Vec<String>,
}

impl Rulebook {
    /// Rulebook holding only the built-in static tables
    pub fn builtin() -> Self {
        let skills = SKILL_CATALOG
            .iter()
            .map(|def| (def.name.to_string(), def.governs))
            .collect();

        let settlements = SETTLEMENT_TABLE
            .iter()
            .map(|def| {
                (
                    def.name.to_string(),
                    SettlementEntry {
                        name: def.name.to_string(),
                        native_trait: def.native_trait.to_string(),
                        skills: def.skills.iter().map(|s| s.to_string()).collect(),
                    },
                )
            })
            .collect();

        Self {
            skills,
            settlements,
            fur_colors: FUR_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Merge a campaign overlay on top of the built-in tables
    ///
    /// Overlay entries with a name already present replace the
    /// built-in entry.
    pub fn apply_overlay(&mut self, overlay: RuleOverlay) {
        for (name, governs) in overlay.skills {
            self.skills.insert(name, governs);
        }
        for entry in overlay.settlements {
            self.settlements.insert(entry.name.clone(), entry);
        }
    }

    pub fn skill_governs(&self, name: &str) -> Option<Ability> {
        self.skills.get(name).copied()
    }

    pub fn settlement(&self, name: &str) -> Option<&SettlementEntry> {
        self.settlements.get(name)
    }

    pub fn has_fur_color(&self, color: &str) -> bool {
        self.fur_colors.iter().any(|c| c == color)
    }

    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.keys().map(String::as_str)
    }

    pub fn settlement_names(&self) -> impl Iterator<Item = &str> {
        self.settlements.keys().map(String::as_str)
    }

    pub fn fur_colors(&self) -> &[String] {
        &self.fur_colors
    }
}

impl Default for Rulebook {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_carries_static_tables() {
        let book = Rulebook::builtin();
        assert_eq!(book.skill_governs("Pathfinder"), Some(Ability::Health));
        assert!(book.settlement("Lockhaven").is_some());
        assert!(book.has_fur_color("Russet"));
        assert!(!book.has_fur_color("Chartreuse"));
    }

    #[test]
    fn test_overlay_adds_and_replaces() {
        let mut book = Rulebook::builtin();
        book.apply_overlay(RuleOverlay {
            skills: vec![("Tunneler".to_string(), Ability::Health)],
            settlements: vec![SettlementEntry {
                name: "Lockhaven".to_string(),
                native_trait: "Stalwart".to_string(),
                skills: vec!["Tunneler".to_string()],
            }],
        });

        assert_eq!(book.skill_governs("Tunneler"), Some(Ability::Health));
        assert_eq!(book.settlement("Lockhaven").unwrap().native_trait, "Stalwart");
    }
}
