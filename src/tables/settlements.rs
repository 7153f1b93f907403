//! Settlement lookup table - hometowns and what they teach
//!
//! A recruit's birthplace grants a native trait and a choice among the
//! settlement's local skills during recruitment.

/// Definition of a settlement
#[derive(Debug, Clone, Copy)]
pub struct SettlementDefinition {
    pub name: &'static str,
    /// Trait every native of this settlement carries
    pub native_trait: &'static str,
    /// Skills a native may pick one of at recruitment
    pub skills: &'static [&'static str],
}

/// Global settlement table - static definitions
pub static SETTLEMENT_TABLE: &[SettlementDefinition] = &[
    SettlementDefinition {
        name: "Lockhaven",
        native_trait: "Determined",
        skills: &["Weather Watcher", "Militarist"],
    },
    SettlementDefinition {
        name: "Barkstone",
        native_trait: "Generous",
        skills: &["Carpenter", "Haggler"],
    },
    SettlementDefinition {
        name: "Copperwood",
        native_trait: "Hardworking",
        skills: &["Smith", "Miller"],
    },
    SettlementDefinition {
        name: "Elmoss",
        native_trait: "Quiet",
        skills: &["Weaver", "Loremouse"],
    },
    SettlementDefinition {
        name: "Sprucetuck",
        native_trait: "Inquisitive",
        skills: &["Scientist", "Healer"],
    },
    SettlementDefinition {
        name: "Port Sumac",
        native_trait: "Adventurous",
        skills: &["Boatcrafter", "Cook"],
    },
    SettlementDefinition {
        name: "Ivydale",
        native_trait: "Compassionate",
        skills: &["Harvester", "Healer"],
    },
    SettlementDefinition {
        name: "Shaleburrow",
        native_trait: "Steady",
        skills: &["Potter", "Brewer"],
    },
    SettlementDefinition {
        name: "Appleloft",
        native_trait: "Cheerful",
        skills: &["Baker", "Orator"],
    },
    SettlementDefinition {
        name: "Dorigift",
        native_trait: "Patient",
        skills: &["Glazier", "Archivist"],
    },
    SettlementDefinition {
        name: "Pebblebrook",
        native_trait: "Calm",
        skills: &["Stonemason", "Laborer"],
    },
    SettlementDefinition {
        name: "Gilpledge",
        native_trait: "Honest",
        skills: &["Instructor", "Administrator"],
    },
    SettlementDefinition {
        name: "Rootwallow",
        native_trait: "Bold",
        skills: &["Hunter", "Pathfinder"],
    },
    SettlementDefinition {
        name: "Whitepine",
        native_trait: "Independent",
        skills: &["Survivalist", "Scout"],
    },
];

/// Look up a settlement by name
pub fn get_settlement(name: &str) -> Option<&'static SettlementDefinition> {
    SETTLEMENT_TABLE.iter().find(|def| def.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::skills::get_skill_definition;

    #[test]
    fn test_lookup_known_settlement() {
        let def = get_settlement("Lockhaven").unwrap();
        assert_eq!(def.native_trait, "Determined");
        assert!(def.skills.contains(&"Militarist"));
    }

    #[test]
    fn test_lookup_unknown_settlement() {
        assert!(get_settlement("Darkheather").is_none());
    }

    #[test]
    fn test_settlement_skills_exist_in_catalog() {
        for settlement in SETTLEMENT_TABLE {
            for skill in settlement.skills {
                assert!(
                    get_skill_definition(skill).is_some(),
                    "{} teaches unknown skill {}",
                    settlement.name,
                    skill
                );
            }
        }
    }
}
