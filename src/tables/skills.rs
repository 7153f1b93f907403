//! Static skill catalog - the global list all characters draw from

use crate::core::types::Ability;

/// Definition of a skill
#[derive(Debug, Clone, Copy)]
pub struct SkillDefinition {
    pub name: &'static str,
    /// Ability whose level sets the learning threshold while the
    /// skill is untrained
    pub governs: Ability,
}

/// Global skill catalog - static definitions
///
/// Governing assignments follow the rulebook split: bodily craft and
/// fieldwork under Health, lore and social skills under Will.
pub static SKILL_CATALOG: &[SkillDefinition] = &[
    SkillDefinition { name: "Administrator", governs: Ability::Will },
    SkillDefinition { name: "Apiarist", governs: Ability::Will },
    SkillDefinition { name: "Archivist", governs: Ability::Will },
    SkillDefinition { name: "Armorer", governs: Ability::Health },
    SkillDefinition { name: "Baker", governs: Ability::Will },
    SkillDefinition { name: "Boatcrafter", governs: Ability::Health },
    SkillDefinition { name: "Brewer", governs: Ability::Will },
    SkillDefinition { name: "Carpenter", governs: Ability::Health },
    SkillDefinition { name: "Cartographer", governs: Ability::Will },
    SkillDefinition { name: "Cook", governs: Ability::Will },
    SkillDefinition { name: "Deceiver", governs: Ability::Will },
    SkillDefinition { name: "Fighter", governs: Ability::Health },
    SkillDefinition { name: "Glazier", governs: Ability::Health },
    SkillDefinition { name: "Haggler", governs: Ability::Will },
    SkillDefinition { name: "Harvester", governs: Ability::Health },
    SkillDefinition { name: "Healer", governs: Ability::Will },
    SkillDefinition { name: "Hunter", governs: Ability::Health },
    SkillDefinition { name: "Insectrist", governs: Ability::Will },
    SkillDefinition { name: "Instructor", governs: Ability::Will },
    SkillDefinition { name: "Laborer", governs: Ability::Health },
    SkillDefinition { name: "Loremouse", governs: Ability::Will },
    SkillDefinition { name: "Militarist", governs: Ability::Will },
    SkillDefinition { name: "Miller", governs: Ability::Health },
    SkillDefinition { name: "Orator", governs: Ability::Will },
    SkillDefinition { name: "Pathfinder", governs: Ability::Health },
    SkillDefinition { name: "Persuader", governs: Ability::Will },
    SkillDefinition { name: "Potter", governs: Ability::Health },
    SkillDefinition { name: "Scientist", governs: Ability::Will },
    SkillDefinition { name: "Scout", governs: Ability::Health },
    SkillDefinition { name: "Smith", governs: Ability::Health },
    SkillDefinition { name: "Stonemason", governs: Ability::Health },
    SkillDefinition { name: "Survivalist", governs: Ability::Health },
    SkillDefinition { name: "Weather Watcher", governs: Ability::Will },
    SkillDefinition { name: "Weaver", governs: Ability::Health },
];

/// Look up a skill definition by name
pub fn get_skill_definition(name: &str) -> Option<&'static SkillDefinition> {
    SKILL_CATALOG.iter().find(|def| def.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_skill() {
        let def = get_skill_definition("Pathfinder").unwrap();
        assert_eq!(def.governs, Ability::Health);
    }

    #[test]
    fn test_lookup_unknown_skill() {
        assert!(get_skill_definition("Basketweaver").is_none());
    }

    #[test]
    fn test_catalog_names_unique() {
        use std::collections::HashSet;
        let names: HashSet<_> = SKILL_CATALOG.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), SKILL_CATALOG.len());
    }
}
