//! Per-character skill and ability state

use crate::advancement::{record_test, TestOutcome, TestRecord, TestTally};
use crate::core::types::{Ability, CharacterId, Rating};
use crate::core::{Result, RulesError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// State of one foundational ability
///
/// Abilities start at level 1 or higher; they are never "learned" the
/// way untrained skills are, so their advancement always takes the
/// trained path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityState {
    pub level: Rating,
    #[serde(default)]
    pub tally: TestTally,
}

impl AbilityState {
    pub fn new(level: Rating) -> Self {
        Self {
            level,
            tally: TestTally::default(),
        }
    }
}

/// State of one skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillState {
    pub level: Rating,
    #[serde(default)]
    pub tally: TestTally,
    /// Ability whose level sets the learning threshold while this
    /// skill is untrained. Fixed at the time the skill is added.
    pub governed_by: Ability,
}

impl SkillState {
    pub fn new(level: Rating, governed_by: Ability) -> Self {
        Self {
            level,
            tally: TestTally::default(),
            governed_by,
        }
    }
}

/// A character's rules-relevant state
///
/// BTreeMaps keep serialized sheets and iteration order stable for
/// display and snapshot comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub fur_color: Option<String>,
    #[serde(default)]
    traits: Vec<String>,
    abilities: BTreeMap<String, AbilityState>,
    skills: BTreeMap<String, SkillState>,
}

impl CharacterSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            fur_color: None,
            traits: Vec::new(),
            abilities: BTreeMap::new(),
            skills: BTreeMap::new(),
        }
    }

    pub fn add_trait(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.traits.contains(&name) {
            self.traits.push(name);
        }
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    /// Add or replace an ability; level 1 is the floor, as everywhere
    pub fn set_ability(&mut self, ability: Ability, level: Rating) -> Result<()> {
        if level == 0 {
            return Err(RulesError::InvalidInput(format!(
                "ability {} cannot be set to 0",
                ability
            )));
        }
        self.abilities
            .insert(ability.name().to_string(), AbilityState::new(level));
        Ok(())
    }

    pub fn ability(&self, ability: Ability) -> Option<&AbilityState> {
        self.abilities.get(ability.name())
    }

    pub fn ability_level(&self, ability: Ability) -> Result<u8> {
        self.abilities
            .get(ability.name())
            .map(|a| a.level)
            .ok_or_else(|| RulesError::AbilityNotFound(ability.name().to_string()))
    }

    pub fn add_skill(&mut self, name: impl Into<String>, level: Rating, governed_by: Ability) {
        self.skills
            .insert(name.into(), SkillState::new(level, governed_by));
    }

    pub fn skill(&self, name: &str) -> Option<&SkillState> {
        self.skills.get(name)
    }

    pub fn skills(&self) -> &BTreeMap<String, SkillState> {
        &self.skills
    }

    pub fn abilities(&self) -> &BTreeMap<String, AbilityState> {
        &self.abilities
    }

    /// Record a test outcome against a named skill
    ///
    /// The governing ability's level is read here, at recording time,
    /// never cached on the skill: an ability that advanced yesterday
    /// lowers today's learning threshold.
    pub fn record_skill_test(&mut self, name: &str, outcome: TestOutcome) -> Result<TestRecord> {
        let governed_by = self
            .skills
            .get(name)
            .ok_or_else(|| RulesError::SkillNotFound(name.to_string()))?
            .governed_by;
        let governing_level = self.ability_level(governed_by)?;

        let skill = self
            .skills
            .get_mut(name)
            .ok_or_else(|| RulesError::SkillNotFound(name.to_string()))?;
        let record = record_test(skill.level, skill.tally, governing_level, outcome);
        skill.tally = record.tally;
        skill.level = record.new_level;

        if record.leveled_up {
            tracing::info!(character = %self.id, skill = name, level = record.new_level, "skill advanced");
        }

        Ok(record)
    }

    /// Record a test outcome against a named ability
    ///
    /// Abilities are trained by definition (level >= 1), so no
    /// governing lookup is involved.
    pub fn record_ability_test(&mut self, ability: Ability, outcome: TestOutcome) -> Result<TestRecord> {
        let state = self
            .abilities
            .get_mut(ability.name())
            .ok_or_else(|| RulesError::AbilityNotFound(ability.name().to_string()))?;

        let record = record_test(state.level, state.tally, state.level, outcome);
        state.tally = record.tally;
        state.level = record.new_level;

        if record.leveled_up {
            tracing::info!(character = %self.id, ability = %ability, level = record.new_level, "ability advanced");
        }

        Ok(record)
    }

    /// Administrative override of a skill's tally
    ///
    /// Does not trigger advancement; the next recorded test applies
    /// the thresholds against these counts.
    pub fn set_skill_tally(&mut self, name: &str, successes: u32, failures: u32) -> Result<()> {
        let skill = self
            .skills
            .get_mut(name)
            .ok_or_else(|| RulesError::SkillNotFound(name.to_string()))?;
        skill.tally = TestTally::new(successes, failures);
        Ok(())
    }

    /// Administrative override of a skill's level
    ///
    /// Any level change invalidates accumulated progress, so the tally
    /// resets unconditionally, even when the level is unchanged in
    /// value.
    pub fn set_skill_level(&mut self, name: &str, level: Rating) -> Result<()> {
        let skill = self
            .skills
            .get_mut(name)
            .ok_or_else(|| RulesError::SkillNotFound(name.to_string()))?;
        skill.level = level;
        skill.tally = TestTally::default();
        Ok(())
    }

    /// Administrative override of an ability's level; resets its tally
    pub fn set_ability_level(&mut self, ability: Ability, level: Rating) -> Result<()> {
        if level == 0 {
            return Err(RulesError::InvalidInput(format!(
                "ability {} cannot be set to 0",
                ability
            )));
        }
        let state = self
            .abilities
            .get_mut(ability.name())
            .ok_or_else(|| RulesError::AbilityNotFound(ability.name().to_string()))?;
        state.level = level;
        state.tally = TestTally::default();
        Ok(())
    }

    /// Export the sheet as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
