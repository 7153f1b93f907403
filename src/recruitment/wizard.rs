//! The recruitment wizard
//!
//! Walks the recruitment steps in order, validating each choice
//! against the rulebook, and derives the finished sheet through
//! [`stack_bonuses`](crate::recruitment::stack_bonuses).

use crate::character::CharacterSheet;
use crate::core::config::config;
use crate::core::types::Ability;
use crate::core::{Result, RulesError};
use crate::recruitment::bonus::{stack_bonuses, SkillBonus};
use crate::tables::Rulebook;
use serde::{Deserialize, Serialize};

/// Age at recruitment; sets the starting ability spread
///
/// Older recruits have had more time to harden their resolve, at the
/// cost of the body: Will climbs with age while Health falls off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBand {
    Tenderpaw,
    Guardmouse,
    Patrolguard,
    PatrolLeader,
}

impl AgeBand {
    pub fn base_will(&self) -> u8 {
        match self {
            AgeBand::Tenderpaw => 2,
            AgeBand::Guardmouse => 3,
            AgeBand::Patrolguard => 4,
            AgeBand::PatrolLeader => 5,
        }
    }

    pub fn base_health(&self) -> u8 {
        match self {
            AgeBand::Tenderpaw => 5,
            AgeBand::Guardmouse => 4,
            AgeBand::Patrolguard => 4,
            AgeBand::PatrolLeader => 3,
        }
    }
}

/// Multi-step character creation
///
/// Steps may run in any order; [`finish`](RecruitmentWizard::finish)
/// rejects incomplete wizards. Each step validates its choice against
/// the rulebook immediately, so a bad settlement name fails at the
/// step, not at the end.
pub struct RecruitmentWizard<'a> {
    rulebook: &'a Rulebook,
    name: Option<String>,
    age: Option<AgeBand>,
    hometown: Option<String>,
    hometown_skill: Option<String>,
    parent_trade: Option<String>,
    mentor_skill: Option<String>,
    friend_skill: Option<String>,
    fur_color: Option<String>,
}

impl<'a> RecruitmentWizard<'a> {
    pub fn new(rulebook: &'a Rulebook) -> Self {
        Self {
            rulebook,
            name: None,
            age: None,
            hometown: None,
            hometown_skill: None,
            parent_trade: None,
            mentor_skill: None,
            friend_skill: None,
            fur_color: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RulesError::InvalidInput("recruit name is empty".into()));
        }
        self.name = Some(name);
        Ok(self)
    }

    pub fn age(mut self, age: AgeBand) -> Self {
        self.age = Some(age);
        self
    }

    /// Birthplace: grants the settlement's native trait, and the
    /// chosen skill must be one the settlement teaches.
    pub fn hometown(mut self, settlement: &str, skill: &str) -> Result<Self> {
        let entry = self
            .rulebook
            .settlement(settlement)
            .ok_or_else(|| RulesError::InvalidInput(format!("unknown settlement '{}'", settlement)))?;

        if !entry.skills.iter().any(|s| s == skill) {
            return Err(RulesError::InvalidInput(format!(
                "'{}' is not taught in {}",
                skill, settlement
            )));
        }

        self.hometown = Some(settlement.to_string());
        self.hometown_skill = Some(skill.to_string());
        Ok(self)
    }

    pub fn parent_trade(mut self, skill: &str) -> Result<Self> {
        self.validate_skill(skill)?;
        self.parent_trade = Some(skill.to_string());
        Ok(self)
    }

    pub fn mentor_skill(mut self, skill: &str) -> Result<Self> {
        self.validate_skill(skill)?;
        self.mentor_skill = Some(skill.to_string());
        Ok(self)
    }

    pub fn friend_skill(mut self, skill: &str) -> Result<Self> {
        self.validate_skill(skill)?;
        self.friend_skill = Some(skill.to_string());
        Ok(self)
    }

    pub fn fur_color(mut self, color: &str) -> Result<Self> {
        if !self.rulebook.has_fur_color(color) {
            return Err(RulesError::InvalidInput(format!(
                "unknown fur color '{}'",
                color
            )));
        }
        self.fur_color = Some(color.to_string());
        Ok(self)
    }

    fn validate_skill(&self, skill: &str) -> Result<()> {
        if self.rulebook.skill_governs(skill).is_none() {
            return Err(RulesError::SkillNotFound(skill.to_string()));
        }
        Ok(())
    }

    fn required<T>(value: Option<T>, step: &str) -> Result<T> {
        value.ok_or_else(|| RulesError::InvalidInput(format!("recruitment step '{}' not completed", step)))
    }

    /// Derive the finished sheet from the completed steps
    pub fn finish(self) -> Result<CharacterSheet> {
        let cfg = config();

        let name = Self::required(self.name, "name")?;
        let age = Self::required(self.age, "age")?;
        let hometown = Self::required(self.hometown, "hometown")?;
        let hometown_skill = Self::required(self.hometown_skill, "hometown")?;
        let parent_trade = Self::required(self.parent_trade, "parent_trade")?;
        let mentor_skill = Self::required(self.mentor_skill, "mentor_skill")?;
        let friend_skill = Self::required(self.friend_skill, "friend_skill")?;
        let fur_color = Self::required(self.fur_color, "fur_color")?;

        // Hometown and mentor teach in earnest; family trades rub off,
        // and a friend's knack rubs off less.
        let bonuses = vec![
            SkillBonus::new(hometown_skill, cfg.recruitment_base_grant),
            SkillBonus::new(mentor_skill, cfg.recruitment_base_grant),
            SkillBonus::new(parent_trade, 1),
            SkillBonus::new(friend_skill, 1),
        ];

        let ratings = stack_bonuses(Vec::new(), bonuses, cfg.recruitment_rating_cap);

        let mut sheet = CharacterSheet::new(name);
        sheet.fur_color = Some(fur_color);
        sheet.set_ability(Ability::Will, age.base_will())?;
        sheet.set_ability(Ability::Health, age.base_health())?;

        let settlement = self
            .rulebook
            .settlement(&hometown)
            .ok_or_else(|| RulesError::InvalidInput(format!("unknown settlement '{}'", hometown)))?;
        sheet.add_trait(settlement.native_trait.clone());

        for (skill, level) in ratings {
            let governs = self
                .rulebook
                .skill_governs(&skill)
                .ok_or_else(|| RulesError::SkillNotFound(skill.clone()))?;
            sheet.add_skill(skill, level, governs);
        }

        tracing::debug!(character = %sheet.id, name = %sheet.name, "recruit created");
        Ok(sheet)
    }
}
