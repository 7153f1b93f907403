//! Seeded random recruit generation
//!
//! Samples every wizard step from the rulebook tables. Deterministic
//! per seed, so a campaign roster can be regenerated exactly.

use crate::character::CharacterSheet;
use crate::core::{Result, RulesError};
use crate::recruitment::wizard::{AgeBand, RecruitmentWizard};
use crate::tables::Rulebook;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Given names for generated recruits
static RECRUIT_NAMES: &[&str] = &[
    "Saxon", "Kenzie", "Lieam", "Sadie", "Rand", "Gwendolyn", "Thane", "Bryony",
    "Alder", "Fern", "Hazel", "Rowan", "Bramble", "Ivy", "Piper", "Quill",
];

/// Deterministic recruit generator
pub struct RecruitGenerator {
    rng: ChaCha8Rng,
    generated: u64,
}

impl RecruitGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            generated: 0,
        }
    }

    /// Generate one recruit from the rulebook's tables
    pub fn generate(&mut self, rulebook: &Rulebook) -> Result<CharacterSheet> {
        // Map iteration order is unstable; sort before sampling so the
        // same seed always produces the same roster.
        let mut settlements: Vec<&str> = rulebook.settlement_names().collect();
        settlements.sort_unstable();
        let mut skills: Vec<&str> = rulebook.skill_names().collect();
        skills.sort_unstable();

        if settlements.is_empty() || skills.is_empty() {
            return Err(RulesError::InvalidInput(
                "rulebook has no settlements or skills to sample".into(),
            ));
        }

        let base_name = RECRUIT_NAMES
            .choose(&mut self.rng)
            .ok_or_else(|| RulesError::InvalidInput("empty name table".into()))?;
        self.generated += 1;
        let name = format!("{} {}", base_name, self.generated);

        let age = match self.rng.gen_range(0..4) {
            0 => AgeBand::Tenderpaw,
            1 => AgeBand::Guardmouse,
            2 => AgeBand::Patrolguard,
            _ => AgeBand::PatrolLeader,
        };

        let hometown = settlements[self.rng.gen_range(0..settlements.len())];
        let hometown_entry = rulebook
            .settlement(hometown)
            .ok_or_else(|| RulesError::InvalidInput(format!("unknown settlement '{}'", hometown)))?;

        // Overlay settlements may name skills the rulebook never
        // defines; only teachable skills are eligible.
        let teachable: Vec<&String> = hometown_entry
            .skills
            .iter()
            .filter(|s| rulebook.skill_governs(s).is_some())
            .collect();
        if teachable.is_empty() {
            return Err(RulesError::InvalidInput(format!(
                "settlement '{}' teaches no known skills",
                hometown
            )));
        }
        let hometown_skill = teachable[self.rng.gen_range(0..teachable.len())].clone();

        let parent_trade = skills[self.rng.gen_range(0..skills.len())];
        let mentor_skill = skills[self.rng.gen_range(0..skills.len())];
        let friend_skill = skills[self.rng.gen_range(0..skills.len())];

        let fur_colors = rulebook.fur_colors();
        let fur_color = &fur_colors[self.rng.gen_range(0..fur_colors.len())];

        RecruitmentWizard::new(rulebook)
            .name(name)?
            .age(age)
            .hometown(hometown, &hometown_skill)?
            .parent_trade(parent_trade)?
            .mentor_skill(mentor_skill)?
            .friend_skill(friend_skill)?
            .fur_color(fur_color)?
            .finish()
    }
}
