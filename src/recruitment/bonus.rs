//! Skill-bonus stacking
//!
//! Every recruitment choice (hometown, parental trade, mentor, friend)
//! boils down to skill bonuses. They layer additively over the base
//! ratings, and no final rating may exceed the cap.

use std::collections::BTreeMap;

/// One bonus from one recruitment source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBonus {
    pub skill: String,
    pub amount: u8,
}

impl SkillBonus {
    pub fn new(skill: impl Into<String>, amount: u8) -> Self {
        Self {
            skill: skill.into(),
            amount,
        }
    }
}

/// Stack bonus sources over base ratings, capping each final rating
///
/// Base entries above the cap are themselves capped. The same skill
/// appearing in several sources accumulates before the cap applies.
pub fn stack_bonuses(
    base: impl IntoIterator<Item = (String, u8)>,
    bonuses: impl IntoIterator<Item = SkillBonus>,
    cap: u8,
) -> BTreeMap<String, u8> {
    let mut ratings: BTreeMap<String, u8> = base
        .into_iter()
        .map(|(skill, level)| (skill, level.min(cap)))
        .collect();

    for bonus in bonuses {
        let entry = ratings.entry(bonus.skill).or_insert(0);
        *entry = entry.saturating_add(bonus.amount).min(cap);
    }

    ratings
}
