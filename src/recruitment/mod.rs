//! Character recruitment
//!
//! Recruitment walks a set of choices (age, hometown, family, mentor,
//! friend) and derives a starting sheet. Every choice contributes skill
//! bonuses; one pure function stacks them all against the rating cap.

pub mod bonus;
pub mod generator;
pub mod wizard;

pub use bonus::{stack_bonuses, SkillBonus};
pub use generator::RecruitGenerator;
pub use wizard::{AgeBand, RecruitmentWizard};
