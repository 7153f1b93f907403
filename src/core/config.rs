//! Rules configuration with documented constants
//!
//! All magic numbers from the advancement and recruitment rules are
//! collected here with explanations of their purpose.

/// Configuration for the rules engine
///
/// Defaults encode the published game rules. Campaigns that house-rule
/// the pacing of advancement can override these before first use.
#[derive(Debug, Clone)]
pub struct RulesConfig {
    // === ADVANCEMENT ===
    /// Baseline for the untrained-skill learning formula
    ///
    /// An untrained (level 0) skill is learned after
    /// `learning_baseline - governing_ability_level` recorded tests of
    /// any outcome. At the default of 6, a mouse with Will 4 learns a
    /// Will-governed skill after 2 tests.
    pub learning_baseline: u32,

    /// Floor on the number of tests needed to learn an untrained skill
    ///
    /// Without a floor, a governing ability at or above the baseline
    /// would make learning free (zero tests). The default of 1 means
    /// even a prodigy must log one test before the skill opens at
    /// level 1.
    pub min_learning_tests: u32,

    // === RECRUITMENT ===
    /// Cap applied when stacking skill bonuses during recruitment
    ///
    /// Bonus sources (hometown, parents, mentor, friend) layer
    /// additively, but no starting skill may exceed this rating.
    /// Advancement after recruitment is not capped by this value.
    pub recruitment_rating_cap: u8,

    /// Starting rating a single recruitment bonus source grants an
    /// untrained skill before further stacking.
    pub recruitment_base_grant: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            learning_baseline: 6,
            min_learning_tests: 1,
            recruitment_rating_cap: 6,
            recruitment_base_grant: 2,
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.min_learning_tests == 0 {
            return Err("min_learning_tests must be at least 1".into());
        }

        if self.recruitment_rating_cap == 0 {
            return Err("recruitment_rating_cap must be positive".into());
        }

        if self.recruitment_base_grant > self.recruitment_rating_cap {
            return Err(format!(
                "recruitment_base_grant ({}) exceeds recruitment_rating_cap ({})",
                self.recruitment_base_grant, self.recruitment_rating_cap
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<RulesConfig> = OnceLock::new();

/// Get the global rules config (initializes with defaults if not set)
pub fn config() -> &'static RulesConfig {
    CONFIG.get_or_init(RulesConfig::default)
}

/// Set the global rules config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: RulesConfig) -> Result<(), RulesConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_learning_floor_rejected() {
        let cfg = RulesConfig {
            min_learning_tests: 0,
            ..RulesConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_base_grant_above_cap_rejected() {
        let cfg = RulesConfig {
            recruitment_base_grant: 7,
            recruitment_rating_cap: 6,
            ..RulesConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
