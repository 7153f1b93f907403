//! The advancement decision procedure
//!
//! Pure and synchronous: callers own persistence and locking. The
//! engine reads a level and a tally, applies one outcome, and reports
//! whether the skill advanced.

use crate::core::config::config;
use serde::{Deserialize, Serialize};

/// Outcome of a single contested test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestOutcome {
    Success,
    Failure,
}

/// Accumulated test outcomes since the last level change
///
/// Created lazily on the first recorded test and reset to zero the
/// moment the owning skill's level changes, by any path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestTally {
    pub successes: u32,
    pub failures: u32,
}

impl TestTally {
    pub fn new(successes: u32, failures: u32) -> Self {
        Self { successes, failures }
    }

    /// Total tests logged since the last level change
    pub fn total(&self) -> u32 {
        self.successes + self.failures
    }

    fn bump(&mut self, outcome: TestOutcome) {
        match outcome {
            TestOutcome::Success => self.successes += 1,
            TestOutcome::Failure => self.failures += 1,
        }
    }
}

/// Result of recording one test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestRecord {
    /// The tally after the increment (zeroed if the skill advanced)
    pub tally: TestTally,
    pub leveled_up: bool,
    /// Equal to the input level unless `leveled_up`
    pub new_level: u8,
}

/// Tests required to learn an untrained (level 0) skill
///
/// `learning_baseline - governing_ability_level`, floored at
/// `min_learning_tests`. The floor keeps learning from becoming free
/// for characters whose governing ability meets or exceeds the
/// baseline.
pub fn required_tests(governing_ability_level: u8) -> u32 {
    let cfg = config();
    cfg.learning_baseline
        .saturating_sub(governing_ability_level as u32)
        .max(cfg.min_learning_tests)
}

/// Record one test outcome against a skill or ability
///
/// Trained (`level > 0`): advances when the tally holds at least
/// `level` successes and `level / 2` failures.
///
/// Untrained (`level == 0`): the skill is being learned; it opens at
/// level 1 once the combined tally reaches [`required_tests`] for the
/// governing ability. `governing_ability_level` is ignored for trained
/// skills.
///
/// Advancement zeroes the tally; a test that does not advance retains
/// the incremented tally.
///
/// Advancement is unbounded upward, except at the representable
/// ceiling (`u8::MAX`): there the level holds and the tally keeps
/// accumulating, so a level never wraps back down.
pub fn record_test(
    level: u8,
    mut tally: TestTally,
    governing_ability_level: u8,
    outcome: TestOutcome,
) -> TestRecord {
    tally.bump(outcome);

    let thresholds_met = if level > 0 {
        tally.successes >= level as u32 && tally.failures >= (level / 2) as u32
    } else {
        tally.total() >= required_tests(governing_ability_level)
    };
    let advanced = thresholds_met && level < u8::MAX;

    if advanced {
        TestRecord {
            tally: TestTally::default(),
            leveled_up: true,
            new_level: level + 1,
        }
    } else {
        TestRecord {
            tally,
            leveled_up: false,
            new_level: level,
        }
    }
}
