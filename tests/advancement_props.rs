//! Property tests for the advancement decision procedure

use guardpost::advancement::{record_test, required_tests, TestOutcome, TestTally};
use proptest::prelude::*;

fn outcome_strategy() -> impl Strategy<Value = TestOutcome> {
    prop_oneof![Just(TestOutcome::Success), Just(TestOutcome::Failure)]
}

proptest! {
    /// Trained: advancement happens exactly when the post-increment
    /// tally meets both thresholds
    #[test]
    fn trained_advance_iff_thresholds(
        level in 1u8..50,
        successes in 0u32..100,
        failures in 0u32..100,
        outcome in outcome_strategy(),
    ) {
        let rec = record_test(level, TestTally::new(successes, failures), 3, outcome);

        let (post_s, post_f) = match outcome {
            TestOutcome::Success => (successes + 1, failures),
            TestOutcome::Failure => (successes, failures + 1),
        };
        let should_advance = post_s >= level as u32 && post_f >= (level / 2) as u32;

        prop_assert_eq!(rec.leveled_up, should_advance);
        if should_advance {
            prop_assert_eq!(rec.new_level, level + 1);
            prop_assert_eq!(rec.tally, TestTally::default());
        } else {
            prop_assert_eq!(rec.new_level, level);
            prop_assert_eq!(rec.tally, TestTally::new(post_s, post_f));
        }
    }

    /// Untrained: learning completes exactly at the required count,
    /// and the skill always opens at level 1
    #[test]
    fn untrained_advance_iff_required(
        ability in 1u8..10,
        successes in 0u32..10,
        failures in 0u32..10,
        outcome in outcome_strategy(),
    ) {
        let rec = record_test(0, TestTally::new(successes, failures), ability, outcome);

        let should_advance = successes + failures + 1 >= required_tests(ability);
        prop_assert_eq!(rec.leveled_up, should_advance);
        if should_advance {
            prop_assert_eq!(rec.new_level, 1);
        } else {
            prop_assert_eq!(rec.new_level, 0);
        }
    }

    /// The learning requirement is always at least one test
    #[test]
    fn learning_never_free(ability in 0u8..=255) {
        prop_assert!(required_tests(ability) >= 1);
    }

    /// Levels never decrease, whatever the outcome stream
    #[test]
    fn level_is_monotonic(
        start_level in 0u8..20,
        outcomes in prop::collection::vec(outcome_strategy(), 1..200),
    ) {
        let mut level = start_level;
        let mut tally = TestTally::default();

        for outcome in outcomes {
            let rec = record_test(level, tally, 3, outcome);
            prop_assert!(rec.new_level >= level);
            // Advancement resets; non-advancement retains
            if rec.leveled_up {
                prop_assert_eq!(rec.tally, TestTally::default());
            } else {
                prop_assert_eq!(rec.tally.total(), tally.total() + 1);
            }
            level = rec.new_level;
            tally = rec.tally;
        }
    }
}
