//! Tally-driven skill and ability advancement
//!
//! Every contested test a character logs is a Success or a Failure.
//! Both accumulate in a per-skill tally, and once the tally crosses the
//! rule thresholds the skill levels up and the tally starts over.
//!
//! A green recruit fails their way into competence: failures count
//! toward advancement just as the rules intend.

pub mod engine;

pub use engine::{record_test, required_tests, TestOutcome, TestRecord, TestTally};
