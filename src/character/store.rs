//! In-memory character store with per-record write serialization
//!
//! Recording a test is a read-decide-write sequence; two concurrent
//! recordings for the same character must not race each other's tally
//! increments. Each record carries its own lock, so writers to the
//! same character serialize while distinct characters never contend.
//! A version counter bumps on every committed update, giving
//! snapshot-based callers an optimistic path.

use crate::character::sheet::CharacterSheet;
use crate::core::types::CharacterId;
use crate::core::{Result, RulesError};
use ahash::AHashMap;
use std::sync::{Arc, Mutex, RwLock};

struct VersionedSheet {
    version: u64,
    sheet: CharacterSheet,
}

/// Thread-safe store of character sheets
#[derive(Default)]
pub struct CharacterStore {
    records: RwLock<AHashMap<CharacterId, Arc<Mutex<VersionedSheet>>>>,
}

/// Point-in-time counts for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub characters: usize,
    pub total_versions: u64,
}

impl CharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet; returns its id
    pub fn insert(&self, sheet: CharacterSheet) -> CharacterId {
        let id = sheet.id;
        let record = Arc::new(Mutex::new(VersionedSheet { version: 0, sheet }));
        self.records
            .write()
            .expect("store lock poisoned")
            .insert(id, record);
        tracing::debug!(character = %id, "character inserted");
        id
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.records
            .read()
            .expect("store lock poisoned")
            .contains_key(&id)
    }

    /// Remove a character, returning its final sheet
    ///
    /// The returned sheet includes every committed update: writers
    /// that locked the record before the removal finish first, and
    /// writers arriving afterward get `CharacterNotFound`.
    pub fn remove(&self, id: CharacterId) -> Result<CharacterSheet> {
        let record = self
            .records
            .write()
            .expect("store lock poisoned")
            .remove(&id)
            .ok_or(RulesError::CharacterNotFound(id))?;
        let guard = record.lock().expect("record lock poisoned");
        Ok(guard.sheet.clone())
    }

    fn record(&self, id: CharacterId) -> Result<Arc<Mutex<VersionedSheet>>> {
        self.records
            .read()
            .expect("store lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(RulesError::CharacterNotFound(id))
    }

    /// Clone a snapshot of the sheet and its version
    pub fn snapshot(&self, id: CharacterId) -> Result<(u64, CharacterSheet)> {
        let record = self.record(id)?;
        let guard = record.lock().expect("record lock poisoned");
        Ok((guard.version, guard.sheet.clone()))
    }

    /// Run a mutation under the record's lock
    ///
    /// The whole read-decide-write sequence executes inside the lock
    /// and the version bumps once on success. A mutation that returns
    /// Err leaves the sheet untouched only if the closure itself did
    /// not modify it; engine-level operations are written to fail
    /// before mutating.
    pub fn update<T>(
        &self,
        id: CharacterId,
        f: impl FnOnce(&mut CharacterSheet) -> Result<T>,
    ) -> Result<T> {
        let record = self.record(id)?;
        let mut guard = record.lock().expect("record lock poisoned");
        // A concurrent remove() may have pulled this record between
        // the map lookup and the lock; committing into the orphan
        // would lose the update silently. remove() only clones the
        // sheet while holding this lock, so membership here decides:
        // still present means remove() has not run and will observe
        // this commit.
        if !self.contains(id) {
            return Err(RulesError::CharacterNotFound(id));
        }
        let out = f(&mut guard.sheet)?;
        guard.version += 1;
        tracing::debug!(character = %id, version = guard.version, "character updated");
        Ok(out)
    }

    /// Replace a snapshot-derived sheet iff no writer committed since
    /// the snapshot was taken
    pub fn compare_and_swap(
        &self,
        id: CharacterId,
        expected_version: u64,
        sheet: CharacterSheet,
    ) -> Result<u64> {
        let record = self.record(id)?;
        let mut guard = record.lock().expect("record lock poisoned");
        // Same orphan guard as update()
        if !self.contains(id) {
            return Err(RulesError::CharacterNotFound(id));
        }
        if guard.version != expected_version {
            return Err(RulesError::VersionConflict {
                id,
                expected: expected_version,
                found: guard.version,
            });
        }
        guard.sheet = sheet;
        guard.version += 1;
        Ok(guard.version)
    }

    pub fn ids(&self) -> Vec<CharacterId> {
        self.records
            .read()
            .expect("store lock poisoned")
            .keys()
            .copied()
            .collect()
    }

    pub fn stats(&self) -> StoreStats {
        let records = self.records.read().expect("store lock poisoned");
        let total_versions = records
            .values()
            .map(|r| r.lock().expect("record lock poisoned").version)
            .sum();
        StoreStats {
            characters: records.len(),
            total_versions,
        }
    }
}
