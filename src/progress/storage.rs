//! Progress storage operations
//!
//! One record per capsule under `pc_progress_{id}`. Saving progress touches
//! the owning capsule so the library's `updatedAt` reflects learning activity
//! too, not just authoring.

use std::sync::Arc;

use super::models::ProgressRecord;
use crate::capsule::CapsuleStorage;
use crate::store::keys::progress_key;
use crate::store::kv::Result;
use crate::store::KeyValueStore;

/// Storage for per-capsule learning progress
#[derive(Clone)]
pub struct ProgressStorage {
    store: Arc<dyn KeyValueStore>,
    capsules: CapsuleStorage,
}

impl ProgressStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, capsules: CapsuleStorage) -> Self {
        Self { store, capsules }
    }

    /// Load progress for a capsule. Absent or malformed records come back as
    /// the empty default.
    pub fn load(&self, id: &str) -> ProgressRecord {
        let Some(raw) = self.store.get(&progress_key(id)) else {
            return ProgressRecord::default();
        };
        match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Malformed progress for {}: {}", id, e);
                ProgressRecord::default()
            }
        }
    }

    /// Persist a progress record, then touch the capsule.
    ///
    /// `best_score` is monotonically non-decreasing: a lower incoming score
    /// never overwrites the stored maximum.
    pub fn save(&self, id: &str, mut record: ProgressRecord) -> Result<ProgressRecord> {
        let existing = self.load(id);
        record.best_score = record.best_score.max(existing.best_score).min(100);

        let json = serde_json::to_string(&record)?;
        self.store.set(&progress_key(id), &json)?;

        self.capsules.touch(id)?;
        Ok(record)
    }

    /// Mark one flashcard as mastered.
    pub fn mark_known(&self, id: &str, card: usize) -> Result<ProgressRecord> {
        let mut record = self.load(id);
        record.known_flashcards.insert(card);
        self.save(id, record)
    }

    /// Unmark a flashcard.
    pub fn mark_unknown(&self, id: &str, card: usize) -> Result<ProgressRecord> {
        let mut record = self.load(id);
        record.known_flashcards.remove(&card);
        self.save(id, record)
    }

    /// Record a quiz attempt's score percentage.
    pub fn record_score(&self, id: &str, score: u8) -> Result<ProgressRecord> {
        let mut record = self.load(id);
        record.best_score = score;
        self.save(id, record)
    }
}
