//! Progress data model

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Learning state for one capsule. Created lazily: a missing record is the
/// same as this type's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Indices of flashcards the learner marked as mastered
    #[serde(default)]
    pub known_flashcards: BTreeSet<usize>,
    /// Highest quiz score ever achieved, as a percentage
    #[serde(default)]
    pub best_score: u8,
}

impl ProgressRecord {
    /// Known-card count against a deck of `total` cards, for display.
    pub fn known_of(&self, total: usize) -> (usize, usize) {
        (self.known_flashcards.iter().filter(|&&i| i < total).count(), total)
    }
}
