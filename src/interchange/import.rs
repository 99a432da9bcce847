//! Import capsules from the interchange format
//!
//! Validation happens before any write: a rejected document leaves the index
//! and every stored capsule exactly as they were.

use thiserror::Error;
use uuid::Uuid;

use super::{BackupEntry, CapsuleDocument, SCHEMA};
use crate::capsule::{Capsule, CapsuleStorage};
use crate::events::AppEvent;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Schema mismatch: expected \"{SCHEMA}\", found \"{0}\"")]
    SchemaMismatch(String),

    #[error("Missing title")]
    MissingTitle,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Import a single-capsule document under a fresh id.
///
/// Requires the exact schema tag and a non-empty `meta.title`. The imported
/// capsule gets fresh `created_at`/`updated_at` stamps and goes through the
/// normal save path, so the index and listeners stay in sync.
pub fn import_capsule(capsules: &CapsuleStorage, json: &str) -> Result<Capsule, ImportError> {
    let doc: CapsuleDocument = serde_json::from_str(json)?;
    if doc.schema != SCHEMA {
        return Err(ImportError::SchemaMismatch(doc.schema));
    }
    if doc.capsule.meta.title.trim().is_empty() {
        return Err(ImportError::MissingTitle);
    }

    let mut capsule = doc.capsule;
    capsule.id = format!("cap-{}", Uuid::new_v4());
    capsule.meta.created_at = capsules.now();

    capsules.save(&mut capsule)?;
    log::info!("Imported capsule '{}' as {}", capsule.meta.title, capsule.id);
    Ok(capsule)
}

/// Restore a full-library backup, replacing the entire index.
///
/// The whole document is parsed first; only then is each embedded capsule
/// persisted verbatim under its backup id and the index rebuilt with one
/// entry per element. Returns the number of capsules restored.
pub fn import_library(capsules: &CapsuleStorage, json: &str) -> Result<usize, ImportError> {
    let entries: Vec<BackupEntry> = serde_json::from_str(json)?;

    let mut index = Vec::with_capacity(entries.len());
    for entry in &entries {
        let mut capsule = entry.capsule.clone();
        capsule.id = entry.id.clone();
        capsules.restore(&capsule)?;
        index.push(capsule.summary());
    }
    capsules.index().save(&index)?;
    capsules.events().emit(AppEvent::LibraryChanged);

    log::info!("Restored {} capsules from backup", index.len());
    Ok(index.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capsule::{Flashcard, Notes, QuizQuestion};
    use crate::events::EventBus;
    use crate::interchange::export::{export_capsule, export_library};
    use crate::store::{FixedClock, MemoryStore};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn storage() -> (Arc<FixedClock>, CapsuleStorage) {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
        ));
        (clock.clone(), CapsuleStorage::new(store, clock, EventBus::new()))
    }

    fn full_capsule(capsules: &CapsuleStorage) -> Capsule {
        let mut cap = Capsule::new("Physics".to_string(), capsules.now());
        cap.notes = Notes::from_text("force\nmass\nacceleration");
        cap.flashcards.push(Flashcard {
            front: "F = ?".to_string(),
            back: "m * a".to_string(),
        });
        cap.quiz.push(QuizQuestion {
            question: "Unit of force?".to_string(),
            choices: vec!["Joule".into(), "Newton".into(), "Watt".into(), "Pascal".into()],
            answer_index: 1,
            explanation: None,
        });
        capsules.save(&mut cap).unwrap();
        cap
    }

    #[test]
    fn export_then_import_reproduces_content_under_fresh_id() {
        let (_, capsules) = storage();
        let original = full_capsule(&capsules);

        let json = export_capsule(&capsules, &original.id).unwrap();
        let imported = import_capsule(&capsules, &json).unwrap();

        assert_ne!(imported.id, original.id);
        assert_eq!(imported.notes, original.notes);
        assert_eq!(imported.flashcards, original.flashcards);
        assert_eq!(imported.quiz, original.quiz);
        assert_eq!(capsules.index().load().len(), 2);
    }

    #[test]
    fn schema_mismatch_mutates_nothing() {
        let (_, capsules) = storage();
        let existing = full_capsule(&capsules);
        let index_before = capsules.index().load();

        let json = export_capsule(&capsules, &existing.id)
            .unwrap()
            .replace("pocket-classroom/v1", "someone-else/v9");
        let err = import_capsule(&capsules, &json).unwrap_err();
        assert!(matches!(err, ImportError::SchemaMismatch(_)));

        assert_eq!(capsules.index().load(), index_before);
    }

    #[test]
    fn missing_title_is_rejected() {
        let (_, capsules) = storage();
        let existing = full_capsule(&capsules);
        let json = export_capsule(&capsules, &existing.id)
            .unwrap()
            .replace("\"Physics\"", "\"  \"");

        let err = import_capsule(&capsules, &json).unwrap_err();
        assert!(matches!(err, ImportError::MissingTitle));
        assert_eq!(capsules.index().load().len(), 1);
    }

    #[test]
    fn backup_round_trip_replaces_the_index() {
        let (_, capsules) = storage();
        let a = full_capsule(&capsules);
        let b = full_capsule(&capsules);
        let backup = export_library(&capsules).unwrap();

        // Restore into a fresh store that has unrelated state
        let (_, fresh) = storage();
        let mut stale = Capsule::new("Stale".to_string(), fresh.now());
        stale.notes = Notes::from_text("old");
        fresh.save(&mut stale).unwrap();

        let restored = import_library(&fresh, &backup).unwrap();
        assert_eq!(restored, 2);

        let index = fresh.index().load();
        assert_eq!(index.len(), 2);
        assert!(index.iter().any(|e| e.id == a.id));
        assert!(index.iter().any(|e| e.id == b.id));

        // Capsules restored verbatim, timestamps included
        let loaded = fresh.load(&a.id).unwrap();
        assert_eq!(loaded.meta.updated_at, a.meta.updated_at);
        assert_eq!(loaded.notes, a.notes);
    }

    #[test]
    fn invalid_backup_json_restores_nothing() {
        let (_, capsules) = storage();
        let err = import_library(&capsules, "[{\"id\": \"x\"}]").unwrap_err();
        assert!(matches!(err, ImportError::InvalidJson(_)));
        assert!(capsules.index().load().is_empty());
    }
}
