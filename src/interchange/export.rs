//! Export capsules to the interchange format

use thiserror::Error;

use super::{BackupEntry, CapsuleDocument, SCHEMA};
use crate::capsule::CapsuleStorage;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Capsule not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Export one capsule as a pretty-printed interchange document.
pub fn export_capsule(capsules: &CapsuleStorage, id: &str) -> Result<String, ExportError> {
    let capsule = capsules
        .load(id)
        .ok_or_else(|| ExportError::NotFound(id.to_string()))?;
    let doc = CapsuleDocument {
        schema: SCHEMA.to_string(),
        capsule,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Export the whole library as a backup array of `{id, title, capsule}`.
///
/// Index entries whose capsule record has gone missing are skipped rather
/// than failing the backup.
pub fn export_library(capsules: &CapsuleStorage) -> Result<String, ExportError> {
    let mut entries = Vec::new();
    for summary in capsules.index().load() {
        match capsules.load(&summary.id) {
            Some(capsule) => entries.push(BackupEntry {
                id: summary.id,
                title: summary.title,
                capsule,
            }),
            None => log::warn!("Skipping {} in backup: capsule record missing", summary.id),
        }
    }
    Ok(serde_json::to_string_pretty(&entries)?)
}
