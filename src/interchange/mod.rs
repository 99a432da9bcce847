//! Capsule interchange format
//!
//! JSON documents for sharing a single capsule or backing up the whole
//! library. Import is all-or-nothing: a document that fails validation leaves
//! the store untouched.

pub mod export;
pub mod import;

use serde::{Deserialize, Serialize};

use crate::capsule::Capsule;

/// Schema tag every single-capsule document must carry
pub const SCHEMA: &str = "pocket-classroom/v1";

/// A single capsule as shared between users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapsuleDocument {
    pub schema: String,
    #[serde(flatten)]
    pub capsule: Capsule,
}

/// One element of a full-library backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupEntry {
    pub id: String,
    pub title: String,
    pub capsule: Capsule,
}

pub use export::{export_capsule, export_library, ExportError};
pub use import::{import_capsule, import_library, ImportError};
