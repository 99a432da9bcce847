//! Index data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::capsule::Level;

/// Denormalized capsule summary used to render the library listing without
/// loading every full capsule. One entry per live capsule; fields mirror the
/// authoritative capsule's meta as of its last save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub level: Level,
    pub updated_at: DateTime<Utc>,
}
