//! Capsule storage operations
//!
//! One record per capsule under `pc_cap_{id}`. Every write that can change a
//! capsule's title/subject/level/timestamp also upserts the matching index
//! entry and announces `LibraryChanged`, so the listing never drifts from the
//! authoritative records.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::models::Capsule;
use crate::events::{AppEvent, EventBus};
use crate::index::IndexStorage;
use crate::store::keys::{capsule_key, progress_key};
use crate::store::kv::Result;
use crate::store::{Clock, KeyValueStore};

/// Repository owning capsule records and the index synchronization routine
#[derive(Clone)]
pub struct CapsuleStorage {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    index: IndexStorage,
    events: EventBus,
}

impl CapsuleStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, events: EventBus) -> Self {
        let index = IndexStorage::new(store.clone());
        Self { store, clock, index, events }
    }

    /// The index repository sharing this capsule store.
    pub fn index(&self) -> &IndexStorage {
        &self.index
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub(crate) fn events(&self) -> &EventBus {
        &self.events
    }

    /// Load a capsule. Absent or malformed records come back as `None`.
    pub fn load(&self, id: &str) -> Option<Capsule> {
        let raw = self.store.get(&capsule_key(id))?;
        match serde_json::from_str(&raw) {
            Ok(capsule) => Some(capsule),
            Err(e) => {
                log::warn!("Malformed capsule {}: {}", id, e);
                None
            }
        }
    }

    /// Persist a capsule, stamping its timestamps from the clock.
    ///
    /// The whole serialized record is replaced in one adapter `set`, the
    /// derived index entry is upserted, and `LibraryChanged` is emitted.
    pub fn save(&self, capsule: &mut Capsule) -> Result<()> {
        let now = self.clock.now();
        capsule.updated_at = now;
        capsule.meta.updated_at = now;

        let json = serde_json::to_string(capsule)?;
        self.store.set(&capsule_key(&capsule.id), &json)?;

        self.index.upsert(capsule.summary())?;
        self.events.emit(AppEvent::LibraryChanged);
        log::info!("Saved capsule {} ('{}')", capsule.id, capsule.meta.title);
        Ok(())
    }

    /// Persist a capsule exactly as given, without stamping timestamps or
    /// syncing the index. Backup restore puts records back verbatim and
    /// rebuilds the index in one pass afterwards.
    pub(crate) fn restore(&self, capsule: &Capsule) -> Result<()> {
        let json = serde_json::to_string(capsule)?;
        self.store.set(&capsule_key(&capsule.id), &json)?;
        Ok(())
    }

    /// Delete a capsule, its index entry and its progress record.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.store.remove(&capsule_key(id))?;
        self.index.remove(id)?;
        // Progress is subordinate to the capsule's lifecycle
        self.store.remove(&progress_key(id))?;
        self.events.emit(AppEvent::LibraryChanged);
        log::info!("Deleted capsule {}", id);
        Ok(())
    }

    /// Synchronization routine: refresh a capsule's timestamps and its index
    /// entry together.
    ///
    /// The single path besides [`save`](Self::save) that mutates `updated_at`.
    /// If the capsule is gone (deleted out-of-band), this is a no-op.
    pub fn touch(&self, id: &str) -> Result<()> {
        let Some(mut capsule) = self.load(id) else {
            log::warn!("touch: capsule {} not found, skipping sync", id);
            return Ok(());
        };

        let now = self.clock.now();
        capsule.updated_at = now;
        capsule.meta.updated_at = now;

        let json = serde_json::to_string(&capsule)?;
        self.store.set(&capsule_key(id), &json)?;

        self.index.upsert(capsule.summary())?;
        self.events.emit(AppEvent::LibraryChanged);
        Ok(())
    }
}
