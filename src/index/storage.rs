//! Index storage operations
//!
//! The whole index lives under one key as an ordered JSON array. New entries
//! are inserted at the front; upserts overwrite in place so an existing
//! capsule keeps its position in the listing.

use std::sync::Arc;

use super::models::IndexEntry;
use crate::store::keys::INDEX_KEY;
use crate::store::kv::Result;
use crate::store::KeyValueStore;

/// Storage for the library index
#[derive(Clone)]
pub struct IndexStorage {
    store: Arc<dyn KeyValueStore>,
}

impl IndexStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the ordered index. Absent or malformed data degrades to empty.
    pub fn load(&self) -> Vec<IndexEntry> {
        let Some(raw) = self.store.get(INDEX_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Malformed index, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the whole stored sequence.
    pub fn save(&self, entries: &[IndexEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.store.set(INDEX_KEY, &json)?;
        Ok(())
    }

    /// Overwrite the entry with the same id in place, or insert at the front.
    ///
    /// Every code path that changes a capsule's title/subject/level/timestamp
    /// goes through here, so the listing cannot drift from the capsule.
    pub fn upsert(&self, entry: IndexEntry) -> Result<()> {
        let mut entries = self.load();
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => entries.insert(0, entry),
        }
        self.save(&entries)
    }

    /// Remove the entry for `id`, if present.
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut entries = self.load();
        let len_before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() != len_before {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capsule::Level;
    use crate::store::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, title: &str) -> IndexEntry {
        IndexEntry {
            id: id.to_string(),
            title: title.to_string(),
            subject: String::new(),
            level: Level::Beginner,
            updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    fn storage() -> (Arc<MemoryStore>, IndexStorage) {
        let store = Arc::new(MemoryStore::new());
        let index = IndexStorage::new(store.clone());
        (store, index)
    }

    #[test]
    fn load_defaults_to_empty() {
        let (_, index) = storage();
        assert!(index.load().is_empty());
    }

    #[test]
    fn malformed_index_degrades_to_empty() {
        let (store, index) = storage();
        store.set(INDEX_KEY, "not json at all").unwrap();
        assert!(index.load().is_empty());
    }

    #[test]
    fn upsert_prepends_new_and_replaces_in_place() {
        let (_, index) = storage();
        index.upsert(entry("a", "First")).unwrap();
        index.upsert(entry("b", "Second")).unwrap();

        let entries = index.load();
        assert_eq!(entries[0].id, "b");
        assert_eq!(entries[1].id, "a");

        // Updating "a" keeps its position at the back
        index.upsert(entry("a", "First, renamed")).unwrap();
        let entries = index.load();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].id, "a");
        assert_eq!(entries[1].title, "First, renamed");
    }

    #[test]
    fn remove_deletes_only_the_target() {
        let (_, index) = storage();
        index.upsert(entry("a", "First")).unwrap();
        index.upsert(entry("b", "Second")).unwrap();

        index.remove("a").unwrap();
        let entries = index.load();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "b");

        // Removing an absent id is a no-op
        index.remove("zzz").unwrap();
        assert_eq!(index.load().len(), 1);
    }
}
