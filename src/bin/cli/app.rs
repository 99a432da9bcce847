use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use pocket_classroom::capsule::{Capsule, CapsuleStorage};
use pocket_classroom::events::EventBus;
use pocket_classroom::index::IndexEntry;
use pocket_classroom::progress::ProgressStorage;
use pocket_classroom::store::{FileStore, SystemClock};

/// Shared application state for CLI commands
pub struct App {
    pub capsules: CapsuleStorage,
    pub progress: ProgressStorage,
}

impl App {
    /// Wire the repositories from a data directory (default: platform data dir)
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => FileStore::default_data_dir().context("Failed to get data directory")?,
        };

        let store = Arc::new(FileStore::new(data_dir).context("Failed to open data directory")?);
        let events = EventBus::new();
        events.subscribe(|event| log::debug!("event: {:?}", event));

        let capsules = CapsuleStorage::new(store.clone(), Arc::new(SystemClock), events.clone());
        let progress = ProgressStorage::new(store, capsules.clone());

        Ok(Self { capsules, progress })
    }

    /// Resolve a capsule id, accepting a unique prefix.
    pub fn find_capsule(&self, id: &str) -> Result<Capsule> {
        if let Some(capsule) = self.capsules.load(id) {
            return Ok(capsule);
        }

        let matches: Vec<IndexEntry> = self
            .capsules
            .index()
            .load()
            .into_iter()
            .filter(|e| e.id.starts_with(id))
            .collect();

        match matches.len() {
            0 => bail!("No capsule matching '{}'", id),
            1 => self
                .capsules
                .load(&matches[0].id)
                .with_context(|| format!("Capsule record for {} is missing", matches[0].id)),
            _ => bail!(
                "Ambiguous capsule id '{}'. Matches:\n{}",
                id,
                matches
                    .iter()
                    .map(|e| format!("  {} ({})", e.id, e.title))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }
}
