//! Persistent key-value storage layer
//!
//! Everything the app persists goes through the [`KeyValueStore`] trait:
//! a flat string-keyed store with no knowledge of what the values mean.
//! Serialization happens in the repositories above it.

pub mod clock;
pub mod keys;
pub mod kv;

pub use clock::{Clock, FixedClock, SystemClock};
pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
