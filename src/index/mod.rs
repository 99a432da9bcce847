//! Library index: ordered capsule summaries for the listing view

pub mod models;
pub mod storage;

pub use models::IndexEntry;
pub use storage::IndexStorage;
