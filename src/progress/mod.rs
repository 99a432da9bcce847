//! Per-capsule learning progress: flashcard mastery and best quiz score

pub mod models;
pub mod storage;

pub use models::ProgressRecord;
pub use storage::ProgressStorage;
