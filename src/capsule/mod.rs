//! Capsules: the study units of Pocket Classroom
//!
//! This module provides:
//! - The capsule data model (meta, notes, flashcards, quiz)
//! - Authoring validation
//! - `CapsuleStorage`, the repository owning capsule records and the
//!   synchronization routine that keeps the library index in step

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::CapsuleStorage;
