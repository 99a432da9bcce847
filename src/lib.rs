//! Pocket Classroom: an offline study tool
//!
//! A learner authors capsules (notes, flashcards, quiz questions), browses
//! them through a library index, and works through them in learning mode.
//! Everything persists in a local string-keyed store behind the
//! [`store::KeyValueStore`] adapter; repositories keep the index in sync with
//! the authoritative capsule records and announce changes over
//! [`events::EventBus`].

pub mod capsule;
pub mod events;
pub mod index;
pub mod interchange;
pub mod learn;
pub mod progress;
pub mod store;
pub mod timefmt;
