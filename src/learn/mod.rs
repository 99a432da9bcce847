//! Learning mode: flashcard and quiz sessions
//!
//! Sessions are pure state machines over a loaded capsule; persistence of
//! the outcome (known cards, best score) goes through `ProgressStorage` in
//! the caller.

pub mod session;

pub use session::{AnswerOutcome, FlashcardSession, QuizSession};
