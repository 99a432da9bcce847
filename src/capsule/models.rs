//! Capsule data model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

use crate::index::IndexEntry;

/// Difficulty level of a capsule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for Level {
    fn default() -> Self {
        Self::Beginner
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("Unknown level: {}", other)),
        }
    }
}

/// Capsule metadata shown in the library listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapsuleMeta {
    pub title: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub level: Level,
    /// Free-text description ("desc" on the wire, a legacy name)
    #[serde(default, rename = "desc")]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ordered note lines, serialized as an object with synthetic keys
/// (`{"n0": "...", "n1": "..."}`). The keys carry no meaning beyond
/// uniqueness; numeric suffix order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notes(Vec<String>);

impl Notes {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    /// Parse notes from newline-separated text: trimmed, blanks dropped.
    pub fn from_text(text: &str) -> Self {
        Self(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring filter, as used by the notes search box.
    pub fn matching(&self, query: &str) -> Vec<&str> {
        let q = query.to_lowercase();
        self.0
            .iter()
            .filter(|l| l.to_lowercase().contains(&q))
            .map(String::as_str)
            .collect()
    }
}

impl Serialize for Notes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, line) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("n{}", i), line)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Notes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NotesVisitor;

        impl<'de> Visitor<'de> for NotesVisitor {
            type Value = Notes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of note keys to note text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Notes, A::Error> {
                let mut entries: Vec<(String, String)> = Vec::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    entries.push((key, value));
                }
                // Stored keys are n0, n1, ... — sort by the numeric suffix so
                // note order survives stores that reorder object keys.
                let numeric = |k: &str| k.strip_prefix('n').and_then(|s| s.parse::<usize>().ok());
                if entries.iter().all(|(k, _)| numeric(k).is_some()) {
                    entries.sort_by_key(|(k, _)| numeric(k).unwrap());
                }
                Ok(Notes(entries.into_iter().map(|(_, v)| v).collect()))
            }
        }

        deserializer.deserialize_map(NotesVisitor)
    }
}

/// A flashcard with question (front) and answer (back)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
}

/// Number of choices every quiz question carries
pub const QUIZ_CHOICES: usize = 4;

/// A multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    /// Exactly [`QUIZ_CHOICES`] entries
    pub choices: Vec<String>,
    /// Index of the correct choice, in `0..QUIZ_CHOICES`
    pub answer_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A self-contained study unit: notes, flashcards and a quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capsule {
    pub id: String,
    pub meta: CapsuleMeta,
    #[serde(default)]
    pub notes: Notes,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Capsule needs at least one note, flashcard or quiz question")]
    Empty,

    #[error("Quiz question {0} must have exactly {QUIZ_CHOICES} choices")]
    WrongChoiceCount(usize),

    #[error("Quiz question {0} has answer index out of range")]
    AnswerIndexOutOfRange(usize),
}

impl Capsule {
    /// Create a capsule with a fresh id, stamped from `now`.
    pub fn new(title: String, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("cap-{}", Uuid::new_v4()),
            meta: CapsuleMeta {
                title,
                subject: String::new(),
                level: Level::default(),
                description: String::new(),
                created_at: now,
                updated_at: now,
            },
            notes: Notes::default(),
            flashcards: Vec::new(),
            quiz: Vec::new(),
            updated_at: now,
        }
    }

    /// Authoring validation: non-empty title, some content, well-formed quiz.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.meta.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.notes.is_empty() && self.flashcards.is_empty() && self.quiz.is_empty() {
            return Err(ValidationError::Empty);
        }
        for (i, q) in self.quiz.iter().enumerate() {
            if q.choices.len() != QUIZ_CHOICES {
                return Err(ValidationError::WrongChoiceCount(i));
            }
            if q.answer_index >= QUIZ_CHOICES {
                return Err(ValidationError::AnswerIndexOutOfRange(i));
            }
        }
        Ok(())
    }

    /// Drop authoring leftovers: blank flashcards and unusable quiz questions.
    pub fn prune(&mut self) {
        self.flashcards
            .retain(|f| !f.front.trim().is_empty() || !f.back.trim().is_empty());
        self.quiz.retain(|q| {
            !q.question.trim().is_empty() && q.choices.iter().any(|c| !c.trim().is_empty())
        });
    }

    /// Derive the library index entry for this capsule.
    pub fn summary(&self) -> IndexEntry {
        IndexEntry {
            id: self.id.clone(),
            title: self.meta.title.clone(),
            subject: self.meta.subject.clone(),
            level: self.meta.level,
            updated_at: self.meta.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    fn sample_question() -> QuizQuestion {
        QuizQuestion {
            question: "2 + 2?".to_string(),
            choices: vec!["3".into(), "4".into(), "5".into(), "22".into()],
            answer_index: 1,
            explanation: Some("Basic arithmetic".to_string()),
        }
    }

    #[test]
    fn notes_round_trip_preserves_order() {
        let notes = Notes::from_text("alpha\n  beta  \n\ngamma\n");
        assert_eq!(notes.lines(), ["alpha", "beta", "gamma"]);

        let json = serde_json::to_string(&notes).unwrap();
        assert_eq!(json, r#"{"n0":"alpha","n1":"beta","n2":"gamma"}"#);

        let back: Notes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, notes);
    }

    #[test]
    fn notes_deserialize_sorts_numeric_keys() {
        // Eleven entries would order n10 before n2 lexically
        let mut obj = String::from("{");
        for i in (0..11).rev() {
            obj.push_str(&format!("\"n{}\":\"line {}\",", i, i));
        }
        obj.pop();
        obj.push('}');

        let notes: Notes = serde_json::from_str(&obj).unwrap();
        assert_eq!(notes.lines()[0], "line 0");
        assert_eq!(notes.lines()[10], "line 10");
    }

    #[test]
    fn notes_search_is_case_insensitive() {
        let notes = Notes::from_text("Rust ownership\nBorrow checker\nLifetimes");
        assert_eq!(notes.matching("OWNER"), ["Rust ownership"]);
        assert!(notes.matching("python").is_empty());
    }

    #[test]
    fn validate_requires_title_and_content() {
        let mut cap = Capsule::new("  ".to_string(), now());
        assert_eq!(cap.validate(), Err(ValidationError::MissingTitle));

        cap.meta.title = "Algebra".to_string();
        assert_eq!(cap.validate(), Err(ValidationError::Empty));

        cap.quiz.push(sample_question());
        assert!(cap.validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_quiz() {
        let mut cap = Capsule::new("Algebra".to_string(), now());
        let mut q = sample_question();
        q.choices.pop();
        cap.quiz.push(q);
        assert_eq!(cap.validate(), Err(ValidationError::WrongChoiceCount(0)));

        cap.quiz[0].choices.push("extra".to_string());
        cap.quiz[0].answer_index = 4;
        assert_eq!(
            cap.validate(),
            Err(ValidationError::AnswerIndexOutOfRange(0))
        );
    }

    #[test]
    fn prune_drops_blank_entries() {
        let mut cap = Capsule::new("Algebra".to_string(), now());
        cap.flashcards = vec![
            Flashcard { front: "front".into(), back: String::new() },
            Flashcard::default(),
        ];
        cap.quiz = vec![
            sample_question(),
            QuizQuestion {
                question: String::new(),
                choices: vec!["".into(), "".into(), "".into(), "".into()],
                answer_index: 0,
                explanation: None,
            },
        ];

        cap.prune();
        assert_eq!(cap.flashcards.len(), 1);
        assert_eq!(cap.quiz.len(), 1);
    }

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("advanced".parse::<Level>(), Ok(Level::Advanced));
        assert!("expert".parse::<Level>().is_err());
    }
}
