//! Session state for learning mode

use std::collections::BTreeSet;

use crate::capsule::{Flashcard, QuizQuestion};
use crate::progress::ProgressRecord;

/// Wrap-around navigation over a capsule's flashcards, tracking which cards
/// the learner has marked as known.
pub struct FlashcardSession {
    cards: Vec<Flashcard>,
    position: usize,
    known: BTreeSet<usize>,
}

impl FlashcardSession {
    pub fn new(cards: Vec<Flashcard>, progress: &ProgressRecord) -> Self {
        Self {
            cards,
            position: 0,
            known: progress.known_flashcards.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Current card, or `None` for an empty deck.
    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.position)
    }

    /// One-based position for display ("3/10").
    pub fn position(&self) -> usize {
        self.position + 1
    }

    pub fn next(&mut self) {
        if !self.cards.is_empty() {
            self.position = (self.position + 1) % self.cards.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.cards.is_empty() {
            self.position = (self.position + self.cards.len() - 1) % self.cards.len();
        }
    }

    pub fn mark_known(&mut self) -> usize {
        self.known.insert(self.position);
        self.position
    }

    pub fn mark_unknown(&mut self) -> usize {
        self.known.remove(&self.position);
        self.position
    }

    pub fn is_current_known(&self) -> bool {
        self.known.contains(&self.position)
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }
}

/// Result of answering one quiz question
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: Option<String>,
}

/// Sequential run through a capsule's quiz
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    position: usize,
    correct: usize,
}

impl QuizSession {
    /// Start a quiz. An empty question list cannot start.
    pub fn new(questions: Vec<QuizQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self { questions, position: 0, correct: 0 })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// One-based number of the current question.
    pub fn position(&self) -> usize {
        self.position + 1
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.position)
    }

    pub fn finished(&self) -> bool {
        self.position >= self.questions.len()
    }

    /// Answer the current question and advance.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        let question = self.questions.get(self.position)?;
        let correct = choice == question.answer_index;
        if correct {
            self.correct += 1;
        }
        let outcome = AnswerOutcome {
            correct,
            correct_index: question.answer_index,
            explanation: question.explanation.clone(),
        };
        self.position += 1;
        Some(outcome)
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Final score as a rounded percentage.
    pub fn score(&self) -> u8 {
        let total = self.questions.len();
        ((self.correct as f64 / total as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<Flashcard> {
        (0..n)
            .map(|i| Flashcard {
                front: format!("front {}", i),
                back: format!("back {}", i),
            })
            .collect()
    }

    fn questions() -> Vec<QuizQuestion> {
        (0..3)
            .map(|i| QuizQuestion {
                question: format!("q{}", i),
                choices: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer_index: i % 4,
                explanation: if i == 0 { Some("because".to_string()) } else { None },
            })
            .collect()
    }

    #[test]
    fn flashcard_navigation_wraps() {
        let mut session = FlashcardSession::new(cards(3), &ProgressRecord::default());
        assert_eq!(session.position(), 1);

        session.prev();
        assert_eq!(session.position(), 3);
        session.next();
        assert_eq!(session.position(), 1);
        session.next();
        session.next();
        session.next();
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn empty_deck_has_no_current_card() {
        let mut session = FlashcardSession::new(Vec::new(), &ProgressRecord::default());
        assert!(session.current().is_none());
        session.next();
        session.prev();
        assert!(session.is_empty());
    }

    #[test]
    fn known_marks_follow_the_current_card() {
        let mut session = FlashcardSession::new(cards(2), &ProgressRecord::default());
        session.mark_known();
        assert!(session.is_current_known());

        session.next();
        assert!(!session.is_current_known());
        assert_eq!(session.known_count(), 1);

        session.prev();
        session.mark_unknown();
        assert_eq!(session.known_count(), 0);
    }

    #[test]
    fn session_starts_from_saved_progress() {
        let mut progress = ProgressRecord::default();
        progress.known_flashcards.insert(1);
        let mut session = FlashcardSession::new(cards(3), &progress);
        session.next();
        assert!(session.is_current_known());
    }

    #[test]
    fn quiz_scores_round_to_percent() {
        let mut quiz = QuizSession::new(questions()).unwrap();
        let first = quiz.answer(0).unwrap(); // correct, has explanation
        assert!(first.correct);
        assert_eq!(first.explanation.as_deref(), Some("because"));

        let second = quiz.answer(0).unwrap(); // wrong, answer is 1
        assert!(!second.correct);
        assert_eq!(second.correct_index, 1);

        quiz.answer(2).unwrap(); // correct
        assert!(quiz.finished());
        assert_eq!(quiz.correct_count(), 2);
        assert_eq!(quiz.score(), 67); // 2/3 rounds to 67
    }

    #[test]
    fn empty_quiz_cannot_start() {
        assert!(QuizSession::new(Vec::new()).is_none());
    }
}
