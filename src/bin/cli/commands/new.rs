use anyhow::{anyhow, bail, Context, Result};

use pocket_classroom::capsule::{Capsule, Flashcard, Level, Notes, QuizQuestion, QUIZ_CHOICES};

use crate::app::App;
use crate::commands::read_input;

pub struct NewCapsule {
    pub title: String,
    pub subject: Option<String>,
    pub level: Option<String>,
    pub desc: Option<String>,
    pub notes: Option<String>,
    pub cards: Vec<String>,
    pub questions: Vec<String>,
}

pub fn run(app: &App, args: NewCapsule) -> Result<()> {
    let mut capsule = Capsule::new(args.title, chrono::Utc::now());

    if let Some(subject) = args.subject {
        capsule.meta.subject = subject;
    }
    if let Some(level) = args.level {
        capsule.meta.level = level.parse::<Level>().map_err(|e| anyhow!(e))?;
    }
    if let Some(desc) = args.desc {
        capsule.meta.description = desc;
    }
    if let Some(notes) = args.notes {
        let text = if notes == "-" { read_input("-")? } else { notes };
        capsule.notes = Notes::from_text(&text);
    }

    for spec in &args.cards {
        capsule.flashcards.push(parse_card(spec)?);
    }
    for spec in &args.questions {
        capsule.quiz.push(parse_question(spec)?);
    }

    capsule.prune();
    capsule.validate().map_err(|e| anyhow!(e))?;

    app.capsules
        .save(&mut capsule)
        .context("Failed to save capsule")?;
    println!("Created capsule {} ('{}')", capsule.id, capsule.meta.title);
    Ok(())
}

/// "front|back"
fn parse_card(spec: &str) -> Result<Flashcard> {
    let (front, back) = spec
        .split_once('|')
        .ok_or_else(|| anyhow!("Card must be \"front|back\": {}", spec))?;
    Ok(Flashcard {
        front: front.trim().to_string(),
        back: back.trim().to_string(),
    })
}

/// "question|a|b|c|d|answer-index[|explanation]"
fn parse_question(spec: &str) -> Result<QuizQuestion> {
    let parts: Vec<&str> = spec.split('|').collect();
    if parts.len() < QUIZ_CHOICES + 2 || parts.len() > QUIZ_CHOICES + 3 {
        bail!(
            "Question must be \"question|a|b|c|d|answer-index[|explanation]\": {}",
            spec
        );
    }

    let answer_index: usize = parts[QUIZ_CHOICES + 1]
        .trim()
        .parse()
        .with_context(|| format!("Invalid answer index in: {}", spec))?;

    Ok(QuizQuestion {
        question: parts[0].trim().to_string(),
        choices: parts[1..=QUIZ_CHOICES]
            .iter()
            .map(|c| c.trim().to_string())
            .collect(),
        answer_index,
        explanation: parts
            .get(QUIZ_CHOICES + 2)
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty()),
    })
}
