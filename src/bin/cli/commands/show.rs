use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, id: &str, filter: Option<&str>, format: &OutputFormat) -> Result<()> {
    let capsule = app.find_capsule(id)?;

    if let Some(query) = filter {
        let matches = capsule.notes.matching(query);
        if matches.is_empty() {
            println!("No notes matching '{}'.", query);
        } else {
            for line in matches {
                println!("- {}", line);
            }
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&capsule)?);
        }
        OutputFormat::Plain => {
            println!("{} ({})", capsule.meta.title, capsule.id);
            if !capsule.meta.subject.is_empty() {
                println!("Subject: {}", capsule.meta.subject);
            }
            println!("Level: {}", capsule.meta.level);
            if !capsule.meta.description.is_empty() {
                println!("{}", capsule.meta.description);
            }

            if !capsule.notes.is_empty() {
                println!("\nNotes:");
                for line in capsule.notes.lines() {
                    println!("  - {}", line);
                }
            }

            if !capsule.flashcards.is_empty() {
                println!("\nFlashcards:");
                for card in &capsule.flashcards {
                    println!("  {} -> {}", card.front, card.back);
                }
            }

            if !capsule.quiz.is_empty() {
                println!("\nQuiz ({} questions):", capsule.quiz.len());
                for q in &capsule.quiz {
                    println!("  {}", q.question);
                }
            }
        }
    }

    Ok(())
}
