use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, id: &str, format: &OutputFormat) -> Result<()> {
    let capsule = app.find_capsule(id)?;
    let record = app.progress.load(&capsule.id);
    let (known, total) = record.known_of(capsule.flashcards.len());

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "id": capsule.id,
                    "title": capsule.meta.title,
                    "knownFlashcards": record.known_flashcards,
                    "flashcardCount": total,
                    "bestScore": record.best_score,
                }))?
            );
        }
        OutputFormat::Plain => {
            println!("{} ({})", capsule.meta.title, capsule.id);
            println!("  Flashcards known: {}/{}", known, total);
            println!("  Best quiz score: {}%", record.best_score);
        }
    }
    Ok(())
}
