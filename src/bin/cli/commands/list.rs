use anyhow::Result;
use chrono::Utc;

use pocket_classroom::timefmt::time_ago;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let entries = app.capsules.index().load();

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for entry in &entries {
                let progress = app.progress.load(&entry.id);
                output.push(serde_json::json!({
                    "id": entry.id,
                    "title": entry.title,
                    "subject": entry.subject,
                    "level": entry.level.to_string(),
                    "updatedAt": entry.updated_at,
                    "bestScore": progress.best_score,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if entries.is_empty() {
                println!("No capsules yet. Create one with 'pocket-cli new'.");
                return Ok(());
            }
            let now = Utc::now();
            for entry in &entries {
                let progress = app.progress.load(&entry.id);
                let subject = if entry.subject.is_empty() {
                    String::new()
                } else {
                    format!(" · {}", entry.subject)
                };
                println!("{}  {}{}", entry.id, entry.title, subject);
                println!(
                    "    {} · updated {} ago · best score {}%",
                    entry.level,
                    time_ago(entry.updated_at, now),
                    progress.best_score
                );
            }
        }
    }

    Ok(())
}
