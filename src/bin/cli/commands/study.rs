use std::io::{self, BufRead, Write};

use anyhow::Result;

use pocket_classroom::learn::FlashcardSession;

use crate::app::App;

/// Interactive flashcard review. Marks are persisted as they happen, so
/// quitting mid-session loses nothing.
pub fn run(app: &App, id: &str) -> Result<()> {
    let capsule = app.find_capsule(id)?;
    let record = app.progress.load(&capsule.id);
    let mut session = FlashcardSession::new(capsule.flashcards.clone(), &record);

    if session.is_empty() {
        println!("'{}' has no flashcards.", capsule.meta.title);
        return Ok(());
    }

    println!(
        "Studying '{}' — {} cards. [f]lip [n]ext [p]rev [k]nown [u]nknown [q]uit",
        capsule.meta.title,
        session.len()
    );

    let stdin = io::stdin();
    let mut flipped = false;
    loop {
        let card = match session.current() {
            Some(card) => card,
            None => break,
        };
        let side = if flipped { &card.back } else { &card.front };
        let marker = if session.is_current_known() { " [known]" } else { "" };
        print!(
            "({}/{}){} {}\n> ",
            session.position(),
            session.len(),
            marker,
            side
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "f" | "" => flipped = !flipped,
            "n" => {
                session.next();
                flipped = false;
            }
            "p" => {
                session.prev();
                flipped = false;
            }
            "k" => {
                let card_index = session.mark_known();
                app.progress.mark_known(&capsule.id, card_index)?;
            }
            "u" => {
                let card_index = session.mark_unknown();
                app.progress.mark_unknown(&capsule.id, card_index)?;
            }
            "q" => break,
            other => println!("Unknown command '{}'", other),
        }
    }

    println!(
        "Done. {} of {} cards marked known.",
        session.known_count(),
        session.len()
    );
    Ok(())
}
