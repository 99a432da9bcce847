use std::io::{self, BufRead, Write};

use anyhow::Result;

use pocket_classroom::learn::QuizSession;

use crate::app::App;

pub fn run(app: &App, id: &str) -> Result<()> {
    let capsule = app.find_capsule(id)?;
    let mut session = match QuizSession::new(capsule.quiz.clone()) {
        Some(session) => session,
        None => {
            println!("'{}' has no quiz questions.", capsule.meta.title);
            return Ok(());
        }
    };

    println!("Quiz: '{}' — {} questions", capsule.meta.title, session.len());
    let stdin = io::stdin();

    while let Some(question) = session.current() {
        println!("\n[{}/{}] {}", session.position(), session.len(), question.question);
        for (i, choice) in question.choices.iter().enumerate() {
            println!("  {}. {}", (b'A' + i as u8) as char, choice);
        }

        let choice = loop {
            print!("Answer (A-D): ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                println!("\nQuiz abandoned.");
                return Ok(());
            }
            match line.trim().to_ascii_uppercase().as_str() {
                "A" => break 0,
                "B" => break 1,
                "C" => break 2,
                "D" => break 3,
                _ => println!("Please answer A, B, C or D."),
            }
        };

        if let Some(outcome) = session.answer(choice) {
            if outcome.correct {
                println!("Correct!");
            } else {
                println!(
                    "Wrong — the answer was {}.",
                    (b'A' + outcome.correct_index as u8) as char
                );
            }
            if let Some(explanation) = outcome.explanation {
                println!("  {}", explanation);
            }
        }
    }

    let score = session.score();
    let record = app.progress.record_score(&capsule.id, score)?;
    println!(
        "\nScore: {}% ({}/{} correct). Best: {}%",
        score,
        session.correct_count(),
        session.len(),
        record.best_score
    );
    Ok(())
}
