mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pocket-cli", about = "Pocket Classroom study capsules", version)]
struct Cli {
    /// Data directory (default: the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List the capsule library
    List,

    /// Show a capsule's content
    Show {
        /// Capsule id (prefix match accepted)
        id: String,
        /// Only show notes containing this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Author a new capsule
    New {
        /// Capsule title
        title: String,
        /// Subject line
        #[arg(long)]
        subject: Option<String>,
        /// Difficulty level (beginner, intermediate, advanced)
        #[arg(long)]
        level: Option<String>,
        /// Free-text description
        #[arg(long)]
        desc: Option<String>,
        /// Newline-separated notes (use "-" to read from stdin)
        #[arg(long)]
        notes: Option<String>,
        /// Flashcard as "front|back" (repeatable)
        #[arg(long = "card")]
        cards: Vec<String>,
        /// Quiz question as "question|a|b|c|d|answer-index[|explanation]" (repeatable)
        #[arg(long = "question")]
        questions: Vec<String>,
    },

    /// Delete a capsule and its progress
    Delete {
        /// Capsule id (prefix match accepted)
        id: String,
    },

    /// Export one capsule as an interchange document
    Export {
        /// Capsule id (prefix match accepted)
        id: String,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Import a single-capsule interchange document
    Import {
        /// Path to the document ("-" for stdin)
        file: String,
    },

    /// Full-library backup
    #[command(subcommand)]
    Backup(BackupCommand),

    /// Review flashcards interactively
    Study {
        /// Capsule id (prefix match accepted)
        id: String,
    },

    /// Take the quiz interactively
    Quiz {
        /// Capsule id (prefix match accepted)
        id: String,
    },

    /// Show learning progress for a capsule
    Progress {
        /// Capsule id (prefix match accepted)
        id: String,
    },
}

#[derive(Subcommand)]
enum BackupCommand {
    /// Export every capsule to a backup file
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Restore a backup, replacing the whole library
    Import {
        /// Path to the backup file ("-" for stdin)
        file: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.data_dir.clone())?;

    match cli.command {
        Command::List => commands::list::run(&app, &cli.format)?,
        Command::Show { id, filter } => {
            commands::show::run(&app, &id, filter.as_deref(), &cli.format)?
        }
        Command::New { title, subject, level, desc, notes, cards, questions } => {
            commands::new::run(
                &app,
                commands::new::NewCapsule {
                    title,
                    subject,
                    level,
                    desc,
                    notes,
                    cards,
                    questions,
                },
            )?
        }
        Command::Delete { id } => commands::delete::run(&app, &id)?,
        Command::Export { id, out } => commands::export::run(&app, &id, out.as_deref())?,
        Command::Import { file } => commands::import::run(&app, &file)?,
        Command::Backup(subcmd) => match subcmd {
            BackupCommand::Export { out } => commands::backup::run_export(&app, out.as_deref())?,
            BackupCommand::Import { file } => commands::backup::run_import(&app, &file)?,
        },
        Command::Study { id } => commands::study::run(&app, &id)?,
        Command::Quiz { id } => commands::quiz::run(&app, &id)?,
        Command::Progress { id } => commands::progress::run(&app, &id, &cli.format)?,
    }

    Ok(())
}
