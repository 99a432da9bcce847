use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use pocket_classroom::interchange::{export_library, import_library};

use crate::app::App;
use crate::commands::read_input;

pub fn run_export(app: &App, out: Option<&Path>) -> Result<()> {
    let json = export_library(&app.capsules)?;
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            println!("Backup written to {:?}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn run_import(app: &App, file: &str) -> Result<()> {
    let json = read_input(file)?;
    match import_library(&app.capsules, &json) {
        Ok(count) => {
            println!("Restored {} capsules", count);
            Ok(())
        }
        Err(e) => {
            eprintln!("Restore failed: {}", e);
            std::process::exit(1);
        }
    }
}
