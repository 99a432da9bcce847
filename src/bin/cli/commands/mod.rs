pub mod backup;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod new;
pub mod progress;
pub mod quiz;
pub mod show;
pub mod study;

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

/// Read a document from a path, or from stdin for "-".
pub fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))
    }
}
