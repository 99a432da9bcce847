use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use pocket_classroom::interchange::export_capsule;

use crate::app::App;

pub fn run(app: &App, id: &str, out: Option<&Path>) -> Result<()> {
    let capsule = app.find_capsule(id)?;
    let json = export_capsule(&app.capsules, &capsule.id)?;

    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            println!("Exported {} to {:?}", capsule.id, path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
