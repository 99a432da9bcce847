use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &App, id: &str) -> Result<()> {
    let capsule = app.find_capsule(id)?;
    app.capsules
        .delete(&capsule.id)
        .context("Failed to delete capsule")?;
    println!("Deleted {} ('{}')", capsule.id, capsule.meta.title);
    Ok(())
}
