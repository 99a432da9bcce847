use anyhow::Result;

use pocket_classroom::interchange::import_capsule;

use crate::app::App;
use crate::commands::read_input;

pub fn run(app: &App, file: &str) -> Result<()> {
    let json = read_input(file)?;
    match import_capsule(&app.capsules, &json) {
        Ok(capsule) => {
            println!("Imported '{}' as {}", capsule.meta.title, capsule.id);
            Ok(())
        }
        Err(e) => {
            eprintln!("Import failed: {}", e);
            std::process::exit(1);
        }
    }
}
