use crate::models::AdrDirectory;
use crate::state::{FileSystem, StateManager};
use crate::Result;
use anyhow::Context;
use colored::Colorize;

/// Entry point for `docula adr list`
pub fn run<F: FileSystem>(manager: &StateManager<F>, json: bool) -> Result<()> {
    let state = manager.load_or_default().context("loading state")?;
    let dirs = &state.adr.directories;

    if json {
        println!("{}", serde_json::to_string_pretty(dirs)?);
        return Ok(());
    }

    if dirs.is_empty() {
        println!(
            "{}",
            "No ADR directories found. Run 'docula adr init <path>' first.".yellow()
        );
        return Ok(());
    }

    println!("{}", "ADR directories:".green().bold());
    for dir in dirs {
        println!("   {}", format_entry(dir));
    }
    Ok(())
}

fn format_entry(dir: &AdrDirectory) -> String {
    let path = if dir.path.is_empty() { "." } else { dir.path.as_str() };
    let index = dir.index.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string());
    if dir.name.is_empty() {
        format!("• {} ({})", path, index)
    } else {
        format!("• {} [{}] ({})", path, dir.name, index)
    }
}
