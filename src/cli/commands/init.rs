use anyhow::{Context, Result};
use colored::Colorize;
use screen_splice::Splicer;
use std::path::Path;

pub fn handle(path: &Path) -> Result<()> {
    println!("{}", "Initializing screen-splice...".bright_blue().bold());

    let (splicer, created) = Splicer::init(path)
        .context("Failed to initialize screen-splice in the specified directory")?;
    let config = splicer.config();

    if created {
        println!("  {} Created config at {}", "✓".bright_green(), config.path.display());
    } else {
        println!("  {} Already initialized, keeping {}", "ℹ".bright_blue(), config.path.display());
    }
    println!("  {} Target file: {}", "✓".bright_green(), config.data.target.path.bright_yellow());

    if !config.target_path().exists() {
        println!(
            "  {} Target file does not exist yet, change it with: {}",
            "⚠".bright_yellow(),
            "screen-splice config set target.path <PATH>".bright_cyan()
        );
    }

    println!("\n{}", "Quick start:".bright_blue().bold());
    println!("  1. {}", "screen-splice status".bright_cyan());
    println!("  2. {}", "screen-splice preview feedback --diff".bright_cyan());
    println!("  3. {}", "screen-splice apply feedback".bright_cyan());

    Ok(())
}
