use anyhow::{Context, Result};
use colored::Colorize;
use screen_splice::{PatchKind, Splicer};
use std::path::Path;

use super::print_steps;

pub fn handle(patch: PatchKind, file: Option<&Path>) -> Result<()> {
    let splicer = Splicer::new(".").context("Failed to load screen-splice configuration")?;
    let target = splicer.target(file);

    println!("{} {}", "→".bright_blue(), patch.description().bright_blue().bold());
    println!("  File: {}\n", target.display());

    let report = splicer
        .apply(patch, &target)
        .with_context(|| format!("Failed to apply '{}' patch", patch))?;

    print_steps(&report);

    if report.changed() {
        println!("\n{} {} written", "✨".bright_green(), target.display());
    } else {
        println!("\n{} No changes made", "ℹ".bright_blue());
    }

    Ok(())
}
