use anyhow::{Context, Result};
use colored::Colorize;
use screen_splice::{PatchKind, Splicer};
use std::path::Path;

use super::print_steps;

pub fn handle(patch: PatchKind, file: Option<&Path>, diff: bool) -> Result<()> {
    let splicer = Splicer::new(".").context("Failed to load screen-splice configuration")?;
    let target = splicer.target(file);

    println!("{}", "Screen Splice Preview".bright_blue().bold());
    println!("{}", "=====================".bright_blue());
    println!("Patch: {}", patch.name());
    println!("File: {}\n", target.display());

    let report = splicer
        .preview(patch, &target)
        .with_context(|| format!("Failed to run '{}' patch", patch))?;

    print_steps(&report);
    println!();

    if !report.changed() {
        println!("{} File would be left unchanged", "ℹ".bright_blue());
        return Ok(());
    }

    if diff {
        println!("{}", "CURRENT VERSION:".bright_green().bold());
        println!("{}", "----------------".bright_green());
        println!("{}", report.original);
        println!();
        println!("{}", "PATCHED VERSION:".bright_yellow().bold());
        println!("{}", "----------------".bright_yellow());
        println!("{}", report.content);
    } else {
        println!("{}", "What will be written:".bright_yellow().bold());
        println!("{}", report.content);
        println!();
        println!("Use {} to see both versions", "--diff".bright_cyan());
    }

    Ok(())
}
