use anyhow::{Context, Result};
use colored::Colorize;
use screen_splice::Splicer;
use std::path::Path;

use super::print_steps;

pub fn handle(file: Option<&Path>, verbose: bool) -> Result<()> {
    println!("{}", "Screen Splice Status".bright_blue().bold());
    println!("{}", "====================".bright_blue());

    let splicer = Splicer::new(".").context("Failed to load screen-splice configuration")?;
    let target = splicer.target(file);
    println!("File: {}\n", target.display());

    let status = splicer
        .status(&target)
        .with_context(|| format!("Failed to inspect {}", target.display()))?;

    for (kind, applied) in &status {
        if *applied {
            println!("  {} {} applied", "✓".bright_green(), kind.name().bright_cyan());
        } else {
            println!("  {} {} not applied", "•".bright_black(), kind.name().bright_cyan());
        }
        println!("      {}", kind.description().bright_black());

        if verbose {
            // Dry run shows what each step would do next
            let report = splicer.preview(*kind, &target)?;
            print_steps(&report);
        }
    }

    let pending = status.iter().filter(|(_, applied)| !applied).count();
    if pending == 0 {
        println!("\n{} All patches applied", "✨".bright_green());
    } else if !verbose {
        println!("\n{}", "Tip: Use --verbose to see what each pending step would do".bright_cyan());
    }

    Ok(())
}
