pub mod apply;
pub mod config;
pub mod init;
pub mod preview;
pub mod status;

use colored::Colorize;
use screen_splice::{PatchReport, SpliceError, StepOutcome};

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    let hint = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<SpliceError>())
        .and_then(SpliceError::hint);

    match hint {
        Some(hint) => eprintln!("  {} {}", "└".bright_cyan(), hint),
        None => eprintln!(
            "  {} Run with {} for more details",
            "└".bright_black(),
            "RUST_LOG=debug".bright_cyan()
        ),
    }
}

/// One status line per step, colored by outcome
pub fn print_steps(report: &PatchReport) {
    for step in &report.steps {
        let symbol = match step.outcome {
            StepOutcome::Inserted | StepOutcome::Rewritten => "✓".bright_green(),
            StepOutcome::FallbackApplied => "✓".bright_yellow(),
            StepOutcome::AlreadyApplied => "ℹ".bright_blue(),
            StepOutcome::AnchorMissing | StepOutcome::PatternMissing => "⚠".bright_yellow(),
        };

        println!("  {} {} ({})", symbol, step.label, step.outcome.to_string().bright_black());
    }
}
