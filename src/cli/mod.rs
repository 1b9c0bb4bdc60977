pub mod commands;

use clap::{Parser, Subcommand};
use screen_splice::PatchKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screen-splice")]
#[command(about = "Splice safety and feedback widgets into the email detail screen", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default .screen-splice/config.toml")]
    Init {
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    #[command(about = "Apply a patch to the target file")]
    Apply {
        #[arg(help = "Patch to apply: feedback, safety or threats")]
        patch: PatchKind,
        #[arg(short, long, help = "Target file (defaults to target.path from config)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Show what a patch would do without writing")]
    Preview {
        #[arg(help = "Patch to preview: feedback, safety or threats")]
        patch: PatchKind,
        #[arg(short, long, help = "Target file (defaults to target.path from config)")]
        file: Option<PathBuf>,
        #[arg(short, long, help = "Show the current and patched versions")]
        diff: bool,
    },

    #[command(about = "Show which patches are already applied")]
    Status {
        #[arg(short, long, help = "Target file (defaults to target.path from config)")]
        file: Option<PathBuf>,
        #[arg(short, long, help = "Show per-step details")]
        verbose: bool,
    },

    #[command(about = "Configure screen-splice settings")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        key: String,
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}
