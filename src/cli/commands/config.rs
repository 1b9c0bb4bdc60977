use anyhow::{Context, Result};
use colored::Colorize;
use screen_splice::config::{project::KEYS, Config};

use crate::cli::ConfigAction;

pub fn handle(action: ConfigAction) -> Result<()> {
    let mut config = Config::load_or_default(".").context("Failed to load config file")?;

    match action {
        ConfigAction::Set { key, value } => {
            println!("{} Setting {} = {}",
                "→".bright_green(),
                key.bright_cyan(),
                value.bright_yellow());

            config
                .set(&key, &value)
                .with_context(|| format!("Failed to set {}", key))?;

            println!("{} Configuration updated", "✓".bright_green());
        }

        ConfigAction::Get { key } => {
            let value = config.get(&key)?;
            println!("{} = {}", key.bright_cyan(), value);
        }

        ConfigAction::List => {
            println!("{}", "Current Configuration:".bright_blue().bold());

            if !config.path.exists() {
                println!("  {} No config file, showing defaults", "ℹ".bright_blue());
            }

            for key in KEYS {
                let value = config.get(key)?;
                println!("  {} = {}", key.bright_cyan(), value.bright_yellow());
            }
        }
    }

    Ok(())
}
