mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    // Logs go to stderr so status lines on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    match cli.command {
        Commands::Init { path } => commands::init::handle(&path),
        Commands::Apply { patch, file } => commands::apply::handle(patch, file.as_deref()),
        Commands::Preview { patch, file, diff } => {
            commands::preview::handle(patch, file.as_deref(), diff)
        }
        Commands::Status { file, verbose } => commands::status::handle(file.as_deref(), verbose),
        Commands::Config { action } => commands::config::handle(action),
    }
}
