//! Amity CLI entry point.
//!
//! Binary name: `amity`
//!
//! Parses CLI arguments, initializes tracing, then dispatches to the
//! appropriate command handler.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,amity_core=debug,amity_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Chat { name, persona } => {
            cli::chat::run_chat_loop(name, persona).await?;
        }
        Commands::Personas => {
            cli::personas::list_personas(cli.json)?;
        }
        Commands::Levels => {
            cli::levels::list_levels(cli.json)?;
        }
    }

    Ok(())
}
