//! studycast CLI — the main entry point.
//!
//! Commands:
//! - `onboard`  — Initialize config, data directory, and a sample bank
//! - `post`     — Run one selection/delivery cycle (the scheduler entry point)
//! - `preview`  — Assemble a bulletin without sending or persisting
//! - `status`   — Show config and registry state

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "studycast",
    about = "studycast — scheduled exam-suggestion broadcasts for Telegram channels",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration and data directory
    Onboard,

    /// Run one selection/delivery cycle (invoke from cron or a scheduler)
    Post,

    /// Assemble a bulletin without sending or persisting (dry run)
    Preview,

    /// Show config and registry status
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Post => commands::post::run().await?,
        Commands::Preview => commands::preview::run().await?,
        Commands::Status => commands::status::run().await?,
    }

    Ok(())
}
