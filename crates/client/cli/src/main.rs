//! Battle simulator entry point.
//!
//! Runs demo battles on top of `battle-runtime`:
//!
//! ```bash
//! # One battle, printed as it happens
//! battle-sim duel --monster GOBLIN --seed 7
//!
//! # Five battles in a row with healing in between
//! battle-sim campaign --battles 5
//!
//! # Three heroes fighting at the same time, JSON output
//! battle-sim concurrent --json
//! ```
mod commands;
mod config;
mod hero;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::{CampaignCmd, ConcurrentCmd, DuelCmd};
use config::SimConfig;

/// Turn-based battle simulator
#[derive(Parser)]
#[command(name = "battle-sim")]
#[command(about = "Run turn-based battles from the command line", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Fight a single battle
    Duel(DuelCmd),

    /// Fight a series of battles against level-scaled monsters
    Campaign(CampaignCmd),

    /// Fight several battles at the same time
    Concurrent(ConcurrentCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = SimConfig::from_env();

    let _guard = setup_logging(config.log_dir.as_deref())?;

    match cli.command {
        Command::Duel(cmd) => cmd.execute(&config).await,
        Command::Campaign(cmd) => cmd.execute(&config).await,
        Command::Concurrent(cmd) => cmd.execute(&config).await,
    }
}

/// Log to stderr, and to `battle-sim.log` inside `log_dir` when given.
///
/// The returned guard flushes the file writer when dropped.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "battle-sim.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/battle-sim.log", dir.display());
    }

    Ok(guard)
}
