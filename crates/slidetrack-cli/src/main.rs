use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slidetrack_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "slidetrack")]
#[command(author, version, about = "Scroll-driven panel pager with an endless card carousel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start with reduced motion (every transition becomes instant)
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if cli.reduced_motion {
        config.motion.reduced_motion = true;
    }

    match cli.command {
        Some(Commands::Run) | None => {
            // The terminal belongs to the UI, so logs go to a file
            init_logging(&config)?;
            commands::run::run(config)
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let data_dir = config.data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating {}", data_dir.display()))?;
    let log_path = config.log_path();
    let file = File::create(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Ok(())
}
