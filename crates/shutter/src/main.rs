//! shutter CLI - acquire photos and decode them into display-ready bitmaps.
//!
//! # Usage
//!
//! ```bash
//! # Bounded decode with orientation correction, saved as PNG
//! shutter decode photo.jpg --out display.png
//!
//! # Orientation tag and GPS position
//! shutter info photo.jpg --json
//!
//! # Register an existing file in the media index and resolve it back
//! shutter import ~/Pictures/holiday.jpg
//!
//! # View configuration
//! shutter config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// shutter - photo acquisition and bounded decode pipeline.
#[derive(Parser, Debug)]
#[command(name = "shutter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode an image bounded to the configured width, correctly oriented
    Decode(cli::decode::DecodeArgs),

    /// Show embedded orientation and GPS metadata
    Info(cli::info::InfoArgs),

    /// Register a file in the media index and resolve its locator back
    Import(cli::import::ImportArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go to stderr directly
    let config = match shutter_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `shutter config path`."
            );
            shutter_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("shutter v{}", shutter_core::VERSION);

    match cli.command {
        Commands::Decode(args) => cli::decode::execute(args, config).await,
        Commands::Info(args) => cli::info::execute(args, config).await,
        Commands::Import(args) => cli::import::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
