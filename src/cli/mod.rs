//! CLI interface for callscan
//!
//! Provides subcommands for:
//! - `scan`: One scan cycle over the configured assets
//! - `score`: Score a single bar file and print the result
//! - `notify-test`: Send a test message through the notifier
//! - `config`: Show the effective configuration

mod scan;
mod score;

pub use scan::ScanArgs;
pub use score::ScoreArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "callscan")]
#[command(about = "Technical signal scoring with cooldown-gated trade calls")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one scan cycle over the configured assets
    Scan(ScanArgs),
    /// Score a single bar file
    Score(ScoreArgs),
    /// Send a test message through the notifier
    NotifyTest,
    /// Show configuration
    Config,
}
