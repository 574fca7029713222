mod commands;

pub use commands::*;

use crate::types::LogLevel;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "edgeview")]
#[command(
    about = "Inspect the resources persisted in an edge node's local store",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Log verbosity on stderr (defaults to RUST_LOG, then warn)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}
