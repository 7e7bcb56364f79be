mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse, summarize and export church membership snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (config lives here)")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Member snapshot file (JSON array)")]
    pub snapshot: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}
