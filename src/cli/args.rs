use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser, Debug)]
#[clap(
    name = "snappy",
    version,
    about = "Snappy Item Manager: a small local inventory"
)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Directory holding the item storage
    #[clap(long, value_parser)]
    pub data_dir: Option<PathBuf>,

    /// Artificial delay before each store operation, in milliseconds
    #[clap(long)]
    pub latency_ms: Option<u64>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the snappy application
    #[clap(subcommand)]
    pub command: Commands,
}
