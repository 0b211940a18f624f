use std::path::PathBuf;

use clap::Parser;

/// Batch interpreter for highway station/car/path-planning commands, read
/// line by line from standard input until EOF.
#[derive(Debug, Parser)]
#[command(name = "highway-planner", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug). Default: warn.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional JSON configuration file overriding the built-in defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
