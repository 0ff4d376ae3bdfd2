//! CLI parse: clap types for dirsnap. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Dirsnap CLI - directory tree snapshots and structural diffs
#[derive(Parser)]
#[command(name = "dirsnap")]
#[command(about = "Capture directory tree snapshots and report structural changes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Quiet mode: suppress all log output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

/// Options shared by snapshot commands; each overrides the config file.
#[derive(Args)]
pub struct SnapshotArgs {
    /// Root directory to snapshot
    pub root: PathBuf,

    /// Directory kind marker character ('D' by default)
    #[arg(long, short = 'd', value_name = "CHAR")]
    pub dir_marker: Option<char>,

    /// File kind marker character ('F' by default)
    #[arg(long, short = 'f', value_name = "CHAR")]
    pub file_marker: Option<char>,

    /// Listing file name ('dir.lst' by default)
    #[arg(long, short = 'l', value_name = "NAME")]
    pub listing_name: Option<String>,

    /// Include hidden (dot-prefixed) entries
    #[arg(long)]
    pub include_hidden: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a directory tree and write its listing snapshot
    Write {
        #[command(flatten)]
        args: SnapshotArgs,

        /// Single listing: merge all directories into one combined file
        #[arg(long, short = 's')]
        single: bool,
    },
    /// Compare the live tree against a previously written snapshot
    Compare {
        #[command(flatten)]
        args: SnapshotArgs,
    },
}
