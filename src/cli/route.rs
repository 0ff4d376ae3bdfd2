//! CLI route: run context dispatching commands to snapshot operations.

use crate::cli::parse::{Commands, SnapshotArgs};
use crate::config::{ConfigLoader, SnapshotConfig};
use crate::error::SnapshotError;
use crate::snapshot::{compare_snapshot, write_snapshot};
use std::path::{Path, PathBuf};

/// Runtime context for CLI execution: the resolved configuration.
pub struct RunContext {
    config: SnapshotConfig,
}

impl RunContext {
    /// Create a run context from an optional explicit config path; otherwise
    /// `dirsnap.toml` in the working directory is used when present.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, SnapshotError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(Path::new("."))?,
        };
        Ok(Self { config })
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Execute a command, returning the text to print on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, SnapshotError> {
        match command {
            Commands::Write { args, single } => {
                let config = self.effective_config(args, *single)?;
                let summary = write_snapshot(&args.root, &config)?;
                let mut out = format!(
                    "Snapshot written: {} directories, {} entries, {} listing(s)",
                    summary.directories, summary.entries, summary.listings_written
                );
                if summary.listings_failed > 0 {
                    out.push_str(&format!(", {} failed", summary.listings_failed));
                }
                Ok(out)
            }
            Commands::Compare { args } => {
                let config = self.effective_config(args, true)?;
                let listing_path = PathBuf::from(&config.listing_file_name);
                let (_, report) = compare_snapshot(&args.root, &listing_path, &config)?;
                if report.is_empty() {
                    Ok("No differences".to_string())
                } else {
                    Ok(report.to_string().trim_end().to_string())
                }
            }
        }
    }

    /// Loaded configuration with per-command flag overrides applied.
    fn effective_config(
        &self,
        args: &SnapshotArgs,
        single: bool,
    ) -> Result<SnapshotConfig, SnapshotError> {
        let mut config = self.config.clone();
        if let Some(marker) = args.dir_marker {
            config.markers.directory = marker;
        }
        if let Some(marker) = args.file_marker {
            config.markers.file = marker;
        }
        if let Some(ref name) = args.listing_name {
            config.listing_file_name = name.clone();
        }
        if args.include_hidden {
            config.include_hidden = true;
        }
        config.single_listing = single;
        config.validate()?;
        Ok(config)
    }
}
