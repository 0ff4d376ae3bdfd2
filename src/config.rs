//! Configuration System
//!
//! One explicit configuration value, constructed at startup from an optional
//! `dirsnap.toml` plus CLI overrides, and passed by reference into every
//! component that needs it. No process-wide mutable state.

use crate::error::SnapshotError;
use crate::logging::LoggingConfig;
use crate::snapshot::ListingMode;
use crate::tree::entry::KindMarkers;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default listing file name, written inside each directory (separate mode)
/// or as the combined output (single mode), and excluded from traversal.
pub const DEFAULT_LISTING_FILE_NAME: &str = "dir.lst";

/// Name of the optional configuration file looked up in the working
/// directory.
pub const CONFIG_FILE_NAME: &str = "dirsnap.toml";

fn default_listing_file_name() -> String {
    DEFAULT_LISTING_FILE_NAME.to_string()
}

/// Root configuration for a snapshot run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Kind marker characters used in listing lines.
    #[serde(default)]
    pub markers: KindMarkers,

    /// Listing file name (separate mode) or combined output path (single
    /// mode).
    #[serde(default = "default_listing_file_name")]
    pub listing_file_name: String,

    /// Whether dot-prefixed names are included in snapshots.
    #[serde(default)]
    pub include_hidden: bool,

    /// Single combined listing instead of one file per directory.
    #[serde(default)]
    pub single_listing: bool,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            markers: KindMarkers::default(),
            listing_file_name: default_listing_file_name(),
            include_hidden: false,
            single_listing: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl SnapshotConfig {
    pub fn listing_mode(&self) -> ListingMode {
        if self.single_listing {
            ListingMode::Single
        } else {
            ListingMode::Separate
        }
    }

    /// Walker configuration derived from this config. Only the final name
    /// component of the listing file is used for exclusion, so a combined
    /// listing given as a path is still skipped wherever it sits.
    pub fn walker_config(&self) -> WalkerConfig {
        let listing_file_name = Path::new(&self.listing_file_name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.listing_file_name.clone());
        WalkerConfig {
            follow_symlinks: false,
            listing_file_name,
            include_hidden: self.include_hidden,
        }
    }

    /// Validate the configuration. Marker characters must be printable on a
    /// single line and the listing file name must be usable as a file name.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for marker in [self.markers.directory, self.markers.file] {
            if marker == '\n' || marker == '\r' {
                return Err(SnapshotError::Config(
                    "kind markers must not be line breaks".to_string(),
                ));
            }
        }
        if self.listing_file_name.is_empty() {
            return Err(SnapshotError::Config(
                "listing file name must not be empty".to_string(),
            ));
        }
        if Path::new(&self.listing_file_name).file_name().is_none() {
            return Err(SnapshotError::Config(format!(
                "listing file name {:?} has no file name component",
                self.listing_file_name
            )));
        }
        Ok(())
    }
}

/// Loads configuration from disk with defaults as fallback.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from an explicit file path.
    pub fn load_from_file(path: &Path) -> Result<SnapshotConfig, SnapshotError> {
        let text = std::fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
        let config: SnapshotConfig = toml::from_str(&text)
            .map_err(|e| SnapshotError::Config(format!("invalid config file {path:?}: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `dirsnap.toml` from `dir` if present, defaults otherwise.
    pub fn load(dir: &Path) -> Result<SnapshotConfig, SnapshotError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load_from_file(&path)
        } else {
            Ok(SnapshotConfig::default())
        }
    }
}
