//! Top-level snapshot runs: write a listing snapshot, or compare the live
//! tree against a previously persisted one.
//!
//! Each run moves `Idle → Traversing → {Serializing | Comparing} → Done`;
//! the terminal state is always reached and nothing is retained between runs
//! beyond the configuration the caller holds.

use crate::config::SnapshotConfig;
use crate::diff::{DiffReport, Differ};
use crate::error::SnapshotError;
use crate::listing;
use crate::tree::node::SnapshotTree;
use crate::tree::TreeBuilder;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Where listings go in write mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// One listing file per directory, inside that directory.
    Separate,
    /// One combined listing file for the whole tree.
    Single,
}

/// Counts reported by a completed run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub directories: usize,
    pub entries: usize,
    pub listings_written: usize,
    pub listings_failed: usize,
}

fn build_tree(root: &Path, config: &SnapshotConfig) -> Result<SnapshotTree, SnapshotError> {
    TreeBuilder::new(
        root.to_path_buf(),
        config.markers,
        config.walker_config(),
    )
    .build()
}

/// Walk `root` and persist its listing snapshot.
///
/// In single mode all directories are already merged into one path-keyed
/// tree by construction, and failure to write the combined file is the run's
/// failure. In separate mode a failed directory is logged and skipped.
#[instrument(skip(config), fields(root = %root.display()))]
pub fn write_snapshot(root: &Path, config: &SnapshotConfig) -> Result<RunSummary, SnapshotError> {
    let tree = build_tree(root, config)?;
    let mut summary = RunSummary {
        directories: tree.len(),
        entries: tree.entry_count(),
        ..RunSummary::default()
    };

    match config.listing_mode() {
        ListingMode::Single => {
            let output = PathBuf::from(&config.listing_file_name);
            listing::write_single_listing(&tree, &output)?;
            summary.listings_written = 1;
        }
        ListingMode::Separate => {
            let outcome = listing::write_separate_listings(&tree, &config.listing_file_name);
            summary.listings_written = outcome.written;
            summary.listings_failed = outcome.failed;
        }
    }

    info!(
        directories = summary.directories,
        entries = summary.entries,
        "Completed"
    );
    Ok(summary)
}

/// Walk `root` and report structural deltas against the previously persisted
/// snapshot read from `listing_path`.
///
/// An absent, unreadable, or malformed previous listing degrades to an empty
/// previous snapshot, so every current directory and entry reports as added.
#[instrument(skip(config), fields(root = %root.display()))]
pub fn compare_snapshot(
    root: &Path,
    listing_path: &Path,
    config: &SnapshotConfig,
) -> Result<(RunSummary, DiffReport), SnapshotError> {
    let current = build_tree(root, config)?;

    let previous = match listing::parse_file(listing_path) {
        Ok(tree) => tree,
        Err(e) => {
            warn!(
                path = %listing_path.display(),
                error = %e,
                "previous listing unavailable; treating previous snapshot as empty"
            );
            SnapshotTree::new()
        }
    };

    let report = Differ::diff(&previous, &current);
    let summary = RunSummary {
        directories: current.len(),
        entries: current.entry_count(),
        ..RunSummary::default()
    };

    info!(
        added = report.added_count(),
        removed = report.removed_count(),
        "Completed"
    );
    Ok((summary, report))
}
