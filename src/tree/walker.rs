//! Filesystem walker for traversing directory structures.

use crate::error::SnapshotError;
use std::path::PathBuf;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false; a symlink to a
    /// directory is reported as a plain entry and never descended into).
    pub follow_symlinks: bool,
    /// Listing file name to exclude from every directory's children.
    pub listing_file_name: String,
    /// Whether dot-prefixed names are reported (default: false).
    pub include_hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            listing_file_name: crate::config::DEFAULT_LISTING_FILE_NAME.to_string(),
            include_hidden: false,
        }
    }
}

/// One discovered traversal fact, depth-first.
///
/// `EnterDirectory` is emitted once per visited directory (root included,
/// empty directories included); `Child` is emitted once per immediate child
/// the filters let through, tagged by the OS stat classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent {
    EnterDirectory {
        path: String,
    },
    Child {
        dir_path: String,
        name: String,
        is_dir: bool,
    },
}

/// Filesystem walker.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    pub fn new(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the tree rooted at `root`, depth-first.
    ///
    /// Individual unreadable entries are logged and skipped, never fatal; the
    /// only hard failure is a root that is not a directory.
    pub fn walk(&self) -> Result<Vec<TraversalEvent>, SnapshotError> {
        let mut events = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_entry(|e| self.should_keep(e));

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path().to_string_lossy().into_owned();

            if entry.depth() == 0 {
                if !entry.file_type().is_dir() {
                    return Err(SnapshotError::InvalidPath(format!(
                        "{} is not a directory",
                        path
                    )));
                }
                events.push(TraversalEvent::EnterDirectory { path });
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let dir_path = entry
                .path()
                .parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default();
            let is_dir = entry.file_type().is_dir();

            events.push(TraversalEvent::Child {
                dir_path,
                name,
                is_dir,
            });
            if is_dir {
                events.push(TraversalEvent::EnterDirectory { path });
            }
        }

        Ok(events)
    }

    /// Filter applied before descending: the listing file itself and, unless
    /// enabled, hidden (dot-prefixed) names are dropped along with their
    /// subtrees.
    fn should_keep(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if name == self.config.listing_file_name.as_str() {
            return false;
        }
        if !self.config.include_hidden && name.starts_with('.') {
            return false;
        }
        true
    }
}
