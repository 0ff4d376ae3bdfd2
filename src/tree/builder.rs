//! Tree builder: turns a depth-first traversal stream into a snapshot tree.

use crate::error::SnapshotError;
use crate::tree::entry::{Entry, KindMarkers};
use crate::tree::node::{DirectoryNode, InsertOutcome, SnapshotTree};
use crate::tree::walker::{TraversalEvent, Walker, WalkerConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Builds a [`SnapshotTree`] from a filesystem traversal.
///
/// One directory node is created per visited directory; each reported child
/// becomes an entry in its parent's set. Classification of children is the
/// walker's job; this component only assembles.
pub struct TreeBuilder {
    root: PathBuf,
    markers: KindMarkers,
    walker_config: WalkerConfig,
}

impl TreeBuilder {
    pub fn new(root: PathBuf, markers: KindMarkers, walker_config: WalkerConfig) -> Self {
        Self {
            root,
            markers,
            walker_config,
        }
    }

    /// Walk the filesystem and assemble the snapshot tree.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<SnapshotTree, SnapshotError> {
        let start = Instant::now();
        info!("Starting snapshot build");

        let walker = Walker::new(self.root.clone(), self.walker_config.clone());
        let events = walker.walk()?;
        let tree = self.assemble(events);

        info!(
            directories = tree.len(),
            entries = tree.entry_count(),
            duration_ms = start.elapsed().as_millis(),
            "Snapshot build completed"
        );
        Ok(tree)
    }

    /// Assemble a tree from an already-collected event stream.
    ///
    /// Pure with respect to the filesystem; directory-visit events must
    /// precede the children they contain, which the walker guarantees.
    pub fn assemble(&self, events: Vec<TraversalEvent>) -> SnapshotTree {
        let mut tree = SnapshotTree::new();

        for event in events {
            match event {
                TraversalEvent::EnterDirectory { path } => {
                    if tree.insert_dir(DirectoryNode::new(path.clone()))
                        == InsertOutcome::DuplicateDropped
                    {
                        debug!(path = %path, "duplicate directory path dropped");
                    }
                }
                TraversalEvent::Child {
                    dir_path,
                    name,
                    is_dir,
                } => {
                    let entry = Entry::new(self.markers.marker_for(is_dir), &name);
                    match tree.find_dir_mut(&dir_path) {
                        Some(dir) => {
                            if dir.entries_mut().insert(entry) == InsertOutcome::DuplicateDropped {
                                debug!(dir = %dir_path, name = %name, "duplicate entry dropped");
                            }
                        }
                        None => {
                            // The walker only reports children of visited
                            // directories; an orphan means a malformed stream.
                            debug!(dir = %dir_path, name = %name, "child for unvisited directory ignored");
                        }
                    }
                }
            }
        }

        tree
    }
}
