//! Snapshot Tree
//!
//! Represents a directory tree as an ordered snapshot: one node per
//! directory, each holding an ordered set of entries tagged with a
//! one-character kind marker.

pub mod builder;
pub mod entry;
pub mod node;
pub mod walker;

pub use builder::TreeBuilder;
pub use entry::{Entry, KindMarkers, MAX_NAME_LEN};
pub use node::{DirectoryNode, EntrySet, InsertOutcome, OrderedTree, SnapshotTree};
pub use walker::{TraversalEvent, Walker, WalkerConfig};
