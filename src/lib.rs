//! Dirsnap: Directory Tree Snapshots
//!
//! Captures the structure of a directory tree as a persisted, ordered
//! listing snapshot, and compares two snapshots to report which directories
//! and entries were added or removed.

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod listing;
pub mod logging;
pub mod snapshot;
pub mod tree;
