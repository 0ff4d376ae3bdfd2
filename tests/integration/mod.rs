//! Integration test modules.

mod snapshot_compare;
mod snapshot_write;
