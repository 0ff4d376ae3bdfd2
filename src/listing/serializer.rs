//! Listing serializer: renders snapshot trees to the persisted text format
//! and writes listing files.

use crate::error::SnapshotError;
use crate::tree::node::{DirectoryNode, SnapshotTree};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{error, info};

/// Render one directory's block: a `[path]` header followed by one line per
/// entry in canonical-rendering order.
fn render_block(dir: &DirectoryNode, out: &mut String) {
    out.push('[');
    out.push_str(dir.path());
    out.push_str("]\n");
    for entry in dir.entries().iter() {
        out.push_str(&entry.rendering());
        out.push('\n');
    }
}

/// Serialize a whole tree: directory blocks in byte-wise ascending path order.
pub fn serialize(tree: &SnapshotTree) -> String {
    let mut out = String::new();
    for dir in tree.iter_dirs() {
        render_block(dir, &mut out);
    }
    out
}

/// Open a listing file for writing with create+truncate semantics, refusing
/// to write through a symbolic link.
fn open_listing_file(path: &Path) -> io::Result<fs::File> {
    if let Ok(meta) = fs::symlink_metadata(path) {
        if meta.file_type().is_symlink() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "refusing to write through a symbolic link",
            ));
        }
    }
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Write the combined listing for the whole tree to one file.
///
/// This is the run's primary output in single-listing mode; a failed
/// open or write is the run's failure.
pub fn write_single_listing(tree: &SnapshotTree, output_path: &Path) -> Result<(), SnapshotError> {
    let text = serialize(tree);
    let mut file =
        open_listing_file(output_path).map_err(|e| SnapshotError::io(output_path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| SnapshotError::io(output_path, e))?;
    info!(path = %output_path.display(), "Single listing complete");
    Ok(())
}

/// Counts reported by a separate-listings pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    pub written: usize,
    pub failed: usize,
}

/// Write one listing file per directory, placed inside that directory.
///
/// A failed open or write for one directory is logged with the underlying
/// error and that directory is skipped; processing continues with the next
/// one. No rollback, no retry.
pub fn write_separate_listings(tree: &SnapshotTree, listing_file_name: &str) -> WriteOutcome {
    let mut outcome = WriteOutcome::default();

    for dir in tree.iter_dirs() {
        let listing_path = Path::new(dir.path()).join(listing_file_name);
        let mut text = String::new();
        render_block(dir, &mut text);

        let result = open_listing_file(&listing_path)
            .and_then(|mut file| file.write_all(text.as_bytes()));
        match result {
            Ok(()) => {
                info!(path = %dir.path(), "Done");
                outcome.written += 1;
            }
            Err(e) => {
                error!(path = %listing_path.display(), error = %e, "Can't write listing");
                outcome.failed += 1;
            }
        }
    }

    outcome
}
