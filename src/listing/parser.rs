//! Listing parser: reconstructs a snapshot tree from the persisted format.

use crate::error::SnapshotError;
use crate::tree::entry::Entry;
use crate::tree::node::{DirectoryNode, InsertOutcome, SnapshotTree};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse persisted listing text into a snapshot tree.
///
/// A line beginning with `[` opens a new directory node; any other line is
/// tokenized against the entry grammar `" " marker ":" name`. Entries attach
/// to the most recently opened directory; the node is flushed into the tree
/// when the next header (or end of input) is reached, so a duplicate path is
/// dropped together with the entries parsed under it. Entry lines before any
/// header are ignored. Markers are read verbatim, not validated against the
/// configured set.
pub fn parse(text: &str) -> Result<SnapshotTree, SnapshotError> {
    let mut tree = SnapshotTree::new();
    let mut current: Option<DirectoryNode> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        if let Some(rest) = line.strip_prefix('[') {
            let path = rest
                .strip_suffix(']')
                .ok_or_else(|| SnapshotError::MalformedListing {
                    line: line_no,
                    content: line.to_string(),
                })?;
            flush(&mut tree, current.take());
            current = Some(DirectoryNode::new(path));
            continue;
        }

        match current {
            Some(ref mut dir) => {
                let entry = parse_entry_line(line, line_no)?;
                dir.entries_mut().insert(entry);
            }
            None => {
                debug!(line = line_no, "entry line before any directory header; ignored");
            }
        }
    }

    flush(&mut tree, current.take());
    Ok(tree)
}

/// Read and parse a listing file.
pub fn parse_file(path: &Path) -> Result<SnapshotTree, SnapshotError> {
    let text = fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
    parse(&text)
}

fn flush(tree: &mut SnapshotTree, node: Option<DirectoryNode>) {
    if let Some(node) = node {
        let path = node.path().to_string();
        if tree.insert_dir(node) == InsertOutcome::DuplicateDropped {
            debug!(path = %path, "duplicate directory header dropped");
        }
    }
}

/// Tokenize one entry line: a leading space, the marker character, a `:`
/// separator, and a non-empty name.
fn parse_entry_line(line: &str, line_no: usize) -> Result<Entry, SnapshotError> {
    let malformed = || SnapshotError::MalformedListing {
        line: line_no,
        content: line.to_string(),
    };

    let rest = line.strip_prefix(' ').ok_or_else(malformed)?;
    let mut chars = rest.chars();
    let marker = chars.next().ok_or_else(malformed)?;
    let name = chars.as_str().strip_prefix(':').ok_or_else(malformed)?;
    if name.is_empty() {
        return Err(malformed());
    }

    Ok(Entry::new(marker, name))
}
