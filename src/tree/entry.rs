//! Directory entries and their canonical rendering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::warn;

/// Maximum entry name length in bytes. Longer names are truncated at a UTF-8
/// boundary; the truncation is logged rather than silently applied.
pub const MAX_NAME_LEN: usize = 255;

fn default_directory_marker() -> char {
    'D'
}

fn default_file_marker() -> char {
    'F'
}

/// One-character kind markers used in listing lines.
///
/// Both markers are independently configurable; the defaults match the
/// persisted format (`D` for directories, `F` for files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindMarkers {
    #[serde(default = "default_directory_marker")]
    pub directory: char,
    #[serde(default = "default_file_marker")]
    pub file: char,
}

impl Default for KindMarkers {
    fn default() -> Self {
        Self {
            directory: default_directory_marker(),
            file: default_file_marker(),
        }
    }
}

impl KindMarkers {
    /// Marker character for a traversed child, by its stat classification.
    pub fn marker_for(&self, is_dir: bool) -> char {
        if is_dir {
            self.directory
        } else {
            self.file
        }
    }
}

/// A single file-or-directory name tagged with its kind marker.
///
/// The marker is assigned from [`KindMarkers`] when building from a traversal,
/// or read verbatim from file content when parsing a persisted listing (the
/// parser does not validate markers against the configured set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    marker: char,
    name: String,
}

impl Entry {
    pub fn new(marker: char, name: &str) -> Self {
        let name = if name.len() > MAX_NAME_LEN {
            let mut end = MAX_NAME_LEN;
            while !name.is_char_boundary(end) {
                end -= 1;
            }
            warn!(
                name = %name,
                max = MAX_NAME_LEN,
                "entry name exceeds maximum length; truncating"
            );
            &name[..end]
        } else {
            name
        };
        Self {
            marker,
            name: name.to_string(),
        }
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical rendering `" {marker}:{name}"`, used both as the persisted
    /// line body and as the comparison key.
    pub fn rendering(&self) -> String {
        format!(" {}:{}", self.marker, self.name)
    }
}

/// Ordering by `(marker, name)`.
///
/// This equals byte-wise ordering of [`Entry::rendering`]: UTF-8 byte order is
/// code-point order and no character's encoding is a prefix of another's, so
/// comparing the marker then the name never disagrees with comparing the
/// rendered strings.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.marker
            .cmp(&other.marker)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
