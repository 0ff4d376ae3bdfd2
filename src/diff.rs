//! Structural diff between two snapshot trees.

use crate::tree::entry::Entry;
use crate::tree::node::SnapshotTree;
use std::fmt;

/// Which side of the comparison a reported line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Added,
    Removed,
}

impl Direction {
    fn sigil(self) -> &'static str {
        match self {
            Direction::Added => "+++",
            Direction::Removed => "---",
        }
    }
}

/// One structured line of the change report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    /// A directory present on one side only.
    Directory { direction: Direction, path: String },
    /// An entry present on one side only, under the directory reported by
    /// the preceding `Directory` or `Context` line.
    Entry {
        direction: Direction,
        marker: char,
        name: String,
    },
    /// A directory present on both sides, printed only to anchor the entry
    /// lines that follow it.
    Context { path: String },
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffLine::Directory { direction, path } => {
                write!(f, "{} [{}]", direction.sigil(), path)
            }
            DiffLine::Entry {
                direction,
                marker,
                name,
            } => write!(f, "{} {}:{}", direction.sigil(), marker, name),
            DiffLine::Context { path } => write!(f, "[{}]", path),
        }
    }
}

/// The full change report: the added pass followed by the removed pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DiffReport {
    lines: Vec<DiffLine>,
}

impl DiffReport {
    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn count(&self, direction: Direction) -> usize {
        self.lines
            .iter()
            .filter(|l| match l {
                DiffLine::Directory { direction: d, .. }
                | DiffLine::Entry { direction: d, .. } => *d == direction,
                DiffLine::Context { .. } => false,
            })
            .count()
    }

    pub fn added_count(&self) -> usize {
        self.count(Direction::Added)
    }

    pub fn removed_count(&self) -> usize {
        self.count(Direction::Removed)
    }

    /// Lines of one pass with direction and sigil stripped, for symmetry
    /// checks between a report's added side and its mirror's removed side.
    pub fn pass(&self, direction: Direction) -> Vec<String> {
        let mut out = Vec::new();
        for line in &self.lines {
            match line {
                DiffLine::Directory { direction: d, path } if *d == direction => {
                    out.push(format!("[{path}]"));
                }
                DiffLine::Entry {
                    direction: d,
                    marker,
                    name,
                } if *d == direction => {
                    out.push(format!("{marker}:{name}"));
                }
                _ => {}
            }
        }
        out
    }

    fn push(&mut self, line: DiffLine) {
        self.lines.push(line);
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Compares two snapshot trees and reports structural deltas.
pub struct Differ;

impl Differ {
    /// Produce the change report: an added pass over `current` against
    /// `previous`, then a removed pass with the arguments swapped.
    ///
    /// Matching is by exact path equality for directories and by identical
    /// canonical rendering for entries; a kind change therefore reports as
    /// one removal plus one addition, and a renamed directory as a full
    /// removal plus a full addition. Never fails; absence of a match is the
    /// expected, common case.
    pub fn diff(previous: &SnapshotTree, current: &SnapshotTree) -> DiffReport {
        let mut report = DiffReport::default();
        Self::compare(current, previous, Direction::Added, &mut report);
        Self::compare(previous, current, Direction::Removed, &mut report);
        report
    }

    /// One directional pass: report everything in `subject` that `other`
    /// lacks.
    fn compare(
        subject: &SnapshotTree,
        other: &SnapshotTree,
        direction: Direction,
        report: &mut DiffReport,
    ) {
        for dir in subject.iter_dirs() {
            match other.find_dir(dir.path()) {
                None => {
                    report.push(DiffLine::Directory {
                        direction,
                        path: dir.path().to_string(),
                    });
                    for entry in dir.entries().iter() {
                        report.push(Self::entry_line(direction, entry));
                    }
                }
                Some(counterpart) => {
                    let missing: Vec<&Entry> = dir
                        .entries()
                        .iter()
                        .filter(|e| !counterpart.entries().contains(e))
                        .collect();
                    if !missing.is_empty() {
                        report.push(DiffLine::Context {
                            path: dir.path().to_string(),
                        });
                        for entry in missing {
                            report.push(Self::entry_line(direction, entry));
                        }
                    }
                }
            }
        }
    }

    fn entry_line(direction: Direction, entry: &Entry) -> DiffLine {
        DiffLine::Entry {
            direction,
            marker: entry.marker(),
            name: entry.name().to_string(),
        }
    }
}
