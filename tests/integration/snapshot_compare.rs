//! End-to-end compare-mode tests: snapshot, mutate the tree, diff.

use dirsnap::config::SnapshotConfig;
use dirsnap::snapshot::{compare_snapshot, write_snapshot};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn single_config(listing: &Path) -> SnapshotConfig {
    SnapshotConfig {
        single_listing: true,
        listing_file_name: listing.to_string_lossy().into_owned(),
        ..SnapshotConfig::default()
    }
}

#[test]
fn unchanged_tree_reports_no_differences() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("keep.txt"), "x").unwrap();

    let listing = temp_dir.path().join("combined.lst");
    let config = single_config(&listing);
    write_snapshot(&root, &config).unwrap();

    let (_, report) = compare_snapshot(&root, &listing, &config).unwrap();
    assert!(report.is_empty());
}

#[test]
fn added_and_removed_entries_are_both_reported() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("old.txt"), "x").unwrap();

    let listing = temp_dir.path().join("combined.lst");
    let config = single_config(&listing);
    write_snapshot(&root, &config).unwrap();

    fs::remove_file(root.join("old.txt")).unwrap();
    fs::write(root.join("new.txt"), "x").unwrap();

    let (_, report) = compare_snapshot(&root, &listing, &config).unwrap();
    let text = report.to_string();
    assert!(text.contains("+++ F:new.txt"));
    assert!(text.contains("--- F:old.txt"));
}

#[test]
fn new_directory_reports_directory_and_entries_added() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("base.txt"), "x").unwrap();

    let listing = temp_dir.path().join("combined.lst");
    let config = single_config(&listing);
    write_snapshot(&root, &config).unwrap();

    fs::create_dir(root.join("fresh")).unwrap();
    fs::write(root.join("fresh").join("inner.txt"), "x").unwrap();

    let (_, report) = compare_snapshot(&root, &listing, &config).unwrap();
    let text = report.to_string();
    let fresh = root.join("fresh");
    assert!(text.contains(&format!("+++ [{}]", fresh.to_string_lossy())));
    assert!(text.contains("+++ F:inner.txt"));
    assert!(text.contains("+++ D:fresh"));
    assert_eq!(report.removed_count(), 0);
}

#[test]
fn file_replaced_by_directory_reports_kind_change() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("thing"), "x").unwrap();

    let listing = temp_dir.path().join("combined.lst");
    let config = single_config(&listing);
    write_snapshot(&root, &config).unwrap();

    fs::remove_file(root.join("thing")).unwrap();
    fs::create_dir(root.join("thing")).unwrap();

    let (_, report) = compare_snapshot(&root, &listing, &config).unwrap();
    let text = report.to_string();
    assert!(text.contains("+++ D:thing"));
    assert!(text.contains("--- F:thing"));
}

#[test]
fn absent_listing_degrades_to_everything_added() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "x").unwrap();

    let config = single_config(&temp_dir.path().join("never-written.lst"));
    let (_, report) = compare_snapshot(
        &root,
        Path::new(&config.listing_file_name),
        &config,
    )
    .unwrap();

    assert_eq!(report.removed_count(), 0);
    // Two directories, two entries under the root.
    assert_eq!(report.added_count(), 4);
}

#[test]
fn malformed_listing_degrades_to_everything_added() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("a.txt"), "x").unwrap();

    let listing = temp_dir.path().join("combined.lst");
    fs::write(&listing, "[/somewhere]\ngarbage without the grammar\n").unwrap();

    let config = single_config(&listing);
    let (_, report) = compare_snapshot(&root, &listing, &config).unwrap();
    assert_eq!(report.removed_count(), 0);
    assert_eq!(report.added_count(), 2);
}
