//! End-to-end write-mode tests over real temporary directory trees.

use dirsnap::config::SnapshotConfig;
use dirsnap::listing;
use dirsnap::snapshot::write_snapshot;
use dirsnap::tree::{KindMarkers, TreeBuilder, WalkerConfig};
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
fn write_single_listing_matches_expected_format() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("a");
    fs::create_dir(&root).unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("note.txt"), "hello").unwrap();

    let listing = temp_dir.path().join("combined.lst");
    write_snapshot(&root, &single_config(&listing)).unwrap();

    let text = fs::read_to_string(&listing).unwrap();
    let root_str = root.to_string_lossy();
    assert_eq!(
        text,
        format!("[{root_str}]\n D:sub\n F:note.txt\n[{root_str}/sub]\n")
    );
}

#[test]
fn write_separate_listings_places_one_file_per_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::create_dir(root.join("x")).unwrap();
    fs::create_dir(root.join("x").join("deep")).unwrap();

    let summary = write_snapshot(&root, &SnapshotConfig::default()).unwrap();
    assert_eq!(summary.directories, 3);
    assert_eq!(summary.listings_written, 3);

    for dir in [
        root.clone(),
        root.join("x"),
        root.join("x").join("deep"),
    ] {
        assert!(dir.join("dir.lst").is_file(), "missing listing in {dir:?}");
    }
}

#[test]
fn rewrite_does_not_pick_up_earlier_listing_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("a.txt"), "x").unwrap();

    let config = SnapshotConfig::default();
    write_snapshot(&root, &config).unwrap();
    let summary = write_snapshot(&root, &config).unwrap();

    // The listing written by the first run must not appear as an entry.
    assert_eq!(summary.entries, 1);
    let text = fs::read_to_string(root.join("dir.lst")).unwrap();
    assert!(!text.contains("dir.lst"));
}

#[test]
fn written_listing_round_trips_through_parser() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("b.txt"), "x").unwrap();
    fs::write(root.join("sub").join("c.txt"), "x").unwrap();

    let listing = temp_dir.path().join("combined.lst");
    write_snapshot(&root, &single_config(&listing)).unwrap();

    let parsed = listing::parse_file(&listing).unwrap();
    let built = TreeBuilder::new(
        root.clone(),
        KindMarkers::default(),
        WalkerConfig::default(),
    )
    .build()
    .unwrap();

    assert_eq!(listing::serialize(&parsed), listing::serialize(&built));
}

#[test]
fn hidden_entries_are_skipped_unless_enabled() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join(".secret"), "x").unwrap();
    fs::write(root.join("plain.txt"), "x").unwrap();

    let listing = temp_dir.path().join("combined.lst");
    write_snapshot(&root, &single_config(&listing)).unwrap();
    let text = fs::read_to_string(&listing).unwrap();
    assert!(!text.contains(".secret"));

    let config = SnapshotConfig {
        include_hidden: true,
        ..single_config(&listing)
    };
    write_snapshot(&root, &config).unwrap();
    let text = fs::read_to_string(&listing).unwrap();
    assert!(text.contains(" F:.secret\n"));
}

#[test]
fn custom_markers_appear_in_listing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "x").unwrap();

    let listing = temp_dir.path().join("combined.lst");
    let config = SnapshotConfig {
        markers: KindMarkers {
            directory: '>',
            file: '-',
        },
        ..single_config(&listing)
    };
    write_snapshot(&root, &config).unwrap();

    let text = fs::read_to_string(&listing).unwrap();
    assert!(text.contains(" >:sub\n"));
    assert!(text.contains(" -:a.txt\n"));
}
