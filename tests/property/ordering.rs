//! Property-based tests for ordering and round-trip guarantees.

use dirsnap::listing::{parse, serialize};
use dirsnap::tree::{DirectoryNode, Entry, SnapshotTree};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._-]{1,20}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(name_strategy(), 1..5).prop_map(|segments| {
        let mut path = String::new();
        for segment in segments {
            path.push('/');
            path.push_str(&segment);
        }
        path
    })
}

proptest! {
    /// In-order traversal of a tree built from arbitrary paths yields paths
    /// in strict byte-wise ascending order, deduplicated.
    #[test]
    fn in_order_paths_are_strictly_ascending(paths in prop::collection::vec(path_strategy(), 0..50)) {
        let mut tree = SnapshotTree::new();
        for path in &paths {
            tree.insert_dir(DirectoryNode::new(path.clone()));
        }

        let ordered: Vec<&str> = tree.iter_dirs().map(|d| d.path()).collect();
        for window in ordered.windows(2) {
            prop_assert!(
                window[0].as_bytes() < window[1].as_bytes(),
                "paths out of order: {:?} then {:?}",
                window[0],
                window[1]
            );
        }

        let mut expected: Vec<&String> = paths.iter().collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(ordered.len(), expected.len());
    }

    /// Serializing then parsing reproduces the same directories and entries.
    #[test]
    fn serialize_parse_round_trip(
        dirs in prop::collection::vec(
            (path_strategy(), prop::collection::vec((prop::bool::ANY, name_strategy()), 0..10)),
            0..10,
        )
    ) {
        let mut tree = SnapshotTree::new();
        for (path, entries) in &dirs {
            let mut node = DirectoryNode::new(path.clone());
            for (is_dir, name) in entries {
                let marker = if *is_dir { 'D' } else { 'F' };
                node.entries_mut().insert(Entry::new(marker, name));
            }
            tree.insert_dir(node);
        }

        let text = serialize(&tree);
        let reparsed = parse(&text).unwrap();

        prop_assert_eq!(tree.len(), reparsed.len());
        prop_assert_eq!(tree.entry_count(), reparsed.entry_count());
        prop_assert_eq!(text, serialize(&reparsed));
    }

    /// The duplicate-drop policy: inserting the same rendering twice never
    /// grows an entry set.
    #[test]
    fn duplicate_entries_never_grow_the_set(names in prop::collection::vec(name_strategy(), 1..30)) {
        let mut node = DirectoryNode::new("/p");
        let mut unique = std::collections::BTreeSet::new();
        for name in &names {
            node.entries_mut().insert(Entry::new('F', name));
            node.entries_mut().insert(Entry::new('F', name));
            unique.insert(name.clone());
        }
        prop_assert_eq!(node.entries().len(), unique.len());
    }
}
