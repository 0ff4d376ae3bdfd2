//! Ordered snapshot trees: the owned binary search tree, entry sets,
//! directory nodes, and the whole-tree snapshot.

use crate::tree::entry::Entry;
use std::cmp::Ordering;

/// Result of inserting into an ordered tree.
///
/// Dropping a duplicate is deliberate policy, not a failure: two values with
/// an equal key collapse to the first one inserted, with no mutation of the
/// tree and no error raised. Callers that care can log the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    DuplicateDropped,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// An ordered, duplicate-rejecting binary search tree.
///
/// Each node owns its children outright; there are no parent pointers and no
/// rebalancing is ever performed, so depth is insertion-order dependent and
/// lookups are O(n) worst case for adversarial orderings. In-order iteration
/// yields values in strictly ascending key order.
#[derive(Debug)]
pub struct OrderedTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T: Ord> OrderedTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value`, keeping the tree ordered. An equal key drops the value.
    pub fn insert(&mut self, value: T) -> InsertOutcome {
        let mut cur = &mut self.root;
        loop {
            match cur {
                None => {
                    *cur = Some(Node::leaf(value));
                    self.len += 1;
                    return InsertOutcome::Inserted;
                }
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => cur = &mut node.left,
                    Ordering::Greater => cur = &mut node.right,
                    Ordering::Equal => return InsertOutcome::DuplicateDropped,
                },
            }
        }
    }

    /// BST search driven by a caller-supplied comparator.
    ///
    /// `cmp` reports how the probe key compares to the visited value:
    /// `Less` descends left, `Greater` descends right, `Equal` is a match.
    pub fn find_by<F>(&self, mut cmp: F) -> Option<&T>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match cmp(&node.value) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Mutable variant of [`OrderedTree::find_by`].
    pub fn find_by_mut<F>(&mut self, mut cmp: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match cmp(&node.value) {
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-order iteration, ascending by key. Uses an explicit work stack so
    /// tree depth cannot exhaust the call stack.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

/// Default recursive drop glue would recurse once per level; a skewed tree
/// built from sorted input is exactly one level per value. Tear down with an
/// explicit work list instead.
impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
    }
}

/// In-order iterator over an [`OrderedTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T: Ord> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The ordered set of entries belonging to one directory.
///
/// Keyed by the entries' canonical rendering, compared byte-wise. Two
/// filesystem entries that render identically collapse to one.
#[derive(Debug, Default)]
pub struct EntrySet {
    entries: OrderedTree<Entry>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: Entry) -> InsertOutcome {
        self.entries.insert(entry)
    }

    /// Find an entry with a canonical rendering identical to `probe`'s.
    pub fn find(&self, probe: &Entry) -> Option<&Entry> {
        self.entries.find_by(|e| probe.cmp(e))
    }

    pub fn contains(&self, probe: &Entry) -> bool {
        self.find(probe).is_some()
    }

    pub fn iter(&self) -> Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One directory's identity plus its entry set.
///
/// The unit of comparison between two snapshots, matched by exact `path`
/// string equality.
#[derive(Debug)]
pub struct DirectoryNode {
    path: String,
    entries: EntrySet,
}

impl DirectoryNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entries: EntrySet::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn entries(&self) -> &EntrySet {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut EntrySet {
        &mut self.entries
    }
}

impl PartialEq for DirectoryNode {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for DirectoryNode {}

impl Ord for DirectoryNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

impl PartialOrd for DirectoryNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The whole-tree snapshot: an ordered tree of directory nodes keyed by path.
#[derive(Debug, Default)]
pub struct SnapshotTree {
    dirs: OrderedTree<DirectoryNode>,
}

impl SnapshotTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_dir(&mut self, node: DirectoryNode) -> InsertOutcome {
        self.dirs.insert(node)
    }

    pub fn find_dir(&self, path: &str) -> Option<&DirectoryNode> {
        self.dirs.find_by(|d| path.cmp(d.path()))
    }

    pub fn find_dir_mut(&mut self, path: &str) -> Option<&mut DirectoryNode> {
        self.dirs.find_by_mut(|d| path.cmp(d.path()))
    }

    /// Directories in byte-wise ascending path order.
    pub fn iter_dirs(&self) -> Iter<'_, DirectoryNode> {
        self.dirs.iter()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Total number of entries across all directories.
    pub fn entry_count(&self) -> usize {
        self.iter_dirs().map(|d| d.entries().len()).sum()
    }
}
