//! Core types and data structures for BTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the B-tree implementation.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum branching factor for any B-tree.
pub const MIN_BRANCHING_FACTOR: usize = 1;

/// Maximum branching factor (up to 2048 entries per node). Every node reserves
/// room for `2k + 1` entries up front, so `k` is bounded.
pub const MAX_BRANCHING_FACTOR: usize = 1024;

/// Default branching factor (up to 16 entries per node).
pub const DEFAULT_BRANCHING_FACTOR: usize = 8;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// A key-value pair stored in a node.
pub type Entry<K, V> = (K, V);

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Ordered map backed by a classic B-tree.
///
/// Every node stores key-value pairs directly; internal nodes additionally
/// own one more child than they have entries. With branching factor `k`
/// every node other than the root holds between `k` and `2k` entries, and
/// all leaves sit at the same depth.
///
/// Keys are unique: inserting a key that is already present is rejected
/// rather than overwriting the stored value.
///
/// # Type Parameters
///
/// * `K` - Key type, must implement `Ord`
/// * `V` - Value type
///
/// # Examples
///
/// ```
/// use btree::{BTree, BTreeError};
///
/// let mut tree = BTree::new(2).unwrap();
/// tree.insert(10, "ten").unwrap();
/// tree.insert(5, "five").unwrap();
///
/// assert_eq!(tree.get(&5), Ok(&"five"));
/// assert_eq!(tree.insert(10, "again"), Err(BTreeError::DuplicateKey));
///
/// let keys: Vec<_> = tree.print().map(|(k, _)| *k).collect();
/// assert_eq!(keys, [5, 10]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(k log n)
/// - **Lookup**: O(log n)
/// - **In-order traversal**: O(n)
#[derive(Debug)]
pub struct BTree<K, V> {
    /// Minimum number of entries per non-root node; the maximum is twice this.
    pub(crate) branching_factor: usize,
    /// The root node of the tree.
    pub(crate) root: Box<Node<K, V>>,
    /// Number of entries stored in the tree.
    pub(crate) len: usize,
}

/// A single B-tree node.
///
/// Leaves have no children. Internal nodes own `entries.len() + 1` children
/// whenever the tree is at rest.
#[derive(Debug)]
pub struct Node<K, V> {
    /// Minimum number of entries for a non-root node.
    pub(crate) branching_factor: usize,
    /// Entries sorted ascending by key.
    pub(crate) entries: Vec<Entry<K, V>>,
    /// Owned child nodes, empty for leaves.
    pub(crate) children: Vec<Box<Node<K, V>>>,
    /// Whether this node is a leaf. A new root is internal before its first
    /// split even though it has a single child.
    pub(crate) leaf: bool,
}
