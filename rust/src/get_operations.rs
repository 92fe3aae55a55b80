//! GET operations for BTree.
//!
//! This module contains the read operations for the B-tree: membership
//! testing and value retrieval. All of them descend from the root, checking
//! each node for an exact match before following the child that covers the
//! key's gap.

use crate::error::{BTreeError, KeyResult};
use crate::types::{BTree, Node};

impl<K: Ord, V> BTree<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Check if key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(1, "one").unwrap();
    /// assert!(tree.contains_key(&1));
    /// assert!(!tree.contains_key(&2));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        Self::get_recursive(&self.root, key).is_some()
    }

    /// Get a reference to the value associated with a key.
    ///
    /// # Returns
    ///
    /// A reference to the value if the key exists, or a `KeyNotFound` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::{BTree, BTreeError};
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(1, "one").unwrap();
    /// assert_eq!(tree.get(&1), Ok(&"one"));
    /// assert_eq!(tree.get(&2), Err(BTreeError::KeyNotFound));
    /// ```
    pub fn get(&self, key: &K) -> KeyResult<&V> {
        Self::get_recursive(&self.root, key).ok_or(BTreeError::KeyNotFound)
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// Keys cannot be modified through this reference, so the tree ordering
    /// is unaffected.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        Self::get_mut_recursive(&mut self.root, key)
    }

    /// Get value for a key with default.
    pub fn get_or_default<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    // ============================================================================
    // HELPERS FOR GET OPERATIONS
    // ============================================================================

    fn get_recursive<'a>(node: &'a Node<K, V>, key: &K) -> Option<&'a V> {
        match node.locate(key) {
            Ok(index) => node.entry_at(index).map(|(_, value)| value),
            Err(_) if node.is_leaf() => None,
            Err(child_index) => node
                .child_at(child_index)
                .and_then(|child| Self::get_recursive(child, key)),
        }
    }

    fn get_mut_recursive<'a>(node: &'a mut Node<K, V>, key: &K) -> Option<&'a mut V> {
        match node.locate(key) {
            Ok(index) => node.entries.get_mut(index).map(|(_, value)| value),
            Err(_) if node.is_leaf() => None,
            Err(child_index) => node
                .children
                .get_mut(child_index)
                .and_then(|child| Self::get_mut_recursive(child, key)),
        }
    }
}
