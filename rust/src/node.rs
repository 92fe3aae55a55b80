//! Node implementation for BTree.
//!
//! This module contains the node-level primitives: occupancy checks, the
//! binary search that drives both lookup and descent, local insertion and the
//! `split_child` balancing step. Nodes never decide *when* to split; that
//! policy lives in the tree.

use crate::error::{BTreeError, TreeResult};
use crate::types::{Entry, Node};

impl<K, V> Node<K, V> {
    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Returns the number of entries in this node.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Maximum number of entries this node may hold at rest (`2k`).
    pub fn max_entries(&self) -> usize {
        2 * self.branching_factor
    }

    /// Returns true if this node is at capacity.
    pub fn is_full(&self) -> bool {
        self.size() == self.max_entries()
    }

    /// Returns true if this node needs to be split by its parent.
    /// Only observable between a local insert and the owning `split_child`.
    pub fn is_overflowing(&self) -> bool {
        self.size() > self.max_entries()
    }

    /// Returns the entry at `index`, if any.
    pub fn entry_at(&self, index: usize) -> Option<&Entry<K, V>> {
        self.entries.get(index)
    }

    /// Returns the child at `index`, if any.
    pub fn child_at(&self, index: usize) -> Option<&Node<K, V>> {
        self.children.get(index).map(|child| child.as_ref())
    }

    // ============================================================================
    // STRUCTURE OPERATIONS
    // ============================================================================

    /// Append a child reference. Used when a brand-new root adopts the old one.
    pub(crate) fn add_child(&mut self, child: Box<Node<K, V>>) {
        self.children.push(child);
    }

    /// Remove and return the entry at `index`, shifting later entries left.
    pub(crate) fn pop_entry_at(&mut self, index: usize) -> TreeResult<Entry<K, V>> {
        if index >= self.size() {
            return Err(BTreeError::index_out_of_range(index, self.size()));
        }
        Ok(self.entries.remove(index))
    }
}

impl<K: Ord, V> Node<K, V> {
    // ============================================================================
    // SEARCH
    // ============================================================================

    /// Smallest index `i` with `entries[i].0 >= key`.
    ///
    /// This is both the insertion point for `key` and, for an internal node,
    /// the index of the child covering the gap where `key` would fall.
    pub fn find_index(&self, key: &K) -> usize {
        match self.entries.binary_search_by(|(k, _)| k.cmp(key)) {
            Ok(index) | Err(index) => index,
        }
    }

    /// Locate `key` in this node.
    ///
    /// Returns `Ok(index)` for an exact match, or `Err(index)` with the child
    /// index to descend into.
    pub(crate) fn locate(&self, key: &K) -> Result<usize, usize> {
        let index = self.find_index(key);
        match self.entries.get(index) {
            Some((k, _)) if k == key => Ok(index),
            _ => Err(index),
        }
    }

    // ============================================================================
    // INSERT OPERATIONS
    // ============================================================================

    /// Insert an entry into this node's own entries at its sorted position.
    ///
    /// Does not touch children and never splits. The key must not already be
    /// present in this node.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        let index = self.find_index(&key);
        debug_assert!(
            self.entries.get(index).map_or(true, |(k, _)| *k != key),
            "duplicate key inserted into node"
        );
        self.entries.insert(index, (key, value));
    }

    /// Split the overflowing child at `index`.
    ///
    /// The child's median entry moves up into this node, and the entries (and
    /// for internal children, the children) right of the median move into a
    /// new sibling placed at `index + 1`. Both halves end with exactly `k`
    /// entries.
    pub(crate) fn split_child(&mut self, index: usize) -> TreeResult<()> {
        let k = self.branching_factor;
        let child_count = self.children.len();
        let child = self.children.get_mut(index).ok_or_else(|| {
            BTreeError::invalid_split(index, &format!("node has {} children", child_count))
        })?;

        if !child.is_overflowing() {
            return Err(BTreeError::invalid_split(
                index,
                &format!(
                    "child holds {} entries, split needs {}",
                    child.size(),
                    child.max_entries() + 1
                ),
            ));
        }

        let (median_key, median_value) = child.pop_entry_at(k)?;

        let mut sibling = Node::with_leaf_flag(k, child.leaf);
        sibling.entries.extend(child.entries.drain(k..));
        if !child.leaf {
            sibling.children.extend(child.children.drain(k + 1..));
        }

        tracing::trace!(
            child_index = index,
            left_size = child.size(),
            right_size = sibling.size(),
            leaf = sibling.leaf,
            "split child node"
        );

        self.insert(median_key, median_value);
        self.children.insert(index + 1, Box::new(sibling));
        Ok(())
    }
}
