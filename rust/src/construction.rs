//! Construction and initialization logic for BTree and nodes.
//!
//! This module contains the construction and setup logic for the B-tree and
//! its nodes, including branching factor validation and default
//! implementations.

use crate::error::{BTreeError, InitResult};
use crate::types::{
    BTree, Node, DEFAULT_BRANCHING_FACTOR, MAX_BRANCHING_FACTOR, MIN_BRANCHING_FACTOR,
};

impl<K, V> BTree<K, V> {
    /// Create a B-tree with the given branching factor.
    ///
    /// # Arguments
    ///
    /// * `branching_factor` - Minimum entries per non-root node (`k`); nodes
    ///   hold at most `2k` entries. Must be between `MIN_BRANCHING_FACTOR`
    ///   and `MAX_BRANCHING_FACTOR`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if the branching factor is valid,
    /// `Err(BTreeError::InvalidBranchingFactor)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::<i32, String>::new(2).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::<i32, String>::new(0).is_err());
    /// assert!(BTree::<i32, String>::new(usize::MAX / 2).is_err());
    /// ```
    pub fn new(branching_factor: usize) -> InitResult<Self> {
        validate_branching_factor(branching_factor)?;

        Ok(Self {
            branching_factor,
            root: Box::new(Node::new_leaf(branching_factor)),
            len: 0,
        })
    }

    /// Create a B-tree with the default branching factor.
    ///
    /// This is equivalent to calling `new(DEFAULT_BRANCHING_FACTOR)`.
    pub fn with_default_branching_factor() -> Self {
        Self {
            branching_factor: DEFAULT_BRANCHING_FACTOR,
            root: Box::new(Node::new_leaf(DEFAULT_BRANCHING_FACTOR)),
            len: 0,
        }
    }
}

impl<K, V> Node<K, V> {
    /// Creates an empty leaf node.
    pub(crate) fn new_leaf(branching_factor: usize) -> Self {
        Self::with_leaf_flag(branching_factor, true)
    }

    /// Creates an empty internal node. Children are attached by the caller.
    pub(crate) fn new_internal(branching_factor: usize) -> Self {
        Self::with_leaf_flag(branching_factor, false)
    }

    pub(crate) fn with_leaf_flag(branching_factor: usize, leaf: bool) -> Self {
        // One slot beyond the maximum for the transient overflow before a split
        let reserved = 2 * branching_factor.min(MAX_BRANCHING_FACTOR) + 1;
        Self {
            branching_factor,
            entries: Vec::with_capacity(reserved),
            children: if leaf {
                Vec::new()
            } else {
                Vec::with_capacity(reserved + 1)
            },
            leaf,
        }
    }
}

impl<K, V> Default for BTree<K, V> {
    /// Create a B-tree with the default branching factor.
    fn default() -> Self {
        Self::with_default_branching_factor()
    }
}

/// Validate that a branching factor can build a B-tree.
pub fn validate_branching_factor(branching_factor: usize) -> InitResult<()> {
    if branching_factor < MIN_BRANCHING_FACTOR {
        Err(BTreeError::invalid_branching_factor(
            branching_factor,
            MIN_BRANCHING_FACTOR,
        ))
    } else if branching_factor > MAX_BRANCHING_FACTOR {
        Err(BTreeError::branching_factor_too_large(
            branching_factor,
            MAX_BRANCHING_FACTOR,
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btree_construction() {
        let tree = BTree::<i32, String>::new(2).unwrap();
        assert_eq!(tree.branching_factor, 2);
        assert_eq!(tree.len, 0);
        assert!(tree.root.leaf);
        assert!(tree.root.entries.is_empty());
    }

    #[test]
    fn test_btree_invalid_branching_factor() {
        let result = BTree::<i32, String>::new(0);
        assert!(matches!(result, Err(BTreeError::InvalidBranchingFactor(_))));
    }

    #[test]
    fn test_btree_rejects_oversized_branching_factor() {
        for branching_factor in [MAX_BRANCHING_FACTOR + 1, usize::MAX / 2, usize::MAX] {
            let result = BTree::<u64, u64>::new(branching_factor);
            assert!(
                matches!(result, Err(BTreeError::InvalidBranchingFactor(_))),
                "branching factor {} was accepted",
                branching_factor
            );
        }

        let tree = BTree::<u64, u64>::new(MAX_BRANCHING_FACTOR).unwrap();
        assert_eq!(tree.max_entries(), 2 * MAX_BRANCHING_FACTOR);
    }

    #[test]
    fn test_btree_default() {
        let tree = BTree::<i32, String>::default();
        assert_eq!(tree.branching_factor, DEFAULT_BRANCHING_FACTOR);
    }

    #[test]
    fn test_node_construction() {
        let leaf = Node::<i32, String>::new_leaf(3);
        assert!(leaf.leaf);
        assert!(leaf.entries.capacity() >= 7);

        let internal = Node::<i32, String>::new_internal(3);
        assert!(!internal.leaf);
        assert!(internal.children.capacity() >= 8);

        // Reservation never exceeds what the largest valid factor needs
        let wide = Node::<u64, u64>::new_internal(usize::MAX / 2);
        assert!(wide.entries.capacity() >= 2 * MAX_BRANCHING_FACTOR + 1);
        assert!(wide.entries.capacity() < 4 * MAX_BRANCHING_FACTOR);
    }

    #[test]
    fn test_validation() {
        assert!(validate_branching_factor(1).is_ok());
        assert!(validate_branching_factor(64).is_ok());
        assert!(validate_branching_factor(0).is_err());
        assert!(validate_branching_factor(MAX_BRANCHING_FACTOR).is_ok());
        assert!(validate_branching_factor(MAX_BRANCHING_FACTOR + 1).is_err());
    }
}
