//! INSERT operations for BTree.
//!
//! Insertion always lands in a leaf. On the way back up, each parent checks
//! whether the child it just descended into has overflowed and splits it
//! before returning, so at most one node per level is ever over capacity and
//! only until its parent's call unwinds. The root has no parent; when it
//! overflows the tree grows a new root above it.

use crate::error::{BTreeError, BTreeResultExt, ModifyResult, TreeResult};
use crate::types::{BTree, Node};

impl<K: Ord, V> BTree<K, V> {
    /// Insert a key-value pair into the tree.
    ///
    /// Keys are unique. Inserting a key that is already present fails with
    /// `DuplicateKey` and leaves the tree unchanged; the stored value is not
    /// overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::{BTree, BTreeError};
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// assert!(tree.insert(1, "one").is_ok());
    /// assert_eq!(tree.insert(1, "uno"), Err(BTreeError::DuplicateKey));
    /// assert_eq!(tree.get(&1), Ok(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> ModifyResult<()> {
        if self.contains_key(&key) {
            return Err(BTreeError::DuplicateKey);
        }

        if self.root.is_leaf() {
            self.root.insert(key, value);
        } else {
            Self::insert_recursive(&mut self.root, key, value).with_operation("insert")?;
        }
        self.len += 1;

        if self.root.is_overflowing() {
            self.grow_root().with_operation("insert")?;
        }
        Ok(())
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Descend to the leaf covering `key`, insert there, and split any child
    /// that overflows once the recursive call has returned.
    fn insert_recursive(node: &mut Node<K, V>, key: K, value: V) -> TreeResult<()> {
        if node.is_leaf() {
            node.insert(key, value);
            return Ok(());
        }

        let child_index = node.find_index(&key);
        let child_count = node.children.len();
        let child = node
            .children
            .get_mut(child_index)
            .ok_or_else(|| BTreeError::index_out_of_range(child_index, child_count))?;
        Self::insert_recursive(child, key, value)?;

        if child.is_overflowing() {
            node.split_child(child_index)?;
        }
        Ok(())
    }

    /// Replace an overflowing root with a new internal root holding the old
    /// root's median. This is the only place the tree gains height.
    fn grow_root(&mut self) -> TreeResult<()> {
        let new_root = Box::new(Node::new_internal(self.branching_factor));
        let old_root = std::mem::replace(&mut self.root, new_root);
        self.root.add_child(old_root);
        self.root.split_child(0)?;

        tracing::debug!(
            height = self.height(),
            len = self.len,
            "root split, tree grew in height"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{BTree, BTreeError};

    fn keys<V>(tree: &BTree<i32, V>) -> Vec<i32> {
        tree.print().map(|(k, _)| *k).collect()
    }

    fn node_keys(node: &crate::Node<i32, &str>) -> Vec<i32> {
        node.entries.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_insert_into_leaf_root() {
        let mut tree = BTree::new(2).unwrap();
        for key in [3, 1, 4, 2] {
            tree.insert(key, "v").unwrap();
        }
        assert!(tree.root.is_leaf());
        assert_eq!(keys(&tree), vec![1, 2, 3, 4]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_root_split_scenario() {
        let mut tree = BTree::new(2).unwrap();
        for (key, value) in [(10, "ten"), (20, "twenty"), (5, "five"), (6, "six")] {
            tree.insert(key, value).unwrap();
        }
        assert_eq!(tree.height(), 1);

        tree.insert(8, "eight").unwrap();

        assert_eq!(tree.height(), 2);
        assert_eq!(node_keys(&tree.root), vec![8]);
        assert_eq!(tree.root.children.len(), 2);
        assert_eq!(node_keys(&tree.root.children[0]), vec![5, 6]);
        assert_eq!(node_keys(&tree.root.children[1]), vec![10, 20]);
        assert_eq!(keys(&tree), vec![5, 6, 8, 10, 20]);
        assert_eq!(tree.get(&8), Ok(&"eight"));
        assert_eq!(tree.get(&999), Err(BTreeError::KeyNotFound));
        assert_eq!(tree.insert(10, "again"), Err(BTreeError::DuplicateKey));
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_duplicate_leaves_tree_unchanged() {
        let mut tree = BTree::new(2).unwrap();
        for key in 0..20 {
            tree.insert(key, "original").unwrap();
        }
        let before: Vec<_> = tree.print().map(|(k, v)| (*k, *v)).collect();

        assert_eq!(tree.insert(7, "replacement"), Err(BTreeError::DuplicateKey));

        let after: Vec<_> = tree.print().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(before, after);
        assert_eq!(tree.len(), 20);
    }

    #[test]
    fn test_internal_split_propagates_to_root() {
        let mut tree = BTree::new(1).unwrap();
        for key in 1..=7 {
            tree.insert(key, "v").unwrap();
            assert!(tree.check_invariants(), "invariants broken after {}", key);
        }
        // Sequential inserts into a 2-3 tree: 7 keys fill a perfect tree of height 3
        assert_eq!(tree.height(), 3);
        assert_eq!(node_keys(&tree.root), vec![4]);
        assert_eq!(keys(&tree), (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_descending_inserts() {
        let mut tree = BTree::new(3).unwrap();
        for key in (0..200).rev() {
            tree.insert(key, "v").unwrap();
        }
        assert_eq!(keys(&tree), (0..200).collect::<Vec<_>>());
        assert!(tree.check_invariants());
    }
}
