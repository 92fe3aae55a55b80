//! Tree structure management operations for BTree.
//!
//! This module contains the tree-level queries that describe the overall
//! shape of the tree (size, height, node counts) and `clear`.

use crate::types::{BTree, Node};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K, V> BTree<K, V> {
    /// Returns the number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the branching factor `k` this tree was built with.
    pub fn branching_factor(&self) -> usize {
        self.branching_factor
    }

    /// Maximum number of entries any node may hold (`2k`).
    pub fn max_entries(&self) -> usize {
        2 * self.branching_factor
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        self.root.is_leaf()
    }

    /// Returns the number of levels in the tree. A lone leaf root counts as 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node: &Node<K, V> = &self.root;
        while let Some(child) = node.child_at(0) {
            height += 1;
            node = child;
        }
        height
    }

    /// Returns the total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        Self::node_count_recursive(&self.root)
    }

    fn node_count_recursive(node: &Node<K, V>) -> usize {
        1 + node
            .children
            .iter()
            .map(|child| Self::node_count_recursive(child))
            .sum::<usize>()
    }

    /// Returns the depth of every leaf, left to right. The root is at depth 0.
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        Self::collect_leaf_depths(&self.root, 0, &mut depths);
        depths
    }

    fn collect_leaf_depths(node: &Node<K, V>, depth: usize, depths: &mut Vec<usize>) {
        if node.is_leaf() {
            depths.push(depth);
            return;
        }
        for child in &node.children {
            Self::collect_leaf_depths(child, depth + 1, depths);
        }
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &Node<K, V> {
        &self.root
    }

    /// Remove all entries, leaving a single empty leaf root.
    pub fn clear(&mut self) {
        self.root = Box::new(Node::new_leaf(self.branching_factor));
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use crate::BTree;

    #[test]
    fn test_empty_tree_shape() {
        let tree = BTree::<i32, i32>::new(2).unwrap();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.leaf_depths(), vec![0]);
        assert!(tree.is_leaf_root());
        assert_eq!(tree.max_entries(), 4);
    }

    #[test]
    fn test_shape_after_first_root_split() {
        let mut tree = BTree::new(2).unwrap();
        for key in 0..5 {
            tree.insert(key, key).unwrap();
        }
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.leaf_depths(), vec![1, 1]);
        assert!(!tree.is_leaf_root());
        assert_eq!(tree.root().size(), 1);
    }

    #[test]
    fn test_clear_resets_tree() {
        let mut tree = BTree::new(2).unwrap();
        for key in 0..100 {
            tree.insert(key, key).unwrap();
        }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.print().count(), 0);
        assert_eq!(tree.branching_factor(), 2);

        tree.insert(1, 1).unwrap();
        assert_eq!(tree.get(&1), Ok(&1));
    }
}
