//! Validation and debugging utilities for BTree.
//!
//! This module contains invariant checking and the structural `Display`
//! rendering used when debugging splits.

use std::fmt;

use crate::error::{BTreeError, TreeResult};
use crate::types::{BTree, Node};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord, V> BTree<K, V> {
    /// Check if the tree maintains the B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_tree().map_err(|e| e.to_string())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    fn check_tree(&self) -> TreeResult<()> {
        let mut leaf_depth = None;
        let counted = self.check_node(&self.root, None, None, 0, &mut leaf_depth)?;

        if counted != self.len {
            return Err(BTreeError::corrupted_tree(
                "Length",
                &format!("{} entries in nodes, {} recorded", counted, self.len),
            ));
        }
        Ok(())
    }

    /// Recursively check a node and its subtree. Returns the number of
    /// entries found in the subtree.
    fn check_node(
        &self,
        node: &Node<K, V>,
        min_key: Option<&K>,
        max_key: Option<&K>,
        depth: usize,
        leaf_depth: &mut Option<usize>,
    ) -> TreeResult<usize> {
        let is_root = depth == 0;

        if node.branching_factor != self.branching_factor {
            return Err(BTreeError::corrupted_tree(
                "Node",
                &format!(
                    "branching factor {} at depth {}, tree uses {}",
                    node.branching_factor, depth, self.branching_factor
                ),
            ));
        }

        if node.entries.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err(BTreeError::corrupted_tree(
                "Ordering",
                &format!("unsorted or duplicate keys in node at depth {}", depth),
            ));
        }

        if node.size() > node.max_entries() {
            return Err(BTreeError::corrupted_tree(
                "Occupancy",
                &format!("node at depth {} holds {} entries", depth, node.size()),
            ));
        }
        if !is_root && node.size() < self.branching_factor {
            return Err(BTreeError::corrupted_tree(
                "Occupancy",
                &format!(
                    "non-root node at depth {} holds {} entries, minimum {}",
                    depth,
                    node.size(),
                    self.branching_factor
                ),
            ));
        }

        let first = node.entries.first().map(|(k, _)| k);
        let last = node.entries.last().map(|(k, _)| k);
        if let (Some(min), Some(first)) = (min_key, first) {
            if first <= min {
                return Err(BTreeError::corrupted_tree(
                    "Ordering",
                    &format!("key below parent separator at depth {}", depth),
                ));
            }
        }
        if let (Some(max), Some(last)) = (max_key, last) {
            if last >= max {
                return Err(BTreeError::corrupted_tree(
                    "Ordering",
                    &format!("key above parent separator at depth {}", depth),
                ));
            }
        }

        if node.is_leaf() {
            if !node.children.is_empty() {
                return Err(BTreeError::corrupted_tree(
                    "Structure",
                    &format!("leaf at depth {} owns children", depth),
                ));
            }
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(BTreeError::corrupted_tree(
                        "Balance",
                        &format!("leaf at depth {}, expected {}", depth, expected),
                    ));
                }
                Some(_) => {}
            }
            return Ok(node.size());
        }

        if node.children.len() != node.size() + 1 {
            return Err(BTreeError::corrupted_tree(
                "Structure",
                &format!(
                    "internal node at depth {} has {} entries and {} children",
                    depth,
                    node.size(),
                    node.children.len()
                ),
            ));
        }

        let mut count = node.size();
        for (i, child) in node.children.iter().enumerate() {
            let child_min = if i == 0 {
                min_key
            } else {
                node.entries.get(i - 1).map(|(k, _)| k)
            };
            let child_max = if i == node.size() {
                max_key
            } else {
                node.entries.get(i).map(|(k, _)| k)
            };
            count += self.check_node(child, child_min, child_max, depth + 1, leaf_depth)?;
        }
        Ok(count)
    }
}

// ============================================================================
// DEBUGGING UTILITIES
// ============================================================================

impl<K: fmt::Debug, V> fmt::Display for BTree<K, V> {
    /// Render the node structure, one node per line, indented by depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BTree[k={}, len={}, height={}]",
            self.branching_factor,
            self.len,
            self.height()
        )?;
        fmt_node(&self.root, f, 1)
    }
}

fn fmt_node<K: fmt::Debug, V>(
    node: &Node<K, V>,
    f: &mut fmt::Formatter<'_>,
    depth: usize,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    let keys: Vec<&K> = node.entries.iter().map(|(k, _)| k).collect();
    if node.is_leaf() {
        writeln!(f, "{}Leaf: {:?}", indent, keys)
    } else {
        writeln!(
            f,
            "{}Internal: {:?} ({} children)",
            indent,
            keys,
            node.children.len()
        )?;
        for child in &node.children {
            fmt_node(child, f, depth + 1)?;
        }
        Ok(())
    }
}
