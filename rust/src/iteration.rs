//! In-order traversal for BTree.
//!
//! `print` hands out a lazy iterator rather than writing anywhere itself; the
//! caller decides where the pairs go. The iterator keeps an explicit stack of
//! `(node, next entry index)` frames instead of recursing, so it can be
//! suspended between items.

use crate::types::{BTree, Node};

/// Iterator over key-value pairs in ascending key order.
pub struct InOrderIter<'a, K, V> {
    stack: Vec<(&'a Node<K, V>, usize)>,
    remaining: usize,
}

impl<K, V> BTree<K, V> {
    /// Returns a lazy in-order traversal of all key-value pairs.
    ///
    /// The traversal borrows the tree immutably, so it can be taken any
    /// number of times and always yields keys in strictly ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// for key in [10, 20, 5, 6, 8] {
    ///     tree.insert(key, key * 2).unwrap();
    /// }
    /// let pairs: Vec<_> = tree.print().collect();
    /// assert_eq!(pairs[0], (&5, &10));
    /// assert_eq!(pairs.len(), 5);
    /// ```
    pub fn print(&self) -> InOrderIter<'_, K, V> {
        InOrderIter::new(&self.root, self.len)
    }
}

impl<'a, K, V> InOrderIter<'a, K, V> {
    fn new(root: &'a Node<K, V>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_leftmost(root);
        iter
    }

    /// Push `node` and its chain of first children down to a leaf.
    fn push_leftmost(&mut self, mut node: &'a Node<K, V>) {
        loop {
            self.stack.push((node, 0));
            match node.child_at(0) {
                Some(child) if !node.is_leaf() => node = child,
                _ => break,
            }
        }
    }
}

impl<'a, K, V> Iterator for InOrderIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, index) = self.stack.last_mut()?;
            let node: &'a Node<K, V> = *node;

            let Some((key, value)) = node.entry_at(*index) else {
                self.stack.pop();
                continue;
            };
            *index += 1;
            let next_child = *index;

            if !node.is_leaf() {
                if let Some(child) = node.child_at(next_child) {
                    self.push_leftmost(child);
                }
            }
            self.remaining = self.remaining.saturating_sub(1);
            return Some((key, value));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for InOrderIter<'_, K, V> {}

impl<K, V> std::iter::FusedIterator for InOrderIter<'_, K, V> {}
