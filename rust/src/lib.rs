//! B-tree ordered map with a configurable branching factor.
//!
//! This crate provides a classic B-tree: every node stores key-value pairs,
//! internal nodes own one more child than they have entries, and with
//! branching factor `k` every non-root node holds between `k` and `2k`
//! entries. Insertion splits overflowing nodes on the way back up from the
//! leaf, so all leaves always sit at the same depth.
//!
//! Keys are unique. Lookups of absent keys and re-insertion of present keys
//! are reported through [`BTreeError`].
//!
//! ```
//! use btree::BTree;
//!
//! let mut tree = BTree::new(2).unwrap();
//! for key in [10, 20, 5, 6, 8] {
//!     tree.insert(key, key.to_string()).unwrap();
//! }
//!
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.get(&8).map(String::as_str), Ok("8"));
//! let keys: Vec<_> = tree.print().map(|(k, _)| *k).collect();
//! assert_eq!(keys, [5, 6, 8, 10, 20]);
//! ```

mod construction;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use construction::validate_branching_factor;
pub use error::{BTreeError, BTreeResult, BTreeResultExt, InitResult, KeyResult, ModifyResult};
pub use iteration::InOrderIter;
pub use types::{
    BTree, Entry, Node, DEFAULT_BRANCHING_FACTOR, MAX_BRANCHING_FACTOR, MIN_BRANCHING_FACTOR,
};
