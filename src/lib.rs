//! This crate exposes a Binary Search Tree (BST) over unique keys that can be
//! rebuilt into minimal height on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the number of edges
//! on the longest path from the root `Node` down to a leaf `Node`. When a tree is
//! built by repeatedly making the middle of a sorted run of keys the root of a
//! subtree, the height is limited to `⌊lg N⌋` where `N` is the number of keys.
//!
//! ## Balancing
//!
//! [`Tree`] does not rebalance itself while keys are inserted and deleted.
//! Building a tree with [`Tree::from_sorted`] or `collect` gives a height-balanced
//! tree (for every node the heights of its two subtrees differ by at most one),
//! and [`Tree::rebalance`] rebuilds any tree into that shape again.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [4, 3, 5, 2, 6, 1, 7] {
//!     tree.insert(key).unwrap();
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.height(), 2);
//! ```

#![deny(missing_docs)]

mod error;
pub mod traversal;
pub mod tree;
mod util;


pub use error::DuplicateKey;
pub use tree::{Node, Tree};
pub use util::sorted_unique;
