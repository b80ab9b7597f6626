//! A generic, unbalanced Binary Search Tree (BST) container.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. This one is built out of `Entry`s.
//! An `Entry` stores one value and owns up to two child `Entry`s. The
//! invariants every [`Tree`] maintains are:
//!
//! 1. For every `Entry`, all the `Entry`s in its left subtree hold a value
//!    that compares less than its own value.
//! 2. For every `Entry`, all the `Entry`s in its right subtree hold a value
//!    that compares greater than its own value.
//! 3. No two `Entry`s hold values that compare equal.
//!
//! Unlike most BSTs, the ordering isn't taken from [`Ord`]. Each [`Tree`] is
//! handed a comparator when it's built, along with an optional "release"
//! function that receives every stored value when the tree lets go of it.
//!
//! The tree never rebalances itself. Searching, inserting, and removing take
//! `O(height)` and inserting already sorted values produces a tree whose
//! height is the number of values. Every walk over the tree is iterative so
//! such trees are slow but never overflow the stack.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new(|x: &i32, y: &i32| x.cmp(y));
//!
//! for value in [5, 3, 8, 1, 4] {
//!     tree.insert(&value);
//! }
//!
//! let mut pre_order = Vec::new();
//! tree.traverse(|value| pre_order.push(*value));
//! assert_eq!(pre_order, [5, 3, 1, 4, 8]);
//!
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.search(&3), None);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

pub use tree::Tree;
