//! This crate holds two classic ordered containers, mostly for educational
//! purposes, plus a heapsort built on the same array layout as the heap.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`. The [`tree::Tree`] here does no
//! balancing, so its height is anywhere between `lg N` and `N`. Visiting the
//! left subtree, then the subtree root, then the right subtree yields the
//! elements sorted; [`traversal`] offers that order and three others.
//!
//! ## Binary Heap
//!
//! A binary heap keeps a complete binary tree in an array so that every
//! element is no larger than its children. The smallest element is always at
//! the front and adding or removing one takes `O(lg N)`. See [`heap::BinaryHeap`].
//!
//! ## Logging
//!
//! Structural changes are reported through the [`log`] facade at `trace`
//! level. Install any logger to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod heap;
pub mod heapsort;
pub mod traversal;
pub mod tree;

pub use error::{Error, Result};
