//! An unbalanced Binary Search Tree holding a set of unique, ordered elements. Nodes live in an
//! arena owned by the `Tree` and refer to their children by index, so a
//! [`Traversal`][crate::traversal::Traversal] can keep its place without borrowing the tree.
//!
//! # Examples
//!
//! ```
//! use compendium::tree::Tree;
//! use compendium::traversal::TraversalOrder;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.add(2));
//! assert!(tree.add(1));
//! assert!(tree.add(3));
//!
//! // Elements are unique.
//! assert!(!tree.add(1));
//! assert_eq!(tree.size(), 3);
//!
//! let sorted: Vec<_> = tree.iter(TraversalOrder::InOrder).copied().collect();
//! assert_eq!(sorted, [1, 2, 3]);
//!
//! assert!(tree.remove(&2));
//! assert!(!tree.contains(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::traversal::{Iter, Traversal, TraversalOrder};

/// Index of a node in a [`Tree`]'s arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// An owning slot for a child. `None` marks the empty pointer at the bottom of a subtree.
pub(crate) type Link = Option<NodeId>;

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A Binary Search Tree. Every element in a node's left subtree is smaller than the node's
/// element and every element in its right subtree is larger. The tree does no rebalancing, so
/// inserting sorted input degrades it into a list.
#[derive(Clone)]
pub struct Tree<T> {
    /// Vacant slots are nodes that were removed and are waiting in `free` to be reused.
    nodes: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
    root: Link,
    node_count: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter(TraversalOrder::InOrder))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            node_count: 0,
        }
    }

    /// The number of elements in the tree.
    pub fn size(&self) -> usize {
        self.node_count
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns whether the tree holds an element equal to `elem`. Takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compendium::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("b");
    ///
    /// assert!(tree.contains(&"b"));
    /// assert!(!tree.contains(&"a"));
    /// ```
    pub fn contains(&self, elem: &T) -> bool
    where
        T: Ord,
    {
        self.contains_in(self.root, elem)
    }

    /// Adds `elem` to the tree at the leaf position its ordering dictates. Returns `false`,
    /// leaving the tree untouched, if an equal element is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use compendium::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add('A'));
    /// assert!(!tree.add('A'));
    /// assert!(tree.add('B'));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn add(&mut self, elem: T) -> bool
    where
        T: Ord,
    {
        if self.contains(&elem) {
            return false;
        }
        let root = self.add_at(self.root, elem);
        self.root = Some(root);
        self.node_count += 1;
        log::trace!("added node {:?}, size is now {}", root, self.node_count);
        true
    }

    /// Removes the element equal to `elem`. Returns `false` if there wasn't one.
    ///
    /// A node with two children takes the value of its in-order successor (the smallest element
    /// of its right subtree), and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use compendium::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert!(tree.contains(&3) && tree.contains(&8));
    /// ```
    pub fn remove(&mut self, elem: &T) -> bool
    where
        T: Ord,
    {
        if !self.contains(elem) {
            return false;
        }
        self.root = self.remove_from(self.root, elem);
        self.node_count -= 1;
        log::trace!("removed a node, size is now {}", self.node_count);
        true
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a tree with only a root has a height of 1.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Opens a [`Traversal`] over the tree in the given order. The traversal doesn't borrow the
    /// tree: each step is driven with [`Traversal::next`], which fails if the tree changed size
    /// since this call.
    ///
    /// # Examples
    ///
    /// ```
    /// use compendium::tree::Tree;
    /// use compendium::traversal::TraversalOrder;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut traversal = tree.traverse(TraversalOrder::PreOrder);
    ///
    /// assert_eq!(traversal.next(&tree), Some(Ok(&2)));
    ///
    /// tree.remove(&3);
    /// assert!(matches!(traversal.next(&tree), Some(Err(_))));
    /// assert_eq!(traversal.next(&tree), None);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal {
        Traversal::new(self, order)
    }

    /// Iterates over the tree's elements in the given order. The iterator borrows the tree so
    /// it can't be modified until the iterator is dropped.
    pub fn iter(&self, order: TraversalOrder) -> Iter<'_, T> {
        Iter::new(self, self.traverse(order))
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    /// Looks up a node that is known to be live.
    ///
    /// ## Panics
    ///
    /// When `id` refers to a removed node.
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.try_node(id).expect("live link points at a vacant slot")
    }

    /// Looks up a node that may have been removed since `id` was handed out.
    pub(crate) fn try_node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect("live link points at a vacant slot")
    }

    fn alloc(&mut self, value: T) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = Some(Node::leaf(value));
                id
            }
            None => {
                self.nodes.push(Some(Node::leaf(value)));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Detaches a node from the arena, returning its slot to the free list.
    fn release(&mut self, id: NodeId) -> Node<T> {
        let node = self.nodes[id.0]
            .take()
            .expect("released a node that was already vacant");
        self.free.push(id);
        node
    }

    fn contains_in(&self, link: Link, elem: &T) -> bool
    where
        T: Ord,
    {
        let Some(id) = link else {
            return false;
        };
        let node = self.node(id);
        match elem.cmp(&node.value) {
            Ordering::Less => self.contains_in(node.left, elem),
            Ordering::Equal => true,
            Ordering::Greater => self.contains_in(node.right, elem),
        }
    }

    /// Inserts `elem` into the subtree at `link` and returns the subtree's (possibly new) root.
    fn add_at(&mut self, link: Link, elem: T) -> NodeId
    where
        T: Ord,
    {
        let Some(id) = link else {
            return self.alloc(elem);
        };
        let node = self.node(id);
        let (left, right) = (node.left, node.right);
        if elem < node.value {
            let new_left = self.add_at(left, elem);
            self.node_mut(id).left = Some(new_left);
        } else {
            let new_right = self.add_at(right, elem);
            self.node_mut(id).right = Some(new_right);
        }

        if cfg!(debug_assertions) {
            let node = self.node(id);
            if let Some(left) = node.left {
                assert!(self.node(left).value < node.value);
            }
            if let Some(right) = node.right {
                assert!(self.node(right).value > node.value);
            }
        }
        id
    }

    /// Removes `elem` from the subtree at `link` and returns the subtree's new root.
    fn remove_from(&mut self, link: Link, elem: &T) -> Link
    where
        T: Ord,
    {
        let id = link?;
        let node = self.node(id);
        let (left, right) = (node.left, node.right);
        match elem.cmp(&node.value) {
            Ordering::Less => {
                let new_left = self.remove_from(left, elem);
                self.node_mut(id).left = new_left;
                Some(id)
            }
            Ordering::Greater => {
                let new_right = self.remove_from(right, elem);
                self.node_mut(id).right = new_right;
                Some(id)
            }
            Ordering::Equal => match (left, right) {
                (None, _) => {
                    self.release(id);
                    right
                }
                (_, None) => {
                    self.release(id);
                    left
                }
                (Some(_), Some(right)) => {
                    let (new_right, successor) = self.take_min(right);
                    let node = self.node_mut(id);
                    node.value = successor;
                    node.right = new_right;
                    Some(id)
                }
            },
        }
    }

    /// Removes the smallest node of the subtree rooted at `id`. Returns the subtree's new root
    /// and the removed value.
    fn take_min(&mut self, id: NodeId) -> (Link, T) {
        let left = self.node(id).left;
        match left {
            Some(left) => {
                let (new_left, min) = self.take_min(left);
                self.node_mut(id).left = new_left;
                (Some(id), min)
            }
            None => {
                let node = self.release(id);
                (node.right, node.value)
            }
        }
    }

    fn height_of(&self, link: Link) -> usize {
        match link {
            None => 0,
            Some(id) => {
                let node = self.node(id);
                self.height_of(node.left).max(self.height_of(node.right)) + 1
            }
        }
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    /// Adds every element, skipping those already in the tree.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
