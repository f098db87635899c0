//! Walking a [`Tree`] in one of four orders.
//!
//! A [`Traversal`] is a single-pass cursor. It keeps its own stack (or queue) of nodes still to
//! visit plus the tree's size when it was opened, and does one step of its algorithm per call to
//! [`Traversal::next`]. It doesn't hold a borrow of the tree, so the tree can be changed while the
//! traversal is open. When that happens the next step notices that the size moved and fails with
//! [`Error::ConcurrentModification`] instead of yielding stale data.
//!
//! Only the node count is compared. Adding one element and removing another between two steps
//! goes unnoticed.
//!
//! [`Iter`] runs the same algorithms behind a shared borrow, which already rules out
//! modification, so it's a plain [`Iterator`].

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::tree::{NodeId, Tree};

/// The order in which a traversal visits the nodes of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Each node before its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. Yields elements sorted.
    InOrder,
    /// Both subtrees (left first) before the node itself.
    PostOrder,
    /// Breadth first, one level at a time from left to right.
    LevelOrder,
}

impl TraversalOrder {
    /// Every order, in declaration order.
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];
}

#[derive(Clone, Debug)]
enum State {
    /// Pop and visit, then push the right child and the left child so the left is visited first.
    PreOrder { stack: Vec<NodeId> },
    /// `cursor` is the subtree whose left spine hasn't been pushed yet.
    InOrder {
        stack: Vec<NodeId>,
        cursor: Option<NodeId>,
    },
    /// Filled when the traversal opens: a root-right-left walk pushed onto a stack, which pops in
    /// left-right-root order.
    PostOrder { stack: Vec<NodeId> },
    LevelOrder { queue: VecDeque<NodeId> },
    Finished,
}

/// A detached, non-restartable walk over a [`Tree`]. Create one with [`Tree::traverse`].
///
/// # Examples
///
/// ```
/// use compendium::tree::Tree;
/// use compendium::traversal::TraversalOrder;
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
/// let mut traversal = tree.traverse(TraversalOrder::PostOrder);
///
/// let mut visited = Vec::new();
/// while let Some(value) = traversal.next(&tree) {
///     visited.push(*value.unwrap());
/// }
/// assert_eq!(visited, [1, 3, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct Traversal {
    order: TraversalOrder,
    expected_count: usize,
    state: State,
}

impl Traversal {
    pub(crate) fn new<T>(tree: &Tree<T>, order: TraversalOrder) -> Self {
        let root = tree.root();
        let state = match order {
            TraversalOrder::PreOrder => State::PreOrder {
                stack: root.into_iter().collect(),
            },
            TraversalOrder::InOrder => State::InOrder {
                stack: Vec::new(),
                cursor: root,
            },
            TraversalOrder::PostOrder => {
                let mut pending: Vec<_> = root.into_iter().collect();
                let mut stack = Vec::with_capacity(tree.size());
                while let Some(id) = pending.pop() {
                    let node = tree.node(id);
                    stack.push(id);
                    pending.extend(node.left);
                    pending.extend(node.right);
                }
                State::PostOrder { stack }
            }
            TraversalOrder::LevelOrder => State::LevelOrder {
                queue: root.into_iter().collect(),
            },
        };

        Self {
            order,
            expected_count: tree.size(),
            state,
        }
    }

    /// The order this traversal visits nodes in.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Whether the traversal has nothing left to yield.
    pub fn is_finished(&self) -> bool {
        match &self.state {
            State::PreOrder { stack } | State::PostOrder { stack } => stack.is_empty(),
            State::InOrder { stack, cursor } => stack.is_empty() && cursor.is_none(),
            State::LevelOrder { queue } => queue.is_empty(),
            State::Finished => true,
        }
    }

    /// Performs one step of the traversal over `tree`, which must be the tree this traversal was
    /// opened on.
    ///
    /// Returns `None` once every node was visited. If `tree` changed size since the traversal was
    /// opened, the step fails with [`Error::ConcurrentModification`] and the traversal is
    /// finished: every later call returns `None`.
    pub fn next<'t, T>(&mut self, tree: &'t Tree<T>) -> Option<Result<&'t T>> {
        if self.is_finished() {
            self.state = State::Finished;
            return None;
        }

        let found = tree.size();
        if found != self.expected_count {
            log::debug!(
                "{:?} traversal saw {} nodes, expected {}",
                self.order,
                found,
                self.expected_count
            );
            self.state = State::Finished;
            return Some(Err(Error::ConcurrentModification {
                expected: self.expected_count,
                found,
            }));
        }

        self.step(tree).map(Ok)
    }

    /// Advances the algorithm by one node without checking the tree's size. Ends the traversal
    /// if it runs out of nodes or meets a node that no longer exists.
    fn step<'t, T>(&mut self, tree: &'t Tree<T>) -> Option<&'t T> {
        let visited = self.visit(tree);
        if visited.is_none() {
            self.state = State::Finished;
        }
        visited
    }

    fn visit<'t, T>(&mut self, tree: &'t Tree<T>) -> Option<&'t T> {
        let node = match &mut self.state {
            State::PreOrder { stack } => {
                let node = tree.try_node(stack.pop()?)?;
                stack.extend(node.right);
                stack.extend(node.left);
                node
            }
            State::InOrder { stack, cursor } => {
                // Dig left
                while let Some(id) = *cursor {
                    stack.push(id);
                    *cursor = tree.try_node(id).and_then(|n| n.left);
                }
                let node = tree.try_node(stack.pop()?)?;
                *cursor = node.right;
                node
            }
            State::PostOrder { stack } => tree.try_node(stack.pop()?)?,
            State::LevelOrder { queue } => {
                let node = tree.try_node(queue.pop_front()?)?;
                queue.extend(node.left);
                queue.extend(node.right);
                node
            }
            State::Finished => return None,
        };
        Some(&node.value)
    }
}

/// An iterator over a [`Tree`]'s elements in some [`TraversalOrder`]. Create one with
/// [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'t, T> {
    tree: &'t Tree<T>,
    traversal: Traversal,
}

impl<'t, T> Iter<'t, T> {
    pub(crate) fn new(tree: &'t Tree<T>, traversal: Traversal) -> Self {
        Self { tree, traversal }
    }
}

impl<'t, T> Iterator for Iter<'t, T> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item> {
        // The shared borrow of `tree` keeps its size equal to the snapshot.
        self.traversal.step(self.tree)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
