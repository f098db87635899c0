use std::fmt;

/// A `Result` specialized to this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when using the containers in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An element was rejected before it could break a container's ordering invariant. For the
    /// [`BinaryHeap`][crate::heap::BinaryHeap] this is an element that isn't comparable with
    /// itself (e.g. `f64::NAN`). The operation that returned this had no effect.
    InvalidArgument,
    /// The [`Tree`][crate::tree::Tree] changed size while a
    /// [`Traversal`][crate::traversal::Traversal] over it was still open.
    ConcurrentModification {
        /// The node count when the traversal was opened.
        expected: usize,
        /// The node count seen on the step that failed.
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "element cannot be ordered against itself"),
            Error::ConcurrentModification { expected, found } => write!(
                f,
                "tree was modified during traversal (expected {expected} nodes, found {found})"
            ),
        }
    }
}

impl std::error::Error for Error {}
