//! A min-priority queue backed by a binary heap. The heap is a complete binary tree stored in a
//! `Vec`: the root is at index 0 and the children of index `i` are at `2i + 1` and `2i + 2`. Every
//! element is no larger than its children.
//!
//! Unlike [`std::collections::BinaryHeap`] this is a min-heap, it only needs [`PartialOrd`]
//! elements and it can remove arbitrary elements.
//!
//! # Examples
//!
//! ```
//! use compendium::heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.heapify([3, 2, 5]).unwrap();
//! heap.add(1).unwrap();
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert!(heap.remove(&2));
//!
//! assert_eq!(heap.poll(), Some(1));
//! assert_eq!(heap.poll(), Some(3));
//! assert_eq!(heap.poll(), Some(5));
//! assert_eq!(heap.poll(), None);
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// A min-heap. See the [module documentation][self] for details.
#[derive(Clone, Debug)]
pub struct BinaryHeap<T> {
    heap: Vec<T>,
}

impl<T> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryHeap<T> {
    /// Generate a new, empty `BinaryHeap`.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Generate a new, empty `BinaryHeap` with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// The number of elements in the heap.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap has no elements.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// The smallest element, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Consumes the heap, returning its elements in heap (array) order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }
}

impl<T> BinaryHeap<T>
where
    T: PartialOrd,
{
    /// Appends `elems` to the heap and restores the heap invariant bottom up in `O(n)`.
    ///
    /// Fails with [`Error::InvalidArgument`] if any element can't be compared with itself, in
    /// which case none of `elems` are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use compendium::heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::new();
    /// heap.heapify([3.0, 1.5, 2.0]).unwrap();
    /// assert_eq!(heap.peek(), Some(&1.5));
    ///
    /// assert!(heap.heapify([0.5, f64::NAN]).is_err());
    /// assert_eq!(heap.size(), 3);
    /// ```
    pub fn heapify<I>(&mut self, elems: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let elems: Vec<T> = elems.into_iter().collect();
        if !elems.iter().all(is_comparable) {
            return Err(Error::InvalidArgument);
        }

        self.heap.extend(elems);
        for i in (0..self.heap.len() / 2).rev() {
            self.sink(i);
        }
        log::trace!("heapified {} elements", self.heap.len());
        Ok(())
    }

    /// Adds `elem` in `O(lg N)`. Fails with [`Error::InvalidArgument`] if `elem` can't be compared
    /// with itself (e.g. `f64::NAN`), leaving the heap untouched.
    pub fn add(&mut self, elem: T) -> Result<()> {
        if !is_comparable(&elem) {
            return Err(Error::InvalidArgument);
        }

        self.heap.push(elem);
        self.swim(self.heap.len() - 1);
        Ok(())
    }

    /// Removes and returns the smallest element, or `None` if the heap is empty.
    pub fn poll(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Whether some element equals `elem`. This is a linear scan.
    pub fn contains(&self, elem: &T) -> bool {
        self.heap.iter().any(|x| x == elem)
    }

    /// Removes one element equal to `elem` in `O(N)`. Returns `false` if there wasn't one.
    pub fn remove(&mut self, elem: &T) -> bool {
        match self.heap.iter().position(|x| x == elem) {
            Some(i) => {
                self.remove_at(i);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element at index `i` of the backing array, or `None` if there is
    /// no such index.
    ///
    /// The last element takes the removed element's place. It either sinks below its new
    /// children or swims above its new parent, never both.
    pub fn remove_at(&mut self, i: usize) -> Option<T> {
        if i >= self.heap.len() {
            return None;
        }

        let removed = self.heap.swap_remove(i);
        log::trace!("removed index {} of {}", i, self.heap.len() + 1);

        // Nothing to fix if the last slot was removed.
        if i < self.heap.len() && self.sink(i) == i {
            self.swim(i);
        }
        Some(removed)
    }

    /// Checks the heap invariant: no element is larger than either of its children.
    pub fn is_min_heap(&self) -> bool {
        (1..self.heap.len()).all(|child| self.less(parent(child), child))
    }

    /// Whether the element at `i` is no larger than the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool {
        self.heap[i] <= self.heap[j]
    }

    /// Moves the element at `k` up while it is smaller than its parent.
    fn swim(&mut self, mut k: usize) {
        while k > 0 && self.heap[k] < self.heap[parent(k)] {
            self.heap.swap(k, parent(k));
            k = parent(k);
        }
    }

    /// Moves the element at `k` down while one of its children is smaller, always swapping with
    /// the smaller child. Returns where the element ended up.
    fn sink(&mut self, mut k: usize) -> usize {
        let size = self.heap.len();
        loop {
            let left = 2 * k + 1;
            let right = left + 1;
            if left >= size {
                return k;
            }

            let smallest = if right < size && self.less(right, left) {
                right
            } else {
                left
            };
            if self.less(k, smallest) {
                return k;
            }

            self.heap.swap(k, smallest);
            k = smallest;
        }
    }
}

impl<T> TryFrom<Vec<T>> for BinaryHeap<T>
where
    T: PartialOrd,
{
    type Error = Error;

    /// Builds a heap from `vec` with [`BinaryHeap::heapify`].
    fn try_from(vec: Vec<T>) -> Result<Self> {
        let mut heap = Self::with_capacity(vec.len());
        heap.heapify(vec)?;
        Ok(heap)
    }
}

/// Renders the elements in heap (array) order, e.g. `[1, 3, 2]`.
impl<T> fmt::Display for BinaryHeap<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.heap.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, "]")
    }
}

fn parent(k: usize) -> usize {
    (k - 1) / 2
}

fn is_comparable<T: PartialOrd>(elem: &T) -> bool {
    elem.partial_cmp(elem).is_some()
}
