//! In-place heapsort, `O(n lg n)` with no extra allocation.
//!
//! The slice is first arranged into a max-heap (the array layout used by
//! [`BinaryHeap`][crate::heap::BinaryHeap], with the comparison flipped). The largest element is
//! then repeatedly swapped to the end of the shrinking heap prefix, which leaves the slice sorted
//! ascending.
//!
//! # Examples
//!
//! ```
//! use compendium::heapsort::heapsort;
//!
//! let mut array = [10, 4, 6, 8, 13, 2, 3];
//! heapsort(&mut array);
//! assert_eq!(array, [2, 3, 4, 6, 8, 10, 13]);
//! ```

/// Sorts `slice` ascending in place. Not stable.
pub fn heapsort<T>(slice: &mut [T])
where
    T: Ord,
{
    let size = slice.len();
    for i in (0..size / 2).rev() {
        sink(slice, size, i);
    }

    for end in (1..size).rev() {
        slice.swap(0, end);
        sink(slice, end, 0);
    }
}

/// Moves the element at `i` down the max-heap in `slice[..size]` until neither child is larger.
fn sink<T>(slice: &mut [T], size: usize, mut i: usize)
where
    T: Ord,
{
    loop {
        let left = 2 * i + 1;
        let right = left + 1;
        let mut largest = i;

        if left < size && slice[left] > slice[largest] {
            largest = left;
        }
        if right < size && slice[right] > slice[largest] {
            largest = right;
        }

        if largest == i {
            return;
        }
        slice.swap(largest, i);
        i = largest;
    }
}
