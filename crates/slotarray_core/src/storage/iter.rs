//! # Array Iteration
//!
//! Two external iterators over a `FixedArray`. Both keep their position
//! outside the array, so any number of them can walk the same array.
//!
//! - `Iter` borrows the array for its whole lifetime.
//! - `Cursor` holds only an index. The array is passed in at each step,
//!   so the owner may write to it between steps and the cursor sees
//!   those writes.

use super::fixed::FixedArray;
use std::iter::FusedIterator;

/// Borrowing iterator over the slots of a `FixedArray`.
///
/// Created by [`FixedArray::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    /// The array being walked.
    array: &'a FixedArray<T>,
    /// Index of the next slot to yield.
    cursor: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(array: &'a FixedArray<T>) -> Self {
        Self { array, cursor: 0 }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.array.get(self.cursor).ok()?;
        self.cursor += 1;
        Some(entry)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Detached cursor over a `FixedArray`.
///
/// # Example
///
/// ```rust
/// use slotarray_core::{Cursor, FixedArray};
///
/// let mut array = FixedArray::from_fn(3, |i| i)?;
/// let mut cursor = Cursor::new();
///
/// assert_eq!(cursor.next(&array), Some(&0));
/// array.set(1, 42)?;
/// assert_eq!(cursor.next(&array), Some(&42));
/// # Ok::<(), slotarray_core::ArrayError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the next slot to yield.
    index: usize,
}

impl Cursor {
    /// Creates a cursor positioned at slot 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Yields the slot under the cursor and advances, or `None` once
    /// the cursor has passed the end of `array`.
    pub fn next<'a, T>(&mut self, array: &'a FixedArray<T>) -> Option<&'a T> {
        let entry = array.get(self.index).ok()?;
        self.index += 1;
        Some(entry)
    }

    /// Index of the next slot the cursor will yield.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }

    /// Moves the cursor back to slot 0.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
