//! # Dynamic Array
//!
//! A growable array over a single `FixedArray` backing store.
//!
//! ## Growth
//!
//! ```text
//! append into a full store (count == capacity):
//!
//!   old: [a][b][c][d]            capacity 4
//!   new: [a][b][c][d][ ][ ][ ][ ]  capacity 8
//!
//! 1. allocate a store of 2 x capacity, every slot empty
//! 2. move the live range [0, count) across in index order
//! 3. drop the old store
//! ```
//!
//! Capacity only ever doubles. Removal never shrinks the store, so the
//! amortized O(1) append cost holds over any mix of operations.

use crate::config::ArrayConfig;
use crate::error::{ArrayError, ArrayResult};
use crate::storage::FixedArray;
use std::fmt;

/// A growable array with positional insert and remove-first-match.
///
/// Slots `[0, len())` hold live elements; slots `[len(), capacity())` are
/// allocated but empty.
///
/// # Thread Safety
///
/// This array has no internal synchronization. Share it across threads
/// only behind your own lock.
///
/// # Example
///
/// ```rust
/// use slotarray_core::DynamicArray;
///
/// let mut values = DynamicArray::new();
/// for v in [3, 1, 4, 1, 5] {
///     values.append(v);
/// }
/// values.remove(&1)?;
/// assert_eq!(values.iter().copied().collect::<Vec<_>>(), vec![3, 4, 1, 5]);
/// # Ok::<(), slotarray_core::ArrayError>(())
/// ```
pub struct DynamicArray<T> {
    /// Number of live elements.
    count: usize,
    /// Backing store. `None` marks an unused slot.
    store: FixedArray<Option<T>>,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with capacity 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: 0,
            store: Self::make_store(ArrayConfig::DEFAULT_INITIAL_CAPACITY),
        }
    }

    /// Creates an empty array with the configured initial capacity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the config fails validation.
    pub fn with_config(config: &ArrayConfig) -> ArrayResult<Self> {
        config.validate()?;
        Ok(Self {
            count: 0,
            store: Self::make_store(config.initial_capacity),
        })
    }

    /// Allocates a store of `capacity` empty slots. `capacity` is never zero.
    fn make_store(capacity: usize) -> FixedArray<Option<T>> {
        match FixedArray::from_fn(capacity.max(1), |_| None) {
            Ok(store) => store,
            Err(_) => unreachable!("store capacity is at least one"),
        }
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> ArrayResult<&T> {
        ArrayError::check_index(index, self.count)?;
        self.store
            .get(index)?
            .as_ref()
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.count,
            })
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> ArrayResult<&mut T> {
        let len = self.count;
        ArrayError::check_index(index, len)?;
        self.store
            .get_mut(index)?
            .as_mut()
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// Adds `value` after the last element, growing first if full.
    pub fn append(&mut self, value: T) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.store.as_mut_slice()[self.count] = Some(value);
        self.count += 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len())` one slot right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `index > len()`. The array is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> ArrayResult<()> {
        if index > self.count {
            return Err(ArrayError::InvalidArgument(format!(
                "insert index {index} outside [0, {}]",
                self.count
            )));
        }
        if self.count == self.capacity() {
            self.grow();
        }

        // Rightmost first, so no element is overwritten before it moves.
        for j in (index..self.count).rev() {
            self.store.swap(j, j + 1)?;
        }
        tracing::trace!(index, shifted = self.count - index, "shifted right for insert");

        self.store.set(index, Some(value))?;
        self.count += 1;
        Ok(())
    }

    /// Removes the first element equal to `value`, closing the gap.
    ///
    /// The vacated last slot is emptied, dropping whatever it held.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no element equals `value`. The array is
    /// unchanged.
    pub fn remove(&mut self, value: &T) -> ArrayResult<()>
    where
        T: PartialEq,
    {
        let mut found = None;
        for k in 0..self.count {
            if self.get(k)? == value {
                found = Some(k);
                break;
            }
        }
        let position = found.ok_or(ArrayError::NotFound)?;

        for j in position..self.count - 1 {
            self.store.swap(j, j + 1)?;
        }
        tracing::trace!(
            index = position,
            shifted = self.count - 1 - position,
            "shifted left for remove"
        );

        self.store.set(self.count - 1, None)?;
        self.count -= 1;
        Ok(())
    }

    /// Iterates over the live elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.store.iter().take(self.count).map(|slot| match slot {
            Some(value) => value,
            None => unreachable!("empty slot inside the live range"),
        })
    }

    /// Replaces the backing store with one of twice the capacity.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let mut new_store = Self::make_store(new_capacity);

        for (target, slot) in new_store
            .iter_mut()
            .zip(self.store.iter_mut())
            .take(self.count)
        {
            *target = slot.take();
        }
        self.store = new_store;

        tracing::debug!(
            old_capacity,
            new_capacity,
            len = self.count,
            "dynamic array grew"
        );
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
