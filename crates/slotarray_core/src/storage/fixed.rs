//! # Fixed Array
//!
//! A fixed-length block of slots, allocated once and addressed by index.

use super::iter::Iter;
use crate::error::{ArrayError, ArrayResult};
use std::fmt;

/// A fixed-length array of slots.
///
/// The length is chosen at construction and never changes. Every slot
/// always holds a value of `T`; use `Option<U>` slots when an explicit
/// empty sentinel is needed.
///
/// # Thread Safety
///
/// This array has no internal synchronization. Share it across threads
/// only behind your own lock.
///
/// # Example
///
/// ```rust
/// use slotarray_core::FixedArray;
///
/// let mut array: FixedArray<Option<u32>> = FixedArray::new(4, None)?;
/// array.set(2, Some(7))?;
/// assert_eq!(array.get(2)?, &Some(7));
/// # Ok::<(), slotarray_core::ArrayError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FixedArray<T> {
    /// The slot storage. Its length is the array size.
    slots: Box<[T]>,
}

impl<T: Clone> FixedArray<T> {
    /// Creates an array of `size` slots, each set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is zero.
    pub fn new(size: usize, fill: T) -> ArrayResult<Self> {
        let mut array = Self::from_fn(size, |_| fill.clone())?;
        array.clear(fill);
        Ok(array)
    }

    /// Overwrites every slot with `value`.
    pub fn clear(&mut self, value: T) {
        for slot in self.slots.iter_mut() {
            *slot = value.clone();
        }
    }
}

impl<T> FixedArray<T> {
    /// Creates an array of `size` slots, building each from its index.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is zero.
    pub fn from_fn<F>(size: usize, mut f: F) -> ArrayResult<Self>
    where
        F: FnMut(usize) -> T,
    {
        Self::try_from_fn(size, |index| Ok(f(index)))
    }

    /// Creates an array of `size` slots from a fallible builder.
    ///
    /// Stops at the first builder error; nothing is kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is zero, or the first error
    /// returned by `f`.
    pub fn try_from_fn<F>(size: usize, f: F) -> ArrayResult<Self>
    where
        F: FnMut(usize) -> ArrayResult<T>,
    {
        if size == 0 {
            return Err(ArrayError::InvalidArgument(
                "array size must be greater than zero".to_string(),
            ));
        }

        let slots = (0..size).map(f).collect::<ArrayResult<Vec<T>>>()?;

        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Returns the number of slots.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: an array has at least one slot.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Gets the value in slot `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> ArrayResult<&T> {
        self.slots.get(index).ok_or(ArrayError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Gets a mutable reference to slot `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> ArrayResult<&mut T> {
        let len = self.len();
        self.slots
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// Puts `value` into slot `index`, dropping the previous value.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> ArrayResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Puts `value` into slot `index` and returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    #[inline]
    pub fn replace(&mut self, index: usize, value: T) -> ArrayResult<T> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    /// Exchanges the values of slots `a` and `b`.
    ///
    /// Both indices are checked before either slot is touched.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for the first index that is `>= len()`.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) -> ArrayResult<()> {
        ArrayError::check_index(a, self.len())?;
        ArrayError::check_index(b, self.len())?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// Returns a fresh iterator positioned at slot 0.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterates mutably over every slot in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }

    /// Returns the slots as a mutable slice.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for FixedArray<T> {
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
