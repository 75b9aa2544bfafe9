//! # 2-D Grid
//!
//! A row-major grid stored as an array of rows, each row its own
//! `FixedArray`.

use crate::error::{ArrayError, ArrayResult};
use crate::storage::{FixedArray, Iter};
use std::fmt;

/// A two-dimensional grid of `num_rows x num_cols` slots.
///
/// The grid owns its row array and every row in it. Both dimensions are
/// fixed at construction.
///
/// # Example
///
/// ```rust
/// use slotarray_core::Grid2D;
///
/// let mut grid = Grid2D::new(2, 3, 0)?;
/// grid.set(1, 2, 9)?;
/// assert_eq!(grid.get(1, 2)?, &9);
/// assert_eq!(grid.get(0, 0)?, &0);
/// # Ok::<(), slotarray_core::ArrayError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid2D<T> {
    /// One entry per row.
    rows: FixedArray<FixedArray<T>>,
}

impl<T: Clone> Grid2D<T> {
    /// Creates a grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero.
    pub fn new(num_rows: usize, num_cols: usize, fill: T) -> ArrayResult<Self> {
        if num_rows == 0 || num_cols == 0 {
            return Err(ArrayError::InvalidArgument(format!(
                "grid dimensions must be greater than zero, got {num_rows}x{num_cols}"
            )));
        }

        let rows = FixedArray::try_from_fn(num_rows, |_| FixedArray::new(num_cols, fill.clone()))?;

        Ok(Self { rows })
    }

    /// Sets every cell to `value`, one row at a time.
    pub fn clear(&mut self, value: T) {
        for row in self.rows.iter_mut() {
            row.clear(value.clone());
        }
    }
}

impl<T> Grid2D<T> {
    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns, read from the first row.
    #[inline]
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.rows.get(0).map_or(0, FixedArray::len)
    }

    /// Validates `(row, col)` against both dimensions before any access.
    fn check(&self, row: usize, col: usize) -> ArrayResult<()> {
        ArrayError::check_index(row, self.num_rows())?;
        ArrayError::check_index(col, self.num_cols())
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is outside its dimension.
    pub fn get(&self, row: usize, col: usize) -> ArrayResult<&T> {
        self.check(row, col)?;
        self.rows.get(row)?.get(col)
    }

    /// Gets a mutable reference to the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is outside its dimension.
    pub fn get_mut(&mut self, row: usize, col: usize) -> ArrayResult<&mut T> {
        self.check(row, col)?;
        self.rows.get_mut(row)?.get_mut(col)
    }

    /// Puts `value` into the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is outside its dimension.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> ArrayResult<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Gets row `index` as a read-only array.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= num_rows()`.
    pub fn row(&self, index: usize) -> ArrayResult<&FixedArray<T>> {
        self.rows.get(index)
    }

    /// Iterates over the rows. Each row iterates over its cells.
    #[must_use]
    pub fn rows(&self) -> Iter<'_, FixedArray<T>> {
        self.rows.iter()
    }
}

impl<'a, T> IntoIterator for &'a Grid2D<T> {
    type Item = &'a FixedArray<T>;
    type IntoIter = Iter<'a, FixedArray<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

impl<T: fmt::Display> fmt::Display for Grid2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let grid = Grid2D::new(2, 3, 0u8).unwrap();
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.num_cols(), 3);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Grid2D::new(0, 3, 0u8),
            Err(ArrayError::InvalidArgument(_))
        ));
        assert!(matches!(
            Grid2D::new(3, 0, 0u8),
            Err(ArrayError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_clear_then_set() {
        let mut grid = Grid2D::new(2, 3, -1i32).unwrap();
        grid.clear(0);
        grid.set(1, 2, 9).unwrap();
        assert_eq!(grid.get(1, 2), Ok(&9));
        assert_eq!(grid.get(0, 0), Ok(&0));
    }

    #[test]
    fn test_clear_reaches_every_row() {
        let mut grid = Grid2D::new(4, 3, 1u8).unwrap();
        grid.set(3, 2, 7).unwrap();
        grid.clear(0);
        assert!(grid.rows().all(|row| row.iter().all(|&cell| cell == 0)));
    }

    #[test]
    fn test_out_of_range_reports_failing_dimension() {
        let mut grid = Grid2D::new(2, 3, 0u8).unwrap();
        assert_eq!(
            grid.get(2, 0),
            Err(ArrayError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            grid.set(0, 3, 1),
            Err(ArrayError::IndexOutOfRange { index: 3, len: 3 })
        );
        // row checked before column
        assert_eq!(
            grid.get(5, 5),
            Err(ArrayError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_rows_are_not_shared() {
        let mut grid = Grid2D::new(3, 2, 0u8).unwrap();
        grid.set(0, 1, 4).unwrap();
        assert_eq!(grid.get(1, 1), Ok(&0));
        assert_eq!(grid.get(2, 1), Ok(&0));
    }

    #[test]
    fn test_iterates_rows_then_cells() {
        let mut grid = Grid2D::new(2, 2, 0u8).unwrap();
        grid.set(1, 0, 3).unwrap();

        let rows: Vec<Vec<u8>> = grid
            .rows()
            .map(|row| row.iter().copied().collect())
            .collect();
        assert_eq!(rows, vec![vec![0, 0], vec![3, 0]]);
        assert_eq!((&grid).into_iter().count(), 2);
    }

    #[test]
    fn test_row_access() {
        let grid = Grid2D::new(2, 4, 1u8).unwrap();
        assert_eq!(grid.row(1).map(FixedArray::len), Ok(4));
        assert!(grid.row(2).is_err());
    }

    #[test]
    fn test_display() {
        let mut grid = Grid2D::new(2, 2, 0u8).unwrap();
        grid.set(0, 1, 1).unwrap();
        assert_eq!(grid.to_string(), "[[0, 1],\n [0, 0]]");
    }
}
