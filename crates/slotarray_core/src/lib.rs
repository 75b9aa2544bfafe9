//! # SLOTARRAY Core
//!
//! Array containers built directly on explicitly allocated slot storage
//! rather than on a growable collection:
//! - `FixedArray` - a fixed-length block of slots with checked indexing
//! - `Grid2D` - a row-major grid composed of one `FixedArray` per row
//! - `DynamicArray` - a growable array that swaps its whole backing store
//!
//! ## Storage Rules
//!
//! 1. **Explicit allocation** - every slot is written by a fill pass at construction
//! 2. **No implicit resizing** - only `DynamicArray` grows, and only by doubling
//! 3. **Checked access** - every out-of-range index is a returned error
//!
//! ## Example
//!
//! ```rust
//! use slotarray_core::{DynamicArray, Grid2D};
//!
//! let mut values = DynamicArray::new();
//! values.append(1);
//! values.append(2);
//! values.append(3);
//! assert_eq!(values.capacity(), 4);
//! assert_eq!(values.get(2), Ok(&3));
//!
//! let mut grid = Grid2D::new(2, 3, 0).unwrap();
//! grid.set(1, 2, 9).unwrap();
//! assert_eq!(grid.get(1, 2), Ok(&9));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod collections;
pub mod config;
pub mod error;
pub mod storage;

pub use collections::{DynamicArray, Grid2D};
pub use config::ArrayConfig;
pub use error::{ArrayError, ArrayResult};
pub use storage::{Cursor, FixedArray, Iter};
