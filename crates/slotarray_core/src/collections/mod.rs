//! # Collections
//!
//! Containers composed from `FixedArray` storage.

mod dynamic;
mod grid;

pub use dynamic::DynamicArray;
pub use grid::Grid2D;
