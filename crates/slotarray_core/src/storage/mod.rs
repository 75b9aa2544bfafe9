//! # Slot Storage
//!
//! Fixed-length slot storage and the iterator protocol over it.
//!
//! ## Design Philosophy
//!
//! Storage is allocated once, with an explicit fill pass. After that:
//! - No resizing
//! - Every index is checked
//! - Iteration state lives outside the array

mod fixed;
mod iter;

pub use fixed::FixedArray;
pub use iter::{Cursor, Iter};
