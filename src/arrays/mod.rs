//! Little utilities for working with slices.
//!
//! The main type here is [`ArrayCursor`], a cursor that can move both ways over a slice. The rest
//! are free functions for joining, mapping and copying slices where some elements may be missing
//! (represented as [`None`]).
#![warn(missing_docs)]

mod copy;
mod cursor;
mod join;

pub use copy::*;
pub use cursor::*;
pub use join::{NULL, join, join_with};
pub(crate) use join::render;
