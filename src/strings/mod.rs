//! String formatting and printing in the style of Rust's `format!`, for templates only known at
//! runtime. Also home to [`levenshtein`].
//!
//! # Method
//! Placeholders are found with a [`regex`] compiled once per process. Each call to [`format()`] then
//! walks the placeholders left to right with its own
//! [`ArrayCursor`](crate::arrays::ArrayCursor) over the arguments, so concurrent calls never share
//! any mutable state.
//!
//! There is no escaping: `{{` and `}}` aren't treated specially.

mod directive;
mod distance;
mod error;
mod format;
mod print;
mod tests;

pub use directive::*;
pub use distance::*;
pub use error::*;
pub use format::*;
pub use print::*;
