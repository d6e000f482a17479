//! Errors shared between more than one module.

use derive_more::{Display, Error};

/// An index landed outside of the collection it was meant for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}
