use std::collections::TryReserveError;
use std::io;
use std::num::ParseIntError;

use derive_more::{Display, Error, From, IsVariant};

use crate::error::IndexOutOfBounds;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("Unknown format \"{directive}\"")]
pub struct UnknownFormatError {
    #[error(not(source))]
    pub directive: String,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("alignment used before any argument was consumed")]
pub struct NoPreviousArgumentError;

/// The ways a template can fail to format. None of them leave a partially formatted string behind.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum FormatError {
    UnknownFormat(UnknownFormatError),
    IndexOutOfBounds(IndexOutOfBounds),
    NoPreviousArgument(NoPreviousArgumentError),
    /// A width or index was made of digits, but too many of them.
    InvalidNumber(ParseIntError),
    /// A width so large that the padded string couldn't be allocated.
    WidthTooLarge(TryReserveError),
}

#[derive(Debug, Display, From, Error, IsVariant)]
pub enum PrintError {
    Format(FormatError),
    IO(io::Error),
}
