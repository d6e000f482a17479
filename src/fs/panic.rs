use std::error::Error;

use derive_more::{Display, Error};
use libc::c_int;

/// Errors that the OS documents as impossible for the way this crate calls it. Hitting one is a
/// bug, so they panic instead of being returned.
pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("path pointer outside of accessible address space")]
pub struct BadAddrPanic;
impl Panic for BadAddrPanic {}

#[derive(Debug, Display, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedErrorPanic(#[error(not(source))] pub c_int);
impl Panic for UnexpectedErrorPanic {}
