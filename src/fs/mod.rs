//! Folder helpers built directly on Linux syscalls via `libc`.
//!
//! Errors are reported per errno value as distinct types, so callers can match on exactly what
//! went wrong rather than inspecting an [`io::Error`](std::io::Error) kind.
#![cfg(target_os = "linux")]

mod error;
mod folder;
mod panic;
mod syscall;
mod tests;

pub use error::*;
pub use folder::*;
