//! This crate is the shared code I keep reaching for across my projects.
//!
//! # Purpose
//! Most of it is small: helpers for slices, a validator, a tuple type. The one part with some real
//! logic is [`strings::format`], a runtime take on Rust's own `format!` syntax that works on
//! templates which aren't known at compile time (config files, translations and the like).
//!
//! # Method
//! Wherever Rust already provides something (`Option`, `Result`, `Vec::from`), I use that instead
//! of writing my own. Things like "this can't be null" or "this must be positive" are expressed
//! with types rather than runtime checks.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error). The enums are built with
//! `derive_more` so that `?` converts the leaf errors automatically.
//!
//! Operations that can only fail because of a bug in this crate (or the OS handing back an error
//! it documents as impossible) panic instead.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers. [`strings`] uses `regex` to
//! find placeholders. Events are reported through `tracing`; no subscriber is installed here.
//!
//! Every module sits behind a feature of the same name, all enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "arrays")]
pub mod arrays;
#[cfg(all(feature = "fs", target_os = "linux"))]
pub mod fs;
#[cfg(feature = "strings")]
pub mod strings;
#[cfg(feature = "tuple")]
pub mod tuple;
#[cfg(feature = "validate")]
pub mod validate;

pub mod error;

#[cfg(test)]
pub(crate) mod util;
