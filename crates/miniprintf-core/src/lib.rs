//! # miniprintf-core
//!
//! Allocation-free `printf`-style formatting for byte streams.
//!
//! The engine walks a format string once, converts each directive's argument
//! into a small stack token, pads it, and pushes the result one byte at a
//! time into a [`stdio::Stream`]. The same engine drives bounded in-memory
//! formatting through [`stdio::MemoryStream`].
//!
//! No heap allocation and no `unsafe` code is permitted at the crate level.

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod math;
pub mod stdio;
pub mod stdlib;

pub use stdio::{Arg, ArgList, MemoryStream, NullStream, Stream, StreamError};
pub use stdio::{printf, snprintf, vprintf, vsnprintf};
