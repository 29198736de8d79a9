//! Standard I/O operations.
//!
//! Implements the formatted-output half of `<stdio.h>` for byte streams:
//! the sink capability, the bounded memory stream, the typed argument list,
//! and the `printf` engine with its bounded-buffer variant.

pub mod args;
pub mod memstream;
pub mod printf;
pub mod stream;
pub mod token;

pub use args::{Arg, ArgList};
pub use memstream::MemoryStream;
pub use printf::{Conversion, Directive, printf, snprintf, vprintf, vsnprintf};
pub use stream::{NullStream, Stream, StreamError};
pub use token::Token;
