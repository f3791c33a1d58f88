//! Script emission: the core of the recorder.
//!
//! This module contains:
//! - [`ScriptWriter`]: The buffered, line-oriented script emitter
//! - [`ConsoleColor`]: The 16-entry symbolic color table
//!
//! The output grammar is fixed by the external visualizer and must not
//! drift: one command per `\n`-terminated line, preceded by a two-line
//! header.

mod color;
mod writer;

pub use color::ConsoleColor;
pub use writer::{ScriptWriter, CHAR_BUFFER_CAPACITY, HEADER_NAME, HEADER_VISUALIZER};
