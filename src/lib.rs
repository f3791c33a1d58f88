//! # recsh
//!
//! A console session recorder that emits replayable script files.
//!
//! recsh translates console-rendering operations (write text, move the
//! cursor, set colors, resize, scroll, clear, render) into a line-oriented
//! text script consumed by an external replay visualizer.
//!
//! ## Core Concepts
//!
//! - **Buffered character writes**: Consecutive single-character writes
//!   coalesce into one `Call Write` line instead of a line per character
//! - **Ordering invariant**: Every other operation flushes the character
//!   buffer first, so file line order always matches call order
//! - **Fixed grammar**: One command per line, a fixed two-line header, and
//!   a fixed 16-entry symbolic color table; the visualizer's grammar must
//!   not drift
//!
//! ## Example
//!
//! ```rust,ignore
//! use recsh::ScriptWriter;
//!
//! let mut script = ScriptWriter::create("session.recsh")?;
//! script.set_foreground_color(10)?;
//! script.write_str("hello")?;
//! script.close(30)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod recorder;
pub mod script;

// Re-exports for convenience
pub use recorder::{Command, SessionRecorder};
pub use script::{ConsoleColor, ScriptWriter, CHAR_BUFFER_CAPACITY};
