//! Recording session: channel-fed delivery onto the single script writer.
//!
//! The script format requires one writer per file, written in operation
//! order. This module keeps that discipline in live setups using a small
//! actor:
//!
//! ```text
//! ┌──────────────┐      Command       ┌───────────────┐
//! │ Event Source │ ─────────────────▶ │ Script Thread │──▶ script file
//! └──────────────┘   (crossbeam tx)   │ (owns writer) │
//! └──────────────┘                    └───────────────┘
//! ```
//!
//! Producers clone the sender; the script thread is the only writer.

mod messages;
mod session;

pub use messages::Command;
pub use session::SessionRecorder;
