//! Message types for the recording session.
//!
//! [`Command`] is the protocol between an event source and the script
//! thread. Each variant corresponds to one public [`ScriptWriter`]
//! operation, so a command sequence produces byte-for-byte the same file
//! the equivalent direct calls would.
//!
//! [`ScriptWriter`]: crate::script::ScriptWriter

use crate::script::ConsoleColor;

/// One console operation to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a single character to the write buffer.
    WriteChar(char),

    /// Emit a string as one `Call Write` line.
    WriteString(String),

    /// Emit `Render <frames>`; zero frames is a no-op.
    Render(u32),

    /// Clear the console.
    Clear,

    /// Reset foreground and background colors to their defaults.
    ResetColor,

    /// Show or hide the cursor.
    SetCursorVisible(bool),

    /// Set the cursor size.
    SetCursorSize(u16),

    /// Set the cursor column.
    SetCursorLeft(u16),

    /// Set the cursor row.
    SetCursorTop(u16),

    /// Set the window's left edge within the buffer.
    SetWindowLeft(u16),

    /// Set the window's top edge within the buffer.
    SetWindowTop(u16),

    /// Set the window width.
    SetWindowWidth(u16),

    /// Set the window height.
    SetWindowHeight(u16),

    /// Set the screen buffer width.
    SetBufferWidth(u16),

    /// Set the screen buffer height.
    SetBufferHeight(u16),

    /// Set the foreground color.
    SetForegroundColor(ConsoleColor),

    /// Set the background color.
    SetBackgroundColor(ConsoleColor),

    /// Shift buffer content up one row, filling the vacated bottom row.
    ScrollUp {
        /// Buffer width in columns.
        width: u16,
        /// Buffer height in rows.
        height: u16,
        /// Fill foreground color.
        foreground: ConsoleColor,
        /// Fill background color.
        background: ConsoleColor,
    },

    /// Shift buffer content down one row, filling the vacated top row.
    ScrollDown {
        /// Buffer width in columns.
        width: u16,
        /// Buffer height in rows.
        height: u16,
        /// Fill foreground color.
        foreground: ConsoleColor,
        /// Fill background color.
        background: ConsoleColor,
    },

    /// Finish the script and shut the session down.
    Finish {
        /// Trailing `Render` frame count; zero emits no trailing line.
        extra_render_frames: u32,
    },
}
