//! `ScriptWriter`: Buffered emitter for the replay script format.
//!
//! The writer turns a stream of console operations into a line-oriented
//! text file. Consecutive single-character writes are accumulated and
//! emitted as one `Call Write` line; every other operation flushes the
//! accumulator first, so line order in the file always matches call order.

use super::color::ConsoleColor;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::mem;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Characters accumulated before `write_char` forces an implicit flush.
///
/// Counts characters, not bytes: a multi-byte character still occupies a
/// single slot.
pub const CHAR_BUFFER_CAPACITY: usize = 256;

/// Fixed first header line of every script file.
pub const HEADER_NAME: &str = "Name: Default recsh output";

/// Fixed second header line, identifying the replay visualizer.
pub const HEADER_VISUALIZER: &str =
    "Visualizer: ConsoleVisualizer.VisConsole, ConsoleVisualizer";

/// Stateful emitter that serializes console operations into script lines.
///
/// Generic over the sink so tests can drive it with an in-memory buffer;
/// recording sessions use the file-backed [`ScriptWriter::create`].
///
/// Every emitting operation takes `&mut self`, so the single-writer
/// discipline the format requires is enforced by the borrow checker. All
/// operations return `io::Result` and propagate sink failures; the pending
/// buffer is always reset before the write is attempted, so a failed flush
/// cannot cause duplicate emission on a retry path.
pub struct ScriptWriter<W: Write> {
    /// The output sink. Exclusively owned for the writer's lifetime.
    sink: W,
    /// Originating path, when file-backed. Diagnostics only.
    path: Option<PathBuf>,
    /// Pending single-character writes not yet emitted.
    pending: String,
    /// Number of characters in `pending`.
    pending_len: usize,
}

impl ScriptWriter<BufWriter<File>> {
    /// Open a script file for recording.
    ///
    /// Creates or truncates the file at `path` and immediately emits the
    /// fixed two-line header. On failure no writer is returned; a recording
    /// session cannot proceed without its sink.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the file cannot be created or the
    /// header cannot be written.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = Self {
            sink: BufWriter::new(file),
            path: Some(path.to_path_buf()),
            pending: String::with_capacity(CHAR_BUFFER_CAPACITY),
            pending_len: 0,
        };
        writer.write_header()?;
        debug!(path = %path.display(), "script opened");
        Ok(writer)
    }
}

impl<W: Write> ScriptWriter<W> {
    /// Start a script over an arbitrary sink.
    ///
    /// Emits the two-line header immediately, like [`ScriptWriter::create`].
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(sink: W) -> io::Result<Self> {
        let mut writer = Self {
            sink,
            path: None,
            pending: String::with_capacity(CHAR_BUFFER_CAPACITY),
            pending_len: 0,
        };
        writer.write_header()?;
        Ok(writer)
    }

    /// The file path this writer records to, when file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.sink, "{HEADER_NAME}")?;
        writeln!(self.sink, "{HEADER_VISUALIZER}")
    }

    /// Append one character to the pending buffer.
    ///
    /// If the buffer is at capacity it is flushed first, so a long
    /// character stream splits into multiple `Call Write` lines of at most
    /// [`CHAR_BUFFER_CAPACITY`] characters each. Nothing reaches the sink
    /// until the next flush trigger.
    ///
    /// # Errors
    ///
    /// Returns an error if a capacity-forced flush fails.
    pub fn write_char(&mut self, c: char) -> io::Result<()> {
        if self.pending_len == CHAR_BUFFER_CAPACITY {
            self.flush_pending()?;
        }
        self.pending.push(c);
        self.pending_len += 1;
        Ok(())
    }

    /// Emit the pending characters as one `Call Write` line, if any.
    ///
    /// Every other emitting operation calls this first. This is the single
    /// place the ordering invariant lives: buffered characters always land
    /// on the line immediately before whatever operation triggered the
    /// flush.
    fn flush_pending(&mut self) -> io::Result<()> {
        if self.pending_len == 0 {
            return Ok(());
        }
        trace!(chars = self.pending_len, "flushing pending characters");
        // Reset state before touching the sink; a failed write must not
        // leave characters behind to be emitted twice.
        let text = mem::replace(
            &mut self.pending,
            String::with_capacity(CHAR_BUFFER_CAPACITY),
        );
        self.pending_len = 0;
        self.emit_write(&text)
    }

    fn emit_write(&mut self, text: &str) -> io::Result<()> {
        let mut line = String::with_capacity(text.len() + 16);
        line.push_str("Call Write \"");
        push_escaped(&mut line, text);
        line.push('"');
        writeln!(self.sink, "{line}")
    }

    /// Emit `Call Write "<text>"` with the payload escaped.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.flush_pending()?;
        self.emit_write(text)
    }

    /// Emit `Render <frames>`.
    ///
    /// A zero frame count is a no-op: nothing is flushed and no line is
    /// emitted. This also governs the implicit render during [`close`].
    ///
    /// [`close`]: ScriptWriter::close
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn render(&mut self, frames: u32) -> io::Result<()> {
        if frames == 0 {
            return Ok(());
        }
        self.flush_pending()?;
        writeln!(self.sink, "Render {frames}")
    }

    /// Emit `Call Clear`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn clear(&mut self) -> io::Result<()> {
        self.flush_pending()?;
        writeln!(self.sink, "Call Clear")
    }

    /// Emit `Call ResetColor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn reset_color(&mut self) -> io::Result<()> {
        self.flush_pending()?;
        writeln!(self.sink, "Call ResetColor")
    }

    /// Shared tail of every `Set <Property> <value>` operation.
    fn emit_set(&mut self, property: &str, value: impl fmt::Display) -> io::Result<()> {
        self.flush_pending()?;
        writeln!(self.sink, "Set {property} {value}")
    }

    /// Emit `Set CursorVisible true|false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.emit_set("CursorVisible", visible)
    }

    /// Emit `Set CursorSize <n>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_cursor_size(&mut self, size: u16) -> io::Result<()> {
        self.emit_set("CursorSize", size)
    }

    /// Emit `Set CursorLeft <n>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_cursor_left(&mut self, column: u16) -> io::Result<()> {
        self.emit_set("CursorLeft", column)
    }

    /// Emit `Set CursorTop <n>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_cursor_top(&mut self, row: u16) -> io::Result<()> {
        self.emit_set("CursorTop", row)
    }

    /// Emit `Set WindowLeft <n>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_window_left(&mut self, value: u16) -> io::Result<()> {
        self.emit_set("WindowLeft", value)
    }

    /// Emit `Set WindowTop <n>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_window_top(&mut self, value: u16) -> io::Result<()> {
        self.emit_set("WindowTop", value)
    }

    /// Emit `Set WindowWidth <n>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_window_width(&mut self, value: u16) -> io::Result<()> {
        self.emit_set("WindowWidth", value)
    }

    /// Emit `Set WindowHeight <n>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_window_height(&mut self, value: u16) -> io::Result<()> {
        self.emit_set("WindowHeight", value)
    }

    /// Emit `Set BufferWidth <n>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_buffer_width(&mut self, value: u16) -> io::Result<()> {
        self.emit_set("BufferWidth", value)
    }

    /// Emit `Set BufferHeight <n>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_buffer_height(&mut self, value: u16) -> io::Result<()> {
        self.emit_set("BufferHeight", value)
    }

    /// Emit `Set ForegroundColor <name>`.
    ///
    /// Accepts anything convertible to [`ConsoleColor`], including raw
    /// integer codes; out-of-range codes alias through the 4-bit mask.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_foreground_color(&mut self, color: impl Into<ConsoleColor>) -> io::Result<()> {
        self.emit_set("ForegroundColor", color.into())
    }

    /// Emit `Set BackgroundColor <name>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn set_background_color(&mut self, color: impl Into<ConsoleColor>) -> io::Result<()> {
        self.emit_set("BackgroundColor", color.into())
    }

    /// Emit `Call MoveBufferArea ...`.
    ///
    /// Kept private: the visualizer grammar exposes this primitive only
    /// through the scroll operations.
    #[allow(clippy::too_many_arguments)]
    fn move_buffer_area(
        &mut self,
        source_left: u16,
        source_top: u16,
        width: u16,
        height: u16,
        target_left: u16,
        target_top: u16,
        fill: char,
        fill_foreground: ConsoleColor,
        fill_background: ConsoleColor,
    ) -> io::Result<()> {
        self.flush_pending()?;
        writeln!(
            self.sink,
            "Call MoveBufferArea {source_left}, {source_top}, {width}, {height}, \
             {target_left}, {target_top}, '{fill}', {fill_foreground}, {fill_background}"
        )
    }

    /// Shift buffer content up by one row.
    ///
    /// The vacated bottom row is filled with space cells in the given
    /// colors. Emits the same `Call MoveBufferArea` line a direct caller of
    /// the primitive would produce with the derived arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn scroll_up(
        &mut self,
        width: u16,
        height: u16,
        foreground: impl Into<ConsoleColor>,
        background: impl Into<ConsoleColor>,
    ) -> io::Result<()> {
        self.move_buffer_area(
            0,
            1,
            width,
            height.saturating_sub(1),
            0,
            0,
            ' ',
            foreground.into(),
            background.into(),
        )
    }

    /// Shift buffer content down by one row, filling the vacated top row.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails.
    pub fn scroll_down(
        &mut self,
        width: u16,
        height: u16,
        foreground: impl Into<ConsoleColor>,
        background: impl Into<ConsoleColor>,
    ) -> io::Result<()> {
        self.move_buffer_area(
            0,
            0,
            width,
            height.saturating_sub(1),
            0,
            1,
            ' ',
            foreground.into(),
            background.into(),
        )
    }

    /// Finish the script.
    ///
    /// Flushes pending characters, emits a trailing `Render` if
    /// `extra_render_frames` is nonzero, and flushes the sink. Consuming
    /// `self` makes double-close unrepresentable.
    ///
    /// # Errors
    ///
    /// Returns an error if the final writes fail.
    pub fn close(mut self, extra_render_frames: u32) -> io::Result<()> {
        self.flush_pending()?;
        self.render(extra_render_frames)?;
        self.sink.flush()?;
        debug!(path = ?self.path, "script closed");
        Ok(())
    }
}

impl<W: Write> Drop for ScriptWriter<W> {
    /// Best-effort flush so a scope exited early still lands buffered text.
    fn drop(&mut self) {
        let _ = self.flush_pending();
        let _ = self.sink.flush();
    }
}

impl<W: Write> fmt::Debug for ScriptWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptWriter")
            .field("path", &self.path)
            .field("pending_len", &self.pending_len)
            .finish_non_exhaustive()
    }
}

/// Escape a `Call Write` payload.
///
/// Exactly four characters are escaped: newline, carriage return, double
/// quote, and backslash. Everything else passes through verbatim.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
}
