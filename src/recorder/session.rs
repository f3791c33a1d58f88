//! Session Actor: Dedicated thread that owns the script writer.
//!
//! The writer requires single-writer discipline; this actor makes that
//! discipline easy to keep in a live recording setup. One named thread owns
//! the [`ScriptWriter`] and drains a channel of [`Command`]s, so any number
//! of producer threads can feed a session through cloned senders while the
//! script itself is written strictly in arrival order.

use super::messages::Command;
use crate::script::ScriptWriter;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// A recording session backed by a dedicated script thread.
///
/// Producers send [`Command`]s through [`sender`]; [`finish`] closes the
/// script and surfaces any I/O error the thread hit. Dropping the session
/// without finishing detaches the thread; it still closes the script (with
/// no trailing render) once the last sender is gone.
///
/// [`sender`]: SessionRecorder::sender
/// [`finish`]: SessionRecorder::finish
#[derive(Debug)]
pub struct SessionRecorder {
    /// Handle to the script thread.
    handle: Option<JoinHandle<io::Result<()>>>,
    /// Producer side of the command channel.
    tx: Sender<Command>,
}

impl SessionRecorder {
    /// Start a session recording to the file at `path`.
    ///
    /// The script file is opened (and its header written) on the calling
    /// thread, so open failure surfaces here rather than inside the actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the script file cannot be created.
    pub fn spawn<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let writer = ScriptWriter::<BufWriter<File>>::create(path)?;
        Ok(Self::with_writer(writer))
    }

    /// Start a session around an already-open writer.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the script thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn with_writer<W: Write + Send + 'static>(writer: ScriptWriter<W>) -> Self {
        let (tx, rx) = unbounded();

        let handle = thread::Builder::new()
            .name("recsh-script".to_string())
            .spawn(move || Self::run_loop(writer, &rx))
            .expect("Failed to spawn script thread");

        debug!("recording session started");

        Self {
            handle: Some(handle),
            tx,
        }
    }

    /// Get a sender for feeding commands into the session.
    ///
    /// Senders may be cloned freely and moved to other threads; arrival
    /// order at the channel is the order commands hit the script.
    pub fn sender(&self) -> Sender<Command> {
        self.tx.clone()
    }

    /// Send one command into the session.
    ///
    /// Silently drops the command if the script thread has already exited
    /// (e.g. after an I/O error); the error itself surfaces from
    /// [`finish`](SessionRecorder::finish).
    pub fn send(&self, command: Command) {
        let _ = self.tx.send(command);
    }

    /// Finish the session: close the script and join the thread.
    ///
    /// Emits a trailing `Render` line if `extra_render_frames` is nonzero.
    ///
    /// # Errors
    ///
    /// Returns any I/O error the script thread encountered, or an error if
    /// the thread panicked.
    pub fn finish(mut self, extra_render_frames: u32) -> io::Result<()> {
        let _ = self.tx.send(Command::Finish {
            extra_render_frames,
        });

        match self.handle.take() {
            Some(handle) => match handle.join() {
                Ok(result) => result,
                Err(_) => Err(io::Error::new(
                    io::ErrorKind::Other,
                    "script thread panicked",
                )),
            },
            None => Ok(()),
        }
    }

    /// Main script loop: dispatch commands to the writer in arrival order.
    fn run_loop<W: Write>(mut writer: ScriptWriter<W>, rx: &Receiver<Command>) -> io::Result<()> {
        while let Ok(command) = rx.recv() {
            match command {
                Command::WriteChar(c) => writer.write_char(c)?,
                Command::WriteString(s) => writer.write_str(&s)?,
                Command::Render(frames) => writer.render(frames)?,
                Command::Clear => writer.clear()?,
                Command::ResetColor => writer.reset_color()?,
                Command::SetCursorVisible(visible) => writer.set_cursor_visible(visible)?,
                Command::SetCursorSize(size) => writer.set_cursor_size(size)?,
                Command::SetCursorLeft(column) => writer.set_cursor_left(column)?,
                Command::SetCursorTop(row) => writer.set_cursor_top(row)?,
                Command::SetWindowLeft(value) => writer.set_window_left(value)?,
                Command::SetWindowTop(value) => writer.set_window_top(value)?,
                Command::SetWindowWidth(value) => writer.set_window_width(value)?,
                Command::SetWindowHeight(value) => writer.set_window_height(value)?,
                Command::SetBufferWidth(value) => writer.set_buffer_width(value)?,
                Command::SetBufferHeight(value) => writer.set_buffer_height(value)?,
                Command::SetForegroundColor(color) => writer.set_foreground_color(color)?,
                Command::SetBackgroundColor(color) => writer.set_background_color(color)?,
                Command::ScrollUp {
                    width,
                    height,
                    foreground,
                    background,
                } => writer.scroll_up(width, height, foreground, background)?,
                Command::ScrollDown {
                    width,
                    height,
                    foreground,
                    background,
                } => writer.scroll_down(width, height, foreground, background)?,
                Command::Finish {
                    extra_render_frames,
                } => {
                    debug!("recording session finished");
                    return writer.close(extra_render_frames);
                }
            }
        }

        // All senders gone without an explicit Finish; close with no
        // trailing render.
        debug!("command channel disconnected, closing script");
        writer.close(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ConsoleColor;
    use std::sync::{Arc, Mutex};

    /// In-memory sink the test can inspect after the thread is done.
    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl SharedSink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample_commands() -> Vec<Command> {
        vec![
            Command::SetCursorVisible(false),
            Command::SetForegroundColor(ConsoleColor::from_code(10)),
            Command::WriteChar('h'),
            Command::WriteChar('i'),
            Command::Render(1),
            Command::WriteString("done\n".to_string()),
            Command::ScrollUp {
                width: 80,
                height: 25,
                foreground: ConsoleColor::Gray,
                background: ConsoleColor::Black,
            },
            Command::Clear,
        ]
    }

    #[test]
    fn test_session_matches_direct_calls() {
        let sink = SharedSink::default();
        let session = SessionRecorder::with_writer(ScriptWriter::new(sink.clone()).unwrap());
        for command in sample_commands() {
            session.send(command);
        }
        session.finish(2).unwrap();

        let mut direct = Vec::new();
        {
            let mut writer = ScriptWriter::new(&mut direct).unwrap();
            writer.set_cursor_visible(false).unwrap();
            writer.set_foreground_color(10).unwrap();
            writer.write_char('h').unwrap();
            writer.write_char('i').unwrap();
            writer.render(1).unwrap();
            writer.write_str("done\n").unwrap();
            writer
                .scroll_up(80, 25, ConsoleColor::Gray, ConsoleColor::Black)
                .unwrap();
            writer.clear().unwrap();
            writer.close(2).unwrap();
        }

        assert_eq!(sink.contents(), String::from_utf8(direct).unwrap());
    }

    #[test]
    fn test_disconnect_closes_without_trailing_render() {
        let sink = SharedSink::default();
        let session = SessionRecorder::with_writer(ScriptWriter::new(sink.clone()).unwrap());
        session.send(Command::WriteChar('a'));

        // Join via Finish-less teardown: drop every sender, then wait on
        // the thread directly.
        let handle = {
            let mut session = session;
            session.handle.take().unwrap()
        };
        handle.join().unwrap().unwrap();

        assert_eq!(
            sink.contents(),
            "Name: Default recsh output\n\
             Visualizer: ConsoleVisualizer.VisConsole, ConsoleVisualizer\n\
             Call Write \"a\"\n"
        );
    }

    #[test]
    fn test_file_backed_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.recsh");

        let session = SessionRecorder::spawn(&path).unwrap();
        let tx = session.sender();
        tx.send(Command::WriteString("recorded".to_string())).unwrap();
        session.finish(0).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("Call Write \"recorded\"\n"));
    }

    #[test]
    fn test_spawn_fails_on_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("session.recsh");
        assert!(SessionRecorder::spawn(&path).is_err());
    }
}
