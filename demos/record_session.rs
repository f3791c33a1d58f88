//! Record a short synthetic console session to `demo.recsh`.
//!
//! Run with `cargo run --example record_session`, then feed the resulting
//! file to the replay visualizer.

use crossterm::style::Color;
use recsh::{Command, ConsoleColor, SessionRecorder};

fn main() -> std::io::Result<()> {
    let session = SessionRecorder::spawn("demo.recsh")?;
    let tx = session.sender();

    // Stage the console.
    tx.send(Command::SetBufferWidth(80)).unwrap();
    tx.send(Command::SetBufferHeight(25)).unwrap();
    tx.send(Command::SetCursorVisible(false)).unwrap();
    tx.send(Command::Clear).unwrap();

    // A banner, typed character by character the way a console capture
    // would deliver it.
    tx.send(Command::SetForegroundColor(ConsoleColor::from(
        Color::DarkCyan,
    )))
    .unwrap();
    for c in "recsh demo session".chars() {
        tx.send(Command::WriteChar(c)).unwrap();
    }
    tx.send(Command::Render(30)).unwrap();

    // Some colored output and a scroll.
    tx.send(Command::SetCursorLeft(0)).unwrap();
    tx.send(Command::SetCursorTop(2)).unwrap();
    tx.send(Command::SetForegroundColor(ConsoleColor::Green))
        .unwrap();
    tx.send(Command::WriteString("$ echo \"hello\"\n".to_string()))
        .unwrap();
    tx.send(Command::ResetColor).unwrap();
    tx.send(Command::WriteString("hello\n".to_string())).unwrap();
    tx.send(Command::ScrollUp {
        width: 80,
        height: 25,
        foreground: ConsoleColor::Gray,
        background: ConsoleColor::Black,
    })
    .unwrap();

    // Hold the final frame for a second at 30 fps.
    session.finish(30)?;

    println!("Wrote demo.recsh");
    Ok(())
}
