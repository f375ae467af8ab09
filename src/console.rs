use crate::record::LogEvent;

/// Local console consumed by the logger: one clear operation plus one
/// print method per severity family.
///
/// The logger never calls these methods directly; it resolves the print
/// capability for a level from [`crate::level::LEVEL_SPECS`] and invokes
/// whatever that entry routes to. Implementations must not panic.
pub trait Console: Send + Sync {
    /// Clear the visible console. Coupled with history clearing in
    /// [`crate::buffer::LogBuffer::clear`].
    fn clear(&self);

    /// Print a debug-level line.
    fn log(&self, line: &str);

    /// Print an informational line.
    fn info(&self, line: &str);

    /// Print a warning line.
    fn warn(&self, line: &str);

    /// Print an error line. Also used for fatal events.
    fn error(&self, line: &str);
}

/// Process stdout/stderr implementation of [`Console`].
///
/// `log` and `info` write to stdout, `warn` and `error` to stderr, and
/// `clear` emits the ANSI clear-screen sequence.
#[derive(Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn clear(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }

    fn log(&self, line: &str) {
        println!("{}", line);
    }

    fn info(&self, line: &str) {
        println!("{}", line);
    }

    fn warn(&self, line: &str) {
        eprintln!("{}", line);
    }

    fn error(&self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Render the console line for an event:
/// `<icon> <timestamp> [<origin>] ➜ [<method>] ➜ <message>`.
///
/// Empty text messages drop the trailing arrow and body; structured
/// messages render as their JSON text.
pub fn render_line(event: &LogEvent) -> String {
    let head = format!(
        "{} {} [{}] ➜ [{}]",
        event.icon, event.timestamp, event.origin, event.method
    );

    if event.message.is_empty_text() {
        head
    } else {
        format!("{} ➜ {}", head, event.message.wire_text())
    }
}
