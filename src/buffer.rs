use crate::console::Console;
use crate::level;
use crate::record::LogEvent;
use std::sync::{Arc, Mutex, MutexGuard};

/// Bounded, insertion-ordered history of log events.
///
/// Overflow is handled wholesale: when the history already holds more
/// events than `capacity` at the start of an insertion, the entire
/// history is discarded (together with the visible console) before the
/// new event is appended. The check runs before the insert, so the
/// history can transiently hold `capacity + 1` events until the next
/// call trips the eviction.
///
/// All mutation goes through a single mutex; `record`, `clear`,
/// `snapshot` and `replay` are the only operations touching shared
/// state.
pub struct LogBuffer {
    entries: Mutex<Vec<LogEvent>>,
    capacity: usize,
    console: Arc<dyn Console>,
}

impl LogBuffer {
    pub fn new(capacity: usize, console: Arc<dyn Console>) -> Self {
        LogBuffer {
            entries: Mutex::new(Vec::new()),
            capacity,
            console,
        }
    }

    // A poisoned lock still holds usable history; logging must not
    // panic back into the application.
    fn entries(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append an event, evicting the whole history first if it already
    /// exceeds capacity. Always succeeds.
    pub fn record(&self, event: LogEvent) {
        let mut entries = self.entries();
        if entries.len() > self.capacity {
            self.console.clear();
            entries.clear();
        }
        entries.push(event);
    }

    /// Empty the history and clear the visible console. The two effects
    /// are one coupled operation.
    pub fn clear(&self) {
        self.console.clear();
        self.entries().clear();
    }

    /// Copied view of the current history, oldest first. Mutating the
    /// returned vector has no effect on the buffer.
    pub fn snapshot(&self) -> Vec<LogEvent> {
        self.entries().clone()
    }

    /// Clear the visible console, then re-emit every retained event's
    /// message text through its level's print capability, oldest first.
    /// The history itself is left untouched. Levels without a print
    /// capability are skipped.
    pub fn replay(&self) {
        self.console.clear();
        let entries = self.entries();
        for event in entries.iter() {
            if let Some(spec) = level::lookup(event.level) {
                (spec.print)(&*self.console, &event.message.wire_text());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::record::LogMessage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingConsole {
        clears: AtomicUsize,
        prints: Mutex<Vec<String>>,
    }

    impl Console for CountingConsole {
        fn clear(&self) {
            self.clears.fetch_add(1, Ordering::SeqCst);
            self.prints.lock().unwrap().clear();
        }

        fn log(&self, line: &str) {
            self.prints.lock().unwrap().push(line.to_string());
        }

        fn info(&self, line: &str) {
            self.prints.lock().unwrap().push(line.to_string());
        }

        fn warn(&self, line: &str) {
            self.prints.lock().unwrap().push(line.to_string());
        }

        fn error(&self, line: &str) {
            self.prints.lock().unwrap().push(line.to_string());
        }
    }

    fn event(text: &str) -> LogEvent {
        LogEvent {
            level: Level::Information,
            icon: "🐸",
            origin: "Comp".to_string(),
            method: "op".to_string(),
            message: LogMessage::from(text),
            timestamp: "ts".to_string(),
        }
    }

    #[test]
    fn grows_until_one_past_capacity_then_evicts_wholesale() {
        let console = Arc::new(CountingConsole::default());
        let buffer = LogBuffer::new(2, console.clone());

        buffer.record(event("M1"));
        buffer.record(event("M2"));
        buffer.record(event("M3"));
        // Length check happens before insert, so capacity 2 holds three
        // events until the next call.
        assert_eq!(buffer.len(), 3);
        assert_eq!(console.clears.load(Ordering::SeqCst), 0);

        buffer.record(event("M4"));
        assert_eq!(buffer.len(), 1);
        assert_eq!(console.clears.load(Ordering::SeqCst), 1);

        let remaining = buffer.snapshot();
        assert_eq!(remaining[0].message, LogMessage::from("M4"));
    }

    #[test]
    fn clear_empties_history_and_console_together() {
        let console = Arc::new(CountingConsole::default());
        let buffer = LogBuffer::new(10, console.clone());

        buffer.record(event("M1"));
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(console.clears.load(Ordering::SeqCst), 1);
        assert!(console.prints.lock().unwrap().is_empty());
    }

    #[test]
    fn snapshot_is_a_copy() {
        let console = Arc::new(CountingConsole::default());
        let buffer = LogBuffer::new(10, console);

        buffer.record(event("M1"));
        let mut view = buffer.snapshot();
        view.clear();

        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn replay_emits_messages_in_order_and_keeps_history() {
        let console = Arc::new(CountingConsole::default());
        let buffer = LogBuffer::new(10, console.clone());

        buffer.record(event("M1"));
        buffer.record(event("M2"));
        buffer.replay();

        assert_eq!(buffer.len(), 2);
        assert_eq!(console.clears.load(Ordering::SeqCst), 1);
        let prints = console.prints.lock().unwrap();
        assert_eq!(*prints, vec!["M1".to_string(), "M2".to_string()]);
    }
}
