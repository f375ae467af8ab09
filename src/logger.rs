use crate::buffer::LogBuffer;
use crate::config::LoggerConfig;
use crate::console::{self, Console};
use crate::identity::{HostProvider, UserProvider};
use crate::level::{self, Level};
use crate::record::{LogEvent, LogField, LogMessage, NameField, SiteFields, WireLogItem};
use crate::sink::RemoteSink;
use chrono::Local;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Application logger. Every event lands in a bounded local history and
/// is mirrored to the local console; qualifying levels are additionally
/// shipped to a remote collector.
///
/// Console output is suppressed in production; history and remote
/// delivery are unconditional. Remote I/O runs on a background task fed
/// through a bounded channel, so every entry point returns immediately
/// and never observes network outcome.
pub struct Logger {
    config: LoggerConfig,
    buffer: Arc<LogBuffer>,
    console: Arc<dyn Console>,
    user: Arc<dyn UserProvider>,
    host: Arc<dyn HostProvider>,
    sender: mpsc::Sender<WireLogItem>,
    /// Total events seen by the logger, every level.
    pub total_events: Arc<AtomicU64>,
    /// Successfully enqueued for remote delivery.
    pub enqueued_remote: Arc<AtomicU64>,
    /// Dropped because the dispatch channel was full.
    pub dropped_remote: Arc<AtomicU64>,
}

impl Logger {
    /// Create a new logger and spawn the background task that pulls
    /// [`WireLogItem`]s from a bounded channel and sends them to the
    /// provided [`RemoteSink`], one item per qualifying log call.
    ///
    /// A minimal channel capacity is enforced to avoid degenerate
    /// configurations. Must be called within a Tokio runtime. The
    /// returned handle is never joined by the logging path; the task
    /// drains and exits once the logger is dropped.
    pub fn new(
        config: LoggerConfig,
        console: Arc<dyn Console>,
        user: Arc<dyn UserProvider>,
        host: Arc<dyn HostProvider>,
        sink: Arc<dyn RemoteSink>,
    ) -> (Self, JoinHandle<()>) {
        let channel_buffer = config.channel_buffer.max(16);
        let (tx, mut rx) = mpsc::channel::<WireLogItem>(channel_buffer);

        let handle = tokio::spawn(async move {
            while let Some(item) = rx.recv().await {
                // Delivery is best-effort; failures go to stderr only,
                // never back through the logger.
                if let Err(e) = sink.send(&item).await {
                    eprintln!("remote log delivery failed: {}", e);
                }
            }
        });

        let buffer = Arc::new(LogBuffer::new(config.buffer_size, console.clone()));

        (
            Logger {
                config,
                buffer,
                console,
                user,
                host,
                sender: tx,
                total_events: Arc::new(AtomicU64::new(0)),
                enqueued_remote: Arc::new(AtomicU64::new(0)),
                dropped_remote: Arc::new(AtomicU64::new(0)),
            },
            handle,
        )
    }

    fn log(&self, origin: &str, method: &str, message: LogMessage, level: Level) {
        self.total_events.fetch_add(1, Ordering::Relaxed);

        let spec = level::lookup(level);
        let timestamp = Local::now().format(&self.config.time_format).to_string();
        let event = LogEvent {
            level,
            icon: spec.map(|s| s.icon).unwrap_or(level::DEFAULT_ICON),
            origin: origin.to_string(),
            method: method.to_string(),
            message,
            timestamp,
        };

        self.buffer.record(event.clone());

        if !self.config.production {
            if let Some(spec) = spec {
                (spec.print)(&*self.console, &console::render_line(&event));
            }
        }

        if level.ships_remote() {
            let item = self.wire_item(&event);
            if self.sender.try_send(item).is_ok() {
                self.enqueued_remote.fetch_add(1, Ordering::Relaxed);
            } else {
                self.dropped_remote.fetch_add(1, Ordering::Relaxed);
                eprintln!("log dispatch channel full, dropping remote log item");
            }
        }
    }

    fn wire_item(&self, event: &LogEvent) -> WireLogItem {
        WireLogItem {
            fields: SiteFields {
                site: self.config.site_name.clone(),
                team: self.config.team_name.clone(),
            },
            log: LogField {
                level: event.level.to_string(),
            },
            user: NameField {
                name: self.user.user(),
            },
            host: NameField {
                name: self.host.host(),
            },
            origin: event.origin.clone(),
            method: event.method.clone(),
            message: event.message.wire_text(),
            timestamp: event.timestamp.clone(),
        }
    }

    /// Log a debug event. Console and history only, never remote.
    pub fn debug(&self, origin: &str, method: &str, message: impl Into<LogMessage>) {
        self.log(origin, method, message.into(), Level::Debug);
    }

    /// Log an informational event.
    pub fn information(&self, origin: &str, method: &str, message: impl Into<LogMessage>) {
        self.log(origin, method, message.into(), Level::Information);
    }

    /// Log a warning event.
    pub fn warning(&self, origin: &str, method: &str, message: impl Into<LogMessage>) {
        self.log(origin, method, message.into(), Level::Warning);
    }

    /// Log an error event.
    pub fn error(&self, origin: &str, method: &str, message: impl Into<LogMessage>) {
        self.log(origin, method, message.into(), Level::Error);
    }

    /// Log a fatal event.
    pub fn fatal(&self, origin: &str, method: &str, message: impl Into<LogMessage>) {
        self.log(origin, method, message.into(), Level::Fatal);
    }

    /// Empty the history buffer and clear the visible console.
    pub fn clear_buffer(&self) {
        self.buffer.clear();
    }

    /// Clear the visible console and re-print every buffered message via
    /// its level's print capability, oldest first. The history itself is
    /// left intact.
    pub fn dump(&self) {
        self.buffer.replay();
    }

    /// Copied view of the current history for external inspection.
    pub fn buffer(&self) -> Vec<LogEvent> {
        self.buffer.snapshot()
    }
}
