use crate::config::LoggerConfig;
use crate::console::{Console, StdConsole};
use crate::identity::{StaticHost, StaticUser};
use crate::logger::Logger;
use crate::sink::RemoteSink;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Assemble a [`Logger`] from the provided configuration and sink.
///
/// **Parameters**
/// - `config`: [`LoggerConfig`] controlling buffering and console
///   gating.
/// - `sink`: implementation of [`RemoteSink`] that will receive
///   [`crate::record::WireLogItem`]s.
///
/// **Behavior**
///
/// Wires up the process console ([`StdConsole`]) and the fixed-value
/// identity providers, then spawns the background delivery task. The
/// returned handle can be awaited on shutdown if the caller wants the
/// dispatch queue drained; the logging path itself never joins it.
pub fn init_logger_with_sink(
    config: LoggerConfig,
    sink: Arc<dyn RemoteSink>,
) -> (Logger, JoinHandle<()>) {
    let console: Arc<dyn Console> = Arc::new(StdConsole);
    let user = Arc::new(StaticUser::default());
    let host = Arc::new(StaticHost::default());
    Logger::new(config, console, user, host, sink)
}

/// Assemble a [`Logger`] that ships qualifying events to the HTTP
/// collector at `config.url`.
///
/// Equivalent to calling [`init_logger_with_sink`] with an
/// [`crate::http::HttpSink`]. This is the recommended entrypoint for
/// typical applications.
#[cfg(feature = "http")]
pub fn init_logger(config: LoggerConfig) -> (Logger, JoinHandle<()>) {
    let sink = Arc::new(crate::http::HttpSink::new(config.url.clone()));
    init_logger_with_sink(config, sink)
}
