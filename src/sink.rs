use crate::record::WireLogItem;
use async_trait::async_trait;
use std::error::Error;

/// Asynchronous destination for [`WireLogItem`]s produced by the logger.
///
/// Implementations are responsible for transporting items to a concrete
/// collector (HTTP endpoint, stdout, etc). The logger calls `send` from a
/// background task and never awaits it on the application thread.
#[async_trait]
pub trait RemoteSink: Send + Sync {
    /// Send a single log item to the underlying collector.
    ///
    /// **Parameters**
    /// - `item`: fully-populated [`WireLogItem`] produced by the logger.
    ///
    /// **Returns**
    /// - `Ok(())` if the item was accepted by the collector.
    /// - `Err(..)` if the collector failed (network error, serialization
    ///   error, HTTP status, etc.). Delivery is best-effort: the logger
    ///   reports the failure on stderr and drops the item, it never
    ///   retries and never surfaces the error to the log-call site.
    ///
    /// This method is called from a Tokio task that owns the dispatch
    /// loop. Implementations should strive to be non-blocking and use
    /// async I/O under the hood.
    async fn send(&self, item: &WireLogItem) -> Result<(), Box<dyn Error + Send + Sync>>;
}
