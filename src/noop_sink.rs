use crate::record::WireLogItem;
use crate::sink::RemoteSink;
use async_trait::async_trait;
use std::error::Error;

/// A sink that simply drops all items.
///
/// Useful for measuring the overhead of the logger itself without any
/// external I/O, and for unit tests that don't care about delivery.
#[derive(Clone, Default)]
pub struct NoopSink;

#[async_trait]
impl RemoteSink for NoopSink {
    async fn send(&self, _item: &WireLogItem) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
