use crate::record::WireLogItem;
use crate::sink::RemoteSink;
use reqwest::Client;
use async_trait::async_trait;
use std::error::Error;

/// HTTP implementation of [`RemoteSink`].
///
/// Issues one `PUT` per log item with a JSON body and
/// `Content-Type: application/json`; the response body is treated as
/// opaque and never parsed.
#[derive(Clone)]
pub struct HttpSink {
    client: Client,
    /// Full collector endpoint, e.g. "http://localhost:5100/api/v1/log".
    url: String,
}

impl HttpSink {
    /// Construct a new sink targeting the given collector URL.
    ///
    /// The underlying [`Client`] holds a connection pool, so one sink
    /// instance should be reused for the process lifetime.
    pub fn new(url: impl Into<String>) -> Self {
        HttpSink {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl RemoteSink for HttpSink {
    async fn send(&self, item: &WireLogItem) -> Result<(), Box<dyn Error + Send + Sync>> {
        let body = serde_json::to_string(item)?;
        let resp = self
            .client
            .put(&self.url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_else(|_| "<no body>".to_string());
            Err(format!("log collector rejected item with status {}: {}", status, text).into())
        }
    }
}
