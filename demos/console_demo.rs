use std::sync::Arc;

use log_relay::config::LoggerConfig;
use log_relay::init::init_logger_with_sink;
use log_relay::noop_sink::NoopSink;
use serde_json::json;

#[tokio::main]
async fn main() {
    let config = LoggerConfig {
        buffer_size: 4,
        ..LoggerConfig::default()
    };
    let (logger, _handle) = init_logger_with_sink(config, Arc::new(NoopSink));

    logger.debug("ConsoleDemo", "main", "starting up");
    logger.information("ConsoleDemo", "main", "ready");
    logger.warning("ConsoleDemo", "main", "disk space low");
    logger.error("ConsoleDemo", "save", json!({"code": 500}));

    println!("history holds {} events", logger.buffer().len());

    logger.dump();
}
