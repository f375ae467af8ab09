use log_relay::env::config_from_env;
use log_relay::init::init_logger;
use serde_json::json;
use tokio::time::{sleep, Duration};

#[tokio::main]
async fn main() {
    let config = config_from_env().expect("invalid LOG_RELAY_* environment");
    println!("shipping qualifying events to {}", config.url);

    let (logger, _handle) = init_logger(config);

    logger.information("RemoteDemo", "main", "service started");
    logger.error(
        "RemoteDemo",
        "authenticate",
        json!({"user_id": 42, "reason": "invalid password"}),
    );

    // Give the background task a little time to drain the channel.
    sleep(Duration::from_secs(2)).await;
}
