use crate::config::LoggerConfig;

/// Environment variable names used by this crate for convenient
/// configuration from host applications.
///
/// These are purely helpers; the core logger types remain decoupled from
/// environment access.

/// Collector endpoint URL, e.g. `http://localhost:5100/api/v1/log`.
pub const LOG_RELAY_URL_ENV: &str = "LOG_RELAY_URL";

/// Production flag (`true`/`false`/`1`/`0`); console output is
/// suppressed when set.
pub const LOG_RELAY_PRODUCTION_ENV: &str = "LOG_RELAY_PRODUCTION";

/// Local history buffer capacity.
pub const LOG_RELAY_BUFFER_SIZE_ENV: &str = "LOG_RELAY_BUFFER_SIZE";

/// chrono strftime format for timestamps.
pub const LOG_RELAY_TIME_FORMAT_ENV: &str = "LOG_RELAY_TIME_FORMAT";

/// Site name attached to every remote log item.
pub const LOG_RELAY_SITE_NAME_ENV: &str = "LOG_RELAY_SITE_NAME";

/// Team name attached to every remote log item.
pub const LOG_RELAY_TEAM_NAME_ENV: &str = "LOG_RELAY_TEAM_NAME";

/// Dispatch channel capacity.
pub const LOG_RELAY_CHANNEL_BUFFER_ENV: &str = "LOG_RELAY_CHANNEL_BUFFER";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Error type returned when environment configuration cannot be parsed.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}

fn parse_usize(key: &'static str, value: String) -> Result<usize, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

/// Build a [`LoggerConfig`] from the `LOG_RELAY_*` environment
/// variables, falling back to [`LoggerConfig::default`] for anything
/// unset.
pub fn config_from_env() -> Result<LoggerConfig, ConfigError> {
    let defaults = LoggerConfig::default();

    Ok(LoggerConfig {
        production: parse_bool(
            LOG_RELAY_PRODUCTION_ENV,
            env_or(LOG_RELAY_PRODUCTION_ENV, &defaults.production.to_string()),
        )?,
        buffer_size: parse_usize(
            LOG_RELAY_BUFFER_SIZE_ENV,
            env_or(LOG_RELAY_BUFFER_SIZE_ENV, &defaults.buffer_size.to_string()),
        )?,
        url: env_or(LOG_RELAY_URL_ENV, &defaults.url),
        time_format: env_or(LOG_RELAY_TIME_FORMAT_ENV, &defaults.time_format),
        site_name: env_or(LOG_RELAY_SITE_NAME_ENV, &defaults.site_name),
        team_name: env_or(LOG_RELAY_TEAM_NAME_ENV, &defaults.team_name),
        channel_buffer: parse_usize(
            LOG_RELAY_CHANNEL_BUFFER_ENV,
            env_or(
                LOG_RELAY_CHANNEL_BUFFER_ENV,
                &defaults.channel_buffer.to_string(),
            ),
        )?,
    })
}
