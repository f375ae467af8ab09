/// Process-wide logger configuration, read once at startup and immutable
/// for the process lifetime.
///
/// **Fields**
/// - `production`: suppresses all console output when `true`; buffering
///   and remote delivery are unaffected.
/// - `buffer_size`: capacity of the local history buffer (wholesale
///   eviction past this size).
/// - `url`: collector endpoint receiving one HTTP PUT per qualifying
///   log call.
/// - `time_format`: chrono strftime format applied once at call time.
/// - `site_name` / `team_name`: metadata attached to every remote item.
/// - `channel_buffer`: capacity of the dispatch queue between log call
///   sites and the background delivery task; items are dropped (with a
///   stderr diagnostic) when it is full.
#[derive(Clone, Debug)]
pub struct LoggerConfig {
    pub production: bool,
    pub buffer_size: usize,
    pub url: String,
    pub time_format: String,
    pub site_name: String,
    pub team_name: String,
    pub channel_buffer: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            production: false,
            buffer_size: 500,
            url: "http://localhost:5100/api/v1/log".to_string(),
            time_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            site_name: "LoggerExample".to_string(),
            team_name: "ExampleTeam".to_string(),
            channel_buffer: 256,
        }
    }
}
