use std::env;

/// Log output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Schedule source
    pub schedule_url: String,
    pub fetch_timeout_ms: u64,
    pub user_agent: String,

    // Event link composition
    pub img_base: String,
    pub site_base: String,

    // Channel catalog
    pub catalog_base: String,
    pub playback_user_agent: String,

    // Output
    pub events_output: String,
    pub catalog_output: String,

    // Logging
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from any variable lookup; unset or unparsable
    /// values fall back to the defaults
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            // Schedule source
            schedule_url: var("SCHEDULE_URL")
                .unwrap_or_else(|| "https://a.ftvhd.com/diaries.json".to_string()),
            fetch_timeout_ms: var("FETCH_TIMEOUT_MS")
                .unwrap_or_else(|| "10000".to_string())
                .parse()
                .unwrap_or(10_000), // 10 seconds
            user_agent: var("USER_AGENT").unwrap_or_else(|| DESKTOP_USER_AGENT.to_string()),

            // Event link composition
            img_base: var("IMG_BASE")
                .unwrap_or_else(|| "https://img.futbolonlinehd.com".to_string()),
            site_base: var("SITE_BASE")
                .unwrap_or_else(|| "https://rojadirectahd.futbol".to_string()),

            // Channel catalog
            catalog_base: var("CATALOG_BASE")
                .unwrap_or_else(|| "https://fast-tv.net".to_string()),
            playback_user_agent: var("PLAYBACK_USER_AGENT")
                .unwrap_or_else(|| DESKTOP_USER_AGENT.to_string()),

            // Output
            events_output: var("EVENTS_OUTPUT")
                .unwrap_or_else(|| "rojadirecta_events.json".to_string()),
            catalog_output: var("CATALOG_OUTPUT")
                .unwrap_or_else(|| "sports_channels.json".to_string()),

            // Logging
            log_format: var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(LogFormat::Text),
        }
    }
}

/// Browser user agent; the catalog player pages refuse non-browser clients
pub const DESKTOP_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
