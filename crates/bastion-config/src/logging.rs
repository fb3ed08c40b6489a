use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Level for this application's targets when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
    /// When set, JSON logs are also written to daily-rolling files here.
    pub directory: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("LOG_LEVEL").ok(),
            env::var("LOG_FORMAT").ok(),
            env::var("LOG_DIR").ok(),
        )
    }

    fn from_values(level: Option<String>, format: Option<String>, dir: Option<String>) -> Self {
        let format = match format.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        Self {
            level: level.unwrap_or_else(|| "info".to_string()),
            format,
            directory: dir.filter(|d| !d.trim().is_empty()),
        }
    }
}
