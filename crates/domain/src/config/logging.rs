use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error (critical is treated as error)
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_true")]
    pub enable_console_logging: bool,

    #[serde(default)]
    pub enable_file_logging: bool,

    #[serde(default = "default_log_file_path")]
    pub log_file_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            enable_console_logging: true,
            enable_file_logging: false,
            log_file_path: default_log_file_path(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file_path() -> String {
    "logs/doh_client.log".to_string()
}

fn default_true() -> bool {
    true
}
