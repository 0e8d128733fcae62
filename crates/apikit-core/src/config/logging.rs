//! Logging and HTTP capture configuration.

use serde::{Deserialize, Serialize};

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Request/response capture settings for the HTTP logging middleware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpLogConfig {
    /// Whether to record request bodies.
    #[serde(default = "default_true")]
    pub capture_request_body: bool,
    /// Whether to record response bodies.
    #[serde(default = "default_true")]
    pub capture_response_body: bool,
    /// Whether to record request/response headers.
    #[serde(default = "default_true")]
    pub capture_headers: bool,
    /// Bodies with a declared length above this cap are skipped.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for HttpLogConfig {
    fn default() -> Self {
        Self {
            capture_request_body: default_true(),
            capture_response_body: default_true(),
            capture_headers: default_true(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    16 * 1024
}
