//! `log_type` values attached to emitted log events for downstream filtering.

pub const API_LOG: &str = "api_log";
pub const ERROR_LOG: &str = "error_log";
pub const SECURITY_LOG: &str = "security_log";
