//! Response `type` labels.
//!
//! Error labels live on [`crate::error::ErrorKind::label`] so the dispatch
//! table has a single source; only the non-error labels are listed here.

pub const SUCCESS: &str = "SUCCESS";
pub const ERROR: &str = "ERROR";
pub const WARNING: &str = "WARNING";
pub const INFO: &str = "INFO";
