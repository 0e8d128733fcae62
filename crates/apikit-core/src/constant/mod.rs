//! Shared constant tables used by every Apikit service.

pub mod codes;
pub mod keywords;
pub mod log;
pub mod messages;
pub mod types;
