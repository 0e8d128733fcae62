//! # apikit-core
//!
//! Shared core for Apikit microservices. Contains the unified error system,
//! standardized success/error response envelopes, the response builder,
//! trace-id handling, environment profiles, configuration schemas, and the
//! dispatch-table constants every service reuses.
//!
//! This crate has **no** internal dependencies on other Apikit crates.

pub mod config;
pub mod constant;
pub mod error;
pub mod profile;
pub mod response;
pub mod result;
pub mod telemetry;
pub mod trace;

pub use error::{AppError, ErrorKind};
pub use profile::Profile;
pub use response::builder::ResponseBuilder;
pub use response::error::ErrorResponse;
pub use response::success::SuccessResponse;
pub use result::AppResult;
pub use trace::TraceId;
