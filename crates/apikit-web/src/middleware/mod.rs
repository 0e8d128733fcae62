//! Axum middleware stack.
//!
//! Apply with the innermost layer first so the trace scope covers the
//! logging filter:
//!
//! ```ignore
//! let app = router
//!     .layer(axum::middleware::from_fn_with_state(
//!         config.http_log.clone(),
//!         middleware::logging::log_requests,
//!     ))
//!     .layer(axum::middleware::from_fn(
//!         middleware::trace::propagate_trace_id,
//!     ));
//! ```

pub mod headers;
pub mod logging;
pub mod trace;
