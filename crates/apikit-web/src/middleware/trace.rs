//! Trace-id propagation middleware.
//!
//! Pins one [`TraceId`] for the life of each request: reused from a
//! well-formed `x-trace-id` request header (upstream gateways forward it)
//! or freshly generated. The id is carried by the request's tracing span,
//! readable via [`TraceId::current`] for envelope construction, and
//! mirrored on the response header.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

use apikit_core::trace::{self, TraceId};

/// Header carrying the trace id on requests and responses.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Middleware that scopes a trace id around the inner service.
pub async fn propagate_trace_id(request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<TraceId>().ok())
        .unwrap_or_else(TraceId::new);

    let span = tracing::info_span!("request", trace_id = %trace_id);
    let mut response = trace::with_trace_id(trace_id, next.run(request).instrument(span)).await;

    if let Ok(value) = HeaderValue::from_str(&trace_id.to_string()) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }

    response
}
