//! Request/response logging middleware.
//!
//! Emits one structured `api_log` event per request carrying method, path,
//! status, timing, peer information, headers, and — for loggable content
//! types within the configured size cap — the request and response bodies.
//! Bodies are buffered and replayed so handlers and clients see them intact.

use std::net::SocketAddr;
use std::time::Instant;

use axum::body::{Body, HttpBody, to_bytes};
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, Response, header};
use axum::middleware::Next;
use tracing::debug;

use apikit_core::config::logging::HttpLogConfig;
use apikit_core::constant::log::API_LOG;

use crate::middleware::headers::headers_to_json;

/// Content-type prefixes whose bodies may be written to the log.
const LOGGABLE_CONTENT_TYPES: &[&str] = &[
    "application/json",
    "application/x-www-form-urlencoded",
    "text/",
];

/// Placeholder recorded when a body exists but is not captured.
const BODY_SKIPPED: &str = "[skipped]";

/// Middleware that logs request and response details per request.
///
/// Attach with `axum::middleware::from_fn_with_state(config, log_requests)`.
pub async fn log_requests(
    State(config): State<HttpLogConfig>,
    request: Request,
    next: Next,
) -> Response<Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let remote_address = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string());
    let content_type = header_value(request.headers(), header::CONTENT_TYPE.as_str());
    let content_length = declared_length(request.headers());
    let user_agent = header_value(request.headers(), header::USER_AGENT.as_str());
    let request_headers = headers_snapshot(&config, request.headers());

    let (request, request_body) = if config.capture_request_body {
        capture_request_body(request, &config).await
    } else {
        (request, BODY_SKIPPED.to_owned())
    };

    let start = Instant::now();
    let response = next.run(request).await;
    let execution_time_ms = start.elapsed().as_millis() as u64;

    let status = response.status();
    let response_headers = headers_snapshot(&config, response.headers());
    let (response, response_body) = if config.capture_response_body {
        capture_response_body(response, &config).await
    } else {
        (response, BODY_SKIPPED.to_owned())
    };

    debug!(
        log_type = API_LOG,
        request_method = %method,
        uri = uri.path(),
        query_string = uri.query().unwrap_or(""),
        status_code = status.as_u16(),
        execution_time_ms,
        remote_address = remote_address.as_deref().unwrap_or("unknown"),
        user_agent = user_agent.as_deref().unwrap_or(""),
        content_type = content_type.as_deref().unwrap_or(""),
        content_length = content_length.unwrap_or(0) as u64,
        request_headers = %request_headers,
        response_headers = %response_headers,
        request_body = %request_body,
        response_body = %response_body,
        "HTTP request",
    );

    response
}

async fn capture_request_body(request: Request, config: &HttpLogConfig) -> (Request, String) {
    match request_capture_decision(request.headers(), config.max_body_bytes) {
        CaptureDecision::Empty => (request, String::new()),
        CaptureDecision::Skip => (request, BODY_SKIPPED.to_owned()),
        CaptureDecision::Capture => {
            let (parts, body) = request.into_parts();
            match to_bytes(body, config.max_body_bytes).await {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    (Request::from_parts(parts, Body::from(bytes)), text)
                }
                // The stream failed under us; the request cannot proceed
                // with a truncated body either way.
                Err(_) => (
                    Request::from_parts(parts, Body::empty()),
                    BODY_SKIPPED.to_owned(),
                ),
            }
        }
    }
}

async fn capture_response_body(
    response: Response<Body>,
    config: &HttpLogConfig,
) -> (Response<Body>, String) {
    match response_capture_decision(&response, config.max_body_bytes) {
        CaptureDecision::Empty => (response, String::new()),
        CaptureDecision::Skip => (response, BODY_SKIPPED.to_owned()),
        CaptureDecision::Capture => {
            let (parts, body) = response.into_parts();
            match to_bytes(body, config.max_body_bytes).await {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    (Response::from_parts(parts, Body::from(bytes)), text)
                }
                Err(_) => (
                    Response::from_parts(parts, Body::empty()),
                    BODY_SKIPPED.to_owned(),
                ),
            }
        }
    }
}

enum CaptureDecision {
    /// No declared body; record an empty string.
    Empty,
    /// Body present but not loggable; record the placeholder, leave the
    /// stream untouched.
    Skip,
    /// Buffer and record the body.
    Capture,
}

fn request_capture_decision(headers: &HeaderMap, max_body_bytes: usize) -> CaptureDecision {
    match declared_length(headers) {
        None | Some(0) => CaptureDecision::Empty,
        Some(length) if length > max_body_bytes => CaptureDecision::Skip,
        Some(_) => {
            if content_type_is_loggable(headers) {
                CaptureDecision::Capture
            } else {
                CaptureDecision::Skip
            }
        }
    }
}

// Handler responses carry no Content-Length inside the middleware stack
// (hyper sets it at write time), so the decision comes from the body's own
// size hint. Streaming bodies report no exact size and are never consumed.
fn response_capture_decision(response: &Response<Body>, max_body_bytes: usize) -> CaptureDecision {
    match response.body().size_hint().exact() {
        Some(0) => CaptureDecision::Empty,
        Some(length) if length as usize > max_body_bytes => CaptureDecision::Skip,
        Some(_) if content_type_is_loggable(response.headers()) => CaptureDecision::Capture,
        _ => CaptureDecision::Skip,
    }
}

fn content_type_is_loggable(headers: &HeaderMap) -> bool {
    header_value(headers, header::CONTENT_TYPE.as_str())
        .map(|content_type| {
            LOGGABLE_CONTENT_TYPES
                .iter()
                .any(|prefix| content_type.starts_with(prefix))
        })
        .unwrap_or(false)
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn headers_snapshot(config: &HttpLogConfig, headers: &HeaderMap) -> String {
    if config.capture_headers {
        headers_to_json(headers).to_string()
    } else {
        String::new()
    }
}
