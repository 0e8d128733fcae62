//! Error response envelope and the exception-to-response translation.
//!
//! `impl IntoResponse for AppError` is the terminal translation layer at the
//! API boundary: handlers return `Result<_, AppError>` and every error leaves
//! the service as a standardized envelope with the mapped HTTP status. Each
//! handled error is also logged with its trace id and construction-site
//! detail, which is the only place the internals surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::constant::log::ERROR_LOG;
use crate::error::{AppError, ErrorDetail};
use crate::profile::Profile;
use crate::response::head::{ResponseHead, ResponseMessage};

/// Envelope for failed operations.
///
/// JSON shape: `{timestamp, traceId, type, code, message, success, status}`.
/// `detail` stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Shared envelope fields (`success` is always `false`).
    #[serde(flatten)]
    pub head: ResponseHead,
    /// HTTP status the response is sent with.
    pub status: u16,
    /// Construction-site detail, logged but never serialized.
    #[serde(skip)]
    pub detail: Option<ErrorDetail>,
}

impl ErrorResponse {
    /// Translate an [`AppError`] through the dispatch table.
    ///
    /// Validation errors carry their field map as the envelope message;
    /// every other kind reports its table message. The internal debug
    /// message only ever reaches the detail.
    pub fn from_error(error: &AppError) -> Self {
        let kind = error.kind;
        let message: ResponseMessage = match &error.fields {
            Some(fields) => fields.clone().into(),
            None => kind.user_message().into(),
        };

        Self {
            head: ResponseHead::new(kind.label(), kind.code(), message, false),
            status: kind.status().as_u16(),
            detail: error.detail.clone(),
        }
    }

    /// The HTTP status recorded on the envelope, defaulting to 500 when the
    /// recorded value is out of range.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Drop the server-side detail, keeping the trace id for correlation.
    pub fn strip_detail(&mut self) {
        self.detail = None;
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = ErrorResponse::from_error(&self);
        log_handled_error(&self, &response);

        if !Profile::active().is_development() {
            response.strip_detail();
        }

        response.into_response()
    }
}

/// Structured `error_log` event for a handled error, correlated by trace id.
fn log_handled_error(error: &AppError, response: &ErrorResponse) {
    match &error.detail {
        Some(detail) => tracing::error!(
            log_type = ERROR_LOG,
            trace_id = %response.head.trace_id,
            code = %response.head.code,
            status = response.status,
            exception_type = detail.kind,
            error_file = detail.file,
            error_line = detail.line,
            detail = %detail,
            "{}", error.message,
        ),
        None => tracing::error!(
            log_type = ERROR_LOG,
            trace_id = %response.head.trace_id,
            code = %response.head.code,
            status = response.status,
            "{}", error.message,
        ),
    }
}
