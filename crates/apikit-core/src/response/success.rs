//! Success response envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::constant::types;
use crate::response::head::ResponseHead;

/// Envelope for successful operations.
///
/// JSON shape:
/// `{timestamp, traceId, type, code, message, success, size, data?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    /// Shared envelope fields (`type` is always `SUCCESS`).
    #[serde(flatten)]
    pub head: ResponseHead,
    /// Number of items in `data`; 1 for single payloads, 0 for not-found.
    pub size: usize,
    /// Returned payload, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> SuccessResponse<T> {
    /// Builds a success envelope with the given status code and size.
    ///
    /// Prefer [`crate::response::builder::ResponseBuilder`], which picks the
    /// code and size automatically.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        size: usize,
        data: Option<T>,
    ) -> Self {
        Self {
            head: ResponseHead::new(types::SUCCESS, code, message.into(), true),
            size,
            data,
        }
    }

    /// The HTTP status encoded in the envelope code, defaulting to 200 for
    /// non-HTTP table codes.
    pub fn status_code(&self) -> StatusCode {
        self.head
            .code
            .parse::<u16>()
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::OK)
    }
}

impl<T: Serialize> IntoResponse for SuccessResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
