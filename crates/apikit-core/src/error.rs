//! Unified application error types for Apikit services.
//!
//! All services map their internal failures into [`AppError`] for consistent
//! propagation through the ? operator. Each [`ErrorKind`] carries its full
//! HTTP translation: status, numeric string code, response-type label, and
//! the message shown to clients. This table is the single source of truth
//! for the exception-to-response mapping at the API boundary.

use std::collections::HashMap;
use std::fmt;
use std::panic::Location;

use axum::http::StatusCode;
use thiserror::Error;

use crate::constant::{codes, messages};

/// Top-level error kind categorization used across the entire application.
///
/// Every variant maps 1:1 to a `(status, code, label, user message)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// An unclassified failure. Maps to HTTP 500.
    Unexpected,
    /// An argument was rejected by the callee. Maps to HTTP 400.
    IllegalArgument,
    /// Request payload validation failed. Maps to HTTP 400.
    Validation,
    /// A looked-up element was absent. Maps to HTTP 404.
    NoSuchElement,
    /// The requested resource was not found. Maps to HTTP 404.
    ResourceNotFound,
    /// The requested database entity was not found. Maps to HTTP 404.
    EntityNotFound,
    /// The entity already exists. Maps to HTTP 409.
    EntityExists,
    /// The caller is not authenticated. Maps to HTTP 401.
    Unauthorized,
}

impl ErrorKind {
    /// All variants, in dispatch-table order.
    pub const ALL: [Self; 8] = [
        Self::Unexpected,
        Self::IllegalArgument,
        Self::Validation,
        Self::NoSuchElement,
        Self::ResourceNotFound,
        Self::EntityNotFound,
        Self::EntityExists,
        Self::Unauthorized,
    ];

    /// The HTTP status this kind translates to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IllegalArgument | Self::Validation => StatusCode::BAD_REQUEST,
            Self::NoSuchElement | Self::ResourceNotFound | Self::EntityNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::EntityExists => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    /// The numeric string code reported in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unexpected => codes::UNEXPECTED,
            Self::IllegalArgument => codes::ILLEGAL_ARGUMENT,
            Self::Validation => codes::VALIDATION,
            Self::NoSuchElement => codes::NO_SUCH_ELEMENT,
            Self::ResourceNotFound => codes::RESOURCE_NOT_FOUND,
            Self::EntityNotFound => codes::ENTITY_NOT_FOUND,
            Self::EntityExists => codes::ENTITY_EXISTS,
            Self::Unauthorized => codes::UNAUTHORIZED,
        }
    }

    /// The `type` label carried by error envelopes.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unexpected => "ERROR: EXCEPTION",
            Self::IllegalArgument => "ERROR: ILLEGAL_ARGUMENT_EXCEPTION",
            Self::Validation => "ERROR: VALIDATION_EXCEPTION",
            Self::NoSuchElement => "ERROR: NO_SUCH_ELEMENT_EXCEPTION",
            Self::ResourceNotFound => "ERROR: RESOURCE_NOT_FOUND_EXCEPTION",
            Self::EntityNotFound => "ERROR: ENTITY_NOT_FOUND_EXCEPTION",
            Self::EntityExists => "ERROR: ENTITY_EXISTS_EXCEPTION",
            Self::Unauthorized => "ERROR: UNAUTHORIZED_EXCEPTION",
        }
    }

    /// The message shown to clients for this kind.
    ///
    /// Internal debug messages stay in [`ErrorDetail`] and are never sent out.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unexpected => messages::error::UNEXPECTED,
            Self::IllegalArgument => messages::error::INVALID_ARGUMENT,
            Self::Validation => messages::error::VALIDATION_ERROR,
            Self::NoSuchElement => messages::error::NO_SUCH_ELEMENT,
            Self::ResourceNotFound => messages::error::RESOURCE_NOT_FOUND,
            Self::EntityNotFound => messages::error::ENTITY_NOT_FOUND,
            Self::EntityExists => messages::error::ENTITY_EXISTS,
            Self::Unauthorized => messages::error::UNAUTHORIZED,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Server-side error detail, extracted at the error's construction site.
///
/// Logged together with the trace id so failures can be located without
/// leaking internals; never serialized into client responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Source file where the error was constructed.
    pub file: &'static str,
    /// Line within that file.
    pub line: u32,
    /// Internal debug message (not the client-facing one).
    pub debug_message: String,
    /// Label of the originating error kind.
    pub kind: &'static str,
}

impl ErrorDetail {
    fn new(kind: ErrorKind, debug_message: &str, location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            debug_message: debug_message.to_owned(),
            kind: kind.label(),
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}:{} - {}",
            self.kind, self.file, self.line, self.debug_message
        )
    }
}

/// The unified application error used throughout Apikit services.
///
/// `message` is internal and feeds [`ErrorDetail`]; what clients see comes
/// from [`ErrorKind::user_message`] (or the validation field map).
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// Internal debug message.
    pub message: String,
    /// Field-name to message map for validation failures.
    pub fields: Option<HashMap<String, String>>,
    /// Construction-site detail for logging.
    pub detail: Option<ErrorDetail>,
}

impl AppError {
    /// Create a new application error.
    #[track_caller]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let detail = ErrorDetail::new(kind, &message, Location::caller());

        Self {
            kind,
            message,
            fields: None,
            detail: Some(detail),
        }
    }

    /// Create an unexpected (internal) error.
    #[track_caller]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create an illegal-argument error.
    #[track_caller]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalArgument, message)
    }

    /// Create a no-such-element error.
    #[track_caller]
    pub fn no_such_element(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoSuchElement, message)
    }

    /// Create a resource-not-found error.
    #[track_caller]
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceNotFound, message)
    }

    /// Create an entity-not-found error.
    #[track_caller]
    pub fn entity_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntityNotFound, message)
    }

    /// Create an entity-exists error.
    #[track_caller]
    pub fn entity_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntityExists, message)
    }

    /// Create an unauthorized error.
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a validation error carrying a field-name to message map.
    #[track_caller]
    pub fn validation(fields: HashMap<String, String>) -> Self {
        let mut error = Self::new(ErrorKind::Validation, messages::error::VALIDATION_ERROR);
        error.fields = Some(fields);
        error
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            fields: self.fields.clone(),
            detail: self.detail.clone(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(format!("I/O error: {err}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::illegal_argument(format!("JSON error: {err}"))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::unexpected(format!("Configuration error: {err}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields = HashMap::new();
        for (field, errors) in err.field_errors() {
            let message = errors
                .first()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .unwrap_or_default();
            fields.insert(field.to_string(), message);
        }

        Self::validation(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table_statuses() {
        let expected = [
            (ErrorKind::Unexpected, 500),
            (ErrorKind::IllegalArgument, 400),
            (ErrorKind::Validation, 400),
            (ErrorKind::NoSuchElement, 404),
            (ErrorKind::ResourceNotFound, 404),
            (ErrorKind::EntityNotFound, 404),
            (ErrorKind::EntityExists, 409),
            (ErrorKind::Unauthorized, 401),
        ];
        for (kind, status) in expected {
            assert_eq!(kind.status().as_u16(), status, "{kind}");
        }
    }

    #[test]
    fn test_dispatch_table_codes() {
        let expected = [
            (ErrorKind::Unexpected, "5000"),
            (ErrorKind::IllegalArgument, "2800"),
            (ErrorKind::Validation, "1200"),
            (ErrorKind::NoSuchElement, "3100"),
            (ErrorKind::ResourceNotFound, "1100"),
            (ErrorKind::EntityNotFound, "2900"),
            (ErrorKind::EntityExists, "3000"),
            (ErrorKind::Unauthorized, "2500"),
        ];
        for (kind, code) in expected {
            assert_eq!(kind.code(), code, "{kind}");
        }
    }

    #[test]
    fn test_table_is_total() {
        for kind in ErrorKind::ALL {
            assert!(!kind.code().is_empty());
            assert!(kind.label().starts_with("ERROR: "));
            assert!(!kind.user_message().is_empty());
        }
    }

    #[test]
    fn test_detail_records_construction_site() {
        let error = AppError::entity_not_found("row 42 missing");
        let detail = error.detail.expect("detail should be captured");
        assert!(detail.file.ends_with("error.rs"));
        assert_eq!(detail.debug_message, "row 42 missing");
        assert_eq!(detail.kind, "ERROR: ENTITY_NOT_FOUND_EXCEPTION");
    }

    #[test]
    fn test_validation_error_carries_fields() {
        let mut fields = HashMap::new();
        fields.insert("email".to_owned(), "must be a valid email".to_owned());
        let error = AppError::validation(fields);
        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(
            error.fields.as_ref().and_then(|f| f.get("email")).unwrap(),
            "must be a valid email"
        );
    }
}
