//! User-facing message strings and log templates.

/// Messages about a single record.
pub mod entity {
    pub const NOT_FOUND: &str = "No record found.";
    pub const FOUND: &str = "Record found.";
    pub const SAVED: &str = "Record saved successfully.";
    pub const UPDATED: &str = "Record updated successfully.";
    pub const DELETED: &str = "Record deleted successfully.";
}

/// Messages about record collections.
pub mod entities {
    pub const NOT_FOUND: &str = "No records found.";
    pub const FOUND: &str = "Records listed.";
    pub const SAVED: &str = "Records saved successfully.";
    pub const UPDATED: &str = "Records updated successfully.";
    pub const DELETED: &str = "Records deleted successfully.";
}

/// Client-facing error messages, keyed by error kind.
pub mod error {
    pub const UNEXPECTED: &str = "An unexpected error occurred. Please try again later.";
    pub const INTERNAL_SERVER_ERROR: &str = "A server error occurred. Please try again later.";
    pub const INVALID_ARGUMENT: &str = "Invalid argument. Please check the submitted values.";
    pub const VALIDATION_ERROR: &str = "The submitted values are invalid. Please review them.";
    pub const ENTITY_NOT_FOUND: &str = "No record found.";
    pub const NO_SUCH_ELEMENT: &str = "No element found.";
    pub const RESOURCE_NOT_FOUND: &str = "Resource not found.";
    pub const ENTITY_EXISTS: &str = "The record already exists.";
    pub const UNAUTHORIZED: &str = "Authentication required.";
    pub const UNSUPPORTED_OPERATION: &str = "Unsupported operation.";
}
