//! Flat numeric string codes reported in response envelopes.
//!
//! The values are stable API; consuming services and frontends match on them.

pub const UNEXPECTED: &str = "5000";
pub const INVALID_USER: &str = "1000";
pub const RESOURCE_NOT_FOUND: &str = "1100";
pub const VALIDATION: &str = "1200";
pub const UNSUPPORTED_ENCODING: &str = "1300";
pub const UNSUPPORTED_MEDIA_TYPE: &str = "1400";
pub const REQUEST_PARAMETER: &str = "1500";
pub const DATA_INTEGRITY_VIOLATION: &str = "1600";
pub const RESPONSE_NOT_WRITABLE: &str = "1700";
pub const TYPE_MISMATCH: &str = "1800";
pub const NO_HANDLER_FOUND: &str = "1900";
pub const REMOTE_CLIENT: &str = "2000";
pub const CONNECTION_REFUSED: &str = "2100";
pub const JSON_PROCESSING: &str = "2300";
pub const UNAUTHORIZED: &str = "2500";
pub const USER_NOT_ACTIVE: &str = "2600";
pub const USER_NOT_FOUND: &str = "2700";
pub const ILLEGAL_ARGUMENT: &str = "2800";
pub const ENTITY_NOT_FOUND: &str = "2900";
pub const ENTITY_EXISTS: &str = "3000";
pub const NO_SUCH_ELEMENT: &str = "3100";
