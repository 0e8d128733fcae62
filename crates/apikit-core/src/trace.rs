//! Per-request trace ids.
//!
//! A [`TraceId`] correlates every log line and the response envelope of a
//! single request. The web layer pins one id for the life of a request via
//! [`with_trace_id`]; envelope constructors read it back through
//! [`TraceId::current`], generating a fresh id only when no request scope
//! is active (background jobs, tests).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

tokio::task_local! {
    static TRACE_ID: TraceId;
}

/// Random per-request identifier propagated through logs and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(pub Uuid);

impl TraceId {
    /// Create a new random trace id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a trace id from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Return a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The trace id pinned to the current request scope, or a fresh one when
    /// no scope is active.
    pub fn current() -> Self {
        TRACE_ID.try_with(|id| *id).unwrap_or_else(|_| Self::new())
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for TraceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Runs `future` with `trace_id` pinned as the current request's trace id.
pub async fn with_trace_id<F>(trace_id: TraceId, future: F) -> F::Output
where
    F: Future,
{
    TRACE_ID.scope(trace_id, future).await
}
