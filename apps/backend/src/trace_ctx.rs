//! Task-local trace id for the request being handled.
//!
//! `RequestTrace` establishes the scope; error responses and the database
//! error mapper read it so their log lines and problem bodies can be
//! correlated with the `x-trace-id` header.

use std::future::Future;

use tokio::task_local;

/// Returned when no request scope is active (startup, background work, tests).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

/// Request extension carrying the trace id assigned by `RequestTrace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

impl TraceId {
    /// Trace id stored on a request, or [`UNKNOWN_TRACE_ID`].
    pub fn of(extensions: &actix_web::dev::Extensions) -> String {
        extensions
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
    }
}

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, if inside one.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(Clone::clone).ok()
}

/// Trace id of the current request, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    current().unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
