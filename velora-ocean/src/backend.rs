//! The analysis backend seam.

use crate::reply::QueryReply;
use std::future::Future;
use thiserror::Error;

/// Transport-level failures talking to the backend.
///
/// Every variant is a hard failure: the reply never reached the application
/// protocol, or did not parse as one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Connection refused, DNS failure, dropped connection, timeout
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// Non-success HTTP status
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// Body is not a valid answer or rejection
    #[error("malformed backend reply: {0}")]
    Malformed(String),
}

/// Something that can answer free-text ocean questions.
///
/// Futures are not required to be `Send`: the dispatcher runs on a single
/// thread, in the browser or on a current-thread runtime.
pub trait AnalysisBackend {
    /// Liveness probe (`GET /`). Any successful response means connected.
    fn ping(&self) -> impl Future<Output = Result<(), BackendError>>;

    /// Ask a question (`POST /query`).
    fn query(&self, question: &str) -> impl Future<Output = Result<QueryReply, BackendError>>;
}
