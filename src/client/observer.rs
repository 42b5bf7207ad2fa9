//! Request observation hooks.
//!
//! The client holds no process-wide metrics state. Applications that want
//! timing or success/error counters implement [`RequestObserver`] and pass
//! it in at construction; the default observer does nothing.

use std::time::Duration;

/// Outcome of a completed API request, as seen by an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The request completed with a success status and a decoded body.
    Success,
    /// The request failed: connection error, non-success status, or an
    /// undecodable success body.
    Error,
}

/// Hook notified after every completed API request.
///
/// Implementations must be cheap and non-blocking; they run on the request
/// path. The client never interprets observer behavior: logging, metrics,
/// and alerting policy belong entirely to the application.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use std::time::Duration;
/// use inkpost::client::{RequestObserver, RequestOutcome};
///
/// #[derive(Default)]
/// struct ErrorCounter(AtomicU64);
///
/// impl RequestObserver for ErrorCounter {
///     fn on_request(
///         &self,
///         _method: &http::Method,
///         _path: &str,
///         outcome: RequestOutcome,
///         _elapsed: Duration,
///     ) {
///         if outcome == RequestOutcome::Error {
///             self.0.fetch_add(1, Ordering::Relaxed);
///         }
///     }
/// }
/// ```
pub trait RequestObserver: Send + Sync {
    /// Called once per request after its outcome is known.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method of the request
    /// * `path` - Endpoint path relative to the base URL (no query string)
    /// * `outcome` - Whether the request succeeded
    /// * `elapsed` - Wall-clock duration of the round trip
    fn on_request(
        &self,
        method: &http::Method,
        path: &str,
        outcome: RequestOutcome,
        elapsed: Duration,
    );
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_request(
        &self,
        _method: &http::Method,
        _path: &str,
        _outcome: RequestOutcome,
        _elapsed: Duration,
    ) {
    }
}
