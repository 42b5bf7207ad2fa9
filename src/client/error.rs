//! Error types for API requests.

use std::fmt;

use thiserror::Error;
use url::Url;

use crate::transport::HttpError;

/// Error type for API requests.
///
/// `T` is the response type the caller asked for. A non-success status
/// still carries the best-effort decoded response in
/// [`RequestError::Status`]: the service puts structured error detail
/// (message, status code) inside the response body, so discarding the body
/// would lose exactly the information the caller needs to act on the
/// failure.
#[derive(Debug, Error)]
pub enum RequestError<T: fmt::Debug> {
    /// The request never produced a response: connection failure, timeout,
    /// or an unusable URL.
    #[error("request to {url} failed")]
    Http {
        /// The URL the request was sent to
        url: Url,
        /// Underlying transport error
        #[source]
        source: HttpError,
    },

    /// A success response whose body was not valid JSON for `T`.
    #[error("failed to decode response from {url}")]
    Decode {
        /// The URL the request was sent to
        url: Url,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with a non-success status.
    #[error("non-success status {status} returned from {url} with body {body}")]
    Status {
        /// The response status code
        status: http::StatusCode,
        /// The URL the request was sent to
        url: Url,
        /// The raw response body, lossily decoded for display
        body: String,
        /// Best-effort decode of the body into `T`. `None` when the body
        /// was not valid JSON for `T`; a decode failure on this path is
        /// never reported as its own error.
        decoded: Option<T>,
    },
}

impl<T: fmt::Debug> RequestError<T> {
    /// Returns the partially decoded response, if any.
    ///
    /// Only [`RequestError::Status`] can carry one.
    pub const fn decoded(&self) -> Option<&T> {
        match self {
            Self::Status { decoded, .. } => decoded.as_ref(),
            Self::Http { .. } | Self::Decode { .. } => None,
        }
    }

    /// Consumes the error, returning the partially decoded response.
    pub fn into_decoded(self) -> Option<T> {
        match self {
            Self::Status { decoded, .. } => decoded,
            Self::Http { .. } | Self::Decode { .. } => None,
        }
    }

    /// Returns the HTTP status code, if the service responded at all.
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http { .. } | Self::Decode { .. } => None,
        }
    }
}
