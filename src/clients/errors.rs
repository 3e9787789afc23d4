//! Transport-level error types.
//!
//! - [`TransportError`]: the round trip itself failed (connect, timeout, ...)
//! - [`InvalidHttpRequestError`]: a request descriptor failed validation
//!   before anything was sent
//! - [`HttpError`]: either of the above, returned by [`HttpClient::request`]
//!
//! Non-2xx responses are not errors at this layer; they are returned as
//! [`HttpResponse`](crate::clients::HttpResponse) values and classified by the
//! result mapper in [`crate::rest`].
//!
//! [`HttpClient::request`]: crate::clients::HttpClient::request

use std::fmt;

use thiserror::Error;

/// What went wrong during a round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// The connection could not be established (refused, DNS, TLS).
    Connect,
    /// The round trip did not complete within the configured timeout.
    Timeout,
    /// The request could not be built or sent.
    Request,
    /// The response body could not be read.
    Body,
    /// The round trip was torn down before producing a response.
    Aborted,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Request => "request",
            Self::Body => "body",
            Self::Aborted => "aborted",
        };
        f.write_str(kind)
    }
}

/// Error returned when a round trip fails below the HTTP protocol level.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::{TransportError, TransportErrorKind};
///
/// let error = TransportError::new(TransportErrorKind::Timeout, "no response after 5s");
/// assert!(error.is_timeout());
/// assert_eq!(error.to_string(), "Transport error (timeout): no response after 5s");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Transport error ({kind}): {message}")]
pub struct TransportError {
    /// The failure category.
    pub kind: TransportErrorKind,
    /// A human-readable description from the transport.
    pub message: String,
}

impl TransportError {
    /// Creates a new transport error.
    #[must_use]
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns `true` if the round trip timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.kind == TransportErrorKind::Timeout
    }

    /// Returns `true` if no connection could be made.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        self.kind == TransportErrorKind::Connect
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            TransportErrorKind::Timeout
        } else if error.is_connect() {
            TransportErrorKind::Connect
        } else if error.is_body() || error.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Request
        };
        Self::new(kind, error.to_string())
    }
}

impl From<tokio::task::JoinError> for TransportError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::new(TransportErrorKind::Aborted, error.to_string())
    }
}

/// Error returned when a request descriptor fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A `{Name}` placeholder in the path template has no value.
    #[error("Missing value for path segment '{name}' in '{template}'.")]
    MissingSegment {
        /// The placeholder name.
        name: String,
        /// The template the placeholder appears in.
        template: String,
    },

    /// The path template has an unbalanced or empty placeholder.
    #[error("Malformed path template '{template}'.")]
    MalformedTemplate {
        /// The offending template.
        template: String,
    },

    /// A POST or PUT request was made without any body parameters.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for [`HttpClient::request`](crate::clients::HttpClient::request).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed; nothing was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The round trip failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
