//! Error types for REST resource operations.
//!
//! Every failure a resource call can produce is a [`ResourceError`], and
//! every one of them reaches the caller through the same channel as a
//! success: the `Result` of an awaited call, or the argument of a
//! continuation.
//!
//! - [`ResourceError::MissingSegment`]: a path placeholder had no value.
//!   Raised before dispatch; nothing was sent.
//! - [`ResourceError::Transport`]: the round trip failed (connect, timeout).
//! - [`ResourceError::Protocol`]: the server answered with a non-2xx status.
//! - [`ResourceError::Decode`]: the server answered 2xx but the body did not
//!   have the expected shape.
//!
//! Delete calls never produce these for a non-204 status; they return
//! [`DeleteStatus::Failed`](crate::rest::DeleteStatus::Failed) instead.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::rest::ResourceError;
//!
//! let body = br#"{"code": 20404, "message": "The requested resource was not found", "more_info": "https://www.twilio.com/docs/errors/20404", "status": 404}"#;
//! let error = ResourceError::from_http_response(404, body, Some("RQ123"));
//!
//! match &error {
//!     ResourceError::Protocol(failure) => {
//!         assert_eq!(failure.status, 404);
//!         assert_eq!(failure.code, Some(20404));
//!     }
//!     _ => unreachable!(),
//! }
//! assert_eq!(error.request_id(), Some("RQ123"));
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{InvalidHttpRequestError, TransportError};

/// A non-2xx response, with the remote error payload when one was sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolError {
    /// The HTTP status code.
    pub status: u16,
    /// The remote error code, e.g. `20404`.
    pub code: Option<u32>,
    /// The remote error message, or the raw body if it was not an error
    /// document.
    pub message: String,
    /// Link to the remote error documentation.
    pub more_info: Option<String>,
    /// The `Twilio-Request-Id` of the failed call.
    pub request_id: Option<String>,
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(code) = self.code {
            write!(f, " (error {code})")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(
                f,
                ". If you report this error, please include this id: {request_id}"
            )?;
        }
        Ok(())
    }
}

/// The error document the API returns with a non-2xx status.
#[derive(Debug, Deserialize)]
struct RemoteError {
    code: Option<u32>,
    message: Option<String>,
    more_info: Option<String>,
}

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A `{Name}` placeholder in the path template had no value.
    #[error("Missing value for path segment '{name}' in '{template}'")]
    MissingSegment {
        /// The placeholder name.
        name: String,
        /// The template being resolved.
        template: String,
    },

    /// No path for the operation matches the supplied ids.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// The request descriptor was rejected before dispatch.
    #[error(transparent)]
    InvalidRequest(InvalidHttpRequestError),

    /// The round trip failed below the HTTP protocol level.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Protocol(ProtocolError),

    /// A 2xx response body did not match the expected shape.
    #[error("Could not decode response (HTTP {status}): {message}")]
    Decode {
        /// The HTTP status code.
        status: u16,
        /// The decoder's description of the mismatch.
        message: String,
        /// The `Twilio-Request-Id` of the call.
        request_id: Option<String>,
    },

    /// The call was cancelled through its
    /// [`ExecutionHandle`](crate::clients::ExecutionHandle).
    #[error("Call was cancelled")]
    Cancelled,
}

impl From<InvalidHttpRequestError> for ResourceError {
    fn from(error: InvalidHttpRequestError) -> Self {
        match error {
            InvalidHttpRequestError::MissingSegment { name, template } => {
                Self::MissingSegment { name, template }
            }
            other => Self::InvalidRequest(other),
        }
    }
}

impl ResourceError {
    /// Creates a [`ResourceError::Protocol`] from a non-2xx response.
    ///
    /// The body is parsed as the API's error document
    /// (`{"code", "message", "more_info", "status"}`). A body that is not
    /// one is kept verbatim as the message.
    #[must_use]
    pub fn from_http_response(status: u16, body: &[u8], request_id: Option<&str>) -> Self {
        let (code, message, more_info) = match serde_json::from_slice::<RemoteError>(body) {
            Ok(remote) => (
                remote.code,
                remote.message.unwrap_or_default(),
                remote.more_info,
            ),
            Err(_) => (None, String::from_utf8_lossy(body).trim().to_string(), None),
        };

        Self::Protocol(ProtocolError {
            status,
            code,
            message,
            more_info,
            request_id: request_id.map(ToString::to_string),
        })
    }

    /// Returns the request id if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Protocol(failure) => failure.request_id.as_deref(),
            Self::Decode { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol(failure) => Some(failure.status),
            Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the server reported 404 for the call.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError { status: 404, .. }))
    }
}
