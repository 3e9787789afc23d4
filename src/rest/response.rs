//! Mapping raw responses onto typed results.
//!
//! [`map_response`] turns an [`HttpResponse`] into a
//! [`ResourceResponse<T>`] or a [`ResourceError`]; [`DeleteStatus`] is the
//! two-valued outcome of a delete call.
//!
//! `ResourceResponse<T>` implements `Deref<Target = T>`, so a list response
//! can be iterated directly:
//!
//! ```rust
//! use std::collections::HashMap;
//! use twilio_api::clients::HttpResponse;
//! use twilio_api::rest::map_response;
//!
//! let body = br#"{"queues": [{"sid": "QU1"}, {"sid": "QU2"}], "page": 0, "num_pages": 1}"#;
//! let raw = HttpResponse::new(200, HashMap::new(), body.to_vec());
//!
//! let response = map_response::<Vec<serde_json::Value>>(&raw, Some("queues")).unwrap();
//! assert_eq!(response.len(), 2);
//! assert_eq!(response[0]["sid"], "QU1");
//! assert!(!response.has_next_page());
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::paging::PagingInfo;
use crate::rest::ResourceError;

/// A decoded resource or collection, tagged with the paging metadata and
/// request id of the response it came from.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    paging: Option<PagingInfo>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse`.
    #[must_use]
    pub const fn new(data: T, paging: Option<PagingInfo>, request_id: Option<String>) -> Self {
        Self {
            data,
            paging,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns the paging metadata, for list responses.
    #[must_use]
    pub const fn paging(&self) -> Option<&PagingInfo> {
        self.paging.as_ref()
    }

    /// Returns `true` if the API reported a further page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.paging.as_ref().is_some_and(PagingInfo::has_next_page)
    }

    /// Returns the `Twilio-Request-Id` of the response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Transforms the inner data, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            paging: self.paging,
            request_id: self.request_id,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// Outcome of a delete call.
///
/// A delete succeeds only when the server answers 204 No Content. Any
/// other status, including 404, is `Failed`; it is never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeleteStatus {
    /// The server answered 204.
    Success,
    /// The server answered anything else, or no answer arrived.
    Failed,
}

impl DeleteStatus {
    /// Classifies a delete response.
    #[must_use]
    pub const fn from_response(response: &HttpResponse) -> Self {
        if response.is_no_content() {
            Self::Success
        } else {
            Self::Failed
        }
    }

    /// Returns `true` for [`DeleteStatus::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Maps a raw response onto a typed result.
///
/// - 2xx: the body is decoded as `T`. With `key`, `T` is read from that
///   top-level field and the remaining top-level fields are read as
///   [`PagingInfo`].
/// - non-2xx: [`ResourceError::Protocol`] with the remote error payload.
///
/// # Errors
///
/// Returns [`ResourceError::Protocol`] for a non-2xx status and
/// [`ResourceError::Decode`] if a 2xx body does not have the expected
/// shape.
pub fn map_response<T: DeserializeOwned>(
    response: &HttpResponse,
    key: Option<&str>,
) -> Result<ResourceResponse<T>, ResourceError> {
    let request_id = response.request_id();

    if !response.is_ok() {
        return Err(ResourceError::from_http_response(
            response.code,
            &response.body,
            request_id,
        ));
    }

    let decode_error = |message: String| ResourceError::Decode {
        status: response.code,
        message,
        request_id: request_id.map(ToString::to_string),
    };

    let Some(key) = key else {
        let data = response.json::<T>().map_err(|e| decode_error(e.to_string()))?;
        return Ok(ResourceResponse::new(
            data,
            None,
            request_id.map(ToString::to_string),
        ));
    };

    let mut document: serde_json::Value =
        response.json().map_err(|e| decode_error(e.to_string()))?;

    let item = document
        .get_mut(key)
        .map(serde_json::Value::take)
        .ok_or_else(|| decode_error(format!("missing field `{key}`")))?;
    let data = serde_json::from_value::<T>(item).map_err(|e| decode_error(e.to_string()))?;

    let paging = serde_json::from_value::<PagingInfo>(document)
        .ok()
        .filter(|paging| !paging.is_empty());

    Ok(ResourceResponse::new(
        data,
        paging,
        request_id.map(ToString::to_string),
    ))
}
