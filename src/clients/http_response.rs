//! Raw HTTP responses as returned by a [`Transport`](crate::clients::Transport).

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response: status code, headers, and raw body bytes.
///
/// Header names are stored lowercase. Nothing is decoded here; turning a
/// response into a typed result is the job of
/// [`map_response`](crate::rest::map_response).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// HTTP 204, the only status that counts as a successful delete.
    pub const NO_CONTENT: u16 = 204;

    /// Creates a new `HttpResponse`. Header names are lowercased.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<Vec<u8>>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the status is 204 No Content.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        self.code == Self::NO_CONTENT
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Twilio-Request-Id` header value, if present.
    ///
    /// Include it when reporting a failed call.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("twilio-request-id")
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
