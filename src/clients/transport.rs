//! The narrow interface the request pipeline calls through.

use std::future::Future;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Performs one HTTP round trip for a request descriptor.
///
/// Implementations must not retry and must not classify status codes: any
/// response that arrives, including 4xx and 5xx, is returned as `Ok`. Only
/// failures below the protocol level (refused connection, DNS, TLS, a body
/// that could not be read) are `Err`.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Tests substitute their own.
pub trait Transport: Send + Sync + 'static {
    /// Sends the request and returns the raw response.
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
