//! HTTP client types for Twilio REST API communication.
//!
//! # Overview
//!
//! - [`HttpRequest`]: an immutable request descriptor, built with
//!   [`HttpRequestBuilder`]
//! - [`Parameter`] and [`ParameterKind`]: query, form body and path
//!   segment parameters
//! - [`HttpResponse`]: a raw response (status, headers, body bytes)
//! - [`Transport`]: the round trip interface; [`HttpClient`] implements it
//!   with `reqwest`
//! - [`RestClient`]: dispatches descriptors and maps responses
//! - [`ExecutionHandle`]: the handle of a call started with a continuation
//!
//! # Example
//!
//! ```rust
//! use twilio_api::clients::{HttpMethod, HttpRequest, ParameterKind};
//!
//! let request = HttpRequest::builder(HttpMethod::Post, "Accounts/{AccountSid}/Queues.json")
//!     .segment("AccountSid", "AC1")
//!     .body_param("FriendlyName", "support")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.path(), "Accounts/AC1/Queues.json");
//! assert_eq!(request.parameters()[0].kind, ParameterKind::Body);
//! ```
//!
//! # Retries
//!
//! Nothing in this module retries. Each call is exactly one round trip;
//! retrying is left to the caller.

mod errors;
mod executor;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod transport;

pub use errors::{HttpError, InvalidHttpRequestError, TransportError, TransportErrorKind};
pub use executor::{spawn_call, ExecutionHandle};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, Parameter, ParameterKind};
pub use http_response::HttpResponse;
pub use transport::Transport;

pub use rest::RestClient;
