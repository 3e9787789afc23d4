//! # Twilio API Rust SDK
//!
//! A Rust client for the Twilio REST API resource endpoints (Media,
//! Messages, Queues, ...), built around one uniform request pipeline.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`TwilioConfig`] and [`TwilioConfigBuilder`]
//! - Validated newtypes for credentials and hosts
//! - Immutable request descriptors with `{Name}` path templates
//! - Filter and paging options that send nothing for absent fields
//! - Awaitable calls and callback-style calls with exactly-once
//!   continuations, cancellation and an optional timeout
//! - Typed results and a typed failure taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use twilio_api::{TwilioConfig, AccountSid, AuthToken, ApiVersion};
//! use std::time::Duration;
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX").unwrap())
//!     .auth_token(AuthToken::new("your-auth-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! Awaitable, through [`RestResource`](rest::RestResource):
//!
//! ```rust,no_run
//! use twilio_api::{RestClient, TwilioConfig};
//! use twilio_api::rest::{ListParams, RestResource};
//! use twilio_api::rest::resources::Media;
//!
//! # async fn example(config: TwilioConfig) -> Result<(), Box<dyn std::error::Error>> {
//! let client = RestClient::new(&config)?;
//!
//! let options = ListParams::for_page(0);
//! let page = Media::all(&client, &options).await?;
//! if let Some(next) = page.paging().and_then(|p| options.next_page(p)) {
//!     let _second = Media::all(&client, &next).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! With a continuation, which returns immediately:
//!
//! ```rust,no_run
//! use twilio_api::{RestClient, TwilioConfig};
//! use twilio_api::rest::{DeleteStatus, ResourceError};
//!
//! # async fn example(config: TwilioConfig) -> Result<(), Box<dyn std::error::Error>> {
//! let client = RestClient::new(&config)?;
//!
//! let mut handle = client.get_media("ME557ce644e5ab84fa21cc21112e22c485", |result| match result {
//!     Ok(media) => println!("{:?}", media.content_type),
//!     Err(ResourceError::Cancelled) => println!("gave up"),
//!     Err(error) => eprintln!("{error}"),
//! })?;
//! handle.cancel();
//!
//! client.delete_media("ME557ce644e5ab84fa21cc21112e22c485", |status| {
//!     if status == DeleteStatus::Failed {
//!         eprintln!("media was not deleted");
//!     }
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction, descriptors
//!   on build; a missing path segment never reaches the network
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **One round trip per call**: Nothing retries behind the caller's back

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccountSid, ApiVersion, AuthToken, BaseUrl, TwilioConfig, TwilioConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ExecutionHandle, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, Parameter, ParameterKind, RestClient, Transport,
    TransportError, TransportErrorKind,
};

// Re-export the result types every call produces
pub use rest::{DeleteStatus, ResourceError, ResourceResponse};
