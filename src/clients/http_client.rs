//! HTTP client for Twilio REST API communication.
//!
//! This module provides [`HttpClient`], the `reqwest`-backed
//! [`Transport`] used by [`RestClient`](crate::clients::RestClient).

use std::collections::HashMap;

use crate::clients::errors::{HttpError, TransportError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{AccountSid, AuthToken, TwilioConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Twilio REST API.
///
/// The client handles:
/// - Base URI construction from the configured host and API version
/// - HTTP basic authentication with the account Sid and auth token
/// - Default headers including User-Agent
/// - Query string and form body encoding of descriptor parameters
///
/// It performs exactly one round trip per call and never retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; the underlying `reqwest::Client` pools
/// connections and is shared by all in-flight calls.
///
/// # Example
///
/// ```rust
/// use twilio_api::{TwilioConfig, AccountSid, AuthToken};
/// use twilio_api::clients::HttpClient;
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("AC123").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(client.base_uri(), "https://api.twilio.com/2010-04-01");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Host plus API version, e.g. `https://api.twilio.com/2010-04-01`.
    base_uri: String,
    account_sid: AccountSid,
    auth_token: AuthToken,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying `reqwest`
    /// client cannot be created (for example, TLS initialization failure).
    pub fn new(config: &TwilioConfig) -> Result<Self, ConfigError> {
        let base_uri = format!("{}/{}", config.base_url(), config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}twilio-api-rust/{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_uri,
            account_sid: config.account_sid().clone(),
            auth_token: config.auth_token().clone(),
            default_headers,
        })
    }

    /// Returns the base URI requests are resolved against.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL for a request.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!("{}/{}", self.base_uri, request.path())
    }

    /// Sends a request, re-validating the descriptor first.
    ///
    /// Unlike [`Transport::send`], this re-runs the descriptor checks, so a
    /// hand-assembled request gets the same errors the builder reports.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if validation fails and
    /// [`HttpError::Transport`] if the round trip fails.
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let verified = HttpRequest::builder(request.http_method(), request.template())
            .parameters(request.parameters().iter().cloned())
            .segments(request.path_segments().clone())
            .build()?;
        Ok(self.round_trip(&verified).await?)
    }

    async fn round_trip(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url_for(request);

        let mut req_builder = match request.http_method() {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.basic_auth(self.account_sid.as_ref(), Some(self.auth_token.as_ref()));

        let query: Vec<(&str, &str)> = request.query_pairs().collect();
        if !query.is_empty() {
            req_builder = req_builder.query(&query);
        }

        let form: Vec<(&str, &str)> = request.body_pairs().collect();
        if !form.is_empty() {
            req_builder = req_builder.form(&form);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?;

        Ok(HttpResponse::new(code, headers, body.to_vec()))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.round_trip(request).await
    }
}
