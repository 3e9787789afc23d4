//! Configuration types for the client.
//!
//! # Overview
//!
//! - [`TwilioConfig`]: credentials, host, API version and transport settings
//! - [`TwilioConfigBuilder`]: a builder for constructing [`TwilioConfig`]
//! - [`AccountSid`]: a validated account identifier
//! - [`AuthToken`]: a validated auth token with masked debug output
//! - [`BaseUrl`]: a validated REST API host URL
//! - [`ApiVersion`]: the API version path segment
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{TwilioConfig, AccountSid, AuthToken};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("AC123").unwrap())
//!     .auth_token(AuthToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.twilio.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccountSid, AuthToken, BaseUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration shared read-only by every call a client makes.
///
/// `TwilioConfig` is `Clone + Send + Sync`. Nothing in it changes after
/// [`TwilioConfigBuilder::build`], so concurrent calls need no locking.
///
/// # Timeouts
///
/// [`timeout`](Self::timeout) is `None` by default: a round trip that never
/// completes keeps its continuation pending. Set it to bound each round
/// trip; an expired call fails with a transport error of kind
/// [`TransportErrorKind::Timeout`](crate::clients::TransportErrorKind::Timeout).
#[derive(Clone, Debug)]
pub struct TwilioConfig {
    account_sid: AccountSid,
    auth_token: AuthToken,
    base_url: BaseUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl TwilioConfig {
    /// Creates a new builder for constructing a `TwilioConfig`.
    #[must_use]
    pub fn builder() -> TwilioConfigBuilder {
        TwilioConfigBuilder::new()
    }

    /// Returns the account Sid.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the REST API host.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-call round trip timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify TwilioConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwilioConfig>();
};

/// Builder for constructing [`TwilioConfig`] instances.
///
/// `account_sid` and `auth_token` are required.
///
/// # Defaults
///
/// - `base_url`: `https://api.twilio.com`
/// - `api_version`: [`ApiVersion::latest`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use twilio_api::{TwilioConfig, AccountSid, AuthToken, BaseUrl};
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("AC123").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .base_url(BaseUrl::new("http://127.0.0.1:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Default)]
pub struct TwilioConfigBuilder {
    account_sid: Option<AccountSid>,
    auth_token: Option<AuthToken>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl TwilioConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account Sid (required).
    #[must_use]
    pub fn account_sid(mut self, sid: AccountSid) -> Self {
        self.account_sid = Some(sid);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the REST API host.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Bounds every round trip made with this configuration.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`TwilioConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_sid` or
    /// `auth_token` are not set.
    pub fn build(self) -> Result<TwilioConfig, ConfigError> {
        let account_sid = self.account_sid.ok_or(ConfigError::MissingRequiredField {
            field: "account_sid",
        })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        Ok(TwilioConfig {
            account_sid,
            auth_token,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
