//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a built
//! [`TwilioConfig`](super::TwilioConfig) never carries an empty credential
//! or a URL without a scheme.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Twilio Account Sid.
///
/// The account Sid fills the `{AccountSid}` placeholder of every resource
/// path and is the user name for HTTP basic authentication.
///
/// # Example
///
/// ```rust
/// use twilio_api::AccountSid;
///
/// let sid = AccountSid::new("AC5ef8732a3c49700934481addd5ce1659").unwrap();
/// assert_eq!(sid.as_ref(), "AC5ef8732a3c49700934481addd5ce1659");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountSid(String);

impl AccountSid {
    const PREFIX: &'static str = "AC";

    /// Creates a new validated account Sid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccountSid`] if the value is empty, or
    /// [`ConfigError::InvalidAccountSid`] if it does not start with `AC` or
    /// contains characters other than ASCII letters and digits.
    pub fn new(sid: impl Into<String>) -> Result<Self, ConfigError> {
        let sid = sid.into();
        let sid = sid.trim();

        if sid.is_empty() {
            return Err(ConfigError::EmptyAccountSid);
        }

        if !sid.starts_with(Self::PREFIX)
            || sid.len() == Self::PREFIX.len()
            || !sid.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::InvalidAccountSid {
                sid: sid.to_string(),
            });
        }

        Ok(Self(sid.to_string()))
    }
}

impl AsRef<str> for AccountSid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountSid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountSid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Twilio auth token.
///
/// The `Debug` implementation masks the value, displaying only
/// `AuthToken(*****)`, so the token never ends up in logs.
///
/// # Example
///
/// ```rust
/// use twilio_api::AuthToken;
///
/// let token = AuthToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated base URL for the REST API host.
///
/// Only `http` and `https` schemes are accepted. A trailing `/` is removed
/// so paths can be joined with a single separator.
///
/// # Example
///
/// ```rust
/// use twilio_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.twilio.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.twilio.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.twilio.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production REST API host.
    pub const DEFAULT: &'static str = "https://api.twilio.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http` or
    /// `https` scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_sid_rejects_empty_string() {
        assert!(matches!(
            AccountSid::new(""),
            Err(ConfigError::EmptyAccountSid)
        ));
        assert!(matches!(
            AccountSid::new("   "),
            Err(ConfigError::EmptyAccountSid)
        ));
    }

    #[test]
    fn test_account_sid_requires_ac_prefix() {
        assert!(matches!(
            AccountSid::new("ME123"),
            Err(ConfigError::InvalidAccountSid { sid }) if sid == "ME123"
        ));
        assert!(AccountSid::new("AC").is_err());
        assert!(AccountSid::new("AC12/34").is_err());
        assert!(AccountSid::new("AC1").is_ok());
    }

    #[test]
    fn test_account_sid_round_trips_through_serde() {
        let sid = AccountSid::new("AC123").unwrap();
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, r#""AC123""#);

        let back: AccountSid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sid);

        let bad: Result<AccountSid, _> = serde_json::from_str(r#""nope""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_auth_token_masks_value_in_debug() {
        let token = AuthToken::new("super-secret-token").unwrap();
        assert_eq!(format!("{token:?}"), "AuthToken(*****)");
        assert_eq!(token.as_ref(), "super-secret-token");
    }

    #[test]
    fn test_auth_token_rejects_empty_string() {
        assert!(matches!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken)));
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");

        let url = BaseUrl::new("https://api.twilio.com/").unwrap();
        assert_eq!(url.as_ref(), "https://api.twilio.com");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.twilio.com").is_err());
        assert!(BaseUrl::new("ftp://api.twilio.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("").is_err());
    }

    #[test]
    fn test_base_url_default_is_production_host() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), "https://api.twilio.com");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.twilio.com");
    }

    #[test]
    fn test_base_url_displays_normalized_url() {
        let url = BaseUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.to_string(), "http://127.0.0.1:8080");
        assert_eq!(format!("{url}/2010-04-01"), "http://127.0.0.1:8080/2010-04-01");
    }
}
