//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or URLs are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AccountSid, ConfigError};
//!
//! let result = AccountSid::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccountSid)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account Sid cannot be empty.
    #[error("Account Sid cannot be empty. Please provide your Twilio Account Sid.")]
    EmptyAccountSid,

    /// Account Sid does not have the expected shape.
    #[error("Invalid Account Sid '{sid}'. Expected a value starting with 'AC'.")]
    InvalidAccountSid {
        /// The rejected value.
        sid: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide your Twilio auth token.")]
    EmptyAuthToken,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2010-04-01').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http or https URL (e.g., 'https://api.twilio.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// Why construction failed.
        reason: String,
    },
}
