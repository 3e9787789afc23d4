//! REST client implementation for the Twilio REST API.
//!
//! This module provides the [`RestClient`] type, which dispatches request
//! descriptors through a [`Transport`] and maps the responses.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::clients::errors::{TransportError, TransportErrorKind};
use crate::clients::executor::{spawn_call, ExecutionHandle};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{AccountSid, TwilioConfig};
use crate::error::ConfigError;
use crate::rest::ACCOUNT_SID;
use crate::rest::{map_response, DeleteStatus, ResourceError, ResourceResponse};

/// REST API client for the Twilio REST API.
///
/// Every call is independent: the client holds the transport and the
/// read-only configuration it was built from, and nothing else. Cloning is
/// cheap and clones share the transport.
///
/// Calls come in two forms:
///
/// - awaitable: [`fetch`](Self::fetch), [`delete`](Self::delete)
/// - callback: [`execute`](Self::execute),
///   [`execute_delete`](Self::execute_delete), which return an
///   [`ExecutionHandle`] immediately and invoke the continuation exactly once
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,no_run
/// use twilio_api::{TwilioConfig, AccountSid, AuthToken, RestClient};
/// use twilio_api::rest::resources::Media;
/// use twilio_api::rest::{ListParams, RestResource};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("AC123")?)
///     .auth_token(AuthToken::new("token")?)
///     .build()?;
///
/// let client = RestClient::new(&config)?;
///
/// let page = Media::all(&client, &ListParams::for_page(0)).await?;
/// for media in page.iter() {
///     println!("{}", media.sid);
/// }
/// # Ok(())
/// # }
/// ```
pub struct RestClient<T: Transport = HttpClient> {
    transport: Arc<T>,
    account_sid: AccountSid,
    timeout: Option<Duration>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client backed by [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be
    /// created.
    pub fn new(config: &TwilioConfig) -> Result<Self, ConfigError> {
        let transport = HttpClient::new(config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a new REST client using the given transport.
    #[must_use]
    pub fn with_transport(config: &TwilioConfig, transport: T) -> Self {
        if config.timeout().is_none() {
            tracing::debug!("Rest client created without a round trip timeout");
        }

        Self {
            transport: Arc::new(transport),
            account_sid: config.account_sid().clone(),
            timeout: config.timeout(),
        }
    }

    /// Returns the account Sid substituted for `{AccountSid}`.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the per-call round trip timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Starts a descriptor with `{AccountSid}` already supplied.
    #[must_use]
    pub fn request(&self, method: HttpMethod, template: impl Into<String>) -> HttpRequestBuilder {
        HttpRequest::builder(method, template).segment(ACCOUNT_SID, self.account_sid.as_ref())
    }

    /// Performs exactly one round trip, bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`TransportError`], or one of kind
    /// [`TransportErrorKind::Timeout`] if the timeout expired first.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::debug!(
            "Sending {} request to {}",
            request.http_method(),
            request.path()
        );

        let round_trip = self.transport.send(request);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, round_trip)
                .await
                .unwrap_or_else(|_| {
                    Err(TransportError::new(
                        TransportErrorKind::Timeout,
                        format!("no response within {}ms", limit.as_millis()),
                    ))
                }),
            None => round_trip.await,
        };

        match &result {
            Ok(response) => tracing::debug!(
                "Received {} for {} {}",
                response.code,
                request.http_method(),
                request.path()
            ),
            Err(error) => tracing::warn!(
                "Request to {} failed: {}",
                request.path(),
                error
            ),
        }

        result
    }

    /// Sends a request and maps the response onto `R`.
    ///
    /// With `key`, `R` is read from that top-level field and the paging
    /// metadata from the others.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if the round trip failed,
    /// [`ResourceError::Protocol`] for a non-2xx status, and
    /// [`ResourceError::Decode`] for a 2xx body of the wrong shape.
    pub async fn fetch<R: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        key: Option<&str>,
    ) -> Result<ResourceResponse<R>, ResourceError> {
        let response = self.send(request).await?;
        map_response(&response, key)
    }

    /// Sends a delete request and classifies the outcome.
    ///
    /// Only 204 is [`DeleteStatus::Success`]. Any other status, and a
    /// failed round trip, is [`DeleteStatus::Failed`].
    pub async fn delete(&self, request: &HttpRequest) -> DeleteStatus {
        match self.send(request).await {
            Ok(response) => {
                let status = DeleteStatus::from_response(&response);
                if !status.is_success() {
                    tracing::warn!(
                        "Delete of {} answered {} instead of 204",
                        request.path(),
                        response.code
                    );
                }
                status
            }
            Err(_) => DeleteStatus::Failed,
        }
    }

    /// Starts a call in the background and returns immediately.
    ///
    /// `continuation` is invoked exactly once with the mapped outcome, or
    /// with [`ResourceError::Cancelled`] if the handle cancels the call
    /// first. No ordering holds between the continuations of different
    /// calls.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if no Tokio runtime is
    /// available. The continuation is not invoked in that case.
    pub fn execute<R, C>(
        &self,
        request: HttpRequest,
        key: Option<&'static str>,
        continuation: C,
    ) -> Result<ExecutionHandle, ResourceError>
    where
        R: DeserializeOwned + Send + 'static,
        C: FnOnce(Result<ResourceResponse<R>, ResourceError>) + Send + 'static,
    {
        let client = self.clone();
        let call = async move { client.fetch::<R>(&request, key).await };
        spawn_call(call, continuation).map_err(ResourceError::from)
    }

    /// Starts a delete call in the background and returns immediately.
    ///
    /// `continuation` is invoked exactly once. A cancelled call reports
    /// [`DeleteStatus::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if no Tokio runtime is
    /// available.
    pub fn execute_delete<C>(
        &self,
        request: HttpRequest,
        continuation: C,
    ) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(DeleteStatus) + Send + 'static,
    {
        let client = self.clone();
        let call = async move { Ok(client.delete(&request).await) };
        spawn_call(call, move |outcome: Result<DeleteStatus, ResourceError>| {
            continuation(outcome.unwrap_or(DeleteStatus::Failed));
        })
        .map_err(ResourceError::from)
    }
}

impl<T: Transport> Clone for RestClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            account_sid: self.account_sid.clone(),
            timeout: self.timeout,
        }
    }
}

impl<T: Transport> fmt::Debug for RestClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("account_sid", &self.account_sid)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
