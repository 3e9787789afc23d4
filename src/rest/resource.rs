//! The REST resource trait.
//!
//! A resource declares its name, the JSON key its list responses use, and
//! its path table. In return it gets descriptor builders for the common
//! operations and awaitable `find`/`all`/`delete` calls.
//!
//! # Example
//!
//! ```rust
//! use serde::Deserialize;
//! use twilio_api::HttpMethod;
//! use twilio_api::rest::{ListParams, ResourceOperation, ResourcePath, RestResource};
//!
//! #[derive(Debug, Deserialize)]
//! struct Recording {
//!     sid: String,
//! }
//!
//! impl RestResource for Recording {
//!     const NAME: &'static str = "Recording";
//!     const SID_NAME: &'static str = "RecordingSid";
//!     const LIST_KEY: &'static str = "recordings";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["RecordingSid"], "Accounts/{AccountSid}/Recordings/{RecordingSid}.json"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "Accounts/{AccountSid}/Recordings.json"),
//!         ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["RecordingSid"], "Accounts/{AccountSid}/Recordings/{RecordingSid}.json"),
//!     ];
//! }
//!
//! let request = Recording::find_request("AC1", "RE1").unwrap();
//! assert_eq!(request.path(), "Accounts/AC1/Recordings/RE1.json");
//!
//! let request = Recording::list_request("AC1", &[], &ListParams::for_page(2)).unwrap();
//! assert_eq!(request.path(), "Accounts/AC1/Recordings.json");
//! ```

use serde::de::DeserializeOwned;

use crate::clients::{HttpRequest, RestClient, Transport};
use crate::rest::builder::build_request;
use crate::rest::params::ToParameters;
use crate::rest::path::{get_path, ResourceOperation, ResourcePath};
use crate::rest::response::{DeleteStatus, ResourceResponse};
use crate::rest::ResourceError;

/// Name of the placeholder filled from configuration.
pub const ACCOUNT_SID: &str = "AccountSid";

/// A REST resource reachable through a fixed set of path templates.
#[allow(async_fn_in_trait)]
pub trait RestResource: DeserializeOwned + Send + Sync + Sized + 'static {
    /// The resource name, used in error messages (e.g. `"Media"`).
    const NAME: &'static str;

    /// The placeholder naming one instance (e.g. `"MediaSid"`).
    const SID_NAME: &'static str;

    /// The key of the item array in list responses (e.g. `"media_list"`).
    const LIST_KEY: &'static str;

    /// The available paths, one or more per supported operation.
    const PATHS: &'static [ResourcePath];

    /// Selects the path for `operation` given the caller-supplied ids.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no path matches.
    fn path_for(
        operation: ResourceOperation,
        ids: &[&str],
    ) -> Result<&'static ResourcePath, ResourceError> {
        get_path(Self::PATHS, operation, ids).ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: operation.as_str(),
        })
    }

    /// Builds the descriptor for fetching one instance.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] if `sid` is empty.
    fn find_request(account_sid: &str, sid: &str) -> Result<HttpRequest, ResourceError> {
        instance_request::<Self>(ResourceOperation::Find, account_sid, sid)
    }

    /// Builds the descriptor for deleting one instance.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] if `sid` is empty.
    fn delete_request(account_sid: &str, sid: &str) -> Result<HttpRequest, ResourceError> {
        instance_request::<Self>(ResourceOperation::Delete, account_sid, sid)
    }

    /// Builds the descriptor for creating an instance from `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRequest`] if `fields` produce no body
    /// parameters and [`ResourceError::PathResolutionFailed`] if the
    /// resource cannot be created.
    fn create_request<F: ToParameters + ?Sized>(
        account_sid: &str,
        fields: &F,
    ) -> Result<HttpRequest, ResourceError> {
        let path = Self::path_for(ResourceOperation::Create, &[])?;
        build_request(
            path.http_method,
            path.template,
            &[(ACCOUNT_SID, account_sid)],
            fields,
        )
    }

    /// Builds the descriptor for listing a page.
    ///
    /// `parents` names the scope, e.g. `[("MessageSid", "MM1")]`; the most
    /// specific path those ids satisfy is used.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] if a parent id is empty
    /// and [`ResourceError::PathResolutionFailed`] if no list path matches.
    fn list_request<F: ToParameters + ?Sized>(
        account_sid: &str,
        parents: &[(&str, &str)],
        options: &F,
    ) -> Result<HttpRequest, ResourceError> {
        let ids: Vec<&str> = parents.iter().map(|(name, _)| *name).collect();
        let path = Self::path_for(ResourceOperation::All, &ids)?;

        let mut segments = Vec::with_capacity(parents.len() + 1);
        segments.push((ACCOUNT_SID, account_sid));
        segments.extend_from_slice(parents);

        build_request(path.http_method, path.template, &segments, options)
    }

    /// Fetches one instance.
    ///
    /// # Errors
    ///
    /// Returns any [`ResourceError`]; see [`RestClient::fetch`].
    async fn find<T: Transport>(
        client: &RestClient<T>,
        sid: &str,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let request = Self::find_request(client.account_sid().as_ref(), sid)?;
        client.fetch(&request, None).await
    }

    /// Fetches one page of instances.
    ///
    /// # Errors
    ///
    /// Returns any [`ResourceError`]; see [`RestClient::fetch`].
    async fn all<T: Transport, F: ToParameters + ?Sized + Sync>(
        client: &RestClient<T>,
        options: &F,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let request = Self::list_request(client.account_sid().as_ref(), &[], options)?;
        client.fetch(&request, Some(Self::LIST_KEY)).await
    }

    /// Deletes one instance.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] if `sid` is empty. Every
    /// response, including 404, is reported through [`DeleteStatus`].
    async fn delete<T: Transport>(
        client: &RestClient<T>,
        sid: &str,
    ) -> Result<DeleteStatus, ResourceError> {
        let request = Self::delete_request(client.account_sid().as_ref(), sid)?;
        Ok(client.delete(&request).await)
    }
}

fn instance_request<R: RestResource>(
    operation: ResourceOperation,
    account_sid: &str,
    sid: &str,
) -> Result<HttpRequest, ResourceError> {
    let path = R::path_for(operation, &[R::SID_NAME])?;
    build_request(
        path.http_method,
        path.template,
        &[(ACCOUNT_SID, account_sid), (R::SID_NAME, sid)],
        &(),
    )
}
