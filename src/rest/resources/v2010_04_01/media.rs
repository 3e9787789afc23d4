//! Media resource implementation.
//!
//! Media are the images and other files attached to MMS messages. They can
//! be fetched, listed for the whole account or for one message, and
//! deleted. They cannot be created directly; they are created by sending a
//! message with `MediaUrl`s.
//!
//! # Example
//!
//! ```rust,no_run
//! use twilio_api::RestClient;
//! use twilio_api::rest::{DeleteStatus, ListParams, RestResource};
//! use twilio_api::rest::resources::v2010_04_01::Media;
//!
//! # async fn example(client: RestClient) -> Result<(), Box<dyn std::error::Error>> {
//! // Awaitable
//! let media = Media::find(&client, "ME557ce644e5ab84fa21cc21112e22c485").await?;
//! println!("{:?}", media.content_type);
//!
//! // Continuation
//! let handle = client.list_message_media("MM800f449d0399ed014aae2bcc0cc2f2ec", &ListParams::default(), |result| {
//!     match result {
//!         Ok(page) => println!("{} media", page.len()),
//!         Err(error) => eprintln!("{error}"),
//!     }
//! })?;
//! handle.join().await;
//!
//! client.delete_media(&media.sid, |status| assert_eq!(status, DeleteStatus::Success))?;
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ExecutionHandle, RestClient, Transport};
use crate::rest::params::ListParams;
use crate::rest::resources::v2010_04_01::common::rfc2822_option;
use crate::rest::{
    DeleteStatus, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource,
};
use crate::HttpMethod;

/// A media file attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Media {
    /// The unique identifier, starting with `ME`.
    pub sid: String,

    /// The account that owns the media.
    #[serde(default)]
    pub account_sid: Option<String>,

    /// The Sid of the message or other resource the media belongs to.
    #[serde(default)]
    pub parent_sid: Option<String>,

    /// The MIME type, e.g. `image/jpeg`.
    #[serde(default)]
    pub content_type: Option<String>,

    /// When the media was created.
    #[serde(default, with = "rfc2822_option")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the media was last updated.
    #[serde(default, with = "rfc2822_option")]
    pub date_updated: Option<DateTime<Utc>>,

    /// The URI of this resource, relative to the API host.
    #[serde(default)]
    pub uri: Option<String>,
}

impl RestResource for Media {
    const NAME: &'static str = "Media";
    const SID_NAME: &'static str = "MediaSid";
    const LIST_KEY: &'static str = "media_list";

    /// Paths for the Media resource.
    ///
    /// List has an account-wide path and a path scoped to one message.
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["MediaSid"],
            "Accounts/{AccountSid}/Media/{MediaSid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "Accounts/{AccountSid}/Media.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["MessageSid"],
            "Accounts/{AccountSid}/Messages/{MessageSid}/Media.json",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["MediaSid"],
            "Accounts/{AccountSid}/Media/{MediaSid}.json",
        ),
    ];
}

impl Media {
    /// Fetches one page of the media attached to a message.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] if `message_sid` is empty,
    /// otherwise any error of [`RestClient::fetch`].
    pub async fn all_for_message<T: Transport>(
        client: &RestClient<T>,
        message_sid: &str,
        options: &ListParams,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let request = Self::list_request(
            client.account_sid().as_ref(),
            &[("MessageSid", message_sid)],
            options,
        )?;
        client.fetch(&request, Some(Self::LIST_KEY)).await
    }
}

impl<T: Transport> RestClient<T> {
    /// Gets the details of one media instance.
    ///
    /// Returns immediately; `callback` is invoked exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] without sending anything
    /// if `media_sid` is empty.
    pub fn get_media<C>(&self, media_sid: &str, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(Result<ResourceResponse<Media>, ResourceError>) + Send + 'static,
    {
        let request = Media::find_request(self.account_sid().as_ref(), media_sid)?;
        self.execute(request, None, callback)
    }

    /// Lists one page of the account's media.
    ///
    /// # Errors
    ///
    /// Returns an error only if the call could not be started.
    pub fn list_media<C>(&self, options: &ListParams, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(Result<ResourceResponse<Vec<Media>>, ResourceError>) + Send + 'static,
    {
        let request = Media::list_request(self.account_sid().as_ref(), &[], options)?;
        self.execute(request, Some(Media::LIST_KEY), callback)
    }

    /// Lists one page of the media attached to a message.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] without sending anything
    /// if `message_sid` is empty.
    pub fn list_message_media<C>(
        &self,
        message_sid: &str,
        options: &ListParams,
        callback: C,
    ) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(Result<ResourceResponse<Vec<Media>>, ResourceError>) + Send + 'static,
    {
        let request = Media::list_request(
            self.account_sid().as_ref(),
            &[("MessageSid", message_sid)],
            options,
        )?;
        self.execute(request, Some(Media::LIST_KEY), callback)
    }

    /// Deletes one media instance.
    ///
    /// `callback` receives [`DeleteStatus::Success`] only for a 204.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] without sending anything
    /// if `media_sid` is empty.
    pub fn delete_media<C>(&self, media_sid: &str, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(DeleteStatus) + Send + 'static,
    {
        let request = Media::delete_request(self.account_sid().as_ref(), media_sid)?;
        self.execute_delete(request, callback)
    }
}
