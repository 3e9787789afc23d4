//! Queue resource implementation.
//!
//! Queues hold calls waiting to be connected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ExecutionHandle, Parameter, RestClient, Transport};
use crate::rest::params::{ListParams, ToParameters};
use crate::rest::resources::v2010_04_01::common::rfc2822_option;
use crate::rest::{
    DeleteStatus, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource,
};
use crate::HttpMethod;

/// A call queue.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Queue {
    /// The unique identifier, starting with `QU`.
    pub sid: String,

    /// The account that owns the queue.
    #[serde(default)]
    pub account_sid: Option<String>,

    /// A human readable name, unique within the account.
    #[serde(default)]
    pub friendly_name: Option<String>,

    /// The number of calls waiting.
    #[serde(default)]
    pub current_size: Option<u32>,

    /// The maximum number of calls allowed to wait.
    #[serde(default)]
    pub max_size: Option<u32>,

    /// The average wait in seconds of the calls currently queued.
    #[serde(default)]
    pub average_wait_time: Option<u32>,

    /// When the queue was created.
    #[serde(default, with = "rfc2822_option")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the queue was last updated.
    #[serde(default, with = "rfc2822_option")]
    pub date_updated: Option<DateTime<Utc>>,

    /// The URI of this resource, relative to the API host.
    #[serde(default)]
    pub uri: Option<String>,
}

impl RestResource for Queue {
    const NAME: &'static str = "Queue";
    const SID_NAME: &'static str = "QueueSid";
    const LIST_KEY: &'static str = "queues";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["QueueSid"],
            "Accounts/{AccountSid}/Queues/{QueueSid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "Accounts/{AccountSid}/Queues.json",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "Accounts/{AccountSid}/Queues.json",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["QueueSid"],
            "Accounts/{AccountSid}/Queues/{QueueSid}.json",
        ),
    ];
}

/// The fields of a queue to create: `FriendlyName`, then `MaxSize`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQueue {
    /// A human readable name, unique within the account.
    pub friendly_name: String,
    /// The maximum number of calls allowed to wait.
    pub max_size: Option<u32>,
}

impl NewQueue {
    /// Creates a queue with the server's default size limit.
    #[must_use]
    pub fn new(friendly_name: impl Into<String>) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            max_size: None,
        }
    }
}

impl ToParameters for NewQueue {
    fn to_parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::new();
        if !self.friendly_name.is_empty() {
            params.push(Parameter::body("FriendlyName", &self.friendly_name));
        }
        if let Some(max_size) = self.max_size {
            params.push(Parameter::body("MaxSize", max_size.to_string()));
        }
        params
    }
}

impl Queue {
    /// Creates a queue and waits for the created resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRequest`] if `queue` has no fields
    /// set, otherwise any error of [`RestClient::fetch`].
    pub async fn create<T: Transport>(
        client: &RestClient<T>,
        queue: &NewQueue,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let request = Self::create_request(client.account_sid().as_ref(), queue)?;
        client.fetch(&request, None).await
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a queue.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRequest`] without sending anything
    /// if `queue` has no fields set.
    pub fn create_queue<C>(&self, queue: &NewQueue, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(Result<ResourceResponse<Queue>, ResourceError>) + Send + 'static,
    {
        let request = Queue::create_request(self.account_sid().as_ref(), queue)?;
        self.execute(request, None, callback)
    }

    /// Gets one queue.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] without sending anything
    /// if `queue_sid` is empty.
    pub fn get_queue<C>(&self, queue_sid: &str, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(Result<ResourceResponse<Queue>, ResourceError>) + Send + 'static,
    {
        let request = Queue::find_request(self.account_sid().as_ref(), queue_sid)?;
        self.execute(request, None, callback)
    }

    /// Lists one page of queues.
    ///
    /// # Errors
    ///
    /// Returns an error only if the call could not be started.
    pub fn list_queues<C>(&self, options: &ListParams, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(Result<ResourceResponse<Vec<Queue>>, ResourceError>) + Send + 'static,
    {
        let request = Queue::list_request(self.account_sid().as_ref(), &[], options)?;
        self.execute(request, Some(Queue::LIST_KEY), callback)
    }

    /// Deletes one queue.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] without sending anything
    /// if `queue_sid` is empty.
    pub fn delete_queue<C>(&self, queue_sid: &str, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(DeleteStatus) + Send + 'static,
    {
        let request = Queue::delete_request(self.account_sid().as_ref(), queue_sid)?;
        self.execute_delete(request, callback)
    }
}
