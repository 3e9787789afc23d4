//! Message resource implementation.
//!
//! Messages are SMS and MMS messages sent from or received by the account.
//! A message is sent by creating it; media are attached by passing one
//! `MediaUrl` per file.
//!
//! # Example
//!
//! ```rust,no_run
//! use twilio_api::RestClient;
//! use twilio_api::rest::resources::v2010_04_01::NewMessage;
//!
//! # fn example(client: RestClient) -> Result<(), Box<dyn std::error::Error>> {
//! let message = NewMessage::new("+15017122661", "+15558675309")
//!     .body("Hello there")
//!     .media_url("https://demo.twilio.com/owl.png");
//!
//! client.send_message(&message, |result| match result {
//!     Ok(sent) => println!("queued {}", sent.sid),
//!     Err(error) => eprintln!("{error}"),
//! })?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ExecutionHandle, Parameter, RestClient, Transport};
use crate::rest::params::{MessageListParams, ToParameters};
use crate::rest::resources::v2010_04_01::common::rfc2822_option;
use crate::rest::{
    DeleteStatus, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource,
};
use crate::HttpMethod;

/// The delivery status of a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Accepted and waiting to be sent.
    Queued,
    /// Being sent.
    Sending,
    /// Sent to the carrier.
    Sent,
    /// Confirmed delivered by the carrier.
    Delivered,
    /// The carrier could not deliver the message.
    Undelivered,
    /// The message could not be sent.
    Failed,
    /// An inbound message is being received.
    Receiving,
    /// An inbound message was received.
    Received,
    /// Any status this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Queued => "queued",
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Undelivered => "undelivered",
            Self::Failed => "failed",
            Self::Receiving => "receiving",
            Self::Received => "received",
            Self::Unknown => "unknown",
        };
        f.write_str(status)
    }
}

/// An SMS or MMS message.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Message {
    /// The unique identifier, starting with `SM` or `MM`.
    pub sid: String,

    /// The account that sent or received the message.
    #[serde(default)]
    pub account_sid: Option<String>,

    /// The sender.
    #[serde(default)]
    pub from: Option<String>,

    /// The recipient.
    #[serde(default)]
    pub to: Option<String>,

    /// The text of the message.
    #[serde(default)]
    pub body: Option<String>,

    /// The delivery status.
    #[serde(default)]
    pub status: Option<MessageStatus>,

    /// `inbound`, `outbound-api`, `outbound-call` or `outbound-reply`.
    #[serde(default)]
    pub direction: Option<String>,

    /// The number of segments the body was split into.
    #[serde(default)]
    pub num_segments: Option<String>,

    /// The number of media files attached.
    #[serde(default)]
    pub num_media: Option<String>,

    /// The amount billed, as a decimal string.
    #[serde(default)]
    pub price: Option<String>,

    /// The currency of `price`.
    #[serde(default)]
    pub price_unit: Option<String>,

    /// The error code if delivery failed.
    #[serde(default)]
    pub error_code: Option<u32>,

    /// The error message if delivery failed.
    #[serde(default)]
    pub error_message: Option<String>,

    /// When the message was created.
    #[serde(default, with = "rfc2822_option")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the message was last updated.
    #[serde(default, with = "rfc2822_option")]
    pub date_updated: Option<DateTime<Utc>>,

    /// When the message was sent; `None` while queued.
    #[serde(default, with = "rfc2822_option")]
    pub date_sent: Option<DateTime<Utc>>,

    /// The URI of this resource, relative to the API host.
    #[serde(default)]
    pub uri: Option<String>,
}

impl RestResource for Message {
    const NAME: &'static str = "Message";
    const SID_NAME: &'static str = "MessageSid";
    const LIST_KEY: &'static str = "messages";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["MessageSid"],
            "Accounts/{AccountSid}/Messages/{MessageSid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "Accounts/{AccountSid}/Messages.json",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "Accounts/{AccountSid}/Messages.json",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["MessageSid"],
            "Accounts/{AccountSid}/Messages/{MessageSid}.json",
        ),
    ];
}

/// The fields of a message to send.
///
/// Sent as form fields, in order: `From`, `To`, `Body`, `MediaUrl` (once
/// per URL), `StatusCallback`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMessage {
    /// The sender: a number or alphanumeric sender id.
    pub from: String,
    /// The recipient number.
    pub to: String,
    /// The text to send.
    pub body: Option<String>,
    /// Publicly reachable URLs of media to attach.
    pub media_urls: Vec<String>,
    /// A URL notified of status changes.
    pub status_callback: Option<String>,
}

impl NewMessage {
    /// Creates a message with no content yet.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Self::default()
        }
    }

    /// Sets the text.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attaches a media URL.
    #[must_use]
    pub fn media_url(mut self, url: impl Into<String>) -> Self {
        self.media_urls.push(url.into());
        self
    }

    /// Sets the status callback URL.
    #[must_use]
    pub fn status_callback(mut self, url: impl Into<String>) -> Self {
        self.status_callback = Some(url.into());
        self
    }
}

impl ToParameters for NewMessage {
    fn to_parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::with_capacity(4 + self.media_urls.len());
        if !self.from.is_empty() {
            params.push(Parameter::body("From", &self.from));
        }
        if !self.to.is_empty() {
            params.push(Parameter::body("To", &self.to));
        }
        if let Some(body) = &self.body {
            params.push(Parameter::body("Body", body));
        }
        params.extend(self.media_urls.iter().map(|url| Parameter::body("MediaUrl", url)));
        if let Some(url) = &self.status_callback {
            params.push(Parameter::body("StatusCallback", url));
        }
        params
    }
}

impl<T: Transport> RestClient<T> {
    /// Sends a message.
    ///
    /// Returns immediately; `callback` receives the created message.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRequest`] without sending anything
    /// if `message` produces no form fields.
    pub fn send_message<C>(&self, message: &NewMessage, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(Result<ResourceResponse<Message>, ResourceError>) + Send + 'static,
    {
        let request = Message::create_request(self.account_sid().as_ref(), message)?;
        self.execute(request, None, callback)
    }

    /// Gets one message.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] without sending anything
    /// if `message_sid` is empty.
    pub fn get_message<C>(&self, message_sid: &str, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(Result<ResourceResponse<Message>, ResourceError>) + Send + 'static,
    {
        let request = Message::find_request(self.account_sid().as_ref(), message_sid)?;
        self.execute(request, None, callback)
    }

    /// Lists one page of messages.
    ///
    /// # Errors
    ///
    /// Returns an error only if the call could not be started.
    pub fn list_messages<C>(
        &self,
        options: &MessageListParams,
        callback: C,
    ) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(Result<ResourceResponse<Vec<Message>>, ResourceError>) + Send + 'static,
    {
        let request = Message::list_request(self.account_sid().as_ref(), &[], options)?;
        self.execute(request, Some(Message::LIST_KEY), callback)
    }

    /// Deletes one message.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSegment`] without sending anything
    /// if `message_sid` is empty.
    pub fn delete_message<C>(&self, message_sid: &str, callback: C) -> Result<ExecutionHandle, ResourceError>
    where
        C: FnOnce(DeleteStatus) + Send + 'static,
    {
        let request = Message::delete_request(self.account_sid().as_ref(), message_sid)?;
        self.execute_delete(request, callback)
    }
}

impl Message {
    /// Sends a message and waits for the created resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRequest`] if `message` produces no
    /// form fields, otherwise any error of [`RestClient::fetch`].
    pub async fn create<T: Transport>(
        client: &RestClient<T>,
        message: &NewMessage,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let request = Self::create_request(client.account_sid().as_ref(), message)?;
        client.fetch(&request, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{InvalidHttpRequestError, ParameterKind};
    use crate::rest::DateFilter;
    use chrono::NaiveDate;

    #[test]
    fn test_message_deserialization() {
        let json = r#"{
            "sid": "MM800f449d0399ed014aae2bcc0cc2f2ec",
            "account_sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "from": "+15017122661",
            "to": "+15558675309",
            "body": "Hello there",
            "status": "queued",
            "direction": "outbound-api",
            "num_segments": "1",
            "num_media": "1",
            "price": null,
            "error_code": null,
            "date_created": "Thu, 24 Aug 2023 05:01:45 +0000",
            "date_updated": "Thu, 24 Aug 2023 05:01:45 +0000",
            "date_sent": null
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.sid, "MM800f449d0399ed014aae2bcc0cc2f2ec");
        assert_eq!(message.status, Some(MessageStatus::Queued));
        assert_eq!(message.num_media.as_deref(), Some("1"));
        assert!(message.date_created.is_some());
        assert!(message.date_sent.is_none());
        assert!(message.price.is_none());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let message: Message =
            serde_json::from_str(r#"{"sid": "SM1", "status": "partially_delivered"}"#).unwrap();
        assert_eq!(message.status, Some(MessageStatus::Unknown));
        assert_eq!(MessageStatus::Undelivered.to_string(), "undelivered");
    }

    #[test]
    fn test_new_message_form_fields_in_order() {
        let message = NewMessage::new("+15017122661", "+15558675309")
            .body("Hello")
            .media_url("https://example.com/a.png")
            .media_url("https://example.com/b.png");

        let request = Message::create_request("AC1", &message).unwrap();

        assert_eq!(request.http_method(), HttpMethod::Post);
        assert_eq!(request.path(), "Accounts/AC1/Messages.json");
        assert!(request
            .parameters()
            .iter()
            .all(|p| p.kind == ParameterKind::Body));
        assert_eq!(
            request.body_pairs().collect::<Vec<_>>(),
            vec![
                ("From", "+15017122661"),
                ("To", "+15558675309"),
                ("Body", "Hello"),
                ("MediaUrl", "https://example.com/a.png"),
                ("MediaUrl", "https://example.com/b.png"),
            ]
        );
    }

    #[test]
    fn test_empty_new_message_is_rejected() {
        let error = Message::create_request("AC1", &NewMessage::default()).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::InvalidRequest(InvalidHttpRequestError::MissingBody { .. })
        ));
    }

    #[test]
    fn test_message_list_request_with_filters() {
        let options = MessageListParams {
            to: Some("+15558675309".to_string()),
            date_sent: Some(DateFilter::on(NaiveDate::from_ymd_opt(2023, 8, 24).unwrap())),
            page: Some(0),
            ..MessageListParams::default()
        };

        let request = Message::list_request("AC1", &[], &options).unwrap();

        assert_eq!(request.path(), "Accounts/AC1/Messages.json");
        assert_eq!(
            request.query_pairs().collect::<Vec<_>>(),
            vec![("To", "+15558675309"), ("DateSent", "2023-08-24"), ("Page", "0")]
        );
    }
}
