//! REST resources for API version 2010-04-01.
//!
//! # Available Resources
//!
//! ## Media Resource
//!
//! - [`Media`] - A file attached to a message
//!
//! Media can be listed account-wide (`Accounts/{AccountSid}/Media.json`) or
//! for one message (`Accounts/{AccountSid}/Messages/{MessageSid}/Media.json`).
//!
//! ## Message Resource
//!
//! - [`Message`] - An SMS or MMS message
//! - [`MessageStatus`] - The delivery status
//! - [`NewMessage`] - The fields of a message to send
//!
//! ## Queue Resource
//!
//! - [`Queue`] - A call queue
//! - [`NewQueue`] - The fields of a queue to create
//!
//! ## Common
//!
//! - [`common::rfc2822_option`] - serde helper for RFC 2822 timestamps

pub mod common;
mod media;
mod message;
mod queue;

pub use media::Media;
pub use message::{Message, MessageStatus, NewMessage};
pub use queue::{NewQueue, Queue};
