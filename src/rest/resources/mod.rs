//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v2010_04_01/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! The latest version is re-exported at this module level:
//!
//! ```rust
//! use twilio_api::rest::resources::Media;               // Uses latest version
//! use twilio_api::rest::resources::v2010_04_01::Queue;  // Explicit version
//! ```
//!
//! Every resource implements [`RestResource`](crate::rest::RestResource)
//! and adds callback-style methods to
//! [`RestClient`](crate::clients::RestClient):
//!
//! | Resource | Methods |
//! |---|---|
//! | [`Media`] | `get_media`, `list_media`, `list_message_media`, `delete_media` |
//! | [`Message`] | `send_message`, `get_message`, `list_messages`, `delete_message` |
//! | [`Queue`] | `create_queue`, `get_queue`, `list_queues`, `delete_queue` |

pub mod v2010_04_01;

pub use v2010_04_01::{Media, Message, MessageStatus, NewMessage, NewQueue, Queue};
