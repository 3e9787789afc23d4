//! REST API client for the Twilio REST API.
//!
//! [`RestClient`] sits on top of a [`Transport`](crate::clients::Transport)
//! (by default [`HttpClient`](crate::clients::HttpClient)) and turns
//! request descriptors into typed results, either awaited or delivered to
//! a continuation.
//!
//! Resource-specific methods (`get_media`, `send_message`, `list_queues`,
//! ...) are defined next to each resource in
//! [`crate::rest::resources`].

mod client;

pub use client::RestClient;
