//! The resource request pipeline.
//!
//! A call flows through four stages:
//!
//! 1. **Options**: [`ListParams`] (and resource-specific option types)
//!    describe the optional filter and paging criteria; absent fields send
//!    nothing.
//! 2. **Build**: [`build_request`] merges a path template, segment values
//!    and options into an immutable
//!    [`HttpRequest`](crate::clients::HttpRequest). A missing segment is
//!    reported here, before anything is sent.
//! 3. **Execute**: [`RestClient`](crate::clients::RestClient) performs one
//!    round trip, awaited or delivered to a continuation.
//! 4. **Map**: [`map_response`] turns the raw response into a
//!    [`ResourceResponse`] or a [`ResourceError`]; delete calls yield a
//!    [`DeleteStatus`].
//!
//! [`RestResource`] packages the path table of a resource with default
//! builders for the common operations. The resources themselves live in
//! [`resources`].
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use twilio_api::HttpMethod;
//! use twilio_api::rest::{build_request, DateFilter, ListParams};
//!
//! let options = ListParams {
//!     date_created: Some(DateFilter::after(NaiveDate::from_ymd_opt(2014, 3, 1).unwrap())),
//!     page: Some(1),
//!     ..ListParams::default()
//! };
//!
//! let request = build_request(
//!     HttpMethod::Get,
//!     "Accounts/{AccountSid}/Media.json",
//!     &[("AccountSid", "AC1")],
//!     &options,
//! )
//! .unwrap();
//!
//! assert_eq!(request.path(), "Accounts/AC1/Media.json");
//! assert_eq!(
//!     request.query_pairs().collect::<Vec<_>>(),
//!     vec![("DateCreated>", "2014-03-01"), ("Page", "1")]
//! );
//! ```

mod builder;
mod errors;
mod paging;
mod params;
pub(crate) mod path;
mod resource;
mod response;

pub mod resources;

pub use builder::build_request;
pub use errors::{ProtocolError, ResourceError};
pub use paging::PagingInfo;
pub use params::{
    Comparison, DateFilter, ListParams, MessageListParams, ToParameters, DATE_FORMAT,
};
pub use path::{build_path, get_path, placeholders, ResourceOperation, ResourcePath};
pub use resource::{RestResource, ACCOUNT_SID};
pub use response::{map_response, DeleteStatus, ResourceResponse};
