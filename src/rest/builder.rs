//! Merging a path template, segment values and list options into a
//! request descriptor.

use crate::clients::{HttpMethod, HttpRequest};
use crate::rest::params::ToParameters;
use crate::rest::ResourceError;

/// Builds a request descriptor.
///
/// Every `{Name}` in `template` is substituted from `segments`, then the
/// options' parameters are appended in their fixed order. The returned
/// descriptor is new; nothing previously built is touched.
///
/// # Errors
///
/// Returns [`ResourceError::MissingSegment`] if a placeholder has no value
/// and [`ResourceError::InvalidRequest`] if the template is malformed or a
/// POST/PUT has no body parameters.
///
/// # Example
///
/// ```rust
/// use twilio_api::HttpMethod;
/// use twilio_api::rest::{build_request, ListParams, ResourceError};
///
/// let request = build_request(
///     HttpMethod::Get,
///     "Accounts/{AccountSid}/Messages/{MessageSid}/Media.json",
///     &[("AccountSid", "AC1"), ("MessageSid", "MM1")],
///     &ListParams::for_page(1),
/// )
/// .unwrap();
/// assert_eq!(request.path(), "Accounts/AC1/Messages/MM1/Media.json");
///
/// let missing = build_request(
///     HttpMethod::Get,
///     "Accounts/{AccountSid}/Media/{MediaSid}.json",
///     &[("AccountSid", "AC1")],
///     &(),
/// );
/// assert!(matches!(missing, Err(ResourceError::MissingSegment { .. })));
/// ```
pub fn build_request<F: ToParameters + ?Sized>(
    method: HttpMethod,
    template: &str,
    segments: &[(&str, &str)],
    options: &F,
) -> Result<HttpRequest, ResourceError> {
    let request = HttpRequest::builder(method, template)
        .segments(segments.iter().copied())
        .parameters(options.to_parameters())
        .build()?;
    Ok(request)
}
