//! Path templates for REST resources.
//!
//! Resource paths are templates with `{Name}` placeholders, for example
//! `Accounts/{AccountSid}/Messages/{MessageSid}/Media.json`. This module
//! finds the placeholders in a template, substitutes values for them, and
//! picks the right template for an operation when a resource can be reached
//! through more than one path.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use twilio_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::All,
//!         &["MessageSid"],
//!         "Accounts/{AccountSid}/Messages/{MessageSid}/Media.json",
//!     ),
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::All,
//!         &[],
//!         "Accounts/{AccountSid}/Media.json",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::All, &["MessageSid"]).unwrap();
//!
//! let mut segments = HashMap::new();
//! segments.insert("AccountSid", "AC1");
//! segments.insert("MessageSid", "MM1");
//! let url = build_path(path.template, &segments).unwrap();
//! assert_eq!(url, "Accounts/AC1/Messages/MM1/Media.json");
//! ```

use std::collections::HashMap;

use crate::clients::{HttpMethod, InvalidHttpRequestError};

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource by Sid.
    Find,
    /// List a page of resources.
    All,
    /// Create a new resource.
    Create,
    /// Delete a resource by Sid.
    Delete,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for one REST resource operation.
///
/// `ids` lists the placeholders the *caller* has to supply. The
/// `{AccountSid}` placeholder is filled from configuration and is not
/// listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Caller-supplied placeholder names (e.g., `["MessageSid"]`).
    pub ids: &'static [&'static str],
    /// The path template with `{Name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so paths can be declared as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of caller-supplied IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose IDs are all available, the one
/// with the most IDs (the most specific) wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Returns the placeholder names in `template`, in order of appearance.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::MalformedTemplate`] for an unclosed
/// `{`, a stray `}`, or an empty `{}`.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::placeholders;
///
/// let names = placeholders("Accounts/{AccountSid}/Media/{MediaSid}.json").unwrap();
/// assert_eq!(names, vec!["AccountSid", "MediaSid"]);
/// ```
pub fn placeholders(template: &str) -> Result<Vec<&str>, InvalidHttpRequestError> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some((_, name, after)) = next_placeholder(template, rest)? {
        names.push(name);
        rest = after;
    }

    Ok(names)
}

/// Substitutes every `{Name}` placeholder in `template` with its value.
///
/// Values are percent-encoded so a Sid can never introduce extra path
/// segments.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::MissingSegment`] for the first
/// placeholder with no value (an empty value counts as missing), or
/// [`InvalidHttpRequestError::MalformedTemplate`] if the template itself is
/// malformed.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut segments = HashMap::new();
/// segments.insert("AccountSid", "AC1");
/// segments.insert("MediaSid", "ME1");
///
/// let url = build_path("Accounts/{AccountSid}/Media/{MediaSid}.json", &segments).unwrap();
/// assert_eq!(url, "Accounts/AC1/Media/ME1.json");
/// ```
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: AsRef<str>>(
    template: &str,
    segments: &HashMap<&str, V>,
) -> Result<String, InvalidHttpRequestError> {
    resolve_path(template, |name| segments.get(name).map(AsRef::as_ref))
}

/// Substitutes placeholders using an arbitrary lookup.
pub(crate) fn resolve_path<'v, F>(template: &str, lookup: F) -> Result<String, InvalidHttpRequestError>
where
    F: Fn(&str) -> Option<&'v str>,
{
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((literal, name, after)) = next_placeholder(template, rest)? {
        let value = lookup(name)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| InvalidHttpRequestError::MissingSegment {
                name: name.to_string(),
                template: template.to_string(),
            })?;

        resolved.push_str(literal);
        resolved.push_str(&urlencoding::encode(value));
        rest = after;
    }

    resolved.push_str(rest);
    Ok(resolved)
}

/// Splits `rest` into (literal before, placeholder name, remainder).
fn next_placeholder<'t>(
    template: &str,
    rest: &'t str,
) -> Result<Option<(&'t str, &'t str, &'t str)>, InvalidHttpRequestError> {
    let malformed = || InvalidHttpRequestError::MalformedTemplate {
        template: template.to_string(),
    };

    let Some(open) = rest.find(['{', '}']) else {
        return Ok(None);
    };
    if rest[open..].starts_with('}') {
        return Err(malformed());
    }

    let after_open = &rest[open + 1..];
    let close = after_open.find('}').ok_or_else(malformed)?;
    let name = &after_open[..close];
    if name.is_empty() || name.contains('{') {
        return Err(malformed());
    }

    Ok(Some((&rest[..open], name, &after_open[close + 1..])))
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const MEDIA_PATHS: &[ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["MediaSid"],
            "Accounts/{AccountSid}/Media/{MediaSid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["MessageSid"],
            "Accounts/{AccountSid}/Messages/{MessageSid}/Media.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "Accounts/{AccountSid}/Media.json",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["MediaSid"],
            "Accounts/{AccountSid}/Media/{MediaSid}.json",
        ),
    ];

    #[test]
    fn test_resource_path_stores_fields_correctly() {
        let path = MEDIA_PATHS[0];
        assert_eq!(path.http_method, HttpMethod::Get);
        assert_eq!(path.operation, ResourceOperation::Find);
        assert_eq!(path.ids, &["MediaSid"]);
        assert_eq!(path.template, "Accounts/{AccountSid}/Media/{MediaSid}.json");
    }

    #[test]
    fn test_build_path_resolves_all_placeholders() {
        let mut segments = HashMap::new();
        segments.insert("AccountSid", "AC1");
        segments.insert("MediaSid", "ME1");

        let result = build_path("Accounts/{AccountSid}/Media/{MediaSid}.json", &segments);
        assert_eq!(result.unwrap(), "Accounts/AC1/Media/ME1.json");
    }

    #[test]
    fn test_build_path_reports_first_missing_segment() {
        let mut segments = HashMap::new();
        segments.insert("AccountSid", "AC1");

        let result = build_path(
            "Accounts/{AccountSid}/Messages/{MessageSid}/Media/{MediaSid}.json",
            &segments,
        );
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingSegment { name, .. }) if name == "MessageSid"
        ));
    }

    #[test]
    fn test_build_path_treats_empty_value_as_missing() {
        let mut segments = HashMap::new();
        segments.insert("AccountSid", "AC1");
        segments.insert("MediaSid", "");

        let result = build_path("Accounts/{AccountSid}/Media/{MediaSid}.json", &segments);
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingSegment { name, .. }) if name == "MediaSid"
        ));
    }

    #[test]
    fn test_build_path_percent_encodes_values() {
        let mut segments = HashMap::new();
        segments.insert("Sid", "a/b c");

        let result = build_path("Things/{Sid}.json", &segments).unwrap();
        assert_eq!(result, "Things/a%2Fb%20c.json");
    }

    #[test]
    fn test_build_path_ignores_unused_segments() {
        let mut segments = HashMap::new();
        segments.insert("AccountSid", "AC1");
        segments.insert("Unused", "x");

        let result = build_path("Accounts/{AccountSid}/Media.json", &segments).unwrap();
        assert_eq!(result, "Accounts/AC1/Media.json");
    }

    #[test]
    fn test_placeholders_in_order() {
        let names = placeholders("Accounts/{AccountSid}/Messages/{MessageSid}/Media.json").unwrap();
        assert_eq!(names, vec!["AccountSid", "MessageSid"]);
        assert!(placeholders("Media.json").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_templates_are_rejected() {
        for template in ["Media/{MediaSid.json", "Media/MediaSid}.json", "Media/{}.json", "{{A}}"] {
            assert!(
                matches!(
                    placeholders(template),
                    Err(InvalidHttpRequestError::MalformedTemplate { .. })
                ),
                "expected {template:?} to be malformed"
            );
        }
    }

    #[test]
    fn test_get_path_selects_most_specific_path() {
        let path = get_path(MEDIA_PATHS, ResourceOperation::All, &["MessageSid"]);
        assert_eq!(
            path.unwrap().template,
            "Accounts/{AccountSid}/Messages/{MessageSid}/Media.json"
        );
    }

    #[test]
    fn test_get_path_falls_back_to_less_specific() {
        let path = get_path(MEDIA_PATHS, ResourceOperation::All, &[]);
        assert_eq!(path.unwrap().template, "Accounts/{AccountSid}/Media.json");
    }

    #[test]
    fn test_get_path_filters_by_operation() {
        let delete = get_path(MEDIA_PATHS, ResourceOperation::Delete, &["MediaSid"]).unwrap();
        assert_eq!(delete.http_method, HttpMethod::Delete);

        assert!(get_path(MEDIA_PATHS, ResourceOperation::Create, &[]).is_none());
        assert!(get_path(MEDIA_PATHS, ResourceOperation::Find, &[]).is_none());
    }

    #[test]
    fn test_resource_operation_default_http_method() {
        assert_eq!(
            ResourceOperation::Find.default_http_method(),
            HttpMethod::Get
        );
        assert_eq!(
            ResourceOperation::All.default_http_method(),
            HttpMethod::Get
        );
        assert_eq!(
            ResourceOperation::Create.default_http_method(),
            HttpMethod::Post
        );
        assert_eq!(
            ResourceOperation::Delete.default_http_method(),
            HttpMethod::Delete
        );
    }
}
