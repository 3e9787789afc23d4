//! Request descriptors.
//!
//! An [`HttpRequest`] describes one HTTP call completely: method, resource
//! path template, the values for the template's placeholders, and an
//! ordered list of parameters. It is built once per call with
//! [`HttpRequest::builder`], validated on [`build`](HttpRequestBuilder::build),
//! and read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::rest::path::resolve_path;

/// HTTP methods supported by the REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Where a parameter is placed on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Appended to the query string.
    Query,
    /// Sent as a form-encoded body field.
    Body,
    /// Substituted into the matching `{Name}` placeholder of the path.
    UrlSegment,
}

/// One named request parameter.
///
/// Names are not unique: list filters repeat a base name with comparison
/// suffixes (`DateCreated>`), and some create calls repeat a field
/// (`MediaUrl`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// The wire name.
    pub name: String,
    /// The wire value.
    pub value: String,
    /// Where the parameter goes.
    pub kind: ParameterKind,
}

impl Parameter {
    /// Creates a parameter of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }

    /// Creates a query string parameter.
    #[must_use]
    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ParameterKind::Query)
    }

    /// Creates a form body parameter.
    #[must_use]
    pub fn body(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ParameterKind::Body)
    }

    /// Creates a path segment parameter.
    #[must_use]
    pub fn url_segment(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ParameterKind::UrlSegment)
    }
}

/// A fully specified, ready-to-dispatch HTTP call.
///
/// Every placeholder in the template is known to have a value: the
/// builder refuses to produce a descriptor otherwise, and the resolved
/// path is computed once at build time.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::{HttpRequest, HttpMethod};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "Accounts/{AccountSid}/Media/{MediaSid}.json")
///     .segment("AccountSid", "AC1")
///     .segment("MediaSid", "ME1")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path(), "Accounts/AC1/Media/ME1.json");
///
/// let missing = HttpRequest::builder(HttpMethod::Get, "Accounts/{AccountSid}/Media.json").build();
/// assert!(missing.is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    http_method: HttpMethod,
    template: String,
    path_segments: BTreeMap<String, String>,
    parameters: Vec<Parameter>,
    path: String,
}

impl HttpRequest {
    /// Creates a new builder for the given method and path template.
    #[must_use]
    pub fn builder(method: HttpMethod, template: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, template)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    /// Returns the unresolved path template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the placeholder values supplied through
    /// [`HttpRequestBuilder::segment`].
    #[must_use]
    pub const fn path_segments(&self) -> &BTreeMap<String, String> {
        &self.path_segments
    }

    /// Returns all parameters in insertion order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns the path with every placeholder substituted.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the `(name, value)` pairs of the given kind, in order.
    pub fn parameters_of(&self, kind: ParameterKind) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .filter(move |p| p.kind == kind)
            .map(|p| (p.name.as_str(), p.value.as_str()))
    }

    /// Returns the query string pairs, in order.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters_of(ParameterKind::Query)
    }

    /// Returns the form body pairs, in order.
    pub fn body_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters_of(ParameterKind::Body)
    }

    /// Returns `true` if the request carries form body parameters.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.body_pairs().next().is_some()
    }

    /// Looks up a placeholder value, preferring explicit segments over
    /// `UrlSegment` parameters.
    fn segment_value<'a>(
        path_segments: &'a BTreeMap<String, String>,
        parameters: &'a [Parameter],
        name: &str,
    ) -> Option<&'a str> {
        path_segments
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .or_else(|| {
                parameters
                    .iter()
                    .find(|p| p.kind == ParameterKind::UrlSegment && p.name == name)
                    .map(|p| p.value.as_str())
            })
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// [`build`](Self::build) consumes the builder, so a descriptor handed out
/// once can never be changed through it.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    template: String,
    path_segments: BTreeMap<String, String>,
    parameters: Vec<Parameter>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, template: impl Into<String>) -> Self {
        Self {
            http_method: method,
            template: template.into(),
            path_segments: BTreeMap::new(),
            parameters: Vec::new(),
        }
    }

    /// Sets the value for the `{name}` placeholder.
    #[must_use]
    pub fn segment(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_segments.insert(name.into(), value.into());
        self
    }

    /// Sets several placeholder values at once.
    #[must_use]
    pub fn segments<I, K, V>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.path_segments
            .extend(segments.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends several parameters, keeping their order.
    #[must_use]
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Appends a query string parameter.
    #[must_use]
    pub fn query_param(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameter(Parameter::query(name, value))
    }

    /// Appends a form body parameter.
    #[must_use]
    pub fn body_param(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameter(Parameter::body(name, value))
    }

    /// Appends a path segment parameter.
    #[must_use]
    pub fn url_segment(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameter(Parameter::url_segment(name, value))
    }

    /// Builds the [`HttpRequest`], resolving the path template.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingSegment`] if a placeholder
    /// has no value, [`InvalidHttpRequestError::MalformedTemplate`] if the
    /// template is malformed, and [`InvalidHttpRequestError::MissingBody`]
    /// for a POST or PUT without body parameters.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let path = resolve_path(&self.template, |name| {
            HttpRequest::segment_value(&self.path_segments, &self.parameters, name)
        })?;

        let request = HttpRequest {
            http_method: self.http_method,
            template: self.template,
            path_segments: self.path_segments,
            parameters: self.parameters,
            path,
        };

        if matches!(request.http_method, HttpMethod::Post | HttpMethod::Put) && !request.has_body()
        {
            return Err(InvalidHttpRequestError::MissingBody {
                method: request.http_method.to_string(),
            });
        }

        Ok(request)
    }
}
