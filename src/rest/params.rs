//! Filter and paging options for list calls.
//!
//! Each option type translates its present fields into query
//! [`Parameter`]s through [`ToParameters`]. A field that is `None`
//! contributes nothing; absence is never sent as a placeholder value.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use twilio_api::rest::{Comparison, DateFilter, ListParams, ToParameters};
//!
//! let params = ListParams {
//!     date_created: Some(DateFilter::new(
//!         NaiveDate::from_ymd_opt(2014, 3, 1).unwrap(),
//!         Comparison::GreaterThan,
//!     )),
//!     page_size: Some(50),
//!     ..ListParams::default()
//! };
//!
//! let wire: Vec<_> = params
//!     .to_parameters()
//!     .into_iter()
//!     .map(|p| (p.name, p.value))
//!     .collect();
//!
//! assert_eq!(
//!     wire,
//!     vec![
//!         ("DateCreated>".to_string(), "2014-03-01".to_string()),
//!         ("PageSize".to_string(), "50".to_string()),
//!     ]
//! );
//! ```

use chrono::NaiveDate;

use crate::clients::Parameter;
use crate::rest::paging::PagingInfo;

/// Wire format for filter dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How a date filter compares against the resource's date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// On the given date.
    #[default]
    Equal,
    /// After the given date.
    GreaterThan,
    /// Before the given date.
    LessThan,
}

impl Comparison {
    /// Returns the suffix appended to the parameter name.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Equal => "",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
        }
    }
}

/// A date plus a comparison, sent as `Name`, `Name>` or `Name<`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateFilter {
    /// The date to compare against.
    pub date: NaiveDate,
    /// The comparison to apply.
    pub comparison: Comparison,
}

impl DateFilter {
    /// Creates a new date filter.
    #[must_use]
    pub const fn new(date: NaiveDate, comparison: Comparison) -> Self {
        Self { date, comparison }
    }

    /// Filters for exactly `date`.
    #[must_use]
    pub const fn on(date: NaiveDate) -> Self {
        Self::new(date, Comparison::Equal)
    }

    /// Filters for dates after `date`.
    #[must_use]
    pub const fn after(date: NaiveDate) -> Self {
        Self::new(date, Comparison::GreaterThan)
    }

    /// Filters for dates before `date`.
    #[must_use]
    pub const fn before(date: NaiveDate) -> Self {
        Self::new(date, Comparison::LessThan)
    }

    /// Builds the query parameter for the given base name.
    #[must_use]
    pub fn to_parameter(&self, base: &str) -> Parameter {
        Parameter::query(
            format!("{base}{}", self.comparison.marker()),
            self.date.format(DATE_FORMAT).to_string(),
        )
    }
}

/// Converts an options value into request parameters.
pub trait ToParameters {
    /// Returns one parameter per present field, in a fixed order.
    fn to_parameters(&self) -> Vec<Parameter>;
}

impl ToParameters for () {
    fn to_parameters(&self) -> Vec<Parameter> {
        Vec::new()
    }
}

impl<P: ToParameters> ToParameters for Option<P> {
    fn to_parameters(&self) -> Vec<Parameter> {
        self.as_ref().map_or_else(Vec::new, ToParameters::to_parameters)
    }
}

/// Generic filter and paging options for list calls.
///
/// Parameters are emitted in field order: `ParentSid`, `DateCreated`,
/// `Page`, `PageSize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Restricts the list to children of this resource.
    pub parent_sid: Option<String>,
    /// Filters on the creation date.
    pub date_created: Option<DateFilter>,
    /// The page to fetch.
    pub page: Option<u32>,
    /// The number of records per page.
    pub page_size: Option<u32>,
}

impl ListParams {
    /// Options that request one page and nothing else.
    #[must_use]
    pub fn for_page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Options for the page after the one `paging` describes.
    ///
    /// Filters are kept; only the page changes. The page size falls back
    /// to the one the server reported. Returns `None` on the last page.
    #[must_use]
    pub fn next_page(&self, paging: &PagingInfo) -> Option<Self> {
        Some(Self {
            page: Some(paging.next_page()?),
            page_size: self.page_size.or(paging.page_size),
            ..self.clone()
        })
    }
}

impl ToParameters for ListParams {
    fn to_parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::new();
        if let Some(parent_sid) = &self.parent_sid {
            params.push(Parameter::query("ParentSid", parent_sid));
        }
        if let Some(filter) = &self.date_created {
            params.push(filter.to_parameter("DateCreated"));
        }
        push_paging(&mut params, self.page, self.page_size);
        params
    }
}

/// Filter options for listing messages.
///
/// Parameters are emitted in field order: `To`, `From`, `DateSent`,
/// `Page`, `PageSize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageListParams {
    /// Only messages sent to this number.
    pub to: Option<String>,
    /// Only messages sent from this number.
    pub from: Option<String>,
    /// Filters on the send date.
    pub date_sent: Option<DateFilter>,
    /// The page to fetch.
    pub page: Option<u32>,
    /// The number of records per page.
    pub page_size: Option<u32>,
}

impl MessageListParams {
    /// Options for the page after the one `paging` describes, keeping the
    /// `To`, `From` and `DateSent` filters.
    #[must_use]
    pub fn next_page(&self, paging: &PagingInfo) -> Option<Self> {
        Some(Self {
            page: Some(paging.next_page()?),
            page_size: self.page_size.or(paging.page_size),
            ..self.clone()
        })
    }
}

impl ToParameters for MessageListParams {
    fn to_parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::new();
        if let Some(to) = &self.to {
            params.push(Parameter::query("To", to));
        }
        if let Some(from) = &self.from {
            params.push(Parameter::query("From", from));
        }
        if let Some(filter) = &self.date_sent {
            params.push(filter.to_parameter("DateSent"));
        }
        push_paging(&mut params, self.page, self.page_size);
        params
    }
}

fn push_paging(params: &mut Vec<Parameter>, page: Option<u32>, page_size: Option<u32>) {
    if let Some(page) = page {
        params.push(Parameter::query("Page", page.to_string()));
    }
    if let Some(page_size) = page_size {
        params.push(Parameter::query("PageSize", page_size.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ParameterKind;

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 3, 1).unwrap()
    }

    fn names(params: &[Parameter]) -> Vec<&str> {
        params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_options_produce_no_parameters() {
        assert!(ListParams::default().to_parameters().is_empty());
        assert!(MessageListParams::default().to_parameters().is_empty());
        assert!(().to_parameters().is_empty());
        assert!(None::<ListParams>.to_parameters().is_empty());
    }

    #[test]
    fn test_date_filter_markers() {
        let equal = DateFilter::on(march_first()).to_parameter("DateCreated");
        let after = DateFilter::after(march_first()).to_parameter("DateCreated");
        let before = DateFilter::before(march_first()).to_parameter("DateCreated");

        assert_eq!(equal.name, "DateCreated");
        assert_eq!(after.name, "DateCreated>");
        assert_eq!(before.name, "DateCreated<");
        for param in [&equal, &after, &before] {
            assert_eq!(param.value, "2014-03-01");
            assert_eq!(param.kind, ParameterKind::Query);
        }
    }

    #[test]
    fn test_list_params_order_is_fixed() {
        let params = ListParams {
            page_size: Some(25),
            page: Some(3),
            date_created: Some(DateFilter::before(march_first())),
            parent_sid: Some("MM123".to_string()),
        }
        .to_parameters();

        assert_eq!(
            names(&params),
            vec!["ParentSid", "DateCreated<", "Page", "PageSize"]
        );
        assert_eq!(params[0].value, "MM123");
        assert_eq!(params[2].value, "3");
        assert_eq!(params[3].value, "25");
    }

    #[test]
    fn test_each_present_field_yields_exactly_one_parameter() {
        let params = ListParams {
            parent_sid: Some("MM1".to_string()),
            page: Some(0),
            ..ListParams::default()
        }
        .to_parameters();

        assert_eq!(names(&params), vec!["ParentSid", "Page"]);
    }

    #[test]
    fn test_for_page() {
        let params = ListParams::for_page(2).to_parameters();
        assert_eq!(params, vec![Parameter::query("Page", "2")]);
    }

    #[test]
    fn test_message_list_params_order() {
        let params = MessageListParams {
            to: Some("+15558675309".to_string()),
            from: Some("+15017122661".to_string()),
            date_sent: Some(DateFilter::after(march_first())),
            page: None,
            page_size: Some(10),
        }
        .to_parameters();

        assert_eq!(names(&params), vec!["To", "From", "DateSent>", "PageSize"]);
    }

    #[test]
    fn test_next_page_keeps_filters() {
        let current = ListParams {
            parent_sid: Some("MM1".to_string()),
            date_created: Some(DateFilter::after(NaiveDate::from_ymd_opt(2014, 3, 1).unwrap())),
            page: Some(0),
            page_size: Some(2),
        };
        let paging = PagingInfo {
            page: Some(0),
            page_size: Some(2),
            next_page_uri: Some("/2010-04-01/Accounts/AC1/Media.json?Page=1".to_string()),
            ..PagingInfo::default()
        };

        let next = current.next_page(&paging).unwrap();

        assert_eq!(
            next,
            ListParams {
                page: Some(1),
                ..current.clone()
            }
        );
        assert_eq!(
            next.to_parameters()
                .into_iter()
                .map(|p| p.name)
                .collect::<Vec<_>>(),
            vec!["ParentSid", "DateCreated>", "Page", "PageSize"]
        );
    }

    #[test]
    fn test_next_page_uses_reported_page_size_and_stops_on_last_page() {
        let paging = PagingInfo {
            page: Some(1),
            num_pages: Some(3),
            page_size: Some(20),
            ..PagingInfo::default()
        };

        let next = ListParams::default().next_page(&paging).unwrap();
        assert_eq!(next.page, Some(2));
        assert_eq!(next.page_size, Some(20));

        let last = PagingInfo {
            page: Some(2),
            ..paging
        };
        assert!(ListParams::default().next_page(&last).is_none());
    }

    #[test]
    fn test_message_next_page_keeps_filters() {
        let current = MessageListParams {
            to: Some("+15558675309".to_string()),
            date_sent: Some(DateFilter::before(NaiveDate::from_ymd_opt(2023, 9, 1).unwrap())),
            ..MessageListParams::default()
        };
        let paging = PagingInfo {
            page: Some(0),
            page_size: Some(50),
            next_page_uri: Some("/2010-04-01/Accounts/AC1/Messages.json?Page=1".to_string()),
            ..PagingInfo::default()
        };

        let next = current.next_page(&paging).unwrap();

        assert_eq!(next.to.as_deref(), Some("+15558675309"));
        assert_eq!(next.date_sent, current.date_sent);
        assert_eq!(next.page, Some(1));
        assert_eq!(next.page_size, Some(50));
    }
}
