use super::props::ListProps;
use super::state::{FilterValue, QueryState, SortOrder};
use crate::shared::date_utils::{start_of_day, to_api_timestamp, DateWindow};
use chrono::{DateTime, Utc};
use contracts::shared::list_query::{QueryParams, SortDirection};

/// How the page number is sent to the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaginationStyle {
    /// `offset = limit * (page - 1)`
    #[default]
    Offset,
    /// 1-based `page`
    PageNumber,
}

impl PaginationStyle {
    pub fn apply(self, params: &mut QueryParams, page: u32, limit: u32) {
        match self {
            PaginationStyle::Offset => {
                let offset = i64::from(limit) * i64::from(page.saturating_sub(1));
                params.insert("offset", offset);
            }
            PaginationStyle::PageNumber => params.insert("page", page),
        }
    }
}

/// How a UI filter is translated into query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterParam {
    /// Sent under the filter key itself
    Verbatim,
    /// Sent under another parameter name
    Rename(&'static str),
    /// `week` / `month` / `year`, sent as a lower-bound timestamp
    DateWindow(&'static str),
    /// Explicit `{start, end}` range, sent as two bounds
    DateRange {
        gte: &'static str,
        lte: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub key: &'static str,
    pub param: FilterParam,
}

impl FilterSpec {
    pub fn accepts(&self, value: &FilterValue) -> bool {
        match (self.param, value) {
            (_, FilterValue::All) => true,
            (FilterParam::Verbatim | FilterParam::Rename(_), FilterValue::Value(_)) => true,
            (FilterParam::DateWindow(_), FilterValue::Value(v)) => DateWindow::parse(v).is_some(),
            (FilterParam::DateRange { .. }, FilterValue::Range { .. }) => true,
            _ => false,
        }
    }

    /// Writes the parameters for a non-`all` value.
    pub fn apply(&self, value: &FilterValue, now: DateTime<Utc>, params: &mut QueryParams) {
        match (self.param, value) {
            (FilterParam::Verbatim, FilterValue::Value(v)) => params.insert(self.key, v.as_str()),
            (FilterParam::Rename(param), FilterValue::Value(v)) => params.insert(param, v.as_str()),
            (FilterParam::DateWindow(param), FilterValue::Value(v)) => {
                if let Some(window) = DateWindow::parse(v) {
                    params.insert(param, to_api_timestamp(window.since(now)));
                }
            }
            (FilterParam::DateRange { gte, lte }, FilterValue::Range { start, end }) => {
                if let Some(start) = start {
                    params.insert(gte, to_api_timestamp(start_of_day(*start)));
                }
                if let Some(end) = end {
                    params.insert(lte, to_api_timestamp(start_of_day(*end)));
                }
            }
            _ => {}
        }
    }
}

/// External props a collection's query depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListDependency {
    Limit,
    Country,
    CountryIso,
    Region,
    Emergency,
    ReportingNs,
    Record,
    AppealKind,
    ShowRecent,
    ShowActive,
}

impl ListDependency {
    pub fn changed(self, old: &ListProps, new: &ListProps) -> bool {
        match self {
            ListDependency::Limit => old.limit != new.limit,
            ListDependency::Country => old.country != new.country,
            ListDependency::CountryIso => old.country_iso != new.country_iso,
            ListDependency::Region => old.region != new.region,
            ListDependency::Emergency => old.emergency != new.emergency,
            ListDependency::ReportingNs => old.reporting_ns != new.reporting_ns,
            ListDependency::Record => old.record != new.record,
            ListDependency::AppealKind => old.appeal_kind != new.appeal_kind,
            ListDependency::ShowRecent => old.show_recent != new.show_recent,
            ListDependency::ShowActive => old.show_active != new.show_active,
        }
    }
}

/// Scope-derived query fields (country, recent window, ...).
pub type ExtraQueryFn = fn(&ListProps, &QueryState, DateTime<Utc>) -> QueryParams;

fn no_extra_query(_: &ListProps, _: &QueryState, _: DateTime<Utc>) -> QueryParams {
    QueryParams::new()
}

/// Per-collection configuration of a list controller
#[derive(Debug, Clone)]
pub struct ListQueryConfig {
    pub endpoint: &'static str,
    pub default_limit: u32,
    pub filters: Vec<FilterSpec>,
    pub default_ordering: Option<SortOrder>,
    pub pagination: PaginationStyle,
    pub depends_on: Vec<ListDependency>,
    pub extra_query: ExtraQueryFn,
}

impl ListQueryConfig {
    pub fn new(endpoint: &'static str, default_limit: u32) -> Self {
        Self {
            endpoint,
            default_limit: default_limit.max(1),
            filters: Vec::new(),
            default_ordering: None,
            pagination: PaginationStyle::Offset,
            depends_on: vec![ListDependency::Limit],
            extra_query: no_extra_query,
        }
    }

    pub fn filter(mut self, key: &'static str, param: FilterParam) -> Self {
        self.filters.retain(|f| f.key != key);
        self.filters.push(FilterSpec { key, param });
        self
    }

    pub fn default_ordering(mut self, field: &str, direction: SortDirection) -> Self {
        self.default_ordering = Some(SortOrder::new(field, direction));
        self
    }

    pub fn pagination(mut self, style: PaginationStyle) -> Self {
        self.pagination = style;
        self
    }

    /// Declares the props that feed the query. `Limit` is always included.
    pub fn depends_on(mut self, deps: &[ListDependency]) -> Self {
        for dep in deps {
            if !self.depends_on.contains(dep) {
                self.depends_on.push(*dep);
            }
        }
        self
    }

    pub fn extra_query(mut self, f: ExtraQueryFn) -> Self {
        self.extra_query = f;
        self
    }

    pub fn filter_spec(&self, key: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|f| f.key == key)
    }

    pub fn filter_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.iter().map(|f| f.key)
    }

    /// Page size for the given props: a positive override wins.
    pub fn effective_limit(&self, props: &ListProps) -> u32 {
        props
            .limit
            .filter(|l| *l > 0)
            .unwrap_or(self.default_limit)
    }

    /// True when any declared dependency differs between the two props.
    pub fn props_changed(&self, old: &ListProps, new: &ListProps) -> bool {
        self.depends_on.iter().any(|dep| dep.changed(old, new))
    }
}
