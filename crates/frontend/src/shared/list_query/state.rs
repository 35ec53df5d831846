use super::config::ListQueryConfig;
use super::error::ListQueryError;
use super::props::ListProps;
use chrono::NaiveDate;
use contracts::shared::list_query::SortDirection;
use std::collections::BTreeMap;

/// Sentinel meaning "no constraint" for a filter dimension.
pub const ALL_SENTINEL: &str = "all";

/// Current value of one filter dimension
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterValue {
    #[default]
    All,
    Value(String),
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl FilterValue {
    pub fn range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        FilterValue::Range { start, end }
    }

    /// True when the value places no constraint on the result set.
    pub fn is_all(&self) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Value(v) => v == ALL_SENTINEL,
            FilterValue::Range { start, end } => start.is_none() && end.is_none(),
        }
    }

    /// Value for a `<select>` bound to this filter.
    pub fn as_select_value(&self) -> String {
        match self {
            FilterValue::Value(v) => v.clone(),
            _ => ALL_SENTINEL.to_string(),
        }
    }

    pub fn range_start(&self) -> Option<NaiveDate> {
        match self {
            FilterValue::Range { start, .. } => *start,
            _ => None,
        }
    }

    pub fn range_end(&self) -> Option<NaiveDate> {
        match self {
            FilterValue::Range { end, .. } => *end,
            _ => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            FilterValue::All => ALL_SENTINEL.to_string(),
            FilterValue::Value(v) => v.clone(),
            FilterValue::Range { start, end } => format!("{:?}..{:?}", start, end),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        if v == ALL_SENTINEL {
            FilterValue::All
        } else {
            FilterValue::Value(v.to_string())
        }
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::from(v.as_str())
    }
}

/// A concrete `ordering` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: &str, direction: SortDirection) -> Self {
        Self {
            field: field.to_string(),
            direction,
        }
    }

    /// `name` / `-name`
    pub fn to_param(&self) -> String {
        format!("{}{}", self.direction.prefix(), self.field)
    }
}

/// Sort chosen by the user; `field == None` means "not chosen".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same field flips the direction, another field starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.toggled();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    pub fn order(&self) -> Option<SortOrder> {
        self.field
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(|f| SortOrder::new(f, self.direction))
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

/// Page/sort/filter state owned by one controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub limit: u32,
    pub sort: SortState,
    pub filters: BTreeMap<String, FilterValue>,
}

static UNSET_FILTER: FilterValue = FilterValue::All;

impl QueryState {
    pub fn new(config: &ListQueryConfig, props: &ListProps) -> Self {
        Self {
            page: 1,
            limit: config.effective_limit(props),
            sort: SortState::default(),
            filters: config
                .filter_keys()
                .map(|k| (k.to_string(), FilterValue::All))
                .collect(),
        }
    }

    pub fn filter(&self, key: &str) -> &FilterValue {
        self.filters.get(key).unwrap_or(&UNSET_FILTER)
    }

    pub fn set_page(&mut self, page: u32) -> Result<(), ListQueryError> {
        if page == 0 {
            return Err(ListQueryError::InvalidPage);
        }
        self.page = page;
        Ok(())
    }

    /// Validates against the collection's filters, then resets to page 1.
    pub fn set_filter(
        &mut self,
        config: &ListQueryConfig,
        key: &str,
        value: FilterValue,
    ) -> Result<(), ListQueryError> {
        let spec = config
            .filter_spec(key)
            .ok_or_else(|| ListQueryError::InvalidFilterKey {
                endpoint: config.endpoint,
                key: key.to_string(),
            })?;
        if !spec.accepts(&value) {
            return Err(ListQueryError::InvalidFilterValue {
                key: key.to_string(),
                value: value.describe(),
            });
        }
        let value = if value.is_all() { FilterValue::All } else { value };
        self.filters.insert(key.to_string(), value);
        self.page = 1;
        Ok(())
    }

    pub fn set_sort(&mut self, field: &str) {
        self.sort.toggle(field);
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::config::FilterParam;

    fn config() -> ListQueryConfig {
        ListQueryConfig::new("api/v2/surge_alert/", 10)
            .filter("date", FilterParam::DateWindow("created_at__gte"))
            .filter("type", FilterParam::Verbatim)
    }

    #[test]
    fn test_new_state_has_every_filter_unset() {
        let state = QueryState::new(&config(), &ListProps::default());
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 10);
        assert_eq!(state.filters.len(), 2);
        assert!(state.filters.values().all(FilterValue::is_all));
    }

    #[test]
    fn test_sort_toggle() {
        let mut sort = SortState::default();
        sort.toggle("name");
        assert_eq!(sort.order(), Some(SortOrder::new("name", SortDirection::Asc)));
        sort.toggle("name");
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.toggle("other");
        assert_eq!(sort.order(), Some(SortOrder::new("other", SortDirection::Asc)));
    }

    #[test]
    fn test_filter_and_sort_reset_page() {
        let config = config();
        let mut state = QueryState::new(&config, &ListProps::default());
        state.set_page(4).unwrap();
        state.set_filter(&config, "type", "alert".into()).unwrap();
        assert_eq!(state.page, 1);

        state.set_page(3).unwrap();
        state.set_sort("created_at");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_unknown_filter_key_is_rejected() {
        let config = config();
        let mut state = QueryState::new(&config, &ListProps::default());
        state.set_page(2).unwrap();
        let err = state.set_filter(&config, "colour", "red".into()).unwrap_err();
        assert!(matches!(err, ListQueryError::InvalidFilterKey { ref key, .. } if key == "colour"));
        // rejected actions leave the state untouched
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let mut state = QueryState::new(&config(), &ListProps::default());
        assert_eq!(state.set_page(0), Err(ListQueryError::InvalidPage));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_all_sentinel_string_maps_to_all() {
        assert_eq!(FilterValue::from("all"), FilterValue::All);
        assert!(FilterValue::Value("all".to_string()).is_all());
        assert!(FilterValue::range(None, None).is_all());
        assert!(!FilterValue::from("week").is_all());
    }
}
