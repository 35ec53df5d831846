use crate::shared::date_utils::{recent_interval, to_api_timestamp};
use crate::shared::list_query::{FilterParam, ListDependency, ListProps, ListQueryConfig, QueryState};
use crate::shared::list_utils::options_with_all;
use chrono::{DateTime, Utc};
use contracts::domain::common::DISASTER_TYPES;
use contracts::shared::list_query::{QueryParams, SortDirection};

pub const ENDPOINT: &str = "api/v2/field_report/";
pub const DEFAULT_LIMIT: u32 = 10;

pub fn list_config() -> ListQueryConfig {
    ListQueryConfig::new(ENDPOINT, DEFAULT_LIMIT)
        .filter("date", FilterParam::DateWindow("created_at__gte"))
        .filter("dtype", FilterParam::Verbatim)
        .default_ordering("created_at", SortDirection::Desc)
        .depends_on(&[
            ListDependency::Country,
            ListDependency::Region,
            ListDependency::Emergency,
            ListDependency::ShowRecent,
        ])
        .extra_query(scope_query)
}

fn scope_query(props: &ListProps, state: &QueryState, now: DateTime<Utc>) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(country) = props.country {
        params.insert("countries__in", country);
    }
    if let Some(region) = props.region {
        params.insert("regions__in", region);
    }
    if let Some(event) = props.emergency {
        params.insert("event", event);
    }
    if props.show_recent && state.filter("date").is_all() {
        params.insert("created_at__gte", to_api_timestamp(recent_interval(now)));
    }
    params
}

pub fn dtype_options() -> Vec<(String, String)> {
    options_with_all(
        "All Types",
        DISASTER_TYPES
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::query::undeclared_query_props;
    use crate::shared::list_query::derive_query;
    use chrono::TimeZone;
    use contracts::shared::list_query::QueryValue;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 20, 23, 59, 0).unwrap()
    }

    #[test]
    fn test_emergency_scope() {
        let config = list_config();
        let props = ListProps {
            emergency: Some(5012),
            ..ListProps::default()
        };
        let state = QueryState::new(&config, &props);

        let query = derive_query(&config, &props, &state, now());
        assert_eq!(query.get("event"), Some(&QueryValue::Int(5012)));
        assert_eq!(query.get("ordering"), Some(&QueryValue::from("-created_at")));
        assert_eq!(query.get("limit"), Some(&QueryValue::Int(10)));
        assert!(!query.contains_key("created_at__gte"));
    }

    #[test]
    fn test_week_window() {
        let config = list_config();
        let props = ListProps {
            country: Some(123),
            ..ListProps::default()
        };
        let mut state = QueryState::new(&config, &props);
        state.set_filter(&config, "date", "week".into()).unwrap();

        let query = derive_query(&config, &props, &state, now());
        assert_eq!(query.get("created_at__gte"), Some(&QueryValue::from("2024-01-13T00:00:00.000Z")));
        assert_eq!(query.get("countries__in"), Some(&QueryValue::Int(123)));
    }

    #[test]
    fn test_user_sort_replaces_default_ordering() {
        let config = list_config();
        let props = ListProps::default();
        let mut state = QueryState::new(&config, &props);
        state.set_sort("summary");
        state.set_sort("summary");

        let query = derive_query(&config, &props, &state, now());
        assert_eq!(query.get("ordering"), Some(&QueryValue::from("-summary")));
    }

    #[test]
    fn test_every_query_prop_triggers_refetch() {
        assert_eq!(undeclared_query_props(&list_config(), now()), Vec::<&str>::new());
    }
}
