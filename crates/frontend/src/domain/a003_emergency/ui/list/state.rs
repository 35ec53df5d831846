use crate::shared::date_utils::{recent_interval, to_api_timestamp};
use crate::shared::list_query::{FilterParam, ListDependency, ListProps, ListQueryConfig, QueryState};
use crate::shared::list_utils::options_with_all;
use chrono::{DateTime, Utc};
use contracts::domain::common::DISASTER_TYPES;
use contracts::shared::list_query::{QueryParams, SortDirection};

pub const ENDPOINT: &str = "api/v2/event/";
pub const DEFAULT_LIMIT: u32 = 10;

pub fn list_config() -> ListQueryConfig {
    ListQueryConfig::new(ENDPOINT, DEFAULT_LIMIT)
        .filter("date", FilterParam::DateWindow("disaster_start_date__gte"))
        .filter("dtype", FilterParam::Verbatim)
        .default_ordering("disaster_start_date", SortDirection::Desc)
        .depends_on(&[
            ListDependency::Country,
            ListDependency::Region,
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
    if props.show_recent && state.filter("date").is_all() {
        params.insert("disaster_start_date__gte", to_api_timestamp(recent_interval(now)));
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
    use crate::shared::list_query::{derive_query, request_query};
    use chrono::TimeZone;
    use contracts::shared::list_query::QueryValue;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_region_scope_with_recent_window() {
        let config = list_config();
        let props = ListProps {
            region: Some(2),
            ..ListProps::default()
        }
        .recent();
        let state = QueryState::new(&config, &props);

        let query = request_query(&config, &props, &state, now());
        assert_eq!(query.get("regions__in"), Some(&QueryValue::Int(2)));
        assert_eq!(query.get("ordering"), Some(&QueryValue::from("-disaster_start_date")));
        assert_eq!(
            query.get("disaster_start_date__gte"),
            Some(&QueryValue::from("2024-03-01T00:00:00.000Z"))
        );
        assert_eq!(query.get("offset"), Some(&QueryValue::Int(0)));
    }

    #[test]
    fn test_explicit_window_replaces_recent_interval() {
        let config = list_config();
        let props = ListProps::default().recent();
        let mut state = QueryState::new(&config, &props);
        state.set_filter(&config, "date", "year".into()).unwrap();
        state.set_filter(&config, "dtype", "12".into()).unwrap();

        let query = derive_query(&config, &props, &state, now());
        assert_eq!(
            query.get("disaster_start_date__gte"),
            Some(&QueryValue::from("2023-03-31T00:00:00.000Z"))
        );
        assert_eq!(query.get("dtype"), Some(&QueryValue::from("12")));
    }

    #[test]
    fn test_scope_changes_trigger_refetch() {
        let config = list_config();
        let old = ListProps::default();
        assert!(config.props_changed(&old, &old.clone().recent()));
        assert!(config.props_changed(&old, &ListProps { country: Some(84), ..old.clone() }));
        assert!(!config.props_changed(&old, &old.clone().with_title("Emergencies")));
    }

    #[test]
    fn test_every_query_prop_triggers_refetch() {
        assert_eq!(undeclared_query_props(&list_config(), now()), Vec::<&str>::new());
    }
}
