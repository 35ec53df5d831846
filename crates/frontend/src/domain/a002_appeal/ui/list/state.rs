use crate::shared::date_utils::to_api_timestamp;
use crate::shared::list_query::{FilterParam, ListDependency, ListProps, ListQueryConfig, QueryState};
use crate::shared::list_utils::options_with_all;
use chrono::{DateTime, Utc};
use contracts::domain::a002_appeal::aggregate::{AppealStatus, AppealType};
use contracts::domain::common::DISASTER_TYPES;
use contracts::shared::list_query::{QueryParams, SortDirection};

pub const ENDPOINT: &str = "api/v2/appeal/";
pub const DEFAULT_LIMIT: u32 = 10;

pub fn list_config() -> ListQueryConfig {
    ListQueryConfig::new(ENDPOINT, DEFAULT_LIMIT)
        .filter(
            "date",
            FilterParam::DateRange {
                gte: "start_date__gte",
                lte: "start_date__lte",
            },
        )
        .filter("dtype", FilterParam::Verbatim)
        .filter("status", FilterParam::Verbatim)
        .filter("atype", FilterParam::Verbatim)
        .default_ordering("start_date", SortDirection::Desc)
        .depends_on(&[
            ListDependency::Country,
            ListDependency::Region,
            ListDependency::AppealKind,
            ListDependency::Record,
            ListDependency::ShowActive,
        ])
        .extra_query(scope_query)
}

/// Country wins over region; a pinned appeal kind replaces the type filter.
fn scope_query(props: &ListProps, _: &QueryState, now: DateTime<Utc>) -> QueryParams {
    let mut params = QueryParams::new();
    if props.show_active {
        params.insert("end_date__gt", to_api_timestamp(now));
    }
    if let Some(country) = props.country {
        params.insert("country", country);
    } else if let Some(region) = props.region {
        params.insert("region", region);
    }
    if let Some(kind) = props.appeal_kind {
        params.insert("atype", kind.atype_code());
    }
    if let Some(record) = props.record {
        params.insert("id", record);
    }
    params
}

pub fn atype_options() -> Vec<(String, String)> {
    options_with_all(
        "All",
        AppealType::ALL
            .iter()
            .map(|t| (t.code().to_string(), t.label().to_string())),
    )
}

pub fn status_options() -> Vec<(String, String)> {
    options_with_all(
        "All",
        AppealStatus::ALL
            .iter()
            .map(|s| (s.code().to_string(), s.label().to_string())),
    )
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
    use crate::shared::list_query::{derive_query, request_query, FilterValue};
    use chrono::{NaiveDate, TimeZone};
    use contracts::domain::a002_appeal::aggregate::AppealKind;
    use contracts::shared::list_query::QueryValue;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    fn text(v: &str) -> Option<QueryValue> {
        Some(QueryValue::Text(v.to_string()))
    }

    #[test]
    fn test_default_query() {
        let config = list_config();
        let props = ListProps::default();
        let state = QueryState::new(&config, &props);
        let expected: QueryParams = [
            ("limit", QueryValue::Int(10)),
            ("offset", QueryValue::Int(0)),
            ("ordering", QueryValue::from("-start_date")),
        ]
        .into_iter()
        .collect();
        assert_eq!(request_query(&config, &props, &state, now()), expected);
    }

    #[test]
    fn test_country_takes_precedence_over_region() {
        let config = list_config();
        let props = ListProps {
            country: Some(84),
            region: Some(2),
            ..ListProps::default()
        };
        let state = QueryState::new(&config, &props);
        let query = derive_query(&config, &props, &state, now());
        assert_eq!(query.get("country"), Some(&QueryValue::Int(84)));
        assert!(!query.contains_key("region"));

        let props = ListProps {
            region: Some(2),
            ..ListProps::default()
        };
        let query = derive_query(&config, &props, &state, now());
        assert_eq!(query.get("region"), Some(&QueryValue::Int(2)));
    }

    #[test]
    fn test_appeal_kind_overrides_type_filter() {
        let config = list_config();
        let props = ListProps {
            appeal_kind: Some(AppealKind::Dref),
            ..ListProps::default()
        };
        let mut state = QueryState::new(&config, &props);
        state.set_filter(&config, "atype", "1".into()).unwrap();
        let query = derive_query(&config, &props, &state, now());
        assert_eq!(query.get("atype").cloned(), text("0"));
    }

    #[test]
    fn test_active_record_and_date_range() {
        let config = list_config();
        let props = ListProps {
            record: Some(3141),
            ..ListProps::default()
        }
        .active();
        let mut state = QueryState::new(&config, &props);
        state
            .set_filter(
                &config,
                "date",
                FilterValue::range(NaiveDate::from_ymd_opt(2024, 1, 1), NaiveDate::from_ymd_opt(2024, 2, 1)),
            )
            .unwrap();

        let query = derive_query(&config, &props, &state, now());
        assert_eq!(query.get("end_date__gt").cloned(), text("2024-03-15T09:30:00.000Z"));
        assert_eq!(query.get("id"), Some(&QueryValue::Int(3141)));
        assert_eq!(query.get("start_date__gte").cloned(), text("2024-01-01T00:00:00.000Z"));
        assert_eq!(query.get("start_date__lte").cloned(), text("2024-02-01T00:00:00.000Z"));
    }

    #[test]
    fn test_date_window_values_are_rejected() {
        let config = list_config();
        let mut state = QueryState::new(&config, &ListProps::default());
        assert!(state.set_filter(&config, "date", "week".into()).is_err());
    }

    #[test]
    fn test_declared_dependencies() {
        let config = list_config();
        let old = ListProps::default();
        assert!(config.props_changed(&old, &ListProps { appeal_kind: Some(AppealKind::Appeal), ..old.clone() }));
        assert!(config.props_changed(&old, &ListProps { record: Some(1), ..old.clone() }));
        assert!(config.props_changed(&old, &old.clone().active()));
        assert!(!config.props_changed(&old, &ListProps { emergency: Some(1), ..old.clone() }));
    }

    #[test]
    fn test_every_query_prop_triggers_refetch() {
        assert_eq!(undeclared_query_props(&list_config(), now()), Vec::<&str>::new());
    }
}
