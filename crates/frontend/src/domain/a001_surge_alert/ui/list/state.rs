use crate::shared::date_utils::{recent_interval, to_api_timestamp};
use crate::shared::list_query::{FilterParam, ListDependency, ListProps, ListQueryConfig, QueryState};
use crate::shared::list_utils::options_with_all;
use chrono::{DateTime, Utc};
use contracts::domain::a001_surge_alert::aggregate::{AlertCategory, AlertType};
use contracts::shared::list_query::QueryParams;

pub const ENDPOINT: &str = "api/v2/surge_alert/";
pub const DEFAULT_LIMIT: u32 = 5;

pub fn list_config() -> ListQueryConfig {
    ListQueryConfig::new(ENDPOINT, DEFAULT_LIMIT)
        .filter("date", FilterParam::DateWindow("created_at__gte"))
        .filter("type", FilterParam::Rename("atype"))
        .filter("category", FilterParam::Verbatim)
        .depends_on(&[ListDependency::Emergency, ListDependency::ShowRecent])
        .extra_query(scope_query)
}

fn scope_query(props: &ListProps, state: &QueryState, now: DateTime<Utc>) -> QueryParams {
    let mut params = QueryParams::new();
    if props.show_recent && state.filter("date").is_all() {
        params.insert("created_at__gte", to_api_timestamp(recent_interval(now)));
    }
    if let Some(event) = props.emergency {
        params.insert("event", event.to_string());
    }
    params
}

pub fn type_options() -> Vec<(String, String)> {
    options_with_all(
        "All",
        AlertType::ALL
            .iter()
            .map(|t| (t.code().to_string(), t.label().to_string())),
    )
}

pub fn category_options() -> Vec<(String, String)> {
    options_with_all(
        "All",
        AlertCategory::ALL
            .iter()
            .map(|c| (c.code().to_string(), c.label().to_string())),
    )
}
