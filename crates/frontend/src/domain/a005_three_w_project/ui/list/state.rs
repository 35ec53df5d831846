use crate::shared::list_query::{FilterParam, ListDependency, ListProps, ListQueryConfig, QueryState};
use crate::shared::list_utils::options_with_all;
use chrono::{DateTime, Utc};
use contracts::domain::a005_three_w_project::aggregate::{ProjectStatus, PROGRAMME_TYPES, SECTORS};
use contracts::shared::list_query::QueryParams;

pub const ENDPOINT: &str = "api/v2/project/";
pub const DEFAULT_LIMIT: u32 = 20;

pub fn list_config() -> ListQueryConfig {
    ListQueryConfig::new(ENDPOINT, DEFAULT_LIMIT)
        .filter("status", FilterParam::Verbatim)
        .filter("programme_type", FilterParam::Verbatim)
        .filter("primary_sector", FilterParam::Verbatim)
        .depends_on(&[ListDependency::CountryIso, ListDependency::ReportingNs])
        .extra_query(scope_query)
}

fn scope_query(props: &ListProps, _: &QueryState, _: DateTime<Utc>) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(iso) = props.country_iso.as_deref() {
        params.insert("country", iso);
    }
    if let Some(ns) = props.reporting_ns {
        params.insert("reporting_ns", ns);
    }
    params
}

fn code_options(table: &[(i32, &str)]) -> Vec<(String, String)> {
    options_with_all(
        "All",
        table
            .iter()
            .map(|(code, label)| (code.to_string(), label.to_string())),
    )
}

pub fn status_options() -> Vec<(String, String)> {
    options_with_all(
        "All",
        ProjectStatus::ALL
            .iter()
            .map(|s| (s.code().to_string(), s.label().to_string())),
    )
}

pub fn programme_type_options() -> Vec<(String, String)> {
    code_options(PROGRAMME_TYPES)
}

pub fn sector_options() -> Vec<(String, String)> {
    code_options(SECTORS)
}
