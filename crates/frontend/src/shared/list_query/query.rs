//! Query derivation.
//!
//! Pure functions of (config, props, state, now): equal inputs give equal
//! queries, so callers can compare derivations instead of tracking changes.

use super::config::ListQueryConfig;
use super::props::ListProps;
use super::state::QueryState;
use chrono::{DateTime, Utc};
use contracts::shared::list_query::QueryParams;

/// Query without the pagination position.
///
/// Contains `limit`, `ordering` (user sort, else the collection default),
/// one entry per non-`all` filter and the collection's scope fields.
/// Scope fields are merged last and win on key collisions.
pub fn derive_query(
    config: &ListQueryConfig,
    props: &ListProps,
    state: &QueryState,
    now: DateTime<Utc>,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("limit", state.limit);

    if let Some(order) = state.sort.order().or_else(|| config.default_ordering.clone()) {
        params.insert("ordering", order.to_param());
    }

    for spec in &config.filters {
        let value = state.filter(spec.key);
        if !value.is_all() {
            spec.apply(value, now, &mut params);
        }
    }

    params.merge((config.extra_query)(props, state, now));
    params
}

/// Query actually sent: `derive_query` plus `offset` or `page`.
pub fn request_query(
    config: &ListQueryConfig,
    props: &ListProps,
    state: &QueryState,
    now: DateTime<Utc>,
) -> QueryParams {
    let mut params = derive_query(config, props, state, now);
    config.pagination.apply(&mut params, state.page, state.limit);
    params
}

/// `ListProps` differing from the defaults in exactly one field.
#[cfg(test)]
pub(crate) fn single_prop_variants() -> Vec<(&'static str, ListProps)> {
    use contracts::domain::a002_appeal::aggregate::AppealKind;

    let base = ListProps::default;
    vec![
        ("limit", base().with_limit(7)),
        ("country", ListProps { country: Some(84), ..base() }),
        ("country_iso", ListProps { country_iso: Some("ph".to_string()), ..base() }),
        ("region", ListProps { region: Some(2), ..base() }),
        ("emergency", ListProps { emergency: Some(5012), ..base() }),
        ("reporting_ns", ListProps { reporting_ns: Some(84), ..base() }),
        ("record", ListProps { record: Some(3141), ..base() }),
        ("appeal_kind", ListProps { appeal_kind: Some(AppealKind::Dref), ..base() }),
        ("show_recent", base().recent()),
        ("show_active", base().active()),
        ("title", base().with_title("Scoped")),
    ]
}

/// Props that change the derived query without being declared in
/// `depends_on`. A controller would keep stale rows when one of them changes.
#[cfg(test)]
pub(crate) fn undeclared_query_props(config: &ListQueryConfig, now: DateTime<Utc>) -> Vec<&'static str> {
    let old = ListProps::default();
    let old_query = derive_query(config, &old, &QueryState::new(config, &old), now);
    single_prop_variants()
        .into_iter()
        .filter(|(_, new)| {
            let new_query = derive_query(config, new, &QueryState::new(config, new), now);
            new_query != old_query && !config.props_changed(&old, new)
        })
        .map(|(name, _)| name)
        .collect()
}
