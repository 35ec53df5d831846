use crate::domain::ProjectList;
use crate::shared::list_query::ListProps;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

fn three_w_scope(country_iso: Option<String>, reporting_ns: Option<String>) -> ListProps {
    ListProps {
        country_iso: country_iso
            .map(|iso| iso.trim().to_lowercase())
            .filter(|iso| !iso.is_empty()),
        reporting_ns: reporting_ns.and_then(|ns| ns.trim().parse().ok()),
        ..ListProps::default()
    }
    .with_title("Who does what where")
}

/// 3W projects, scoped by `?country=<iso>&reporting_ns=<id>`
#[component]
pub fn ThreeWDashboard() -> impl IntoView {
    let query = use_query_map();
    let scope = Signal::derive(move || {
        query.with(|q| three_w_scope(q.get("country"), q.get("reporting_ns")))
    });

    view! {
        <PageFrame page_id="d102_three_w--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"3W"</h1>
            </div>
            <div class="page__content">
                <ProjectList scope=scope />
            </div>
        </PageFrame>
    }
}
