use crate::domain::{AppealList, EmergencyList, FieldReportList};
use crate::shared::list_query::ListProps;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::enums::region::{parse_region, Region};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

fn region_scope(region: Option<Region>, title: &str) -> ListProps {
    ListProps {
        region: region.map(|r| r.id()),
        ..ListProps::default()
    }
    .with_title(title)
}

/// `/regions/:region`, where the parameter is an id or a slug (`africa`, `mena`, ...)
#[component]
pub fn RegionDashboard() -> impl IntoView {
    let params = use_params_map();
    let region = Memo::new(move |_| {
        params.with(|p| p.get("region").and_then(|r| parse_region(&r)))
    });

    let appeals = Signal::derive(move || region_scope(region.get(), "Active Operations").active());
    let emergencies = Signal::derive(move || region_scope(region.get(), "Recent Emergencies").recent());
    let reports = Signal::derive(move || region_scope(region.get(), "Field Reports"));

    view! {
        <PageFrame page_id="d101_region--dashboard" category=PAGE_CAT_DASHBOARD>
            <Show
                when=move || region.get().is_some()
                fallback=|| view! { <p class="page__message">"Unknown region."</p> }
            >
                <div class="page__header">
                    <h1 class="page__title">
                        {move || region.get().map(|r| r.display_name()).unwrap_or_default()}
                    </h1>
                </div>
                <div class="page__content">
                    <AppealList scope=appeals />
                    <EmergencyList scope=emergencies />
                    <FieldReportList scope=reports />
                </div>
            </Show>
        </PageFrame>
    }
}
