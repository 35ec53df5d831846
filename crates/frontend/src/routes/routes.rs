use crate::dashboards::{HomeDashboard, RegionDashboard, ThreeWDashboard};
use crate::domain::{AppealList, EmergencyList, FieldReportList, SurgeAlertList};
use crate::shared::icons::icon;
use crate::shared::list_query::ListProps;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::enums::region::Region;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav">
            <A href="/">"Home"</A>
            <A href="/alerts">{icon("alert")}" Alerts"</A>
            <A href="/appeals">{icon("appeals")}" Appeals"</A>
            <A href="/emergencies">{icon("emergencies")}" Emergencies"</A>
            <A href="/reports">{icon("reports")}" Field Reports"</A>
            <A href="/three-w">{icon("projects")}" 3W"</A>
            {Region::ALL
                .into_iter()
                .map(|r| view! { <A href=format!("/regions/{}", r.slug())>{r.display_name()}</A> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn AlertsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_surge_alert--list" category=PAGE_CAT_LIST>
            <SurgeAlertList scope=Signal::stored(ListProps::default().with_limit(20).with_title("Surge Alerts")) />
        </PageFrame>
    }
}

#[component]
fn AppealsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="a002_appeal--list" category=PAGE_CAT_LIST>
            <AppealList scope=Signal::stored(ListProps::default().with_limit(20)) />
        </PageFrame>
    }
}

#[component]
fn EmergenciesPage() -> impl IntoView {
    view! {
        <PageFrame page_id="a003_emergency--list" category=PAGE_CAT_LIST>
            <EmergencyList scope=Signal::stored(ListProps::default().with_limit(20)) />
        </PageFrame>
    }
}

#[component]
fn FieldReportsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="a004_field_report--list" category=PAGE_CAT_LIST>
            <FieldReportList scope=Signal::stored(ListProps::default().with_limit(20)) />
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="app__content">
                <Routes fallback=|| view! { <p class="page__message">"Page not found."</p> }>
                    <Route path=path!("/") view=HomeDashboard />
                    <Route path=path!("/alerts") view=AlertsPage />
                    <Route path=path!("/appeals") view=AppealsPage />
                    <Route path=path!("/emergencies") view=EmergenciesPage />
                    <Route path=path!("/reports") view=FieldReportsPage />
                    <Route path=path!("/three-w") view=ThreeWDashboard />
                    <Route path=path!("/regions/:region") view=RegionDashboard />
                </Routes>
            </main>
        </Router>
    }
}
