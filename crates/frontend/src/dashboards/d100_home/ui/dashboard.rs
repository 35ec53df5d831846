use crate::domain::{AppealList, EmergencyList, FieldReportList, SurgeAlertList};
use crate::shared::list_query::ListProps;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;

/// Landing page: what is happening right now, across every region
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let appeals = Signal::stored(ListProps::default().active().with_title("Ongoing Operations"));
    let alerts = Signal::stored(ListProps::default().recent().with_title("Latest Alerts"));
    let emergencies = Signal::stored(ListProps::default().recent().with_title("Emergencies in the last 30 days"));
    let reports = Signal::stored(ListProps::default().recent().with_limit(5).with_title("Latest Field Reports"));

    view! {
        <PageFrame page_id="d100_home--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Disaster Response Dashboard"</h1>
            </div>
            <div class="page__content">
                <AppealList scope=appeals />
                <SurgeAlertList scope=alerts />
                <EmergencyList scope=emergencies />
                <FieldReportList scope=reports />
            </div>
        </PageFrame>
    }
}
