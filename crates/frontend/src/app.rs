use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Every list view picks the API base up from context.
    provide_context(ApiConfig::from_window());

    view! {
        <AppRoutes />
    }
}
