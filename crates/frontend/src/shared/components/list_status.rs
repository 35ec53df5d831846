use crate::shared::icons::icon;
use crate::shared::list_query::FetchStatus;
use leptos::prelude::*;

/// Loading / error / empty banner shown above a collection table.
///
/// Renders nothing once rows are loaded.
#[component]
pub fn ListStatus(
    #[prop(into)]
    status: Signal<FetchStatus>,

    #[prop(into)]
    error: Signal<Option<String>>,

    #[prop(optional, into)]
    empty_message: Option<String>,

    on_retry: Callback<()>,
) -> impl IntoView {
    let empty_message = empty_message.unwrap_or_else(|| "No data to display.".to_string());

    move || match status.get() {
        FetchStatus::Loading => view! {
            <div class="list-status list-status--loading">"Loading..."</div>
        }
        .into_any(),
        FetchStatus::Failed => view! {
            <div class="list-status list-status--error">
                <span>{move || error.get().unwrap_or_default()}</span>
                <button class="button button--secondary" on:click=move |_| on_retry.run(())>
                    {icon("refresh")}
                    " Retry"
                </button>
            </div>
        }
        .into_any(),
        FetchStatus::Empty => {
            let message = empty_message.clone();
            view! { <div class="list-status list-status--empty">{message}</div> }.into_any()
        }
        FetchStatus::Idle | FetchStatus::Loaded => view! { <></> }.into_any(),
    }
}
