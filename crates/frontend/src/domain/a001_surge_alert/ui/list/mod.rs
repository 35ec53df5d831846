pub mod state;

use self::state::{category_options, list_config, type_options};
use crate::shared::components::{FilterHeaderCell, ListStatus, PaginationControls};
use crate::shared::date_utils::{iso_date, DateWindow};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, ListProps};
use crate::shared::list_utils::truncate;
use contracts::domain::a001_surge_alert::aggregate::SurgeAlert;
use leptos::prelude::*;

const MESSAGE_PREVIEW_CHARS: usize = 128;

impl CsvExportable for SurgeAlert {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Category", "Emergency", "Alert Message", "Type"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            iso_date(&self.created_at),
            self.alert_category().map(|c| c.label()).unwrap_or_default().to_string(),
            self.operation.clone().unwrap_or_default(),
            self.message.clone().unwrap_or_default(),
            self.alert_type().map(|t| t.label()).unwrap_or_default().to_string(),
        ]
    }
}

#[component]
pub fn SurgeAlertList(
    /// Scope and presentation props handed down by the page
    #[prop(into)]
    scope: Signal<ListProps>,
) -> impl IntoView {
    let list = use_list_query::<SurgeAlert>(list_config(), scope);

    let title = move || {
        scope
            .with(|p| p.title.clone())
            .unwrap_or_else(|| "Latest Alerts".to_string())
    };
    let count = Signal::derive(move || list.fetch_state.with(|s| s.count()));
    let status = Signal::derive(move || list.fetch_state.with(|s| s.status()));
    let error = Signal::derive(move || {
        list.fetch_state
            .with(|s| s.error.as_ref().map(|e| format!("Surge alerts not available: {}", e)))
    });
    let filter_value =
        move |key: &'static str| Signal::derive(move || list.state.with(|s| s.filter(key).as_select_value()));
    let on_filter =
        move |key: &'static str| Callback::new(move |value: String| list.set_filter(key, value));

    let export = move |_| {
        let rows = list.fetch_state.with_untracked(|s| s.rows().to_vec());
        if let Err(e) = export_to_csv(&rows, "surge-alerts.csv") {
            log::warn!("Export failed: {}", e);
        }
    };

    view! {
        <section class="list-view">
            <div class="header">
                <h2 class="header__title">{move || format!("{} ({})", title(), count.get())}</h2>
                <button class="button button--secondary" on:click=export>
                    {icon("download")}
                    " Export"
                </button>
            </div>

            <ListStatus
                status=status
                error=error
                empty_message="No surge alerts match the selected filters."
                on_retry=Callback::new(move |_| list.refresh())
            />

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <FilterHeaderCell
                            label="Date"
                            options=DateWindow::options()
                            value=filter_value("date")
                            on_change=on_filter("date")
                        />
                        <FilterHeaderCell
                            label="Category"
                            options=category_options()
                            value=filter_value("category")
                            on_change=on_filter("category")
                        />
                        <th class="table__header-cell">"Emergency"</th>
                        <th class="table__header-cell">"Alert Message"</th>
                        <FilterHeaderCell
                            label="Type"
                            options=type_options()
                            value=filter_value("type")
                            on_change=on_filter("type")
                        />
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.fetch_state.with(|s| s.rows().to_vec())
                        key=|alert| alert.id
                        let:alert
                    >
                        <tr>
                            <td class="table__cell">{iso_date(&alert.created_at)}</td>
                            <td class="table__cell">
                                {alert.alert_category().map(|c| c.label()).unwrap_or("-")}
                            </td>
                            <td class="table__cell">{alert.operation.clone().unwrap_or_else(|| "-".to_string())}</td>
                            <td class="table__cell">
                                {truncate(alert.message.as_deref().unwrap_or_default(), MESSAGE_PREVIEW_CHARS)}
                            </td>
                            <td class="table__cell">
                                {alert.alert_type().map(|t| t.label()).unwrap_or("-")}
                            </td>
                        </tr>
                    </For>
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || list.state.with(|s| s.page))
                total_pages=Signal::derive(move || {
                    let limit = list.state.with(|s| s.limit);
                    list.fetch_state.with(|s| s.page_count(limit))
                })
                total_count=count
                on_page_change=Callback::new(move |page: u32| list.set_page(page))
            />
        </section>
    }
}
