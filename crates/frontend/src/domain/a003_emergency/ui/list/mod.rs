pub mod state;

use self::state::{dtype_options, list_config};
use crate::shared::aggregate::{group_by_disaster_type, latest_emergency};
use crate::shared::components::table::{format_count, SortableHeaderCell};
use crate::shared::components::{FilterHeaderCell, ListStatus, PaginationControls};
use crate::shared::date_utils::{iso_date, DateWindow};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, ListProps};
use contracts::domain::a003_emergency::aggregate::Emergency;
use leptos::prelude::*;

/// Disaster types listed in the summary strip
const TOP_DISASTER_TYPES: usize = 3;

impl CsvExportable for Emergency {
    fn headers() -> Vec<&'static str> {
        vec!["Start Date", "Name", "Disaster Type", "GLIDE", "People Affected", "Countries"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.disaster_start_date.as_ref().map(iso_date).unwrap_or_default(),
            self.name.clone(),
            self.dtype.as_ref().map(|d| d.name.clone()).unwrap_or_default(),
            self.glide.clone().unwrap_or_default(),
            self.num_affected.map(|v| format!("{:.0}", v)).unwrap_or_default(),
            self.country_names(),
        ]
    }
}

#[component]
pub fn EmergencyList(
    #[prop(into)]
    scope: Signal<ListProps>,
) -> impl IntoView {
    let list = use_list_query::<Emergency>(list_config(), scope);

    let title = move || {
        scope
            .with(|p| p.title.clone())
            .unwrap_or_else(|| "Emergencies".to_string())
    };
    let count = Signal::derive(move || list.fetch_state.with(|s| s.count()));
    let status = Signal::derive(move || list.fetch_state.with(|s| s.status()));
    let error = Signal::derive(move || {
        list.fetch_state
            .with(|s| s.error.as_ref().map(|e| format!("Emergencies not available: {}", e)))
    });

    // "Flood (4), Cyclone (2), Other (1)"
    let type_summary = move || {
        list.fetch_state.with(|s| {
            group_by_disaster_type(s.rows())
                .into_iter()
                .take(TOP_DISASTER_TYPES)
                .map(|(name, items)| format!("{} ({})", name, items.len()))
                .collect::<Vec<_>>()
                .join(", ")
        })
    };
    let latest = move || {
        list.fetch_state
            .with(|s| latest_emergency(s.rows()).map(|e| e.name.clone()))
            .unwrap_or_else(|| "-".to_string())
    };

    let sort = Signal::derive(move || list.state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |field: String| list.set_sort(&field));
    let filter_value =
        move |key: &'static str| Signal::derive(move || list.state.with(|s| s.filter(key).as_select_value()));
    let on_filter =
        move |key: &'static str| Callback::new(move |value: String| list.set_filter(key, value));

    let export = move |_| {
        let rows = list.fetch_state.with_untracked(|s| s.rows().to_vec());
        if let Err(e) = export_to_csv(&rows, "emergencies.csv") {
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

            <div class="stats">
                <div class="stats__item">
                    <span class="stats__label">"Most common on this page"</span>
                    <span class="stats__value">{type_summary}</span>
                </div>
                <div class="stats__item">
                    <span class="stats__label">"Latest"</span>
                    <span class="stats__value">{latest}</span>
                </div>
            </div>

            <ListStatus
                status=status
                error=error
                empty_message="No emergencies match the selected filters."
                on_retry=Callback::new(move |_| list.refresh())
            />

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <FilterHeaderCell
                            label="Start Date"
                            options=DateWindow::options()
                            value=filter_value("date")
                            on_change=on_filter("date")
                        />
                        <SortableHeaderCell label="Name" sort_field="name" sort=sort on_sort=on_sort />
                        <FilterHeaderCell
                            label="Disaster Type"
                            options=dtype_options()
                            value=filter_value("dtype")
                            on_change=on_filter("dtype")
                        />
                        <th class="table__header-cell">"GLIDE"</th>
                        <SortableHeaderCell
                            label="People Affected"
                            sort_field="num_affected"
                            sort=sort
                            on_sort=on_sort
                            align="right"
                        />
                        <th class="table__header-cell">"Countries"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.fetch_state.with(|s| s.rows().to_vec())
                        key=|emergency| emergency.id
                        let:emergency
                    >
                        <tr>
                            <td class="table__cell">
                                {emergency.disaster_start_date.as_ref().map(iso_date).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td class="table__cell">{emergency.name.clone()}</td>
                            <td class="table__cell">
                                {emergency.dtype.as_ref().map(|d| d.name.clone()).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td class="table__cell">{emergency.glide.clone().unwrap_or_else(|| "-".to_string())}</td>
                            <td class="table__cell table__cell--right">{format_count(emergency.num_affected)}</td>
                            <td class="table__cell">{emergency.country_names()}</td>
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
