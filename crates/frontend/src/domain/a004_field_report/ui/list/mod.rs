pub mod state;

use self::state::{dtype_options, list_config};
use crate::shared::components::table::{format_count, SortableHeaderCell};
use crate::shared::components::{FilterHeaderCell, ListStatus, PaginationControls};
use crate::shared::date_utils::{iso_date, DateWindow};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, ListProps};
use contracts::domain::a004_field_report::aggregate::FieldReport;
use leptos::prelude::*;

fn country_names(report: &FieldReport) -> String {
    report
        .countries
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl CsvExportable for FieldReport {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Name", "Emergency", "Disaster Type", "People Affected", "Countries"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            iso_date(&self.created_at),
            self.summary.clone(),
            self.event.as_ref().and_then(|e| e.name.clone()).unwrap_or_default(),
            self.dtype.as_ref().map(|d| d.name.clone()).unwrap_or_default(),
            self.num_affected.map(|v| format!("{:.0}", v)).unwrap_or_default(),
            country_names(self),
        ]
    }
}

#[component]
pub fn FieldReportList(
    #[prop(into)]
    scope: Signal<ListProps>,
) -> impl IntoView {
    let list = use_list_query::<FieldReport>(list_config(), scope);

    let title = move || {
        scope
            .with(|p| p.title.clone())
            .unwrap_or_else(|| "Field Reports".to_string())
    };
    let count = Signal::derive(move || list.fetch_state.with(|s| s.count()));
    let status = Signal::derive(move || list.fetch_state.with(|s| s.status()));
    let error = Signal::derive(move || {
        list.fetch_state
            .with(|s| s.error.as_ref().map(|e| format!("Field reports not available: {}", e)))
    });

    let sort = Signal::derive(move || list.state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |field: String| list.set_sort(&field));
    let filter_value =
        move |key: &'static str| Signal::derive(move || list.state.with(|s| s.filter(key).as_select_value()));
    let on_filter =
        move |key: &'static str| Callback::new(move |value: String| list.set_filter(key, value));

    let export = move |_| {
        let rows = list.fetch_state.with_untracked(|s| s.rows().to_vec());
        if let Err(e) = export_to_csv(&rows, "field-reports.csv") {
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
                empty_message="No field reports match the selected filters."
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
                        <SortableHeaderCell label="Name" sort_field="summary" sort=sort on_sort=on_sort />
                        <th class="table__header-cell">"Emergency"</th>
                        <FilterHeaderCell
                            label="Disaster Type"
                            options=dtype_options()
                            value=filter_value("dtype")
                            on_change=on_filter("dtype")
                        />
                        <th class="table__header-cell table__header-cell--right">"People Affected"</th>
                        <th class="table__header-cell">"Countries"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.fetch_state.with(|s| s.rows().to_vec())
                        key=|report| report.id
                        let:report
                    >
                        <tr>
                            <td class="table__cell">{iso_date(&report.created_at)}</td>
                            <td class="table__cell">{report.summary.clone()}</td>
                            <td class="table__cell">
                                {report.event.as_ref().and_then(|e| e.name.clone()).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td class="table__cell">
                                {report.dtype.as_ref().map(|d| d.name.clone()).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td class="table__cell table__cell--right">{format_count(report.num_affected)}</td>
                            <td class="table__cell">{country_names(&report)}</td>
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
