pub mod state;

use self::state::{atype_options, dtype_options, list_config, status_options};
use crate::shared::aggregate::{aggregate_appeal_stats, funded_percent};
use crate::shared::components::table::{format_amount, format_percent, format_short, SortableHeaderCell};
use crate::shared::components::{DateRangeHeaderCell, FilterHeaderCell, ListStatus, PaginationControls};
use crate::shared::date_utils::iso_date;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, FilterValue, ListProps};
use chrono::NaiveDate;
use contracts::domain::a002_appeal::aggregate::Appeal;
use leptos::prelude::*;

impl CsvExportable for Appeal {
    fn headers() -> Vec<&'static str> {
        vec![
            "Start Date",
            "Type",
            "Code",
            "Operation",
            "Disaster Type",
            "Requested Amount",
            "Funding",
            "Country",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.start_date.as_ref().map(iso_date).unwrap_or_default(),
            self.appeal_type().map(|t| t.label()).unwrap_or_default().to_string(),
            self.code.clone().unwrap_or_default(),
            self.name.clone(),
            self.dtype.as_ref().map(|d| d.name.clone()).unwrap_or_default(),
            self.amount_requested.map(|v| format!("{:.0}", v)).unwrap_or_default(),
            self.amount_funded.map(|v| format!("{:.0}", v)).unwrap_or_default(),
            self.country.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
        ]
    }
}

#[component]
pub fn AppealList(
    #[prop(into)]
    scope: Signal<ListProps>,
) -> impl IntoView {
    let list = use_list_query::<Appeal>(list_config(), scope);

    let title = move || {
        scope
            .with(|p| p.title.clone())
            .unwrap_or_else(|| "Appeals".to_string())
    };
    let count = Signal::derive(move || list.fetch_state.with(|s| s.count()));
    let status = Signal::derive(move || list.fetch_state.with(|s| s.status()));
    let error = Signal::derive(move || {
        list.fetch_state
            .with(|s| s.error.as_ref().map(|e| format!("Appeals not available: {}", e)))
    });
    let stats = Signal::derive(move || list.fetch_state.with(|s| aggregate_appeal_stats(s.rows())));

    let sort = Signal::derive(move || list.state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |field: String| list.set_sort(&field));
    let filter_value =
        move |key: &'static str| Signal::derive(move || list.state.with(|s| s.filter(key).as_select_value()));
    let on_filter =
        move |key: &'static str| Callback::new(move |value: String| list.set_filter(key, value));
    let on_date_range = Callback::new(move |(start, end): (Option<NaiveDate>, Option<NaiveDate>)| {
        list.set_filter("date", FilterValue::range(start, end))
    });

    let export = move |_| {
        let rows = list.fetch_state.with_untracked(|s| s.rows().to_vec());
        if let Err(e) = export_to_csv(&rows, "appeals.csv") {
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
                    <span class="stats__value">{move || format_short(stats.get().num_beneficiaries as f64)}</span>
                    <span class="stats__label">"Targeted population"</span>
                </div>
                <div class="stats__item">
                    <span class="stats__value">{move || format_short(stats.get().amount_requested)}</span>
                    <span class="stats__label">"Requested (CHF)"</span>
                </div>
                <div class="stats__item">
                    <span class="stats__value">{move || format_percent(stats.get().funded_percent())}</span>
                    <span class="stats__label">"Funded"</span>
                </div>
            </div>

            <ListStatus
                status=status
                error=error
                on_retry=Callback::new(move |_| list.refresh())
            />

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <DateRangeHeaderCell
                            label="Start Date"
                            start=Signal::derive(move || list.state.with(|s| s.filter("date").range_start()))
                            end=Signal::derive(move || list.state.with(|s| s.filter("date").range_end()))
                            on_change=on_date_range
                        />
                        <FilterHeaderCell
                            label="Type"
                            options=atype_options()
                            value=filter_value("atype")
                            on_change=on_filter("atype")
                        />
                        <th class="table__header-cell">"Code"</th>
                        <SortableHeaderCell label="Operation" sort_field="name" sort=sort on_sort=on_sort />
                        <FilterHeaderCell
                            label="Disaster Type"
                            options=dtype_options()
                            value=filter_value("dtype")
                            on_change=on_filter("dtype")
                        />
                        <SortableHeaderCell
                            label="Requested Amount"
                            sort_field="amount_requested"
                            sort=sort
                            on_sort=on_sort
                            align="right"
                        />
                        <SortableHeaderCell
                            label="Funding"
                            sort_field="amount_funded"
                            sort=sort
                            on_sort=on_sort
                            align="right"
                        />
                        <FilterHeaderCell
                            label="Status"
                            options=status_options()
                            value=filter_value("status")
                            on_change=on_filter("status")
                        />
                        <th class="table__header-cell">"Country"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.fetch_state.with(|s| s.rows().to_vec())
                        key=|appeal| appeal.id
                        let:appeal
                    >
                        <tr>
                            <td class="table__cell">
                                {appeal.start_date.as_ref().map(iso_date).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td class="table__cell">{appeal.appeal_type().map(|t| t.label()).unwrap_or("-")}</td>
                            <td class="table__cell">{appeal.code.clone().unwrap_or_default()}</td>
                            <td class="table__cell">{appeal.name.clone()}</td>
                            <td class="table__cell">
                                {appeal.dtype.as_ref().map(|d| d.name.clone()).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td class="table__cell table__cell--right">{format_amount(appeal.amount_requested)}</td>
                            <td class="table__cell table__cell--right">
                                <span class="progress__value">{format_percent(funded_percent(&appeal))}</span>
                                <progress max="100" value=format!("{:.0}", funded_percent(&appeal).min(100.0))></progress>
                            </td>
                            <td class="table__cell">{appeal.appeal_status().map(|s| s.label()).unwrap_or("-")}</td>
                            <td class="table__cell">
                                {appeal.country.as_ref().map(|c| c.name.clone()).unwrap_or_else(|| "-".to_string())}
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
