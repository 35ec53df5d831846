pub mod state;

use self::state::{list_config, programme_type_options, sector_options, status_options};
use crate::shared::aggregate::sum_by;
use crate::shared::components::table::{format_amount, format_count, format_short, SortableHeaderCell};
use crate::shared::components::{FilterHeaderCell, ListStatus, PaginationControls};
use crate::shared::date_utils::iso_date;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, ListProps};
use contracts::domain::a005_three_w_project::aggregate::Project;
use leptos::prelude::*;

impl CsvExportable for Project {
    fn headers() -> Vec<&'static str> {
        vec![
            "Project",
            "Reporting NS",
            "Programme Type",
            "Sector",
            "Status",
            "Start Date",
            "End Date",
            "People Targeted",
            "People Reached",
            "Budget",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.reporting_ns_name.clone().unwrap_or_default(),
            self.programme_type_label().unwrap_or_default(),
            self.sector_label().unwrap_or_default(),
            self.project_status().map(|s| s.label()).unwrap_or_default().to_string(),
            self.start_date.as_ref().map(iso_date).unwrap_or_default(),
            self.end_date.as_ref().map(iso_date).unwrap_or_default(),
            self.target_total.map(|v| format!("{:.0}", v)).unwrap_or_default(),
            self.reached_total.map(|v| format!("{:.0}", v)).unwrap_or_default(),
            self.budget_amount.map(|v| format!("{:.0}", v)).unwrap_or_default(),
        ]
    }
}

#[component]
pub fn ProjectList(
    #[prop(into)]
    scope: Signal<ListProps>,
) -> impl IntoView {
    let list = use_list_query::<Project>(list_config(), scope);

    let title = move || {
        scope
            .with(|p| p.title.clone())
            .unwrap_or_else(|| "Projects".to_string())
    };
    let count = Signal::derive(move || list.fetch_state.with(|s| s.count()));
    let status = Signal::derive(move || list.fetch_state.with(|s| s.status()));
    let error = Signal::derive(move || {
        list.fetch_state
            .with(|s| s.error.as_ref().map(|e| format!("Projects not available: {}", e)))
    });
    let ongoing = move || {
        list.fetch_state
            .with(|s| s.rows().iter().filter(|p| p.is_ongoing()).count())
    };
    let budget = move || list.fetch_state.with(|s| sum_by(s.rows(), |p| p.budget_amount));
    let reached = move || list.fetch_state.with(|s| sum_by(s.rows(), |p| p.reached_total));

    let sort = Signal::derive(move || list.state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |field: String| list.set_sort(&field));
    let filter_value =
        move |key: &'static str| Signal::derive(move || list.state.with(|s| s.filter(key).as_select_value()));
    let on_filter =
        move |key: &'static str| Callback::new(move |value: String| list.set_filter(key, value));

    let export = move |_| {
        let rows = list.fetch_state.with_untracked(|s| s.rows().to_vec());
        if let Err(e) = export_to_csv(&rows, "projects.csv") {
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
                    <span class="stats__value">{ongoing}</span>
                    <span class="stats__label">"Ongoing on this page"</span>
                </div>
                <div class="stats__item">
                    <span class="stats__value">{move || format_short(budget())}</span>
                    <span class="stats__label">"Budget (CHF)"</span>
                </div>
                <div class="stats__item">
                    <span class="stats__value">{move || format_short(reached())}</span>
                    <span class="stats__label">"People reached"</span>
                </div>
            </div>

            <ListStatus
                status=status
                error=error
                empty_message="No projects found for this selection."
                on_retry=Callback::new(move |_| list.refresh())
            />

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <SortableHeaderCell label="Project" sort_field="name" sort=sort on_sort=on_sort />
                        <th class="table__header-cell">"Reporting NS"</th>
                        <FilterHeaderCell
                            label="Programme Type"
                            options=programme_type_options()
                            value=filter_value("programme_type")
                            on_change=on_filter("programme_type")
                        />
                        <FilterHeaderCell
                            label="Sector"
                            options=sector_options()
                            value=filter_value("primary_sector")
                            on_change=on_filter("primary_sector")
                        />
                        <FilterHeaderCell
                            label="Status"
                            options=status_options()
                            value=filter_value("status")
                            on_change=on_filter("status")
                        />
                        <SortableHeaderCell label="Start Date" sort_field="start_date" sort=sort on_sort=on_sort />
                        <th class="table__header-cell table__header-cell--right">"Targeted"</th>
                        <th class="table__header-cell table__header-cell--right">"Reached"</th>
                        <SortableHeaderCell
                            label="Budget"
                            sort_field="budget_amount"
                            sort=sort
                            on_sort=on_sort
                            align="right"
                        />
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.fetch_state.with(|s| s.rows().to_vec())
                        key=|project| project.id
                        let:project
                    >
                        <tr>
                            <td class="table__cell">{project.name.clone()}</td>
                            <td class="table__cell">{project.reporting_ns_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                            <td class="table__cell">{project.programme_type_label().unwrap_or_else(|| "-".to_string())}</td>
                            <td class="table__cell">{project.sector_label().unwrap_or_else(|| "-".to_string())}</td>
                            <td class="table__cell">{project.project_status().map(|s| s.label()).unwrap_or("-")}</td>
                            <td class="table__cell">
                                {project.start_date.as_ref().map(iso_date).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td class="table__cell table__cell--right">{format_count(project.target_total)}</td>
                            <td class="table__cell table__cell--right">{format_count(project.reached_total)}</td>
                            <td class="table__cell table__cell--right">{format_amount(project.budget_amount)}</td>
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
