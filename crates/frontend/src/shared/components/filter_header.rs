//! Table header cells carrying a filter control

use chrono::NaiveDate;
use leptos::prelude::*;

/// Header cell with a `<select>`; the first option is usually `all`.
#[component]
pub fn FilterHeaderCell(
    #[prop(into)]
    label: String,

    /// `(value, label)` pairs
    options: Vec<(String, String)>,

    #[prop(into)]
    value: Signal<String>,

    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--filter">
            <span class="table__filter-label">{label}</span>
            <select
                class="table__filter-select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.with(|v| *v == selected_value)
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </th>
    }
}

fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Header cell with a start/end date pair. Empty inputs mean "open".
#[component]
pub fn DateRangeHeaderCell(
    #[prop(into)]
    label: String,

    #[prop(into)]
    start: Signal<Option<NaiveDate>>,

    #[prop(into)]
    end: Signal<Option<NaiveDate>>,

    on_change: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,
) -> impl IntoView {
    let to_input = |d: Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();

    view! {
        <th class="table__header-cell table__header-cell--filter">
            <span class="table__filter-label">{label}</span>
            <input
                type="date"
                class="table__filter-date"
                prop:value=move || to_input(start.get())
                on:change=move |ev| {
                    on_change.run((parse_date_input(&event_target_value(&ev)), end.get_untracked()))
                }
            />
            <input
                type="date"
                class="table__filter-date"
                prop:value=move || to_input(end.get())
                on:change=move |ev| {
                    on_change.run((start.get_untracked(), parse_date_input(&event_target_value(&ev))))
                }
            />
        </th>
    }
}
