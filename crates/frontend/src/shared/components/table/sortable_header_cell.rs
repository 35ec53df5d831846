//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Start date"
//!     sort_field="start_date"
//!     sort=Signal::derive(move || list.state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field: String| list.set_sort(&field))
//! />
//! ```

use crate::shared::list_query::SortState;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;

/// Header cell that requests a sort on click and shows the current direction.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// `ordering` field sent to the API
    sort_field: &'static str,

    #[prop(into)]
    sort: Signal<SortState>,

    on_sort: Callback<String>,

    /// "left" or "right"
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let class = if align == "right" {
        "table__header-cell table__header-cell--right table__sortable-header"
    } else {
        "table__header-cell table__sortable-header"
    };

    view! {
        <th class=class style="cursor: pointer;" on:click=move |_| on_sort.run(sort_field.to_string())>
            {label}
            <span class=move || sort.with(|s| get_sort_class(s, sort_field))>
                {move || sort.with(|s| get_sort_indicator(s, sort_field))}
            </span>
        </th>
    }
}
