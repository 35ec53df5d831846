/// Helpers shared by the collection tables (sort indicators, page math)
use crate::shared::list_query::state::ALL_SENTINEL;
use crate::shared::list_query::SortState;
use contracts::shared::list_query::SortDirection;

/// Number of pages needed for `count` records, at least 1.
pub fn page_count(count: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    let pages = count.div_ceil(limit).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Arrow shown next to a sortable header
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if !sort.is_sorted_by(field) {
        return " ⇅";
    }
    match sort.direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.is_sorted_by(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Filter dropdown options with the `all` entry first
pub fn options_with_all<I>(all_label: &str, options: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    std::iter::once((ALL_SENTINEL.to_string(), all_label.to_string()))
        .chain(options)
        .collect()
}

/// Cuts `text` to at most `max_chars` characters, appending an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(42, 5), 9);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn test_sort_indicator() {
        let mut sort = SortState::default();
        assert_eq!(get_sort_indicator(&sort, "name"), " ⇅");
        sort.toggle("name");
        assert_eq!(get_sort_indicator(&sort, "name"), " ▲");
        assert_eq!(get_sort_class(&sort, "name"), "table__sort-indicator table__sort-indicator--active");
        sort.toggle("name");
        assert_eq!(get_sort_indicator(&sort, "name"), " ▼");
        assert_eq!(get_sort_class(&sort, "code"), "table__sort-indicator");
    }

    #[test]
    fn test_options_with_all() {
        let options = options_with_all("All", [("1".to_string(), "SIMS".to_string())]);
        assert_eq!(options[0], ("all".to_string(), "All".to_string()));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Flood response in the delta", 11), "Flood respo...");
        assert_eq!(truncate("Ñandú ñu", 5), "Ñandú...");
    }
}
