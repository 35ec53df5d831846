//! Page category constants.
//!
//! Every routed page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"d101_region--dashboard"`) and a `data-page-category` attribute.
//! The `--` separator keeps the entity searchable from the DOM inspector.

/// A single collection table as the whole page
pub const PAGE_CAT_LIST: &str = "list";

/// Several scoped tables side by side
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
