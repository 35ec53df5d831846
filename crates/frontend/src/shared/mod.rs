pub mod aggregate;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_query;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
