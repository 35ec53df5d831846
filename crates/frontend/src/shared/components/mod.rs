pub mod filter_header;
pub mod list_status;
pub mod pagination_controls;
pub mod table;

pub use filter_header::{DateRangeHeaderCell, FilterHeaderCell};
pub use list_status::ListStatus;
pub use pagination_controls::PaginationControls;
