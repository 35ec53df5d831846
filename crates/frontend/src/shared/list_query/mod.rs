//! List-query controller shared by every collection table.
//!
//! One [`ListQueryController`] per rendered table owns page/sort/filter
//! state, derives the query for its collection endpoint and issues fetches
//! through an injected [`CollectionFetcher`]. Results land in an externally
//! owned [`FetchState`] slot; responses from superseded requests are dropped.

pub mod config;
pub mod controller;
pub mod error;
pub mod fetch_state;
pub mod fetcher;
pub mod props;
pub mod query;
pub mod reactive;
pub mod state;

pub use config::{FilterParam, FilterSpec, ListDependency, ListQueryConfig, PaginationStyle};
pub use controller::ListQueryController;
pub use error::{FetchError, ListQueryError};
pub use fetch_state::{FetchSlot, FetchState, FetchStatus, SharedFetchState};
pub use fetcher::{CollectionFetcher, FetchFuture, Spawn};
pub use props::ListProps;
pub use query::{derive_query, request_query};
pub use reactive::{use_list_query, LeptosSpawner, ListQueryHandle};
pub use state::{FilterValue, QueryState, SortOrder, SortState};
