use super::error::FetchError;
use contracts::shared::list_query::{ListPage, QueryParams};
use futures::future::LocalBoxFuture;
use futures::task::SpawnError;

/// Raw page as returned by a collection endpoint, before row decoding.
pub type FetchFuture = LocalBoxFuture<'static, Result<ListPage<serde_json::Value>, FetchError>>;

/// Fetches one page of a paginated collection.
///
/// Every call is independent; the controller decides which response to keep.
pub trait CollectionFetcher {
    fn fetch_collection(&self, endpoint: &str, query: &QueryParams) -> FetchFuture;
}

/// Runs fetch tasks on the host's executor.
pub trait Spawn {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) -> Result<(), SpawnError>;
}

impl Spawn for futures::executor::LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) -> Result<(), SpawnError> {
        use futures::task::LocalSpawnExt;
        self.spawn_local(task)
    }
}
