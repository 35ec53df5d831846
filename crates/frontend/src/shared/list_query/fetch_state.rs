use super::error::FetchError;
use contracts::shared::list_query::ListPage;
use std::cell::RefCell;
use std::rc::Rc;

/// Pending/success/error wrapper around one collection slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub fetching: bool,
    pub fetched: bool,
    pub error: Option<FetchError>,
    pub data: Option<ListPage<T>>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            fetching: false,
            fetched: false,
            error: None,
            data: None,
        }
    }
}

/// What a renderer should show. Loading, failure and an empty result are
/// distinct states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Failed,
    Empty,
    Loaded,
}

impl<T> FetchState<T> {
    /// Request dispatched. Previous rows stay visible until the response lands.
    pub fn started(self) -> Self {
        Self {
            fetching: true,
            error: None,
            ..self
        }
    }

    pub fn succeeded(self, page: ListPage<T>) -> Self {
        Self {
            fetching: false,
            fetched: true,
            error: None,
            data: Some(page),
        }
    }

    pub fn failed(self, error: FetchError) -> Self {
        Self {
            fetching: false,
            fetched: true,
            error: Some(error),
            data: None,
        }
    }

    pub fn status(&self) -> FetchStatus {
        if self.fetching {
            FetchStatus::Loading
        } else if !self.fetched {
            FetchStatus::Idle
        } else if self.error.is_some() {
            FetchStatus::Failed
        } else if self.data.as_ref().map_or(true, ListPage::is_empty) {
            FetchStatus::Empty
        } else {
            FetchStatus::Loaded
        }
    }

    pub fn rows(&self) -> &[T] {
        self.data.as_ref().map_or(&[], |d| d.results.as_slice())
    }

    /// Total matching records reported by the endpoint
    pub fn count(&self) -> u64 {
        self.data.as_ref().map_or(0, |d| d.count)
    }

    pub fn page_count(&self, limit: u32) -> u32 {
        crate::shared::list_utils::page_count(self.count(), limit)
    }
}

/// Externally owned store for one collection's `FetchState`.
///
/// The controller only reads it to build the next state and writes the
/// result back; ownership stays with the host (a signal, a test cell, ...).
pub trait FetchSlot<T> {
    fn snapshot(&self) -> FetchState<T>;
    fn store(&self, next: FetchState<T>);
}

pub type SharedFetchState<T> = Rc<RefCell<FetchState<T>>>;

impl<T: Clone> FetchSlot<T> for RefCell<FetchState<T>> {
    fn snapshot(&self) -> FetchState<T> {
        self.borrow().clone()
    }

    fn store(&self, next: FetchState<T>) {
        *self.borrow_mut() = next;
    }
}
