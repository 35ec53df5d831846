//! Leptos bindings: signal-backed `FetchSlot`, `spawn_local` spawner and
//! the `use_list_query` hook used by every list view.

use super::controller::ListQueryController;
use super::config::ListQueryConfig;
use super::error::report_rejected_action;
use super::fetch_state::{FetchSlot, FetchState};
use super::fetcher::Spawn;
use super::props::ListProps;
use super::state::{FilterValue, QueryState};
use crate::shared::api_utils::{ApiConfig, HttpCollectionFetcher};
use futures::future::LocalBoxFuture;
use futures::task::SpawnError;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::rc::Rc;

impl<T> FetchSlot<T> for RwSignal<FetchState<T>>
where
    T: Clone + Send + Sync + 'static,
{
    fn snapshot(&self) -> FetchState<T> {
        self.try_get_untracked().unwrap_or_default()
    }

    fn store(&self, next: FetchState<T>) {
        let _ = self.try_set(next);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LeptosSpawner;

impl Spawn for LeptosSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) -> Result<(), SpawnError> {
        leptos::task::spawn_local(task);
        Ok(())
    }
}

/// Reactive view of one list controller.
///
/// `state` mirrors the controller's `QueryState` after every action,
/// `fetch_state` is the slot the controller writes into.
pub struct ListQueryHandle<T: 'static> {
    controller: StoredValue<ListQueryController<T>, LocalStorage>,
    pub state: RwSignal<QueryState>,
    pub fetch_state: RwSignal<FetchState<T>>,
}

impl<T: 'static> Clone for ListQueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListQueryHandle<T> {}

impl<T> ListQueryHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    fn sync(&self) {
        if let Some(state) = self.controller.try_with_value(|c| c.state()) {
            self.state.set(state);
        }
    }

    pub fn set_page(&self, page: u32) {
        let result = self.controller.try_with_value(|c| c.set_page(page));
        if let Some(Err(e)) = result {
            report_rejected_action(&e);
        }
        self.sync();
    }

    pub fn set_filter(&self, key: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        let result = self.controller.try_with_value(|c| c.set_filter(key, value));
        if let Some(Err(e)) = result {
            report_rejected_action(&e);
        }
        self.sync();
    }

    pub fn set_sort(&self, field: &str) {
        self.controller.try_with_value(|c| c.set_sort(field));
        self.sync();
    }

    /// Re-issues the current query.
    pub fn refresh(&self) {
        self.controller.try_with_value(|c| c.request_results());
    }

    pub fn endpoint(&self) -> &'static str {
        self.controller
            .try_with_value(|c| c.endpoint())
            .unwrap_or_default()
    }

    fn apply_props(&self, props: ListProps) {
        if self.controller.try_with_value(|c| c.set_props(props)) == Some(true) {
            self.sync();
        }
    }
}

/// Creates a controller for the current component and issues the first fetch.
///
/// Changes of `props` are forwarded to the controller, which refetches only
/// when a declared dependency changed. The controller is disposed on cleanup.
pub fn use_list_query<T>(config: ListQueryConfig, props: Signal<ListProps>) -> ListQueryHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_window);
    let fetch_state = RwSignal::new(FetchState::<T>::default());

    let controller = ListQueryController::new(
        config,
        props.get_untracked(),
        Rc::new(HttpCollectionFetcher::new(api)),
        Rc::new(fetch_state),
        Rc::new(LeptosSpawner),
    );
    let state = RwSignal::new(controller.state());
    controller.request_results();

    let handle = ListQueryHandle {
        controller: StoredValue::new_local(controller),
        state,
        fetch_state,
    };

    Effect::new(move |_| {
        let next = props.get();
        handle.apply_props(next);
    });

    on_cleanup(move || {
        handle.controller.try_with_value(|c| c.dispose());
    });

    handle
}
