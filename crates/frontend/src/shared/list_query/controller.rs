use super::config::ListQueryConfig;
use super::error::{FetchError, ListQueryError};
use super::fetch_state::{FetchSlot, FetchState};
use super::fetcher::{CollectionFetcher, Spawn};
use super::props::ListProps;
use super::query;
use super::state::{FilterValue, QueryState};
use chrono::{DateTime, Utc};
use contracts::shared::list_query::{ListPage, QueryParams};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type Clock = fn() -> DateTime<Utc>;

struct Inner<T> {
    config: ListQueryConfig,
    props: ListProps,
    state: QueryState,
    /// Sequence number of the most recently dispatched request
    latest_request: u64,
    disposed: bool,
    fetcher: Rc<dyn CollectionFetcher>,
    slot: Rc<dyn FetchSlot<T>>,
    spawner: Rc<dyn Spawn>,
    clock: Clock,
}

/// Page/sort/filter state of one collection table plus its fetch loop.
///
/// Cloning yields another handle to the same controller. Fetch tasks only
/// hold a weak reference, so dropping every handle (or calling
/// [`dispose`](Self::dispose)) abandons in-flight requests.
pub struct ListQueryController<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for ListQueryController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> ListQueryController<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    pub fn new(
        config: ListQueryConfig,
        props: ListProps,
        fetcher: Rc<dyn CollectionFetcher>,
        slot: Rc<dyn FetchSlot<T>>,
        spawner: Rc<dyn Spawn>,
    ) -> Self {
        let state = QueryState::new(&config, &props);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                config,
                props,
                state,
                latest_request: 0,
                disposed: false,
                fetcher,
                slot,
                spawner,
                clock: Utc::now,
            })),
        }
    }

    /// Replaces the time source used for date-window filters.
    pub fn with_clock(self, clock: Clock) -> Self {
        self.inner.borrow_mut().clock = clock;
        self
    }

    pub fn state(&self) -> QueryState {
        self.inner.borrow().state.clone()
    }

    pub fn props(&self) -> ListProps {
        self.inner.borrow().props.clone()
    }

    pub fn endpoint(&self) -> &'static str {
        self.inner.borrow().config.endpoint
    }

    pub fn fetch_state(&self) -> FetchState<T> {
        let slot = Rc::clone(&self.inner.borrow().slot);
        slot.snapshot()
    }

    pub fn page_count(&self) -> u32 {
        let limit = self.inner.borrow().state.limit;
        self.fetch_state().page_count(limit)
    }

    pub fn derive_query(&self) -> QueryParams {
        let inner = self.inner.borrow();
        query::derive_query(&inner.config, &inner.props, &inner.state, (inner.clock)())
    }

    pub fn request_query(&self) -> QueryParams {
        let inner = self.inner.borrow();
        query::request_query(&inner.config, &inner.props, &inner.state, (inner.clock)())
    }

    pub fn latest_request(&self) -> u64 {
        self.inner.borrow().latest_request
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    /// Moves to `page` and fetches it. Pages past the end are not clamped.
    pub fn set_page(&self, page: u32) -> Result<(), ListQueryError> {
        if self.rejected_after_dispose("set_page") {
            return Ok(());
        }
        self.inner.borrow_mut().state.set_page(page)?;
        self.request_results();
        Ok(())
    }

    pub fn set_filter(
        &self,
        key: &str,
        value: impl Into<FilterValue>,
    ) -> Result<(), ListQueryError> {
        {
            let inner = &mut *self.inner.borrow_mut();
            if inner.config.filter_spec(key).is_none() {
                return Err(ListQueryError::InvalidFilterKey {
                    endpoint: inner.config.endpoint,
                    key: key.to_string(),
                });
            }
            if inner.disposed {
                log::warn!("set_filter on disposed list controller for {}", inner.config.endpoint);
                return Ok(());
            }
            inner.state.set_filter(&inner.config, key, value.into())?;
        }
        self.request_results();
        Ok(())
    }

    /// Same field flips the direction, another field sorts ascending.
    pub fn set_sort(&self, field: &str) {
        if self.rejected_after_dispose("set_sort") {
            return;
        }
        self.inner.borrow_mut().state.set_sort(field);
        self.request_results();
    }

    /// Stores new external props. Refetches from page 1 when a declared
    /// dependency changed; returns whether it did.
    pub fn set_props(&self, props: ListProps) -> bool {
        if self.rejected_after_dispose("set_props") {
            return false;
        }
        let changed = {
            let inner = &mut *self.inner.borrow_mut();
            let changed = inner.config.props_changed(&inner.props, &props);
            inner.props = props;
            if changed {
                inner.state.limit = inner.config.effective_limit(&inner.props);
                inner.state.page = 1;
            }
            changed
        };
        if changed {
            self.request_results();
        }
        changed
    }

    /// Dispatches one fetch for the current state.
    pub fn request_results(&self) {
        let (seq, endpoint, params, fetcher, slot, spawner) = {
            let inner = &mut *self.inner.borrow_mut();
            if inner.disposed {
                log::warn!("request on disposed list controller for {}", inner.config.endpoint);
                return;
            }
            inner.latest_request += 1;
            let params = query::request_query(
                &inner.config,
                &inner.props,
                &inner.state,
                (inner.clock)(),
            );
            (
                inner.latest_request,
                inner.config.endpoint,
                params,
                Rc::clone(&inner.fetcher),
                Rc::clone(&inner.slot),
                Rc::clone(&inner.spawner),
            )
        };

        log::debug!("Fetching {} #{} {:?}", endpoint, seq, params);
        slot.store(slot.snapshot().started());

        let request = fetcher.fetch_collection(endpoint, &params);
        let weak = Rc::downgrade(&self.inner);
        let spawned = spawner.spawn(Box::pin(async move {
            let result = request.await;
            apply_outcome(&weak, seq, result);
        }));
        if let Err(e) = spawned {
            log::error!("Failed to spawn fetch #{} for {}: {}", seq, endpoint, e);
            slot.store(slot.snapshot().failed(FetchError::Spawn(e.to_string())));
        }
    }

    /// Abandons in-flight requests; later actions and responses are ignored.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.disposed {
            log::debug!("Disposing list controller for {}", inner.config.endpoint);
            inner.disposed = true;
        }
    }

    fn rejected_after_dispose(&self, action: &str) -> bool {
        let inner = self.inner.borrow();
        if inner.disposed {
            log::warn!("{} on disposed list controller for {}", action, inner.config.endpoint);
        }
        inner.disposed
    }
}

fn apply_outcome<T>(
    weak: &Weak<RefCell<Inner<T>>>,
    seq: u64,
    result: Result<ListPage<serde_json::Value>, FetchError>,
) where
    T: DeserializeOwned,
{
    let Some(inner) = weak.upgrade() else {
        log::debug!("Dropping response #{}: controller is gone", seq);
        return;
    };
    let slot = {
        let inner = inner.borrow();
        if inner.disposed {
            log::debug!("Dropping response #{} for {}: disposed", seq, inner.config.endpoint);
            return;
        }
        if seq != inner.latest_request {
            log::debug!(
                "Dropping stale response #{} for {} (latest #{})",
                seq,
                inner.config.endpoint,
                inner.latest_request
            );
            return;
        }
        Rc::clone(&inner.slot)
    };

    let decoded = result.and_then(|page| {
        page.try_map(serde_json::from_value::<T>)
            .map_err(|e| FetchError::Decode(e.to_string()))
    });
    let current = slot.snapshot();
    let next = match decoded {
        Ok(page) => current.succeeded(page),
        Err(e) => {
            log::debug!("Request #{} failed: {}", seq, e);
            current.failed(e)
        }
    };
    slot.store(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::config::FilterParam;
    use crate::shared::list_query::fetch_state::{FetchStatus, SharedFetchState};
    use crate::shared::list_query::fetcher::FetchFuture;
    use chrono::TimeZone;
    use contracts::shared::list_query::{QueryValue, SortDirection};
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::FutureExt;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    type Outcome = Result<ListPage<serde_json::Value>, FetchError>;

    struct Call {
        endpoint: String,
        query: QueryParams,
        reply: Option<oneshot::Sender<Outcome>>,
    }

    /// Records every request and lets the test resolve them in any order.
    #[derive(Default)]
    struct ScriptedFetcher {
        calls: RefCell<Vec<Call>>,
    }

    impl ScriptedFetcher {
        fn len(&self) -> usize {
            self.calls.borrow().len()
        }

        fn query(&self, idx: usize) -> QueryParams {
            self.calls.borrow()[idx].query.clone()
        }

        fn respond(&self, idx: usize, outcome: Outcome) {
            let reply = self.calls.borrow_mut()[idx].reply.take().unwrap();
            let _ = reply.send(outcome);
        }
    }

    impl CollectionFetcher for ScriptedFetcher {
        fn fetch_collection(&self, endpoint: &str, query: &QueryParams) -> FetchFuture {
            let (tx, rx) = oneshot::channel();
            self.calls.borrow_mut().push(Call {
                endpoint: endpoint.to_string(),
                query: query.clone(),
                reply: Some(tx),
            });
            async move {
                rx.await
                    .unwrap_or_else(|_| Err(FetchError::Network("cancelled".to_string())))
            }
            .boxed_local()
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    fn rows(count: u64, ids: &[i64]) -> Outcome {
        Ok(ListPage::new(count, ids.iter().map(|id| json!({ "id": id })).collect()))
    }

    fn alerts_config() -> ListQueryConfig {
        ListQueryConfig::new("api/v2/surge_alert/", 10)
            .filter("date", FilterParam::DateWindow("created_at__gte"))
            .filter("type", FilterParam::Verbatim)
    }

    struct Harness {
        pool: LocalPool,
        fetcher: Rc<ScriptedFetcher>,
        slot: SharedFetchState<Row>,
        controller: ListQueryController<Row>,
    }

    fn harness(config: ListQueryConfig) -> Harness {
        let pool = LocalPool::new();
        let fetcher = Rc::new(ScriptedFetcher::default());
        let slot: SharedFetchState<Row> = Rc::new(RefCell::new(FetchState::default()));
        let controller = ListQueryController::new(
            config,
            ListProps::default(),
            fetcher.clone(),
            slot.clone(),
            Rc::new(pool.spawner()),
        )
        .with_clock(fixed_now);
        Harness {
            pool,
            fetcher,
            slot,
            controller,
        }
    }

    #[test]
    fn test_request_marks_slot_fetching() {
        let mut h = harness(alerts_config());
        h.controller.request_results();
        assert_eq!(h.fetcher.len(), 1);
        assert_eq!(h.fetcher.calls.borrow()[0].endpoint, "api/v2/surge_alert/");
        assert_eq!(h.controller.fetch_state().status(), FetchStatus::Loading);

        h.fetcher.respond(0, rows(2, &[1, 2]));
        h.pool.run_until_stalled();

        let state = h.controller.fetch_state();
        assert_eq!(state.status(), FetchStatus::Loaded);
        assert_eq!(state.rows(), &[Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(h.controller.page_count(), 1);
    }

    struct ClosedSpawner;

    impl Spawn for ClosedSpawner {
        fn spawn(&self, _task: futures::future::LocalBoxFuture<'static, ()>) -> Result<(), futures::task::SpawnError> {
            Err(futures::task::SpawnError::shutdown())
        }
    }

    #[test]
    fn test_spawn_failure_does_not_leave_slot_loading() {
        let fetcher = Rc::new(ScriptedFetcher::default());
        let slot: SharedFetchState<Row> = Rc::new(RefCell::new(FetchState::default()));
        let controller = ListQueryController::new(
            alerts_config(),
            ListProps::default(),
            fetcher.clone(),
            slot.clone(),
            Rc::new(ClosedSpawner),
        )
        .with_clock(fixed_now);

        controller.request_results();
        let state = controller.fetch_state();
        assert!(!state.fetching);
        assert_eq!(state.status(), FetchStatus::Failed);
        assert!(matches!(state.error, Some(FetchError::Spawn(_))));

        // a later attempt reports the same failure instead of hanging
        controller.set_filter("type", "alert").unwrap();
        assert_eq!(controller.fetch_state().status(), FetchStatus::Failed);
        assert_eq!(fetcher.len(), 2);
    }

    #[test]
    fn test_filter_resets_page_before_fetch_completes() {
        let h = harness(alerts_config());
        h.controller.set_page(3).unwrap();
        h.controller.set_filter("type", "alert").unwrap();
        assert_eq!(h.controller.state().page, 1);
        assert_eq!(h.fetcher.query(1).get("offset"), Some(&QueryValue::Int(0)));

        h.controller.set_page(2).unwrap();
        h.controller.set_sort("created_at");
        assert_eq!(h.controller.state().page, 1);
        assert_eq!(h.fetcher.len(), 4);
    }

    #[test]
    fn test_set_filter_derives_expected_query() {
        let h = harness(alerts_config());
        h.controller.set_filter("type", "alert").unwrap();

        let expected: QueryParams = [
            ("limit", QueryValue::Int(10)),
            ("type", QueryValue::Text("alert".to_string())),
        ]
        .into_iter()
        .collect();
        assert_eq!(h.controller.derive_query(), expected);
        assert_eq!(h.controller.state().page, 1);
    }

    #[test]
    fn test_sort_toggles_then_switches_field() {
        let h = harness(alerts_config());
        h.controller.set_sort("name");
        h.controller.set_sort("name");
        assert_eq!(h.controller.state().sort.direction, SortDirection::Desc);
        assert_eq!(
            h.controller.derive_query().get("ordering"),
            Some(&QueryValue::Text("-name".to_string()))
        );

        h.controller.set_sort("other");
        let sort = h.controller.state().sort;
        assert_eq!(sort.field.as_deref(), Some("other"));
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_out_of_order_responses_keep_latest() {
        let mut h = harness(alerts_config());
        h.controller.set_filter("type", "alert").unwrap();
        h.controller.set_page(2).unwrap();
        assert_eq!(h.controller.latest_request(), 2);

        h.fetcher.respond(1, rows(20, &[11, 12]));
        h.pool.run_until_stalled();
        assert_eq!(h.controller.fetch_state().rows(), &[Row { id: 11 }, Row { id: 12 }]);

        h.fetcher.respond(0, rows(20, &[1, 2]));
        h.pool.run_until_stalled();
        let state = h.controller.fetch_state();
        assert_eq!(state.rows(), &[Row { id: 11 }, Row { id: 12 }]);
        assert!(!state.fetching);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut h = harness(alerts_config());
        h.controller.request_results();
        h.controller.set_page(2).unwrap();

        h.fetcher.respond(0, Err(FetchError::Network("offline".to_string())));
        h.pool.run_until_stalled();
        assert!(h.controller.fetch_state().error.is_none());
        assert!(h.controller.fetch_state().fetching);
    }

    #[test]
    fn test_dispose_with_request_in_flight() {
        let mut h = harness(alerts_config());
        h.controller.request_results();
        let before = h.slot.borrow().clone();

        h.controller.dispose();
        h.fetcher.respond(0, rows(1, &[1]));
        h.pool.run_until_stalled();

        assert_eq!(*h.slot.borrow(), before);
        assert!(h.controller.is_disposed());

        // actions after teardown are ignored
        h.controller.set_page(2).unwrap();
        h.controller.set_sort("name");
        assert_eq!(h.fetcher.len(), 1);
        assert_eq!(h.controller.state().page, 1);
    }

    #[test]
    fn test_dropped_controller_ignores_response() {
        let mut h = harness(alerts_config());
        h.controller.request_results();
        let before = h.slot.borrow().clone();
        drop(h.controller);

        h.fetcher.respond(0, rows(1, &[1]));
        h.pool.run_until_stalled();
        assert_eq!(*h.slot.borrow(), before);
    }

    #[test]
    fn test_failure_is_stored_and_next_action_retries() {
        let mut h = harness(alerts_config());
        h.controller.request_results();
        h.fetcher.respond(
            0,
            Err(FetchError::Http {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
        );
        h.pool.run_until_stalled();

        let state = h.controller.fetch_state();
        assert_eq!(state.status(), FetchStatus::Failed);
        assert_eq!(state.error.as_ref().and_then(FetchError::status), Some(503));
        assert_eq!(h.fetcher.len(), 1, "no automatic retry");

        h.controller.set_page(2).unwrap();
        assert!(h.controller.fetch_state().error.is_none());
        h.fetcher.respond(1, rows(12, &[11, 12]));
        h.pool.run_until_stalled();
        assert_eq!(h.controller.fetch_state().status(), FetchStatus::Loaded);
    }

    #[test]
    fn test_past_the_end_page_is_empty_not_error() {
        let mut h = harness(alerts_config());
        h.controller.set_page(99).unwrap();
        assert_eq!(h.fetcher.query(0).get("offset"), Some(&QueryValue::Int(980)));

        h.fetcher.respond(0, rows(12, &[]));
        h.pool.run_until_stalled();
        let state = h.controller.fetch_state();
        assert_eq!(state.status(), FetchStatus::Empty);
        assert_eq!(state.count(), 12);
        assert_eq!(h.controller.state().page, 99);
    }

    #[test]
    fn test_decode_failure_becomes_fetch_error() {
        let mut h = harness(alerts_config());
        h.controller.request_results();
        h.fetcher
            .respond(0, Ok(ListPage::new(1, vec![json!({ "id": "not-a-number" })])));
        h.pool.run_until_stalled();
        assert!(matches!(
            h.controller.fetch_state().error,
            Some(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_unknown_filter_key_issues_no_request() {
        let h = harness(alerts_config());
        let err = h.controller.set_filter("colour", "red").unwrap_err();
        assert!(matches!(err, ListQueryError::InvalidFilterKey { .. }));
        assert_eq!(
            h.controller.set_filter("date", "fortnight"),
            Err(ListQueryError::InvalidFilterValue {
                key: "date".to_string(),
                value: "fortnight".to_string(),
            })
        );
        assert_eq!(h.fetcher.len(), 0);
    }

    #[test]
    fn test_date_window_uses_injected_clock() {
        let h = harness(alerts_config());
        h.controller.set_filter("date", "week").unwrap();
        assert_eq!(
            h.fetcher.query(0).get("created_at__gte"),
            Some(&QueryValue::Text("2024-03-08T00:00:00.000Z".to_string()))
        );
    }

    #[test]
    fn test_declared_prop_change_refetches_once() {
        let h = harness(alerts_config());
        h.controller.set_page(3).unwrap();
        assert_eq!(h.fetcher.len(), 1);

        assert!(!h.controller.set_props(ListProps::default().with_title("Alerts")));
        assert_eq!(h.fetcher.len(), 1);
        assert_eq!(h.controller.props().title.as_deref(), Some("Alerts"));

        assert!(h.controller.set_props(ListProps::default().with_limit(25)));
        assert_eq!(h.fetcher.len(), 2);
        let state = h.controller.state();
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 25);
        assert_eq!(h.fetcher.query(1).get("limit"), Some(&QueryValue::Int(25)));

        // same props again is not a change
        assert!(!h.controller.set_props(ListProps::default().with_limit(25)));
        assert_eq!(h.fetcher.len(), 2);
    }

    #[test]
    fn test_show_flags_refetch_collections_that_read_them() {
        use crate::domain::a001_surge_alert::ui::list::state as alerts;
        use crate::domain::a002_appeal::ui::list::state as appeals;

        let h = harness(appeals::list_config());
        h.controller.request_results();
        let before = h.controller.derive_query();
        assert!(h.controller.set_props(ListProps::default().active()));
        assert_eq!(h.fetcher.len(), 2);
        assert_ne!(h.controller.derive_query(), before);
        assert!(h.fetcher.query(1).contains_key("end_date__gt"));

        let h = harness(alerts::list_config());
        h.controller.request_results();
        assert!(h.controller.set_props(ListProps::default().recent()));
        assert_eq!(h.fetcher.len(), 2);
        assert_eq!(
            h.fetcher.query(1).get("created_at__gte"),
            Some(&QueryValue::from("2024-02-14T00:00:00.000Z"))
        );
    }

    #[test]
    fn test_controllers_are_independent() {
        let mut pool = LocalPool::new();
        let fetcher = Rc::new(ScriptedFetcher::default());
        let spawner: Rc<dyn Spawn> = Rc::new(pool.spawner());
        let first_slot: SharedFetchState<Row> = Rc::new(RefCell::new(FetchState::default()));
        let second_slot: SharedFetchState<Row> = Rc::new(RefCell::new(FetchState::default()));
        let first = ListQueryController::new(
            alerts_config(),
            ListProps::default(),
            fetcher.clone(),
            first_slot.clone(),
            spawner.clone(),
        );
        let second = ListQueryController::new(
            ListQueryConfig::new("api/v2/event/", 10),
            ListProps::default(),
            fetcher.clone(),
            second_slot.clone(),
            spawner,
        );

        first.request_results();
        second.request_results();
        second.set_sort("name");
        assert_eq!(first.latest_request(), 1);
        assert_eq!(second.latest_request(), 2);

        fetcher.respond(0, rows(1, &[1]));
        pool.run_until_stalled();
        assert_eq!(first.fetch_state().status(), FetchStatus::Loaded);
        assert_eq!(second.fetch_state().status(), FetchStatus::Loading);
    }
}
