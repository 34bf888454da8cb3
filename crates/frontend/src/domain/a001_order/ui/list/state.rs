use crate::domain::a001_order::api::OrderApi;
use crate::domain::a001_order::editor::OrderEditor;
use crate::domain::a001_order::error::OrderError;
use crate::domain::a001_order::store::OrderStore;
use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a001_order::filter::{OrderQuery, StatusCounts, StatusFilter};
use leptos::prelude::*;

/// Everything the order dashboard shows, owned in one place
#[derive(Clone, Debug, Default)]
pub struct OrderDashboardState {
    pub store: OrderStore,
    pub query: OrderQuery,
    pub editor: OrderEditor,
    pub is_loading: bool,
}

/// Result of a successful save: the stored order and how the follow-up
/// refresh went
#[derive(Clone, Debug, PartialEq)]
pub struct SaveOutcome {
    pub saved: Order,
    pub refresh: Result<usize, OrderError>,
}

impl OrderDashboardState {
    pub fn visible_orders(&self) -> Vec<Order> {
        self.query.apply(self.store.orders())
    }

    pub fn counts(&self) -> StatusCounts {
        self.store.counts()
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.query.status = filter;
    }

    pub fn set_search(&mut self, search: String) {
        self.query.search = search;
    }

    /// Opens the order with `id` in the editor; false if it is not in the store
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.store.find(id).cloned() {
            Some(order) => {
                self.editor.select(Some(order));
                true
            }
            None => {
                log::warn!("Order {} not found in store", id);
                false
            }
        }
    }
}

pub fn create_state() -> RwSignal<OrderDashboardState> {
    RwSignal::new(OrderDashboardState::default())
}

/// Refreshes the store held in `state` without keeping the signal borrowed
/// across the request. Filter, search and editor keep any changes made
/// while the request was running.
pub async fn refresh_signal<A: OrderApi + ?Sized>(
    state: RwSignal<OrderDashboardState>,
    api: &A,
) -> Result<usize, OrderError> {
    let Some(mut store) = state.try_update(|s| {
        s.is_loading = true;
        s.store.clone()
    }) else {
        return Ok(0);
    };
    let result = store.refresh(api).await;
    let stored = state.try_update(|s| {
        s.store = store;
        s.is_loading = false;
    });
    if stored.is_none() {
        log::debug!("Order dashboard closed before the refresh finished");
    }
    result
}

/// Sends the editor draft and, once the backend accepts it, fetches the list
/// again. The signal is only borrowed between the awaits, so the view stays
/// responsive while the request runs.
///
/// `None` means the dashboard was disposed before the save could finish.
pub async fn save_order(
    state: RwSignal<OrderDashboardState>,
    api: &dyn OrderApi,
) -> Option<Result<SaveOutcome, OrderError>> {
    let (id, body) = match state.try_update(|s| s.editor.begin_save())? {
        Ok(request) => request,
        Err(e) => return Some(Err(e)),
    };

    let result = api.update_order(&id, &body).await;
    let saved = match state.try_update(|s| s.editor.finish_save(result))? {
        Ok(saved) => saved,
        Err(e) => return Some(Err(e)),
    };

    let refresh = refresh_signal(state, api).await;
    Some(Ok(SaveOutcome { saved, refresh }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::editor::EditorPhase;
    use crate::domain::a001_order::store::tests::{order, MockOrderApi};
    use contracts::domain::a001_order::aggregate::OrderStatus;

    fn listing() -> Vec<Order> {
        let mut orders = vec![
            order("1", OrderStatus::Pending),
            order("2", OrderStatus::Completed),
            order("3", OrderStatus::Cancelled),
            order("4", OrderStatus::Pending),
        ];
        for (order, phone) in orders
            .iter_mut()
            .zip(["0771234567", "0715550000", "0118887777", "0779999999"])
        {
            order.phone1 = phone.to_string();
        }
        orders
    }

    async fn loaded(api: &MockOrderApi) -> RwSignal<OrderDashboardState> {
        let state = create_state();
        refresh_signal(state, api).await.unwrap();
        state
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().filter_map(|o| o.identifier()).collect()
    }

    fn open_for_edit(state: RwSignal<OrderDashboardState>, id: &str) {
        state.update(|s| {
            assert!(s.select_by_id(id));
            s.editor.begin_edit();
        });
    }

    #[tokio::test]
    async fn test_refresh_signal_loads_store() {
        let api = MockOrderApi::with_orders(listing());
        let state = create_state();

        assert_eq!(refresh_signal(state, &api).await, Ok(4));

        state.with_untracked(|s| {
            assert!(s.store.is_loaded());
            assert!(!s.is_loading);
            assert_eq!(ids(s.store.orders()), vec!["4", "3", "2", "1"]);
        });
    }

    #[tokio::test]
    async fn test_refresh_signal_failure_keeps_store() {
        let api = MockOrderApi::with_orders(listing());
        let state = loaded(&api).await;
        state.update(|s| s.set_search("Lake".into()));

        *api.listing.borrow_mut() = Err(OrderError::Fetch("Server error: 503".into()));
        let err = refresh_signal(state, &api).await.unwrap_err();

        assert!(matches!(err, OrderError::Fetch(_)));
        state.with_untracked(|s| {
            assert_eq!(s.store.len(), 4);
            assert!(!s.is_loading);
            assert_eq!(s.query.search, "Lake");
        });
    }

    #[tokio::test]
    async fn test_disposed_dashboard_skips_requests() {
        let api = MockOrderApi::with_orders(listing());
        let state = create_state();
        state.dispose();

        assert_eq!(refresh_signal(state, &api).await, Ok(0));
        assert!(save_order(state, &api).await.is_none());
        assert_eq!(*api.fetch_calls.borrow(), 0);
        assert!(api.updates.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_filter_and_search() {
        let api = MockOrderApi::with_orders(listing());
        let state = loaded(&api).await;

        state.update(|s| {
            assert_eq!(ids(&s.visible_orders()), vec!["4", "3", "2", "1"]);

            s.set_filter(StatusFilter::Pending);
            assert_eq!(ids(&s.visible_orders()), vec!["4", "1"]);

            s.set_filter(StatusFilter::All);
            s.set_search("123".into());
            assert_eq!(ids(&s.visible_orders()), vec!["1"]);

            s.set_filter(StatusFilter::Completed);
            assert!(s.visible_orders().is_empty());
            assert_eq!(s.counts().pending, 2);
        });
    }

    #[tokio::test]
    async fn test_select_by_id() {
        let api = MockOrderApi::with_orders(listing());
        let state = loaded(&api).await;

        state.update(|s| {
            assert!(s.select_by_id("3"));
            assert_eq!(s.editor.phase(), EditorPhase::Viewing);
            assert!(!s.select_by_id("missing"));
            assert_eq!(s.editor.selected().and_then(|o| o.identifier()), Some("3"));
        });
    }

    #[tokio::test]
    async fn test_save_order_clears_selection_and_refetches() {
        let api = MockOrderApi::with_orders(listing());
        let state = loaded(&api).await;
        open_for_edit(state, "1");
        state.update(|s| s.editor.set_status(OrderStatus::Completed));

        let mut updated = listing();
        updated[0].status = OrderStatus::Completed;
        *api.listing.borrow_mut() = Ok(updated);

        let outcome = save_order(state, &api).await.unwrap().unwrap();

        assert_eq!(outcome.saved.status, OrderStatus::Completed);
        assert_eq!(outcome.refresh, Ok(4));
        assert_eq!(*api.fetch_calls.borrow(), 2);
        assert_eq!(api.updates.borrow()[0].0, "1");
        state.with_untracked(|s| {
            assert_eq!(s.editor.phase(), EditorPhase::NoSelection);
            assert_eq!(s.counts().completed, 2);
            assert!(!s.is_loading);
        });
    }

    #[tokio::test]
    async fn test_save_order_failure_keeps_draft() {
        let api = MockOrderApi::with_orders(listing());
        let state = loaded(&api).await;
        open_for_edit(state, "2");
        state.update(|s| s.editor.set_address("Somewhere else".into()));
        api.fail_next_update(OrderError::Save("Invalid address".into()));

        let err = save_order(state, &api).await.unwrap().unwrap_err();

        assert_eq!(err, OrderError::Save("Invalid address".into()));
        assert_eq!(*api.fetch_calls.borrow(), 1);
        state.with_untracked(|s| {
            assert_eq!(s.editor.phase(), EditorPhase::Editing);
            assert_eq!(s.editor.draft().map(|o| o.address.as_str()), Some("Somewhere else"));
            assert!(!s.is_loading);
        });
    }

    #[tokio::test]
    async fn test_save_order_rejects_invalid_draft_without_request() {
        let api = MockOrderApi::with_orders(listing());
        let state = loaded(&api).await;
        open_for_edit(state, "3");
        state.update(|s| s.editor.set_name(String::new()));

        let err = save_order(state, &api).await.unwrap().unwrap_err();

        assert!(matches!(err, OrderError::Validation(_)));
        assert!(api.updates.borrow().is_empty());
        assert_eq!(state.with_untracked(|s| s.editor.phase()), EditorPhase::Editing);
    }
}
