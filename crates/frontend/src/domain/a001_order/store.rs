use super::api::OrderApi;
use super::error::OrderError;
use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a001_order::filter::StatusCounts;
use std::collections::HashSet;

/// Client-side cache of every order known to the dashboard.
///
/// Replaced wholesale on each successful fetch; kept newest-returned first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStore {
    orders: Vec<Order>,
    is_loaded: bool,
}

impl OrderStore {
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// True once at least one fetch succeeded
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_orders(&self.orders)
    }

    pub fn find(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.identifier() == Some(id))
    }

    /// Stores `fetched` in reverse server order, dropping repeated identifiers
    pub fn replace(&mut self, fetched: Vec<Order>) {
        let mut seen = HashSet::new();
        let mut orders = Vec::with_capacity(fetched.len());
        for order in fetched.into_iter().rev() {
            if let Some(id) = order.identifier() {
                if !seen.insert(id.to_string()) {
                    log::warn!("Duplicate order id {} in listing, keeping the first", id);
                    continue;
                }
            }
            orders.push(order);
        }
        self.orders = orders;
        self.is_loaded = true;
    }

    /// Fetches the full listing. On failure the current collection is kept.
    pub async fn refresh<A: OrderApi + ?Sized>(&mut self, api: &A) -> Result<usize, OrderError> {
        match api.fetch_orders().await {
            Ok(fetched) => {
                self.replace(fetched);
                log::debug!("Order store refreshed: {} orders", self.orders.len());
                Ok(self.orders.len())
            }
            Err(e) => {
                log::error!("{}", e);
                Err(e)
            }
        }
    }
}
