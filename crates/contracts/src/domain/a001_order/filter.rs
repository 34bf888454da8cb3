//! Status filter and free-text search over an order collection.
//!
//! Everything here is a pure derivation: the input collection is never
//! modified and the output keeps the input order.

use super::aggregate::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// Status selector of the dashboard stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    Cancelled,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
            StatusFilter::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Total Orders",
            StatusFilter::Pending => "Pending",
            StatusFilter::Completed => "Completed",
            StatusFilter::Cancelled => "Cancelled",
        }
    }

    /// Unknown values select everything
    pub fn parse(s: &str) -> Self {
        match s {
            "pending" => StatusFilter::Pending,
            "completed" => StatusFilter::Completed,
            "cancelled" => StatusFilter::Cancelled,
            _ => StatusFilter::All,
        }
    }

    pub fn status(&self) -> Option<OrderStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(OrderStatus::Pending),
            StatusFilter::Completed => Some(OrderStatus::Completed),
            StatusFilter::Cancelled => Some(OrderStatus::Cancelled),
        }
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        self.status().map_or(true, |s| s == status)
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => StatusFilter::Pending,
            OrderStatus::Completed => StatusFilter::Completed,
            OrderStatus::Cancelled => StatusFilter::Cancelled,
        }
    }
}

/// Filter + search input of the order list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub status: StatusFilter,
    pub search: String,
}

impl OrderQuery {
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Name and address match case-insensitively, phone1 verbatim.
    /// An empty query matches every order.
    pub fn matches_search(&self, order: &Order) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        order.name.to_lowercase().contains(&needle)
            || order.phone1.contains(self.search.as_str())
            || order.address.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.status.matches(order.status) && self.matches_search(order)
    }

    /// Visible subset of `orders`, relative order preserved
    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        orders.iter().filter(|o| self.matches(o)).cloned().collect()
    }
}

/// Convenience wrapper over [`OrderQuery::apply`]
pub fn filter_orders(orders: &[Order], status: StatusFilter, search: &str) -> Vec<Order> {
    OrderQuery::new(status, search).apply(orders)
}

/// Per-status counters shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut acc, order| {
            acc.total += 1;
            match order.status {
                OrderStatus::Pending => acc.pending += 1,
                OrderStatus::Completed => acc.completed += 1,
                OrderStatus::Cancelled => acc.cancelled += 1,
            }
            acc
        })
    }

    pub fn get(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total,
            StatusFilter::Pending => self.pending,
            StatusFilter::Completed => self.completed,
            StatusFilter::Cancelled => self.cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::aggregate::CartItem;
    use serde_json::Map;

    fn order(id: &str, name: &str, phone1: &str, address: &str, status: OrderStatus) -> Order {
        Order {
            object_id: Some(id.to_string()),
            id: None,
            name: name.to_string(),
            phone1: phone1.to_string(),
            phone2: None,
            address: address.to_string(),
            status,
            total_amount: Some(10.0),
            cart_items: vec![CartItem::new("Tee", 1, 10.0)],
            extra: Map::new(),
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("1", "Nimal Silva", "0771234567", "5 Temple Rd, Kandy", OrderStatus::Pending),
            order("2", "Kasun Perera", "0779999999", "8 Beach Way, Galle", OrderStatus::Completed),
            order("3", "Amara Fernando", "0712223334", "1 Hill St, Ella", OrderStatus::Cancelled),
            order("4", "Dilani Jay", "0765554443", "77 Main St, Colombo", OrderStatus::Pending),
        ]
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().filter_map(|o| o.identifier()).collect()
    }

    #[test]
    fn test_all_with_empty_query_returns_everything() {
        let orders = sample();
        assert_eq!(filter_orders(&orders, StatusFilter::All, ""), orders);
    }

    #[test]
    fn test_status_filter_keeps_relative_order() {
        let orders = sample();
        let pending = filter_orders(&orders, StatusFilter::Pending, "");
        assert_eq!(ids(&pending), vec!["1", "4"]);
    }

    #[test]
    fn test_status_without_matches_is_empty() {
        let orders: Vec<Order> = sample()
            .into_iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .collect();
        assert!(filter_orders(&orders, StatusFilter::Cancelled, "").is_empty());
    }

    #[test]
    fn test_phone_search() {
        let orders = sample();
        let found = filter_orders(&orders, StatusFilter::All, "123");
        assert_eq!(ids(&found), vec!["1"]);
    }

    #[test]
    fn test_name_and_address_are_case_insensitive() {
        let orders = sample();
        assert_eq!(ids(&filter_orders(&orders, StatusFilter::All, "PERERA")), vec!["2"]);
        assert_eq!(ids(&filter_orders(&orders, StatusFilter::All, "colombo")), vec!["4"]);
    }

    #[test]
    fn test_phone_is_case_sensitive() {
        let mut orders = sample();
        orders[0].phone1 = "EXT-1".to_string();
        assert_eq!(ids(&filter_orders(&orders, StatusFilter::All, "EXT")), vec!["1"]);
        assert!(filter_orders(&orders, StatusFilter::All, "ext").is_empty());
    }

    #[test]
    fn test_filter_and_search_are_conjunctive() {
        let orders = sample();
        assert_eq!(ids(&filter_orders(&orders, StatusFilter::Pending, "St")), vec!["4"]);
        assert!(filter_orders(&orders, StatusFilter::Completed, "Kandy").is_empty());
    }

    #[test]
    fn test_result_is_subset_in_order() {
        let orders = sample();
        for filter in [
            StatusFilter::All,
            StatusFilter::Pending,
            StatusFilter::Completed,
            StatusFilter::Cancelled,
        ] {
            for q in ["", "a", "07", "Rd", "zzz"] {
                let found = filter_orders(&orders, filter, q);
                let mut cursor = orders.iter();
                for o in &found {
                    assert!(cursor.any(|candidate| candidate == o));
                }
            }
        }
    }

    #[test]
    fn test_counts() {
        let counts = StatusCounts::from_orders(&sample());
        assert_eq!(
            counts,
            StatusCounts {
                total: 4,
                pending: 2,
                completed: 1,
                cancelled: 1
            }
        );
        assert_eq!(counts.get(StatusFilter::All), 4);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(StatusFilter::parse("completed"), StatusFilter::Completed);
        assert_eq!(StatusFilter::parse("whatever"), StatusFilter::All);
        assert!(StatusFilter::All.matches(OrderStatus::Cancelled));
        assert!(!StatusFilter::Pending.matches(OrderStatus::Completed));
    }
}
