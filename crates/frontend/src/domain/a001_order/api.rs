//! API layer for orders

use super::error::OrderError;
use crate::shared::api_utils::{api_base, join_url};
use async_trait::async_trait;
use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;
use serde::Deserialize;

/// Remote order endpoints used by the dashboard
#[async_trait(?Send)]
pub trait OrderApi {
    /// `GET /api/orders`, in server order
    async fn fetch_orders(&self) -> Result<Vec<Order>, OrderError>;

    /// `PUT /api/orders/{id}` with the full order as body
    async fn update_order(&self, id: &str, order: &Order) -> Result<Order, OrderError>;
}

/// `OrderApi` over the browser fetch API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOrderApi {
    base_url: String,
}

impl HttpOrderApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the configured backend
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    pub fn collection_url(&self) -> String {
        join_url(&self.base_url, &Order::collection_path())
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }
}

#[async_trait(?Send)]
impl OrderApi for HttpOrderApi {
    async fn fetch_orders(&self) -> Result<Vec<Order>, OrderError> {
        let url = self.collection_url();
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| OrderError::Fetch(format!("Failed to fetch: {}", e)))?;

        if !response.ok() {
            return Err(OrderError::Fetch(format!(
                "Server error: {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| OrderError::Fetch(format!("Failed to read response: {}", e)))?;
        serde_json::from_str(&text)
            .map_err(|e| OrderError::Fetch(format!("Failed to parse: {}", e)))
    }

    async fn update_order(&self, id: &str, order: &Order) -> Result<Order, OrderError> {
        let url = self.item_url(id);
        let response = Request::put(&url)
            .json(order)
            .map_err(|e| OrderError::Save(e.to_string()))?
            .send()
            .await
            .map_err(|e| OrderError::Save(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !ok {
            return Err(OrderError::Save(save_error_message(status, &body)));
        }
        Ok(parse_updated(&body, order))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    message: Option<String>,
}

/// Backend-provided `message` of an error body, else a generic status message
pub fn save_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|p| p.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status))
}

/// The updated order from a success body; the sent draft when the body is not an order
pub fn parse_updated(body: &str, sent: &Order) -> Order {
    match serde_json::from_str::<Order>(body) {
        Ok(order) => order,
        Err(_) => {
            log::debug!("Update response is not an order, keeping the sent draft");
            sent.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::aggregate::CartItem;

    fn draft() -> Order {
        serde_json::from_value(serde_json::json!({
            "_id": "a1",
            "name": "Ann",
            "phone1": "0771234567",
            "address": "12 Lake Rd",
            "cartItems": [{"productName": "Tee", "quantity": 1, "price": 10.0}]
        }))
        .unwrap()
    }

    #[test]
    fn test_urls() {
        let api = HttpOrderApi::new("http://localhost:5000/");
        assert_eq!(api.collection_url(), "http://localhost:5000/api/orders");
        assert_eq!(api.item_url("a1"), "http://localhost:5000/api/orders/a1");
        assert_eq!(api.item_url("a/1"), "http://localhost:5000/api/orders/a%2F1");
    }

    #[test]
    fn test_save_error_message_prefers_backend_message() {
        assert_eq!(
            save_error_message(400, r#"{"message": "Invalid address"}"#),
            "Invalid address"
        );
    }

    #[test]
    fn test_save_error_message_fallback() {
        assert_eq!(
            save_error_message(500, "<html>oops</html>"),
            "Request failed with status code 500"
        );
        assert_eq!(
            save_error_message(422, r#"{"message": ""}"#),
            "Request failed with status code 422"
        );
        assert_eq!(
            save_error_message(422, r#"{"message": {"field": "name"}}"#),
            "Request failed with status code 422"
        );
    }

    #[test]
    fn test_parse_updated() {
        let sent = draft();
        let mut changed = sent.clone();
        changed.cart_items.push(CartItem::new("Cap", 1, 5.0));
        let body = serde_json::to_string(&changed).unwrap();
        assert_eq!(parse_updated(&body, &sent), changed);
        assert_eq!(parse_updated(r#"{"message": "updated"}"#, &sent), sent);
    }
}
