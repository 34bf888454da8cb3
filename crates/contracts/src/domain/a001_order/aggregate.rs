use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Status
// ============================================================================

/// Lifecycle tag of an order. Any status may be set to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Wire value ("pending")
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalised label for badges ("Pending")
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Line item
// ============================================================================

/// One product entry of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub quantity: u32,
    pub price: f64,
    /// Fields this client does not interpret; sent back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartItem {
    pub fn new(product_name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            product_name: product_name.into(),
            color: None,
            quantity,
            price,
            extra: Map::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// price * quantity
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Color for display, "N/A" when absent or blank
    pub fn color_or_na(&self) -> &str {
        match self.color.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => "N/A",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer order as served by `GET /api/orders`.
///
/// The backend may send the identifier as `_id`, `id` or both; see [`Order::identifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,
    pub phone1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,
    pub address: String,

    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub cart_items: Vec<CartItem>,

    /// Fields this client does not interpret; sent back untouched on update
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Effective identifier: `_id` first, then `id`
    pub fn identifier(&self) -> Option<&str> {
        self.object_id
            .as_deref()
            .or(self.id.as_deref())
            .filter(|id| !id.is_empty())
    }

    /// Total for display; absent amount counts as zero
    pub fn total_or_zero(&self) -> f64 {
        self.total_amount.unwrap_or(0.0)
    }

    /// Secondary phone for display, "N/A" when absent or blank
    pub fn phone2_or_na(&self) -> &str {
        match self.phone2.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => "N/A",
        }
    }

    /// Required-field check performed before an update is sent
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() || self.phone1.is_empty() || self.address.is_empty() {
            return Err("Please fill in all the required fields.".into());
        }
        if self.cart_items.is_empty() {
            return Err("Please fill in all the required fields.".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Order {
    fn id(&self) -> Option<&str> {
        self.identifier()
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        serde_json::from_str(
            r#"{
                "_id": "65f0c1",
                "name": "Ann Perera",
                "phone1": "0771234567",
                "address": "12 Lake Rd, Colombo",
                "status": "completed",
                "totalAmount": 59.5,
                "cartItems": [
                    {"productName": "Signature Tee", "color": "Black", "quantity": 2, "price": 19.75, "size": "M"},
                    {"productName": "Cap", "quantity": 1, "price": 20}
                ],
                "createdAt": "2025-01-04T10:00:00Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parses_backend_payload() {
        let order = sample();
        assert_eq!(order.identifier(), Some("65f0c1"));
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.cart_items.len(), 2);
        assert_eq!(order.cart_items[1].color_or_na(), "N/A");
        assert_eq!(order.phone2_or_na(), "N/A");
        assert!(order.extra.contains_key("createdAt"));
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let order = sample();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["createdAt"], "2025-01-04T10:00:00Z");
        assert_eq!(json["cartItems"][0]["size"], "M");
        assert_eq!(json["_id"], "65f0c1");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_identifier_falls_back_to_id() {
        let order: Order = serde_json::from_str(
            r#"{"id": "42", "name": "a", "phone1": "1", "address": "x"}"#,
        )
        .unwrap();
        assert_eq!(order.identifier(), Some("42"));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_or_zero(), 0.0);
        assert!(order.cart_items.is_empty());
    }

    #[test]
    fn test_line_total() {
        let item = CartItem::new("Hoodie", 3, 12.5);
        assert_eq!(item.line_total(), 37.5);
    }

    #[test]
    fn test_validate_required_fields() {
        let order = sample();
        assert!(order.validate().is_ok());

        let mut missing_name = order.clone();
        missing_name.name.clear();
        assert!(missing_name.validate().is_err());

        let mut missing_phone = order.clone();
        missing_phone.phone1.clear();
        assert!(missing_phone.validate().is_err());

        let mut missing_address = order.clone();
        missing_address.address.clear();
        assert!(missing_address.validate().is_err());

        let mut no_items = order;
        no_items.cart_items.clear();
        assert!(no_items.validate().is_err());
    }

    #[test]
    fn test_status_strings() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str_opt(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::Cancelled.label(), "Cancelled");
        assert_eq!(OrderStatus::from_str_opt("shipped"), None);
    }

    #[test]
    fn test_collection_path() {
        assert_eq!(Order::collection_path(), "/api/orders");
        assert_eq!(Order::full_name(), "a001_orders");
    }
}
