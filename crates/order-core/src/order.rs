//! # Order Types
//!
//! Order, line item, and checkout session types for the order flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable item inside an order
///
/// Price is in decimal currency units; conversion to gateway minor units
/// happens when the checkout line items are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Display name
    pub name: String,

    /// Unit price in decimal currency units
    pub price: f64,

    /// Quantity
    pub quantity: u32,
}

/// Delivery status of an order.
///
/// The upstream flow treats status as a free-form string; here the allowed
/// set is an explicit contract, rejected at deserialization when violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order received, not yet in preparation
    Pending,
    /// Being prepared
    Preparing,
    /// Handed to the courier
    OutForDelivery,
    /// Delivered to the customer
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        };
        write!(f, "{}", s)
    }
}

/// Caller-supplied fields of a not-yet-persisted order.
///
/// The ledger assigns the id and stamps the payment flag, status, and
/// creation time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    /// Total charge, computed by the caller and not re-validated here
    pub amount: f64,
    /// Opaque delivery address, passed through untouched
    pub address: serde_json::Value,
}

/// A persisted order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID, assigned by the ledger
    pub id: String,

    /// Owning user (lookup key only)
    pub user_id: String,

    /// Line items
    pub items: Vec<OrderItem>,

    /// Total charge in decimal currency units
    pub amount: f64,

    /// Opaque delivery address
    pub address: serde_json::Value,

    /// True only once payment has been confirmed
    #[serde(default)]
    pub payment: bool,

    /// Delivery status
    #[serde(default)]
    pub status: OrderStatus,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Materialize a new unpaid order with a generated id
    pub fn create(new: NewOrder) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            items: new.items,
            amount: new.amount,
            address: new.address,
            payment: false,
            status: OrderStatus::default(),
            created_at: Utc::now(),
        }
    }

    /// Get total item count across all line items
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Partial view of a user record.
///
/// The order flow's only mutation to a user is clearing the cart after an
/// order has been placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID
    pub id: String,

    /// Cart contents (item name -> quantity)
    #[serde(default)]
    pub cart_data: std::collections::HashMap<String, u32>,
}

impl User {
    /// Create a user with an empty cart
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cart_data: std::collections::HashMap::new(),
        }
    }

    /// Builder: put an item into the cart
    pub fn with_cart_item(mut self, name: impl Into<String>, quantity: u32) -> Self {
        self.cart_data.insert(name.into(), quantity);
        self
    }
}

/// A checkout session created by a payment gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Gateway's session ID
    pub session_id: String,

    /// Gateway name (e.g., "stripe")
    pub gateway: String,

    /// URL to redirect the customer to for payment
    pub checkout_url: String,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl CheckoutSession {
    /// Create a new checkout session
    pub fn new(
        session_id: impl Into<String>,
        gateway: impl Into<String>,
        checkout_url: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            gateway: gateway.into(),
            checkout_url: checkout_url.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_new_order() -> NewOrder {
        NewOrder {
            user_id: "u1".into(),
            items: vec![
                OrderItem {
                    name: "Pizza".into(),
                    price: 300.0,
                    quantity: 2,
                },
                OrderItem {
                    name: "Salad".into(),
                    price: 120.0,
                    quantity: 1,
                },
            ],
            amount: 722.0,
            address: json!({"street": "12 MG Road", "city": "Bengaluru"}),
        }
    }

    #[test]
    fn test_create_order_defaults() {
        let order = Order::create(sample_new_order());

        assert!(!order.id.is_empty());
        assert!(!order.payment);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_order_ids_are_unique() {
        let a = Order::create(sample_new_order());
        let b = Order::create(sample_new_order());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_status_wire_format() {
        let s: OrderStatus = serde_json::from_str("\"out-for-delivery\"").unwrap();
        assert_eq!(s, OrderStatus::OutForDelivery);
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"delivered\""
        );

        // Values outside the contract are rejected
        assert!(serde_json::from_str::<OrderStatus>("\"lost\"").is_err());
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::create(sample_new_order());
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["userId"], "u1");
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["payment"], false);
    }

    #[test]
    fn test_user_cart_builder() {
        let user = User::new("u1").with_cart_item("Pizza", 2);
        assert_eq!(user.cart_data.get("Pizza"), Some(&2));
    }
}
