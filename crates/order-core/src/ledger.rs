//! # Ledger
//!
//! Trait seam over the persistent store of order and user records, with an
//! in-process implementation used as the service default and in tests.
//!
//! Update operations follow document-store semantics: writes against
//! unknown ids are ignored rather than rejected, and deletes are
//! delete-if-exists.

use crate::error::OrderResult;
use crate::order::{NewOrder, Order, OrderStatus, User};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Persistent store of Order and User records.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Persist a new order. The ledger assigns the id and stamps
    /// `payment = false`, the default status, and the creation time.
    async fn create_order(&self, new: NewOrder) -> OrderResult<Order>;

    /// Set the payment flag on an order
    async fn set_payment(&self, order_id: &str, paid: bool) -> OrderResult<()>;

    /// Overwrite the status of an order (last-write-wins)
    async fn set_status(&self, order_id: &str, status: OrderStatus) -> OrderResult<()>;

    /// Delete an order; deleting an unknown id is a no-op
    async fn delete_order(&self, order_id: &str) -> OrderResult<()>;

    /// All orders belonging to one user, in store-native order
    async fn orders_for_user(&self, user_id: &str) -> OrderResult<Vec<Order>>;

    /// Every order in the ledger, unordered
    async fn all_orders(&self) -> OrderResult<Vec<Order>>;

    /// Empty a user's cart
    async fn clear_cart(&self, user_id: &str) -> OrderResult<()>;
}

/// Type alias for a shared ledger handle (dynamic dispatch)
pub type SharedLedger = Arc<dyn Ledger>;

/// In-process ledger backed by `HashMap`s behind an async `RwLock`.
#[derive(Clone, Default)]
pub struct InMemoryLedger {
    orders: Arc<RwLock<HashMap<String, Order>>>,
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record (seeding for tests and demos)
    pub async fn upsert_user(&self, user: User) {
        self.users.write().await.insert(user.id.clone(), user);
    }

    /// Fetch a user record by id
    pub async fn user(&self, user_id: &str) -> Option<User> {
        self.users.read().await.get(user_id).cloned()
    }

    /// Fetch an order by id
    pub async fn order(&self, order_id: &str) -> Option<Order> {
        self.orders.read().await.get(order_id).cloned()
    }
}

#[async_trait]
impl Ledger for InMemoryLedger {
    async fn create_order(&self, new: NewOrder) -> OrderResult<Order> {
        let order = Order::create(new);
        self.orders
            .write()
            .await
            .insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn set_payment(&self, order_id: &str, paid: bool) -> OrderResult<()> {
        if let Some(order) = self.orders.write().await.get_mut(order_id) {
            order.payment = paid;
        }
        Ok(())
    }

    async fn set_status(&self, order_id: &str, status: OrderStatus) -> OrderResult<()> {
        if let Some(order) = self.orders.write().await.get_mut(order_id) {
            order.status = status;
        }
        Ok(())
    }

    async fn delete_order(&self, order_id: &str) -> OrderResult<()> {
        self.orders.write().await.remove(order_id);
        Ok(())
    }

    async fn orders_for_user(&self, user_id: &str) -> OrderResult<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn all_orders(&self) -> OrderResult<Vec<Order>> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn clear_cart(&self, user_id: &str) -> OrderResult<()> {
        if let Some(user) = self.users.write().await.get_mut(user_id) {
            user.cart_data.clear();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderItem;
    use serde_json::json;

    fn new_order(user_id: &str) -> NewOrder {
        NewOrder {
            user_id: user_id.into(),
            items: vec![OrderItem {
                name: "Pizza".into(),
                price: 300.0,
                quantity: 1,
            }],
            amount: 302.0,
            address: json!({"city": "Bengaluru"}),
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let ledger = InMemoryLedger::new();
        let order = ledger.create_order(new_order("u1")).await.unwrap();

        let stored = ledger.order(&order.id).await.unwrap();
        assert_eq!(stored.user_id, "u1");
        assert!(!stored.payment);
    }

    #[tokio::test]
    async fn test_set_payment_and_status() {
        let ledger = InMemoryLedger::new();
        let order = ledger.create_order(new_order("u1")).await.unwrap();

        ledger.set_payment(&order.id, true).await.unwrap();
        ledger
            .set_status(&order.id, OrderStatus::Delivered)
            .await
            .unwrap();

        let stored = ledger.order(&order.id).await.unwrap();
        assert!(stored.payment);
        assert_eq!(stored.status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn test_updates_to_unknown_ids_are_ignored() {
        let ledger = InMemoryLedger::new();

        assert!(ledger.set_payment("missing", true).await.is_ok());
        assert!(ledger
            .set_status("missing", OrderStatus::Delivered)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_delete_is_delete_if_exists() {
        let ledger = InMemoryLedger::new();
        let order = ledger.create_order(new_order("u1")).await.unwrap();

        ledger.delete_order(&order.id).await.unwrap();
        assert!(ledger.order(&order.id).await.is_none());

        // Second delete of the same id is a no-op
        assert!(ledger.delete_order(&order.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_orders_for_user_filters_by_owner() {
        let ledger = InMemoryLedger::new();
        ledger.create_order(new_order("u1")).await.unwrap();
        ledger.create_order(new_order("u1")).await.unwrap();
        ledger.create_order(new_order("u2")).await.unwrap();

        let mine = ledger.orders_for_user("u1").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|o| o.user_id == "u1"));

        assert_eq!(ledger.all_orders().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let ledger = InMemoryLedger::new();
        ledger
            .upsert_user(User::new("u1").with_cart_item("Pizza", 2))
            .await;

        ledger.clear_cart("u1").await.unwrap();
        assert!(ledger.user("u1").await.unwrap().cart_data.is_empty());

        // Unknown user is a no-op
        assert!(ledger.clear_cart("ghost").await.is_ok());
    }
}
