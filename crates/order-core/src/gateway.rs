//! # Payment Gateway Trait
//!
//! Trait seam for hosted-checkout payment providers, plus the line-item
//! and callback-URL plumbing the order flow feeds into it.
//!
//! The gateway client is constructed explicitly at startup and injected
//! into the application state; there is no process-global client.

use crate::currency::Currency;
use crate::error::OrderResult;
use crate::order::{CheckoutSession, OrderItem};
use async_trait::async_trait;
use std::sync::Arc;

/// Flat delivery fee appended to every checkout, in decimal currency units
pub const DELIVERY_FEE: f64 = 2.0;

/// Display name of the delivery-fee line item
pub const DELIVERY_FEE_LABEL: &str = "Delivery Charges";

/// A line item as the gateway expects it: amount already converted to
/// minor currency units (paisa for INR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    /// Display name
    pub name: String,

    /// Unit amount in minor currency units
    pub unit_amount: i64,

    /// Quantity
    pub quantity: u32,

    /// Currency
    pub currency: Currency,
}

/// Build the gateway line-item list for an order's items.
///
/// One entry per item with `unit_amount = price * 100`, plus one fixed
/// delivery-fee entry, so the result always has length `items.len() + 1`.
pub fn checkout_line_items(items: &[OrderItem], currency: Currency) -> Vec<CheckoutLineItem> {
    let mut line_items: Vec<CheckoutLineItem> = items
        .iter()
        .map(|item| CheckoutLineItem {
            name: item.name.clone(),
            unit_amount: currency.to_minor_units(item.price),
            quantity: item.quantity,
            currency,
        })
        .collect();

    line_items.push(CheckoutLineItem {
        name: DELIVERY_FEE_LABEL.to_string(),
        unit_amount: currency.to_minor_units(DELIVERY_FEE),
        quantity: 1,
        currency,
    });

    line_items
}

/// Core trait for payment gateway implementations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a hosted checkout session and return the redirect URL.
    ///
    /// # Arguments
    /// * `line_items` - Items to charge, in minor currency units
    /// * `success_url` - URL the customer lands on after paying
    /// * `cancel_url` - URL the customer lands on after cancelling
    async fn create_checkout_session(
        &self,
        line_items: &[CheckoutLineItem],
        success_url: &str,
        cancel_url: &str,
    ) -> OrderResult<CheckoutSession>;

    /// Get the gateway name (for logging)
    fn gateway_name(&self) -> &'static str;
}

/// Type alias for a shared gateway handle (dynamic dispatch)
pub type SharedGateway = Arc<dyn PaymentGateway>;

/// Builder for the frontend callback URLs a checkout session redirects to.
///
/// Both URLs point at the frontend's verify page and embed the order id so
/// the follow-up verify call can promote or delete the order.
#[derive(Debug, Clone)]
pub struct CallbackUrls {
    /// Base URL of the frontend (e.g., "http://localhost:5174")
    pub frontend_url: String,
}

impl CallbackUrls {
    pub fn new(frontend_url: impl Into<String>) -> Self {
        Self {
            frontend_url: frontend_url.into(),
        }
    }

    /// Success/cancel URL pair for an order
    pub fn for_order(&self, order_id: &str) -> (String, String) {
        (
            format!(
                "{}/verify?success=true&orderId={}",
                self.frontend_url, order_id
            ),
            format!(
                "{}/verify?success=false&orderId={}",
                self.frontend_url, order_id
            ),
        )
    }
}

impl Default for CallbackUrls {
    fn default() -> Self {
        Self::new("http://localhost:5174")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<OrderItem> {
        vec![
            OrderItem {
                name: "Pizza".into(),
                price: 300.0,
                quantity: 2,
            },
            OrderItem {
                name: "Salad".into(),
                price: 120.5,
                quantity: 1,
            },
        ]
    }

    #[test]
    fn test_line_item_count_includes_delivery_fee() {
        let line_items = checkout_line_items(&sample_items(), Currency::INR);
        assert_eq!(line_items.len(), 3);
        assert_eq!(line_items.last().unwrap().name, DELIVERY_FEE_LABEL);
        assert_eq!(line_items.last().unwrap().quantity, 1);
    }

    #[test]
    fn test_unit_amounts_are_minor_units() {
        let line_items = checkout_line_items(&sample_items(), Currency::INR);

        assert_eq!(line_items[0].unit_amount, 30000);
        assert_eq!(line_items[0].quantity, 2);
        assert_eq!(line_items[1].unit_amount, 12050);
        assert_eq!(line_items[2].unit_amount, 200);
    }

    #[test]
    fn test_empty_order_still_carries_delivery_fee() {
        let line_items = checkout_line_items(&[], Currency::INR);
        assert_eq!(line_items.len(), 1);
        assert_eq!(line_items[0].name, DELIVERY_FEE_LABEL);
    }

    #[test]
    fn test_callback_urls_embed_order_id() {
        let urls = CallbackUrls::new("http://localhost:5174");
        let (success, cancel) = urls.for_order("ord-42");

        assert_eq!(
            success,
            "http://localhost:5174/verify?success=true&orderId=ord-42"
        );
        assert_eq!(
            cancel,
            "http://localhost:5174/verify?success=false&orderId=ord-42"
        );
    }
}
