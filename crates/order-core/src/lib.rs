//! # order-core
//!
//! Core types and traits for the order-flow service.
//!
//! This crate provides:
//! - `Order`, `OrderItem`, and `OrderStatus` for the order lifecycle
//! - `Ledger` trait and `InMemoryLedger` for order/user persistence
//! - `PaymentGateway` trait and checkout line-item building
//! - `OrderError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use order_core::{checkout_line_items, CallbackUrls, Currency, Ledger, NewOrder};
//!
//! // Persist the unpaid order first
//! let order = ledger.create_order(new_order).await?;
//! ledger.clear_cart(&order.user_id).await?;
//!
//! // Then hand the line items to the gateway
//! let line_items = checkout_line_items(&order.items, Currency::INR);
//! let (success_url, cancel_url) = urls.for_order(&order.id);
//! let session = gateway
//!     .create_checkout_session(&line_items, &success_url, &cancel_url)
//!     .await?;
//!
//! // Redirect the customer to session.checkout_url
//! ```

pub mod currency;
pub mod error;
pub mod gateway;
pub mod ledger;
pub mod order;

// Re-exports for convenience
pub use currency::Currency;
pub use error::{OrderError, OrderResult};
pub use gateway::{
    checkout_line_items, CallbackUrls, CheckoutLineItem, PaymentGateway, SharedGateway,
    DELIVERY_FEE, DELIVERY_FEE_LABEL,
};
pub use ledger::{InMemoryLedger, Ledger, SharedLedger};
pub use order::{CheckoutSession, NewOrder, Order, OrderItem, OrderStatus, User};
