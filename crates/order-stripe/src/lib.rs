//! # order-stripe
//!
//! Stripe hosted-checkout gateway for the order-flow service.
//!
//! `StripeCheckout` implements the `PaymentGateway` trait from `order-core`
//! against the Checkout Sessions API: dynamic line items, `payment` mode,
//! and success/cancel callback URLs supplied by the caller.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_stripe::StripeCheckout;
//! use order_core::{checkout_line_items, Currency, PaymentGateway};
//!
//! // Create gateway from environment (STRIPE_SECRET_KEY)
//! let gateway = StripeCheckout::from_env()?;
//!
//! let line_items = checkout_line_items(&order.items, Currency::INR);
//! let session = gateway
//!     .create_checkout_session(&line_items, &success_url, &cancel_url)
//!     .await?;
//!
//! // Redirect the customer to session.checkout_url
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeCheckout;
pub use config::StripeConfig;
