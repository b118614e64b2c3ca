//! # order-api
//!
//! HTTP API layer for the order-flow service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for the order lifecycle
//! - Shared application state wiring the ledger and payment gateway
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/orders` | Place order, returns checkout URL |
//! | GET | `/api/v1/orders` | List all orders |
//! | POST | `/api/v1/orders/verify` | Confirm or cancel payment |
//! | POST | `/api/v1/orders/user` | List a user's orders |
//! | POST | `/api/v1/orders/status` | Update delivery status |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
