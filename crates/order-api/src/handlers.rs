//! # Request Handlers
//!
//! Axum request handlers for the order flow: place, verify, list, and
//! update orders.
//!
//! Every ledger or gateway failure is collapsed at this boundary into the
//! generic `{success: false, message}` envelope with a 500 status; the
//! underlying error is logged and never surfaced to the caller.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use order_core::{checkout_line_items, Currency, NewOrder, Order, OrderStatus};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info, instrument};

/// Checkout currency for every session
const CHECKOUT_CURRENCY: Currency = Currency::INR;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Place order response
#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub success: bool,
    /// Hosted checkout URL to redirect the customer to
    pub session_url: String,
}

/// Verify order request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOrderRequest {
    pub order_id: String,
    /// Payment outcome reported by the checkout redirect.
    /// Accepted as a boolean or the strings "true"/"false" and normalized
    /// here, before any core logic sees it.
    #[serde(deserialize_with = "loose_bool")]
    pub success: bool,
}

/// User orders request (userId travels in the body, as in the frontend)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrdersRequest {
    pub user_id: String,
}

/// Update status request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub order_id: String,
    pub status: OrderStatus,
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }
}

/// Order listing response
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub success: bool,
    pub data: Vec<Order>,
}

/// Collapse an internal failure into the generic service-error response
fn service_error(message: &str) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::new(false, message)),
    )
}

/// Accept `true`/`false` as booleans or as the strings "true"/"false"
fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Flag(bool),
        Text(String),
    }

    match Loose::deserialize(deserializer)? {
        Loose::Flag(flag) => Ok(flag),
        Loose::Text(text) => match text.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected \"true\" or \"false\", got {other:?}"
            ))),
        },
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "order-flow",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Place a new order and open a hosted checkout session.
///
/// The order is persisted unpaid and the user's cart cleared before the
/// gateway is called. There is no rollback if the gateway call fails: the
/// unpaid order stays in the ledger.
#[instrument(skip(state, request), fields(user_id = %request.user_id, items = request.items.len()))]
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<NewOrder>,
) -> Result<Json<PlaceOrderResponse>, (StatusCode, Json<MessageResponse>)> {
    let order = state.ledger.create_order(request).await.map_err(|e| {
        error!("Failed to persist order: {}", e);
        service_error("Could not place order.")
    })?;

    state.ledger.clear_cart(&order.user_id).await.map_err(|e| {
        error!("Failed to clear cart for {}: {}", order.user_id, e);
        service_error("Could not place order.")
    })?;

    let line_items = checkout_line_items(&order.items, CHECKOUT_CURRENCY);
    let (success_url, cancel_url) = state.urls.for_order(&order.id);

    info!(
        "Placing order {}: {} items, amount {}",
        order.id,
        order.item_count(),
        order.amount
    );

    let session = state
        .gateway
        .create_checkout_session(&line_items, &success_url, &cancel_url)
        .await
        .map_err(|e| {
            error!("Failed to create checkout session: {}", e);
            service_error("Could not place order.")
        })?;

    Ok(Json(PlaceOrderResponse {
        success: true,
        session_url: session.checkout_url,
    }))
}

/// Settle an order after the checkout redirect: promote it to paid on
/// success, delete it otherwise.
#[instrument(skip(state, request), fields(order_id = %request.order_id, success = request.success))]
pub async fn verify_order(
    State(state): State<AppState>,
    Json(request): Json<VerifyOrderRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    if request.success {
        state
            .ledger
            .set_payment(&request.order_id, true)
            .await
            .map_err(|e| {
                error!("Failed to mark order {} paid: {}", request.order_id, e);
                service_error("Error verifying order")
            })?;

        Ok(Json(MessageResponse::new(true, "Payment successful")))
    } else {
        state
            .ledger
            .delete_order(&request.order_id)
            .await
            .map_err(|e| {
                error!("Failed to delete order {}: {}", request.order_id, e);
                service_error("Error verifying order")
            })?;

        Ok(Json(MessageResponse::new(
            false,
            "Payment failed, order deleted",
        )))
    }
}

/// List the requesting user's orders
#[instrument(skip(state, request), fields(user_id = %request.user_id))]
pub async fn user_orders(
    State(state): State<AppState>,
    Json(request): Json<UserOrdersRequest>,
) -> Result<Json<OrdersResponse>, (StatusCode, Json<MessageResponse>)> {
    let data = state
        .ledger
        .orders_for_user(&request.user_id)
        .await
        .map_err(|e| {
            error!("Failed to list orders for {}: {}", request.user_id, e);
            service_error("Could not retrieve orders.")
        })?;

    Ok(Json(OrdersResponse {
        success: true,
        data,
    }))
}

/// List every order in the ledger (admin view)
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<OrdersResponse>, (StatusCode, Json<MessageResponse>)> {
    let data = state.ledger.all_orders().await.map_err(|e| {
        error!("Failed to list orders: {}", e);
        service_error("Could not retrieve orders.")
    })?;

    Ok(Json(OrdersResponse {
        success: true,
        data,
    }))
}

/// Overwrite an order's delivery status (admin view, last-write-wins)
#[instrument(skip(state, request), fields(order_id = %request.order_id, status = %request.status))]
pub async fn update_status(
    State(state): State<AppState>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    state
        .ledger
        .set_status(&request.order_id, request.status)
        .await
        .map_err(|e| {
            error!(
                "Failed to update status of order {}: {}",
                request.order_id, e
            );
            service_error("Could not update order status")
        })?;

    Ok(Json(MessageResponse::new(true, "Order status updated")))
}
