//! # Order-Flow
//!
//! HTTP order-flow service: place orders, collect payment through a hosted
//! checkout, verify the outcome, and track delivery status.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export FRONTEND_URL=http://localhost:5174
//!
//! # Run the server
//! order-flow
//! ```

use order_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment gateway: {}", state.gateway.gateway_name());
    info!("Callback base: {}", state.config.frontend_url);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Order-Flow starting on http://{}", addr);

    if !is_prod {
        info!("Place order: POST http://{}/api/v1/orders", addr);
        info!("Verify:      POST http://{}/api/v1/orders/verify", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
