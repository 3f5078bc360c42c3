//! # PhonePe Bridge RS
//!
//! Minimal backend bridge from client payment requests to the PhonePe
//! hosted pay page.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export MERCHANT_ID=MERCHANTUAT
//! export SALT_KEY=...
//! export SALT_INDEX=1
//! export PHONEPE_BASE=https://api-preprod.phonepe.com/apis/pg-sandbox
//!
//! # Run the server
//! phonepe-bridge
//! ```

use pay_api::{routes, state::AppState};
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
    info!("Payment provider: {}", state.gateway.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 PhonePe bridge starting on http://{}", addr);

    if !is_prod {
        info!("💳 Create payment: POST http://{}/api/create-payment", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
