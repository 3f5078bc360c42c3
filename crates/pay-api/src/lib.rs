//! # pay-api
//!
//! HTTP API layer for phonepe-bridge-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The create-payment endpoint bridging clients to PhonePe
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness line |
//! | GET | `/health` | Health check |
//! | POST | `/api/create-payment` | Initiate payment, 302 to pay page |

pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
