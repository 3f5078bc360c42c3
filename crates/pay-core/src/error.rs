//! # Payment Error Types
//!
//! Typed error handling for the phonepe-bridge payment engine.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("{0}")]
    InvalidRequest(String),

    /// Gateway reachable but the pay response carried no redirect URL.
    /// The raw gateway JSON is kept for the caller's diagnostics.
    #[error("Gateway did not return a redirect URL")]
    GatewayRejected { response: serde_json::Value },

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::Configuration(_)
            | PaymentError::GatewayRejected { .. }
            | PaymentError::Network(_)
            | PaymentError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
