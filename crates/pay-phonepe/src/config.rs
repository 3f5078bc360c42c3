//! # PhonePe Configuration
//!
//! Configuration management for the PhonePe integration.
//! All merchant credentials are loaded from environment variables once
//! at startup; request logic never reads the environment directly.

use crate::constants::{DEFAULT_SALT_INDEX, SANDBOX_BASE_URL};
use pay_core::PaymentError;
use std::env;

/// PhonePe API configuration
#[derive(Debug, Clone)]
pub struct PhonePeConfig {
    /// Merchant identifier issued by PhonePe
    pub merchant_id: String,

    /// Salt key used in the X-VERIFY checksum
    pub salt_key: String,

    /// Salt key index (sent after the `###` separator)
    pub salt_index: String,

    /// API base URL (for sandbox/production switching and mocking)
    pub base_url: String,
}

impl PhonePeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `MERCHANT_ID`
    /// - `SALT_KEY`
    ///
    /// Optional:
    /// - `SALT_INDEX` (defaults to `"1"`)
    /// - `PHONEPE_BASE` (defaults to the sandbox base URL)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let merchant_id = env::var("MERCHANT_ID")
            .map_err(|_| PaymentError::Configuration("MERCHANT_ID not set".to_string()))?;

        let salt_key = env::var("SALT_KEY")
            .map_err(|_| PaymentError::Configuration("SALT_KEY not set".to_string()))?;

        if merchant_id.trim().is_empty() {
            return Err(PaymentError::Configuration(
                "MERCHANT_ID must not be empty".to_string(),
            ));
        }

        if salt_key.trim().is_empty() {
            return Err(PaymentError::Configuration(
                "SALT_KEY must not be empty".to_string(),
            ));
        }

        let salt_index =
            env::var("SALT_INDEX").unwrap_or_else(|_| DEFAULT_SALT_INDEX.to_string());

        let base_url =
            env::var("PHONEPE_BASE").unwrap_or_else(|_| SANDBOX_BASE_URL.to_string());

        Ok(Self {
            merchant_id,
            salt_key,
            salt_index,
            base_url,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        merchant_id: impl Into<String>,
        salt_key: impl Into<String>,
        salt_index: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            salt_key: salt_key.into(),
            salt_index: salt_index.into(),
            base_url: SANDBOX_BASE_URL.to_string(),
        }
    }

    /// Check if pointed at the PhonePe sandbox
    pub fn is_sandbox(&self) -> bool {
        self.base_url == SANDBOX_BASE_URL
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}
