//! # Payment Types
//!
//! Inbound amount handling and the per-request payment entities.
//! Amounts arrive in whole rupees and are converted to paise (the
//! gateway's smallest unit, 1/100 rupee) before leaving this crate.

use crate::error::{PaymentError, PaymentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix for generated merchant transaction ids
pub const ORDER_ID_PREFIX: &str = "ORD";

/// Placeholder mobile number used when the caller supplies none
pub const DEFAULT_MOBILE_NUMBER: &str = "9999999999";

/// A rupee amount as supplied by the caller.
///
/// Clients send `amountINR` either as a JSON number or as a string
/// (form submissions always produce strings), so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RupeeAmount {
    Number(i64),
    Text(String),
}

impl RupeeAmount {
    /// True when the value counts as absent (empty string or zero)
    pub fn is_missing(&self) -> bool {
        match self {
            RupeeAmount::Number(n) => *n == 0,
            RupeeAmount::Text(t) => t.trim().is_empty(),
        }
    }

    /// Convert whole rupees to paise (x100), rejecting non-numeric
    /// and non-positive input.
    pub fn to_paise(&self) -> PaymentResult<i64> {
        let rupees = match self {
            RupeeAmount::Number(n) => *n,
            RupeeAmount::Text(t) => t.trim().parse::<i64>().map_err(|_| {
                PaymentError::InvalidRequest(
                    "amountINR must be a positive integer".to_string(),
                )
            })?,
        };

        if rupees <= 0 {
            return Err(PaymentError::InvalidRequest(
                "amountINR must be a positive integer".to_string(),
            ));
        }

        rupees.checked_mul(100).ok_or_else(|| {
            PaymentError::InvalidRequest("amountINR out of range".to_string())
        })
    }
}

/// Generate a merchant transaction id: `ORD` + current epoch milliseconds.
///
/// Uniqueness relies on millisecond clock granularity only; two requests
/// landing in the same millisecond would collide.
pub fn generate_merchant_transaction_id() -> String {
    format!("{}{}", ORDER_ID_PREFIX, Utc::now().timestamp_millis())
}

/// A validated payment attempt, ready to hand to a gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Generated order id correlating this attempt with the gateway
    pub merchant_transaction_id: String,

    /// Amount in paise (rupees x 100)
    pub amount_paise: i64,

    /// Where the gateway sends the customer after payment
    pub redirect_url: String,

    /// Customer mobile number (placeholder when not supplied)
    pub mobile_number: String,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl PaymentIntent {
    /// Create a new intent with a generated transaction id
    pub fn new(
        amount_paise: i64,
        redirect_url: impl Into<String>,
        mobile_number: impl Into<String>,
    ) -> Self {
        Self {
            merchant_transaction_id: generate_merchant_transaction_id(),
            amount_paise,
            redirect_url: redirect_url.into(),
            mobile_number: mobile_number.into(),
            created_at: Utc::now(),
        }
    }

    /// Builder: override the generated transaction id
    pub fn with_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.merchant_transaction_id = id.into();
        self
    }
}

/// The outcome of a successful payment initiation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRedirect {
    /// Our transaction id, echoed for correlation
    pub merchant_transaction_id: String,

    /// Provider name (e.g., "phonepe")
    pub provider: String,

    /// Hosted payment page to send the customer to
    pub redirect_url: String,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl PaymentRedirect {
    pub fn new(
        merchant_transaction_id: impl Into<String>,
        provider: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            merchant_transaction_id: merchant_transaction_id.into(),
            provider: provider.into(),
            redirect_url: redirect_url.into(),
            created_at: Utc::now(),
        }
    }
}
