//! # Request Handlers
//!
//! Axum request handlers for the payment bridge.
//! The create-payment flow is linear: validate, build the intent,
//! initiate with the gateway, then redirect or surface the failure.

use crate::extract::JsonOrForm;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pay_core::{PaymentError, PaymentIntent, RupeeAmount, DEFAULT_MOBILE_NUMBER};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// Error body returned when either required field is absent
const MISSING_FIELDS_ERROR: &str = "amountINR and redirectUrl required";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create payment request (JSON or form-encoded)
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    /// Product label (informational only, never sent to the gateway)
    #[serde(default)]
    pub product: Option<String>,

    /// Rupee amount, as a number or a string
    #[serde(default, rename = "amountINR")]
    pub amount_inr: Option<RupeeAmount>,

    /// Customer name (informational only)
    #[serde(default, rename = "customerName")]
    pub customer_name: Option<String>,

    /// Customer mobile number; a placeholder is substituted when absent
    #[serde(default)]
    pub phone: Option<String>,

    /// Customer email (informational only)
    #[serde(default)]
    pub email: Option<String>,

    /// Where the gateway sends the customer after payment
    #[serde(default, rename = "redirectUrl")]
    pub redirect_url: Option<String>,
}

/// Error response body: `{ "error": ..., "details": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

fn payment_error_response(err: PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = match err {
        PaymentError::InvalidRequest(message) => ErrorResponse::new(message),
        PaymentError::GatewayRejected { response } => {
            ErrorResponse::new("PhonePe init failed").with_details(response)
        }
        other => ErrorResponse::new("Server crash")
            .with_details(serde_json::Value::String(other.to_string())),
    };

    (status, Json(body))
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness line at the root path
pub async fn root() -> impl IntoResponse {
    "PhonePe Payment Gateway Server Running"
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "phonepe-bridge",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a payment and redirect the customer to the hosted pay page
#[instrument(skip(state, request), fields(product = ?request.product))]
pub async fn create_payment(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreatePaymentRequest>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let amount = request.amount_inr.as_ref().filter(|a| !a.is_missing());
    let redirect_url = request
        .redirect_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());

    let (Some(amount), Some(redirect_url)) = (amount, redirect_url) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(MISSING_FIELDS_ERROR)),
        ));
    };

    let amount_paise = amount.to_paise().map_err(payment_error_response)?;

    let mobile_number = request
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_MOBILE_NUMBER);

    let intent = PaymentIntent::new(amount_paise, redirect_url, mobile_number);

    info!(
        "Initiating payment: txn={}, amount_paise={}, customer={:?}",
        intent.merchant_transaction_id, intent.amount_paise, request.customer_name
    );

    let redirect = state
        .gateway
        .initiate_payment(&intent)
        .await
        .map_err(|e| {
            error!("Payment initiation failed: {}", e);
            payment_error_response(e)
        })?;

    info!(
        "Redirecting customer: txn={}, provider={}",
        redirect.merchant_transaction_id, redirect.provider
    );

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, redirect.redirect_url)],
    )
        .into_response())
}
