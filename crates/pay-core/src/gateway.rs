//! # Payment Gateway Trait
//!
//! The seam between the HTTP layer and a concrete payment provider.
//! The bridge ships with a single PhonePe implementation, but the API
//! layer only ever sees this trait, which keeps handlers testable with
//! an in-process mock.

use crate::error::PaymentResult;
use crate::payment::{PaymentIntent, PaymentRedirect};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Initiate a payment and return the hosted-page redirect.
    ///
    /// # Arguments
    /// * `intent` - The validated payment attempt
    ///
    /// # Returns
    /// A `PaymentRedirect` carrying the URL to send the customer to.
    async fn initiate_payment(&self, intent: &PaymentIntent) -> PaymentResult<PaymentRedirect>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
