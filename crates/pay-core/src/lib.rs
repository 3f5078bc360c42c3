//! # pay-core
//!
//! Core types and traits for the phonepe-bridge payment engine.
//!
//! This crate provides:
//! - `PaymentGateway` trait for implementing payment providers
//! - `RupeeAmount` for inbound amount parsing and paise conversion
//! - `PaymentIntent` and `PaymentRedirect` for the initiation flow
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{PaymentIntent, RupeeAmount, PaymentGateway, DEFAULT_MOBILE_NUMBER};
//!
//! // Convert the caller's rupee amount to paise
//! let amount_paise = RupeeAmount::Number(500).to_paise()?;
//!
//! // Build the intent (generates an ORD<millis> transaction id)
//! let intent = PaymentIntent::new(amount_paise, "https://shop.example/return", DEFAULT_MOBILE_NUMBER);
//!
//! // Initiate via a gateway implementation
//! let redirect = gateway.initiate_payment(&intent).await?;
//!
//! // Send the customer to redirect.redirect_url
//! ```

pub mod error;
pub mod gateway;
pub mod payment;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use payment::{
    generate_merchant_transaction_id, PaymentIntent, PaymentRedirect, RupeeAmount,
    DEFAULT_MOBILE_NUMBER, ORDER_ID_PREFIX,
};
