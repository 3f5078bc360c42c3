//! # pay-phonepe
//!
//! PhonePe payment gateway connector for phonepe-bridge-rs.
//!
//! The gateway wraps PhonePe's standard checkout (Pay Page) API:
//! the pay payload is serialized to JSON, base64-encoded, signed with
//! an `X-VERIFY` checksum, and POSTed to `/pg/v1/pay`. A successful
//! response carries the hosted payment page URL to redirect the
//! customer to.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_phonepe::PhonePeGateway;
//! use pay_core::{PaymentGateway, PaymentIntent};
//!
//! // Create gateway from environment (MERCHANT_ID, SALT_KEY, ...)
//! let gateway = PhonePeGateway::from_env()?;
//!
//! // Initiate a payment
//! let redirect = gateway.initiate_payment(&intent).await?;
//!
//! // Redirect the customer to redirect.redirect_url
//! ```

pub mod checksum;
pub mod config;
pub mod constants;
pub mod pay;

// Re-exports
pub use checksum::compute_x_verify;
pub use config::PhonePeConfig;
pub use pay::PhonePeGateway;
