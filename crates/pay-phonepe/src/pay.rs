//! # PhonePe Pay Page
//!
//! Implementation of the PhonePe standard checkout (Pay Page) API.
//! This is the primary payment flow for phonepe-bridge.

use crate::checksum::compute_x_verify;
use crate::config::PhonePeConfig;
use crate::constants::{PAY_PAGE, PAY_PATH, REDIRECT_MODE_POST, X_VERIFY};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use pay_core::{PaymentError, PaymentGateway, PaymentIntent, PaymentRedirect, PaymentResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// PhonePe Pay Page gateway
///
/// Uses PhonePe's hosted payment page. The customer is redirected to
/// PhonePe and returned to the merchant's `redirectUrl` after payment.
pub struct PhonePeGateway {
    config: PhonePeConfig,
    client: Client,
}

impl PhonePeGateway {
    /// Create a new PhonePe gateway
    pub fn new(config: PhonePeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = PhonePeConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Build the pay request payload for an intent
    fn build_payload<'a>(&'a self, intent: &'a PaymentIntent) -> PhonePePayRequest<'a> {
        PhonePePayRequest {
            merchant_id: &self.config.merchant_id,
            merchant_transaction_id: &intent.merchant_transaction_id,
            amount: intent.amount_paise,
            redirect_url: &intent.redirect_url,
            redirect_mode: REDIRECT_MODE_POST,
            mobile_number: &intent.mobile_number,
            payment_instrument: PhonePeInstrument {
                instrument_type: PAY_PAGE,
            },
        }
    }
}

#[async_trait]
impl PaymentGateway for PhonePeGateway {
    #[instrument(skip(self, intent), fields(merchant_transaction_id = %intent.merchant_transaction_id))]
    async fn initiate_payment(&self, intent: &PaymentIntent) -> PaymentResult<PaymentRedirect> {
        let payload = self.build_payload(intent);
        let json_payload = serde_json::to_string(&payload)
            .map_err(|e| PaymentError::Serialization(e.to_string()))?;

        let base64_payload = BASE64.encode(&json_payload);
        let x_verify = compute_x_verify(
            &base64_payload,
            PAY_PATH,
            &self.config.salt_key,
            &self.config.salt_index,
        );

        let url = format!("{}{}", self.config.base_url, PAY_PATH);

        debug!(
            "Initiating PhonePe payment: amount_paise={}, url={}",
            intent.amount_paise, url
        );

        let response = self
            .client
            .post(&url)
            .header(X_VERIFY, &x_verify)
            .json(&PhonePePayEnvelope {
                request: base64_payload,
            })
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        // The redirect shape alone decides success; PhonePe returns
        // structured error bodies on non-2xx statuses too.
        let raw: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!("PhonePe returned a non-JSON body: status={}", status);
            PaymentError::Serialization(format!("Malformed gateway response: {}", e))
        })?;

        let parsed: PhonePePayResponse =
            serde_json::from_value(raw.clone()).unwrap_or_default();

        match parsed.redirect_url() {
            Some(redirect_url) => {
                info!(
                    "PhonePe pay page created: url={}, status={}",
                    redirect_url, status
                );
                Ok(PaymentRedirect::new(
                    intent.merchant_transaction_id.clone(),
                    self.provider_name(),
                    redirect_url,
                ))
            }
            None => {
                error!(
                    "PhonePe init failed: status={}, code={:?}",
                    status, parsed.code
                );
                Err(PaymentError::GatewayRejected { response: raw })
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "phonepe"
    }
}

// =============================================================================
// PhonePe API Types
// =============================================================================

/// Outer request body: the payload travels base64-encoded under `request`
#[derive(Debug, Serialize)]
struct PhonePePayEnvelope {
    request: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhonePePayRequest<'a> {
    merchant_id: &'a str,
    merchant_transaction_id: &'a str,
    amount: i64,
    redirect_url: &'a str,
    redirect_mode: &'static str,
    mobile_number: &'a str,
    payment_instrument: PhonePeInstrument,
}

#[derive(Debug, Serialize)]
struct PhonePeInstrument {
    #[serde(rename = "type")]
    instrument_type: &'static str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PhonePePayResponse {
    success: bool,
    code: Option<String>,
    message: Option<String>,
    data: Option<PhonePePayData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PhonePePayData {
    merchant_transaction_id: Option<String>,
    instrument_response: Option<PhonePeInstrumentResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PhonePeInstrumentResponse {
    #[serde(rename = "type")]
    instrument_type: Option<String>,
    redirect_info: Option<PhonePeRedirectInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PhonePeRedirectInfo {
    url: Option<String>,
    method: Option<String>,
}

impl PhonePePayResponse {
    /// The nested hosted-page URL, when the gateway accepted the request
    fn redirect_url(&self) -> Option<&str> {
        self.data
            .as_ref()?
            .instrument_response
            .as_ref()?
            .redirect_info
            .as_ref()?
            .url
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_gateway(base_url: &str) -> PhonePeGateway {
        let config =
            PhonePeConfig::new("MERCHANTUAT", "test-salt-key", "1").with_base_url(base_url);
        PhonePeGateway::new(config)
    }

    fn test_intent() -> PaymentIntent {
        PaymentIntent::new(50_000, "https://shop.example/return", "9999999999")
            .with_transaction_id("ORD1700000000000")
    }

    #[test]
    fn test_payload_serialization() {
        let gateway = test_gateway("http://unused");
        let intent = test_intent();
        let value = serde_json::to_value(gateway.build_payload(&intent)).unwrap();

        assert_eq!(value["merchantId"], "MERCHANTUAT");
        assert_eq!(value["merchantTransactionId"], "ORD1700000000000");
        assert_eq!(value["amount"], 50_000);
        assert_eq!(value["redirectUrl"], "https://shop.example/return");
        assert_eq!(value["redirectMode"], "POST");
        assert_eq!(value["mobileNumber"], "9999999999");
        assert_eq!(value["paymentInstrument"]["type"], "PAY_PAGE");
    }

    #[test]
    fn test_payload_field_order() {
        // The payload is signed over its exact byte sequence, so the
        // serialized field order is part of the wire contract.
        let gateway = test_gateway("http://unused");
        let intent = test_intent();
        let json = serde_json::to_string(&gateway.build_payload(&intent)).unwrap();

        let positions: Vec<usize> = [
            "merchantId",
            "merchantTransactionId",
            "amount",
            "redirectUrl",
            "redirectMode",
            "mobileNumber",
            "paymentInstrument",
        ]
        .iter()
        .map(|field| json.find(&format!("\"{}\"", field)).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_initiate_payment_redirects() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pg/v1/pay"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "code": "PAYMENT_INITIATED",
                "data": {
                    "merchantTransactionId": "ORD1700000000000",
                    "instrumentResponse": {
                        "type": "PAY_PAGE",
                        "redirectInfo": {
                            "url": "https://pay.example/x",
                            "method": "GET"
                        }
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = test_gateway(&server.uri());
        let redirect = gateway.initiate_payment(&test_intent()).await.unwrap();

        assert_eq!(redirect.redirect_url, "https://pay.example/x");
        assert_eq!(redirect.provider, "phonepe");
        assert_eq!(redirect.merchant_transaction_id, "ORD1700000000000");
    }

    #[tokio::test]
    async fn test_request_is_signed_and_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pg/v1/pay"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "instrumentResponse": { "redirectInfo": { "url": "https://pay.example/x" } }
                }
            })))
            .mount(&server)
            .await;

        let gateway = test_gateway(&server.uri());
        gateway.initiate_payment(&test_intent()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];

        // Body is {"request": "<base64>"} and decodes back to the payload
        let envelope: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        let base64_payload = envelope["request"].as_str().unwrap();
        let decoded = BASE64.decode(base64_payload).unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&decoded).unwrap();

        assert_eq!(payload["merchantId"], "MERCHANTUAT");
        assert_eq!(payload["amount"], 50_000);
        assert_eq!(payload["redirectMode"], "POST");
        assert_eq!(payload["paymentInstrument"]["type"], "PAY_PAGE");

        // X-VERIFY matches the checksum recomputed over the same payload
        let x_verify = request.headers.get(X_VERIFY).unwrap().to_str().unwrap();
        assert_eq!(
            x_verify,
            compute_x_verify(base64_payload, PAY_PATH, "test-salt-key", "1")
        );
    }

    #[tokio::test]
    async fn test_missing_redirect_shape_is_rejected() {
        let server = MockServer::start().await;

        let error_body = json!({
            "success": false,
            "code": "KEY_NOT_CONFIGURED",
            "message": "Key not found for the merchant"
        });

        Mock::given(method("POST"))
            .and(path("/pg/v1/pay"))
            .respond_with(ResponseTemplate::new(200).set_body_json(error_body.clone()))
            .mount(&server)
            .await;

        let gateway = test_gateway(&server.uri());
        let err = gateway.initiate_payment(&test_intent()).await.unwrap_err();

        match err {
            PaymentError::GatewayRejected { response } => {
                assert_eq!(response, error_body);
            }
            other => panic!("expected GatewayRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_serialization_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pg/v1/pay"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let gateway = test_gateway(&server.uri());
        let err = gateway.initiate_payment(&test_intent()).await.unwrap_err();

        assert!(matches!(err, PaymentError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_connect_failure_is_a_network_error() {
        // Nothing listens on this port
        let gateway = test_gateway("http://127.0.0.1:9");
        let err = gateway.initiate_payment(&test_intent()).await.unwrap_err();

        assert!(matches!(err, PaymentError::Network(_)));
    }
}
