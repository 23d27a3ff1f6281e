//! # API Boundary Types
//!
//! The JSON shapes exchanged with the order platform.
//!
//! Routing and request framing belong to the hosting function; this
//! module only fixes the wire shapes: the calculate-shipping request
//! envelope, the error response body, and the webhook echo strings.

use crate::application::config::MerchantConfig;
use crate::application::error::{CalculateError, WebhookError};
use crate::application::services::rate_engine::CalculateParams;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Webhook echo for a processed trigger.
pub const ECHO_SUCCESS: &str = "SUCCESS";
/// Webhook echo for an ignored trigger.
pub const ECHO_SKIP: &str = "SKIP";

/// The app installation payload sent along with every module request.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ApplicationPayload {
    /// Public app options.
    #[serde(default)]
    pub data: Value,
    /// Merchant-only app options (credentials live here).
    #[serde(default)]
    pub hidden_data: Value,
}

impl ApplicationPayload {
    /// Parses the merged app options into a [`MerchantConfig`].
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the merged options do not fit
    /// the configuration schema.
    pub fn merchant_config(&self) -> serde_json::Result<MerchantConfig> {
        MerchantConfig::from_application_data(&self.data, &self.hidden_data)
    }
}

/// One calculate-shipping module request.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CalculateRequest {
    /// Cart, addresses and subtotal.
    #[serde(default)]
    pub params: CalculateParams,
    /// App installation payload.
    #[serde(default)]
    pub application: ApplicationPayload,
}

/// Error body of a terminal failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Platform error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl From<&CalculateError> for ErrorResponse {
    fn from(error: &CalculateError) -> Self {
        Self {
            error: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&WebhookError> for ErrorResponse {
    fn from(error: &WebhookError) -> Self {
        Self {
            error: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn calculate_request_deserializes_platform_payload() {
        let request: CalculateRequest = serde_json::from_value(json!({
            "params": {
                "to": { "zip": "01310-100" },
                "items": [
                    { "price": 59.9, "quantity": 2, "weight": { "value": 1, "unit": "kg" } }
                ],
                "subtotal": 119.8
            },
            "application": {
                "data": { "zip": "35700-000" },
                "hidden_data": { "mandabem_id": "m1", "mandabem_key": "k1" }
            }
        }))
        .unwrap();

        assert_eq!(request.params.items.len(), 1);
        let config = request.application.merchant_config().unwrap();
        assert!(config.credentials().is_some());
        assert_eq!(config.zip.as_deref(), Some("35700-000"));
    }

    #[test]
    fn error_response_from_calculate_error() {
        let response = ErrorResponse::from(&CalculateError::EmptyCart);
        assert_eq!(response.error, "CALCULATE_EMPTY_CART");
        assert_eq!(response.message, "Cannot calculate shipping without cart items");
    }

    #[test]
    fn error_response_from_webhook_error() {
        let response = ErrorResponse::from(&WebhookError::platform("boom"));
        assert_eq!(response.error, "STORE_API_ERR");
        assert_eq!(response.message, "boom");
    }
}
