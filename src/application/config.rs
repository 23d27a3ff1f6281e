//! # Merchant Configuration
//!
//! The merchant's app options, already parsed.
//!
//! The order platform stores configuration in two objects, `data` and
//! `hidden_data` (credentials live in the hidden one); the merged result
//! deserializes into [`MerchantConfig`]. Retrieval and storage of that
//! configuration belong to the hosting function, not to this crate.

use crate::domain::entities::offer::PostingDeadline;
use crate::domain::entities::shipping_rule::ShippingRule;
use crate::domain::value_objects::{Money, ServiceCode, ZipCode};
use crate::infrastructure::carrier::traits::CarrierCredentials;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Services quoted when the merchant configured none.
pub const DEFAULT_SERVICES: [&str; 2] = ["PAC", "SEDEX"];

/// One requested carrier service with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Carrier service code.
    pub service_name: ServiceCode,
    /// Storefront label; the raw code is shown when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Merchant-configured app options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MerchantConfig {
    /// Carrier platform id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandabem_id: Option<String>,
    /// Carrier platform key. Some installations store it as
    /// `mandabem_token`.
    #[serde(
        default,
        alias = "mandabem_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub mandabem_key: Option<String>,
    /// Merchant origin zip, used when the request carries no `from`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Ordered pricing rules; first match wins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_rules: Vec<ShippingRule>,
    /// Requested services, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceDescriptor>,
    /// Flat price adjustment: positive surcharge or negative discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_price: Option<Money>,
    /// Merchant posting commitment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_deadline: Option<PostingDeadline>,
    /// Global default for the free-shipping hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_shipping_from_value: Option<Money>,
    /// Disables webhook-driven tag creation.
    #[serde(default)]
    pub disable_auto_tag: bool,
}

impl MerchantConfig {
    /// Deserializes the merged `data`/`hidden_data` objects, hidden data
    /// winning on conflicts.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the merged object does not
    /// fit the configuration schema (for example an unknown unit tag in a
    /// rule amount).
    pub fn from_application_data(data: &Value, hidden_data: &Value) -> serde_json::Result<Self> {
        let mut merged = match data {
            Value::Object(map) => map.clone(),
            _ => serde_json::Map::new(),
        };
        if let Value::Object(hidden) = hidden_data {
            for (key, value) in hidden {
                merged.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(Value::Object(merged))
    }

    /// Returns the carrier credentials when both parts are configured.
    #[must_use]
    pub fn credentials(&self) -> Option<CarrierCredentials> {
        match (self.mandabem_id.as_deref(), self.mandabem_key.as_deref()) {
            (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => {
                Some(CarrierCredentials {
                    platform_id: id.to_string(),
                    platform_key: key.to_string(),
                })
            }
            _ => None,
        }
    }

    /// Returns the configured origin zip, normalized.
    #[must_use]
    pub fn origin_zip(&self) -> Option<ZipCode> {
        self.zip.as_deref().and_then(ZipCode::from_raw)
    }

    /// Returns the service codes to quote, in configured order, falling
    /// back to [`DEFAULT_SERVICES`].
    #[must_use]
    pub fn service_codes(&self) -> Vec<ServiceCode> {
        if self.services.is_empty() {
            DEFAULT_SERVICES.iter().copied().map(ServiceCode::from).collect()
        } else {
            self.services
                .iter()
                .map(|descriptor| descriptor.service_name.clone())
                .collect()
        }
    }

    /// Returns the display label for a service: the configured label, or
    /// the raw code.
    #[must_use]
    pub fn label_for(&self, service: &ServiceCode) -> String {
        self.services
            .iter()
            .find(|descriptor| &descriptor.service_name == service)
            .and_then(|descriptor| descriptor.label.clone())
            .unwrap_or_else(|| service.as_str().to_string())
    }

    /// Returns the posting deadline, defaulting to three days.
    #[must_use]
    pub fn posting_deadline(&self) -> PostingDeadline {
        self.posting_deadline.unwrap_or_default()
    }

    /// Returns the configured free-shipping seed, ignoring negative
    /// values.
    #[must_use]
    pub fn free_shipping_seed(&self) -> Option<Money> {
        self.free_shipping_from_value
            .filter(|value| !value.get().is_sign_negative())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hidden_data_wins_on_merge() {
        let data = json!({ "zip": "01310-100", "mandabem_id": "public" });
        let hidden = json!({ "mandabem_id": "merchant-1", "mandabem_key": "secret" });
        let config = MerchantConfig::from_application_data(&data, &hidden).unwrap();
        assert_eq!(config.mandabem_id.as_deref(), Some("merchant-1"));
        assert_eq!(config.zip.as_deref(), Some("01310-100"));
        assert!(config.credentials().is_some());
    }

    #[test]
    fn token_alias_is_accepted() {
        let hidden = json!({ "mandabem_id": "merchant-1", "mandabem_token": "secret" });
        let config = MerchantConfig::from_application_data(&json!({}), &hidden).unwrap();
        assert_eq!(config.mandabem_key.as_deref(), Some("secret"));
    }

    #[test]
    fn missing_credentials() {
        let config = MerchantConfig::default();
        assert!(config.credentials().is_none());

        let half = MerchantConfig {
            mandabem_id: Some("merchant-1".into()),
            ..MerchantConfig::default()
        };
        assert!(half.credentials().is_none());
    }

    #[test]
    fn default_services_when_unconfigured() {
        let config = MerchantConfig::default();
        let codes = config.service_codes();
        assert_eq!(codes, vec![ServiceCode::new("PAC"), ServiceCode::new("SEDEX")]);
    }

    #[test]
    fn label_falls_back_to_raw_code() {
        let config = MerchantConfig {
            services: vec![
                ServiceDescriptor {
                    service_name: ServiceCode::new("PAC"),
                    label: Some("Econ\u{f4}mico".into()),
                },
                ServiceDescriptor {
                    service_name: ServiceCode::new("SEDEX"),
                    label: None,
                },
            ],
            ..MerchantConfig::default()
        };
        assert_eq!(config.label_for(&ServiceCode::new("PAC")), "Econ\u{f4}mico");
        assert_eq!(config.label_for(&ServiceCode::new("SEDEX")), "SEDEX");
    }

    #[test]
    fn negative_free_shipping_seed_is_ignored() {
        let config = MerchantConfig {
            free_shipping_from_value: Some(Money::new(-1.0).unwrap()),
            ..MerchantConfig::default()
        };
        assert!(config.free_shipping_seed().is_none());
    }
}
