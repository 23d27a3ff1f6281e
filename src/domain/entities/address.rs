//! # Address
//!
//! Postal address as exchanged with the order platform.
//!
//! Addresses pass through the bridge mostly untouched; only the zip code is
//! normalized before use. All other fields exist for label creation, where
//! the carrier wants the recipient spelled out.

use crate::domain::value_objects::ZipCode;
use serde::{Deserialize, Serialize};

/// A buyer or merchant address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    /// Raw postal code as received (any format).
    pub zip: String,
    /// Addressee name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Street name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Street number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Address complement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    /// City name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Province/state name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Two-letter province/state code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
}

impl Address {
    /// Creates an address carrying only a zip code.
    #[must_use]
    pub fn with_zip(zip: impl Into<String>) -> Self {
        Self {
            zip: zip.into(),
            ..Self::default()
        }
    }

    /// Returns the normalized postal code, if the raw zip holds any digits.
    #[must_use]
    pub fn zip_code(&self) -> Option<ZipCode> {
        ZipCode::from_raw(&self.zip)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zip_code_normalizes() {
        let address = Address::with_zip("01310-100");
        assert_eq!(address.zip_code().unwrap().as_str(), "01310100");
    }

    #[test]
    fn zip_code_absent_when_digitless() {
        let address = Address::with_zip("");
        assert!(address.zip_code().is_none());
    }

    #[test]
    fn deserializes_platform_shape() {
        let address: Address = serde_json::from_str(
            r#"{
                "zip": "35700-000",
                "name": "Maria Silva",
                "street": "Rua Padre Marinho",
                "number": 23,
                "city": "Sete Lagoas",
                "province_code": "MG"
            }"#,
        )
        .unwrap();
        assert_eq!(address.number, Some(23));
        assert_eq!(address.province_code.as_deref(), Some("MG"));
    }
}
