//! # Orders
//!
//! The slice of the platform's order document used for label creation.
//!
//! Only the fields the carrier tag request needs are modelled; everything
//! else in the platform's order schema is ignored on deserialization.

use crate::domain::entities::address::Address;
use crate::domain::entities::offer::Package;
use crate::domain::value_objects::{Money, ServiceCode};
use serde::{Deserialize, Serialize};

/// Fulfillment status ready to receive a shipping tag.
pub const READY_FOR_SHIPPING: &str = "ready_for_shipping";

/// One purchased item, as listed on the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product name.
    pub name: String,
    /// Purchased quantity.
    pub quantity: u32,
    /// Catalog price.
    pub price: Money,
    /// Price actually paid, when it differs from the catalog price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_price: Option<Money>,
}

impl OrderItem {
    /// Returns the price actually paid.
    #[must_use]
    pub fn effective_price(&self) -> Money {
        self.final_price.unwrap_or(self.price)
    }
}

/// Order buyer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Buyer {
    /// `"p"` for a natural person, `"j"` for a company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_type: Option<String>,
    /// CPF/CNPJ document number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,
}

impl Buyer {
    /// Returns the buyer's CPF digits when the buyer is a natural person.
    #[must_use]
    pub fn cpf_digits(&self) -> Option<String> {
        if self.registry_type.as_deref() != Some("p") {
            return None;
        }
        let digits: String = self
            .doc_number
            .as_deref()?
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(digits)
        }
    }
}

/// App-specific data attached to an order shipping line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingLineApp {
    /// The quoted carrier service.
    pub service_name: ServiceCode,
}

/// A shipping line as stored on a placed order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderShippingLine {
    /// App data; absent when another shipping app quoted the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<ShippingLineApp>,
    /// Destination address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// Origin address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Package weight info.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<Package>,
    /// Insured value from the original quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_value: Option<Money>,
}

/// Current fulfillment status of an order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FulfillmentStatus {
    /// Latest status value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
}

impl FulfillmentStatus {
    /// Returns true if the order is ready to receive a shipping tag.
    #[must_use]
    pub fn is_ready_for_shipping(&self) -> bool {
        self.current.as_deref() == Some(READY_FOR_SHIPPING)
    }
}

/// A placed order, as read back from the platform.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    /// Platform document id.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-facing order number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    /// Purchased items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
    /// Buyers; the first one's document goes on the tag.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buyers: Vec<Buyer>,
    /// Shipping lines; one tag per line quoted by this app.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_lines: Vec<OrderShippingLine>,
    /// Current fulfillment status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,
}

impl Order {
    /// Returns the reference id sent to the carrier: order number, falling
    /// back to the document id.
    #[must_use]
    pub fn reference_id(&self) -> Option<String> {
        self.number
            .map(|n| n.to_string())
            .or_else(|| self.id.clone())
    }

    /// Returns true if the order is ready to receive a shipping tag.
    #[must_use]
    pub fn is_ready_for_shipping(&self) -> bool {
        self.fulfillment_status
            .as_ref()
            .is_some_and(FulfillmentStatus::is_ready_for_shipping)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn cpf_only_for_natural_person() {
        let person = Buyer {
            registry_type: Some("p".into()),
            doc_number: Some("123.456.789-09".into()),
        };
        assert_eq!(person.cpf_digits().as_deref(), Some("12345678909"));

        let company = Buyer {
            registry_type: Some("j".into()),
            doc_number: Some("12.345.678/0001-95".into()),
        };
        assert!(company.cpf_digits().is_none());
    }

    #[test]
    fn reference_id_prefers_order_number() {
        let order = Order {
            id: Some("abc123".into()),
            number: Some(1042),
            ..Order::default()
        };
        assert_eq!(order.reference_id().as_deref(), Some("1042"));

        let unnumbered = Order {
            id: Some("abc123".into()),
            ..Order::default()
        };
        assert_eq!(unnumbered.reference_id().as_deref(), Some("abc123"));
    }

    #[test]
    fn ready_for_shipping_status() {
        let order = Order {
            fulfillment_status: Some(FulfillmentStatus {
                current: Some(READY_FOR_SHIPPING.into()),
            }),
            ..Order::default()
        };
        assert!(order.is_ready_for_shipping());
        assert!(!Order::default().is_ready_for_shipping());
    }

    #[test]
    fn effective_price_prefers_final_price() {
        let item = OrderItem {
            name: "Mug".into(),
            quantity: 1,
            price: Money::new(30.0).unwrap(),
            final_price: Some(Money::new(25.0).unwrap()),
        };
        assert_eq!(item.effective_price(), Money::new(25.0).unwrap());
    }
}
