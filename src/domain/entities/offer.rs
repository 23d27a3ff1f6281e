//! # Shipping Offers
//!
//! Priced shipping-service offers returned to the order platform.
//!
//! A [`ShippingOffer`] wraps one [`ShippingLine`]: the platform's own
//! shipping-line object with addresses, prices, discount, delivery
//! estimate and package weight. Discount and surcharge application lives
//! here so the rate engine only decides *which* adjustments apply.

use crate::domain::entities::address::Address;
use crate::domain::value_objects::{Money, ServiceCode, Weight};
use serde::{Deserialize, Serialize};

/// Carrier display name attached to every offer.
pub const CARRIER_NAME: &str = "Correios (Manda Bem)";

/// Tag marking shipping lines quoted through the Manda Bem WS.
pub const SHIPPING_LINE_FLAG: &str = "mandabem-ws";

/// Default posting deadline in business days.
pub const DEFAULT_POSTING_DAYS: u32 = 3;

/// Estimated delivery time for an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTime {
    /// Days until delivery.
    pub days: u32,
    /// Whether `days` counts business days only.
    #[serde(default = "default_true")]
    pub working_days: bool,
}

/// Days the merchant commits to hand the parcel to the carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingDeadline {
    /// Business days after sale.
    pub days: u32,
}

impl Default for PostingDeadline {
    fn default() -> Self {
        Self {
            days: DEFAULT_POSTING_DAYS,
        }
    }
}

/// Package info attached to a shipping line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Billable package weight.
    pub weight: Weight,
}

/// A labelled extra charge on a shipping line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Additional {
    /// Machine tag.
    pub tag: String,
    /// Display label.
    pub label: String,
    /// Charged amount.
    pub price: Money,
}

/// The platform's shipping-line object for one priced offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingLine {
    /// Origin address (merchant).
    pub from: Address,
    /// Destination address (buyer).
    pub to: Address,
    /// Carrier price before adjustments.
    pub price: Money,
    /// Insured value submitted to the carrier.
    pub declared_value: Money,
    /// Accumulated discount for display.
    pub discount: Money,
    /// Final price after discounts and surcharges. Never negative.
    pub total_price: Money,
    /// Delivery estimate.
    pub delivery_time: DeliveryTime,
    /// Merchant posting commitment.
    pub posting_deadline: PostingDeadline,
    /// Package weight info.
    pub package: Package,
    /// Origin tags; always carries [`SHIPPING_LINE_FLAG`].
    pub flags: Vec<String>,
    /// Extra labelled charges (flat surcharge).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_additionals: Vec<Additional>,
}

impl ShippingLine {
    /// Absorbs the full total into the discount: free shipping.
    pub fn make_free(&mut self) {
        self.discount = self.discount.add(self.total_price);
        self.total_price = Money::zero();
    }

    /// Applies a discount amount, flooring the total at zero.
    pub fn apply_discount(&mut self, amount: Money) {
        self.discount = self.discount.add(amount);
        self.total_price = self.total_price.saturating_sub(amount);
    }

    /// Applies the merchant's flat additional price.
    ///
    /// A positive amount is a labelled surcharge; a negative amount is a
    /// discount. Either way the total is adjusted by the signed amount and
    /// floored at zero.
    pub fn apply_flat_adjustment(&mut self, amount: Money) {
        if amount.is_positive() {
            self.other_additionals.push(Additional {
                tag: "additional_price".into(),
                label: "Adicional padr\u{e3}o".into(),
                price: amount,
            });
        } else {
            // negative flat price surfaces as discount
            self.discount = self.discount.saturating_sub(amount);
        }
        self.total_price =
            Money::from_decimal(self.total_price.get() + amount.get()).clamped_at_zero();
    }
}

/// One priced shipping-service offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingOffer {
    /// Display label (merchant-configured or the raw service code).
    pub label: String,
    /// Carrier display name.
    pub carrier: String,
    /// Carrier service code.
    pub service_name: ServiceCode,
    /// The priced shipping line.
    pub shipping_line: ShippingLine,
}

fn default_true() -> bool {
    true
}
