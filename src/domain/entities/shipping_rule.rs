//! # Shipping Rules
//!
//! Merchant-configured pricing rules.
//!
//! Rules are evaluated in declaration order and the first matching rule
//! wins; the scan for a priced offer stops there. A rule matches an offer
//! when its service restriction, zip range and minimum-amount threshold
//! all hold.

use crate::domain::value_objects::{Money, ServiceCode, ZipCode, ZipRange};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A configured discount: flat amount or percent of the current total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountSpec {
    /// Flat amount, or percentage when `percentage` is set.
    pub value: Decimal,
    /// Interpret `value` as percent of the current total price.
    #[serde(default)]
    pub percentage: bool,
}

impl DiscountSpec {
    /// Computes the discount amount against the current total price.
    #[must_use]
    pub fn amount_for(&self, total_price: Money) -> Money {
        if self.percentage {
            total_price.percent(self.value)
        } else {
            Money::from_decimal(self.value)
        }
    }
}

/// One merchant shipping rule.
///
/// All predicates are optional; an empty rule matches everything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShippingRule {
    /// Restricts the rule to one carrier service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceCode>,
    /// Restricts the rule to destinations inside this range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_range: Option<ZipRange>,
    /// Grants free shipping when the rule matches.
    #[serde(default)]
    pub free_shipping: bool,
    /// Minimum insured value for the rule to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Money>,
    /// Discount applied when the rule matches and is not free shipping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountSpec>,
}

impl ShippingRule {
    /// Returns true if the rule's zip range accepts the destination.
    ///
    /// An unknown destination or a rule without a range always matches:
    /// the predicate is simply not applicable.
    #[must_use]
    pub fn matches_zip(&self, destination: Option<&ZipCode>) -> bool {
        match (destination, &self.zip_range) {
            (Some(zip), Some(range)) => range.contains(zip),
            _ => true,
        }
    }

    /// Returns true if the rule applies to a priced offer.
    ///
    /// The rule must be service-compatible, zip-compatible and its
    /// minimum-amount threshold (if any) must not exceed the insured
    /// value.
    #[must_use]
    pub fn applies_to(
        &self,
        service: &ServiceCode,
        destination: Option<&ZipCode>,
        declared_value: Money,
    ) -> bool {
        self.service.as_ref().is_none_or(|s| s == service)
            && self.matches_zip(destination)
            && self.min_amount.is_none_or(|min| min <= declared_value)
    }
}
