//! # Cart
//!
//! Cart items and the aggregated metrics sent to the carrier.
//!
//! The carrier prices a whole cart as a single parcel: one declared
//! (insured) value and one billable weight. The billable weight of each
//! item is the greater of its physical and cubic weight, multiplied by its
//! quantity; see [`Dimensions::cubic_weight_kg`] for the volumetric
//! formula.
//!
//! # Examples
//!
//! ```
//! use mandabem_bridge::domain::entities::cart::{CartItem, CartMetrics};
//! use mandabem_bridge::domain::value_objects::{Money, Weight};
//!
//! let items = vec![CartItem {
//!     price: Money::new(59.9).unwrap(),
//!     quantity: 2,
//!     weight: Some(Weight::kilograms(1.0)),
//!     dimensions: None,
//! }];
//! let metrics = CartMetrics::aggregate(&items, None);
//! assert_eq!(metrics.declared_value(), Money::new(119.8).unwrap());
//! ```

use crate::domain::value_objects::{Dimensions, Money, Weight};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum declared value accepted by the carrier, in currency units.
const MAX_DECLARED_VALUE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// One line of the buyer's cart. Immutable input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unit price.
    pub price: Money,
    /// Number of units.
    pub quantity: u32,
    /// Declared physical weight of one unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    /// Declared dimensions of one unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

/// Aggregated cart metrics: what the carrier is actually asked to price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartMetrics {
    /// Insured value, capped at the carrier ceiling.
    declared_value: Money,
    /// Billable weight in kilograms.
    weight_kg: f64,
}

impl CartMetrics {
    /// Aggregates a cart into one declared value and one billable weight.
    ///
    /// The declared value is the order subtotal when the platform sends
    /// one, otherwise the sum of unit price times quantity, and is capped
    /// at the carrier's insurance ceiling either way. Each item
    /// contributes `quantity x max(physical weight, cubic weight)` to the
    /// billable weight; an item without weight or dimensions falls back to
    /// the carrier's one kilogram minimum per unit.
    #[must_use]
    pub fn aggregate(items: &[CartItem], subtotal: Option<Money>) -> Self {
        let declared = subtotal.unwrap_or_else(|| {
            items
                .iter()
                .fold(Money::zero(), |sum, item| {
                    sum.add(item.price.times(item.quantity))
                })
        });

        let weight_kg = items
            .iter()
            .map(|item| {
                let physical = item.weight.map_or(0.0, |w| w.to_kilograms());
                let cubic = item
                    .dimensions
                    .map_or(1.0, |dims| dims.cubic_weight_kg());
                f64::from(item.quantity) * physical.max(cubic)
            })
            .sum();

        Self {
            declared_value: declared.capped(Money::from_decimal(MAX_DECLARED_VALUE)),
            weight_kg,
        }
    }

    /// Returns the capped declared (insured) value.
    #[inline]
    #[must_use]
    pub fn declared_value(&self) -> Money {
        self.declared_value
    }

    /// Returns the billable weight in kilograms.
    #[inline]
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}
