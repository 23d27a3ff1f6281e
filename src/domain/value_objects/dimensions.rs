//! # Dimensions
//!
//! Parcel dimensions and the carrier's cubic weight formula.
//!
//! Correios charges bulky-but-light parcels by a volumetric proxy weight:
//! the product of a parcel's sides in centimeters divided by 6000. An item's
//! billable weight is the greater of its physical and cubic weight.
//!
//! # Examples
//!
//! ```
//! use mandabem_bridge::domain::value_objects::{Dimension, Dimensions, LengthUnit};
//!
//! let dims = Dimensions {
//!     height: Some(Dimension::new(20.0, LengthUnit::Centimeters)),
//!     width: Some(Dimension::new(20.0, LengthUnit::Centimeters)),
//!     length: Some(Dimension::new(20.0, LengthUnit::Centimeters)),
//! };
//! // 20 * 20 * 20 / 6000
//! assert!((dims.cubic_weight_kg() - 8000.0 / 6000.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Correios volumetric divisor: (height x width x length) / 6000.
const CUBIC_DIVISOR: f64 = 6000.0;

/// Unit tag for a declared dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Centimeters (canonical unit).
    #[serde(rename = "cm")]
    Centimeters,
    /// Meters.
    #[serde(rename = "m")]
    Meters,
    /// Millimeters.
    #[serde(rename = "mm")]
    Millimeters,
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Centimeters => write!(f, "cm"),
            Self::Meters => write!(f, "m"),
            Self::Millimeters => write!(f, "mm"),
        }
    }
}

/// One side of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Magnitude in the declared unit.
    pub value: f64,
    /// The declared unit.
    pub unit: LengthUnit,
}

impl Dimension {
    /// Creates a dimension from a value and unit.
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Converts to the canonical unit (centimeters).
    #[must_use]
    pub fn to_centimeters(&self) -> f64 {
        match self.unit {
            LengthUnit::Centimeters => self.value,
            LengthUnit::Meters => self.value * 100.0,
            LengthUnit::Millimeters => self.value / 10.0,
        }
    }
}

/// Declared parcel dimensions of a single cart item.
///
/// Every side is optional; absent or zero sides simply do not enter the
/// cubic product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Parcel height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Parcel width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Parcel length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<Dimension>,
}

impl Dimensions {
    /// Computes this item's cubic (volumetric) weight in kilograms.
    ///
    /// The product of the present, positive sides (normalized to
    /// centimeters) is divided by the carrier divisor only when it exceeds
    /// one, so a degenerate or missing side never divides a nonzero weight
    /// down. With no usable side the cubic weight is the carrier's one
    /// kilogram floor.
    #[must_use]
    pub fn cubic_weight_kg(&self) -> f64 {
        let mut product = 1.0;
        for side in [self.height, self.width, self.length].into_iter().flatten() {
            let centimeters = side.to_centimeters();
            if centimeters > 0.0 {
                product *= centimeters;
            }
        }

        if product > 1.0 {
            product / CUBIC_DIVISOR
        } else {
            product
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cm(value: f64) -> Option<Dimension> {
        Some(Dimension::new(value, LengthUnit::Centimeters))
    }

    #[test]
    fn cubic_weight_divides_by_6000() {
        let dims = Dimensions {
            height: cm(20.0),
            width: cm(20.0),
            length: cm(20.0),
        };
        assert!((dims.cubic_weight_kg() - 8000.0 / 6000.0).abs() < 1e-9);
    }

    #[test]
    fn mixed_units_normalize_to_centimeters() {
        let dims = Dimensions {
            height: Some(Dimension::new(0.2, LengthUnit::Meters)),
            width: Some(Dimension::new(200.0, LengthUnit::Millimeters)),
            length: cm(20.0),
        };
        assert!((dims.cubic_weight_kg() - 8000.0 / 6000.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_product_is_not_divided() {
        // A single half-centimeter side keeps the product at 0.5, below the
        // division threshold.
        let dims = Dimensions {
            height: cm(0.5),
            width: None,
            length: None,
        };
        assert!((dims.cubic_weight_kg() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn absent_sides_floor_at_one_kilogram() {
        let dims = Dimensions::default();
        assert!((dims.cubic_weight_kg() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_sides_are_skipped() {
        let dims = Dimensions {
            height: cm(0.0),
            width: cm(30.0),
            length: cm(40.0),
        };
        // 30 * 40 = 1200, over the threshold
        assert!((dims.cubic_weight_kg() - 1200.0 / 6000.0).abs() < 1e-9);
    }
}
