//! # Weight
//!
//! Physical weight with unit normalization.
//!
//! Cart items declare weight in kilograms, grams or milligrams; the carrier
//! wants kilograms. Unknown unit tags are rejected at deserialization time
//! rather than silently contributing zero.
//!
//! # Examples
//!
//! ```
//! use mandabem_bridge::domain::value_objects::{Weight, WeightUnit};
//!
//! let weight = Weight::new(500.0, WeightUnit::Grams);
//! assert!((weight.to_kilograms() - 0.5).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit tag for a declared weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Kilograms (canonical unit).
    #[serde(rename = "kg")]
    Kilograms,
    /// Grams.
    #[serde(rename = "g")]
    Grams,
    /// Milligrams.
    #[serde(rename = "mg")]
    Milligrams,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kilograms => write!(f, "kg"),
            Self::Grams => write!(f, "g"),
            Self::Milligrams => write!(f, "mg"),
        }
    }
}

/// A declared physical weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// Magnitude in the declared unit.
    pub value: f64,
    /// The declared unit.
    pub unit: WeightUnit,
}

impl Weight {
    /// Creates a weight from a value and unit.
    #[must_use]
    pub const fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a weight already expressed in kilograms.
    #[must_use]
    pub const fn kilograms(value: f64) -> Self {
        Self::new(value, WeightUnit::Kilograms)
    }

    /// Converts to the canonical unit (kilograms).
    ///
    /// Negative magnitudes normalize to zero; an item cannot subtract
    /// weight from the cart.
    #[must_use]
    pub fn to_kilograms(&self) -> f64 {
        let kg = match self.unit {
            WeightUnit::Kilograms => self.value,
            WeightUnit::Grams => self.value / 1_000.0,
            WeightUnit::Milligrams => self.value / 1_000_000.0,
        };
        kg.max(0.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
