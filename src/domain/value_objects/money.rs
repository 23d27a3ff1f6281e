//! # Money
//!
//! Decimal monetary amount with clamped arithmetic.
//!
//! All prices, discounts and declared values in the bridge are carried as
//! [`Money`]. Subtraction saturates at zero because a shipping line's
//! `total_price` must never go negative, and declared values are capped at
//! the carrier's insurance ceiling via [`Money::capped`].
//!
//! # Examples
//!
//! ```
//! use mandabem_bridge::domain::value_objects::Money;
//!
//! let price = Money::new(20.0).unwrap();
//! let discount = Money::new(25.0).unwrap();
//! assert_eq!(price.saturating_sub(discount), Money::zero());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative-by-construction-friendly monetary amount.
///
/// Wraps [`Decimal`] so that currency math never goes through binary
/// floating point. Negative amounts are representable (the merchant's flat
/// `additional_price` may be a discount), but the clamping helpers keep
/// derived totals at zero or above.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a monetary amount from a float.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the value is not a finite
    /// number representable as a decimal.
    pub fn new(value: f64) -> DomainResult<Self> {
        Decimal::from_f64(value)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_amount(format!("not a finite amount: {value}")))
    }

    /// Creates a monetary amount from a decimal.
    #[inline]
    #[must_use]
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// The zero amount.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the inner decimal value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Adds another amount.
    #[inline]
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }

    /// Subtracts another amount, flooring the result at zero.
    #[inline]
    #[must_use]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        let result = self.0 - rhs.0;
        if result.is_sign_negative() {
            Self::zero()
        } else {
            Self(result)
        }
    }

    /// Multiplies by a quantity.
    #[inline]
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Returns `percentage` percent of this amount.
    ///
    /// Used for percentage discount rules, where the configured value is a
    /// percent of the current total price.
    #[inline]
    #[must_use]
    pub fn percent(self, percentage: Decimal) -> Self {
        Self(self.0 * percentage / Decimal::ONE_HUNDRED)
    }

    /// Caps the amount at `max`.
    #[inline]
    #[must_use]
    pub fn capped(self, max: Self) -> Self {
        if self > max {
            max
        } else {
            self
        }
    }

    /// Clamps a possibly-negative amount to zero.
    #[inline]
    #[must_use]
    pub fn clamped_at_zero(self) -> Self {
        if self.0.is_sign_negative() {
            Self::zero()
        } else {
            self
        }
    }

    /// Rounds to two decimal places, as the carrier wire format expects.
    #[inline]
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(self.0.round_dp(2))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}
