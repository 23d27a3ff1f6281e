//! # Zip Codes
//!
//! Postal code normalization and inclusive zip ranges.
//!
//! Brazilian CEPs arrive in mixed formats (`"01310-100"`, `"01310100"`);
//! everything that is not a digit is stripped before comparison. Merchant
//! rules restrict themselves to destinations inside an inclusive
//! [`ZipRange`], where an absent bound imposes no constraint on that side.
//!
//! # Examples
//!
//! ```
//! use mandabem_bridge::domain::value_objects::{ZipCode, ZipRange};
//!
//! let zip = ZipCode::from_raw("01310-100").unwrap();
//! assert_eq!(zip.as_str(), "01310100");
//!
//! let range = ZipRange {
//!     min: Some("01000000".into()),
//!     max: Some("05999999".into()),
//! };
//! assert!(range.contains(&zip));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A digits-only normalized postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    /// Normalizes a raw postal code, keeping only digits.
    ///
    /// Returns `None` when no digits remain; an all-punctuation zip is the
    /// same as no zip at all.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            None
        } else {
            Some(Self(digits))
        }
    }

    /// Returns the normalized digit string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive postal-code interval attached to a shipping rule.
///
/// Bounds are compared as digit strings; CEPs are fixed-width so the
/// lexicographic order matches the numeric one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZipRange {
    /// Lower bound, inclusive. Absent means unbounded below.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    /// Upper bound, inclusive. Absent means unbounded above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl ZipRange {
    /// Returns true if `zip` falls inside the range.
    #[must_use]
    pub fn contains(&self, zip: &ZipCode) -> bool {
        let above_min = self
            .min
            .as_deref()
            .is_none_or(|min| zip.as_str() >= min);
        let below_max = self
            .max
            .as_deref()
            .is_none_or(|max| zip.as_str() <= max);
        above_min && below_max
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_strips_non_digits() {
        let zip = ZipCode::from_raw("01310-100").unwrap();
        assert_eq!(zip.as_str(), "01310100");
    }

    #[test]
    fn from_raw_rejects_digitless_input() {
        assert!(ZipCode::from_raw("").is_none());
        assert!(ZipCode::from_raw("---").is_none());
    }

    #[test]
    fn contains_inclusive_bounds() {
        let range = ZipRange {
            min: Some("01000000".into()),
            max: Some("01999999".into()),
        };
        assert!(range.contains(&ZipCode::from_raw("01000000").unwrap()));
        assert!(range.contains(&ZipCode::from_raw("01999999").unwrap()));
        assert!(!range.contains(&ZipCode::from_raw("02000000").unwrap()));
    }

    #[test]
    fn absent_bound_imposes_no_constraint() {
        let open_below = ZipRange {
            min: None,
            max: Some("50000000".into()),
        };
        assert!(open_below.contains(&ZipCode::from_raw("00000001").unwrap()));

        let open_above = ZipRange {
            min: Some("50000000".into()),
            max: None,
        };
        assert!(open_above.contains(&ZipCode::from_raw("99999999").unwrap()));
    }

    #[test]
    fn empty_range_matches_everything() {
        let range = ZipRange::default();
        assert!(range.contains(&ZipCode::from_raw("12345678").unwrap()));
    }
}
