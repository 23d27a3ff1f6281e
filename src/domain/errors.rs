//! # Domain Errors
//!
//! Error types for domain-level validation.
//!
//! These errors represent violations of the shipping domain's invariants:
//! malformed monetary values, impossible weights or dimensions, and
//! inconsistent merchant rules.

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A monetary amount could not be represented.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A weight value is negative or not finite.
    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    /// A dimension value is negative or not finite.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A postal code contains no digits after normalization.
    #[error("invalid zip code: {0}")]
    InvalidZipCode(String),
}

impl DomainError {
    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Creates an invalid weight error.
    #[must_use]
    pub fn invalid_weight(message: impl Into<String>) -> Self {
        Self::InvalidWeight(message.into())
    }

    /// Creates an invalid dimension error.
    #[must_use]
    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self::InvalidDimension(message.into())
    }

    /// Creates an invalid zip code error.
    #[must_use]
    pub fn invalid_zip_code(message: impl Into<String>) -> Self {
        Self::InvalidZipCode(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
