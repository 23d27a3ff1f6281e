//! # Application Errors
//!
//! Terminal outcomes of the calculation and webhook use cases.
//!
//! Per-service carrier errors are never raised from the rate engine; they
//! are recorded and only surface through
//! [`CalculateError::AllQuotesFailed`] when every dispatched request
//! failed and no offer was produced. Each variant knows its platform
//! error code and HTTP status, so the hosting function only frames the
//! response.

use thiserror::Error;

/// Terminal error of one calculation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculateError {
    /// Carrier credentials unset. Checked first of all.
    #[error("ID or key unset on app hidden data (merchant must configure the app)")]
    MissingCredentials,

    /// No origin zip configured. Checked before dispatching any quote.
    #[error("Zip code is unset on app hidden data (merchant must configure the app)")]
    MissingOriginZip,

    /// Cart has no items.
    #[error("Cannot calculate shipping without cart items")]
    EmptyCart,

    /// Every dispatched service request failed.
    ///
    /// The message joins all per-service errors in configured service
    /// order, making the surfaced text deterministic.
    #[error("{0}")]
    AllQuotesFailed(String),
}

impl CalculateError {
    /// Returns the platform error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "CALCULATE_AUTH_ERR",
            Self::MissingOriginZip => "CALCULATE_ERR",
            Self::EmptyCart => "CALCULATE_EMPTY_CART",
            Self::AllQuotesFailed(_) => "CALCULATE_FAILED",
        }
    }

    /// Returns the HTTP status the platform expects for this error.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::EmptyCart => 400,
            Self::MissingCredentials | Self::MissingOriginZip | Self::AllQuotesFailed(_) => 409,
        }
    }
}

/// Terminal error of one webhook trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// Reading the full order from the platform failed.
    #[error("{0}")]
    Platform(String),
}

impl WebhookError {
    /// Creates a platform error.
    #[must_use]
    pub fn platform(message: impl Into<String>) -> Self {
        Self::Platform(message.into())
    }

    /// Returns the platform error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Platform(_) => "STORE_API_ERR",
        }
    }

    /// Returns the HTTP status the platform expects for this error.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Platform(_) => 500,
        }
    }
}
