//! # Carrier Errors
//!
//! Error types for carrier web-service operations.
//!
//! Per-service quote failures are recorded, never raised: one failing
//! service must not abort its siblings. The classification matters to the
//! rate engine only through [`CarrierError::to_string`], which becomes the
//! recorded per-service message.
//!
//! # Examples
//!
//! ```
//! use mandabem_bridge::infrastructure::carrier::error::CarrierError;
//!
//! let error = CarrierError::timeout("request timed out");
//! assert!(error.is_transport());
//!
//! let error = CarrierError::business("CEP de destino invalido");
//! assert!(!error.is_transport());
//! ```

use thiserror::Error;

/// Error type for carrier gateway operations.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// Request timed out.
    #[error("carrier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("carrier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Non-2xx HTTP response without an embedded carrier error.
    #[error("{message} ({status})")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Carrier responded 2xx with an application-level error payload or an
    /// unparseable body.
    #[error("{message}")]
    Business {
        /// The carrier's own error message, or the raw body.
        message: String,
    },

    /// Internal error (client construction, serialization).
    #[error("carrier internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl CarrierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a carrier business error.
    #[must_use]
    pub fn business(message: impl Into<String>) -> Self {
        Self::Business {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true for network-level failures (timeout, connection,
    /// non-2xx status), as opposed to carrier business errors.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::Http { .. }
        )
    }
}

/// Result type for carrier operations.
pub type CarrierResult<T> = Result<T, CarrierError>;
