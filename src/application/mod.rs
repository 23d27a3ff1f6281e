//! # Application Layer
//!
//! Use-case orchestration: merchant configuration, terminal error
//! taxonomy, and the services driving the carrier gateway.

pub mod config;
pub mod error;
pub mod services;

pub use config::{MerchantConfig, ServiceDescriptor, DEFAULT_SERVICES};
pub use error::{CalculateError, WebhookError};
