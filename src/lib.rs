//! # Manda Bem Bridge
//!
//! Shipping-rate quotation and label-creation bridge between an
//! e-commerce order platform and the Manda Bem carrier web service
//! (Correios).
//!
//! The core is the rate calculation engine: it normalizes a cart's
//! weights and dimensions, derives the carrier's cubic weight, caps the
//! insured value, fans one pricing request out per configured Correios
//! service, and folds the independently-settling results - through the
//! merchant's ordered rule list of free-shipping thresholds and
//! discounts - into one response: a list of priced offers or a single
//! terminal error.
//!
//! # Architecture
//!
//! - [`domain`]: value objects (money, weight, dimensions, zip ranges),
//!   cart aggregation, merchant rules and offers. No I/O.
//! - [`application`]: the [`RateCalculationEngine`] and
//!   [`AutoTagService`] use cases, merchant configuration, terminal
//!   errors with platform codes.
//! - [`infrastructure`]: the [`CarrierGateway`] port and its Manda Bem
//!   WS adapter.
//! - [`api`]: the JSON shapes of the platform boundary.
//!
//! # Example
//!
//! ```no_run
//! use mandabem_bridge::application::config::MerchantConfig;
//! use mandabem_bridge::application::services::rate_engine::{
//!     CalculateParams, RateCalculationEngine,
//! };
//! use mandabem_bridge::infrastructure::carrier::mandabem::MandaBemGateway;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config: MerchantConfig = serde_json::from_str(r#"{
//!     "mandabem_id": "merchant-1",
//!     "mandabem_key": "secret",
//!     "zip": "01310-100"
//! }"#)?;
//! let credentials = config.credentials().ok_or("missing credentials")?;
//! let gateway = Arc::new(MandaBemGateway::new(credentials)?);
//! let engine = RateCalculationEngine::new(gateway, config);
//!
//! let params: CalculateParams = serde_json::from_str(r#"{
//!     "to": { "zip": "35700-000" },
//!     "items": [{ "price": 59.9, "quantity": 1,
//!                 "weight": { "value": 1, "unit": "kg" } }]
//! }"#)?;
//! let response = engine.calculate(&params).await?;
//! println!("{} offers", response.shipping_services.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::services::auto_tag::AutoTagService;
pub use application::services::rate_engine::RateCalculationEngine;
pub use infrastructure::carrier::traits::CarrierGateway;
