//! # Carrier Gateway Trait
//!
//! Port definition for the carrier pricing/label web service.
//!
//! The [`CarrierGateway`] trait is the single seam between the rate
//! engine and the outside world: one method prices a parcel for one
//! service, the other posts a finalized order for a shipping tag. The
//! rate engine only ever sees this trait; tests drive it with mocks and
//! production wires in [`MandaBemGateway`](super::mandabem::MandaBemGateway).

use crate::domain::value_objects::{Money, ServiceCode, ZipCode};
use crate::infrastructure::carrier::error::CarrierResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Merchant credentials for the carrier web service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierCredentials {
    /// Platform id issued by the carrier.
    pub platform_id: String,
    /// Platform key issued by the carrier.
    pub platform_key: String,
}

/// One pricing request: the aggregated cart plus one service code.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    /// Merchant origin zip.
    pub origin: ZipCode,
    /// Buyer destination zip.
    pub destination: ZipCode,
    /// Insured value, already capped.
    pub declared_value: Money,
    /// Billable weight in kilograms.
    pub weight_kg: f64,
    /// The service to price.
    pub service: ServiceCode,
}

/// A successful per-service pricing result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceQuote {
    /// Quoted shipping price.
    pub price: Money,
    /// Estimated delivery time in days.
    pub delivery_days: u32,
}

/// One product line on a shipping tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagProduct {
    /// Product name.
    pub nome: String,
    /// Quantity.
    pub quantidade: u32,
    /// Price actually paid.
    pub preco: Money,
}

/// One shipping-tag creation request for a finalized order.
#[derive(Debug, Clone, PartialEq)]
pub struct TagRequest {
    /// Merchant reference (order number or id).
    pub reference_id: String,
    /// The Correios service of the quoted shipping line.
    pub service: ServiceCode,
    /// Recipient name.
    pub recipient: String,
    /// Destination zip.
    pub destination: ZipCode,
    /// Destination street.
    pub street: Option<String>,
    /// Destination street number, `"SN"` when absent.
    pub number: String,
    /// Destination complement.
    pub complement: Option<String>,
    /// Destination city.
    pub city: Option<String>,
    /// Destination state code.
    pub state: Option<String>,
    /// Package weight in kilograms.
    pub weight_kg: Option<f64>,
    /// Insured value from the original quote.
    pub declared_value: Option<Money>,
    /// Merchant origin zip.
    pub origin: ZipCode,
    /// Products listed on the tag.
    pub products: Vec<TagProduct>,
    /// Recipient CPF digits, for natural-person buyers.
    pub recipient_document: Option<String>,
}

/// Trait defining the interface to the carrier web service.
///
/// # Error Handling
///
/// Methods return `CarrierResult<T>`. Implementations map transport
/// failures and embedded carrier error payloads to the matching
/// [`CarrierError`](super::error::CarrierError) variants; callers decide
/// whether an error is terminal.
#[async_trait]
pub trait CarrierGateway: Send + Sync + fmt::Debug {
    /// Prices one service for the aggregated cart.
    ///
    /// Returns `Ok(None)` when the carrier answered successfully but its
    /// payload carried no result for the requested service; such a
    /// service simply yields no offer.
    ///
    /// # Errors
    ///
    /// - `CarrierError::Timeout` / `CarrierError::Connection` - transport failure
    /// - `CarrierError::Http` - non-2xx response
    /// - `CarrierError::Business` - embedded carrier error or unparseable body
    async fn rate_quote(&self, request: &QuoteRequest) -> CarrierResult<Option<ServiceQuote>>;

    /// Posts a finalized order for a shipping tag.
    ///
    /// Returns the carrier's raw response payload for logging.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CarrierGateway::rate_quote`]; callers log and
    /// swallow.
    async fn create_tag(&self, request: &TagRequest) -> CarrierResult<serde_json::Value>;
}
