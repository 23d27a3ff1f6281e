//! # Carrier Integration
//!
//! Everything that talks to the Manda Bem web service.
//!
//! - [`traits`]: the [`CarrierGateway`] port plus its request/result types
//! - [`mandabem`]: the production WS adapter
//! - [`http_client`]: form-encoded HTTP plumbing
//! - [`error`]: carrier error taxonomy

pub mod error;
pub mod http_client;
pub mod mandabem;
pub mod traits;

pub use error::{CarrierError, CarrierResult};
pub use mandabem::{MandaBemGateway, DEFAULT_BASE_URL};
pub use traits::{
    CarrierCredentials, CarrierGateway, QuoteRequest, ServiceQuote, TagProduct, TagRequest,
};
