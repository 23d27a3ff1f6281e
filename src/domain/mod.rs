//! # Domain Layer
//!
//! Shipping-domain types and logic with no infrastructure dependencies:
//! unit normalization, cart aggregation, merchant rules and priced offers.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
