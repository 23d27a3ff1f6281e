//! # Value Objects
//!
//! Immutable types with validation and shipping-domain semantics.
//!
//! ## Numeric Types
//!
//! - [`Money`]: Decimal amount with clamped arithmetic
//! - [`Weight`] / [`WeightUnit`]: physical weight normalized to kilograms
//! - [`Dimension`] / [`Dimensions`] / [`LengthUnit`]: parcel sides and the
//!   carrier's cubic weight formula
//!
//! ## Identity & Location Types
//!
//! - [`ServiceCode`]: carrier service identifier (`PAC`, `SEDEX`, ...)
//! - [`ZipCode`] / [`ZipRange`]: normalized postal codes and inclusive
//!   rule intervals

pub mod dimensions;
pub mod money;
pub mod service;
pub mod weight;
pub mod zip_code;

pub use dimensions::{Dimension, Dimensions, LengthUnit};
pub use money::Money;
pub use service::ServiceCode;
pub use weight::{Weight, WeightUnit};
pub use zip_code::{ZipCode, ZipRange};
