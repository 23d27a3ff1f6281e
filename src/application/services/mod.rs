//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`RateCalculationEngine`]: validation, cart aggregation, concurrent
//!   quote collection and offer assembly
//! - [`AutoTagService`]: webhook trigger filtering and shipping-tag
//!   creation

pub mod auto_tag;
pub mod rate_engine;

pub use auto_tag::{
    AutoTagService, OrderPlatform, TriggerEvent, TriggerOutcome, TAGGABLE_SERVICES,
};
pub use rate_engine::{CalculateParams, CalculateResponse, RateCalculationEngine};
