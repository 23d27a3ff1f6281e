//! # Domain Entities
//!
//! Aggregate roots and entities representing core business concepts.
//!
//! ## Rate calculation
//!
//! - [`CartItem`] / [`CartMetrics`]: cart input and its carrier-facing
//!   aggregation (declared value, billable weight)
//! - [`ShippingRule`]: merchant pricing rule
//! - [`ShippingOffer`] / [`ShippingLine`]: priced offers returned to the
//!   platform
//!
//! ## Label creation
//!
//! - [`Order`] and friends: the slice of a placed order the carrier tag
//!   request needs
//!
//! ## Shared
//!
//! - [`Address`]: platform address, normalized zip on demand

pub mod address;
pub mod cart;
pub mod offer;
pub mod order;
pub mod shipping_rule;

pub use address::Address;
pub use cart::{CartItem, CartMetrics};
pub use offer::{
    Additional, DeliveryTime, Package, PostingDeadline, ShippingLine, ShippingOffer,
    CARRIER_NAME, DEFAULT_POSTING_DAYS, SHIPPING_LINE_FLAG,
};
pub use order::{
    Buyer, FulfillmentStatus, Order, OrderItem, OrderShippingLine, ShippingLineApp,
    READY_FOR_SHIPPING,
};
pub use shipping_rule::{DiscountSpec, ShippingRule};
