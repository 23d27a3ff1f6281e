//! # Infrastructure Layer
//!
//! Adapters for external systems. The only external system the bridge
//! talks to on its own behalf is the carrier web service.

pub mod carrier;
