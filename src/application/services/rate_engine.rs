//! # Rate Calculation Engine
//!
//! Orchestrates one calculation call end to end.
//!
//! This module provides the [`RateCalculationEngine`] which validates the
//! request, aggregates the cart into carrier metrics, fans one pricing
//! request out per configured service, and folds the settled results into
//! exactly one terminal outcome: a list of priced offers or a single
//! error.
//!
//! Concurrency is cooperative fan-out/fan-in: every per-service request
//! is dispatched at once and the call suspends on
//! [`join_all`](futures::future::join_all) until all of them settle, so a
//! slow or failed service never blocks its siblings and partial results
//! are never observable. One attempt per service; the transport's own
//! timeout is the only deadline.

use crate::application::config::MerchantConfig;
use crate::application::error::CalculateError;
use crate::domain::entities::address::Address;
use crate::domain::entities::cart::{CartItem, CartMetrics};
use crate::domain::entities::offer::{
    DeliveryTime, Package, ShippingLine, ShippingOffer, CARRIER_NAME, SHIPPING_LINE_FLAG,
};
use crate::domain::services::RuleEngine;
use crate::domain::value_objects::{Money, ServiceCode, Weight, ZipCode};
use crate::infrastructure::carrier::traits::{CarrierGateway, QuoteRequest, ServiceQuote};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Input of one calculation call, as sent by the order platform.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CalculateParams {
    /// Destination address; absent for free-shipping previews.
    #[serde(default)]
    pub to: Option<Address>,
    /// Origin address override; the configured zip is used when absent.
    #[serde(default)]
    pub from: Option<Address>,
    /// Cart items.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Order subtotal; overrides the item sum as insured value.
    #[serde(default)]
    pub subtotal: Option<Money>,
}

/// Successful outcome of one calculation call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Priced offers, possibly empty for free-shipping previews.
    pub shipping_services: Vec<ShippingOffer>,
    /// Advisory free-shipping threshold for the storefront.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_shipping_from_value: Option<Money>,
}

/// Engine turning a cart plus merchant configuration into priced offers.
#[derive(Debug, Clone)]
pub struct RateCalculationEngine {
    gateway: Arc<dyn CarrierGateway>,
    config: MerchantConfig,
}

impl RateCalculationEngine {
    /// Creates an engine over a carrier gateway and merchant config.
    #[must_use]
    pub fn new(gateway: Arc<dyn CarrierGateway>, config: MerchantConfig) -> Self {
        Self { gateway, config }
    }

    /// Runs one calculation call.
    ///
    /// # Errors
    ///
    /// - `CalculateError::MissingCredentials` - credentials unset, checked first
    /// - `CalculateError::MissingOriginZip` - no origin zip, before any dispatch
    /// - `CalculateError::EmptyCart` - destination given but no items
    /// - `CalculateError::AllQuotesFailed` - every service request failed
    pub async fn calculate(
        &self,
        params: &CalculateParams,
    ) -> Result<CalculateResponse, CalculateError> {
        if self.config.credentials().is_none() {
            return Err(CalculateError::MissingCredentials);
        }

        let rule_engine = RuleEngine::new(&self.config.shipping_rules);
        let destination = params.to.as_ref().and_then(Address::zip_code);
        let free_shipping_from_value = rule_engine
            .free_shipping_threshold(destination.as_ref(), self.config.free_shipping_seed());

        // no destination: free-shipping preview only, no offers
        let (Some(to), Some(destination)) = (params.to.as_ref(), destination) else {
            return Ok(CalculateResponse {
                shipping_services: Vec::new(),
                free_shipping_from_value,
            });
        };

        let origin = params
            .from
            .as_ref()
            .and_then(Address::zip_code)
            .or_else(|| self.config.origin_zip())
            .ok_or(CalculateError::MissingOriginZip)?;

        if params.items.is_empty() {
            return Err(CalculateError::EmptyCart);
        }

        let metrics = CartMetrics::aggregate(&params.items, params.subtotal);
        let services = self.config.service_codes();

        let settled = join_all(services.iter().map(|service| {
            let request = QuoteRequest {
                origin: origin.clone(),
                destination: destination.clone(),
                declared_value: metrics.declared_value(),
                weight_kg: metrics.weight_kg(),
                service: service.clone(),
            };
            async move { self.gateway.rate_quote(&request).await }
        }))
        .await;

        let mut offers = Vec::new();
        let mut errors = Vec::new();
        for (service, result) in services.iter().zip(settled) {
            match result {
                Ok(Some(quote)) => {
                    offers.push(self.build_offer(
                        service,
                        quote,
                        params.from.as_ref(),
                        to,
                        &origin,
                        &destination,
                        metrics,
                        rule_engine,
                    ));
                }
                // successful response without a rate for this service
                Ok(None) => {}
                Err(error) => {
                    warn!(service = %service, error = %error, "carrier quote failed");
                    errors.push(error.to_string());
                }
            }
        }

        if offers.is_empty() && !errors.is_empty() {
            return Err(CalculateError::AllQuotesFailed(errors.join("; ")));
        }

        info!(
            offers = offers.len(),
            services = services.len(),
            "shipping calculation settled"
        );
        Ok(CalculateResponse {
            shipping_services: offers,
            free_shipping_from_value,
        })
    }

    /// Assembles one priced offer from a settled per-service quote.
    #[allow(clippy::too_many_arguments)]
    fn build_offer(
        &self,
        service: &ServiceCode,
        quote: ServiceQuote,
        request_from: Option<&Address>,
        to: &Address,
        origin: &ZipCode,
        destination: &ZipCode,
        metrics: CartMetrics,
        rule_engine: RuleEngine<'_>,
    ) -> ShippingOffer {
        let mut from = request_from.cloned().unwrap_or_default();
        from.zip = origin.as_str().to_string();

        let mut shipping_line = ShippingLine {
            from,
            to: to.clone(),
            price: quote.price,
            declared_value: metrics.declared_value(),
            discount: Money::zero(),
            total_price: quote.price,
            delivery_time: DeliveryTime {
                days: quote.delivery_days,
                working_days: true,
            },
            posting_deadline: self.config.posting_deadline(),
            package: Package {
                weight: Weight::kilograms(metrics.weight_kg()),
            },
            flags: vec![SHIPPING_LINE_FLAG.to_string()],
            other_additionals: Vec::new(),
        };

        rule_engine.apply_discount(
            service,
            Some(destination),
            metrics.declared_value(),
            &mut shipping_line,
        );

        if let Some(additional) = self.config.additional_price.filter(|a| !a.is_zero()) {
            shipping_line.apply_flat_adjustment(additional);
        }

        ShippingOffer {
            label: self.config.label_for(service),
            carrier: CARRIER_NAME.to_string(),
            service_name: service.clone(),
            shipping_line,
        }
    }
}
