//! # Auto Tag Service
//!
//! Webhook trigger filter and shipping-tag creation.
//!
//! The order platform notifies the bridge of order changes; the service
//! reacts only to orders whose fulfillment status just became ready for
//! shipping, reads the full order back through the [`OrderPlatform`]
//! port, and posts one tag per shipping line quoted by this app. Tag
//! failures are logged and swallowed: a tag problem must never make the
//! platform treat the webhook as failed.

use crate::application::config::MerchantConfig;
use crate::application::error::WebhookError;
use crate::domain::entities::order::{Buyer, Order, OrderShippingLine};
use crate::infrastructure::carrier::traits::{CarrierGateway, TagProduct, TagRequest};
use async_trait::async_trait;
use futures::future::join_all;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

/// Services the carrier can print tags for.
pub const TAGGABLE_SERVICES: [&str; 3] = ["PAC", "SEDEX", "PACMINI"];

/// Resource name of order triggers.
const ORDERS_RESOURCE: &str = "orders";

/// A trigger event received from the order platform.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TriggerEvent {
    /// Platform resource the event refers to.
    #[serde(default)]
    pub resource: String,
    /// Id of the changed resource.
    #[serde(default)]
    pub resource_id: Option<String>,
    /// Partial body of the changed resource.
    #[serde(default)]
    pub body: Option<Order>,
}

/// Outcome of one webhook trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The order was read and tag creation ran.
    Processed,
    /// The trigger did not apply; nothing was done.
    Skipped,
}

/// Port for reading full resources back from the order platform.
#[async_trait]
pub trait OrderPlatform: Send + Sync + fmt::Debug {
    /// Reads a full order document.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::Platform` when the platform call fails.
    async fn read_order(&self, order_id: &str) -> Result<Order, WebhookError>;
}

/// Service reacting to order triggers with carrier tag creation.
#[derive(Debug, Clone)]
pub struct AutoTagService {
    platform: Arc<dyn OrderPlatform>,
    gateway: Arc<dyn CarrierGateway>,
    config: MerchantConfig,
}

impl AutoTagService {
    /// Creates the service over its two ports and the merchant config.
    #[must_use]
    pub fn new(
        platform: Arc<dyn OrderPlatform>,
        gateway: Arc<dyn CarrierGateway>,
        config: MerchantConfig,
    ) -> Self {
        Self {
            platform,
            gateway,
            config,
        }
    }

    /// Handles one trigger event.
    ///
    /// Skips silently unless the trigger is an order whose fulfillment
    /// status is ready for shipping, credentials are configured, and
    /// auto-tagging is enabled.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::Platform` only when reading the full order
    /// fails; tag creation errors are swallowed.
    pub async fn handle_trigger(
        &self,
        trigger: &TriggerEvent,
    ) -> Result<TriggerOutcome, WebhookError> {
        if self.config.credentials().is_none()
            || self.config.disable_auto_tag
            || trigger.resource != ORDERS_RESOURCE
        {
            return Ok(TriggerOutcome::Skipped);
        }
        if !trigger.body.as_ref().is_some_and(Order::is_ready_for_shipping) {
            return Ok(TriggerOutcome::Skipped);
        }
        let Some(order_id) = trigger.resource_id.as_deref() else {
            return Ok(TriggerOutcome::Skipped);
        };

        let order = self.platform.read_order(order_id).await?;
        info!(order = %order_id, "creating shipping tags");
        self.create_tags(&order).await;
        Ok(TriggerOutcome::Processed)
    }

    /// Posts one tag per shipping line quoted by this app.
    ///
    /// Errors are logged and swallowed; this method never fails.
    pub async fn create_tags(&self, order: &Order) {
        let requests: Vec<TagRequest> = order
            .shipping_lines
            .iter()
            .filter_map(|line| self.build_tag_request(order, line))
            .collect();

        let settled = join_all(
            requests
                .iter()
                .map(|request| self.gateway.create_tag(request)),
        )
        .await;

        for (request, result) in requests.iter().zip(settled) {
            match result {
                Ok(payload) => {
                    info!(service = %request.service, response = %payload, "carrier tag created");
                }
                Err(tag_error) => {
                    error!(service = %request.service, error = %tag_error, "carrier tag failed");
                }
            }
        }
    }

    /// Builds a tag request for one shipping line, if it is taggable.
    fn build_tag_request(&self, order: &Order, line: &OrderShippingLine) -> Option<TagRequest> {
        let service = line.app.as_ref()?.service_name.clone();
        if !TAGGABLE_SERVICES.contains(&service.as_str()) {
            return None;
        }
        let to = line.to.as_ref()?;
        let destination = to.zip_code()?;
        let origin = line
            .from
            .as_ref()
            .and_then(|from| from.zip_code())
            .or_else(|| self.config.origin_zip())?;

        Some(TagRequest {
            reference_id: order.reference_id().unwrap_or_default(),
            service,
            recipient: to.name.clone().unwrap_or_default(),
            destination,
            street: to.street.clone(),
            number: to
                .number
                .map_or_else(|| "SN".to_string(), |n| n.to_string()),
            complement: to.complement.clone(),
            city: to.city.clone(),
            state: to.province_code.clone(),
            weight_kg: line
                .package
                .as_ref()
                .map(|package| package.weight.to_kilograms()),
            declared_value: line.declared_value,
            origin,
            products: order
                .items
                .iter()
                .map(|item| TagProduct {
                    nome: item.name.clone(),
                    quantidade: item.quantity,
                    preco: item.effective_price(),
                })
                .collect(),
            recipient_document: order.buyers.first().and_then(Buyer::cpf_digits),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::address::Address;
    use crate::domain::entities::offer::Package;
    use crate::domain::entities::order::{
        Buyer, FulfillmentStatus, OrderItem, ShippingLineApp, READY_FOR_SHIPPING,
    };
    use crate::domain::value_objects::{Money, ServiceCode, Weight};
    use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
    use crate::infrastructure::carrier::traits::{QuoteRequest, ServiceQuote};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingGateway {
        tags: Mutex<Vec<TagRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl CarrierGateway for RecordingGateway {
        async fn rate_quote(
            &self,
            _request: &QuoteRequest,
        ) -> CarrierResult<Option<ServiceQuote>> {
            unimplemented!()
        }

        async fn create_tag(&self, request: &TagRequest) -> CarrierResult<serde_json::Value> {
            self.tags.lock().unwrap().push(request.clone());
            if self.fail {
                Err(CarrierError::connection("connection failed"))
            } else {
                Ok(json!({ "resultado": { "id": 7 } }))
            }
        }
    }

    #[derive(Debug)]
    struct StubPlatform {
        order: Result<Order, WebhookError>,
    }

    #[async_trait]
    impl OrderPlatform for StubPlatform {
        async fn read_order(&self, _order_id: &str) -> Result<Order, WebhookError> {
            self.order.clone()
        }
    }

    fn configured() -> MerchantConfig {
        MerchantConfig {
            mandabem_id: Some("merchant-1".into()),
            mandabem_key: Some("secret".into()),
            zip: Some("01310-100".into()),
            ..MerchantConfig::default()
        }
    }

    fn ready_order() -> Order {
        Order {
            id: Some("abc".into()),
            number: Some(1042),
            items: vec![OrderItem {
                name: "Mug".into(),
                quantity: 2,
                price: Money::new(30.0).unwrap(),
                final_price: None,
            }],
            buyers: vec![Buyer {
                registry_type: Some("p".into()),
                doc_number: Some("123.456.789-09".into()),
            }],
            shipping_lines: vec![OrderShippingLine {
                app: Some(ShippingLineApp {
                    service_name: ServiceCode::new("PAC"),
                }),
                to: Some(Address {
                    name: Some("Maria Silva".into()),
                    street: Some("Rua Padre Marinho".into()),
                    city: Some("Sete Lagoas".into()),
                    province_code: Some("MG".into()),
                    ..Address::with_zip("35700-000")
                }),
                from: None,
                package: Some(Package {
                    weight: Weight::kilograms(1.2),
                }),
                declared_value: Some(Money::new(60.0).unwrap()),
            }],
            fulfillment_status: Some(FulfillmentStatus {
                current: Some(READY_FOR_SHIPPING.into()),
            }),
        }
    }

    fn ready_trigger() -> TriggerEvent {
        TriggerEvent {
            resource: "orders".into(),
            resource_id: Some("abc".into()),
            body: Some(Order {
                fulfillment_status: Some(FulfillmentStatus {
                    current: Some(READY_FOR_SHIPPING.into()),
                }),
                ..Order::default()
            }),
        }
    }

    fn service(
        gateway: Arc<RecordingGateway>,
        order: Result<Order, WebhookError>,
        config: MerchantConfig,
    ) -> AutoTagService {
        AutoTagService::new(Arc::new(StubPlatform { order }), gateway, config)
    }

    #[tokio::test]
    async fn ready_order_is_tagged() {
        let gateway = Arc::new(RecordingGateway::default());
        let svc = service(gateway.clone(), Ok(ready_order()), configured());

        let outcome = svc.handle_trigger(&ready_trigger()).await.unwrap();
        assert_eq!(outcome, TriggerOutcome::Processed);

        let tags = gateway.tags.lock().unwrap();
        assert_eq!(tags.len(), 1);
        let tag = &tags[0];
        assert_eq!(tag.reference_id, "1042");
        assert_eq!(tag.recipient, "Maria Silva");
        assert_eq!(tag.number, "SN");
        assert_eq!(tag.recipient_document.as_deref(), Some("12345678909"));
        // origin falls back to the configured merchant zip
        assert_eq!(tag.origin.as_str(), "01310100");
    }

    #[tokio::test]
    async fn non_order_resource_is_skipped() {
        let gateway = Arc::new(RecordingGateway::default());
        let svc = service(gateway.clone(), Ok(ready_order()), configured());

        let trigger = TriggerEvent {
            resource: "products".into(),
            ..ready_trigger()
        };
        let outcome = svc.handle_trigger(&trigger).await.unwrap();
        assert_eq!(outcome, TriggerOutcome::Skipped);
        assert!(gateway.tags.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn disabled_auto_tag_is_skipped() {
        let gateway = Arc::new(RecordingGateway::default());
        let config = MerchantConfig {
            disable_auto_tag: true,
            ..configured()
        };
        let svc = service(gateway.clone(), Ok(ready_order()), config);

        let outcome = svc.handle_trigger(&ready_trigger()).await.unwrap();
        assert_eq!(outcome, TriggerOutcome::Skipped);
    }

    #[tokio::test]
    async fn unready_fulfillment_is_skipped() {
        let gateway = Arc::new(RecordingGateway::default());
        let svc = service(gateway.clone(), Ok(ready_order()), configured());

        let trigger = TriggerEvent {
            body: Some(Order {
                fulfillment_status: Some(FulfillmentStatus {
                    current: Some("paid".into()),
                }),
                ..Order::default()
            }),
            ..ready_trigger()
        };
        let outcome = svc.handle_trigger(&trigger).await.unwrap();
        assert_eq!(outcome, TriggerOutcome::Skipped);
    }

    #[tokio::test]
    async fn platform_read_failure_propagates() {
        let gateway = Arc::new(RecordingGateway::default());
        let svc = service(
            gateway,
            Err(WebhookError::platform("order read failed")),
            configured(),
        );

        let error = svc.handle_trigger(&ready_trigger()).await.unwrap_err();
        assert_eq!(error, WebhookError::platform("order read failed"));
    }

    #[tokio::test]
    async fn tag_failure_is_swallowed() {
        let gateway = Arc::new(RecordingGateway {
            fail: true,
            ..RecordingGateway::default()
        });
        let svc = service(gateway.clone(), Ok(ready_order()), configured());

        let outcome = svc.handle_trigger(&ready_trigger()).await.unwrap();
        // the trigger still succeeds
        assert_eq!(outcome, TriggerOutcome::Processed);
        assert_eq!(gateway.tags.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn non_taggable_service_is_filtered() {
        let gateway = Arc::new(RecordingGateway::default());
        let mut order = ready_order();
        order.shipping_lines[0].app = Some(ShippingLineApp {
            service_name: ServiceCode::new("MOTOBOY"),
        });
        let svc = service(gateway.clone(), Ok(order), configured());

        svc.handle_trigger(&ready_trigger()).await.unwrap();
        assert!(gateway.tags.lock().unwrap().is_empty());
    }
}
