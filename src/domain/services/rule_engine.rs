//! # Rule Engine
//!
//! Evaluates the merchant's ordered rule list.
//!
//! Two passes share the same rules and zip matching:
//!
//! - **Free-shipping discovery** runs before any address is known and
//!   derives the advisory `free_shipping_from_value` hint: the lowest
//!   matching threshold, where a rule without one settles the scan at
//!   zero.
//! - **Discount application** runs per priced offer: the first rule that
//!   is service-compatible, zip-compatible, within threshold and actually
//!   carries an effect (free shipping or a discount) is applied, and the
//!   scan stops there.
//!
//! # Examples
//!
//! ```
//! use mandabem_bridge::domain::entities::shipping_rule::ShippingRule;
//! use mandabem_bridge::domain::services::RuleEngine;
//! use mandabem_bridge::domain::value_objects::Money;
//!
//! let rules = vec![ShippingRule {
//!     free_shipping: true,
//!     min_amount: Some(Money::new(150.0).unwrap()),
//!     ..ShippingRule::default()
//! }];
//! let engine = RuleEngine::new(&rules);
//! let hint = engine.free_shipping_threshold(None, None);
//! assert_eq!(hint, Some(Money::new(150.0).unwrap()));
//! ```

use crate::domain::entities::offer::ShippingLine;
use crate::domain::entities::shipping_rule::ShippingRule;
use crate::domain::value_objects::{Money, ServiceCode, ZipCode};

/// Stateless evaluator over the merchant's ordered rule list.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    rules: &'a [ShippingRule],
}

impl<'a> RuleEngine<'a> {
    /// Creates an engine over the merchant's rules, in declaration order.
    #[must_use]
    pub const fn new(rules: &'a [ShippingRule]) -> Self {
        Self { rules }
    }

    /// Derives the free-shipping hint from the rule list.
    ///
    /// Scans free-shipping rules whose zip range accepts the destination
    /// (or any destination, when none is known yet). A rule without a
    /// threshold short-circuits the scan at zero; otherwise the lowest
    /// threshold seen wins. `seed` is the merchant's configured global
    /// default and participates in the minimum.
    #[must_use]
    pub fn free_shipping_threshold(
        &self,
        destination: Option<&ZipCode>,
        seed: Option<Money>,
    ) -> Option<Money> {
        let mut best = seed;
        for rule in self
            .rules
            .iter()
            .filter(|rule| rule.free_shipping && rule.matches_zip(destination))
        {
            match rule.min_amount {
                None => return Some(Money::zero()),
                Some(threshold) if threshold.is_zero() => return Some(Money::zero()),
                Some(threshold) => {
                    best = Some(match best {
                        Some(current) if current <= threshold => current,
                        _ => threshold,
                    });
                }
            }
        }
        best
    }

    /// Finds the first rule with an applicable effect for a priced offer.
    ///
    /// Rules that match but carry neither free shipping nor a discount are
    /// skipped; they have nothing to apply.
    #[must_use]
    pub fn first_applicable(
        &self,
        service: &ServiceCode,
        destination: Option<&ZipCode>,
        declared_value: Money,
    ) -> Option<&'a ShippingRule> {
        self.rules.iter().find(|rule| {
            rule.applies_to(service, destination, declared_value)
                && (rule.free_shipping || rule.discount.is_some())
        })
    }

    /// Applies the first matching rule's effect to a shipping line.
    pub fn apply_discount(
        &self,
        service: &ServiceCode,
        destination: Option<&ZipCode>,
        declared_value: Money,
        line: &mut ShippingLine,
    ) {
        let Some(rule) = self.first_applicable(service, destination, declared_value) else {
            return;
        };

        if rule.free_shipping {
            line.make_free();
        } else if let Some(discount) = rule.discount {
            line.apply_discount(discount.amount_for(line.total_price));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::address::Address;
    use crate::domain::entities::offer::{
        DeliveryTime, Package, PostingDeadline, SHIPPING_LINE_FLAG,
    };
    use crate::domain::entities::shipping_rule::DiscountSpec;
    use crate::domain::value_objects::{Weight, ZipRange};
    use rust_decimal::Decimal;

    fn money(value: f64) -> Money {
        Money::new(value).unwrap()
    }

    fn line(price: f64) -> ShippingLine {
        ShippingLine {
            from: Address::with_zip("01310100"),
            to: Address::with_zip("35700000"),
            price: money(price),
            declared_value: money(200.0),
            discount: Money::zero(),
            total_price: money(price),
            delivery_time: DeliveryTime {
                days: 5,
                working_days: true,
            },
            posting_deadline: PostingDeadline::default(),
            package: Package {
                weight: Weight::kilograms(1.0),
            },
            flags: vec![SHIPPING_LINE_FLAG.into()],
            other_additionals: Vec::new(),
        }
    }

    mod free_shipping_threshold {
        use super::*;

        #[test]
        fn lowest_threshold_wins() {
            let rules = vec![
                ShippingRule {
                    free_shipping: true,
                    min_amount: Some(money(200.0)),
                    ..ShippingRule::default()
                },
                ShippingRule {
                    free_shipping: true,
                    min_amount: Some(money(150.0)),
                    ..ShippingRule::default()
                },
            ];
            let hint = RuleEngine::new(&rules).free_shipping_threshold(None, None);
            assert_eq!(hint, Some(money(150.0)));
        }

        #[test]
        fn unconditional_rule_short_circuits_to_zero() {
            let rules = vec![
                ShippingRule {
                    free_shipping: true,
                    ..ShippingRule::default()
                },
                ShippingRule {
                    free_shipping: true,
                    min_amount: Some(money(150.0)),
                    ..ShippingRule::default()
                },
            ];
            let hint = RuleEngine::new(&rules).free_shipping_threshold(None, None);
            assert_eq!(hint, Some(Money::zero()));
        }

        #[test]
        fn seed_participates_in_minimum() {
            let rules = vec![ShippingRule {
                free_shipping: true,
                min_amount: Some(money(200.0)),
                ..ShippingRule::default()
            }];
            let engine = RuleEngine::new(&rules);
            assert_eq!(
                engine.free_shipping_threshold(None, Some(money(99.0))),
                Some(money(99.0))
            );
            assert_eq!(
                engine.free_shipping_threshold(None, Some(money(500.0))),
                Some(money(200.0))
            );
        }

        #[test]
        fn zip_restricted_rules_skip_other_destinations() {
            let rules = vec![ShippingRule {
                free_shipping: true,
                min_amount: Some(money(100.0)),
                zip_range: Some(ZipRange {
                    min: Some("01000000".into()),
                    max: Some("01999999".into()),
                }),
                ..ShippingRule::default()
            }];
            let engine = RuleEngine::new(&rules);
            let outside = ZipCode::from_raw("99000000").unwrap();
            assert_eq!(engine.free_shipping_threshold(Some(&outside), None), None);
            let inside = ZipCode::from_raw("01310100").unwrap();
            assert_eq!(
                engine.free_shipping_threshold(Some(&inside), None),
                Some(money(100.0))
            );
        }

        #[test]
        fn no_rules_yields_no_hint() {
            assert_eq!(RuleEngine::new(&[]).free_shipping_threshold(None, None), None);
        }
    }

    mod apply_discount {
        use super::*;

        #[test]
        fn first_matching_rule_wins() {
            let rules = vec![
                ShippingRule {
                    discount: Some(DiscountSpec {
                        value: Decimal::new(5, 0),
                        percentage: false,
                    }),
                    ..ShippingRule::default()
                },
                ShippingRule {
                    free_shipping: true,
                    ..ShippingRule::default()
                },
            ];
            let mut shipping = line(20.0);
            RuleEngine::new(&rules).apply_discount(
                &ServiceCode::new("PAC"),
                None,
                money(200.0),
                &mut shipping,
            );
            // the second (free shipping) rule is never consulted
            assert_eq!(shipping.total_price, money(15.0));
            assert_eq!(shipping.discount, money(5.0));
        }

        #[test]
        fn effectless_match_is_skipped() {
            let rules = vec![
                // matches everything but applies nothing
                ShippingRule::default(),
                ShippingRule {
                    discount: Some(DiscountSpec {
                        value: Decimal::new(5, 0),
                        percentage: false,
                    }),
                    ..ShippingRule::default()
                },
            ];
            let mut shipping = line(20.0);
            RuleEngine::new(&rules).apply_discount(
                &ServiceCode::new("PAC"),
                None,
                money(200.0),
                &mut shipping,
            );
            assert_eq!(shipping.total_price, money(15.0));
        }

        #[test]
        fn free_shipping_zeroes_total_regardless_of_value() {
            let rules = vec![ShippingRule {
                free_shipping: true,
                ..ShippingRule::default()
            }];
            let mut shipping = line(87.5);
            RuleEngine::new(&rules).apply_discount(
                &ServiceCode::new("SEDEX"),
                None,
                Money::zero(),
                &mut shipping,
            );
            assert_eq!(shipping.total_price, Money::zero());
            assert_eq!(shipping.discount, money(87.5));
        }

        #[test]
        fn percentage_discount_applies_to_current_total() {
            let rules = vec![ShippingRule {
                discount: Some(DiscountSpec {
                    value: Decimal::new(25, 0),
                    percentage: true,
                }),
                ..ShippingRule::default()
            }];
            let mut shipping = line(40.0);
            RuleEngine::new(&rules).apply_discount(
                &ServiceCode::new("PAC"),
                None,
                money(200.0),
                &mut shipping,
            );
            assert_eq!(shipping.total_price, money(30.0));
        }

        #[test]
        fn below_threshold_rule_does_not_apply() {
            let rules = vec![ShippingRule {
                min_amount: Some(money(500.0)),
                free_shipping: true,
                ..ShippingRule::default()
            }];
            let mut shipping = line(20.0);
            RuleEngine::new(&rules).apply_discount(
                &ServiceCode::new("PAC"),
                None,
                money(200.0),
                &mut shipping,
            );
            assert_eq!(shipping.total_price, money(20.0));
        }

        #[test]
        fn service_restricted_rule_skips_other_services() {
            let rules = vec![ShippingRule {
                service: Some(ServiceCode::new("SEDEX")),
                free_shipping: true,
                ..ShippingRule::default()
            }];
            let mut shipping = line(20.0);
            RuleEngine::new(&rules).apply_discount(
                &ServiceCode::new("PAC"),
                None,
                money(200.0),
                &mut shipping,
            );
            assert_eq!(shipping.total_price, money(20.0));
        }
    }
}
