// Production-possibility curve for an economy producing two goods

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::error::{EconError, Result};
use crate::resources::Resources;

use super::{Product, Technology};

// === PPC STATE ===

/// Classification of a production point against the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum PpcState {
    Impossible,
    FullCapacity,
    Underproduction,
}

/// One sampled point on the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct FrontierPoint {
    pub amount_a: i64,
    pub amount_b: i64,
}

// === PPC MODEL ===

/// Production capabilities of an economy with respect to two products.
///
/// Opportunity cost is linear across the whole curve. Costs are recomputed from
/// the current technology and resources on every query, so mutations take
/// effect immediately.
#[derive(Debug, Clone)]
pub struct PpcModel {
    product_a: Product,
    product_b: Product,
    resources: Resources,
    tech_a: Technology,
    tech_b: Technology,
}

impl PpcModel {
    pub fn new(
        product_a: Product,
        product_b: Product,
        resources: Resources,
        tech_a: Technology,
        tech_b: Technology,
    ) -> Self {
        Self {
            product_a,
            product_b,
            resources,
            tech_a,
            tech_b,
        }
    }

    // === Accessors ===

    pub fn product_a(&self) -> &Product {
        &self.product_a
    }

    pub fn product_b(&self) -> &Product {
        &self.product_b
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn technology_a(&self) -> &Technology {
        &self.tech_a
    }

    pub fn technology_b(&self) -> &Technology {
        &self.tech_b
    }

    pub fn cost_a(&self) -> f64 {
        self.product_a.cost(&self.tech_a)
    }

    pub fn cost_b(&self) -> f64 {
        self.product_b.cost(&self.tech_b)
    }

    pub fn total_resources(&self) -> f64 {
        self.resources.total_amount()
    }

    // === Tradeoffs ===

    /// Units of A that can be made while concurrently producing `amount_b` units of B.
    ///
    /// Not clamped: over-committing to B yields a negative result.
    pub fn amount_of_a(&self, amount_b: i64) -> i64 {
        ((self.total_resources() - amount_b as f64 * self.cost_b()) / self.cost_a()).floor() as i64
    }

    /// Units of B that can be made while concurrently producing `amount_a` units of A.
    pub fn amount_of_b(&self, amount_a: i64) -> i64 {
        ((self.total_resources() - amount_a as f64 * self.cost_a()) / self.cost_b()).floor() as i64
    }

    /// Opportunity cost of `product` in units of the other product.
    ///
    /// Querying A gives `cost_a / cost_b`; querying B gives `cost_b / cost_a`.
    pub fn opportunity_cost(&self, product: &Product) -> Result<f64> {
        if *product == self.product_a {
            Ok(self.cost_a() / self.cost_b())
        } else if *product == self.product_b {
            Ok(self.cost_b() / self.cost_a())
        } else {
            Err(EconError::UnknownProduct {
                name: product.name().to_string(),
            })
        }
    }

    fn resources_required(&self, amount_a: i64, amount_b: i64) -> f64 {
        amount_a as f64 * self.cost_a() + amount_b as f64 * self.cost_b()
    }

    /// Exact-equality check against total resources. No tolerance is applied,
    /// so points that only miss by rounding error are reported as off the curve.
    pub fn is_on_curve(&self, amount_a: i64, amount_b: i64) -> bool {
        self.resources_required(amount_a, amount_b) == self.total_resources()
    }

    /// State of the economy if it produced the given amounts.
    ///
    /// NOTE: the labels are the reverse of textbook PPC usage: a point needing
    /// fewer resources than available is `Impossible`, and one needing more is
    /// `Underproduction`. Consumers rely on this mapping as-is.
    pub fn economic_state(&self, amount_a: i64, amount_b: i64) -> PpcState {
        let required = self.resources_required(amount_a, amount_b);
        let available = self.total_resources();

        if required < available {
            PpcState::Impossible
        } else if required == available {
            PpcState::FullCapacity
        } else {
            PpcState::Underproduction
        }
    }

    /// Sample the frontier at `steps + 1` evenly spaced amounts of A, from zero
    /// up to the maximum A output.
    ///
    /// A zero-cost product saturates the maximum at `i64::MAX`; sampling is
    /// done in `i128` so every point stays within `0..=max_a`.
    pub fn frontier(&self, steps: u32) -> Vec<FrontierPoint> {
        let max_a = self.amount_of_a(0);
        if steps == 0 || max_a <= 0 {
            return vec![FrontierPoint {
                amount_a: 0,
                amount_b: self.amount_of_b(0),
            }];
        }

        (0..=steps)
            .map(|i| {
                let amount_a = (i128::from(max_a) * i128::from(i) / i128::from(steps)) as i64;
                FrontierPoint {
                    amount_a,
                    amount_b: self.amount_of_b(amount_a),
                }
            })
            .collect()
    }

    // === Mutations ===

    /// Shift the curve outward (or inward for a negative amount).
    ///
    /// The change is split evenly across the four factors; labor receives its
    /// quarter truncated to whole workers.
    pub fn change_available_resources(&mut self, amount: f64) {
        #[cfg(feature = "instrument")]
        let total_before = self.total_resources();

        let quarter = amount / 4.0;
        self.resources.add_land(quarter);
        self.resources.add_labor(quarter as i64);
        self.resources.add_capital(quarter);
        self.resources.improve_entrepreneurship(quarter);

        #[cfg(feature = "instrument")]
        tracing::info!(
            target: "resources",
            delta = amount,
            total_before = total_before,
            total_after = self.total_resources(),
        );
    }

    pub fn improve_technology_a(&mut self, improvement: f64) {
        #[cfg(feature = "instrument")]
        let before = self.tech_a.efficiency_factor();

        self.tech_a.improve(improvement);

        #[cfg(feature = "instrument")]
        tracing::info!(
            target: "technology",
            product = self.product_a.name(),
            before = before,
            after = self.tech_a.efficiency_factor(),
        );
    }

    pub fn improve_technology_b(&mut self, improvement: f64) {
        #[cfg(feature = "instrument")]
        let before = self.tech_b.efficiency_factor();

        self.tech_b.improve(improvement);

        #[cfg(feature = "instrument")]
        tracing::info!(
            target: "technology",
            product = self.product_b.name(),
            before = before,
            after = self.tech_b.efficiency_factor(),
        );
    }
}
