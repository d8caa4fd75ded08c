// Linear demand curve

use crate::ppc::Product;

/// Demand for one product as a line `price = intercept + slope * quantity`.
/// The slope is generally negative.
#[derive(Debug, Clone)]
pub struct DemandCurve {
    product: Product,
    intercept: f64,
    slope: f64,
    /// Demand for an inferior good falls as income rises.
    inferior_good: bool,
}

impl DemandCurve {
    pub fn new(product: Product, intercept: f64, slope: f64, inferior_good: bool) -> Self {
        Self {
            product,
            intercept,
            slope,
            inferior_good,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn is_inferior_good(&self) -> bool {
        self.inferior_good
    }

    /// Price consumers will pay for `quantity` units.
    pub fn price_at(&self, quantity: i64) -> f64 {
        self.intercept + self.slope * quantity as f64
    }

    /// Whole units demanded at `price`, floored at zero. Same literal formula
    /// as the supply side: `(intercept - price) / slope`.
    pub fn quantity_at(&self, price: f64) -> i64 {
        f64::max(0.0, (self.intercept - price) / self.slope) as i64
    }

    // === Shifters ===

    /// Move the curve by `amount`. Positive amounts shift it rightward.
    pub fn shift(&mut self, amount: f64) {
        self.intercept += amount;

        #[cfg(feature = "instrument")]
        tracing::info!(
            target: "market_shift",
            curve = "demand",
            product = self.product.name(),
            delta = amount,
            intercept = self.intercept,
        );
    }

    pub fn increase_preference(&mut self, change: f64) {
        self.shift(change);
    }

    /// More consumers, more demand.
    pub fn increase_market_size(&mut self, change: i64) {
        self.shift(change as f64);
    }

    /// Complements are consumed together, so dearer complements cut demand.
    pub fn increase_complementary_good_price(&mut self, change: f64) {
        self.shift(-change);
    }

    /// Dearer substitutes make this good comparatively cheaper.
    pub fn increase_substitute_good_price(&mut self, change: f64) {
        self.shift(change);
    }

    /// Higher income raises demand, except for inferior goods which consumers
    /// trade away from.
    pub fn increase_consumer_income(&mut self, change: f64) {
        if self.inferior_good {
            self.shift(-change);
        } else {
            self.shift(change);
        }
    }

    pub fn increase_expectations(&mut self, change: f64) {
        self.shift(change);
    }
}
