// Linear supply curve

use crate::ppc::Product;

/// Supply of one product as a line `price = intercept + slope * quantity`.
/// The slope is generally positive.
#[derive(Debug, Clone)]
pub struct SupplyCurve {
    product: Product,
    intercept: f64,
    slope: f64,
}

impl SupplyCurve {
    pub fn new(product: Product, intercept: f64, slope: f64) -> Self {
        Self {
            product,
            intercept,
            slope,
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

    /// Price producers require to supply `quantity` units.
    pub fn price_at(&self, quantity: i64) -> f64 {
        self.intercept + self.slope * quantity as f64
    }

    /// Whole units supplied at `price`, floored at zero.
    ///
    /// Computed as `(intercept - price) / slope`, which is not the algebraic
    /// inverse of [`price_at`](Self::price_at).
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
            curve = "supply",
            product = self.product.name(),
            delta = amount,
            intercept = self.intercept,
        );
    }

    /// Dearer inputs raise production costs and reduce supply.
    pub fn increase_input_prices(&mut self, change: f64) {
        self.shift(-change);
    }

    /// Taxes reduce supply; subsidies increase it.
    pub fn adjust_for_government_tools(&mut self, tax_change: f64, subsidy_change: f64) {
        self.shift(-(tax_change - subsidy_change));
    }

    pub fn increase_number_of_sellers(&mut self, change: i64) {
        self.shift(change as f64);
    }

    pub fn improve_technology(&mut self, change: f64) {
        self.shift(change);
    }

    /// Producers move toward other goods when those become more lucrative.
    pub fn increase_price_of_other_goods(&mut self, change: f64) {
        self.shift(-change);
    }
}
