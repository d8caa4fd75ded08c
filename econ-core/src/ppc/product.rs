// Products and the technology used to make them

// === TECHNOLOGY ===

/// Technological level applied to one product's production.
///
/// Unlike capital this is a function rather than a stock: it covers
/// logistics, infrastructure and know-how, and scales a product's base cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Technology {
    efficiency_factor: f64,
}

impl Technology {
    pub fn new(efficiency_factor: f64) -> Self {
        Self { efficiency_factor }
    }

    pub fn efficiency_factor(&self) -> f64 {
        self.efficiency_factor
    }

    /// Cost of a product once this technology is applied to its base cost.
    pub fn apply(&self, base_cost: f64) -> f64 {
        base_cost / self.efficiency_factor
    }

    pub fn improve(&mut self, improvement: f64) {
        self.efficiency_factor += improvement;
    }
}

// === PRODUCT ===

/// A good an economy can produce. Identified by name.
#[derive(Debug, Clone)]
pub struct Product {
    name: String,
    base_cost: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, base_cost: f64) -> Self {
        Self {
            name: name.into(),
            base_cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    /// Resources needed to produce one unit at the given technology level.
    pub fn cost(&self, tech: &Technology) -> f64 {
        tech.apply(self.base_cost)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
