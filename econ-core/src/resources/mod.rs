// Resources available to an economy, aggregated using the CELL model

pub mod factors;

pub use factors::{Capital, Entrepreneurship, Labor, Land};

/// Unbounded wants and needs of a population.
pub const WANTS_AND_NEEDS: f64 = f64::INFINITY;

/// Total stock of land, labor, capital and entrepreneurship.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Resources {
    pub land: Land,
    pub labor: Labor,
    pub capital: Capital,
    pub entrepreneurship: Entrepreneurship,
}

impl Resources {
    pub fn new(
        land: Land,
        labor: Labor,
        capital: Capital,
        entrepreneurship: Entrepreneurship,
    ) -> Self {
        Self {
            land,
            labor,
            capital,
            entrepreneurship,
        }
    }

    pub fn from_amounts(land: f64, labor: i64, capital: f64, entrepreneurship: f64) -> Self {
        Self::new(
            Land::new(land),
            Labor::new(labor),
            Capital::new(capital),
            Entrepreneurship::new(entrepreneurship),
        )
    }

    // === Accessors ===

    pub fn total_land(&self) -> f64 {
        self.land.amount
    }

    pub fn total_labor(&self) -> i64 {
        self.labor.workers
    }

    pub fn total_capital(&self) -> f64 {
        self.capital.amount
    }

    pub fn total_entrepreneurship(&self) -> f64 {
        self.entrepreneurship.ability
    }

    /// Single scalar standing in for everything the economy can spend on production.
    ///
    /// `(land + capital + labor) * entrepreneurship`. This is a deliberately crude
    /// teaching formula, not an economic model; callers depend on it exactly.
    pub fn total_amount(&self) -> f64 {
        (self.total_land() + self.total_capital() + self.total_labor() as f64)
            * self.total_entrepreneurship()
    }

    // === Mutators ===

    pub fn add_land(&mut self, amount: f64) {
        self.land.add(amount);
    }

    pub fn add_labor(&mut self, workers: i64) {
        self.labor.add_workers(workers);
    }

    pub fn add_capital(&mut self, amount: f64) {
        self.capital.add(amount);
    }

    pub fn improve_entrepreneurship(&mut self, ability: f64) {
        self.entrepreneurship.increase(ability);
    }
}

/// Whether the resources fall short of the population's wants.
///
/// Always true for a finite total; NaN totals compare false.
pub fn is_scarce(resources: &Resources) -> bool {
    WANTS_AND_NEEDS > resources.total_amount()
}
