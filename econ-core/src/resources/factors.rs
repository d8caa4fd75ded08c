// Factors of production (the four CELL categories)

/// Natural resources available to an economy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Land {
    pub amount: f64,
}

impl Land {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    pub fn add(&mut self, amount: f64) {
        self.amount += amount;
    }
}

/// Labor force, counted in whole workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Labor {
    pub workers: i64,
}

impl Labor {
    pub fn new(workers: i64) -> Self {
        Self { workers }
    }

    /// Saturates at the bounds of `i64` rather than overflowing.
    pub fn add_workers(&mut self, workers: i64) {
        self.workers = self.workers.saturating_add(workers);
    }
}

/// Machinery, tools and other produced means of production.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Capital {
    pub amount: f64,
}

impl Capital {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    pub fn add(&mut self, amount: f64) {
        self.amount += amount;
    }
}

/// Dimensionless ability to combine the other factors effectively.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Entrepreneurship {
    pub ability: f64,
}

impl Entrepreneurship {
    pub fn new(ability: f64) -> Self {
        Self { ability }
    }

    pub fn increase(&mut self, ability: f64) {
        self.ability += ability;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_mutators_are_additive() {
        let mut land = Land::new(10.0);
        land.add(2.5);
        land.add(-1.0);
        assert_eq!(land.amount, 11.5);

        let mut labor = Labor::new(4);
        labor.add_workers(3);
        assert_eq!(labor.workers, 7);

        let mut capital = Capital::default();
        capital.add(0.25);
        assert_eq!(capital.amount, 0.25);

        let mut entrepreneurship = Entrepreneurship::new(1.0);
        entrepreneurship.increase(0.5);
        assert_eq!(entrepreneurship.ability, 1.5);
    }

    #[test]
    fn test_labor_saturates_at_bounds() {
        let mut labor = Labor::new(1);
        labor.add_workers(i64::MAX);
        assert_eq!(labor.workers, i64::MAX);

        let mut labor = Labor::new(-1);
        labor.add_workers(i64::MIN);
        assert_eq!(labor.workers, i64::MIN);
    }
}
