// Supply-demand model for a single product

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::error::{EconError, Result};
use crate::ppc::Product;

use super::{DemandCurve, SupplyCurve};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum SupplyDemandState {
    Surplus,
    Shortage,
    Equilibrium,
}

/// Point where the supply and demand lines cross.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct Equilibrium {
    pub quantity: f64,
    pub price: f64,
}

/// Supply and demand for one product, evaluated at price or quantity points.
#[derive(Debug, Clone)]
pub struct SupplyDemandModel {
    supply: SupplyCurve,
    demand: DemandCurve,
}

impl SupplyDemandModel {
    pub fn new(supply: SupplyCurve, demand: DemandCurve) -> Result<Self> {
        if supply.product() != demand.product() {
            return Err(EconError::MismatchedProducts {
                left: supply.product().name().to_string(),
                right: demand.product().name().to_string(),
            });
        }
        Ok(Self { supply, demand })
    }

    pub fn product(&self) -> &Product {
        self.supply.product()
    }

    pub fn supply(&self) -> &SupplyCurve {
        &self.supply
    }

    pub fn supply_mut(&mut self) -> &mut SupplyCurve {
        &mut self.supply
    }

    pub fn demand(&self) -> &DemandCurve {
        &self.demand
    }

    pub fn demand_mut(&mut self) -> &mut DemandCurve {
        &mut self.demand
    }

    /// Compare the supply and demand prices at `quantity`.
    ///
    /// A supply price above the demand price is reported as `Shortage`, below
    /// as `Surplus`.
    pub fn economic_state_given_quantity(&self, quantity: i64) -> SupplyDemandState {
        let ps = self.supply.price_at(quantity);
        let pd = self.demand.price_at(quantity);

        if ps > pd {
            SupplyDemandState::Shortage
        } else if ps < pd {
            SupplyDemandState::Surplus
        } else {
            SupplyDemandState::Equilibrium
        }
    }

    /// Compare the quantities supplied and demanded at `price`.
    pub fn economic_state_given_price(&self, price: f64) -> SupplyDemandState {
        let qs = self.supply.quantity_at(price);
        let qd = self.demand.quantity_at(price);

        if qs > qd {
            SupplyDemandState::Surplus
        } else if qs < qd {
            SupplyDemandState::Shortage
        } else {
            SupplyDemandState::Equilibrium
        }
    }

    /// Intersection of the two price lines, or `None` when they are parallel.
    pub fn equilibrium(&self) -> Option<Equilibrium> {
        let slope_gap = self.supply.slope() - self.demand.slope();
        if slope_gap == 0.0 {
            return None;
        }
        let quantity = (self.demand.intercept() - self.supply.intercept()) / slope_gap;
        let price = self.supply.intercept() + self.supply.slope() * quantity;
        Some(Equilibrium { quantity, price })
    }
}
