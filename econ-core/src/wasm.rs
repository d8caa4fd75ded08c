// ============================================================================
// WASM API - interactive explorers for the browser
// ============================================================================

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use crate::ppc::{Country, FrontierPoint, PpcModel, PpcState, Product, TradeModel};
use crate::scenario::{CountryConfig, MarketConfig};
use crate::supply_demand::{Equilibrium, SupplyDemandModel, SupplyDemandState};

// ============================================================================
// Snapshots
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct FrontierSnapshot {
    pub name: String,
    pub product_a: String,
    pub product_b: String,
    pub cost_a: f64,
    pub cost_b: f64,
    pub total_resources: f64,
    pub points: Vec<FrontierPoint>,
}

impl FrontierSnapshot {
    pub fn capture(name: &str, model: &PpcModel, steps: u32) -> Self {
        Self {
            name: name.to_string(),
            product_a: model.product_a().name().to_string(),
            product_b: model.product_b().name().to_string(),
            cost_a: model.cost_a(),
            cost_b: model.cost_b(),
            total_resources: model.total_resources(),
            points: model.frontier(steps),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct TradeVerdict {
    pub product: String,
    pub absolute: Option<Country>,
    pub comparative: Option<Country>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct MarketSnapshot {
    pub product: String,
    pub supply_intercept: f64,
    pub supply_slope: f64,
    pub demand_intercept: f64,
    pub demand_slope: f64,
    pub inferior_good: bool,
    pub equilibrium: Option<Equilibrium>,
}

impl MarketSnapshot {
    pub fn capture(model: &SupplyDemandModel) -> Self {
        Self {
            product: model.product().name().to_string(),
            supply_intercept: model.supply().intercept(),
            supply_slope: model.supply().slope(),
            demand_intercept: model.demand().intercept(),
            demand_slope: model.demand().slope(),
            inferior_good: model.demand().is_inferior_good(),
            equilibrium: model.equilibrium(),
        }
    }
}

/// Products compare by name, so a lookup key needs no cost.
fn product_key(name: &str) -> Product {
    Product::new(name, 0.0)
}

// ============================================================================
// PPC explorer
// ============================================================================

#[wasm_bindgen]
pub struct PpcExplorer {
    name: String,
    model: PpcModel,
}

#[wasm_bindgen]
impl PpcExplorer {
    #[wasm_bindgen(constructor)]
    pub fn new(config: CountryConfig) -> Result<PpcExplorer, JsError> {
        // Better panic messages in browser console
        console_error_panic_hook::set_once();

        let model = config.build()?;
        Ok(Self {
            name: config.name,
            model,
        })
    }

    #[wasm_bindgen]
    pub fn amount_of_a(&self, amount_b: i64) -> i64 {
        self.model.amount_of_a(amount_b)
    }

    #[wasm_bindgen]
    pub fn amount_of_b(&self, amount_a: i64) -> i64 {
        self.model.amount_of_b(amount_a)
    }

    #[wasm_bindgen]
    pub fn opportunity_cost(&self, product: &str) -> Result<f64, JsError> {
        Ok(self.model.opportunity_cost(&product_key(product))?)
    }

    #[wasm_bindgen]
    pub fn is_on_curve(&self, amount_a: i64, amount_b: i64) -> bool {
        self.model.is_on_curve(amount_a, amount_b)
    }

    #[wasm_bindgen]
    pub fn economic_state(&self, amount_a: i64, amount_b: i64) -> PpcState {
        self.model.economic_state(amount_a, amount_b)
    }

    #[wasm_bindgen]
    pub fn change_available_resources(&mut self, amount: f64) {
        self.model.change_available_resources(amount);
    }

    #[wasm_bindgen]
    pub fn improve_technology_a(&mut self, improvement: f64) {
        self.model.improve_technology_a(improvement);
    }

    #[wasm_bindgen]
    pub fn improve_technology_b(&mut self, improvement: f64) {
        self.model.improve_technology_b(improvement);
    }

    /// Frontier sampled at `steps + 1` points, for plotting
    #[wasm_bindgen]
    pub fn snapshot(&self, steps: u32) -> FrontierSnapshot {
        FrontierSnapshot::capture(&self.name, &self.model, steps)
    }
}

// ============================================================================
// Trade explorer
// ============================================================================

#[wasm_bindgen]
pub struct TradeExplorer {
    names: [String; 2],
    model: TradeModel,
}

#[wasm_bindgen]
impl TradeExplorer {
    #[wasm_bindgen(constructor)]
    pub fn new(country_a: CountryConfig, country_b: CountryConfig) -> Result<TradeExplorer, JsError> {
        console_error_panic_hook::set_once();

        let model = TradeModel::new(country_a.build()?, country_b.build()?)?;
        Ok(Self {
            names: [country_a.name, country_b.name],
            model,
        })
    }

    #[wasm_bindgen]
    pub fn compare(&self, product: &str) -> Result<TradeVerdict, JsError> {
        let key = product_key(product);
        Ok(TradeVerdict {
            product: product.to_string(),
            absolute: self.model.absolute_advantage(&key),
            comparative: self.model.comparative_advantage(&key)?,
        })
    }

    #[wasm_bindgen]
    pub fn snapshot(&self, country: Country, steps: u32) -> FrontierSnapshot {
        let name = match country {
            Country::A => &self.names[0],
            Country::B => &self.names[1],
        };
        FrontierSnapshot::capture(name, self.model.country(country), steps)
    }

    #[wasm_bindgen]
    pub fn improve_technology_a(&mut self, country: Country, improvement: f64) {
        self.model.country_mut(country).improve_technology_a(improvement);
    }

    #[wasm_bindgen]
    pub fn improve_technology_b(&mut self, country: Country, improvement: f64) {
        self.model.country_mut(country).improve_technology_b(improvement);
    }
}

// ============================================================================
// Market explorer
// ============================================================================

#[wasm_bindgen]
pub struct MarketExplorer {
    model: SupplyDemandModel,
}

#[wasm_bindgen]
impl MarketExplorer {
    #[wasm_bindgen(constructor)]
    pub fn new(config: MarketConfig) -> Result<MarketExplorer, JsError> {
        console_error_panic_hook::set_once();

        Ok(Self {
            model: config.build()?,
        })
    }

    #[wasm_bindgen]
    pub fn state_given_quantity(&self, quantity: i64) -> SupplyDemandState {
        self.model.economic_state_given_quantity(quantity)
    }

    #[wasm_bindgen]
    pub fn state_given_price(&self, price: f64) -> SupplyDemandState {
        self.model.economic_state_given_price(price)
    }

    #[wasm_bindgen]
    pub fn shift_supply(&mut self, amount: f64) {
        self.model.supply_mut().shift(amount);
    }

    #[wasm_bindgen]
    pub fn shift_demand(&mut self, amount: f64) {
        self.model.demand_mut().shift(amount);
    }

    #[wasm_bindgen]
    pub fn adjust_for_government_tools(&mut self, tax_change: f64, subsidy_change: f64) {
        self.model
            .supply_mut()
            .adjust_for_government_tools(tax_change, subsidy_change);
    }

    #[wasm_bindgen]
    pub fn increase_consumer_income(&mut self, change: f64) {
        self.model.demand_mut().increase_consumer_income(change);
    }

    #[wasm_bindgen]
    pub fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot::capture(&self.model)
    }
}
