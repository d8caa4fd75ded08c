// Scenario configuration: JSON descriptions of economies and markets

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::error::{EconError, Result};
use crate::ppc::{PpcModel, Product, Technology, TradeModel};
use crate::resources::Resources;
use crate::supply_demand::{DemandCurve, SupplyCurve, SupplyDemandModel};

// === CONFIG TYPES ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(from_wasm_abi)]
pub struct ResourcesConfig {
    pub land: f64,
    pub labor: i64,
    pub capital: f64,
    pub entrepreneurship: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(from_wasm_abi)]
pub struct ProductConfig {
    pub name: String,
    pub base_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(from_wasm_abi)]
pub struct CountryConfig {
    pub name: String,
    pub resources: ResourcesConfig,
    pub product_a: ProductConfig,
    pub product_b: ProductConfig,
    pub technology_a: f64,
    pub technology_b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(from_wasm_abi)]
pub struct CurveConfig {
    pub intercept: f64,
    pub slope: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(from_wasm_abi)]
pub struct MarketConfig {
    pub product: ProductConfig,
    pub supply: CurveConfig,
    pub demand: CurveConfig,
    #[serde(default)]
    pub inferior_good: bool,
}

/// A teaching scenario: up to two countries and an optional product market.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Tsify)]
#[tsify(from_wasm_abi)]
pub struct Scenario {
    #[serde(default)]
    pub countries: Vec<CountryConfig>,
    #[serde(default)]
    pub market: Option<MarketConfig>,
}

// === VALIDATION ===

fn invalid(msg: impl Into<String>) -> EconError {
    EconError::InvalidScenario(msg.into())
}

impl ResourcesConfig {
    pub fn validate(&self) -> Result<()> {
        let reals = [
            ("land", self.land),
            ("capital", self.capital),
            ("entrepreneurship", self.entrepreneurship),
        ];
        for (field, value) in reals {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{field} must be finite and >= 0, got {value}")));
            }
        }
        if self.labor < 0 {
            return Err(invalid(format!("labor must be >= 0, got {}", self.labor)));
        }
        Ok(())
    }

    pub fn build(&self) -> Resources {
        Resources::from_amounts(self.land, self.labor, self.capital, self.entrepreneurship)
    }
}

impl ProductConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("product name must not be empty"));
        }
        if !self.base_cost.is_finite() || self.base_cost < 0.0 {
            return Err(invalid(format!(
                "base cost of {} must be finite and >= 0, got {}",
                self.name, self.base_cost
            )));
        }
        Ok(())
    }

    pub fn build(&self) -> Product {
        Product::new(self.name.clone(), self.base_cost)
    }
}

fn validate_technology(country: &str, slot: &str, factor: f64) -> Result<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(invalid(format!(
            "{country}: technology_{slot} must be finite and > 0, got {factor}"
        )));
    }
    Ok(())
}

impl CountryConfig {
    pub fn validate(&self) -> Result<()> {
        self.resources.validate()?;
        self.product_a.validate()?;
        self.product_b.validate()?;
        validate_technology(&self.name, "a", self.technology_a)?;
        validate_technology(&self.name, "b", self.technology_b)?;
        Ok(())
    }

    pub fn build(&self) -> Result<PpcModel> {
        self.validate()?;
        Ok(PpcModel::new(
            self.product_a.build(),
            self.product_b.build(),
            self.resources.build(),
            Technology::new(self.technology_a),
            Technology::new(self.technology_b),
        ))
    }
}

impl MarketConfig {
    pub fn validate(&self) -> Result<()> {
        self.product.validate()?;
        for (curve, cfg) in [("supply", &self.supply), ("demand", &self.demand)] {
            if !cfg.intercept.is_finite() || !cfg.slope.is_finite() {
                return Err(invalid(format!("{curve} curve must have finite coefficients")));
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<SupplyDemandModel> {
        self.validate()?;
        let product = self.product.build();
        SupplyDemandModel::new(
            SupplyCurve::new(product.clone(), self.supply.intercept, self.supply.slope),
            DemandCurve::new(
                product,
                self.demand.intercept,
                self.demand.slope,
                self.inferior_good,
            ),
        )
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.countries.len() > 2 {
            return Err(invalid(format!(
                "at most two countries are supported, got {}",
                self.countries.len()
            )));
        }
        for country in &self.countries {
            country.validate()?;
        }
        if let Some(market) = &self.market {
            market.validate()?;
        }
        Ok(())
    }

    pub fn build_countries(&self) -> Result<Vec<PpcModel>> {
        self.countries.iter().map(CountryConfig::build).collect()
    }

    pub fn build_trade(&self) -> Result<TradeModel> {
        match self.countries.as_slice() {
            [a, b] => TradeModel::new(a.build()?, b.build()?),
            other => Err(invalid(format!(
                "trade needs exactly two countries, got {}",
                other.len()
            ))),
        }
    }

    pub fn build_market(&self) -> Result<Option<SupplyDemandModel>> {
        self.market.as_ref().map(MarketConfig::build).transpose()
    }
}
