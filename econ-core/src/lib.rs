// Introductory microeconomics teaching models
//
// Module structure:
// - resources       CELL factors and their aggregate
// - ppc/            Products, technology, PPC model, trade comparison
// - supply_demand/  Linear supply and demand curves and their market
// - scenario        JSON scenario configuration
// - wasm            Browser-facing explorers

pub mod error;
pub mod ppc;
pub mod resources;
pub mod scenario;
pub mod supply_demand;
pub mod wasm;

#[cfg(feature = "instrument")]
pub use instrument;

pub use error::{EconError, Result};

// PPC
pub use ppc::{Country, FrontierPoint, PpcModel, PpcState, Product, Technology, TradeModel};

// Resources
pub use resources::{Capital, Entrepreneurship, Labor, Land, Resources, is_scarce};

// Supply and demand
pub use supply_demand::{
    DemandCurve, Equilibrium, SupplyCurve, SupplyDemandModel, SupplyDemandState,
};

// Configuration
pub use scenario::{CountryConfig, CurveConfig, MarketConfig, ProductConfig, ResourcesConfig, Scenario};

// WASM
pub use wasm::{FrontierSnapshot, MarketExplorer, MarketSnapshot, PpcExplorer, TradeExplorer, TradeVerdict};
