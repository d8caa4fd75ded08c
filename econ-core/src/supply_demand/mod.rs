pub mod demand;
pub mod model;
pub mod supply;

pub use demand::DemandCurve;
pub use model::{Equilibrium, SupplyDemandModel, SupplyDemandState};
pub use supply::SupplyCurve;
