pub mod model;
pub mod product;
pub mod trade;

pub use model::*;
pub use product::*;
pub use trade::*;
