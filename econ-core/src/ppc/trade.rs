// Trade advantages between two economies producing the same pair of goods

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::error::{EconError, Result};

use super::{PpcModel, Product};

/// Which of the two economies in a [`TradeModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum Country {
    A,
    B,
}

impl Country {
    pub fn label(&self) -> &'static str {
        match self {
            Country::A => "A",
            Country::B => "B",
        }
    }
}

/// Compares the PPC models of two countries to find absolute and comparative
/// advantages in producing a given product.
#[derive(Debug, Clone)]
pub struct TradeModel {
    country_a: PpcModel,
    country_b: PpcModel,
}

impl TradeModel {
    /// Both countries must list the same product in slot A and the same product in slot B.
    pub fn new(country_a: PpcModel, country_b: PpcModel) -> Result<Self> {
        if country_a.product_a() != country_b.product_a() {
            return Err(EconError::MismatchedProducts {
                left: country_a.product_a().name().to_string(),
                right: country_b.product_a().name().to_string(),
            });
        }
        if country_a.product_b() != country_b.product_b() {
            return Err(EconError::MismatchedProducts {
                left: country_a.product_b().name().to_string(),
                right: country_b.product_b().name().to_string(),
            });
        }
        Ok(Self {
            country_a,
            country_b,
        })
    }

    pub fn country(&self, country: Country) -> &PpcModel {
        match country {
            Country::A => &self.country_a,
            Country::B => &self.country_b,
        }
    }

    pub fn country_mut(&mut self, country: Country) -> &mut PpcModel {
        match country {
            Country::A => &mut self.country_a,
            Country::B => &mut self.country_b,
        }
    }

    /// Country able to produce strictly more of `product` when devoting all
    /// resources to it. `None` on a tie or when neither slot holds `product`.
    pub fn absolute_advantage(&self, product: &Product) -> Option<Country> {
        let (max_a, max_b) = if product == self.country_a.product_a() {
            (self.country_a.amount_of_a(0), self.country_b.amount_of_a(0))
        } else if product == self.country_a.product_b() {
            (self.country_a.amount_of_b(0), self.country_b.amount_of_b(0))
        } else {
            return None;
        };

        let winner = if max_a > max_b {
            Some(Country::A)
        } else if max_a < max_b {
            Some(Country::B)
        } else {
            None
        };

        #[cfg(feature = "instrument")]
        tracing::info!(
            target: "trade",
            kind = "absolute",
            product = product.name(),
            winner = winner.map(|c| c.label()).unwrap_or("none"),
        );

        winner
    }

    /// Country producing `product` at a strictly lower opportunity cost.
    /// `None` on a tie; an error when the product is not traded here.
    pub fn comparative_advantage(&self, product: &Product) -> Result<Option<Country>> {
        let cost_a = self.country_a.opportunity_cost(product)?;
        let cost_b = self.country_b.opportunity_cost(product)?;

        let winner = if cost_a < cost_b {
            Some(Country::A)
        } else if cost_a > cost_b {
            Some(Country::B)
        } else {
            None
        };

        #[cfg(feature = "instrument")]
        tracing::info!(
            target: "trade",
            kind = "comparative",
            product = product.name(),
            winner = winner.map(|c| c.label()).unwrap_or("none"),
        );

        Ok(winner)
    }
}
