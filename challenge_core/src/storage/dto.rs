use serde::{Deserialize, Serialize};

use crate::challenge::dto::finite_or_zero;
use crate::portfolio::dto::{Portfolio, Portfolios};

/// Derived values of one portfolio; token definitions are never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioValues {
    pub total_value: f64,
    pub total_value_24h_ago: f64,
    pub initial_value: f64,
}

impl From<&Portfolio> for PortfolioValues {
    fn from(portfolio: &Portfolio) -> Self {
        Self {
            total_value: finite_or_zero(portfolio.total_value),
            total_value_24h_ago: finite_or_zero(portfolio.total_value_24h_ago),
            initial_value: finite_or_zero(portfolio.initial_value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredPortfolios {
    pub easy: PortfolioValues,
    pub clemente: PortfolioValues,
}

impl From<&Portfolios> for StoredPortfolios {
    fn from(portfolios: &Portfolios) -> Self {
        Self {
            easy: PortfolioValues::from(&portfolios.easy),
            clemente: PortfolioValues::from(&portfolios.clemente),
        }
    }
}

impl StoredPortfolios {
    /// Restores totals onto freshly defined portfolios. The initial value stays
    /// whatever the definition fixes it to.
    pub fn apply_to(&self, portfolios: &mut Portfolios) {
        for (portfolio, values) in [
            (&mut portfolios.easy, &self.easy),
            (&mut portfolios.clemente, &self.clemente),
        ] {
            portfolio.total_value = values.total_value;
            portfolio.total_value_24h_ago = values.total_value_24h_ago;
        }
    }
}
