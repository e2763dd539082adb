use super::dto::{
    Leadership, Performance, Portfolio, PortfolioId, Standings, TokenHolding, Totals, ValueTone,
};

/// Price one day ago implied by the current price and its 24h percent change.
///
/// A change of exactly -100 yields an infinite prior price; callers keep it as is.
pub fn price_24h_ago(current_price: f64, change_24h: f64) -> f64 {
    current_price / (1.0 + change_24h / 100.0)
}

/// Sums `amount × price` now and 24h ago over the holdings that carry a price.
pub fn accumulate(holdings: &[TokenHolding]) -> Totals {
    holdings
        .iter()
        .filter_map(|holding| {
            let price = holding.current_price?;
            let change = holding.change_24h.unwrap_or(0.0);
            Some((holding.amount, price, change))
        })
        .fold(Totals::default(), |mut totals, (amount, price, change)| {
            totals.total_value += amount * price;
            totals.total_value_24h_ago += amount * price_24h_ago(price, change);
            totals
        })
}

/// Percent move from `prior` to `current`; zero when `prior` is zero or not finite.
pub fn percent_change(current: f64, prior: f64) -> f64 {
    if prior == 0.0 || !prior.is_finite() || !current.is_finite() {
        return 0.0;
    }
    (current - prior) / prior * 100.0
}

impl Portfolio {
    pub fn apply_totals(&mut self, totals: Totals) {
        self.total_value = totals.total_value;
        self.total_value_24h_ago = totals.total_value_24h_ago;
    }

    pub fn change_from_initial(&self) -> f64 {
        percent_change(self.total_value, self.initial_value)
    }

    pub fn change_24h(&self) -> f64 {
        percent_change(self.total_value, self.total_value_24h_ago)
    }

    pub fn tone(&self) -> ValueTone {
        if self.total_value > self.initial_value {
            ValueTone::Above
        } else if self.total_value < self.initial_value {
            ValueTone::Below
        } else {
            ValueTone::Even
        }
    }

    pub fn performance(&self) -> Performance {
        Performance {
            portfolio: self.id,
            total_value: self.total_value,
            total_value_24h_ago: self.total_value_24h_ago,
            initial_value: self.initial_value,
            change_from_initial: self.change_from_initial(),
            change_24h: self.change_24h(),
            tone: self.tone(),
        }
    }
}

pub fn determine_leader(easy: &Performance, clemente: &Performance) -> Leadership {
    let (a, b) = (easy.change_from_initial, clemente.change_from_initial);

    if a > b {
        Leadership::Leading {
            leader: PortfolioId::Easy,
            margin: a - b,
        }
    } else if b > a {
        Leadership::Leading {
            leader: PortfolioId::Clemente,
            margin: b - a,
        }
    } else {
        Leadership::Tied
    }
}

pub fn standings(easy: &Portfolio, clemente: &Portfolio) -> Standings {
    let easy = easy.performance();
    let clemente = clemente.performance();
    let leadership = determine_leader(&easy, &clemente);

    Standings {
        easy,
        clemente,
        leadership,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::roster::{clemente_portfolio, easy_portfolio};

    fn performance_with_change(portfolio: PortfolioId, change: f64) -> Performance {
        Performance {
            portfolio,
            total_value: 0.0,
            total_value_24h_ago: 0.0,
            initial_value: 10_000.0,
            change_from_initial: change,
            change_24h: 0.0,
            tone: ValueTone::Even,
        }
    }

    #[test]
    fn test_price_24h_ago() {
        assert!((price_24h_ago(110.0, 10.0) - 100.0).abs() < 1e-9);
        assert!((price_24h_ago(50.0, -50.0) - 100.0).abs() < 1e-9);
        assert!(price_24h_ago(1.0, -100.0).is_infinite());
    }

    #[test]
    fn test_accumulate_skips_unpriced_holdings() {
        let mut portfolio = easy_portfolio();
        portfolio.holdings[0].set_quote(2.0, 100.0);
        portfolio.holdings[1].set_quote(10.0, 0.0);

        let totals = accumulate(&portfolio.holdings);

        let expected = 2449.0 * 2.0 + 15.97 * 10.0;
        let expected_24h = 2449.0 * 1.0 + 15.97 * 10.0;
        assert!((totals.total_value - expected).abs() < 1e-9);
        assert!((totals.total_value_24h_ago - expected_24h).abs() < 1e-9);

        let by_value: f64 = portfolio.holdings.iter().map(|h| h.value()).sum();
        assert!((totals.total_value - by_value).abs() < 1e-9);
    }

    #[test]
    fn test_percent_change_guards_zero_prior() {
        assert_eq!(percent_change(100.0, 0.0), 0.0);
        assert_eq!(percent_change(100.0, f64::INFINITY), 0.0);
        assert!((percent_change(11_000.0, 10_000.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_portfolio_performance() {
        let mut portfolio = clemente_portfolio();
        portfolio.apply_totals(Totals {
            total_value: 9_000.0,
            total_value_24h_ago: 10_000.0,
        });

        let perf = portfolio.performance();
        assert!((perf.change_from_initial + 10.0).abs() < 1e-9);
        assert!((perf.change_24h + 10.0).abs() < 1e-9);
        assert_eq!(perf.tone, ValueTone::Below);
    }

    #[test]
    fn test_determine_leader() {
        let easy = performance_with_change(PortfolioId::Easy, 12.0);
        let clemente = performance_with_change(PortfolioId::Clemente, 5.0);

        match determine_leader(&easy, &clemente) {
            Leadership::Leading { leader, margin } => {
                assert_eq!(leader, PortfolioId::Easy);
                assert_eq!(format!("{:.2}", margin), "7.00");
            }
            Leadership::Tied => panic!("expected a leader"),
        }

        let clemente = performance_with_change(PortfolioId::Clemente, 12.0);
        assert_eq!(determine_leader(&easy, &clemente), Leadership::Tied);
    }

    #[test]
    fn test_clemente_can_lead() {
        let easy = performance_with_change(PortfolioId::Easy, -3.0);
        let clemente = performance_with_change(PortfolioId::Clemente, 1.5);

        assert_eq!(
            determine_leader(&easy, &clemente),
            Leadership::Leading {
                leader: PortfolioId::Clemente,
                margin: 4.5
            }
        );
    }
}
