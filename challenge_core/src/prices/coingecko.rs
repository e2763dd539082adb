use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;

use super::dto::{FetchSummary, SimplePrice};
use super::source::PriceSource;
use crate::error::{ChallengeError, ChallengeResult};
use crate::portfolio::dto::{Portfolio, PriceSourceKind};
use crate::portfolio::handler::accumulate;

/// Lookup-key feed: every asset of a portfolio in one batched request.
#[derive(Clone)]
pub struct CoinGecko {
    client: Client,
    base_url: String,
}

impl CoinGecko {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_simple_prices(
        &self,
        ids: &[&str],
    ) -> ChallengeResult<HashMap<String, SimplePrice>> {
        let response = self
            .client
            .get(format!("{}/simple/price", self.base_url))
            .header("Accept", "application/json")
            .query(&[
                ("ids", ids.join(",").as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ChallengeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl PriceSource for CoinGecko {
    fn kind(&self) -> PriceSourceKind {
        PriceSourceKind::CoinGecko
    }

    async fn refresh(&self, portfolio: &mut Portfolio) -> ChallengeResult<FetchSummary> {
        let ids: Vec<&str> = portfolio
            .holdings
            .iter()
            .filter_map(|holding| holding.lookup_key())
            .collect();

        let prices = self.get_simple_prices(&ids).await?;

        let mut summary = FetchSummary::default();
        for holding in portfolio.holdings.iter_mut() {
            let quote = holding
                .lookup_key()
                .and_then(|id| prices.get(id))
                .and_then(|quote| Some((quote.usd?, quote.usd_24h_change.unwrap_or(0.0))));

            match quote {
                Some((price, change)) => {
                    holding.set_quote(price, change);
                    log::debug!(
                        "{}: price = ${}, amount = {}, value = ${}",
                        holding.symbol,
                        price,
                        holding.amount,
                        holding.value()
                    );
                    summary.priced.push(holding.symbol.clone());
                }
                None => {
                    holding.clear_quote();
                    log::warn!("No price data for {} ({:?})", holding.symbol, holding.lookup_key());
                    summary.missing.push(holding.symbol.clone());
                }
            }
        }

        portfolio.apply_totals(accumulate(&portfolio.holdings));
        Ok(summary)
    }
}
