use async_trait::async_trait;
use reqwest::Client;

use super::dto::{DexPair, DexTokenResponse, FetchSummary};
use super::source::PriceSource;
use crate::error::{ChallengeError, ChallengeResult};
use crate::portfolio::dto::{Portfolio, PriceSourceKind};
use crate::portfolio::handler::accumulate;

/// Address-based feed: one request per holding, strictly one after another.
#[derive(Clone)]
pub struct DexScreener {
    client: Client,
    base_url: String,
}

/// Pair with the deepest USD liquidity; the first one wins a tie.
pub fn select_best_pair(pairs: &[DexPair]) -> Option<&DexPair> {
    pairs.iter().fold(None, |best: Option<&DexPair>, pair| match best {
        Some(current) if current.liquidity_usd() >= pair.liquidity_usd() => Some(current),
        _ => Some(pair),
    })
}

impl DexScreener {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_token_pairs(&self, address: &str) -> ChallengeResult<Vec<DexPair>> {
        let response = self
            .client
            .get(format!("{}/latest/dex/tokens/{}", self.base_url, address))
            .header("Accept", "application/json")
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
        let token: DexTokenResponse = serde_json::from_slice(&body)?;
        Ok(token.pairs.unwrap_or_default())
    }
}

#[async_trait]
impl PriceSource for DexScreener {
    fn kind(&self) -> PriceSourceKind {
        PriceSourceKind::DexScreener
    }

    /// Never fails as a whole: each holding's error is logged and that holding
    /// contributes nothing this cycle.
    async fn refresh(&self, portfolio: &mut Portfolio) -> ChallengeResult<FetchSummary> {
        let mut summary = FetchSummary::default();

        for holding in portfolio.holdings.iter_mut() {
            let Some(address) = holding.contract_address().map(str::to_string) else {
                log::info!("Need contract address for {}", holding.symbol);
                holding.clear_quote();
                summary.skipped.push(holding.symbol.clone());
                continue;
            };

            match self.get_token_pairs(&address).await {
                Ok(pairs) => match select_best_pair(&pairs) {
                    Some(pair) => {
                        holding.set_quote(pair.price(), pair.change_24h());
                        log::debug!(
                            "{}: price = ${}, liquidity = ${}, value = ${}",
                            holding.symbol,
                            pair.price(),
                            pair.liquidity_usd(),
                            holding.value()
                        );
                        summary.priced.push(holding.symbol.clone());
                    }
                    None => {
                        holding.clear_quote();
                        log::warn!("No trading pairs for {} ({})", holding.symbol, address);
                        summary.missing.push(holding.symbol.clone());
                    }
                },
                Err(e) => {
                    holding.clear_quote();
                    log::error!("Error fetching price for {}: {}", holding.symbol, e);
                    summary.failed.push(holding.symbol.clone());
                }
            }
        }

        portfolio.apply_totals(accumulate(&portfolio.holdings));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::dto::{INITIAL_VALUE, PortfolioId, TokenHolding};
    use crate::portfolio::roster::clemente_portfolio;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pair(price: &str, liquidity: Option<f64>, h24: Option<f64>) -> serde_json::Value {
        let mut value = json!({ "priceUsd": price });
        if let Some(usd) = liquidity {
            value["liquidity"] = json!({ "usd": usd });
        }
        if let Some(h24) = h24 {
            value["priceChange"] = json!({ "h24": h24 });
        }
        value
    }

    fn parse_pairs(pairs: serde_json::Value) -> Vec<DexPair> {
        serde_json::from_value::<DexTokenResponse>(json!({ "pairs": pairs }))
            .unwrap()
            .pairs
            .unwrap()
    }

    fn two_token_portfolio() -> Portfolio {
        Portfolio {
            id: PortfolioId::Clemente,
            name: "Clemente".to_string(),
            source: PriceSourceKind::DexScreener,
            holdings: vec![
                TokenHolding::address("AAA", Some("addr-a"), 100.0, "solana", "a.webp"),
                TokenHolding::address("BBB", None, 50.0, "base", "b.webp"),
                TokenHolding::address("CCC", Some("addr-c"), 10.0, "base", "c.webp"),
            ],
            total_value: 0.0,
            total_value_24h_ago: 0.0,
            initial_value: INITIAL_VALUE,
        }
    }

    #[test]
    fn test_select_best_pair_by_liquidity() {
        let pairs = parse_pairs(json!([
            pair("1.0", Some(300.0), None),
            pair("2.0", Some(500.0), None),
        ]));
        assert_eq!(select_best_pair(&pairs).unwrap().price(), 2.0);

        let pairs = parse_pairs(json!([
            pair("2.0", Some(500.0), None),
            pair("1.0", Some(300.0), None),
        ]));
        assert_eq!(select_best_pair(&pairs).unwrap().price(), 2.0);
    }

    #[test]
    fn test_select_best_pair_ties_and_missing_liquidity() {
        let pairs = parse_pairs(json!([
            pair("1.0", None, None),
            pair("2.0", Some(0.0), None),
            pair("3.0", Some(10.0), None),
            pair("4.0", Some(10.0), None),
        ]));
        assert_eq!(select_best_pair(&pairs).unwrap().price(), 3.0);

        let pairs = parse_pairs(json!([pair("1.0", None, None), pair("2.0", None, None)]));
        assert_eq!(select_best_pair(&pairs).unwrap().price(), 1.0);

        assert!(select_best_pair(&[]).is_none());
    }

    #[test]
    fn test_pair_defaults() {
        let pairs = parse_pairs(json!([{ "priceUsd": "not-a-number" }, {}]));
        assert_eq!(pairs[0].price(), 0.0);
        assert_eq!(pairs[0].change_24h(), 0.0);
        assert_eq!(pairs[1].price(), 0.0);
        assert_eq!(pairs[1].liquidity_usd(), 0.0);
    }

    #[test]
    fn test_numeric_price_is_accepted() {
        let pairs = parse_pairs(json!([
            { "priceUsd": 0.25, "liquidity": { "usd": 100.0 } },
            { "priceUsd": "0.5", "liquidity": { "usd": 50.0 } },
            { "priceUsd": null }
        ]));

        assert_eq!(pairs[0].price(), 0.25);
        assert_eq!(pairs[1].price(), 0.5);
        assert_eq!(pairs[2].price(), 0.0);
        assert_eq!(select_best_pair(&pairs).unwrap().price(), 0.25);
    }

    #[tokio::test]
    async fn test_refresh_tolerates_per_holding_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest/dex/tokens/addr-a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "pairs": [
                    pair("0.01", Some(300.0), Some(-50.0)),
                    pair("0.02", Some(500.0), Some(100.0)),
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest/dex/tokens/addr-c"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let source = DexScreener::new(Client::new(), &server.uri());
        let mut portfolio = two_token_portfolio();
        portfolio.holdings[2].set_quote(3.0, 0.0);

        let summary = source.refresh(&mut portfolio).await.unwrap();

        assert_eq!(summary.priced, vec!["AAA"]);
        assert_eq!(summary.skipped, vec!["BBB"]);
        assert_eq!(summary.failed, vec!["CCC"]);

        assert_eq!(portfolio.holdings[0].current_price, Some(0.02));
        assert_eq!(portfolio.holdings[0].change_24h, Some(100.0));
        assert!(portfolio.holdings[2].current_price.is_none());
        assert!((portfolio.total_value - 2.0).abs() < 1e-9);
        assert!((portfolio.total_value_24h_ago - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_refresh_with_no_pairs_contributes_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pairs": null })))
            .mount(&server)
            .await;

        let source = DexScreener::new(Client::new(), &server.uri());
        let mut portfolio = clemente_portfolio();

        let summary = source.refresh(&mut portfolio).await.unwrap();

        assert_eq!(summary.missing.len(), 5);
        assert_eq!(portfolio.total_value, 0.0);
        assert_eq!(portfolio.total_value_24h_ago, 0.0);
    }
}
