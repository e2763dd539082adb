use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

use super::{coingecko::CoinGecko, dexscreener::DexScreener, dto::FetchSummary};
use crate::error::ChallengeResult;
use crate::helpers::config::ChallengeConfig;
use crate::portfolio::dto::{Portfolio, PriceSourceKind};

/// A remote price feed able to revalue a portfolio in place.
///
/// On `Err` the portfolio must be left exactly as it was passed in, so the
/// caller keeps its last known totals.
#[async_trait]
pub trait PriceSource: Send + Sync {
    fn kind(&self) -> PriceSourceKind;

    async fn refresh(&self, portfolio: &mut Portfolio) -> ChallengeResult<FetchSummary>;
}

/// One source per [`PriceSourceKind`], picked by the portfolio's tag.
#[derive(Clone)]
pub struct PriceSources {
    coingecko: Arc<dyn PriceSource>,
    dexscreener: Arc<dyn PriceSource>,
}

impl PriceSources {
    pub fn new(coingecko: Arc<dyn PriceSource>, dexscreener: Arc<dyn PriceSource>) -> Self {
        Self {
            coingecko,
            dexscreener,
        }
    }

    pub fn from_config(config: &ChallengeConfig) -> ChallengeResult<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self::new(
            Arc::new(CoinGecko::new(client.clone(), &config.coingecko_url)),
            Arc::new(DexScreener::new(client, &config.dexscreener_url)),
        ))
    }

    pub fn for_kind(&self, kind: PriceSourceKind) -> Arc<dyn PriceSource> {
        match kind {
            PriceSourceKind::CoinGecko => self.coingecko.clone(),
            PriceSourceKind::DexScreener => self.dexscreener.clone(),
        }
    }
}
