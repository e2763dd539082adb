use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::portfolio::dto::PriceSourceKind;

/// One entry of the lookup-key feed, keyed by asset id in the response map.
#[derive(Debug, Clone, Deserialize)]
pub struct SimplePrice {
    pub usd: Option<f64>,
    pub usd_24h_change: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DexTokenResponse {
    pub pairs: Option<Vec<DexPair>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPair {
    pub price_usd: Option<DexPrice>,
    pub liquidity: Option<DexLiquidity>,
    pub price_change: Option<DexPriceChange>,
}

/// `priceUsd` is normally a decimal string, but some pairs send a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DexPrice {
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone, Deserialize)]
pub struct DexLiquidity {
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DexPriceChange {
    pub h24: Option<f64>,
}

impl DexPair {
    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity.as_ref().and_then(|l| l.usd).unwrap_or(0.0)
    }

    /// Unparseable or missing prices read as zero.
    pub fn price(&self) -> f64 {
        self.price_usd
            .as_ref()
            .and_then(|price| match price {
                DexPrice::Text(text) => text.trim().parse::<f64>().ok(),
                DexPrice::Number(number) => Some(*number),
            })
            .filter(|p| p.is_finite())
            .unwrap_or(0.0)
    }

    pub fn change_24h(&self) -> f64 {
        self.price_change
            .as_ref()
            .and_then(|c| c.h24)
            .unwrap_or(0.0)
    }
}

/// What a single source refresh did to a portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FetchSummary {
    pub priced: Vec<String>,
    pub missing: Vec<String>,
    pub failed: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchStatus {
    Updated { source: PriceSourceKind, summary: FetchSummary },
    Failed { source: PriceSourceKind, message: String },
}
