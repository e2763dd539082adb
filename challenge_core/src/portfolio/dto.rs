use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::error::ChallengeError;

/// Starting value of every portfolio in the challenge, in USD.
pub const INITIAL_VALUE: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioId {
    Easy,
    Clemente,
}

impl PortfolioId {
    pub fn key(&self) -> &'static str {
        match self {
            PortfolioId::Easy => "easy",
            PortfolioId::Clemente => "clemente",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PortfolioId::Easy => "Easy",
            PortfolioId::Clemente => "Clemente",
        }
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for PortfolioId {
    type Err = ChallengeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(PortfolioId::Easy),
            "clemente" => Ok(PortfolioId::Clemente),
            other => Err(ChallengeError::UnknownPortfolio(other.to_string())),
        }
    }
}

/// Which price feed a portfolio is valued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PriceSourceKind {
    CoinGecko,
    DexScreener,
}

impl fmt::Display for PriceSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceSourceKind::CoinGecko => write!(f, "coingecko"),
            PriceSourceKind::DexScreener => write!(f, "dexscreener"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenSource {
    /// Asset identified by a symbolic id on a lookup-key feed.
    LookupKey { id: String },
    /// Asset identified by its on-chain contract address.
    Address { contract_address: Option<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenHolding {
    pub symbol: String,
    pub source: TokenSource,
    pub chain: String,
    pub amount: f64,
    pub image: String,
    pub current_price: Option<f64>,
    pub change_24h: Option<f64>,
}

impl TokenHolding {
    pub fn lookup(symbol: &str, id: &str, amount: f64, chain: &str, image: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            source: TokenSource::LookupKey { id: id.to_string() },
            chain: chain.to_string(),
            amount,
            image: image.to_string(),
            current_price: None,
            change_24h: None,
        }
    }

    pub fn address(
        symbol: &str,
        contract_address: Option<&str>,
        amount: f64,
        chain: &str,
        image: &str,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            source: TokenSource::Address {
                contract_address: contract_address.map(str::to_string),
            },
            chain: chain.to_string(),
            amount,
            image: image.to_string(),
            current_price: None,
            change_24h: None,
        }
    }

    pub fn lookup_key(&self) -> Option<&str> {
        match &self.source {
            TokenSource::LookupKey { id } => Some(id.as_str()),
            TokenSource::Address { .. } => None,
        }
    }

    pub fn contract_address(&self) -> Option<&str> {
        match &self.source {
            TokenSource::Address { contract_address } => contract_address.as_deref(),
            TokenSource::LookupKey { .. } => None,
        }
    }

    pub fn set_quote(&mut self, price: f64, change_24h: f64) {
        self.current_price = Some(price);
        self.change_24h = Some(change_24h);
    }

    pub fn clear_quote(&mut self) {
        self.current_price = None;
        self.change_24h = None;
    }

    /// Current holding value, zero while the price is unknown.
    pub fn value(&self) -> f64 {
        self.amount * self.current_price.unwrap_or(0.0)
    }
}

/// Profit/loss tone of a portfolio against its starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValueTone {
    Above,
    Below,
    Even,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Portfolio {
    pub id: PortfolioId,
    pub name: String,
    pub source: PriceSourceKind,
    pub holdings: Vec<TokenHolding>,
    pub total_value: f64,
    pub total_value_24h_ago: f64,
    pub initial_value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub total_value: f64,
    pub total_value_24h_ago: f64,
}

#[derive(Debug, Clone)]
pub struct Portfolios {
    pub easy: Portfolio,
    pub clemente: Portfolio,
}

impl Portfolios {
    pub fn get_mut(&mut self, id: PortfolioId) -> &mut Portfolio {
        match id {
            PortfolioId::Easy => &mut self.easy,
            PortfolioId::Clemente => &mut self.clemente,
        }
    }

    pub fn replace(&mut self, portfolio: Portfolio) {
        let id = portfolio.id;
        *self.get_mut(id) = portfolio;
    }
}

/// Derived figures for one portfolio after a refresh.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Performance {
    pub portfolio: PortfolioId,
    pub total_value: f64,
    pub total_value_24h_ago: f64,
    pub initial_value: f64,
    pub change_from_initial: f64,
    pub change_24h: f64,
    pub tone: ValueTone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Leadership {
    Leading { leader: PortfolioId, margin: f64 },
    Tied,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Standings {
    pub easy: Performance,
    pub clemente: Performance,
    pub leadership: Leadership,
}
