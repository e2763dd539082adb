pub mod coingecko;
pub mod dexscreener;
pub mod dto;
pub mod source;

pub use coingecko::CoinGecko;
pub use dexscreener::DexScreener;
pub use source::{PriceSource, PriceSources};
