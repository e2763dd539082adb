//! Core of the 30-day portfolio challenge: fixed portfolios valued from two
//! public price feeds, a challenge clock with a capped daily history, and a
//! one-vote-per-client poll, all persisted in sled.

pub mod challenge;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod portfolio;
pub mod prices;
pub mod render;
pub mod storage;
pub mod voting;

pub use controller::ChallengeController;
pub use error::{ChallengeError, ChallengeResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
