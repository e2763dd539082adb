use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::portfolio::dto::PortfolioId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VotingState {
    #[serde(default)]
    pub easy_votes: u64,
    #[serde(default)]
    pub clemente_votes: u64,
    #[serde(default)]
    pub has_voted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VoteOutcome {
    Accepted { portfolio: PortfolioId },
    AlreadyVoted,
}

/// Rounded percentage of the total votes held by each portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VoteShares {
    pub easy: u32,
    pub clemente: u32,
}
