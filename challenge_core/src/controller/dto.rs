use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::challenge::dto::ChallengeState;
use crate::portfolio::dto::{Portfolio, Portfolios, Standings};
use crate::prices::dto::FetchStatus;
use crate::voting::dto::{VoteShares, VotingState};

/// Everything the process mutates, owned by the controller.
#[derive(Debug, Clone)]
pub struct AppState {
    pub portfolios: Portfolios,
    pub challenge: ChallengeState,
    pub voting: VotingState,
    pub last_refresh: Option<RefreshReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshReport {
    pub completed_at: DateTime<Utc>,
    pub day: u32,
    pub easy: FetchStatus,
    pub clemente: FetchStatus,
    pub standings: Standings,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VotingSummary {
    pub easy_votes: u64,
    pub clemente_votes: u64,
    pub total_votes: u64,
    pub has_voted: bool,
    pub shares: VoteShares,
}

impl From<&VotingState> for VotingSummary {
    fn from(voting: &VotingState) -> Self {
        Self {
            easy_votes: voting.easy_votes,
            clemente_votes: voting.clemente_votes,
            total_votes: voting.total_votes(),
            has_voted: voting.has_voted,
            shares: voting.compute_shares(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChallengeSummary {
    pub day: u32,
    pub challenge_days: u32,
    pub start_date: DateTime<Utc>,
    pub easy: Portfolio,
    pub clemente: Portfolio,
    pub standings: Standings,
    pub voting: VotingSummary,
    pub last_refresh: Option<RefreshReport>,
}
