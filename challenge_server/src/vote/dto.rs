use challenge_core::{controller::dto::VotingSummary, voting::dto::VoteOutcome};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    /// `easy` or `clemente`, case-insensitive.
    #[schema(example = "easy")]
    pub portfolio: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VoteResponse {
    pub outcome: VoteOutcome,
    pub voting: VotingSummary,
}
