use crate::{challenge, error::ErrorServer, info, vote};
use challenge_core::{
    challenge::dto::{ChallengeState, DailySnapshot, SnapshotEntry},
    controller::dto::{ChallengeSummary, RefreshReport, VotingSummary},
    portfolio::dto::{
        Leadership, Performance, Portfolio, PortfolioId, PriceSourceKind, Standings,
        TokenHolding, TokenSource, ValueTone,
    },
    prices::dto::{FetchStatus, FetchSummary},
    voting::dto::{VoteOutcome, VoteShares},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        info::handler::info,
        challenge::handler::summary,
        challenge::handler::summary_text,
        challenge::handler::history,
        challenge::handler::refresh,
        challenge::handler::reset,
        challenge::handler::restart,
        vote::handler::get_votes,
        vote::handler::cast_vote,
    ),
    components(schemas(
        info::dto::Info,
        challenge::dto::SummaryText,
        challenge::dto::ResetResponse,
        vote::dto::VoteRequest,
        vote::dto::VoteResponse,
        ErrorServer,
        ChallengeSummary,
        ChallengeState,
        DailySnapshot,
        SnapshotEntry,
        RefreshReport,
        VotingSummary,
        VoteOutcome,
        VoteShares,
        FetchStatus,
        FetchSummary,
        Portfolio,
        PortfolioId,
        PriceSourceKind,
        TokenHolding,
        TokenSource,
        ValueTone,
        Performance,
        Leadership,
        Standings,
    ))
)]
pub struct ApiDoc;
