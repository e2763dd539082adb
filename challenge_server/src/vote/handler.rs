use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use challenge_core::{
    controller::dto::VotingSummary, portfolio::dto::PortfolioId, voting::dto::VoteOutcome,
};

use super::dto::{VoteRequest, VoteResponse};
use crate::{error::ErrorServer, state::ServerState};

#[utoipa::path(
    get,
    path = "/votes",
    description = "Vote counts and rounded shares",
    responses(
        (status = 200, description = "Success", body = VotingSummary),
    )
)]
pub async fn get_votes(State(server_state): State<Arc<ServerState>>) -> Json<VotingSummary> {
    Json(server_state.controller().voting().await)
}

#[utoipa::path(
    post,
    path = "/votes",
    description = "Cast the single vote this dashboard is allowed",
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote recorded", body = VoteResponse),
        (status = 409, description = "A vote was already cast", body = VoteResponse),
        (status = 400, description = "Unknown portfolio", body = ErrorServer),
        (status = 500, description = "Internal Server Error", body = ErrorServer),
    )
)]
pub async fn cast_vote(
    State(server_state): State<Arc<ServerState>>,
    Json(request): Json<VoteRequest>,
) -> Result<Response, ErrorServer> {
    let portfolio = request.portfolio.parse::<PortfolioId>()?;
    let controller = server_state.controller();

    let outcome = controller.cast_vote(portfolio).await?;
    let status = match outcome {
        VoteOutcome::Accepted { .. } => StatusCode::OK,
        VoteOutcome::AlreadyVoted => StatusCode::CONFLICT,
    };

    let body = VoteResponse {
        outcome,
        voting: controller.voting().await,
    };

    Ok((status, Json(body)).into_response())
}
