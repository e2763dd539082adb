use std::sync::Arc;

use axum::{Json, extract::State};
use challenge_core::{
    challenge::dto::{ChallengeState, DailySnapshot},
    controller::dto::{ChallengeSummary, RefreshReport},
    render::render_summary,
};

use super::dto::{ResetResponse, SummaryText};
use crate::{error::ErrorServer, state::ServerState};

#[utoipa::path(
    get,
    path = "/challenge",
    description = "Current day, both portfolios, standings and votes",
    responses(
        (status = 200, description = "Success", body = ChallengeSummary),
    )
)]
pub async fn summary(State(server_state): State<Arc<ServerState>>) -> Json<ChallengeSummary> {
    Json(server_state.controller().summary().await)
}

#[utoipa::path(
    get,
    path = "/challenge/text",
    description = "Plain-text rendering of the challenge summary",
    responses(
        (status = 200, description = "Success", body = SummaryText),
    )
)]
pub async fn summary_text(State(server_state): State<Arc<ServerState>>) -> Json<SummaryText> {
    let summary = server_state.controller().summary().await;

    Json(SummaryText {
        text: render_summary(&summary),
    })
}

#[utoipa::path(
    get,
    path = "/challenge/history",
    description = "Daily snapshots, oldest first, at most 30",
    responses(
        (status = 200, description = "Success", body = Vec<DailySnapshot>),
    )
)]
pub async fn history(State(server_state): State<Arc<ServerState>>) -> Json<Vec<DailySnapshot>> {
    Json(server_state.controller().history().await)
}

#[utoipa::path(
    post,
    path = "/challenge/refresh",
    description = "Fetch both portfolios now and record a snapshot",
    responses(
        (status = 200, description = "Success", body = RefreshReport),
    )
)]
pub async fn refresh(State(server_state): State<Arc<ServerState>>) -> Json<RefreshReport> {
    log::info!("Fetching latest prices...");
    let report = server_state.controller().refresh().await;
    Json(report)
}

#[utoipa::path(
    post,
    path = "/challenge/reset",
    description = "Clear all persisted data, votes included, and reload defaults",
    responses(
        (status = 200, description = "Success", body = ResetResponse),
        (status = 500, description = "Internal Server Error", body = ErrorServer),
    )
)]
pub async fn reset(
    State(server_state): State<Arc<ServerState>>,
) -> Result<Json<ResetResponse>, ErrorServer> {
    server_state.controller().reset().await?;

    Ok(Json(ResetResponse {
        message: "Challenge reset".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/challenge/restart",
    description = "Start a new challenge from the configured start date, keeping votes",
    responses(
        (status = 200, description = "Success", body = ChallengeState),
        (status = 500, description = "Internal Server Error", body = ErrorServer),
    )
)]
pub async fn restart(
    State(server_state): State<Arc<ServerState>>,
) -> Result<Json<ChallengeState>, ErrorServer> {
    let challenge = server_state.controller().restart().await?;
    Ok(Json(challenge))
}
