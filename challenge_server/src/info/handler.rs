use std::sync::Arc;

use axum::{Json, extract::State};
use challenge_core::challenge::clock::CHALLENGE_DAYS;

use super::dto::Info;
use crate::state::ServerState;

#[utoipa::path(
    get,
    path = "/",
    description = "Service name, version and current challenge day",
    responses(
        (status = 200, description = "Success", body = Info),
    )
)]
pub async fn info(State(server_state): State<Arc<ServerState>>) -> Json<Info> {
    let clock = server_state.controller().clock();

    Json(Info {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: challenge_core::VERSION.to_string(),
        day: clock.today(),
        challenge_days: CHALLENGE_DAYS,
    })
}
