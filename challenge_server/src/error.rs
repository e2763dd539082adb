use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use challenge_core::ChallengeError;
use serde::Serialize;
use utoipa::{ToResponse, ToSchema};

#[derive(Debug, Serialize, ToSchema, ToResponse)]
pub struct ErrorServer {
    pub message: String,
    pub status: u16,
}

impl std::fmt::Display for ErrorServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ErrorServer {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<ChallengeError> for ErrorServer {
    fn from(error: ChallengeError) -> Self {
        let status = match error {
            ChallengeError::UnknownPortfolio(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            message: error.to_string(),
            status: status.into(),
        }
    }
}
