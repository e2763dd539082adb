use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryText {
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResetResponse {
    pub message: String,
}
