use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChallengeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unknown portfolio: {0}")]
    UnknownPortfolio(String),
}

pub type ChallengeResult<T> = Result<T, ChallengeError>;
