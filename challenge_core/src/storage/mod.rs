pub mod dto;
pub mod storage;

pub use storage::ChallengeStorage;
