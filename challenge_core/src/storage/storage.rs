use serde::{Serialize, de::DeserializeOwned};
use sled::{Db, Tree};

use super::dto::StoredPortfolios;
use crate::challenge::dto::ChallengeState;
use crate::error::ChallengeResult;
use crate::portfolio::dto::Portfolios;
use crate::voting::dto::VotingState;

const CHALLENGE_TREE: &str = "challenge";

const PORTFOLIOS_KEY: &str = "portfolios";
const CHALLENGE_DATA_KEY: &str = "challengeData";
const VOTING_DATA_KEY: &str = "votingData";

/// Three independent JSON records in one sled tree.
#[derive(Clone)]
pub struct ChallengeStorage {
    tree: Tree,
}

impl ChallengeStorage {
    pub fn new(db: &Db) -> ChallengeResult<Self> {
        let tree = db.open_tree(CHALLENGE_TREE)?;
        Ok(Self { tree })
    }

    fn put<T: Serialize>(&self, key: &str, value: &T) -> ChallengeResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.tree.insert(key, bytes)?;
        self.tree.flush()?;
        Ok(())
    }

    /// Missing records load as `None`. Unreadable ones are logged and treated as
    /// missing so startup falls back to defaults.
    fn get<T: DeserializeOwned>(&self, key: &str) -> ChallengeResult<Option<T>> {
        match self.tree.get(key)? {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    log::warn!("Ignoring unreadable `{}` record: {}", key, e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub fn save_portfolios(&self, portfolios: &Portfolios) -> ChallengeResult<()> {
        self.put(PORTFOLIOS_KEY, &StoredPortfolios::from(portfolios))
    }

    pub fn load_portfolios(&self) -> ChallengeResult<Option<StoredPortfolios>> {
        self.get(PORTFOLIOS_KEY)
    }

    pub fn save_challenge(&self, challenge: &ChallengeState) -> ChallengeResult<()> {
        self.put(CHALLENGE_DATA_KEY, challenge)
    }

    pub fn load_challenge(&self) -> ChallengeResult<Option<ChallengeState>> {
        self.get(CHALLENGE_DATA_KEY)
    }

    pub fn save_voting(&self, voting: &VotingState) -> ChallengeResult<()> {
        self.put(VOTING_DATA_KEY, voting)
    }

    pub fn load_voting(&self) -> ChallengeResult<Option<VotingState>> {
        self.get(VOTING_DATA_KEY)
    }

    /// Drops every persisted record.
    pub fn clear(&self) -> ChallengeResult<()> {
        self.tree.clear()?;
        self.tree.flush()?;
        Ok(())
    }
}
