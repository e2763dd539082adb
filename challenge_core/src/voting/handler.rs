use super::dto::{VoteOutcome, VoteShares, VotingState};
use crate::portfolio::dto::PortfolioId;

impl VotingState {
    pub fn total_votes(&self) -> u64 {
        self.easy_votes + self.clemente_votes
    }

    /// One vote per client; a second call is rejected without touching the tallies.
    pub fn cast_vote(&mut self, portfolio: PortfolioId) -> VoteOutcome {
        if self.has_voted {
            return VoteOutcome::AlreadyVoted;
        }

        match portfolio {
            PortfolioId::Easy => self.easy_votes += 1,
            PortfolioId::Clemente => self.clemente_votes += 1,
        }
        self.has_voted = true;

        VoteOutcome::Accepted { portfolio }
    }

    pub fn compute_shares(&self) -> VoteShares {
        let total = self.total_votes();
        if total == 0 {
            return VoteShares {
                easy: 50,
                clemente: 50,
            };
        }

        let share = |votes: u64| (votes as f64 / total as f64 * 100.0).round() as u32;
        VoteShares {
            easy: share(self.easy_votes),
            clemente: share(self.clemente_votes),
        }
    }
}
