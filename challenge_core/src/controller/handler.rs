use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use super::dto::{AppState, ChallengeSummary, RefreshReport, VotingSummary};
use crate::challenge::clock::{CHALLENGE_DAYS, ChallengeClock};
use crate::challenge::dto::{ChallengeState, DailySnapshot, SnapshotEntry};
use crate::error::ChallengeResult;
use crate::portfolio::dto::{INITIAL_VALUE, Portfolio, PortfolioId, Portfolios, PriceSourceKind};
use crate::portfolio::handler::standings;
use crate::portfolio::roster::default_portfolios;
use crate::prices::dto::{FetchStatus, FetchSummary};
use crate::prices::source::PriceSources;
use crate::storage::ChallengeStorage;
use crate::voting::dto::VoteOutcome;

/// Owns the application state and runs every load/mutate/persist cycle.
///
/// Refresh cycles are serialized by `refresh_guard`: timer ticks skip while a
/// cycle is in flight, manual refreshes and resets wait for it.
pub struct ChallengeController {
    state: RwLock<AppState>,
    storage: ChallengeStorage,
    sources: PriceSources,
    clock: ChallengeClock,
    refresh_guard: Mutex<()>,
}

impl ChallengeController {
    pub fn load(
        storage: ChallengeStorage,
        sources: PriceSources,
        clock: ChallengeClock,
    ) -> ChallengeResult<Self> {
        let state = Self::restore(&storage, &clock, Utc::now())?;

        log::info!(
            "Loaded challenge starting {} (day {}/{}), {} snapshots, {} votes",
            state.challenge.start_date.format("%Y-%m-%d"),
            state.challenge.current_day,
            CHALLENGE_DAYS,
            state.challenge.history.len(),
            state.voting.total_votes()
        );

        Ok(Self {
            state: RwLock::new(state),
            storage,
            sources,
            clock,
            refresh_guard: Mutex::new(()),
        })
    }

    fn restore(
        storage: &ChallengeStorage,
        clock: &ChallengeClock,
        now: DateTime<Utc>,
    ) -> ChallengeResult<AppState> {
        let mut state = Self::fresh_state(clock, now);

        if let Some(stored) = storage.load_portfolios()? {
            stored.apply_to(&mut state.portfolios);
        }
        if let Some(mut challenge) = storage.load_challenge()? {
            challenge.start_date = clock.start();
            challenge.current_day = clock.current_day(now);
            challenge.trim_history();
            state.challenge = challenge;
        }
        if let Some(voting) = storage.load_voting()? {
            state.voting = voting;
        }

        Ok(state)
    }

    fn fresh_state(clock: &ChallengeClock, now: DateTime<Utc>) -> AppState {
        let mut challenge = ChallengeState::new(clock.start());
        challenge.current_day = clock.current_day(now);

        AppState {
            portfolios: default_portfolios(),
            challenge,
            voting: Default::default(),
            last_refresh: None,
        }
    }

    pub fn clock(&self) -> ChallengeClock {
        self.clock
    }

    /// Runs a full fetch-aggregate-persist cycle, waiting for any cycle in flight.
    pub async fn refresh(&self) -> RefreshReport {
        let _guard = self.refresh_guard.lock().await;
        self.run_cycle(Utc::now()).await
    }

    /// Like [`refresh`](Self::refresh) but returns `None` instead of waiting when
    /// another cycle is still running.
    pub async fn try_refresh(&self) -> Option<RefreshReport> {
        let _guard = self.refresh_guard.try_lock().ok()?;
        Some(self.run_cycle(Utc::now()).await)
    }

    async fn run_cycle(&self, now: DateTime<Utc>) -> RefreshReport {
        let (mut easy, mut clemente) = {
            let state = self.state.read().await;
            (
                state.portfolios.easy.clone(),
                state.portfolios.clemente.clone(),
            )
        };

        let easy_source = self.sources.for_kind(easy.source);
        let clemente_source = self.sources.for_kind(clemente.source);

        let (easy_result, clemente_result) = tokio::join!(
            easy_source.refresh(&mut easy),
            clemente_source.refresh(&mut clemente)
        );

        let mut state = self.state.write().await;
        let easy_status = settle(&mut state.portfolios, easy, easy_source.kind(), easy_result);
        let clemente_status = settle(
            &mut state.portfolios,
            clemente,
            clemente_source.kind(),
            clemente_result,
        );

        let standings = standings(&state.portfolios.easy, &state.portfolios.clemente);
        let day = self.clock.current_day(now);

        let snapshot = DailySnapshot {
            date: now,
            day,
            easy: SnapshotEntry::from(&state.portfolios.easy),
            clemente: SnapshotEntry::from(&state.portfolios.clemente),
        };
        state.challenge.current_day = day;
        state.challenge.push_snapshot(snapshot);

        if let Err(e) = self.storage.save_portfolios(&state.portfolios) {
            log::error!("Failed to persist portfolio values: {}", e);
        }
        if let Err(e) = self.storage.save_challenge(&state.challenge) {
            log::error!("Failed to persist challenge data: {}", e);
        }

        let report = RefreshReport {
            completed_at: now,
            day,
            easy: easy_status,
            clemente: clemente_status,
            standings,
        };
        state.last_refresh = Some(report.clone());
        report
    }

    pub async fn cast_vote(&self, portfolio: PortfolioId) -> ChallengeResult<VoteOutcome> {
        let mut state = self.state.write().await;

        let mut voting = state.voting.clone();
        let outcome = voting.cast_vote(portfolio);

        match outcome {
            VoteOutcome::Accepted { .. } => {
                self.storage.save_voting(&voting)?;
                state.voting = voting;
                log::info!("Vote recorded for {}", portfolio.display_name());
            }
            VoteOutcome::AlreadyVoted => {
                log::info!("Vote for {} rejected: already voted", portfolio.display_name());
            }
        }

        Ok(outcome)
    }

    pub async fn voting(&self) -> VotingSummary {
        VotingSummary::from(&self.state.read().await.voting)
    }

    /// Clears every persisted record and goes back to defaults.
    pub async fn reset(&self) -> ChallengeResult<()> {
        let _guard = self.refresh_guard.lock().await;
        let mut state = self.state.write().await;

        self.storage.clear()?;
        *state = Self::fresh_state(&self.clock, Utc::now());

        log::info!("Challenge reset, all persisted data cleared");
        Ok(())
    }

    /// Starts the challenge over from the configured start date, keeping votes.
    pub async fn restart(&self) -> ChallengeResult<ChallengeState> {
        let _guard = self.refresh_guard.lock().await;
        let mut state = self.state.write().await;

        let mut challenge = ChallengeState::new(self.clock.start());
        challenge.current_day = self.clock.today();
        let mut portfolios = state.portfolios.clone();
        portfolios.easy.initial_value = INITIAL_VALUE;
        portfolios.clemente.initial_value = INITIAL_VALUE;

        self.storage.save_portfolios(&portfolios)?;
        self.storage.save_challenge(&challenge)?;
        state.portfolios = portfolios;
        state.challenge = challenge.clone();

        log::info!(
            "New challenge started on {}",
            challenge.start_date.format("%Y-%m-%d")
        );
        Ok(challenge)
    }

    pub async fn history(&self) -> Vec<DailySnapshot> {
        self.state
            .read()
            .await
            .challenge
            .history
            .iter()
            .cloned()
            .collect()
    }

    pub async fn summary(&self) -> ChallengeSummary {
        self.summary_at(Utc::now()).await
    }

    pub async fn summary_at(&self, now: DateTime<Utc>) -> ChallengeSummary {
        let state = self.state.read().await;

        ChallengeSummary {
            day: self.clock.current_day(now),
            challenge_days: CHALLENGE_DAYS,
            start_date: state.challenge.start_date,
            easy: state.portfolios.easy.clone(),
            clemente: state.portfolios.clemente.clone(),
            standings: standings(&state.portfolios.easy, &state.portfolios.clemente),
            voting: VotingSummary::from(&state.voting),
            last_refresh: state.last_refresh.clone(),
        }
    }
}

/// Keeps the refreshed portfolio on success, the last known one on failure.
fn settle(
    portfolios: &mut Portfolios,
    refreshed: Portfolio,
    source: PriceSourceKind,
    result: ChallengeResult<FetchSummary>,
) -> FetchStatus {
    match result {
        Ok(summary) => {
            log::info!(
                "{} portfolio updated from {}: {} priced, {} missing, {} failed",
                refreshed.name,
                source,
                summary.priced.len(),
                summary.missing.len(),
                summary.failed.len()
            );
            portfolios.replace(refreshed);
            FetchStatus::Updated { source, summary }
        }
        Err(e) => {
            log::error!(
                "Error fetching {} prices for {}'s portfolio: {}",
                source,
                refreshed.name,
                e
            );
            FetchStatus::Failed {
                source,
                message: e.to_string(),
            }
        }
    }
}
