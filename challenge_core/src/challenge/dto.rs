use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use utoipa::ToSchema;

use crate::portfolio::dto::Portfolio;

/// Maximum number of daily snapshots retained.
pub const MAX_HISTORY: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    pub total_value: f64,
    pub change_24h: f64,
}

impl From<&Portfolio> for SnapshotEntry {
    fn from(portfolio: &Portfolio) -> Self {
        Self {
            total_value: finite_or_zero(portfolio.total_value),
            change_24h: portfolio.change_24h(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailySnapshot {
    pub date: DateTime<Utc>,
    pub day: u32,
    pub easy: SnapshotEntry,
    pub clemente: SnapshotEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeState {
    pub start_date: DateTime<Utc>,
    pub current_day: u32,
    #[serde(rename = "historicalData", default)]
    #[schema(value_type = Vec<DailySnapshot>)]
    pub history: VecDeque<DailySnapshot>,
}

impl ChallengeState {
    pub fn new(start_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            current_day: 1,
            history: VecDeque::new(),
        }
    }

    /// Appends a snapshot, dropping the oldest ones beyond [`MAX_HISTORY`].
    pub fn push_snapshot(&mut self, snapshot: DailySnapshot) {
        self.history.push_back(snapshot);
        self.trim_history();
    }

    /// Drops the oldest snapshots beyond [`MAX_HISTORY`].
    pub fn trim_history(&mut self) {
        while self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
