use chrono::{DateTime, Utc};

/// Length of the challenge in days.
pub const CHALLENGE_DAYS: u32 = 30;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy)]
pub struct ChallengeClock {
    start: DateTime<Utc>,
}

impl ChallengeClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { start }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// 1-based challenge day at `now`, clamped to `1..=CHALLENGE_DAYS`.
    pub fn current_day(&self, now: DateTime<Utc>) -> u32 {
        let elapsed = (now - self.start).num_milliseconds();
        let day = elapsed.div_euclid(MILLIS_PER_DAY) + 1;
        day.clamp(1, CHALLENGE_DAYS as i64) as u32
    }

    pub fn today(&self) -> u32 {
        self.current_day(Utc::now())
    }
}
