use chrono::{DateTime, NaiveDate, Utc};
use std::{env, time::Duration};

use crate::error::{ChallengeError, ChallengeResult};

pub const DEFAULT_CHALLENGE_START: &str = "2025-08-11";
pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_DEXSCREENER_URL: &str = "https://api.dexscreener.com";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ChallengeConfig {
    pub server_domain: String,
    pub db_path: String,
    pub coingecko_url: String,
    pub dexscreener_url: String,
    pub challenge_start: DateTime<Utc>,
    pub refresh_interval: Duration,
    pub user_agent: String,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            server_domain: "127.0.0.1:3000".to_string(),
            db_path: "challenge_db".to_string(),
            coingecko_url: DEFAULT_COINGECKO_URL.to_string(),
            dexscreener_url: DEFAULT_DEXSCREENER_URL.to_string(),
            challenge_start: default_start(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            user_agent: format!("portfolio-challenge/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ChallengeConfig {
    /// Reads the process environment; unset variables keep their defaults.
    pub fn from_env() -> ChallengeResult<Self> {
        let defaults = Self::default();

        let challenge_start = match env::var("CHALLENGE_START") {
            Ok(raw) => parse_start(&raw)?,
            Err(_) => defaults.challenge_start,
        };

        let refresh_interval = match env::var("REFRESH_INTERVAL_SECS") {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    ChallengeError::Config(format!("REFRESH_INTERVAL_SECS `{}`: {}", raw, e))
                })?;
                if secs == 0 {
                    return Err(ChallengeError::Config(
                        "REFRESH_INTERVAL_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            Err(_) => defaults.refresh_interval,
        };

        Ok(Self {
            server_domain: env::var("SERVER_DOMAIN").unwrap_or(defaults.server_domain),
            db_path: env::var("DB_PATH").unwrap_or(defaults.db_path),
            coingecko_url: env::var("COINGECKO_URL").unwrap_or(defaults.coingecko_url),
            dexscreener_url: env::var("DEXSCREENER_URL").unwrap_or(defaults.dexscreener_url),
            challenge_start,
            refresh_interval,
            user_agent: env::var("HTTP_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }
}

/// Accepts either a calendar date (midnight UTC) or a full RFC 3339 instant.
pub fn parse_start(raw: &str) -> ChallengeResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ChallengeError::Config(format!("CHALLENGE_START `{}`: {}", raw, e)))
}

fn default_start() -> DateTime<Utc> {
    parse_start(DEFAULT_CHALLENGE_START).unwrap_or(DateTime::UNIX_EPOCH)
}
