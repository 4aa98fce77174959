//! Command implementations for the player-scout CLI

pub mod common;
pub mod favorites;
pub mod lists;
pub mod players;

use std::time::Duration;

use crate::{
    api::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS},
    Result, ScoutError, API_URL_ENV_VAR, TIMEOUT_ENV_VAR,
};


/// Resolve the backend URL from the flag, then the environment, then the default.
pub fn resolve_api_url(api_url: Option<String>) -> String {
    pick_api_url(api_url, std::env::var(API_URL_ENV_VAR).ok())
}

/// Resolve the request timeout from the environment.
pub fn resolve_timeout() -> Result<Duration> {
    parse_timeout(std::env::var(TIMEOUT_ENV_VAR).ok())
}

fn pick_api_url(flag: Option<String>, env: Option<String>) -> String {
    let set = |v: &String| !v.trim().is_empty();
    flag.filter(set)
        .or_else(|| env.filter(set))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn parse_timeout(raw: Option<String>) -> Result<Duration> {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ScoutError::InvalidEnvVar {
            env_var: TIMEOUT_ENV_VAR.to_string(),
            value: raw,
        }),
    }
}
