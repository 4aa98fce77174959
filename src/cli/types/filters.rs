//! Filter value types for the player list.

use crate::error::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contract text the backend uses for players without a club contract.
pub const FREE_AGENT: &str = "Free agent";

/// Coarse percentile tier selected through the "market value" control.
///
/// Despite the name, membership is decided by the player's `percentile`, not by
/// the parsed market value. The thresholds are fixed:
///
/// - **Elite**: percentile >= 90
/// - **High**: 70 <= percentile < 90
/// - **Medium**: 40 <= percentile < 70
/// - **Low**: percentile < 40
///
/// # Examples
///
/// ```rust
/// use player_scout::MarketValueBucket;
///
/// assert!(MarketValueBucket::Elite.contains(90));
/// assert!(!MarketValueBucket::High.contains(90));
/// assert_eq!(MarketValueBucket::Low.to_string(), "Low (<40%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarketValueBucket {
    /// Percentile 90 and above
    Elite,
    /// Percentile 70 to 89
    High,
    /// Percentile 40 to 69
    Medium,
    /// Percentile below 40
    Low,
}

impl MarketValueBucket {
    /// Whether a percentile falls inside this tier.
    pub fn contains(&self, percentile: u8) -> bool {
        match self {
            MarketValueBucket::Elite => percentile >= 90,
            MarketValueBucket::High => (70..90).contains(&percentile),
            MarketValueBucket::Medium => (40..70).contains(&percentile),
            MarketValueBucket::Low => percentile < 40,
        }
    }
}

impl fmt::Display for MarketValueBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MarketValueBucket::Elite => "Elite (90%+)",
            MarketValueBucket::High => "High (70-89%)",
            MarketValueBucket::Medium => "Medium (40-69%)",
            MarketValueBucket::Low => "Low (<40%)",
        };
        write!(f, "{}", s)
    }
}

/// Contract criterion: either free agents, or contracts expiring in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractFilter {
    /// Contract text equals [`FREE_AGENT`]
    FreeAgent,
    /// Year component of a `DD.MM.YYYY` expiry date
    ExpiresIn(String),
}

impl fmt::Display for ContractFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractFilter::FreeAgent => write!(f, "{}", FREE_AGENT),
            ContractFilter::ExpiresIn(year) => write!(f, "Expires {}", year),
        }
    }
}

impl FromStr for ContractFilter {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err(ScoutError::validation("contract filter is empty")),
            "free" | "free-agent" | "free_agent" | "free agent" => Ok(ContractFilter::FreeAgent),
            _ => Ok(ContractFilter::ExpiresIn(trimmed.to_string())),
        }
    }
}
