//! Client-side player filtering and ordering.
//!
//! Every active criterion is a predicate; a player is visible only when all of
//! them match. The visible players are then ordered by percentile, highest
//! first. Both stages are pure functions of `(roster, criteria)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{ContractFilter, MarketValueBucket, FREE_AGENT},
    core::parse_market_value,
    store::Player,
};

#[cfg(test)]
mod tests;

/// The full set of filter controls.
///
/// Empty strings and `None` mean "no constraint". Resetting replaces the whole
/// value with `FilterCriteria::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub league: String,
    pub club: String,
    pub position: String,
    pub nationality: String,
    pub foot: String,
    /// Tested against `percentile`, see [`MarketValueBucket`]
    pub market_value_bucket: Option<MarketValueBucket>,
    /// Millions
    pub min_market_value: Option<f64>,
    /// Millions
    pub max_market_value: Option<f64>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
    pub contract: Option<ContractFilter>,
    pub favorites_only: bool,
}

impl FilterCriteria {
    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        active_filters(self).is_empty()
    }
}

/// Filter the roster and order the result by percentile, highest first.
///
/// Ties keep their roster order.
pub fn apply(roster: &[Player], criteria: &FilterCriteria) -> Vec<Player> {
    select(roster, criteria)
        .into_iter()
        .map(|pos| roster[pos].clone())
        .collect()
}

/// Like [`apply`] but returns positions into `roster`.
pub fn select(roster: &[Player], criteria: &FilterCriteria) -> Vec<usize> {
    let mut positions: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(_, player)| matches(player, criteria))
        .map(|(pos, _)| pos)
        .collect();

    // stable: equal percentiles stay in roster order
    positions.sort_by(|&a, &b| roster[b].percentile.cmp(&roster[a].percentile));
    positions
}

/// Stable sort by percentile, highest first.
pub fn sort_by_percentile(players: &mut [Player]) {
    players.sort_by(|a, b| b.percentile.cmp(&a.percentile));
}

/// Check whether a player passes every active criterion.
pub fn matches(player: &Player, criteria: &FilterCriteria) -> bool {
    matches_search(player, &criteria.search)
        && matches_exact(&criteria.league, &player.league)
        && matches_exact(&criteria.club, &player.club)
        && matches_exact(&criteria.position, &player.position)
        && matches_exact(&criteria.nationality, &player.nationality)
        && matches_exact(&criteria.foot, player.foot.as_deref().unwrap_or(""))
        && criteria
            .market_value_bucket
            .map_or(true, |bucket| bucket.contains(player.percentile))
        && matches_range(
            parse_market_value(&player.market_value),
            criteria.min_market_value,
            criteria.max_market_value,
        )
        // absent age/height count as 0
        && matches_range(player.age.unwrap_or(0), criteria.min_age, criteria.max_age)
        && matches_range(
            player.height.unwrap_or(0),
            criteria.min_height,
            criteria.max_height,
        )
        && criteria
            .contract
            .as_ref()
            .map_or(true, |contract| matches_contract(player, contract))
        && (!criteria.favorites_only || player.favorite)
}

/// Case-insensitive substring search over name, club, nationality and position.
pub fn matches_search(player: &Player, search: &str) -> bool {
    let term = search.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    [
        &player.name,
        &player.club,
        &player.nationality,
        &player.position,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

/// Exact, case-sensitive equality; an empty criterion always matches.
pub fn matches_exact(criterion: &str, value: &str) -> bool {
    criterion.is_empty() || criterion == value
}

/// Inclusive bounds check; unset bounds do not constrain.
pub fn matches_range<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

/// Free agents match on the exact sentinel text; otherwise the year component
/// of a `DD.MM.YYYY` contract date must equal the requested year.
pub fn matches_contract(player: &Player, filter: &ContractFilter) -> bool {
    let Some(contract) = player.contract.as_deref() else {
        return false;
    };

    match filter {
        ContractFilter::FreeAgent => contract == FREE_AGENT,
        ContractFilter::ExpiresIn(year) => contract.split('.').nth(2) == Some(year.as_str()),
    }
}

/// One active criterion, as shown in the active-filter summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveFilter {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}: {}", self.label, self.value)
        }
    }
}

/// Summarize the active criteria in a fixed order.
pub fn active_filters(criteria: &FilterCriteria) -> Vec<ActiveFilter> {
    fn push(out: &mut Vec<ActiveFilter>, label: &'static str, value: impl Into<String>) {
        out.push(ActiveFilter {
            label,
            value: value.into(),
        });
    }

    fn bounds<T: fmt::Display>(min: Option<T>, max: Option<T>, unit: &str) -> Option<String> {
        match (min, max) {
            (None, None) => None,
            (Some(min), None) => Some(format!(">= {min}{unit}")),
            (None, Some(max)) => Some(format!("<= {max}{unit}")),
            (Some(min), Some(max)) => Some(format!("{min}-{max}{unit}")),
        }
    }

    let mut out = Vec::new();
    let search = criteria.search.trim();
    if !search.is_empty() {
        push(&mut out, "Search", search);
    }
    for (label, value) in [
        ("League", &criteria.league),
        ("Club", &criteria.club),
        ("Position", &criteria.position),
        ("Nationality", &criteria.nationality),
        ("Foot", &criteria.foot),
    ] {
        if !value.is_empty() {
            push(&mut out, label, value.as_str());
        }
    }
    if let Some(bucket) = criteria.market_value_bucket {
        push(&mut out, "Value", bucket.to_string());
    }
    if let Some(range) = bounds(criteria.min_market_value, criteria.max_market_value, "m") {
        push(&mut out, "Market value", range);
    }
    if let Some(range) = bounds(criteria.min_age, criteria.max_age, "") {
        push(&mut out, "Age", range);
    }
    if let Some(range) = bounds(criteria.min_height, criteria.max_height, "cm") {
        push(&mut out, "Height", range);
    }
    if let Some(contract) = &criteria.contract {
        push(&mut out, "Contract", contract.to_string());
    }
    if criteria.favorites_only {
        push(&mut out, "Only Favorites", "");
    }
    out
}

/// Display tier of a percentile badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentileTier {
    Elite,
    Good,
    Average,
    Below,
}

impl PercentileTier {
    pub fn from_percentile(percentile: u8) -> Self {
        match percentile {
            90.. => PercentileTier::Elite,
            70..=89 => PercentileTier::Good,
            40..=69 => PercentileTier::Average,
            _ => PercentileTier::Below,
        }
    }
}

impl fmt::Display for PercentileTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PercentileTier::Elite => "elite",
            PercentileTier::Good => "good",
            PercentileTier::Average => "average",
            PercentileTier::Below => "below",
        };
        write!(f, "{}", s)
    }
}
