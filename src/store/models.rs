//! Data models for the in-memory store

use crate::cli::types::PlayerId;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Display format of comment timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Percentile rank as sent by the backend; floats are rounded and clamped to 0..=100.
fn de_percentile<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0))
}

/// Integer attribute that may arrive as a number, a numeric string or null.
fn de_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) if n.is_finite() && n >= 0.0 => Some(n.round() as u32),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Comments arrive as a sequence, or in the legacy shape as one plain string.
fn de_comments<'de, D>(deserializer: D) -> Result<Vec<Comment>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Many(Vec<Comment>),
        Legacy(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Many(comments)) => comments,
        Some(Raw::Legacy(text)) if !text.trim().is_empty() => vec![Comment::now(text)],
        _ => Vec::new(),
    })
}

/// A player record as served by `GET /api/players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub club: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub nationality: String,
    /// Display string, e.g. `€12.50m`
    #[serde(default)]
    pub market_value: String,
    /// Externally computed 0-100 rank; the only sort key
    #[serde(default, deserialize_with = "de_percentile")]
    pub percentile: u8,
    #[serde(default)]
    pub favorite: bool,
    /// Chronological, oldest first
    #[serde(default, deserialize_with = "de_comments")]
    pub comments: Vec<Comment>,
    #[serde(default, deserialize_with = "de_opt_u32")]
    pub age: Option<u32>,
    /// Centimetres
    #[serde(default, deserialize_with = "de_opt_u32")]
    pub height: Option<u32>,
    #[serde(default)]
    pub foot: Option<String>,
    /// Expiry date as `DD.MM.YYYY`, or `Free agent`
    #[serde(default)]
    pub contract: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub club_badge_url: Option<String>,
}

impl Player {
    /// A player with only the identifying fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            club: String::new(),
            league: String::new(),
            position: String::new(),
            nationality: String::new(),
            market_value: String::new(),
            percentile: 0,
            favorite: false,
            comments: Vec::new(),
            age: None,
            height: None,
            foot: None,
            contract: None,
            photo_url: None,
            club_badge_url: None,
        }
    }
}

/// A timestamped note attached to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    #[serde(default)]
    pub timestamp: String,
}

impl Comment {
    pub fn new(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Stamp a comment with the local clock.
    pub fn now(text: impl Into<String>) -> Self {
        Self::new(text, chrono::Local::now().format(TIMESTAMP_FORMAT).to_string())
    }
}

/// A named collection of players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteList {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "players", default)]
    pub members: BTreeSet<PlayerId>,
}

impl FavoriteList {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            members: BTreeSet::new(),
        }
    }
}

/// Distinct selector values present in the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub clubs: Vec<String>,
    pub leagues: Vec<String>,
    pub positions: Vec<String>,
    pub nationalities: Vec<String>,
    pub feet: Vec<String>,
}
