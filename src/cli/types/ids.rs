//! ID types for players and favorite lists.

use crate::error::{Result, ScoutError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Id of the reserved list that mirrors each player's favorite flag.
pub const DEFAULT_LIST_ID: &str = "default";

/// Type-safe wrapper for player ids.
///
/// The backend hands ids out as strings, but older payloads carry them as bare
/// numbers; both deserialize to the same id.
///
/// # Examples
///
/// ```rust
/// use player_scout::PlayerId;
///
/// let id: PlayerId = serde_json::from_str("28003").unwrap();
/// assert_eq!(id, PlayerId::new("28003"));
/// assert_eq!(id.to_string(), "28003");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ScoutError::validation("player id is empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => PlayerId(s),
            RawId::Number(n) => PlayerId(n.to_string()),
        })
    }
}

/// Type-safe wrapper for favorite list ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved `"default"` list.
    pub fn default_list() -> Self {
        Self(DEFAULT_LIST_ID.to_string())
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LIST_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ScoutError::validation("list id is empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for ListId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
